//! Log records and their single-line encoding.

use std::backtrace::Backtrace;
use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::level::Level;

/// Free-form string properties attached to a record. Keys serialize sorted.
pub type Properties = BTreeMap<String, String>;

/// Prefix of the line written when a record cannot be serialized.
pub const MARSHAL_FALLBACK_PREFIX: &str = "ERROR: unable to marshal log message: ";

/// One structured log event.
///
/// Field order here is the field order on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord<'a> {
    pub level: &'static str,
    pub time: String,
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<&'a Properties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

impl<'a> LogRecord<'a> {
    /// Build a record stamped with the current UTC time.
    ///
    /// Empty property maps are dropped. Records at `Error` and above carry a
    /// snapshot of the calling thread's stack.
    pub fn new(level: Level, message: &'a str, properties: Option<&'a Properties>) -> Self {
        Self {
            level: level.as_str(),
            time: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            message,
            properties: properties.filter(|p| !p.is_empty()),
            trace: level
                .captures_trace()
                .then(|| Backtrace::force_capture().to_string()),
        }
    }
}

/// Serialize `record` as one newline-terminated JSON line.
///
/// Never fails: if serialization errors, the line becomes
/// `ERROR: unable to marshal log message: <error>` instead.
pub fn encode_line<T: Serialize + ?Sized>(record: &T) -> Vec<u8> {
    let mut line = match serde_json::to_vec(record) {
        Ok(line) => line,
        Err(e) => format!("{}{}", MARSHAL_FALLBACK_PREFIX, e).into_bytes(),
    };
    line.push(b'\n');
    line
}
