//! Severity levels.
//!
//! Levels are totally ordered `Info < Error < Fatal < Off`. The ordering is
//! the only thing the logger looks at when filtering; `Off` exists purely as
//! a threshold that suppresses everything.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::Error;

/// Severity of a log message, or the minimum severity a logger emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Level {
    #[default]
    Info,
    Error,
    Fatal,
    Off,
}

impl Level {
    /// Display name used in the `level` field. `Off` never tags a record and
    /// has an empty name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Off => "",
        }
    }

    /// Whether records at this level carry a stack trace.
    pub fn captures_trace(&self) -> bool {
        *self >= Level::Error
    }

    /// Map a `log` crate level onto ours.
    ///
    /// Warnings are promoted to `Error`; debug and trace collapse into `Info`
    /// (the bridge refuses them before this is reached).
    pub fn from_log(level: log::Level) -> Self {
        match level {
            log::Level::Error | log::Level::Warn => Level::Error,
            log::Level::Info | log::Level::Debug | log::Level::Trace => Level::Info,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Level::Info),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            "off" => Ok(Level::Off),
            _ => Err(Error::UnknownLevel(s.to_string())),
        }
    }
}

impl TryFrom<String> for Level {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Error> {
        value.parse()
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Level::Off => serializer.serialize_str("OFF"),
            other => serializer.serialize_str(other.as_str()),
        }
    }
}

impl From<Level> for log::LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::Info => log::LevelFilter::Info,
            Level::Error | Level::Fatal => log::LevelFilter::Error,
            Level::Off => log::LevelFilter::Off,
        }
    }
}
