//! jsonlog - leveled, single-line JSON logging
//!
//! Every event becomes one JSON object on its own line:
//!
//! ```text
//! {"level":"INFO","time":"2024-01-02T15:04:05Z","message":"server started","properties":{"port":"8080"}}
//! {"level":"ERROR","time":"2024-01-02T15:04:06Z","message":"connection refused","trace":"<stack text>"}
//! ```
//!
//! ## Architecture
//!
//! - `level` - `Info < Error < Fatal < Off` severities and threshold parsing
//! - `record` - the record layout and its never-failing line encoder
//! - `logger` - threshold filtering, atomic writes, fatal exit, `io::Write`
//! - `bridge` - `log` facade backend
//!
//! ## Example
//!
//! ```no_run
//! use jsonlog::{properties, Level, Logger};
//!
//! let logger = Logger::new(std::io::stdout(), Level::Info);
//! logger.print_info("server started", Some(&properties! { "port" => 8080 }));
//!
//! let err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
//! logger.print_error(&err, None);
//! ```

pub mod bridge;
pub mod error;
pub mod level;
pub mod logger;
pub mod record;

pub use bridge::install;
pub use error::{Error, Result};
pub use level::Level;
pub use logger::{Logger, FATAL_EXIT_CODE};
pub use record::{encode_line, LogRecord, Properties};

/// Build a [`Properties`] map. Keys and values go through `ToString`.
///
/// ```
/// let props = jsonlog::properties! { "port" => 8080, "host" => "localhost" };
/// assert_eq!(props["port"], "8080");
/// ```
#[macro_export]
macro_rules! properties {
    () => {
        $crate::Properties::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut properties = $crate::Properties::new();
        $(
            properties.insert(
                ::std::string::ToString::to_string(&$key),
                ::std::string::ToString::to_string(&$value),
            );
        )+
        properties
    }};
}
