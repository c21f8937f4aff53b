//! Crate error type.

use thiserror::Error;

/// Errors surfaced by configuration and setup helpers.
///
/// The print path itself never returns this type: serialization failures are
/// replaced by a fallback line and sink failures stay `std::io::Error`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown log level {0:?} (expected info, error, fatal or off)")]
    UnknownLevel(String),

    #[error("unable to install global logger: {0}")]
    InstallLogger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, Error>;
