//! `log` facade backend.
//!
//! Installing a [`Logger`] as the global `log` backend routes `log::info!`,
//! `log::warn!` and `log::error!` from any crate into the same JSON stream.
//! Warnings are recorded as `ERROR`; debug and trace output is dropped.

use std::io::Write;

use crate::error::Result;
use crate::level::Level;
use crate::logger::Logger;
use crate::record::Properties;

impl<W: Write + Send> log::Log for Logger<W> {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::Level::Info && self.is_enabled(Level::from_log(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        if !log::Log::enabled(self, record.metadata()) {
            return;
        }

        let mut properties = Properties::new();
        properties.insert("target".to_string(), record.target().to_string());

        let message = record.args().to_string();
        let _ = self.print(Level::from_log(record.level()), &message, Some(&properties));
    }

    fn flush(&self) {
        let _ = self.flush_sink();
    }
}

/// Register `logger` as the process-wide `log` backend.
///
/// Fails if another backend is already installed.
pub fn install<W: Write + Send + 'static>(logger: Logger<W>) -> Result<()> {
    let max_level = log::LevelFilter::from(logger.min_level());
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(max_level);
    Ok(())
}
