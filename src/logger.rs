//! The logger: threshold filtering and atomic line writes.
//!
//! A `Logger` wraps a caller-supplied sink. Each call builds and encodes its
//! record without holding any lock, then writes the finished line to the sink
//! in a single `write_all` under the logger's mutex, so lines from concurrent
//! callers never interleave.

use std::error::Error as StdError;
use std::fmt;
use std::io::{self, Write};
use std::process;

use parking_lot::Mutex;

use crate::level::Level;
use crate::record::{encode_line, LogRecord, Properties};

/// Exit status used by [`Logger::print_fatal`].
pub const FATAL_EXIT_CODE: i32 = 1;

/// Structured JSON logger writing one record per line to `W`.
///
/// The sink is never closed by the logger; use [`Logger::into_inner`] to get
/// it back.
pub struct Logger<W> {
    out: Mutex<W>,
    min_level: Level,
}

impl<W: Write> Logger<W> {
    /// Create a logger writing to `out` that drops everything below
    /// `min_level`.
    pub fn new(out: W, min_level: Level) -> Self {
        Self {
            out: Mutex::new(out),
            min_level,
        }
    }

    /// The threshold fixed at construction.
    pub fn min_level(&self) -> Level {
        self.min_level
    }

    /// Whether a message at `level` passes the threshold.
    pub fn is_enabled(&self, level: Level) -> bool {
        level != Level::Off && level >= self.min_level
    }

    /// Log an informational message.
    pub fn print_info(&self, message: &str, properties: Option<&Properties>) {
        let _ = self.print(Level::Info, message, properties);
    }

    /// Log `err` at error level, with a stack trace.
    pub fn print_error(&self, err: &dyn StdError, properties: Option<&Properties>) {
        let _ = self.print(Level::Error, &err.to_string(), properties);
    }

    /// Log `err` at fatal level, then exit the process with status 1.
    ///
    /// The exit happens whether or not the record passed the threshold or
    /// reached the sink.
    pub fn print_fatal(&self, err: &dyn StdError, properties: Option<&Properties>) -> ! {
        self.log_fatal(err, properties);
        terminate()
    }

    /// Write the fatal record and flush the sink; `process::exit` skips
    /// destructors, so anything buffered downstream would otherwise be lost.
    pub(crate) fn log_fatal(&self, err: &dyn StdError, properties: Option<&Properties>) {
        let _ = self.print(Level::Fatal, &err.to_string(), properties);
        let _ = self.flush_sink();
    }

    /// Emit one record. Returns the number of bytes handed to the sink, or
    /// `0` when the level is filtered out.
    pub(crate) fn print(
        &self,
        level: Level,
        message: &str,
        properties: Option<&Properties>,
    ) -> io::Result<usize> {
        if !self.is_enabled(level) {
            return Ok(0);
        }

        let record = LogRecord::new(level, message, properties);
        let line = encode_line(&record);

        let mut out = self.out.lock();
        out.write_all(&line)?;
        Ok(line.len())
    }

    pub(crate) fn flush_sink(&self) -> io::Result<()> {
        self.out.lock().flush()
    }

    /// Consume the logger and return its sink.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

fn terminate() -> ! {
    process::exit(FATAL_EXIT_CODE)
}

impl<W> fmt::Debug for Logger<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level)
            .finish_non_exhaustive()
    }
}

/// Raw bytes written to a logger become one error-level record each, which
/// lets the logger stand in as the output of anything that only knows
/// `io::Write`.
///
/// Invalid UTF-8 is replaced with U+FFFD. A write reports the whole buffer as
/// accepted when the record is written or filtered out.
impl<W: Write> Write for &Logger<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let message = String::from_utf8_lossy(buf);
        self.print(Level::Error, &message, None)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_sink()
    }
}

impl<W: Write> Write for Logger<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (&*self).write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_sink()
    }
}
