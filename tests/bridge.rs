use std::io::{self, Write};
use std::sync::Arc;

use jsonlog::{Error, Level, Logger};
use parking_lot::Mutex;
use serde_json::Value;

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn log_macros_reach_installed_logger() {
    let buf = SharedBuf::default();
    jsonlog::install(Logger::new(buf.clone(), Level::Info)).unwrap();
    assert_eq!(log::max_level(), log::LevelFilter::Info);

    log::info!(target: "server", "listening on {}", 8080);
    log::debug!("not recorded");
    log::warn!(target: "server", "slow accept");

    let out = String::from_utf8(buf.0.lock().clone()).unwrap();
    let records: Vec<Value> = out
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["level"], "INFO");
    assert_eq!(records[0]["message"], "listening on 8080");
    assert_eq!(records[0]["properties"]["target"], "server");
    assert_eq!(records[1]["level"], "ERROR");
    assert!(records[1]["trace"].is_string());

    let second = jsonlog::install(Logger::new(io::sink(), Level::Error));
    assert!(matches!(second, Err(Error::InstallLogger(_))));
}
