//! Stderr logger for the CLI, so replay diagnostics never mix with the
//! JSON written to stdout.

use anyhow::Result;
use log::{Level, LevelFilter, Log, Metadata, Record};

pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    /// Install as the global logger with the given level.
    pub fn init(level: LevelFilter) -> Result<()> {
        log::set_boxed_logger(Box::new(StderrLogger { level }))
            .map(|()| log::set_max_level(level))
            .map_err(|e| anyhow::anyhow!("failed to set logger: {e}"))?;
        Ok(())
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let prefix = match record.level() {
                Level::Error => "error",
                Level::Warn => "warn",
                Level::Info => "info",
                Level::Debug => "debug",
                Level::Trace => "trace",
            };
            eprintln!("{prefix} [{}] {}", record.target(), record.args());
        }
    }

    fn flush(&self) {}
}
