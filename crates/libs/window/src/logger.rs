//! Colored console logger for applications that have not installed their own.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

mod term {
    pub const RESET: &str = "\x1b[1;0m";
    pub const BOLDMAGENTA: &str = "\x1b[1;35m";
    pub const BOLDCYAN: &str = "\x1b[1;36m";
    pub const BOLDGREEN: &str = "\x1b[1;32m";
    pub const BOLDYELLOW: &str = "\x1b[1;33m";
    pub const BOLDRED: &str = "\x1b[1;31m";
}

struct Logger;

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{}{}{} [{}]: {}",
                color(record.level()),
                record.level().as_str().to_lowercase(),
                term::RESET,
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

fn color(level: Level) -> &'static str {
    match level {
        Level::Trace => term::BOLDMAGENTA,
        Level::Debug => term::BOLDGREEN,
        Level::Info => term::BOLDCYAN,
        Level::Warn => term::BOLDYELLOW,
        Level::Error => term::BOLDRED,
    }
}

static LOGGER: Logger = Logger;

/// Installs the console logger. Fails if a logger is already set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
