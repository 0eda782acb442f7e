use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{}",
                format_entry(
                    &Local::now().format("%b %d %H:%M:%S").to_string(),
                    record.level(),
                    &record.args().to_string()
                )
            );
        }
    }

    fn flush(&self) {}
}

fn format_entry(time: &str, level: Level, message: &str) -> String {
    format!("{time} {level:<5} {message}")
}
