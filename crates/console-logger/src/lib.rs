//! Console Logger
//!
//! `log` backend for the frontend. Records go to the browser console on
//! wasm32 (mapped to the matching console level) and to stderr elsewhere,
//! which keeps native test runs readable.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger writing formatted records to the console
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            &chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        emit(record.level(), &line);
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

/// Format a log line: `HH:MM:SS.mmm LEVEL target: message`
pub fn format_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("{} {:<5} {}: {}", timestamp, level, target, message)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    let value = JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_pads_level() {
        let line = format_line("12:00:00.000", Level::Info, "todo_client_ui::api", "GET /todos");
        assert_eq!(line, "12:00:00.000 INFO  todo_client_ui::api: GET /todos");
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = ConsoleLogger::new(LevelFilter::Info);
        let warn = Metadata::builder().level(Level::Warn).target("t").build();
        let debug = Metadata::builder().level(Level::Debug).target("t").build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&debug));
    }
}
