//! Console Logger
//!
//! `log` backend writing to the browser console. The most recent lines are
//! also kept in a small ring buffer.

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Lines kept in the ring buffer
const RECENT_CAPACITY: usize = 200;

struct ConsoleLogger {
    recent: Mutex<VecDeque<String>>,
}

static LOGGER: ConsoleLogger = ConsoleLogger {
    recent: Mutex::new(VecDeque::new()),
};

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("{} {}", record.level(), record.args());
        write_line(record.level(), &line);

        if let Ok(mut recent) = self.recent.lock() {
            if recent.len() == RECENT_CAPACITY {
                recent.pop_front();
            }
            recent.push_back(line);
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the console logger at `Info`. Safe to call more than once.
///
/// Called before anything else logs; the configured level is applied later
/// with [`set_level`].
pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}

pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}

/// Most recent log lines, oldest first
pub fn recent() -> Vec<String> {
    LOGGER
        .recent
        .lock()
        .map(|recent| recent.iter().cloned().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OrderFormConfig;

    #[test]
    fn test_invalid_config_warning_is_logged() {
        init();

        let config = OrderFormConfig::from_attribute(Some("{not json"));

        assert_eq!(config, OrderFormConfig::default());
        assert!(
            recent()
                .iter()
                .any(|line| line.starts_with("WARN [CONFIG]") && line.contains("using defaults")),
            "no config warning in {:?}",
            recent()
        );
    }
}
