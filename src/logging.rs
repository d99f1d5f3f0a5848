//! Logging Setup
//!
//! Installs the rolling logger with a sink that mirrors entries to the
//! browser console.

use log::{Level, LevelFilter};
use rolling_logger::{LogEntry, LogSink, RollingLogger};
use wasm_bindgen::JsValue;
use workshop_state::WorkshopConfig;

/// Writes entries to `console.*` at the matching level
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, entry: &LogEntry) {
        let line = JsValue::from_str(&entry.format_line());
        match entry.level {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }
}

pub fn init(config: &WorkshopConfig) {
    let level = config.log_filter().unwrap_or(LevelFilter::Info);
    let logger = RollingLogger::new(level, config.log_capacity).with_sink(ConsoleSink);
    if let Err(e) = rolling_logger::init(logger) {
        web_sys::console::error_1(&format!("[LOG] Logger already installed: {}", e).into());
    }
}
