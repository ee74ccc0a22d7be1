use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider};
use gloo::console;
use js_sys::Date;
use wasm_bindgen::JsValue;

/// Logger that writes to the browser devtools console
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }
        let line = entry.render();
        match entry.level {
            LogLevel::Trace | LogLevel::Debug => console::debug!(line),
            LogLevel::Info => console::info!(line),
            LogLevel::Warn => console::warn!(line),
            LogLevel::Error => console::error!(line),
        }
    }
}

/// Wall clock backed by `Date.now()`
#[derive(Default)]
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        let date = Date::new(&JsValue::from_f64(timestamp as f64));
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds(),
            date.get_milliseconds()
        )
    }
}
