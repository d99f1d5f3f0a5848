//! Rolling Logger
//!
//! A `log` backend that keeps the most recent entries in a circular buffer
//! and forwards every accepted entry to a list of sinks. The buffer lets the
//! UI show recent activity without a devtools console.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// One captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Monotonic sequence number, starting at 1
    pub seq: u64,
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    /// `HH:MM:SS LEVEL [target] message`
    pub fn format_line(&self) -> String {
        format!(
            "{} {:<5} [{}] {}",
            self.timestamp.format("%H:%M:%S"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Destination for entries besides the in-memory buffer
pub trait LogSink: Send + Sync {
    fn write(&self, entry: &LogEntry);
}

struct Buffer {
    entries: VecDeque<LogEntry>,
    next_seq: u64,
}

pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<Buffer>,
    sinks: Vec<Box<dyn LogSink>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            level,
            capacity,
            buffer: Mutex::new(Buffer {
                entries: VecDeque::with_capacity(capacity),
                next_seq: 1,
            }),
            sinks: Vec::new(),
        }
    }

    pub fn with_sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// The newest `limit` entries, oldest first
    pub fn recent(&self, limit: usize) -> Vec<LogEntry> {
        let Ok(buffer) = self.buffer.lock() else {
            return Vec::new();
        };
        let skip = buffer.entries.len().saturating_sub(limit);
        buffer.entries.iter().skip(skip).cloned().collect()
    }

    /// Sequence number of the newest entry, 0 when nothing was logged
    pub fn last_seq(&self) -> u64 {
        self.buffer
            .lock()
            .map(|buffer| buffer.next_seq - 1)
            .unwrap_or(0)
    }

    fn push(&self, record: &Record) -> Option<LogEntry> {
        let mut buffer = self.buffer.lock().ok()?;
        let entry = LogEntry {
            seq: buffer.next_seq,
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        buffer.next_seq += 1;
        if buffer.entries.len() == self.capacity {
            buffer.entries.pop_front();
        }
        buffer.entries.push_back(entry.clone());
        Some(entry)
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // Sinks run after the lock is released
        if let Some(entry) = self.push(record) {
            for sink in &self.sinks {
                sink.write(&entry);
            }
        }
    }

    fn flush(&self) {}
}

/// Install `logger` as the global `log` backend.
///
/// Only the first call succeeds; later calls return the error from
/// `log::set_logger`.
pub fn init(logger: RollingLogger) -> Result<&'static RollingLogger, SetLoggerError> {
    let level = logger.level;
    let installed = LOGGER.get_or_init(|| logger);
    log::set_logger(installed)?;
    log::set_max_level(level);
    Ok(installed)
}

/// The installed logger, if `init` has run
pub fn global() -> Option<&'static RollingLogger> {
    LOGGER.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn emit(logger: &RollingLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[derive(Clone, Default)]
    struct CollectSink(Arc<Mutex<Vec<String>>>);

    impl LogSink for CollectSink {
        fn write(&self, entry: &LogEntry) {
            self.0.lock().unwrap().push(entry.message.clone());
        }
    }

    #[test]
    fn test_buffer_keeps_newest_entries() {
        let logger = RollingLogger::new(LevelFilter::Trace, 3);
        for i in 1..=5 {
            emit(&logger, Level::Info, &format!("entry {}", i));
        }

        let messages: Vec<_> = logger.recent(10).into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["entry 3", "entry 4", "entry 5"]);
        assert_eq!(logger.last_seq(), 5);

        let newest = logger.recent(1);
        assert_eq!(newest.len(), 1);
        assert_eq!(newest[0].seq, 5);
    }

    #[test]
    fn test_level_filter() {
        let logger = RollingLogger::new(LevelFilter::Info, 10);
        emit(&logger, Level::Debug, "hidden");
        emit(&logger, Level::Warn, "shown");

        let entries = logger.recent(10);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, Level::Warn);
        assert_eq!(entries[0].target, "test");
    }

    #[test]
    fn test_sinks_receive_entries() {
        let sink = CollectSink::default();
        let logger = RollingLogger::new(LevelFilter::Debug, 10).with_sink(sink.clone());
        emit(&logger, Level::Debug, "one");
        emit(&logger, Level::Trace, "dropped");
        emit(&logger, Level::Error, "two");

        assert_eq!(*sink.0.lock().unwrap(), vec!["one", "two"]);
    }

    #[test]
    fn test_format_line() {
        let logger = RollingLogger::new(LevelFilter::Info, 10);
        emit(&logger, Level::Info, "User rated: 4 stars");
        let line = logger.recent(1)[0].format_line();
        assert!(line.ends_with("INFO  [test] User rated: 4 stars"));
    }
}
