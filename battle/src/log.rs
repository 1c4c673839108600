//! Battle log sinks
//!
//! The session reports what happens through a [`BattleLog`] handed to it at
//! construction. Nothing reads the log back, so swapping sinks never changes
//! how a battle plays out.

/// Side channel for battle narration
pub trait BattleLog: Send {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards battle messages to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl BattleLog for TracingLog {
    fn info(&self, message: &str) {
        tracing::info!(target: "tussle::battle", "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "tussle::battle", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "tussle::battle", "{}", message);
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl BattleLog for NullLog {
    fn info(&self, _message: &str) {}

    fn warn(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}

/// Keeps every message in memory, for inspection in tests
#[derive(Debug, Default)]
pub struct MemoryLog {
    lines: std::sync::Mutex<Vec<(LogLevel, String)>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded lines
    pub fn lines(&self) -> Vec<(LogLevel, String)> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn push(&self, level: LogLevel, message: &str) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        lines.push((level, message.to_string()));
    }
}

impl BattleLog for MemoryLog {
    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }
}

impl<T: BattleLog + Sync> BattleLog for std::sync::Arc<T> {
    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn warn(&self, message: &str) {
        (**self).warn(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }
}
