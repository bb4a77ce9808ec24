//! Game logger
//!
//! Messages carry a verbosity level and are either printed, captured into an
//! in-memory buffer, or both. Captured entries can be inspected through
//! [`GameLogger::logs`], which is how tests check what a game reported.

use crate::game::VerbosityLevel;
use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};
use std::ops::Deref;

/// Output format for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// Machine-readable JSON output (one object per line)
    Json,
}

/// Output destination for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputMode {
    /// Output only to stdout (default)
    #[default]
    Stdout,
    /// Capture only to in-memory buffer (no stdout)
    Memory,
    /// Both stdout and in-memory buffer
    Both,
}

/// A captured log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: VerbosityLevel,
    pub message: String,
    /// Optional category (e.g., "move", "rejected", "outcome")
    pub category: Option<String>,
}

/// Read-only access to captured log entries
pub struct LogGuard<'a> {
    guard: Ref<'a, Vec<LogEntry>>,
}

impl<'a> LogGuard<'a> {
    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.guard.iter()
    }

    pub fn len(&self) -> usize {
        self.guard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard.is_empty()
    }
}

impl<'a> Deref for LogGuard<'a> {
    type Target = [LogEntry];

    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

pub struct GameLogger {
    verbosity: VerbosityLevel,
    output_format: OutputFormat,
    output_mode: OutputMode,
    log_buffer: RefCell<Vec<LogEntry>>,
}

impl GameLogger {
    /// Create a new logger with default verbosity (Normal)
    pub fn new() -> Self {
        Self::with_verbosity(VerbosityLevel::default())
    }

    pub fn with_verbosity(verbosity: VerbosityLevel) -> Self {
        GameLogger {
            verbosity,
            output_format: OutputFormat::default(),
            output_mode: OutputMode::default(),
            log_buffer: RefCell::new(Vec::new()),
        }
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = verbosity;
    }

    pub fn set_output_mode(&mut self, mode: OutputMode) {
        self.output_mode = mode;
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    pub fn set_output_format(&mut self, format: OutputFormat) {
        self.output_format = format;
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    /// Capture into memory only (suppresses stdout)
    pub fn enable_capture(&mut self) {
        self.output_mode = OutputMode::Memory;
    }

    pub fn disable_capture(&mut self) {
        self.output_mode = OutputMode::Stdout;
    }

    pub fn is_capturing(&self) -> bool {
        matches!(self.output_mode, OutputMode::Memory | OutputMode::Both)
    }

    /// Would a message at `level` be printed or captured?
    ///
    /// Lets callers skip building expensive messages (e.g. rendered grids).
    pub fn is_enabled(&self, level: VerbosityLevel) -> bool {
        level != VerbosityLevel::Silent && (self.is_capturing() || level <= self.verbosity)
    }

    /// Captured entries
    pub fn logs(&self) -> LogGuard<'_> {
        LogGuard {
            guard: self.log_buffer.borrow(),
        }
    }

    pub fn clear_logs(&mut self) {
        self.log_buffer.borrow_mut().clear();
    }

    /// Print buffered entries that the verbosity allows, then clear the buffer
    pub fn flush_buffer(&mut self) {
        for entry in self.log_buffer.borrow().iter() {
            if entry.level <= self.verbosity {
                self.print(entry);
            }
        }
        self.clear_logs();
    }

    #[inline]
    pub fn minimal(&self, message: &str) {
        self.log(VerbosityLevel::Minimal, message, None);
    }

    #[inline]
    pub fn normal(&self, message: &str) {
        self.log(VerbosityLevel::Normal, message, None);
    }

    /// Log a categorized event
    pub fn event(&self, level: VerbosityLevel, category: &str, message: &str) {
        self.log(level, message, Some(category));
    }

    fn log(&self, level: VerbosityLevel, message: &str, category: Option<&str>) {
        if !self.is_enabled(level) {
            return;
        }
        let entry = LogEntry {
            level,
            message: message.to_string(),
            category: category.map(str::to_string),
        };

        let should_output = matches!(self.output_mode, OutputMode::Stdout | OutputMode::Both);
        if should_output && level <= self.verbosity {
            self.print(&entry);
        }
        if self.is_capturing() {
            self.log_buffer.borrow_mut().push(entry);
        }
    }

    fn print(&self, entry: &LogEntry) {
        match self.output_format {
            OutputFormat::Text => {
                if entry.level == VerbosityLevel::Minimal {
                    println!("{}", entry.message);
                } else {
                    // Multi-line messages (rendered grids) keep their indentation
                    for line in entry.message.lines() {
                        println!("  {}", line);
                    }
                }
            }
            OutputFormat::Json => match serde_json::to_string(entry) {
                Ok(line) => println!("{}", line),
                Err(_) => println!("{}", entry.message),
            },
        }
    }
}

impl Default for GameLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameLogger")
            .field("verbosity", &self.verbosity)
            .field("output_mode", &self.output_mode)
            .field("log_count", &self.log_buffer.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_creation() {
        let logger = GameLogger::new();
        assert_eq!(logger.verbosity(), VerbosityLevel::Normal);
        assert!(!logger.is_capturing());
    }

    #[test]
    fn test_log_capture() {
        let mut logger = GameLogger::new();
        logger.enable_capture();

        logger.normal("test message");
        logger.minimal("minimal message");
        logger.event(VerbosityLevel::Normal, "move", "categorized");

        let logs = logger.logs();
        assert_eq!(logs.len(), 3);
        assert_eq!(logs[0].message, "test message");
        assert_eq!(logs[1].level, VerbosityLevel::Minimal);
        assert_eq!(logs[2].category.as_deref(), Some("move"));
    }

    #[test]
    fn test_silent_is_never_captured() {
        let mut logger = GameLogger::with_verbosity(VerbosityLevel::Silent);
        logger.enable_capture();
        logger.event(VerbosityLevel::Silent, "noise", "dropped");
        assert!(logger.logs().is_empty());
        assert!(logger.is_enabled(VerbosityLevel::Verbose));
        assert!(!logger.is_enabled(VerbosityLevel::Silent));
    }

    #[test]
    fn test_enabled_follows_verbosity_without_capture() {
        let logger = GameLogger::with_verbosity(VerbosityLevel::Minimal);
        assert!(logger.is_enabled(VerbosityLevel::Minimal));
        assert!(!logger.is_enabled(VerbosityLevel::Normal));
    }

    #[test]
    fn test_output_modes() {
        let mut logger = GameLogger::with_verbosity(VerbosityLevel::Silent);
        logger.set_output_mode(OutputMode::Both);
        assert_eq!(logger.output_mode(), OutputMode::Both);
        assert!(logger.is_capturing());
        logger.normal("kept");
        assert_eq!(logger.logs().len(), 1);

        logger.disable_capture();
        assert_eq!(logger.output_mode(), OutputMode::Stdout);
        assert!(!logger.is_capturing());
        logger.normal("not kept");
        assert_eq!(logger.logs().len(), 1);
        assert!(!logger.is_enabled(VerbosityLevel::Normal));
    }

    #[test]
    fn test_flush_buffer_clears() {
        let mut logger = GameLogger::with_verbosity(VerbosityLevel::Silent);
        logger.enable_capture();
        logger.normal("message 1");
        logger.normal("message 2");
        assert_eq!(logger.logs().len(), 2);

        logger.flush_buffer();
        assert!(logger.logs().is_empty());
    }

    #[test]
    fn test_log_entry_json() {
        let entry = LogEntry {
            level: VerbosityLevel::Normal,
            message: "Player 0 (RED) drops into column 3".to_string(),
            category: Some("move".to_string()),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: LogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
