//! Run reporting: per-record warnings and console log entries.
//!
//! Transformers never print. They return [`Warning`] values in their
//! summaries; the binaries turn summaries into [`LogEntry`] lines and
//! [`emit`] them to standard output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Log level for console display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Optional indentation level (for nested logs)
    #[serde(default)]
    pub indent: u8,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into(), indent: 0 }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into(), indent: 0 }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into(), indent: 0 }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// The line as printed on the console.
    pub fn render(&self) -> String {
        let prefix = match self.level {
            LogLevel::Info | LogLevel::Success => "",
            LogLevel::Warning => "Warning: ",
            LogLevel::Error => "Error: ",
        };
        let indent = "   ".repeat(self.indent as usize);
        format!("{}{}{}", indent, prefix, self.message)
    }
}

/// Print a log entry to standard output.
pub fn emit(entry: &LogEntry) {
    println!("{}", entry.render());
}

/// Print a sequence of log entries.
pub fn emit_all<'a>(entries: impl IntoIterator<Item = &'a LogEntry>) {
    for entry in entries {
        emit(entry);
    }
}

/// A non-fatal, per-record problem. Indices are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// The record has no `id` to replace.
    MissingId { index: usize },
    /// The record has no `meta.image` URL.
    MissingImage { index: usize },
    /// The image filename did not match the expected pattern.
    FilenamePattern { index: usize, url: String },
}

impl Warning {
    /// 1-based position of the record.
    pub fn index(&self) -> usize {
        match self {
            Warning::MissingId { index }
            | Warning::MissingImage { index }
            | Warning::FilenamePattern { index, .. } => *index,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MissingId { index } => {
                write!(f, "Entry #{} does not have an 'id' field.", index)
            }
            Warning::MissingImage { index } => {
                write!(f, "Entry #{} does not have an 'image' field.", index)
            }
            Warning::FilenamePattern { index, url } => write!(
                f,
                "Entry #{}: URL '{}' does not match the expected pattern for filename modification.",
                index, url
            ),
        }
    }
}

impl From<&Warning> for LogEntry {
    fn from(warning: &Warning) -> Self {
        LogEntry::warning(warning.to_string())
    }
}
