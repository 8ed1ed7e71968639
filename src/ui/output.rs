//! Output abstraction layer
//!
//! User-facing messages go through [`OutputWriter`]: colored stdout/stderr in
//! the binary, an in-memory buffer in tests.

use colored::Colorize;
use std::sync::Mutex;

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use docshelf::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.write("(1)  Lang. Algebra.");
/// output.warning("Fix directory /docs/books/algebra to match split pattern");
/// output.error("not found executable xdg-open");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a normal message (listings)
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes to stdout/stderr
///
/// In quiet mode only listings and errors are shown.
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new() -> Self {
        Self { quiet: false }
    }

    /// Create a stdout writer that suppresses informational output
    #[must_use]
    pub const fn quiet(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "✓".green(), message);
        }
    }

    fn warning(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "⚠️".yellow(), message);
        }
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message.dimmed());
        }
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Normal message
    Normal,
    /// Error message
    Error,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Info message
    Info,
}

/// Writer that keeps every message in memory
///
/// # Examples
///
/// ```
/// use docshelf::ui::output::{BufferWriter, MessageLevel, OutputWriter};
///
/// let writer = BufferWriter::new();
/// writer.warning("wrong key");
/// assert_eq!(writer.messages(), vec![(MessageLevel::Warning, "wrong key".to_string())]);
/// ```
#[derive(Debug, Default)]
pub struct BufferWriter {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl BufferWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages in the order they were written
    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }

    /// Messages of a single level
    #[must_use]
    pub fn at_level(&self, level: MessageLevel) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg)
            .collect()
    }

    /// Plain listing lines (`write` calls)
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.at_level(MessageLevel::Normal)
    }

    fn add_message(&self, level: MessageLevel, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push((level, message.to_string()));
        }
    }
}

impl OutputWriter for BufferWriter {
    fn write(&self, message: &str) {
        self.add_message(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.add_message(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.add_message(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.add_message(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.add_message(MessageLevel::Info, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdout_writer_creation() {
        let _writer = StdoutWriter::new();
        let _writer2 = StdoutWriter::default();
        let _writer3 = StdoutWriter::quiet(true);
    }

    #[test]
    fn test_buffer_writer_messages() {
        let writer = BufferWriter::new();

        writer.success("Test success");
        writer.error("Test error");
        writer.warning("Test warning");
        writer.write("(1)  A. t.");

        let messages = writer.messages();
        assert_eq!(messages.len(), 4);

        assert_eq!(messages[0].0, MessageLevel::Success);
        assert_eq!(messages[0].1, "Test success");

        assert_eq!(messages[1].0, MessageLevel::Error);
        assert_eq!(messages[2].0, MessageLevel::Warning);
        assert_eq!(writer.lines(), vec!["(1)  A. t."]);
    }

    #[test]
    fn test_buffer_writer_at_level() {
        let writer = BufferWriter::new();

        writer.info("first");
        writer.write("listing");
        writer.info("second");

        assert_eq!(writer.at_level(MessageLevel::Info), vec!["first", "second"]);
        assert!(writer.at_level(MessageLevel::Error).is_empty());
    }

    #[test]
    fn test_message_level_equality() {
        assert_eq!(MessageLevel::Normal, MessageLevel::Normal);
        assert_ne!(MessageLevel::Error, MessageLevel::Success);
    }
}
