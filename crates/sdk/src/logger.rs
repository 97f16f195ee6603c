//! Output sink for user-facing command results.
//!
//! Commands never print directly; they write through a [`Logger`] so
//! the CLI can route results to stdout/stderr and tests can capture
//! the exact lines.

use std::sync::Mutex;

/// Sink for user-facing command output.
pub trait Logger: Send + Sync {
    /// A result line (listing entries, confirmations).
    fn info(&self, msg: &str);

    /// A fatal-for-this-invocation problem.
    fn error(&self, msg: &str);
}

/// Writes results to stdout and problems to stderr.
#[derive(Debug, Default)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn info(&self, msg: &str) {
        println!("{msg}");
    }

    fn error(&self, msg: &str) {
        eprintln!("Error: {msg}");
    }
}

/// Collects output lines with a severity marker (`P`, `E`) so tests
/// can assert on the exact sequence.
#[derive(Debug, Default)]
pub struct MockLog {
    entries: Mutex<Vec<String>>,
}

impl MockLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded entries, in emission order.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    fn push(&self, marker: char, msg: &str) {
        self.entries.lock().unwrap().push(format!("{marker} {msg}"));
    }
}

impl Logger for MockLog {
    fn info(&self, msg: &str) {
        self.push('P', msg);
    }

    fn error(&self, msg: &str) {
        self.push('E', msg);
    }
}
