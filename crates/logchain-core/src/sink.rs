//! Sinks: destinations that terminal actions write their line to.
//!
//! Each sink serialises its own writes behind a mutex so a handler can be
//! shared between threads without interleaving partial lines.

use crate::error::DispatchError;
use std::{
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

/// A line-oriented output destination.
pub trait Sink: Send + Sync {
    /// Human-readable name of the destination, used in errors and logs.
    fn target(&self) -> String;

    /// Write `line` followed by a newline. The write is flushed before return.
    fn write_line(&self, line: &str) -> Result<(), DispatchError>;
}

// ---------------------------------------------------------------------------
// FileSink
// ---------------------------------------------------------------------------

/// Appends lines to a file, opening it fresh for every write.
pub struct FileSink {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> DispatchError {
        DispatchError::SinkWrite {
            target: self.target(),
            source,
        }
    }
}

impl Sink for FileSink {
    fn target(&self) -> String {
        self.path.display().to_string()
    }

    fn write_line(&self, line: &str) -> Result<(), DispatchError> {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        // The handle drops at the end of this scope on every path, error or not.
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        writeln!(file, "{line}").map_err(|e| self.io_error(e))?;
        file.flush().map_err(|e| self.io_error(e))
    }
}

// ---------------------------------------------------------------------------
// ConsoleSink
// ---------------------------------------------------------------------------

/// Writes lines to stdout, or to any injected writer.
pub struct ConsoleSink {
    name: &'static str,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self {
            name: "stdout",
            out: Mutex::new(Box::new(std::io::stdout())),
        }
    }

    /// Wrap an arbitrary writer (a capture buffer in tests, stderr, …).
    pub fn from_writer(name: &'static str, writer: impl Write + Send + 'static) -> Self {
        Self {
            name,
            out: Mutex::new(Box::new(writer)),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Sink for ConsoleSink {
    fn target(&self) -> String {
        self.name.to_string()
    }

    fn write_line(&self, line: &str) -> Result<(), DispatchError> {
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(out, "{line}")
            .and_then(|_| out.flush())
            .map_err(|source| DispatchError::SinkWrite {
                target: self.target(),
                source,
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
