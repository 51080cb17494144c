//! Test builders: a standard chain wired to inspectable sinks.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on I/O failure rather than returning `Result`.

use logchain_core::{
    handler::{ErrorHandler, FatalHandler, UnknownHandler, WarningHandler},
    sink::ConsoleSink,
    Chain,
};
use std::{
    io::Write,
    path::PathBuf,
    sync::{Arc, Mutex},
};

// ---------------------------------------------------------------------------
// SharedBuffer
// ---------------------------------------------------------------------------

/// Cloneable in-memory writer; one clone goes into a sink, the other is read
/// back by the test.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ChainFixture
// ---------------------------------------------------------------------------

/// The standard chain, with the error log in a temp dir and the warning
/// handler writing to a [`SharedBuffer`] instead of stdout.
pub struct ChainFixture {
    pub chain: Chain,
    pub stdout: SharedBuffer,
    pub error_log: PathBuf,
    _dir: tempfile::TempDir,
}

impl ChainFixture {
    pub fn standard() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let error_log = dir.path().join("log.txt");
        let stdout = SharedBuffer::default();

        let mut chain = Chain::new();
        chain.append(FatalHandler);
        chain.append(ErrorHandler::new(&error_log));
        chain.append(WarningHandler::with_sink(ConsoleSink::from_writer(
            "captured-stdout",
            stdout.clone(),
        )));
        chain.append(UnknownHandler);

        Self {
            chain,
            stdout,
            error_log,
            _dir: dir,
        }
    }

    /// Lines appended to the error log so far; empty if it was never created.
    pub fn error_log_lines(&self) -> Vec<String> {
        match std::fs::read_to_string(&self.error_log) {
            Ok(contents) => contents.lines().map(str::to_string).collect(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => panic!("reading {}: {e}", self.error_log.display()),
        }
    }

    pub fn stdout_lines(&self) -> Vec<String> {
        self.stdout.lines()
    }

    /// True when no sink has been touched.
    pub fn no_side_effects(&self) -> bool {
        !self.error_log.exists() && self.stdout.contents().is_empty()
    }
}
