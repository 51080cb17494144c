//! The handler capability contract and the concrete handlers.
//!
//! A handler answers two questions: does it claim a given [`Severity`]
//! ([`Handler::matches`]), and what does it do with a claimed message
//! ([`Handler::act`]). Forwarding is not the handler's concern; the
//! [`Chain`](crate::chain::Chain) walks to the next position when a handler
//! declines.

use crate::{
    error::{DispatchError, UNKNOWN_ERROR},
    sink::{ConsoleSink, FileSink, Sink},
    types::{Message, Severity},
};
use std::path::PathBuf;

/// Discriminant naming each handler variant, used in outcomes and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerKind {
    PassThrough,
    Fatal,
    Error,
    Warning,
    Unknown,
}

impl std::fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandlerKind::PassThrough => write!(f, "pass-through"),
            HandlerKind::Fatal => write!(f, "fatal"),
            HandlerKind::Error => write!(f, "error"),
            HandlerKind::Warning => write!(f, "warning"),
            HandlerKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// One position in a handler chain.
pub trait Handler: Send + Sync {
    fn kind(&self) -> HandlerKind;

    /// Whether this handler consumes messages of `severity`.
    fn matches(&self, severity: Severity) -> bool;

    /// Terminal action for a matched message.
    fn act(&self, message: &Message) -> Result<(), DispatchError>;
}

// ---------------------------------------------------------------------------
// PassThrough
// ---------------------------------------------------------------------------

/// Chain root. Never matches, so every message moves on.
#[derive(Debug, Default)]
pub struct PassThrough;

impl Handler for PassThrough {
    fn kind(&self) -> HandlerKind {
        HandlerKind::PassThrough
    }

    fn matches(&self, _severity: Severity) -> bool {
        false
    }

    fn act(&self, _message: &Message) -> Result<(), DispatchError> {
        // Unreachable through a chain: the root never claims a message.
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FatalHandler
// ---------------------------------------------------------------------------

/// Turns a fatal message into a [`DispatchError::FatalSeverity`] carrying its text.
#[derive(Debug, Default)]
pub struct FatalHandler;

impl Handler for FatalHandler {
    fn kind(&self) -> HandlerKind {
        HandlerKind::Fatal
    }

    fn matches(&self, severity: Severity) -> bool {
        severity == Severity::Fatal
    }

    fn act(&self, message: &Message) -> Result<(), DispatchError> {
        Err(DispatchError::FatalSeverity(message.text().to_string()))
    }
}

// ---------------------------------------------------------------------------
// ErrorHandler
// ---------------------------------------------------------------------------

/// Appends `Error: <text>` to a file.
pub struct ErrorHandler {
    sink: Box<dyn Sink>,
}

impl ErrorHandler {
    /// Append to the file at `path`, creating it on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_sink(FileSink::new(path))
    }

    pub fn with_sink(sink: impl Sink + 'static) -> Self {
        Self {
            sink: Box::new(sink),
        }
    }
}

impl Handler for ErrorHandler {
    fn kind(&self) -> HandlerKind {
        HandlerKind::Error
    }

    fn matches(&self, severity: Severity) -> bool {
        severity == Severity::Error
    }

    fn act(&self, message: &Message) -> Result<(), DispatchError> {
        self.sink.write_line(&format!("Error: {}", message.text()))
    }
}

// ---------------------------------------------------------------------------
// WarningHandler
// ---------------------------------------------------------------------------

/// Prints `Warning: <text>` to the console.
pub struct WarningHandler {
    sink: Box<dyn Sink>,
}

impl WarningHandler {
    pub fn new() -> Self {
        Self::with_sink(ConsoleSink::stdout())
    }

    pub fn with_sink(sink: impl Sink + 'static) -> Self {
        Self {
            sink: Box::new(sink),
        }
    }
}

impl Default for WarningHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for WarningHandler {
    fn kind(&self) -> HandlerKind {
        HandlerKind::Warning
    }

    fn matches(&self, severity: Severity) -> bool {
        severity == Severity::Warning
    }

    fn act(&self, message: &Message) -> Result<(), DispatchError> {
        self.sink.write_line(&format!("Warning: {}", message.text()))
    }
}

// ---------------------------------------------------------------------------
// UnknownHandler
// ---------------------------------------------------------------------------

/// Catch-all terminal. Claims every message that reaches it, whatever its
/// severity, and fails with [`UNKNOWN_ERROR`].
///
/// Placing it anywhere but last shadows every handler after it.
#[derive(Debug, Default)]
pub struct UnknownHandler;

impl Handler for UnknownHandler {
    fn kind(&self) -> HandlerKind {
        HandlerKind::Unknown
    }

    fn matches(&self, _severity: Severity) -> bool {
        true
    }

    fn act(&self, _message: &Message) -> Result<(), DispatchError> {
        Err(DispatchError::UnrecognizedSeverity(UNKNOWN_ERROR.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
