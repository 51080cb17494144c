//! Failure signals raised while dispatching a [`Message`](crate::Message).

use thiserror::Error;

/// Payload carried by the catch-all handler, independent of the message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Broad classification of a [`DispatchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    FatalSeverity,
    UnrecognizedSeverity,
    SinkWrite,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::FatalSeverity => write!(f, "fatal-severity"),
            FailureKind::UnrecognizedSeverity => write!(f, "unrecognized-severity"),
            FailureKind::SinkWrite => write!(f, "sink-write"),
        }
    }
}

#[derive(Error, Debug)]
pub enum DispatchError {
    /// A fatal message reached the fatal handler. Payload is the message text.
    #[error("{0}")]
    FatalSeverity(String),
    /// A message fell through to the catch-all.
    #[error("{0}")]
    UnrecognizedSeverity(String),
    /// A terminal action could not write to its sink.
    #[error("failed to write to {target}: {source}")]
    SinkWrite {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

impl DispatchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            DispatchError::FatalSeverity(_) => FailureKind::FatalSeverity,
            DispatchError::UnrecognizedSeverity(_) => FailureKind::UnrecognizedSeverity,
            DispatchError::SinkWrite { .. } => FailureKind::SinkWrite,
        }
    }

    /// Text payload of the failure signal.
    pub fn payload(&self) -> String {
        match self {
            DispatchError::FatalSeverity(text) | DispatchError::UnrecognizedSeverity(text) => {
                text.clone()
            }
            DispatchError::SinkWrite { .. } => self.to_string(),
        }
    }
}
