//! Chain: an ordered arena of handlers walked front to back.
//!
//! The chain owns every handler it holds; "next" is simply the following
//! index. Dropping the chain drops the whole tail. Because handlers only live
//! in the backing `Vec`, the chain is acyclic and a dispatch visits at most
//! [`Chain::len`] positions.

use crate::{
    error::DispatchError,
    handler::{
        ErrorHandler, FatalHandler, Handler, HandlerKind, PassThrough, UnknownHandler,
        WarningHandler,
    },
    types::Message,
};
use std::path::PathBuf;

/// What happened to a message that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The handler at this position matched and completed its action.
    Handled(HandlerKind),
    /// No handler matched; the message was discarded.
    Dropped,
}

pub struct Chain {
    handlers: Vec<Box<dyn Handler>>,
}

impl Chain {
    /// A chain holding only the pass-through root.
    pub fn new() -> Self {
        Self {
            handlers: vec![Box::new(PassThrough)],
        }
    }

    /// root → fatal → error(`error_log`) → warning(stdout) → unknown
    pub fn standard(error_log: impl Into<PathBuf>) -> Self {
        let mut chain = Self::new();
        chain.append(FatalHandler);
        chain.append(ErrorHandler::new(error_log));
        chain.append(WarningHandler::new());
        chain.append(UnknownHandler);
        chain
    }

    /// Attach `handler` as the new tail.
    pub fn append(&mut self, handler: impl Handler + 'static) {
        tracing::debug!(kind = %handler.kind(), position = self.handlers.len(), "handler appended");
        self.handlers.push(Box::new(handler));
    }

    /// Route `message` to the first handler that claims its severity.
    ///
    /// Propagation stops at the first match, whether its action succeeds or
    /// fails.
    pub fn dispatch(&self, message: &Message) -> Result<Outcome, DispatchError> {
        let severity = message.severity();
        for (position, handler) in self.handlers.iter().enumerate() {
            if !handler.matches(severity) {
                tracing::debug!(position, kind = %handler.kind(), %severity, "forwarding");
                continue;
            }
            tracing::info!(position, kind = %handler.kind(), %severity, "message consumed");
            return handler
                .act(message)
                .map(|()| Outcome::Handled(handler.kind()));
        }
        tracing::warn!(%severity, text = message.text(), "message fell off the end of the chain");
        Ok(Outcome::Dropped)
    }

    /// Number of positions, including the pass-through root.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Always false for chains built with [`Chain::new`], since the root counts.
    /// It is not a check for "no real handlers".
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Handler kinds in dispatch order, root first.
    pub fn kinds(&self) -> Vec<HandlerKind> {
        self.handlers.iter().map(|h| h.kind()).collect()
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain").field("handlers", &self.kinds()).finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
