//! logchain-core: message types, handlers, and the dispatch chain.
//!
//! # Architecture
//!
//! ```text
//! Message ──► root ──► Fatal ──► Error ──► Warning ──► Unknown
//!                        │         │          │           │
//!                      Err(..)   file      stdout       Err(..)
//! ```
//!
//! Each position either claims the message and runs its terminal action, or
//! lets the chain move on to the next position. Dispatch is synchronous and
//! returns a [`Result`] instead of unwinding.

pub mod chain;
pub mod config;
pub mod error;
pub mod handler;
pub mod sink;
pub mod types;

pub use chain::{Chain, Outcome};
pub use error::{DispatchError, FailureKind};
pub use handler::{Handler, HandlerKind};
pub use types::{Message, Severity};
