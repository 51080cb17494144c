//! logchain: chain-of-responsibility log dispatcher.
//!
//! The core types and handlers live in [`logchain_core`]; this crate adds the
//! batch driver used by the `logchain` binary and the integration harnesses.

pub mod driver;

pub use logchain_core::{
    config::{Config, FailurePolicy},
    Chain, DispatchError, FailureKind, HandlerKind, Message, Outcome, Severity,
};
