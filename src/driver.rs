//! Batch driver: feeds a sequence of messages through one chain instance.
//!
//! The driver makes the batch failure policy explicit: under
//! [`FailurePolicy::Abort`] the first failed dispatch halts the batch, under
//! [`FailurePolicy::Continue`] each failure stays confined to its message.

use logchain_core::{config::FailurePolicy, Chain, DispatchError, Message, Outcome, Severity};
use std::io::BufRead;

/// The four demonstration messages, one per severity class.
pub fn sample_messages() -> Vec<Message> {
    vec![
        Message::new(Severity::Fatal, "fatal message"),
        Message::new(Severity::Error, "error message"),
        Message::new(Severity::Warning, "warning message"),
        Message::new(Severity::from_code(10), "unknown message"),
    ]
}

/// Read `<tag> <text>` lines, skipping blanks.
pub fn read_messages(reader: impl BufRead) -> std::io::Result<Vec<Message>> {
    let mut messages = Vec::new();
    for line in reader.lines() {
        if let Some(message) = Message::parse_line(&line?) {
            messages.push(message);
        }
    }
    Ok(messages)
}

/// One dispatched message and what came of it.
#[derive(Debug)]
pub struct BatchEntry {
    pub message: Message,
    pub result: Result<Outcome, DispatchError>,
}

/// Result of [`run_batch`].
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Entries for every message that was dispatched, in order.
    pub entries: Vec<BatchEntry>,
    /// Messages never dispatched because the batch halted.
    pub skipped: usize,
    pub halted: bool,
}

impl BatchReport {
    pub fn failures(&self) -> impl Iterator<Item = (&Message, &DispatchError)> {
        self.entries
            .iter()
            .filter_map(|e| e.result.as_ref().err().map(|err| (&e.message, err)))
    }

    pub fn handled(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.result, Ok(Outcome::Handled(_))))
            .count()
    }

    pub fn dropped(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.result, Ok(Outcome::Dropped)))
            .count()
    }

    pub fn first_failure(&self) -> Option<&DispatchError> {
        self.failures().next().map(|(_, err)| err)
    }

    /// One-line human summary.
    pub fn summary(&self) -> String {
        let mut out = format!(
            "dispatched={} handled={} dropped={} failed={}",
            self.entries.len(),
            self.handled(),
            self.dropped(),
            self.failures().count(),
        );
        if self.halted {
            out.push_str(&format!(" halted (skipped={})", self.skipped));
        }
        out
    }
}

/// Dispatch `messages` through `chain` in order, applying `policy` on failure.
pub fn run_batch(
    chain: &Chain,
    messages: impl IntoIterator<Item = Message>,
    policy: FailurePolicy,
) -> BatchReport {
    let mut report = BatchReport::default();
    let mut messages = messages.into_iter();

    for message in messages.by_ref() {
        let result = chain.dispatch(&message);
        if let Err(err) = &result {
            tracing::error!(
                kind = %err.kind(),
                severity = %message.severity(),
                %policy,
                "dispatch failed: {err}"
            );
        }
        let failed = result.is_err();
        report.entries.push(BatchEntry { message, result });

        if failed && policy == FailurePolicy::Abort {
            report.halted = true;
            break;
        }
    }

    report.skipped = messages.count();
    report
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
