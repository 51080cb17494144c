//! Static message corpora used across harnesses.

/// Input lines in `<tag> <text>` form, one per severity class, in the same
/// order as the built-in samples.
pub const CORPUS_SAMPLE_LINES: &[&str] = &[
    "fatal fatal message",
    "error error message",
    "warning warning message",
    "10 unknown message",
];

/// Lines that exercise tag aliases, numeric codes, and blank-line skipping.
pub const CORPUS_MIXED_TAGS: &[&str] = &[
    "WARN disk usage at 92% on /dev/sda1",
    "",
    "1 connection refused: db.internal:5432",
    "err payment gateway timeout",
    "   ",
    "2 slow query (4200ms)",
    "info server started",
];
