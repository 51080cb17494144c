//! Core types for logchain-core.
//!
//! This module defines the values that travel through the handler chain: the
//! immutable [`Message`] and its [`Severity`] tag.

/// Severity tag carried by every [`Message`].
///
/// Anything that is not one of the three known classes collapses into
/// [`Severity::Unrecognized`]; parsing a tag never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Fatal,
    Error,
    Warning,
    Unrecognized,
}

impl Severity {
    /// Map a legacy numeric code onto a severity.
    ///
    /// Codes follow the historical ordering: `0` fatal, `1` error, `2` warning.
    /// Every other code is [`Severity::Unrecognized`].
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Severity::Fatal,
            1 => Severity::Error,
            2 => Severity::Warning,
            _ => Severity::Unrecognized,
        }
    }

    /// Parse a textual or numeric tag, case-insensitively.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        if let Ok(code) = tag.parse::<i64>() {
            return Self::from_code(code);
        }
        match tag.to_ascii_lowercase().as_str() {
            "fatal" => Severity::Fatal,
            "error" | "err" => Severity::Error,
            "warning" | "warn" => Severity::Warning,
            _ => Severity::Unrecognized,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Fatal => write!(f, "FATAL"),
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Unrecognized => write!(f, "UNRECOGNIZED"),
        }
    }
}

/// A single log event. Constructed once, never mutated, dropped after dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    severity: Severity,
    text: String,
}

impl Message {
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parse a `<tag> <text>` input line.
    ///
    /// The tag is everything up to the first whitespace run and goes through
    /// [`Severity::from_tag`]. A tag with nothing after it yields empty text.
    /// Blank lines return `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (tag, text) = line
            .split_once(char::is_whitespace)
            .map(|(t, rest)| (t, rest.trim_start()))
            .unwrap_or((line, ""));
        Some(Self::new(Severity::from_tag(tag), text))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
