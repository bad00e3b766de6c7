//! Error taxonomy for field and expression parsing.

use thiserror::Error;

/// A single parse failure. The first failure wins; nothing partial is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CronError {
    /// The whole expression, or one field token, is empty or blank.
    #[error("empty expression{}", .field.map(|f| format!(" in {f} field")).unwrap_or_default())]
    EmptyInput { field: Option<&'static str> },

    /// Disallowed characters, or an operator with the wrong number of operands.
    #[error("{field}: {reason}: {token:?}")]
    Syntax {
        field: &'static str,
        token: String,
        reason: &'static str,
    },

    /// Hyphen range whose left bound exceeds its right bound.
    #[error("{field}: inverted range {token:?} ({left} > {right})")]
    InvertedRange {
        field: &'static str,
        token: String,
        left: u32,
        right: u32,
    },

    /// A resolved value lies outside the field's bounds.
    #[error("{field}: value {value} outside permitted range {min}-{max}")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: u32,
        max: u32,
    },

    /// Slash step that is not an integer of at least 1.
    #[error("{field}: invalid step in {token:?} (step must be an integer >= 1)")]
    InvalidStep { field: &'static str, token: String },

    /// Fewer than five schedule fields plus a command.
    #[error("too few fields: expected 5 schedule fields and a command, got {found} segments in {line:?}")]
    TooFewFields { line: String, found: usize },
}

impl CronError {
    /// Stable machine-readable tag for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CronError::EmptyInput { .. } => "empty",
            CronError::Syntax { .. } => "syntax",
            CronError::InvertedRange { .. } => "inverted-range",
            CronError::OutOfRange { .. } => "out-of-range",
            CronError::InvalidStep { .. } => "invalid-step",
            CronError::TooFewFields { .. } => "structure",
        }
    }

    /// Field label the error is attached to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CronError::EmptyInput { field } => *field,
            CronError::Syntax { field, .. }
            | CronError::InvertedRange { field, .. }
            | CronError::OutOfRange { field, .. }
            | CronError::InvalidStep { field, .. } => Some(*field),
            CronError::TooFewFields { .. } => None,
        }
    }
}
