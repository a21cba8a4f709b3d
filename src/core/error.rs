use thiserror::Error;

/// Errors that can occur while pricing performances or rendering a statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BillingError {
    /// A play's genre is not one of the supported pricing genres.
    #[error("unsupported genre: {0}")]
    UnknownGenre(String),

    /// A performance references a play id absent from the play lookup.
    #[error("play not found: {0}")]
    PlayNotFound(String),

    /// An amount or credit total overflowed under the configured rules.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Path to the invalid field (e.g. "performances[2].play_id").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offender() {
        assert_eq!(
            BillingError::UnknownGenre("history".into()).to_string(),
            "unsupported genre: history"
        );
        assert_eq!(
            BillingError::PlayNotFound("othello".into()).to_string(),
            "play not found: othello"
        );
    }

    #[test]
    fn validation_error_display() {
        let err = ValidationError::new("performances[0].play_id", "unknown play 'x'");
        assert_eq!(err.to_string(), "performances[0].play_id: unknown play 'x'");
    }
}
