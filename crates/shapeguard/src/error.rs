//! # Error Types
//!
//! A single error kind covers every failure the engine can report: a value
//! did not conform to a schema. The error carries the failing schema's
//! fixed message and nothing else. There is no field path, no error code,
//! and no cause chain. Composite schemas report their own message, never
//! a child's.

use std::sync::Arc;

use thiserror::Error;

/// A value failed validation against a schema.
///
/// `Display` renders exactly the message, e.g. `Expected number` or
/// `Object validation failed`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SchemaValidationError {
    message: Arc<str>,
}

impl SchemaValidationError {
    /// Build an error carrying the given message.
    pub fn new(message: impl Into<Arc<str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_exactly_the_message() {
        let err = SchemaValidationError::new("Expected number");
        assert_eq!(err.to_string(), "Expected number");
        assert_eq!(err.message(), "Expected number");
    }

    #[test]
    fn errors_with_same_message_compare_equal() {
        let a = SchemaValidationError::new("Tuple validation failed");
        let b = SchemaValidationError::new(String::from("Tuple validation failed"));
        assert_eq!(a, b);
    }

    #[test]
    fn is_a_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&SchemaValidationError::new("x"));
    }
}
