//! Free-standing assertion helper.

use serde_json::Value;

use crate::error::SchemaValidationError;
use crate::schema::Schema;

/// Message used by [`assert_type`] regardless of the schema.
pub const TYPE_ASSERTION_FAILED: &str = "Type assertion failed";

/// Fails when `schema` rejects `value`.
///
/// Unlike [`Schema::assert_type`], the error always carries the generic
/// [`TYPE_ASSERTION_FAILED`] message rather than the schema's own.
///
/// # Errors
///
/// Returns `SchemaValidationError` when `schema.validate(value)` is `false`.
pub fn assert_type<T>(value: &Value, schema: &Schema<T>) -> Result<(), SchemaValidationError> {
    if schema.validate(value) {
        Ok(())
    } else {
        Err(SchemaValidationError::new(TYPE_ASSERTION_FAILED))
    }
}
