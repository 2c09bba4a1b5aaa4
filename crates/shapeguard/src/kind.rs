//! # Runtime Type Tags
//!
//! `instance_of` needs a runtime answer to "is this value an instance of
//! that type". JSON values carry no class identity, so the question is
//! asked of an explicit type tag instead:
//!
//! - [`ValueKind`]: the six JSON value kinds, usable directly as tags.
//! - [`TypeTag`]: a trait for caller-defined tags (a tagged-object
//!   convention, a string format, anything decidable from a `&Value`).

use std::fmt;

use serde_json::Value;

/// A runtime type descriptor understood by [`crate::instance_of`].
///
/// Implementations must be total and deterministic: `is_instance` may not
/// panic and must give the same answer for the same value.
pub trait TypeTag: Send + Sync + 'static {
    /// The Rust type a conforming value casts to.
    type Instance;

    /// Name used in the failure message (`Expected instance of <name>`).
    fn name(&self) -> &str;

    /// Whether `value` is an instance of this tag.
    fn is_instance(&self, value: &Value) -> bool;
}

/// The kind of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// All kinds, in declaration order.
    pub const ALL: [ValueKind; 6] = [
        ValueKind::Null,
        ValueKind::Boolean,
        ValueKind::Number,
        ValueKind::String,
        ValueKind::Array,
        ValueKind::Object,
    ];

    /// The kind of the given value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Lowercase name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TypeTag for ValueKind {
    type Instance = Value;

    fn name(&self) -> &str {
        self.as_str()
    }

    fn is_instance(&self, value: &Value) -> bool {
        ValueKind::of(value) == *self
    }
}
