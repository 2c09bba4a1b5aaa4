//! # Primitive Schemas
//!
//! Leaf constructors. Each produces a predicate and a fixed message and
//! hands them to [`from_options`].

use serde_json::{Map, Number, Value};

use crate::kind::TypeTag;
use crate::schema::{from_options, AnySchema, CreateOptions, Schema};

/// A value [`of`] can compare against.
pub trait Literal {
    /// The JSON form of this literal, or its display text when no JSON
    /// value can equal it.
    fn into_literal(self) -> Result<Value, String>;
}

macro_rules! impl_literal_via_into {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Literal for $ty {
                fn into_literal(self) -> Result<Value, String> {
                    Ok(Value::from(self))
                }
            }
        )+
    };
}

impl_literal_via_into!(
    Value, Number, Map<String, Value>, String, &str, bool, (),
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize,
);

impl Literal for f64 {
    fn into_literal(self) -> Result<Value, String> {
        Number::from_f64(self)
            .map(Value::Number)
            .ok_or_else(|| self.to_string())
    }
}

impl Literal for f32 {
    fn into_literal(self) -> Result<Value, String> {
        if self.is_finite() {
            Ok(Value::from(self))
        } else {
            Err(self.to_string())
        }
    }
}

/// Matches values strictly equal to `expected`.
///
/// Numbers compare by numeric value, so `1` and `1.0` are equal while
/// `"1"` and `1` are not. Arrays and objects compare element by element
/// under the same rule. Non-finite floats equal nothing.
pub fn of(expected: impl Literal) -> AnySchema {
    match expected.into_literal() {
        Ok(expected) => {
            let message = format!("Expected {expected}");
            from_options(CreateOptions::new(message, move |value: &Value| {
                strict_equals(&expected, value)
            }))
        }
        Err(shown) => from_options(CreateOptions::new(
            format!("Expected {shown}"),
            |_: &Value| false,
        )),
    }
}

/// Matches values that are instances of `tag`.
pub fn instance_of<Tag: TypeTag>(tag: Tag) -> Schema<Tag::Instance> {
    let message = format!("Expected instance of {}", tag.name());
    from_options(CreateOptions::new(message, move |value: &Value| {
        tag.is_instance(value)
    }))
}

/// Matches any JSON number.
pub fn number() -> Schema<f64> {
    from_options(CreateOptions::new("Expected number", Value::is_number))
}

/// Matches any JSON string.
pub fn string() -> Schema<String> {
    from_options(CreateOptions::new("Expected string", Value::is_string))
}

/// Matches `true` and `false`.
pub fn boolean() -> Schema<bool> {
    from_options(CreateOptions::new("Expected boolean", Value::is_boolean))
}

/// Matches `null`.
pub fn null() -> Schema<()> {
    from_options(CreateOptions::new("Expected null", Value::is_null))
}

/// Matches numbers with an exact `i64` representation.
pub fn integer() -> Schema<i64> {
    from_options(CreateOptions::new("Expected integer", Value::is_i64))
}

/// Matches every value.
pub fn any() -> AnySchema {
    from_options(CreateOptions::new("Expected any value", |_: &Value| true))
}

fn strict_equals(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| strict_equals(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| strict_equals(x, y)))
        }
        _ => expected == actual,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}
