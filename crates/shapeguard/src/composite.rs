//! # Composite Schemas
//!
//! Combinators that build a schema out of existing ones. Each composite
//! predicate closes over clones of its children and asks them to
//! `validate` at check time. Nothing is cached between calls.
//!
//! Composites are open-world (extra object keys are ignored) and report
//! only pass/fail: a failing child surfaces as the composite's own fixed
//! message, never the child's.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::list::SchemaList;
use crate::schema::{from_options, AnySchema, CreateOptions, Schema};

const OBJECT_FAILED: &str = "Object validation failed";
const ARRAY_FAILED: &str = "Array validation failed";
const TUPLE_FAILED: &str = "Tuple validation failed";
const UNION_FAILED: &str = "Union validation failed";
const INTERSECTION_FAILED: &str = "Intersection validation failed";
const NULLABLE_FAILED: &str = "Nullable validation failed";
const RECORD_FAILED: &str = "Record validation failed";

/// Matches JSON objects whose every declared key is present and valid.
///
/// Keys are checked in declaration order and checking stops at the first
/// failure. Undeclared keys are ignored. Arrays are not objects.
///
/// The [`object!`](crate::object!) macro builds `fields` from
/// `key: schema` pairs.
pub fn object<I, K>(fields: I) -> Schema<Map<String, Value>>
where
    I: IntoIterator<Item = (K, AnySchema)>,
    K: Into<String>,
{
    let fields: Vec<(String, AnySchema)> = fields
        .into_iter()
        .map(|(key, schema)| (key.into(), schema))
        .collect();
    from_options(CreateOptions::new(OBJECT_FAILED, move |value: &Value| {
        value.as_object().is_some_and(|map| {
            fields
                .iter()
                .all(|(key, schema)| map.get(key).is_some_and(|field| schema.validate(field)))
        })
    }))
}

/// Matches arrays whose every element matches `element`.
///
/// The empty array always matches.
pub fn array<T>(element: Schema<T>) -> Schema<Vec<T>> {
    let element = element.erase();
    from_options(CreateOptions::new(ARRAY_FAILED, move |value: &Value| {
        value
            .as_array()
            .is_some_and(|items| items.iter().all(|item| element.validate(item)))
    }))
}

/// Matches arrays of exactly `schemas.len()` elements, each matching the
/// schema at its position.
pub fn tuple<L: SchemaList>(schemas: L) -> Schema<L::Tuple> {
    let schemas = schemas.into_schemas();
    from_options(CreateOptions::new(TUPLE_FAILED, move |value: &Value| {
        value.as_array().is_some_and(|items| {
            items.len() == schemas.len()
                && items
                    .iter()
                    .zip(&schemas)
                    .all(|(item, schema)| schema.validate(item))
        })
    }))
}

/// Matches values accepted by at least one of `schemas`.
///
/// Stops at the first match. With no schemas nothing matches.
pub fn union<L: SchemaList>(schemas: L) -> Schema<L::Union> {
    let schemas = schemas.into_schemas();
    from_options(CreateOptions::new(UNION_FAILED, move |value: &Value| {
        schemas.iter().any(|schema| schema.validate(value))
    }))
}

/// Matches values accepted by every one of `schemas`.
///
/// Stops at the first rejection. With no schemas everything matches.
pub fn intersection<L: SchemaList>(schemas: L) -> Schema<L::Intersection> {
    let schemas = schemas.into_schemas();
    from_options(CreateOptions::new(INTERSECTION_FAILED, move |value: &Value| {
        schemas.iter().all(|schema| schema.validate(value))
    }))
}

/// Matches `null` or anything `inner` matches.
pub fn nullable<T>(inner: Schema<T>) -> Schema<Option<T>> {
    let inner = inner.erase();
    from_options(CreateOptions::new(NULLABLE_FAILED, move |value: &Value| {
        value.is_null() || inner.validate(value)
    }))
}

/// Matches JSON objects whose every value matches `values`, whatever the keys.
pub fn record<T>(values: Schema<T>) -> Schema<HashMap<String, T>> {
    let values = values.erase();
    from_options(CreateOptions::new(RECORD_FAILED, move |value: &Value| {
        value
            .as_object()
            .is_some_and(|map| map.values().all(|field| values.validate(field)))
    }))
}

/// Build an [`object`] schema from `key: schema` pairs.
///
/// Keys are identifiers or string literals. Field schemas of any output
/// type are accepted and erased.
///
/// ```
/// use shapeguard::{array, number, object, string};
/// use serde_json::json;
///
/// let point = object! { x: number(), y: number(), "display name": string() };
/// assert!(point.validate(&json!({"x": 1, "y": 2, "display name": "origin"})));
///
/// let path = object! { points: array(point) };
/// assert!(path.validate(&json!({"points": []})));
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::object(::std::vec::Vec::<(::std::string::String, $crate::AnySchema)>::new())
    };
    ($($key:tt : $schema:expr),+ $(,)?) => {
        $crate::object([
            $((
                $crate::__object_key!($key),
                $crate::Schema::erase($schema),
            )),+
        ])
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __object_key {
    ($key:ident) => {
        ::std::stringify!($key)
    };
    ($key:literal) => {
        $key
    };
}
