//! # Schema Laws
//!
//! The behavioral laws every schema combination must satisfy, exercised
//! through the public API only.

use serde::Deserialize;
use serde_json::{json, Value};

use shapeguard::{
    array, assert_type, boolean, instance_of, intersection, nullable, number, object, of, string,
    tuple, union, Both, Schema, TypeTag, ValueKind,
};

/// `validate` answers true exactly when `cast` succeeds.
fn assert_agreement<T>(schema: &Schema<T>, value: &Value)
where
    T: for<'de> Deserialize<'de>,
{
    assert_eq!(
        schema.validate(value),
        schema.cast(value).is_ok(),
        "validate and cast disagree on {value} for schema {schema:?}"
    );
}

// =========================================================================
// Agreement
// =========================================================================

#[test]
fn agreement_across_a_corpus_of_inputs() {
    let inputs = [
        json!(null),
        json!(true),
        json!(0),
        json!(-1.5),
        json!("x"),
        json!([]),
        json!([1, "x"]),
        json!([1, "x", true]),
        json!({}),
        json!({"a": 1}),
        json!({"a": 1, "b": "x"}),
        json!({"a": [true, false], "b": null}),
    ];
    for value in &inputs {
        assert_agreement(&number(), value);
        assert_agreement(&string(), value);
        assert_agreement(&boolean(), value);
        assert_agreement(&of(1), value);
        assert_agreement(&instance_of(ValueKind::Object), value);
        assert_agreement(&array(boolean()), value);
        assert_agreement(&tuple((number(), string())), value);
        assert_agreement(&union((number(), string())), value);
        assert_agreement(&union(()), value);
        assert_agreement(&intersection(()), value);
        assert_agreement(
            &intersection((object! { a: number() }, object! { b: string() })),
            value,
        );
        assert_agreement(&object! { a: nullable(array(boolean())) }, value);
    }
}

// =========================================================================
// Openness, exactness, duals, degenerate forms
// =========================================================================

#[test]
fn openness_law() {
    let schema = object! { a: number() };
    assert!(schema.validate(&json!({"a": 1, "b": 2})));
    assert!(!schema.validate(&json!({"b": 2})));
}

#[test]
fn exactness_law() {
    let schema = tuple((number(), string()));
    assert!(schema.validate(&json!([1, "x"])));
    assert!(!schema.validate(&json!([1, "x", true])));
    assert!(!schema.validate(&json!([1, 2])));
}

#[test]
fn union_and_intersection_duals() {
    let either = union((number(), string()));
    assert!(!either.validate(&json!(true)));
    assert!(either.validate(&json!(5)));

    let both = intersection((object! { a: number() }, object! { b: string() }));
    assert!(both.validate(&json!({"a": 1, "b": "x"})));
    assert!(!both.validate(&json!({"a": 1})));
}

#[test]
fn degenerate_combinators() {
    for value in [json!(null), json!(1), json!("s"), json!([]), json!({"k": 1})] {
        assert!(!union(()).validate(&value));
        assert!(intersection(()).validate(&value));
    }
}

#[test]
fn primitive_boundary() {
    assert!(of(5).validate(&json!(5)));
    assert!(!of(5).validate(&json!("5")));
}

#[test]
fn array_vacuous_truth() {
    assert!(array(number()).validate(&json!([])));
}

// =========================================================================
// Failure messages
// =========================================================================

#[test]
fn each_combinator_has_a_fixed_message() {
    let cases: Vec<(Schema<Value>, Value, &str)> = vec![
        (number().erase(), json!("1"), "Expected number"),
        (string().erase(), json!(1), "Expected string"),
        (boolean().erase(), json!(1), "Expected boolean"),
        (object! { a: number() }.erase(), json!({}), "Object validation failed"),
        (array(number()).erase(), json!(["1"]), "Array validation failed"),
        (tuple((number(),)).erase(), json!([]), "Tuple validation failed"),
        (union(()), json!(1), "Union validation failed"),
        (
            intersection((number(), string())).erase(),
            json!(1),
            "Intersection validation failed",
        ),
    ];
    for (schema, value, message) in cases {
        let err = schema.assert_type(&value).unwrap_err();
        assert_eq!(err.message(), message);
        assert_eq!(schema.cast(&value).unwrap_err().message(), message);
    }
}

#[test]
fn nested_failures_surface_the_outer_message() {
    let schema = array(object! { id: number() });
    let err = schema.cast(&json!([{"id": 1}, {"id": "2"}])).unwrap_err();
    assert_eq!(err.to_string(), "Array validation failed");
}

#[test]
fn free_assert_type_uses_generic_message() {
    let schema = object! { a: number() };
    let err = assert_type(&json!({}), &schema).unwrap_err();
    assert_eq!(err.message(), "Type assertion failed");
    assert!(assert_type(&json!({"a": 0}), &schema).is_ok());
}

// =========================================================================
// Typed casting
// =========================================================================

#[derive(Debug, Deserialize, PartialEq)]
struct Account {
    id: u64,
    owner: String,
    #[serde(default)]
    tags: Vec<String>,
}

fn account() -> Schema<Account> {
    let shape = object! {
        id: number(),
        owner: string(),
    };
    shape.typed()
}

#[test]
fn typed_object_casts_into_a_struct() {
    let value = json!({"id": 9, "owner": "ops", "tags": ["a"], "ignored": {}});
    let parsed = account().cast(&value).unwrap();
    assert_eq!(
        parsed,
        Account {
            id: 9,
            owner: "ops".into(),
            tags: vec!["a".into()],
        }
    );
}

#[test]
fn typed_object_rejects_before_converting() {
    let err = account().cast(&json!({"id": "9", "owner": "ops"})).unwrap_err();
    assert_eq!(err.message(), "Object validation failed");
}

#[derive(Debug, Deserialize, PartialEq)]
struct Labelled {
    label: String,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Weighted {
    weight: f64,
}

#[test]
fn intersection_of_typed_objects_yields_both_structs() {
    let labelled: Schema<Labelled> = object! { label: string() }.typed();
    let weighted: Schema<Weighted> = object! { weight: number() }.typed();
    let schema = intersection((labelled, weighted));

    let Both { left, right } = schema.cast(&json!({"label": "crate", "weight": 2.5})).unwrap();
    assert_eq!(left.label, "crate");
    assert_eq!(right.weight, 2.5);
}

#[test]
fn tuple_casts_positionally() {
    let pair = tuple((string(), array(number())));
    let (name, values) = pair.cast(&json!(["series", [1, 2, 3]])).unwrap();
    assert_eq!(name, "series");
    assert_eq!(values, vec![1.0, 2.0, 3.0]);
}

// =========================================================================
// Caller-supplied type tags
// =========================================================================

/// Objects tagged with a `"type"` discriminator.
struct Tagged(&'static str);

impl TypeTag for Tagged {
    type Instance = Value;

    fn name(&self) -> &str {
        self.0
    }

    fn is_instance(&self, value: &Value) -> bool {
        value.get("type").and_then(Value::as_str) == Some(self.0)
    }
}

#[test]
fn instance_of_with_discriminator_tag() {
    let circle = instance_of(Tagged("Circle"));
    assert!(circle.validate(&json!({"type": "Circle", "r": 1})));
    assert!(!circle.validate(&json!({"type": "Square"})));
    assert!(!circle.validate(&json!("Circle")));
    assert_eq!(
        circle.assert_type(&json!({})).unwrap_err().message(),
        "Expected instance of Circle"
    );

    let shape = union([instance_of(Tagged("Circle")), instance_of(Tagged("Square"))]);
    assert!(shape.validate(&json!({"type": "Square"})));
}
