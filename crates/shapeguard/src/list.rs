//! # Variadic Schema Lists
//!
//! `tuple`, `union` and `intersection` take "zero or more schemas". The
//! [`SchemaList`] trait is how they accept that argument and how each
//! combinator learns its output type.
//!
//! | Argument | `Tuple` | `Union` | `Intersection` |
//! |---|---|---|---|
//! | `()` | `[Value; 0]` | `Value` | `Value` |
//! | `(Schema<A>,)` | `(A,)` | `Value` | `A` |
//! | `(Schema<A>, Schema<B>)` | `(A, B)` | `Value` | `Both<A, B>` |
//! | `(Schema<A>, Schema<B>, Schema<C>)` | `(A, B, C)` | `Value` | `Both<A, Both<B, C>>` |
//! | `Vec<Schema<T>>`, `[Schema<T>; N]` | `Vec<T>` | `T` | `Value` |
//!
//! Heterogeneous unions are typed `Value`: Rust has no anonymous sum type.
//! Collect alternatives of one type into a `Vec` or array to keep `T`.
//!
//! A runtime list may be empty, and an empty intersection accepts every
//! value, so intersecting a `Vec` or array is typed `Value`. Use a tuple
//! argument to get a typed intersection.

use serde_json::Value;

use crate::intersect::Both;
use crate::schema::{AnySchema, Schema};

/// Zero or more schemas passed to a variadic combinator.
pub trait SchemaList {
    /// Output of [`crate::tuple`].
    type Tuple;
    /// Output of [`crate::union`].
    type Union;
    /// Output of [`crate::intersection`].
    type Intersection;

    /// The schemas, in argument order.
    fn into_schemas(self) -> Vec<AnySchema>;
}

impl SchemaList for () {
    type Tuple = [Value; 0];
    type Union = Value;
    type Intersection = Value;

    fn into_schemas(self) -> Vec<AnySchema> {
        Vec::new()
    }
}

impl<T> SchemaList for Vec<Schema<T>> {
    type Tuple = Vec<T>;
    type Union = T;
    type Intersection = Value;

    fn into_schemas(self) -> Vec<AnySchema> {
        self.into_iter().map(Schema::erase).collect()
    }
}

impl<T, const N: usize> SchemaList for [Schema<T>; N] {
    type Tuple = Vec<T>;
    type Union = T;
    type Intersection = Value;

    fn into_schemas(self) -> Vec<AnySchema> {
        self.into_iter().map(Schema::erase).collect()
    }
}

macro_rules! impl_schema_list_for_tuple {
    ($intersection:ty; $($name:ident . $idx:tt),+) => {
        impl<$($name),+> SchemaList for ($(Schema<$name>,)+) {
            type Tuple = ($($name,)+);
            type Union = Value;
            type Intersection = $intersection;

            fn into_schemas(self) -> Vec<AnySchema> {
                vec![$(self.$idx.erase()),+]
            }
        }
    };
}

impl_schema_list_for_tuple!(A; A.0);
impl_schema_list_for_tuple!(Both<A, B>; A.0, B.1);
impl_schema_list_for_tuple!(Both<A, Both<B, C>>; A.0, B.1, C.2);
impl_schema_list_for_tuple!(Both<A, Both<B, Both<C, D>>>; A.0, B.1, C.2, D.3);
impl_schema_list_for_tuple!(Both<A, Both<B, Both<C, Both<D, E>>>>; A.0, B.1, C.2, D.3, E.4);
impl_schema_list_for_tuple!(
    Both<A, Both<B, Both<C, Both<D, Both<E, F>>>>>;
    A.0, B.1, C.2, D.3, E.4, F.5
);
