//! # shapeguard — Composable Runtime Schemas
//!
//! Data of unknown provenance arrives as an untyped [`serde_json::Value`].
//! A [`Schema<T>`] states what shape that value must have and which Rust
//! type `T` it becomes once it does. Every schema offers three operations:
//!
//! - [`Schema::validate`]: `bool`, never fails.
//! - [`Schema::assert_type`]: `Err(SchemaValidationError)` on mismatch.
//! - [`Schema::cast`]: validate, then convert into `T`.
//!
//! ```
//! use shapeguard::{array, integer, nullable, object, string, union, of};
//! use serde_json::json;
//!
//! let user = object! {
//!     id: integer(),
//!     name: string(),
//!     tags: array(string()),
//!     role: union([of("admin"), of("member")]),
//!     manager: nullable(integer()),
//! };
//!
//! let input = json!({
//!     "id": 7,
//!     "name": "Ada",
//!     "tags": ["ops"],
//!     "role": "admin",
//!     "manager": null,
//!     "unrelated": true
//! });
//! assert!(user.validate(&input));
//!
//! let ids = array(integer()).cast(&json!([1, 2, 3])).unwrap();
//! assert_eq!(ids, vec![1, 2, 3]);
//! ```
//!
//! ## Building Blocks
//!
//! - **Factory**: [`from_options`] turns a predicate and a fixed message
//!   into a full schema. Every constructor below goes through it.
//! - **Primitives**: [`of`], [`instance_of`], [`number`], [`string`],
//!   [`boolean`], [`null`], [`integer`], [`any`].
//! - **Composites**: [`object`] / [`object!`], [`array`], [`tuple`],
//!   [`union`], [`intersection`], [`nullable`], [`record`].
//! - **Free helper**: [`assert_type`].
//!
//! ## Failure Policy
//!
//! One error kind, [`SchemaValidationError`], carrying the failing
//! schema's fixed message. Composites never forward a child's message and
//! never say which part failed. The free [`assert_type`] always reports
//! `Type assertion failed`.
//!
//! ## Crate Policy
//!
//! - Schemas are immutable, `Clone`, `Send` and `Sync`; validation is pure.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod assert;
pub mod composite;
pub mod error;
pub mod intersect;
pub mod kind;
pub mod list;
pub mod primitive;
pub mod schema;

pub use assert::{assert_type, TYPE_ASSERTION_FAILED};
pub use composite::{array, intersection, nullable, object, record, tuple, union};
pub use error::SchemaValidationError;
pub use intersect::Both;
pub use kind::{TypeTag, ValueKind};
pub use list::SchemaList;
pub use primitive::{any, boolean, instance_of, integer, null, number, of, string, Literal};
pub use schema::{from_options, AnySchema, CreateOptions, Schema};
