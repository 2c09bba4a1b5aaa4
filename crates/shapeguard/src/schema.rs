//! # The Schema Contract
//!
//! Every schema in this crate is a [`Schema<T>`] built by one factory,
//! [`from_options`], from a predicate and a fixed failure message. The
//! factory is the only place the three operations are implemented:
//!
//! - [`Schema::validate`]: does the value conform? Never fails.
//! - [`Schema::assert_type`]: `Err` with the schema's message on `false`.
//! - [`Schema::cast`]: validate, then convert the value into `T`.
//!
//! ## Output Types
//!
//! `T` is a phantom: it names the Rust type a conforming value converts to
//! and never influences validation. Built-in constructors pick `T` so that
//! every value their predicate accepts also deserializes into `T`, which
//! keeps `validate(v) == cast(v).is_ok()`. [`Schema::typed`] re-types a
//! schema on the caller's word.
//!
//! ## Sharing
//!
//! The predicate and message sit behind `Arc`s. Cloning a schema is cheap,
//! and composites hold clones of their children rather than owning them.
//! `Schema<T>` is `Send + Sync` for every `T`.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::error::SchemaValidationError;

type Predicate = dyn Fn(&Value) -> bool + Send + Sync;

/// A schema whose output type is the untyped JSON value.
///
/// Heterogeneous children (object fields, runtime lists) are stored in
/// this erased form.
pub type AnySchema = Schema<Value>;

/// Construction-time inputs to [`from_options`].
///
/// Consumed by the factory; has no role once the schema exists.
pub struct CreateOptions<F> {
    /// Decides conformance. Must be total and deterministic.
    pub validate: F,
    /// Message carried by every failure of the resulting schema.
    pub message: Arc<str>,
}

impl<F> CreateOptions<F>
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    /// Pair a failure message with a predicate.
    pub fn new(message: impl Into<Arc<str>>, validate: F) -> Self {
        Self {
            validate,
            message: message.into(),
        }
    }
}

impl<F> fmt::Debug for CreateOptions<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateOptions")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// A reusable, immutable runtime check for values of shape `T`.
pub struct Schema<T> {
    predicate: Arc<Predicate>,
    message: Arc<str>,
    _output: PhantomData<fn() -> T>,
}

/// Build a schema from a predicate and a failure message.
///
/// Nothing is validated at construction; the predicate runs on every call.
pub fn from_options<T, F>(options: CreateOptions<F>) -> Schema<T>
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Schema::from_options(options)
}

impl<T> Schema<T> {
    /// See [`from_options`].
    pub fn from_options<F>(options: CreateOptions<F>) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(options.validate),
            message: options.message,
            _output: PhantomData,
        }
    }

    /// Whether `value` conforms to this schema.
    pub fn validate(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }

    /// Succeeds iff [`validate`](Self::validate) returns `true`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaValidationError` carrying this schema's message.
    pub fn assert_type(&self, value: &Value) -> Result<(), SchemaValidationError> {
        if self.validate(value) {
            Ok(())
        } else {
            Err(self.failure())
        }
    }

    /// Validate `value`, then convert it into `T`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaValidationError` carrying this schema's message when
    /// the value does not conform. A conforming value that still fails to
    /// deserialize into `T` (possible only when `T` was chosen by the caller
    /// through [`typed`](Self::typed) or [`from_options`]) is reported the
    /// same way, and logged.
    pub fn cast<'v>(&self, value: &'v Value) -> Result<T, SchemaValidationError>
    where
        T: Deserialize<'v>,
    {
        self.assert_type(value)?;
        T::deserialize(value).map_err(|e| {
            tracing::warn!(
                schema = %self.message,
                error = %e,
                "validated value does not convert to the schema's output type"
            );
            self.failure()
        })
    }

    /// The fixed message this schema fails with.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Forget the output type.
    pub fn erase(self) -> AnySchema {
        self.typed()
    }

    /// Re-type this schema. Predicate and message are unchanged.
    ///
    /// The caller vouches that every value the predicate accepts converts
    /// into `U`.
    pub fn typed<U>(self) -> Schema<U> {
        Schema {
            predicate: self.predicate,
            message: self.message,
            _output: PhantomData,
        }
    }

    fn failure(&self) -> SchemaValidationError {
        SchemaValidationError::new(Arc::clone(&self.message))
    }
}

impl<T> Clone for Schema<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            message: Arc::clone(&self.message),
            _output: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
