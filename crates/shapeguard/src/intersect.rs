//! # Type-Level Intersection
//!
//! [`Both<A, B>`] is the output type of intersecting two heterogeneous
//! schemas: one JSON value viewed simultaneously as an `A` and as a `B`.
//! Wider intersections nest to the right, so three schemas produce
//! `Both<A, Both<B, C>>`.
//!
//! Deserialization buffers the input as a [`Value`] and builds each view
//! from that buffer, so the two halves may read overlapping or disjoint
//! parts of the same object, or even the same scalar.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A value that is both an `A` and a `B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Both<A, B> {
    /// The value viewed as an `A`.
    pub left: A,
    /// The same value viewed as a `B`.
    pub right: B,
}

impl<A, B> Both<A, B> {
    /// Pair two views of one value.
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }

    /// Split into `(left, right)`.
    pub fn into_parts(self) -> (A, B) {
        (self.left, self.right)
    }
}

impl<'de, A, B> Deserialize<'de> for Both<A, B>
where
    A: DeserializeOwned,
    B: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let left = A::deserialize(&value).map_err(D::Error::custom)?;
        let right = B::deserialize(&value).map_err(D::Error::custom)?;
        Ok(Self { left, right })
    }
}
