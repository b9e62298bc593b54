//! Shape classification for the filter's dispatch.
//!
//! The filter branches on whether a value *behaves* like a mapping, a
//! sequence, or neither. The closed set below is determined through the
//! value's capability accessors rather than by naming concrete types, so the
//! dispatch reads the same way the filter's contract is stated.

use serde_json::{Map, Value};

/// The three shape categories the filter distinguishes.
///
/// `Mapping` and `Sequence` borrow the underlying container so the caller
/// can walk it without a second accessor call.
#[derive(Debug)]
pub enum Shape<'a> {
    /// Key → value pairs in insertion order.
    Mapping(&'a Map<String, Value>),
    /// Ordered items.
    Sequence(&'a [Value]),
    /// Anything else: string, number, boolean, null.
    Scalar,
}

impl<'a> Shape<'a> {
    /// Classify a value by its container capabilities.
    pub fn of(value: &'a Value) -> Self {
        if let Some(map) = value.as_object() {
            Shape::Mapping(map)
        } else if let Some(items) = value.as_array() {
            Shape::Sequence(items)
        } else {
            Shape::Scalar
        }
    }

    /// Whether this shape is a container (mapping or sequence).
    pub fn is_container(&self) -> bool {
        !matches!(self, Shape::Scalar)
    }
}
