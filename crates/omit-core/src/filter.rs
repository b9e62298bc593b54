//! Recursive omit filtering -- drop entries bound to the omit marker.
//!
//! The filter walks a value tree and removes every mapping entry and every
//! sequence item whose value equals the marker, at any depth. Surviving
//! entries keep their original relative order. New containers are allocated
//! for every mapping and sequence encountered; the input is never mutated.
//!
//! # Asymmetries that are part of the contract
//!
//! - Only *values* are matched. A mapping key equal to the marker is kept.
//! - A mapping value that is itself a container is recursed into and its key
//!   is always kept, even when the cleaned result ends up empty.
//! - A sequence item is compared against the marker *before* recursion. A
//!   container item can never match a string marker, so in practice this
//!   only ever drops scalars.
//! - A scalar passed as the whole input is returned unchanged, marker
//!   included: the filter removes marker occurrences found inside a
//!   container, never the input itself.
//!
//! Inputs are assumed acyclic. A cyclic structure recurses until the call
//! stack is exhausted; there is no cycle detection.

use serde_json::{Map, Value};

use crate::error::Result;
use crate::marker::{is_marker, OMIT_MARKER};
use crate::shape::Shape;

/// Filter `thing` with the default [`OMIT_MARKER`].
///
/// # Examples
///
/// ```
/// use omit_core::{remove_omit_entries, OMIT_MARKER};
/// use serde_json::json;
///
/// let thing = json!({"keep": 1, "drop": OMIT_MARKER, "nested": {"drop": OMIT_MARKER}});
/// assert_eq!(remove_omit_entries(&thing), json!({"keep": 1, "nested": {}}));
///
/// // Scalars pass through untouched, the marker itself included.
/// assert_eq!(remove_omit_entries(&json!(OMIT_MARKER)), json!(OMIT_MARKER));
/// assert_eq!(remove_omit_entries(&json!("")), json!(""));
/// ```
pub fn remove_omit_entries(thing: &Value) -> Value {
    remove_omit_entries_with(thing, OMIT_MARKER)
}

/// Filter `thing` with a caller-supplied marker.
///
/// The override applies at every depth, which makes tests independent of the
/// well-known constant.
///
/// ```
/// use omit_core::remove_omit_entries_with;
/// use serde_json::json;
///
/// let thing = json!({"a": "DROP", "b": ["DROP", "x"]});
/// assert_eq!(remove_omit_entries_with(&thing, "DROP"), json!({"b": ["x"]}));
/// ```
pub fn remove_omit_entries_with(thing: &Value, marker: &str) -> Value {
    match Shape::of(thing) {
        Shape::Mapping(map) => filter_mapping(map, marker),
        Shape::Sequence(items) => filter_sequence(items, marker),
        Shape::Scalar => thing.clone(),
    }
}

/// Rebuild a mapping without its marker-valued entries.
///
/// Container values are recursed unconditionally and their keys always kept.
/// Keys are never compared against the marker.
fn filter_mapping(map: &Map<String, Value>, marker: &str) -> Value {
    let mut cleaned = Map::new();
    for (key, value) in map {
        match Shape::of(value) {
            Shape::Scalar => {
                if !is_marker(value, marker) {
                    cleaned.insert(key.clone(), value.clone());
                }
            }
            _ => {
                cleaned.insert(key.clone(), remove_omit_entries_with(value, marker));
            }
        }
    }
    Value::Object(cleaned)
}

/// Rebuild a sequence without its marker items, recursing into survivors.
///
/// The marker check precedes recursion.
fn filter_sequence(items: &[Value], marker: &str) -> Value {
    Value::Array(
        items
            .iter()
            .filter(|item| !is_marker(item, marker))
            .map(|item| remove_omit_entries_with(item, marker))
            .collect(),
    )
}

/// Parse a JSON document, filter it with the default marker, and serialize
/// the cleaned result back to a JSON string.
///
/// This is the only fallible surface in the crate; the in-memory filter is
/// total over its input domain.
///
/// # Errors
///
/// Returns an error if the input is not valid JSON.
///
/// # Examples
///
/// ```
/// use omit_core::{remove_omit_entries_json, OMIT_MARKER};
///
/// let json = format!(r#"{{"keep":"v","drop":"{OMIT_MARKER}"}}"#);
/// assert_eq!(remove_omit_entries_json(&json).unwrap(), r#"{"keep":"v"}"#);
/// ```
pub fn remove_omit_entries_json(json: &str) -> Result<String> {
    let value: Value = serde_json::from_str(json)?;
    let cleaned = remove_omit_entries(&value);
    Ok(serde_json::to_string(&cleaned)?)
}
