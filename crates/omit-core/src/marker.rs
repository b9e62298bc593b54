//! The omit marker -- a process-wide sentinel meaning "delete this entry".
//!
//! The literal is deliberately long and human-unlikely-to-collide so that
//! configuration values produced by unrelated logic can be compared against
//! it reliably. It must stay byte-for-byte stable across releases: callers
//! embed it in data long before the filter ever sees that data.

use serde_json::Value;

/// The sentinel string. A mapping entry or sequence item whose *value*
/// equals this marker is deleted by the filter.
pub const OMIT_MARKER: &str = "__designated_omit_marker_that_results_in_deletion_of_the_corresponding_entry_in_dict_or_item_in_list";

/// Return the marker as a value, ignoring the argument.
///
/// Exists for host lookup mechanisms that pass every capability an argument
/// and cannot reference [`OMIT_MARKER`] directly.
///
/// ```
/// use omit_core::{get_marker, OMIT_MARKER};
/// use serde_json::{json, Value};
///
/// assert_eq!(get_marker(&Value::Null), Value::String(OMIT_MARKER.into()));
/// assert_eq!(get_marker(&json!({"ignored": true})), Value::String(OMIT_MARKER.into()));
/// ```
pub fn get_marker(_arg: &Value) -> Value {
    Value::String(OMIT_MARKER.to_string())
}

/// Value-equality check against a marker string.
///
/// Only strings can match; containers, numbers, booleans, and null never
/// compare equal to a string marker.
pub fn is_marker(value: &Value, marker: &str) -> bool {
    value.as_str() == Some(marker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_strings_match_the_marker() {
        assert!(is_marker(&json!(OMIT_MARKER), OMIT_MARKER));
        assert!(!is_marker(&json!("something else"), OMIT_MARKER));
        assert!(!is_marker(&json!(null), OMIT_MARKER));
        assert!(!is_marker(&json!(0), OMIT_MARKER));
        assert!(!is_marker(&json!([OMIT_MARKER]), OMIT_MARKER));
        assert!(!is_marker(&json!({"k": OMIT_MARKER}), OMIT_MARKER));
    }

    #[test]
    fn matching_is_by_value_not_identity() {
        // A string built at runtime still matches.
        let rebuilt = String::from_utf8(OMIT_MARKER.as_bytes().to_vec()).unwrap();
        assert!(is_marker(&Value::String(rebuilt), OMIT_MARKER));
    }
}
