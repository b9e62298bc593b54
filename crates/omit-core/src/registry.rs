//! Name → filter-function lookup for host integration.
//!
//! Hosts that resolve capabilities by name (templating engines, plugin
//! loaders) get a stable table of the two operations this crate exposes:
//!
//! - `remove_omit_entries` -- apply the filter with the default marker
//! - `remove_omit_entries_get_marker` -- return the marker, ignoring the
//!   argument
//!
//! Registering these two names with a host's filter mechanism is the host
//! shim's job, not this crate's.

use serde_json::Value;

use crate::error::{OmitError, Result};
use crate::filter::remove_omit_entries;
use crate::marker::get_marker;

/// A registered filter capability: one value in, one value out.
pub type FilterFn = fn(&Value) -> Value;

/// The capability names a host can resolve, in registration order.
pub const FILTER_NAMES: &[&str] = &["remove_omit_entries", "remove_omit_entries_get_marker"];

/// Resolve a capability name to its function.
///
/// # Errors
///
/// Returns [`OmitError::UnknownFilter`] for names not in [`FILTER_NAMES`].
///
/// # Examples
///
/// ```
/// use omit_core::{lookup, OMIT_MARKER};
/// use serde_json::{json, Value};
///
/// let filter = lookup("remove_omit_entries").unwrap();
/// assert_eq!(filter(&json!({"a": OMIT_MARKER})), json!({}));
///
/// let marker = lookup("remove_omit_entries_get_marker").unwrap();
/// assert_eq!(marker(&Value::Null), Value::String(OMIT_MARKER.into()));
/// ```
pub fn lookup(name: &str) -> Result<FilterFn> {
    match name {
        "remove_omit_entries" => Ok(remove_omit_entries),
        "remove_omit_entries_get_marker" => Ok(get_marker),
        other => Err(OmitError::UnknownFilter {
            name: other.to_string(),
        }),
    }
}
