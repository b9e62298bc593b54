//! # omit-core
//!
//! Recursive omit-marker filtering for nested JSON-like values.
//!
//! Configuration pipelines sometimes need to *conditionally delete* an entry
//! rather than set it to an empty value. The convention here: bind the entry
//! to a well-known sentinel string (the **omit marker**) and run the cleaned
//! structure through [`remove_omit_entries`], which walks the value tree and
//! drops every mapping entry and sequence item whose value equals the marker.
//!
//! ## Quick start
//!
//! ```rust
//! use omit_core::{remove_omit_entries, OMIT_MARKER};
//! use serde_json::json;
//!
//! let raw = json!({"user": "alice", "token": OMIT_MARKER, "env": [OMIT_MARKER, "prod"]});
//! assert_eq!(remove_omit_entries(&raw), json!({"user": "alice", "env": ["prod"]}));
//! ```
//!
//! ## Modules
//!
//! - [`filter`] — the recursive filter (`remove_omit_entries` and friends)
//! - [`marker`] — the sentinel constant and its accessor
//! - [`registry`] — name → filter-function lookup for host integration
//! - [`shape`] — mapping/sequence/scalar classification
//! - [`error`] — error types for the fallible JSON-string path

pub mod error;
pub mod filter;
pub mod marker;
pub mod registry;
pub mod shape;

pub use error::OmitError;
pub use filter::{remove_omit_entries, remove_omit_entries_json, remove_omit_entries_with};
pub use marker::{get_marker, OMIT_MARKER};
pub use registry::{lookup, FilterFn, FILTER_NAMES};
pub use shape::Shape;
