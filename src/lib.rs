//! # flatpath — dot/bracket path codec for tree documents
//!
//! Flattens a hierarchical document (the JSON data model: objects,
//! arrays, scalars) into a flat map whose keys spell the full descent
//! path — `user.addresses[1].city` — and rebuilds the document from
//! such a map, whatever order its entries arrive in.
//!
//! ```
//! use flatpath::{flatten, unflatten, json_adapter};
//!
//! let doc = json_adapter::from_json(&serde_json::json!({
//!     "user": { "name": "ada", "tags": ["a", "b"] }
//! }));
//! let flat = flatten(&doc);
//! assert_eq!(flat.get("user.tags[1]").map(String::as_str), Some("b"));
//! assert_eq!(unflatten(&flat).unwrap(), doc);
//! ```
//!
//! Typical consumers are key-value stores, form payloads, and
//! diff/patch tooling that only understand flat string-keyed maps.
//! Both directions are pure functions over in-memory values: no I/O,
//! no shared state, no locking.

pub mod errors;
pub mod flatten;
pub mod json_adapter;
pub mod path;
pub mod unflatten;
pub mod value;

pub use errors::{Error, Result};
pub use path::{parse_path, Segment};
pub use value::{FlatMap, TreeValue};

pub use crate::flatten::flatten;
pub use crate::unflatten::unflatten;

use serde::de::DeserializeOwned;
use serde::Serialize;

// ── Serde-level API ──────────────────────────────────────────

/// Flatten any serializable value.
///
/// The value is serialized to a JSON tree first, so whatever serde
/// renders — struct fields, maps, sequences — flattens the same way a
/// parsed document would.  `None` fields serialize to JSON null and
/// therefore produce no entry.
pub fn to_flat<T: Serialize>(value: &T) -> Result<FlatMap> {
    let json = serde_json::to_value(value)?;
    Ok(flatten(&json_adapter::from_json(&json)))
}

/// Rebuild a typed value from a flat map.
///
/// Leaves come back as JSON strings, so the target type must accept
/// string representations of its fields; coercing `"42"` into a number
/// is the external binder's concern, not the codec's.
pub fn from_flat<T: DeserializeOwned>(flat: &FlatMap) -> Result<T> {
    let tree = unflatten(flat)?;
    Ok(serde_json::from_value(json_adapter::to_json(&tree))?)
}

// ── JSON-level API ───────────────────────────────────────────

/// Flatten a parsed JSON document.
pub fn flatten_json(value: &serde_json::Value) -> FlatMap {
    flatten(&json_adapter::from_json(value))
}

/// Rebuild a JSON document from a flat map.  Scalars come back as
/// JSON strings.
pub fn unflatten_json(flat: &FlatMap) -> Result<serde_json::Value> {
    Ok(json_adapter::to_json(&unflatten(flat)?))
}
