//! Tree-shaped document values and their flattened form.
//!
//! The codec operates over four shapes — null, scalar, object, array —
//! mirroring the JSON data model.  Leaves are carried as text: once a
//! document is flattened, numbers, booleans, and strings are all plain
//! strings, and reconstruction does not try to guess types back.
//!
//! Objects are insertion-ordered.  The flattener walks fields in their
//! stored order, and the unflattener keeps fields in the order they are
//! first seen, so dumps of either form are deterministic.

use std::fmt;

use indexmap::IndexMap;

/// A flattened document: full descent path → scalar text.
///
/// Keys follow the dot/bracket grammar (`user.addresses[1].city`).
/// Entry order is the flattener's encounter order; the unflattener
/// accepts entries in any order.
pub type FlatMap = IndexMap<String, String>;

/// A value in the hierarchical document model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeValue {
    /// Structural absence.  Produces no flattened entry.
    Null,
    /// A leaf, held as its textual form.
    Scalar(String),
    /// Ordered field → value mapping.
    Object(IndexMap<String, TreeValue>),
    /// Ordered element sequence.
    Array(Vec<TreeValue>),
}

impl TreeValue {
    /// Leaf constructor accepting anything stringly.
    pub fn scalar(text: impl Into<String>) -> Self {
        TreeValue::Scalar(text.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, TreeValue::Null)
    }

    /// Leaf text, if this is a scalar.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            TreeValue::Scalar(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, TreeValue>> {
        match self {
            TreeValue::Object(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[TreeValue]> {
        match self {
            TreeValue::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for TreeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeValue::Null => write!(f, "null"),
            TreeValue::Scalar(text) => write!(f, "\"{}\"", text),
            TreeValue::Object(fields) => write!(f, "{{{} fields}}", fields.len()),
            TreeValue::Array(items) => write!(f, "[{} items]", items.len()),
        }
    }
}
