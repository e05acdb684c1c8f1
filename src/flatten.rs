//! Flattener — depth-first encoding of a tree into path/text entries.
//!
//! The walk is pre-order: object fields in their stored order, array
//! elements by position, so the resulting map reads top-to-bottom like
//! the document itself.  Nulls (and therefore empty containers) emit
//! nothing — absence is the flattened form of a structurally absent
//! leaf.  A caller that needs an explicit "set to null" signal models
//! it as a scalar with a sentinel value of its own choosing.

use crate::value::{FlatMap, TreeValue};

/// Flatten a tree into its path → scalar form.
///
/// Total: any tree flattens.  A bare scalar at the root lands under the
/// empty key.
pub fn flatten(value: &TreeValue) -> FlatMap {
    let mut out = FlatMap::new();
    let mut prefix = String::new();
    flatten_into(value, &mut prefix, &mut out);
    out
}

/// Recursive worker.  `prefix` is the path accumulated so far; each
/// branch pushes its segment, recurses, and truncates back.
fn flatten_into(value: &TreeValue, prefix: &mut String, out: &mut FlatMap) {
    match value {
        TreeValue::Null => {}
        TreeValue::Scalar(text) => {
            out.insert(prefix.clone(), text.clone());
        }
        TreeValue::Object(fields) => {
            for (name, child) in fields {
                let mark = prefix.len();
                if !prefix.is_empty() {
                    prefix.push('.');
                }
                prefix.push_str(name);
                flatten_into(child, prefix, out);
                prefix.truncate(mark);
            }
        }
        TreeValue::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                let mark = prefix.len();
                prefix.push('[');
                prefix.push_str(&index.to_string());
                prefix.push(']');
                flatten_into(child, prefix, out);
                prefix.truncate(mark);
            }
        }
    }
}
