//! Interop between the codec's tree model and `serde_json` documents.
//!
//! Type mapping into the model:
//!   JSON object  → Object  (field order preserved)
//!   JSON array   → Array
//!   JSON string  → Scalar  (text carried as-is)
//!   JSON number  → Scalar  (serde_json's canonical rendering)
//!   JSON boolean → Scalar  ("true" / "false")
//!   JSON null    → Null    (flattens to no entry)
//!
//! The mapping is deliberately lossy: on the way back out every scalar
//! is a JSON string, because the flattened form erased the original
//! types.  A caller binding onto typed structs owns any string-to-number
//! coercion, the same way it owns schema validation.

use serde_json::Value;

use crate::value::TreeValue;

// TODO: a borrowing conversion (Cow keys and leaf text) would avoid
// cloning every string when flattening large parsed documents.

/// Convert a parsed JSON document into the codec's tree model.  Total.
pub fn from_json(value: &Value) -> TreeValue {
    match value {
        Value::Null => TreeValue::Null,
        Value::Bool(b) => TreeValue::Scalar(b.to_string()),
        Value::Number(n) => TreeValue::Scalar(n.to_string()),
        Value::String(s) => TreeValue::Scalar(s.clone()),
        Value::Array(items) => TreeValue::Array(items.iter().map(from_json).collect()),
        Value::Object(fields) => TreeValue::Object(
            fields
                .iter()
                .map(|(name, child)| (name.clone(), from_json(child)))
                .collect(),
        ),
    }
}

/// Convert a tree back into a JSON document.  Total; scalars become
/// JSON strings.
pub fn to_json(value: &TreeValue) -> Value {
    match value {
        TreeValue::Null => Value::Null,
        TreeValue::Scalar(text) => Value::String(text.clone()),
        TreeValue::Array(items) => Value::Array(items.iter().map(to_json).collect()),
        TreeValue::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(name, child)| (name.clone(), to_json(child)))
                .collect(),
        ),
    }
}
