//! Error type shared by the unflattener and the serde interop surface.
//!
//! Path validation failures carry the offending key verbatim plus a
//! fixed reason string, so a caller can report exactly which upstream
//! entry is corrupt.  The reason strings are part of the contract —
//! tests and downstream tooling match on them.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

// ── Malformed-path reasons ───────────────────────────────────
// One constant per way a key can violate the bracket grammar.

/// A `[` with no `]` after it.
pub const REASON_MISSING_CLOSE: &str = "missing closing bracket";
/// The first `]` sits before the first `[`.
pub const REASON_REVERSED_BRACKETS: &str = "closing bracket precedes opening bracket";
/// Bracket content that is not a non-negative integer.
pub const REASON_BAD_INDEX: &str = "array index is not a non-negative integer";
/// Text directly after a `]` that is neither `[` nor `.` nor the end.
pub const REASON_TRAILING: &str = "unexpected character after index";

#[derive(Debug, Error)]
pub enum Error {
    /// A flat-map key violates the dot/bracket grammar.  Raised at the
    /// offending key; the whole unflatten call fails — there is no
    /// partial reconstruction.
    #[error("malformed path `{key}`: {reason}")]
    MalformedPath { key: String, reason: &'static str },

    /// Serde failure inside `to_flat`/`from_flat`.  The core codec
    /// never produces this.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed(key: &str, reason: &'static str) -> Self {
        Error::MalformedPath {
            key: key.to_string(),
            reason,
        }
    }
}
