//! PathKey grammar — parsing and validation of flat-map keys.
//!
//! A key is a sequence of segments: field segments (bare names) joined
//! by dots, and index segments (`[` digits `]`) appended directly to
//! whatever precedes them:
//!
//!   tags[0]       → Field("tags"), Index(0)
//!   a.b[2].c[0]   → Field("a"), Field("b"), Index(2), Field("c"), Index(0)
//!   grid[1][0]    → Field("grid"), Index(1), Index(0)
//!
//! Dot splitting honors brackets: a `.` between `[` and `]` belongs to
//! the bracket content (and then fails the integer check).  Malformed
//! bracketing is rejected here, eagerly, citing the full key.

use crate::errors::{
    Error, Result, REASON_BAD_INDEX, REASON_MISSING_CLOSE, REASON_REVERSED_BRACKETS,
    REASON_TRAILING,
};

/// One parsed step of a PathKey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Descend into an object field.
    Field(&'a str),
    /// Descend into an array element.
    Index(usize),
}

/// Parse a full key into segments, validating the bracket grammar.
///
/// The empty key parses to no segments at all — it addresses the root
/// itself (a bare scalar document).
pub fn parse_path(key: &str) -> Result<Vec<Segment<'_>>> {
    let mut segments = Vec::new();
    for chunk in split_dots(key) {
        parse_chunk(chunk, key, &mut segments)?;
    }
    Ok(segments)
}

/// Split on every `.` that sits outside a bracket pair.
fn split_dots(key: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut in_brackets = false;
    for (i, byte) in key.bytes().enumerate() {
        match byte {
            b'[' => in_brackets = true,
            b']' => in_brackets = false,
            b'.' if !in_brackets => {
                chunks.push(&key[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    chunks.push(&key[start..]);
    chunks
}

/// Parse one dotted chunk — a field name followed by zero or more
/// bracket runs — appending its segments to `out`.
///
/// Only a `[` makes a chunk an index segment; a chunk without one is
/// taken as a plain field name even if it contains a stray `]`.  An
/// empty chunk (doubled or leading dot) carries nothing.
fn parse_chunk<'a>(chunk: &'a str, key: &str, out: &mut Vec<Segment<'a>>) -> Result<()> {
    let Some(open) = chunk.find('[') else {
        if !chunk.is_empty() {
            out.push(Segment::Field(chunk));
        }
        return Ok(());
    };

    match chunk.find(']') {
        None => return Err(Error::malformed(key, REASON_MISSING_CLOSE)),
        Some(close) if close < open => {
            return Err(Error::malformed(key, REASON_REVERSED_BRACKETS));
        }
        Some(_) => {}
    }

    let name = &chunk[..open];
    if !name.is_empty() {
        out.push(Segment::Field(name));
    }

    let mut rest = &chunk[open..];
    while !rest.is_empty() {
        if !rest.starts_with('[') {
            return Err(Error::malformed(key, REASON_TRAILING));
        }
        let Some(close) = rest.find(']') else {
            return Err(Error::malformed(key, REASON_MISSING_CLOSE));
        };
        let index: usize = rest[1..close]
            .parse()
            .map_err(|_| Error::malformed(key, REASON_BAD_INDEX))?;
        out.push(Segment::Index(index));
        rest = &rest[close + 1..];
    }
    Ok(())
}
