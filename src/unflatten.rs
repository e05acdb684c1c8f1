//! Unflattener — rebuilds a tree from an unordered set of path/text
//! entries.
//!
//! Entry order is never trusted: a flat map may have been reassembled
//! from independently delivered fields, so array indices can arrive
//! 2, 0, 1.  Arrays are therefore accumulated in a sparse,
//! index-addressable buffer (`ArrayBuilder`) and laid out densely only
//! once every entry has been consumed.  Appending into a dense list as
//! indices arrive mis-places elements whenever they come out of
//! ascending order.
//!
//! Each entry is handled in two steps: the key is parsed into segments
//! (rejecting malformed bracketing up front), then the build tree is
//! walked segment by segment, creating containers as needed, and the
//! scalar is dropped at the end of the walk.  Every step consumes one
//! segment, so the walk terminates on any finite key.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::errors::Result;
use crate::path::{parse_path, Segment};
use crate::value::{FlatMap, TreeValue};

/// Rebuild a tree from its flattened form.
///
/// Fails with [`crate::Error::MalformedPath`] on a grammar-violating
/// key; no partial result is produced.  The root shape follows the
/// keys: the empty key holds a bare root scalar, keys opening with
/// `[i]` rebuild a root array, anything else an object.  An empty map
/// yields an empty object.
///
/// Entries that disagree on a node's kind (`a` as both leaf and
/// object) resolve as last write wins, as do duplicate array indices.
pub fn unflatten(flat: &FlatMap) -> Result<TreeValue> {
    let mut root = Node::Empty;
    for (key, value) in flat {
        let segments = parse_path(key)?;
        insert(&mut root, &segments, value);
    }
    Ok(match root {
        Node::Empty => TreeValue::Object(IndexMap::new()),
        node => node.materialize(),
    })
}

/// Walk `segments`, creating containers as needed, and place `value`
/// at the end of the walk.
fn insert(node: &mut Node, segments: &[Segment<'_>], value: &str) {
    match segments {
        [] => *node = Node::Leaf(value.to_string()),
        [Segment::Field(name), rest @ ..] => {
            let child = node
                .as_object()
                .entry((*name).to_string())
                .or_insert(Node::Empty);
            insert(child, rest, value);
        }
        [Segment::Index(index), rest @ ..] => {
            let builder = node.as_array();
            if rest.is_empty() {
                builder.put(*index, Node::Leaf(value.to_string()));
            } else {
                insert(builder.slot(*index), rest, value);
            }
        }
    }
}

// ── Build tree ───────────────────────────────────────────────

/// Intermediate node: shaped like `TreeValue`, but arrays stay sparse
/// until the whole map has been consumed.
enum Node {
    /// A slot nothing has written to yet.  Materializes to `Null`.
    Empty,
    Leaf(String),
    Object(IndexMap<String, Node>),
    Array(ArrayBuilder),
}

impl Node {
    /// Finished tree for this node and everything under it.
    fn materialize(self) -> TreeValue {
        match self {
            Node::Empty => TreeValue::Null,
            Node::Leaf(text) => TreeValue::Scalar(text),
            Node::Object(fields) => TreeValue::Object(
                fields
                    .into_iter()
                    .map(|(name, child)| (name, child.materialize()))
                    .collect(),
            ),
            Node::Array(builder) => builder.materialize(),
        }
    }

    /// View this node as an object, replacing whatever an earlier
    /// entry left here if the kind disagrees (later entries win).
    fn as_object(&mut self) -> &mut IndexMap<String, Node> {
        if !matches!(self, Node::Object(_)) {
            *self = Node::Object(IndexMap::new());
        }
        let Node::Object(fields) = self else {
            unreachable!()
        };
        fields
    }

    /// View this node as an array under construction, same replacement
    /// rule as [`Node::as_object`].
    fn as_array(&mut self) -> &mut ArrayBuilder {
        if !matches!(self, Node::Array(_)) {
            *self = Node::Array(ArrayBuilder::new());
        }
        let Node::Array(builder) = self else {
            unreachable!()
        };
        builder
    }
}

// ── Array assembly ───────────────────────────────────────────

/// Sparse accumulation buffer for one logical array.
///
/// Logically a mapping index → element; the ordered backing map makes
/// materialization a single ascending sweep.  Both writers go through
/// here: [`ArrayBuilder::put`] for whole elements, and
/// [`ArrayBuilder::slot`] when several keys contribute to the same
/// element (`items[0].id`, `items[0].name`).
struct ArrayBuilder {
    slots: BTreeMap<usize, Node>,
}

impl ArrayBuilder {
    fn new() -> Self {
        ArrayBuilder {
            slots: BTreeMap::new(),
        }
    }

    /// Upsert the element at `index`.  A duplicate index overwrites —
    /// the last write wins.
    fn put(&mut self, index: usize, node: Node) {
        self.slots.insert(index, node);
    }

    /// The element slot at `index`, created empty on first touch.
    fn slot(&mut self, index: usize) -> &mut Node {
        self.slots.entry(index).or_insert(Node::Empty)
    }

    /// Lay the sparse slots out densely, ordered by index.  Indices in
    /// `0..=max` that nothing wrote to come out as `Null`.
    fn materialize(mut self) -> TreeValue {
        let Some((&max, _)) = self.slots.last_key_value() else {
            return TreeValue::Array(Vec::new());
        };
        let mut items = Vec::with_capacity(max + 1);
        for index in 0..=max {
            items.push(match self.slots.remove(&index) {
                Some(node) => node.materialize(),
                None => TreeValue::Null,
            });
        }
        TreeValue::Array(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(text: &str) -> Node {
        Node::Leaf(text.to_string())
    }

    #[test]
    fn materialize_orders_by_index_not_insertion() {
        let mut builder = ArrayBuilder::new();
        builder.put(2, leaf("z"));
        builder.put(0, leaf("x"));
        builder.put(1, leaf("y"));
        assert_eq!(
            builder.materialize(),
            TreeValue::Array(vec![
                TreeValue::scalar("x"),
                TreeValue::scalar("y"),
                TreeValue::scalar("z"),
            ])
        );
    }

    #[test]
    fn materialize_fills_gaps_with_null() {
        let mut builder = ArrayBuilder::new();
        builder.put(0, leaf("x"));
        builder.put(2, leaf("y"));
        assert_eq!(
            builder.materialize(),
            TreeValue::Array(vec![
                TreeValue::scalar("x"),
                TreeValue::Null,
                TreeValue::scalar("y"),
            ])
        );
    }

    #[test]
    fn duplicate_index_last_write_wins() {
        let mut builder = ArrayBuilder::new();
        builder.put(0, leaf("first"));
        builder.put(0, leaf("second"));
        assert_eq!(
            builder.materialize(),
            TreeValue::Array(vec![TreeValue::scalar("second")])
        );
    }

    #[test]
    fn slot_returns_the_same_element_across_touches() {
        let mut builder = ArrayBuilder::new();
        builder.slot(0).as_object().insert("a".into(), leaf("1"));
        builder.slot(0).as_object().insert("b".into(), leaf("2"));
        let TreeValue::Array(items) = builder.materialize() else {
            panic!("expected array");
        };
        let TreeValue::Object(fields) = &items[0] else {
            panic!("expected object element");
        };
        assert_eq!(fields.get("a"), Some(&TreeValue::scalar("1")));
        assert_eq!(fields.get("b"), Some(&TreeValue::scalar("2")));
    }

    #[test]
    fn empty_builder_materializes_to_empty_array() {
        assert_eq!(
            ArrayBuilder::new().materialize(),
            TreeValue::Array(Vec::new())
        );
    }
}
