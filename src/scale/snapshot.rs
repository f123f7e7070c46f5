use crate::foundation::core::Vec2;
use crate::foundation::ids::{NodeIdx, NodeKey};
use crate::scale::scaler::ScaledMarkers;
use crate::scene::tree::{UiNode, UiTree};
use std::collections::HashMap;

/// Pre-scale geometry of one renderable node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Snapshot {
    /// Original position offset; zero when absent.
    pub(crate) pos: Vec2,
    /// Original size offset; zero when absent.
    pub(crate) size: Vec2,
    /// Original size offset as found, consulted when this node acts as a parent.
    pub(crate) size_offset: Option<Vec2>,
    /// Original parent size, never zero unless the parent itself recorded a zero extent.
    pub(crate) parent_size: Vec2,
}

/// Originals keyed by node identity. Entries are written the first time a node is seen and
/// never overwritten.
#[derive(Debug, Default)]
pub(crate) struct SnapshotTable {
    by_node: HashMap<NodeKey, Snapshot>,
}

impl SnapshotTable {
    pub(crate) fn get(&self, key: NodeKey) -> Option<&Snapshot> {
        self.by_node.get(&key)
    }

    pub(crate) fn len(&self) -> usize {
        self.by_node.len()
    }

    fn original_size_of(&self, tree: &UiTree, idx: NodeIdx) -> Option<Vec2> {
        match self.get(NodeKey::new(tree.id(), idx)) {
            Some(s) => s.size_offset,
            None => tree.node(idx).and_then(UiNode::size_offset),
        }
    }
}

/// Phase 1 of relative scaling: record originals of every renderable, not yet scaled node
/// under `idx`.
pub(crate) fn take_snapshots(
    tree: &UiTree,
    idx: NodeIdx,
    table: &mut SnapshotTable,
    markers: &ScaledMarkers,
) {
    let Some(node) = tree.node(idx) else {
        return;
    };
    let key = NodeKey::new(tree.id(), idx);

    if node.is_renderable() && !markers.contains(key) && table.get(key).is_none() {
        let size = node.size_offset().unwrap_or(Vec2::ZERO);
        let parent_size = node
            .parent()
            .and_then(|p| table.original_size_of(tree, p))
            .unwrap_or_else(|| Vec2::new(nonzero_or_one(size.x), nonzero_or_one(size.y)));

        table.by_node.insert(
            key,
            Snapshot {
                pos: node.position_offset().unwrap_or(Vec2::ZERO),
                size,
                size_offset: node.size_offset(),
                parent_size,
            },
        );
    }

    for &c in node.children() {
        take_snapshots(tree, c, table, markers);
    }
}

// Division guard for nodes without a sized parent.
fn nonzero_or_one(v: f64) -> f64 {
    if v == 0.0 || v.is_nan() { 1.0 } else { v }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/snapshot.rs"]
mod tests;
