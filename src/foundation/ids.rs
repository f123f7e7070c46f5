use std::sync::atomic::{AtomicU64, Ordering};

/// Arena slot of a node inside its [`crate::UiTree`].
///
/// Slots are allocated in DFS pre-order when a tree is built, so the root is always
/// `NodeIdx(0)`. Subtrees attached later get fresh slots at the end of the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIdx(pub u32);

impl NodeIdx {
    pub(crate) fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Process-unique identity of one [`crate::UiTree`] instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TreeId(u64);

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(1);

impl TreeId {
    pub(crate) fn fresh() -> Self {
        Self(NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Identity key for scaler side tables: a node slot qualified by the tree it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeKey {
    pub(crate) tree: TreeId,
    pub(crate) node: NodeIdx,
}

impl NodeKey {
    pub(crate) fn new(tree: TreeId, node: NodeIdx) -> Self {
        Self { tree, node }
    }
}
