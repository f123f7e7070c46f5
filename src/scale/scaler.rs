use crate::foundation::error::{UiScaleError, UiScaleResult};
use crate::foundation::ids::{NodeIdx, NodeKey};
use crate::scale::direct::apply_direct;
use crate::scale::opts::{ScaleStrategy, ScalerOpts};
use crate::scale::relative::RelativePass;
use crate::scale::snapshot::{SnapshotTable, take_snapshots};
use crate::scene::tree::UiTree;
use std::collections::HashSet;

/// Counters reported by one scaling pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScaleStats {
    /// Nodes walked, renderable or not.
    pub visited: usize,
    /// Renderable nodes walked.
    pub renderable: usize,
    /// Nodes rewritten by this pass.
    pub scaled: usize,
    /// Renderable nodes skipped because an earlier pass of the same scaler already scaled them.
    pub already_scaled: usize,
}

/// Identity-keyed set of nodes a scaler has already rewritten.
#[derive(Debug, Default)]
pub(crate) struct ScaledMarkers {
    keys: HashSet<NodeKey>,
}

impl ScaledMarkers {
    pub(crate) fn contains(&self, key: NodeKey) -> bool {
        self.keys.contains(&key)
    }

    pub(crate) fn mark(&mut self, key: NodeKey) -> bool {
        self.keys.insert(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }
}

/// Rescales UI trees by one uniform ratio.
///
/// The scaler never owns a tree; it borrows one per call and keeps only side tables keyed by
/// [`crate::TreeId`] and [`NodeIdx`]. A node rewritten once is never rewritten again by the
/// same scaler, so repeated or overlapping calls are idempotent. Create a new scaler to apply a
/// different ratio.
///
/// ```
/// use uiscale::{NodeDef, TreeScaler, UiTree, Vec2};
///
/// let def = NodeDef::new("title")
///     .with_position(50.0, 25.0)
///     .with_size(500.0, 50.0)
///     .with_font_size(32.0);
/// let mut tree = UiTree::from_def(&def).unwrap();
///
/// let mut scaler = TreeScaler::new(0.5);
/// scaler.scale(&mut tree);
///
/// let title = tree.node(tree.root()).unwrap();
/// assert_eq!(title.position_offset(), Some(Vec2::new(25.0, 13.0)));
/// assert_eq!(title.size_offset(), Some(Vec2::new(250.0, 25.0)));
/// assert_eq!(title.text_font_size, Some(16.0));
/// ```
#[derive(Debug)]
pub struct TreeScaler {
    ratio: f64,
    opts: ScalerOpts,
    markers: ScaledMarkers,
    snapshots: SnapshotTable,
}

impl TreeScaler {
    /// Scaler with default options (direct strategy).
    ///
    /// The ratio is not validated: zero or negative ratios give degenerate but well-defined
    /// output (sizes and font sizes still floor at 1).
    pub fn new(ratio: f64) -> Self {
        Self::with_opts(ratio, ScalerOpts::default())
    }

    /// Scaler with explicit options.
    pub fn with_opts(ratio: f64, opts: ScalerOpts) -> Self {
        Self {
            ratio,
            opts,
            markers: ScaledMarkers::default(),
            snapshots: SnapshotTable::default(),
        }
    }

    /// The uniform ratio applied by this scaler.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Options this scaler was built with.
    pub fn opts(&self) -> ScalerOpts {
        self.opts
    }

    /// Scale the whole tree in place, starting at its root.
    #[tracing::instrument(
        skip(self, tree),
        fields(ratio = self.ratio, strategy = ?self.opts.strategy)
    )]
    pub fn scale(&mut self, tree: &mut UiTree) -> ScaleStats {
        let root = tree.root();
        self.run(tree, root)
    }

    /// Scale the subtree rooted at `start` in place.
    ///
    /// With the relative strategy the entry node is still measured against its real parent's
    /// original size.
    #[tracing::instrument(
        skip(self, tree),
        fields(ratio = self.ratio, strategy = ?self.opts.strategy)
    )]
    pub fn scale_subtree(
        &mut self,
        tree: &mut UiTree,
        start: NodeIdx,
    ) -> UiScaleResult<ScaleStats> {
        if !tree.contains(start) {
            return Err(UiScaleError::validation(format!(
                "node {} is not part of this tree ({} nodes)",
                start.0,
                tree.len()
            )));
        }
        Ok(self.run(tree, start))
    }

    /// Whether this scaler has already rewritten `idx` of `tree`.
    pub fn is_scaled(&self, tree: &UiTree, idx: NodeIdx) -> bool {
        self.markers.contains(NodeKey::new(tree.id(), idx))
    }

    fn run(&mut self, tree: &mut UiTree, start: NodeIdx) -> ScaleStats {
        let mut stats = ScaleStats::default();
        match self.opts.strategy {
            ScaleStrategy::Direct => {
                apply_direct(tree, start, self.ratio, &mut self.markers, &mut stats);
            }
            ScaleStrategy::Relative => {
                take_snapshots(tree, start, &mut self.snapshots, &self.markers);
                RelativePass::new(
                    self.ratio,
                    self.opts.size_policy,
                    &self.snapshots,
                    &mut self.markers,
                    &mut stats,
                )
                .apply(tree, start, None);
            }
        }
        tracing::debug!(
            visited = stats.visited,
            renderable = stats.renderable,
            scaled = stats.scaled,
            already_scaled = stats.already_scaled,
            marked_total = self.markers.len(),
            snapshots_total = self.snapshots.len(),
            "scale pass finished"
        );
        stats
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/scaler.rs"]
mod tests;
