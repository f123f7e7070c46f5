use crate::foundation::core::Vec2;
use crate::foundation::ids::{NodeIdx, NodeKey};
use crate::foundation::math::{floor_extent, fraction, round_half_up, scale_extent};
use crate::scale::opts::SizePolicy;
use crate::scale::scaler::{ScaleStats, ScaledMarkers};
use crate::scale::snapshot::{Snapshot, SnapshotTable};
use crate::scale::text::scale_text_metrics;
use crate::scene::tree::UiTree;

/// Phase 2 of relative scaling.
///
/// Walks top-down carrying the target size of the nearest renderable ancestor. Geometry is
/// recomputed from the snapshot as a fraction of the original parent size, applied to that
/// target, so rounding error does not compound down the tree.
pub(crate) struct RelativePass<'a> {
    ratio: f64,
    size_policy: SizePolicy,
    snapshots: &'a SnapshotTable,
    markers: &'a mut ScaledMarkers,
    stats: &'a mut ScaleStats,
}

impl<'a> RelativePass<'a> {
    pub(crate) fn new(
        ratio: f64,
        size_policy: SizePolicy,
        snapshots: &'a SnapshotTable,
        markers: &'a mut ScaledMarkers,
        stats: &'a mut ScaleStats,
    ) -> Self {
        Self {
            ratio,
            size_policy,
            snapshots,
            markers,
            stats,
        }
    }

    /// `target` is `None` at the entry node, where the original parent size times the ratio
    /// stands in for it.
    pub(crate) fn apply(&mut self, tree: &mut UiTree, idx: NodeIdx, target: Option<Vec2>) {
        let key = NodeKey::new(tree.id(), idx);
        let Some(node) = tree.node_mut(idx) else {
            return;
        };
        self.stats.visited += 1;

        let child_target = if node.is_renderable() {
            self.stats.renderable += 1;
            let snap = self.snapshots.get(key).copied();
            match snap {
                Some(s) if !self.markers.contains(key) => {
                    let target = target.unwrap_or(s.parent_size * self.ratio);
                    let (pos, size) = self.relayout(&s, target);
                    node.write_position_offset(pos);
                    node.write_size_offset(size);
                    scale_text_metrics(node, self.ratio);
                    self.markers.mark(key);
                    self.stats.scaled += 1;
                    tracing::trace!(node = idx.0, name = %node.name, "relative scaled");
                }
                _ => {
                    if self.markers.contains(key) {
                        self.stats.already_scaled += 1;
                    }
                }
            }
            Some(node.size_offset().unwrap_or(Vec2::ZERO))
        } else {
            target
        };

        let children = node.children().to_vec();
        for c in children {
            self.apply(tree, c, child_target);
        }
    }

    fn relayout(&self, s: &Snapshot, target: Vec2) -> (Vec2, Vec2) {
        let px = fraction(s.pos.x, s.parent_size.x);
        let py = fraction(s.pos.y, s.parent_size.y);
        let pos = Vec2::new(round_half_up(px * target.x), round_half_up(py * target.y));

        let size = match self.size_policy {
            SizePolicy::Relative => Vec2::new(
                floor_extent(fraction(s.size.x, s.parent_size.x) * target.x),
                floor_extent(fraction(s.size.y, s.parent_size.y) * target.y),
            ),
            SizePolicy::Direct => scale_extent(s.size, self.ratio),
        };
        (pos, size)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/relative.rs"]
mod tests;
