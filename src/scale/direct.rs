use crate::foundation::ids::{NodeIdx, NodeKey};
use crate::foundation::math::{scale_extent, scale_point};
use crate::scale::scaler::{ScaleStats, ScaledMarkers};
use crate::scale::text::scale_text_metrics;
use crate::scene::tree::UiTree;

/// Pre-order direct scaling of the subtree at `idx`.
///
/// Each renderable node is multiplied by `ratio` at most once per marker set. Marked and
/// non-renderable nodes are left as they are, but their children are always visited.
pub(crate) fn apply_direct(
    tree: &mut UiTree,
    idx: NodeIdx,
    ratio: f64,
    markers: &mut ScaledMarkers,
    stats: &mut ScaleStats,
) {
    let key = NodeKey::new(tree.id(), idx);
    let Some(node) = tree.node_mut(idx) else {
        return;
    };
    stats.visited += 1;

    if node.is_renderable() {
        stats.renderable += 1;
        if markers.contains(key) {
            stats.already_scaled += 1;
        } else {
            if let Some(p) = node.position_offset() {
                node.write_position_offset(scale_point(p, ratio));
            }
            if let Some(s) = node.size_offset() {
                node.write_size_offset(scale_extent(s, ratio));
            }
            scale_text_metrics(node, ratio);
            markers.mark(key);
            stats.scaled += 1;
            tracing::trace!(node = idx.0, name = %node.name, "direct scaled");
        }
    }

    let children = node.children().to_vec();
    for c in children {
        apply_direct(tree, c, ratio, markers, stats);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/direct.rs"]
mod tests;
