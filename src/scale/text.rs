use crate::foundation::math::{floor_extent, scale_coord};
use crate::scene::tree::UiNode;

/// Scale font metrics of text-capable nodes (those with a font size).
///
/// Font size never drops below 1. Line height and stroke thickness are only touched when
/// non-zero and have no floor.
pub(crate) fn scale_text_metrics(node: &mut UiNode, ratio: f64) {
    let Some(font) = node.text_font_size.as_mut() else {
        return;
    };
    *font = floor_extent(*font * ratio);

    if let Some(lh) = node.text_line_height.as_mut().filter(|v| **v != 0.0) {
        *lh = scale_coord(*lh, ratio);
    }
    if let Some(st) = node.text_stroke_thickness.as_mut().filter(|v| **v != 0.0) {
        *st = scale_coord(*st, ratio);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/text.rs"]
mod tests;
