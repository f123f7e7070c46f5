use crate::foundation::core::Vec2;

/// Round to the nearest integer, with ties going towards positive infinity.
///
/// This matches the rounding UI layout hosts commonly apply to pixel offsets
/// (`round(12.5) == 13`, `round(-2.5) == -2`), unlike [`f64::round`] which rounds ties away
/// from zero.
pub(crate) fn round_half_up(v: f64) -> f64 {
    let f = v.floor();
    if v - f >= 0.5 { f + 1.0 } else { f }
}

/// Scale a coordinate; no floor is applied so results may be zero or negative.
pub(crate) fn scale_coord(v: f64, ratio: f64) -> f64 {
    round_half_up(v * ratio)
}

/// Round an extent and clamp it so it never collapses below one pixel.
pub(crate) fn floor_extent(v: f64) -> f64 {
    round_half_up(v).max(1.0)
}

/// Fraction `num / den`, or `0` when the denominator is not positive.
pub(crate) fn fraction(num: f64, den: f64) -> f64 {
    if den > 0.0 { num / den } else { 0.0 }
}

/// Scale a position offset component-wise (no floor).
pub(crate) fn scale_point(v: Vec2, ratio: f64) -> Vec2 {
    Vec2::new(scale_coord(v.x, ratio), scale_coord(v.y, ratio))
}

/// Scale a size offset component-wise, clamping each extent to at least 1.
pub(crate) fn scale_extent(v: Vec2, ratio: f64) -> Vec2 {
    Vec2::new(floor_extent(v.x * ratio), floor_extent(v.y * ratio))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
