/// Offsets (positions and sizes) are pixel-space vectors; sizes store width in `x` and height
/// in `y`, mirroring the `{ x, y }` JSON shape of layout hosts.
pub use kurbo::Vec2;
