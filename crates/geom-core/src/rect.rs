// File: crates/geom-core/src/rect.rs
// Summary: Floating-point rectangle value type and the settable-geometry target trait.

/// Axis-aligned rectangle; `x`/`y` is the top-left corner.
/// Contract: `width`/`height` are conventionally non-negative (not enforced).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
    /// Rect at the origin; handy for item sizes where position is irrelevant.
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self { x: 0.0, y: 0.0, width, height }
    }
    pub fn right(&self) -> f64 { self.x + self.width }
    pub fn bottom(&self) -> f64 { self.y + self.height }
    /// Width divided by height. Unguarded: zero height yields inf/NaN.
    pub fn aspect_ratio(&self) -> f64 { self.width / self.height }
}

/// Anything exposing settable `x`, `y`, `width` and `height`, e.g. the
/// geometry of a UI element. Implemented by the UI integration layer.
pub trait RectTarget {
    fn set_x(&mut self, x: f64);
    fn set_y(&mut self, y: f64);
    fn set_width(&mut self, width: f64);
    fn set_height(&mut self, height: f64);
}

impl RectTarget for Rect {
    fn set_x(&mut self, x: f64) { self.x = x; }
    fn set_y(&mut self, y: f64) { self.y = y; }
    fn set_width(&mut self, width: f64) { self.width = width; }
    fn set_height(&mut self, height: f64) { self.height = height; }
}
