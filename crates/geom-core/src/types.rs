// File: crates/geom-core/src/types.rs
// Summary: Shared pixel types and constants (image sizes, pixel rects, defaults).

/// Default limit for the longer image side when preparing a share copy.
pub const DEFAULT_LARGEST_SIDE: u32 = 2048;
/// Default viewport width in pixels.
pub const VIEWPORT_WIDTH: f64 = 1024.0;
/// Default viewport height in pixels.
pub const VIEWPORT_HEIGHT: f64 = 640.0;

/// Image dimensions, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
    pub const fn is_empty(&self) -> bool { self.width == 0 || self.height == 0 }
    /// True when the image is taller than it is wide.
    pub const fn is_portrait(&self) -> bool { self.height > self.width }
}

/// Integer pixel rectangle, top-left origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }
    pub const fn right(&self) -> i32 { self.x + self.width }
    pub const fn bottom(&self) -> i32 { self.y + self.height }
}
