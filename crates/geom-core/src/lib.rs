// File: crates/geom-core/src/lib.rs
// Summary: Core library entry point; exports rect helpers, aspect fit, crop and resize geometry.

pub mod error;
pub mod types;
pub mod rect;
pub mod geometry;
pub mod crop;
pub mod resize;

pub use error::{GeomError, Result};
pub use types::{PixelRect, Size};
pub use rect::{Rect, RectTarget};
pub use geometry::{
    are_equal, clamp, clone_rect, fit_rect, interpolate_rect, relative_rect, size_to_rect,
    FitResult,
};
pub use crop::{crop_to_pixels, crop_to_pixels_clamped};
pub use resize::{scaled_to_largest_side, ResizeOptions};
