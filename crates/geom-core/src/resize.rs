// File: crates/geom-core/src/resize.rs
// Summary: Downscale computation bounding the longer image side (share/export copies).

use crate::error::{GeomError, Result};
use crate::types::{Size, DEFAULT_LARGEST_SIDE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeOptions {
    /// Maximum length of the constrained side, in pixels.
    pub largest_side: u32,
}

impl Default for ResizeOptions {
    fn default() -> Self { Self { largest_side: DEFAULT_LARGEST_SIDE } }
}

/// Scale `other` by `target / constrained`, rounded, never below one pixel.
fn scale_side(other: u32, constrained: u32, target: u32) -> u32 {
    let v = (other as f64 * target as f64 / constrained as f64).round();
    (v as u32).max(1)
}

/// Size of `size` after bounding it by `opts.largest_side`. Portrait images
/// are constrained by height, everything else by width. Never upscales.
pub fn scaled_to_largest_side(size: Size, opts: &ResizeOptions) -> Result<Size> {
    let limit = opts.largest_side;
    if limit == 0 {
        return Err(GeomError::InvalidLargestSide(limit));
    }
    if size.is_empty() {
        return Err(GeomError::EmptyImage { width: size.width, height: size.height });
    }

    let out = if size.is_portrait() {
        if limit > size.height {
            size
        } else {
            Size::new(scale_side(size.width, size.height, limit), limit)
        }
    } else if limit >= size.width {
        size
    } else {
        Size::new(limit, scale_side(size.height, size.width, limit))
    };
    tracing::debug!(?size, ?out, limit, "largest side resize");
    Ok(out)
}
