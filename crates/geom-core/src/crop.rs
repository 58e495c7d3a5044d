// File: crates/geom-core/src/crop.rs
// Summary: Ratio crop rectangles (fractions in [0, 1]) mapped onto image pixels.

use crate::error::{GeomError, Result};
use crate::geometry::clamp;
use crate::rect::Rect;
use crate::types::{PixelRect, Size};

/// Scale one ratio coordinate by an image dimension, truncating toward zero.
#[inline]
fn to_px(ratio: f64, side: u32) -> i32 {
    (ratio * side as f64) as i32
}

/// Convert a ratio crop to pixels, rejecting crops that fall outside `image`
/// or cover no pixels once truncated.
pub fn crop_to_pixels(ratio: &Rect, image: Size) -> Result<PixelRect> {
    let px = PixelRect::new(
        to_px(ratio.x, image.width),
        to_px(ratio.y, image.height),
        to_px(ratio.width, image.width),
        to_px(ratio.height, image.height),
    );

    let iw = i64::from(image.width);
    let ih = i64::from(image.height);
    let out_of_bounds = i64::from(px.x) + i64::from(px.width) > iw
        || i64::from(px.y) + i64::from(px.height) > ih;
    if px.x < 0 || px.y < 0 || px.width <= 0 || px.height <= 0 || out_of_bounds {
        tracing::warn!(?ratio, ?px, width = image.width, height = image.height, "invalid cropping rectangle");
        return Err(GeomError::InvalidCrop {
            ratio: *ratio,
            image_width: image.width,
            image_height: image.height,
        });
    }
    Ok(px)
}

/// Lenient variant: every ratio field is clamped into `[0, 1]` before
/// scaling. Never fails; `x + width` may still exceed the image edge.
pub fn crop_to_pixels_clamped(ratio: &Rect, image: Size) -> PixelRect {
    PixelRect::new(
        to_px(clamp(ratio.x, 0.0, 1.0), image.width),
        to_px(clamp(ratio.y, 0.0, 1.0), image.height),
        to_px(clamp(ratio.width, 0.0, 1.0), image.width),
        to_px(clamp(ratio.height, 0.0, 1.0), image.height),
    )
}
