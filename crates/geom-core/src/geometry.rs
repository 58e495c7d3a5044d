// File: crates/geom-core/src/geometry.rs
// Summary: Lightweight geometry helpers for placing and scaling on-screen elements.

use crate::rect::{Rect, RectTarget};

/// Constrain `v` to `[lo, hi]`. The low bound is checked first, so with
/// `lo > hi` any `v < lo` returns `lo`.
#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

#[inline]
pub fn clone_rect(source: &Rect) -> Rect {
    Rect::new(source.x, source.y, source.width, source.height)
}

/// Linear interpolation per field. `factor` is not clamped; values outside
/// `[0, 1]` extrapolate.
pub fn interpolate_rect(start: &Rect, end: &Rect, factor: f64) -> Rect {
    Rect {
        x: start.x + factor * (end.x - start.x),
        y: start.y + factor * (end.y - start.y),
        width: start.width + factor * (end.width - start.width),
        height: start.height + factor * (end.height - start.height),
    }
}

/// Outcome of [`fit_rect`]: the placed rect plus the item-to-viewport scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitResult {
    pub rect: Rect,
    pub scale_factor: f64,
}

impl FitResult {
    /// Map a rect in item space (e.g. a crop box in image pixels) into viewport space.
    pub fn to_viewport(&self, r: &Rect) -> Rect {
        let s = self.scale_factor;
        Rect {
            x: self.rect.x + r.x * s,
            y: self.rect.y + r.y * s,
            width: r.width * s,
            height: r.height * s,
        }
    }

    /// Inverse of [`FitResult::to_viewport`]. Unguarded: a zero scale yields inf/NaN.
    pub fn to_item(&self, r: &Rect) -> Rect {
        let s = self.scale_factor;
        Rect {
            x: (r.x - self.rect.x) / s,
            y: (r.y - self.rect.y) / s,
            width: r.width / s,
            height: r.height / s,
        }
    }
}

/// Scale `item` to the largest rect with the same aspect ratio that fits
/// inside `viewport`, centered. Only `item`'s width and height are used.
///
/// An item with zero width or height is not scaled: the viewport is returned
/// as-is with a scale factor of `1.0`.
pub fn fit_rect(viewport: &Rect, item: &Rect) -> FitResult {
    if item.width == 0.0 || item.height == 0.0 {
        tracing::trace!(width = item.width, height = item.height, "degenerate item, using viewport");
        return FitResult { rect: *viewport, scale_factor: 1.0 };
    }

    let item_aspect = item.aspect_ratio();
    let viewport_aspect = viewport.aspect_ratio();

    let (scale_factor, width, height) = if item_aspect > viewport_aspect {
        let s = viewport.width / item.width;
        (s, viewport.width, item.height * s)
    } else {
        let s = viewport.height / item.height;
        (s, item.width * s, viewport.height)
    };
    tracing::trace!(
        item_aspect,
        viewport_aspect,
        scale_factor,
        width_constrained = item_aspect > viewport_aspect,
        "fit rect"
    );

    // float overshoot
    let width = clamp(width, 0.0, viewport.width);
    let height = clamp(height, 0.0, viewport.height);

    FitResult {
        rect: Rect {
            x: viewport.x + (viewport.width - width) / 2.0,
            y: viewport.y + (viewport.height - height) / 2.0,
            width,
            height,
        },
        scale_factor,
    }
}

/// Express `geom` as fractions of `relative_to`. Division is unguarded.
pub fn relative_rect(geom: &Rect, relative_to: &Rect) -> Rect {
    Rect {
        x: (geom.x - relative_to.x) / relative_to.width,
        y: (geom.y - relative_to.y) / relative_to.height,
        width: geom.width / relative_to.width,
        height: geom.height / relative_to.height,
    }
}

/// Copy the four fields of `rect` onto `target`.
pub fn size_to_rect<T: RectTarget + ?Sized>(rect: &Rect, target: &mut T) {
    target.set_x(rect.x);
    target.set_y(rect.y);
    target.set_width(rect.width);
    target.set_height(rect.height);
}

/// Exact field-wise equality, no tolerance.
pub fn are_equal(a: &Rect, b: &Rect) -> bool {
    a.x == b.x && a.y == b.y && a.width == b.width && a.height == b.height
}
