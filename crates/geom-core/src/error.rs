// File: crates/geom-core/src/error.rs
// Summary: Error type for the geometry operations that can reject their input.

use crate::rect::Rect;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeomError {
    /// Ratio crop maps outside the image or to an empty pixel area.
    #[error("invalid cropping rectangle {ratio:?} for {image_width}x{image_height} image")]
    InvalidCrop { ratio: Rect, image_width: u32, image_height: u32 },
    #[error("largest side must be positive, got {0}")]
    InvalidLargestSide(u32),
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, GeomError>;
