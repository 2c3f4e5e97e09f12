//! Greedy rectangle decomposition of image alpha masks.
//!
//! An image is downsampled into a small boolean occupancy grid (a cell is
//! solid when its alpha exceeds a threshold), and the grid is covered with an
//! ordered list of non-overlapping axis-aligned rectangles. The cover is
//! exact and deterministic but not minimal; finding a minimal rectangle cover
//! is NP-hard and out of scope.

pub mod cover;
pub mod mask;
pub mod sampler;

pub use cover::{decompose, Rect};
pub use mask::OccupancyMask;

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RectcoverError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialize error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RectcoverError>;

/// Result of one decomposition run: the mask dimensions the rectangles are
/// expressed in, and the rectangles in emission order (largest first).
#[derive(Debug, Clone, Serialize)]
pub struct Decomposition {
    pub mask_width: u32,
    pub mask_height: u32,
    pub rects: Vec<Rect>,
}

/// Front door combining the sampler and the cover algorithm.
pub struct Decomposer {
    resolution: u32,
    alpha_threshold: u8,
}

impl Decomposer {
    pub fn new() -> Self {
        Self { resolution: sampler::DEFAULT_RESOLUTION, alpha_threshold: 0 }
    }

    /// Downsample target for the longer image side, clamped to the supported
    /// range. Higher resolution means a finer mask and more rectangles.
    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = sampler::clamp_resolution(resolution);
        self
    }

    /// Pixels with alpha strictly above this count as solid.
    pub fn with_alpha_threshold(mut self, threshold: u8) -> Self {
        self.alpha_threshold = threshold;
        self
    }

    /// Sample `image` into a mask and decompose it. Degenerate images yield
    /// an empty rectangle list; this never fails.
    pub fn decompose(&self, image: &image::DynamicImage) -> Decomposition {
        let mask = sampler::sample(image, self.resolution, self.alpha_threshold);
        let rects = cover::decompose(&mask);
        Decomposition { mask_width: mask.width(), mask_height: mask.height(), rects }
    }
}

impl Default for Decomposer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba, RgbaImage};

    #[test]
    fn opaque_image_decomposes_to_one_rect() {
        let img = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 255]));
        let result = Decomposer::new()
            .with_resolution(8)
            .decompose(&DynamicImage::ImageRgba8(img));
        assert_eq!((result.mask_width, result.mask_height), (8, 8));
        assert_eq!(result.rects, vec![Rect { x: 0, y: 0, w: 8, h: 8 }]);
    }

    #[test]
    fn fully_transparent_image_decomposes_to_nothing() {
        let img = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 0]));
        let result = Decomposer::new().decompose(&DynamicImage::ImageRgba8(img));
        assert!(result.rects.is_empty());
    }

    #[test]
    fn zero_sized_image_is_not_an_error() {
        let result = Decomposer::new().decompose(&DynamicImage::ImageRgba8(RgbaImage::new(0, 0)));
        assert_eq!((result.mask_width, result.mask_height), (0, 0));
        assert!(result.rects.is_empty());
    }
}
