//! Image sampler - downscales a source image and thresholds its alpha
//! channel into an occupancy mask.

use crate::mask::OccupancyMask;
use image::{imageops::FilterType, DynamicImage};

pub const MIN_RESOLUTION: u32 = 2;
pub const MAX_RESOLUTION: u32 = 256;
pub const DEFAULT_RESOLUTION: u32 = 16;

/// Clamp a requested downsample resolution into the supported range.
pub fn clamp_resolution(resolution: u32) -> u32 {
    resolution.clamp(MIN_RESOLUTION, MAX_RESOLUTION)
}

/// Mask dimensions for an image: the longer side gets `resolution` cells,
/// the shorter side scales proportionally (at least 1). A degenerate image
/// maps to a 0×0 mask.
pub fn mask_dimensions(img_w: u32, img_h: u32, resolution: u32) -> (u32, u32) {
    if img_w == 0 || img_h == 0 {
        return (0, 0);
    }
    let resolution = clamp_resolution(resolution);
    if img_w > img_h {
        let h = (resolution as f64 * img_h as f64 / img_w as f64) as u32;
        (resolution, h.max(1))
    } else if img_h > img_w {
        let w = (resolution as f64 * img_w as f64 / img_h as f64) as u32;
        (w.max(1), resolution)
    } else {
        (resolution, resolution)
    }
}

/// Downsample `image` with nearest-neighbor filtering to the mask resolution
/// and threshold alpha: a cell is solid iff its sampled pixel has
/// `alpha > alpha_threshold`.
pub fn sample(image: &DynamicImage, resolution: u32, alpha_threshold: u8) -> OccupancyMask {
    let (mw, mh) = mask_dimensions(image.width(), image.height(), resolution);
    if mw == 0 || mh == 0 {
        return OccupancyMask::new(0, 0);
    }
    let scaled = image.resize_exact(mw, mh, FilterType::Nearest).to_rgba8();
    OccupancyMask::from_alpha(&scaled, alpha_threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn dimensions_preserve_aspect() {
        assert_eq!(mask_dimensions(100, 50, 16), (16, 8));
        assert_eq!(mask_dimensions(50, 100, 16), (8, 16));
        assert_eq!(mask_dimensions(64, 64, 16), (16, 16));
        // extreme ratios still get at least one cell
        assert_eq!(mask_dimensions(1000, 10, 16), (16, 1));
    }

    #[test]
    fn dimensions_of_degenerate_image() {
        assert_eq!(mask_dimensions(0, 50, 16), (0, 0));
        assert_eq!(mask_dimensions(50, 0, 16), (0, 0));
    }

    #[test]
    fn resolution_is_clamped() {
        assert_eq!(clamp_resolution(0), MIN_RESOLUTION);
        assert_eq!(clamp_resolution(100_000), MAX_RESOLUTION);
        assert_eq!(mask_dimensions(10, 10, 100_000), (MAX_RESOLUTION, MAX_RESOLUTION));
    }

    #[test]
    fn sample_thresholds_alpha() {
        // left half opaque, right half transparent; same-size resize is a no-op
        let mut img = RgbaImage::new(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                let alpha = if x < 2 { 255 } else { 0 };
                img.put_pixel(x, y, Rgba([10, 20, 30, alpha]));
            }
        }
        let mask = sample(&DynamicImage::ImageRgba8(img), 4, 0);
        assert_eq!((mask.width(), mask.height()), (4, 4));
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(mask.is_solid(x, y), x < 2);
            }
        }
    }

    #[test]
    fn sample_downscales_longer_side() {
        let img = RgbaImage::from_pixel(32, 16, Rgba([0, 0, 0, 255]));
        let mask = sample(&DynamicImage::ImageRgba8(img), 8, 0);
        assert_eq!((mask.width(), mask.height()), (8, 4));
        assert_eq!(mask.solid_count(), 32);
    }
}
