//! Occupancy mask - flat row-major boolean grid marking solid cells.

use image::RgbaImage;

/// Boolean grid of solid/empty cells, stored row-major as `y * width + x`.
/// Queries outside the bounds answer "not solid" rather than panicking.
pub struct OccupancyMask {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl OccupancyMask {
    /// All-empty mask of the given dimensions (either may be zero).
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, cells: vec![false; width as usize * height as usize] }
    }

    /// Build a mask by evaluating a solidity predicate at every cell.
    pub fn from_fn(width: u32, height: u32, solid: impl Fn(u32, u32) -> bool) -> Self {
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(solid(x, y));
            }
        }
        Self { width, height, cells }
    }

    /// Threshold an RGBA image's alpha channel: a cell is solid iff
    /// `alpha > threshold`, so the default threshold 0 treats any
    /// non-fully-transparent pixel as solid.
    pub fn from_alpha(image: &RgbaImage, threshold: u8) -> Self {
        Self::from_fn(image.width(), image.height(), |x, y| {
            image.get_pixel(x, y).0[3] > threshold
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Solidity test; out-of-bounds cells are never solid.
    pub fn is_solid(&self, x: u32, y: u32) -> bool {
        x < self.width
            && y < self.height
            && self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Number of solid cells in the mask.
    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}
