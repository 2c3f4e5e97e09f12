//! Greedy rectangle decomposition - covers the solid cells of a mask with an
//! ordered list of non-overlapping rectangles.

use crate::mask::OccupancyMask;
use serde::Serialize;

/// Axis-aligned rectangle in mask-grid coordinates, `w` and `h` always ≥ 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }

    /// Map this grid-space rectangle into a `target_w` × `target_h` display
    /// area, scaling each axis by target/mask. Returns `[x, y, w, h]`.
    pub fn project(&self, mask_w: u32, mask_h: u32, target_w: f32, target_h: f32) -> [f32; 4] {
        let sx = target_w / mask_w as f32;
        let sy = target_h / mask_h as f32;
        [self.x as f32 * sx, self.y as f32 * sy, self.w as f32 * sx, self.h as f32 * sy]
    }
}

/// Decompose a mask into non-overlapping rectangles whose union is exactly
/// its set of solid cells.
///
/// Greedy, largest-first: each pass scans the whole grid row-major, grows a
/// maximal rectangle from every unvisited solid anchor (width first, then
/// height under that fixed width), and emits the largest one found. Ties keep
/// the earlier anchor in scan order, so the output is deterministic. The
/// fixed-width height growth means this is not a minimal cover, and each
/// emitted rectangle costs a full rescan, so worst case is quadratic in the
/// cell count. Masks here are small downsampled thumbnails; neither is worth
/// trading the stable output shape for.
///
/// An empty mask yields an empty Vec.
pub fn decompose(mask: &OccupancyMask) -> Vec<Rect> {
    let mut rects = Vec::new();
    if mask.is_empty() {
        return rects;
    }

    let (mw, mh) = (mask.width(), mask.height());
    let mut visited = vec![false; mw as usize * mh as usize];
    let at = |x: u32, y: u32| y as usize * mw as usize + x as usize;

    loop {
        let mut best: Option<Rect> = None;
        let mut best_area = 0u64;

        for y in 0..mh {
            for x in 0..mw {
                if visited[at(x, y)] || !mask.is_solid(x, y) {
                    continue;
                }

                // Maximal horizontal run of unvisited solid cells from (x, y).
                let mut w = 1;
                while x + w < mw && !visited[at(x + w, y)] && mask.is_solid(x + w, y) {
                    w += 1;
                }

                // Grow down while every cell of the next row supports the full
                // width. The width is never re-narrowed once chosen.
                let mut h = 1;
                while y + h < mh {
                    let supported =
                        (0..w).all(|i| !visited[at(x + i, y + h)] && mask.is_solid(x + i, y + h));
                    if !supported {
                        break;
                    }
                    h += 1;
                }

                let area = w as u64 * h as u64;
                if area > best_area {
                    best = Some(Rect { x, y, w, h });
                    best_area = area;
                }
            }
        }

        let Some(rect) = best else { break };
        for cy in rect.y..rect.y + rect.h {
            for cx in rect.x..rect.x + rect.w {
                visited[at(cx, cy)] = true;
            }
        }
        rects.push(rect);
    }

    rects
}
