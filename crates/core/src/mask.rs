//! Collision masks - per-pixel opacity bitsets.
//!
//! The core never looks at images. The rendering side turns sprite alpha into
//! a [`CollisionMask`] (see [`CollisionMask::from_alpha`]) and the session only
//! asks whether two masks overlap at a given offset.

use crate::types::MASK_ALPHA_THRESHOLD;

/// Packed per-pixel opacity mask, row-major, 64 pixels per word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionMask {
    width: u32,
    height: u32,
    words_per_row: usize,
    bits: Vec<u64>,
}

impl CollisionMask {
    /// Fully transparent mask
    pub fn empty(width: u32, height: u32) -> Self {
        let words_per_row = (width as usize).div_ceil(64);
        Self {
            width,
            height,
            words_per_row,
            bits: vec![0; words_per_row * height as usize],
        }
    }

    /// Fully opaque mask
    pub fn solid(width: u32, height: u32) -> Self {
        let mut mask = Self::empty(width, height);
        mask.fill_rows(0, height);
        mask
    }

    /// Build a mask from one alpha byte per pixel (row-major).
    ///
    /// Pixels with alpha `<= 127` are excluded. Returns `None` when `alpha`
    /// does not hold exactly `width * height` entries.
    pub fn from_alpha(width: u32, height: u32, alpha: &[u8]) -> Option<Self> {
        if alpha.len() != width as usize * height as usize {
            return None;
        }
        let mut mask = Self::empty(width, height);
        for (i, &a) in alpha.iter().enumerate() {
            if a > MASK_ALPHA_THRESHOLD {
                let x = (i % width as usize) as u32;
                let y = (i / width as usize) as u32;
                mask.set(x, y);
            }
        }
        Some(mask)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline(always)]
    fn word(&self, x: u32, y: u32) -> (usize, u64) {
        let idx = y as usize * self.words_per_row + (x as usize / 64);
        (idx, 1u64 << (x % 64))
    }

    /// Mark a pixel opaque (out-of-bounds writes are ignored)
    pub fn set(&mut self, x: u32, y: u32) {
        if x < self.width && y < self.height {
            let (i, bit) = self.word(x, y);
            self.bits[i] |= bit;
        }
    }

    /// Whether a pixel is opaque (out of bounds is transparent)
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let (i, bit) = self.word(x, y);
        self.bits[i] & bit != 0
    }

    /// Make rows `[y0, y1)` fully opaque
    pub fn fill_rows(&mut self, y0: u32, y1: u32) {
        let y1 = y1.min(self.height);
        for y in y0..y1 {
            for x in 0..self.width {
                self.set(x, y);
            }
        }
    }

    /// Number of opaque pixels
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|w| w.count_ones()).sum()
    }

    /// Pixel-wise OR of two masks, sized to cover both.
    pub fn union(&self, other: &CollisionMask) -> CollisionMask {
        let mut out = CollisionMask::empty(self.width.max(other.width), self.height.max(other.height));
        for src in [self, other] {
            for y in 0..src.height {
                for x in 0..src.width {
                    if src.get(x, y) {
                        out.set(x, y);
                    }
                }
            }
        }
        out
    }

    /// Whether any opaque pixel of `other`, placed with its top-left corner at
    /// `(dx, dy)` in this mask's coordinates, lands on an opaque pixel here.
    pub fn overlaps(&self, other: &CollisionMask, dx: i32, dy: i32) -> bool {
        let x0 = dx.max(0);
        let y0 = dy.max(0);
        let x1 = (dx + other.width as i32).min(self.width as i32);
        let y1 = (dy + other.height as i32).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return false;
        }

        for y in y0..y1 {
            for x in x0..x1 {
                if self.get(x as u32, y as u32) && other.get((x - dx) as u32, (y - dy) as u32) {
                    return true;
                }
            }
        }
        false
    }
}
