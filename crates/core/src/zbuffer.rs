//! Depth/luminance buffer.
//!
//! Stores, per cell, the inverse depth and shaded luminance of the closest
//! sample plotted so far. Zero inverse depth marks an empty cell.

#[derive(Debug, Clone, PartialEq)]
pub struct DepthBuffer {
    width: u16,
    height: u16,
    inv_depth: Vec<f64>,
    luminance: Vec<f64>,
}

impl DepthBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            inv_depth: vec![0.0; len],
            luminance: vec![0.0; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Reset every cell to empty. Keeps the allocation.
    pub fn clear(&mut self) {
        self.inv_depth.fill(0.0);
        self.luminance.fill(0.0);
    }

    /// Resize, preserving the allocation when possible. Contents are cleared.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            let len = (width as usize) * (height as usize);
            self.inv_depth.resize(len, 0.0);
            self.luminance.resize(len, 0.0);
        }
        self.clear();
    }

    /// Record a sample if it is at least as close as what the cell holds.
    ///
    /// Equal depth: the later sample wins. Returns whether the cell was
    /// written; out-of-bounds coordinates and non-positive depths are ignored.
    #[inline]
    pub fn plot(&mut self, x: u16, y: u16, inv_depth: f64, luminance: f64) -> bool {
        let Some(i) = self.idx(x, y) else {
            return false;
        };
        if !(inv_depth > 0.0) || inv_depth < self.inv_depth[i] {
            return false;
        }
        self.inv_depth[i] = inv_depth;
        self.luminance[i] = luminance;
        true
    }

    /// Inverse depth at a cell (`0.0` when empty or out of bounds).
    pub fn inv_depth_at(&self, x: u16, y: u16) -> f64 {
        self.idx(x, y).map(|i| self.inv_depth[i]).unwrap_or(0.0)
    }

    /// Luminance of the winning sample, `None` for empty cells.
    pub fn luminance_at(&self, x: u16, y: u16) -> Option<f64> {
        let i = self.idx(x, y)?;
        (self.inv_depth[i] > 0.0).then_some(self.luminance[i])
    }

    pub fn is_covered(&self, x: u16, y: u16) -> bool {
        self.inv_depth_at(x, y) > 0.0
    }

    /// Number of cells holding a sample.
    pub fn coverage(&self) -> usize {
        self.inv_depth.iter().filter(|d| **d > 0.0).count()
    }

    /// Row-major `(inv_depth, luminance)` pairs.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.inv_depth
            .iter()
            .copied()
            .zip(self.luminance.iter().copied())
    }
}
