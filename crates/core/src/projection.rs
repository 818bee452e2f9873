//! Perspective projection onto the character grid.

use crate::math::Vec3;
use crate::types::{DonutConfig, TorusGeometry, MIN_DEPTH};

/// A projected sample that landed inside the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSample {
    pub x: u16,
    pub y: u16,
    /// `1 / z` after moving the torus `viewer_distance` away; larger is closer.
    pub inv_depth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    width: u16,
    height: u16,
    viewer_distance: f64,
    /// Screen-space scale: the torus spans about 3/4 of the grid along its
    /// tighter axis (width, or height corrected by `cell_aspect`).
    k1: f64,
    cell_aspect: f64,
}

impl Projector {
    pub fn new(width: u16, height: u16, geometry: &TorusGeometry, cell_aspect: f64) -> Self {
        let extent = geometry.minor_radius + geometry.major_radius;
        let fit = (width as f64).min(height as f64 / cell_aspect);
        let k1 = fit * geometry.viewer_distance * 3.0 / (8.0 * extent);
        Self {
            width,
            height,
            viewer_distance: geometry.viewer_distance,
            k1,
            cell_aspect,
        }
    }

    pub fn from_config(config: &DonutConfig) -> Self {
        Self::new(
            config.width,
            config.height,
            &config.geometry,
            config.cell_aspect,
        )
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn k1(&self) -> f64 {
        self.k1
    }

    /// Project a rotated point. Returns `None` when the sample is behind the
    /// eye or falls outside the grid.
    #[inline]
    pub fn project(&self, p: Vec3) -> Option<ScreenSample> {
        let z = p.z + self.viewer_distance;
        if z <= MIN_DEPTH {
            return None;
        }
        let ooz = 1.0 / z;
        let sx = (self.width as f64 / 2.0 + self.k1 * ooz * p.x).floor();
        let sy = (self.height as f64 / 2.0 - self.k1 * ooz * p.y * self.cell_aspect).floor();

        // NaN fails both comparisons and is dropped here too.
        if !(sx >= 0.0 && sx < self.width as f64 && sy >= 0.0 && sy < self.height as f64) {
            return None;
        }
        Some(ScreenSample {
            x: sx as u16,
            y: sy as u16,
            inv_depth: ooz,
        })
    }
}
