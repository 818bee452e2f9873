//! Torus surface sampling.
//!
//! The tube circle lies in the x-y plane, centred at `(R, 0, 0)`, and is swept
//! around the y axis. `theta` walks the tube, `phi` walks the ring.

use std::f64::consts::TAU;

use crate::math::{cos_sin, Vec3};
use crate::types::{TorusGeometry, MAX_SWEEP_SAMPLES};

/// A point on the surface and its unit outward normal (model space).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    pub point: Vec3,
    pub normal: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Torus {
    pub minor_radius: f64,
    pub major_radius: f64,
}

impl Torus {
    pub fn new(minor_radius: f64, major_radius: f64) -> Self {
        Self {
            minor_radius,
            major_radius,
        }
    }

    pub fn from_geometry(geometry: &TorusGeometry) -> Self {
        Self::new(geometry.minor_radius, geometry.major_radius)
    }

    /// Sample the surface at the given angles.
    pub fn sample(&self, theta: f64, phi: f64) -> SurfacePoint {
        self.sample_trig(cos_sin(theta), cos_sin(phi))
    }

    /// Same as [`Torus::sample`] with precomputed `(cos, sin)` pairs.
    #[inline(always)]
    pub fn sample_trig(&self, theta: (f64, f64), phi: (f64, f64)) -> SurfacePoint {
        let (cos_t, sin_t) = theta;
        let circle = Vec3::new(
            self.major_radius + self.minor_radius * cos_t,
            self.minor_radius * sin_t,
            0.0,
        );
        let normal = Vec3::new(cos_t, sin_t, 0.0);
        SurfacePoint {
            point: circle.rotate_y(phi),
            normal: normal.rotate_y(phi),
        }
    }

    /// Left-hand side minus right-hand side of `(sqrt(x² + z²) − R)² + y² = r²`.
    ///
    /// Zero for points on the surface.
    pub fn implicit_residual(&self, p: Vec3) -> f64 {
        let ring = (p.x * p.x + p.z * p.z).sqrt() - self.major_radius;
        ring * ring + p.y * p.y - self.minor_radius * self.minor_radius
    }
}

/// Angles `0, step, 2*step, ...` strictly below `2π`.
///
/// At most [`MAX_SWEEP_SAMPLES`] angles; a non-positive or NaN step yields none.
pub fn angle_steps(step: f64) -> impl Iterator<Item = f64> {
    let count = if step > 0.0 {
        (TAU / step).ceil().min(MAX_SWEEP_SAMPLES as f64) as usize
    } else {
        0
    };
    (0..count)
        .map(move |i| i as f64 * step)
        .take_while(|angle| *angle < TAU)
}

/// Precomputed `(cos, sin)` tables for both sweeps.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepTable {
    theta: Vec<(f64, f64)>,
    phi: Vec<(f64, f64)>,
}

impl SweepTable {
    pub fn new(theta_step: f64, phi_step: f64) -> Self {
        Self {
            theta: angle_steps(theta_step).map(cos_sin).collect(),
            phi: angle_steps(phi_step).map(cos_sin).collect(),
        }
    }

    pub fn theta(&self) -> &[(f64, f64)] {
        &self.theta
    }

    pub fn phi(&self) -> &[(f64, f64)] {
        &self.phi
    }

    /// Number of surface samples per frame.
    pub fn len(&self) -> usize {
        self.theta.len() * self.phi.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
