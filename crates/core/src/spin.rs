//! Rotation state of the animation.
//!
//! `SpinState` is a plain value: the render loop renders a frame from it and
//! replaces it with [`SpinState::advanced`]. Angles are kept in `[0, 2π)`.

use std::f64::consts::TAU;

use crate::math::{cos_sin, Vec3};
use crate::types::SpinRates;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpinState {
    /// Angle about the x axis
    pub a: f64,
    /// Angle about the z axis
    pub b: f64,
    /// Frames rendered from this lineage of states
    pub frame: u64,
}

impl SpinState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State at fixed angles (frame counter zero).
    pub fn at(a: f64, b: f64) -> Self {
        Self {
            a: a.rem_euclid(TAU),
            b: b.rem_euclid(TAU),
            frame: 0,
        }
    }

    /// The state one frame later.
    #[must_use]
    pub fn advanced(self, rates: &SpinRates) -> Self {
        Self {
            a: (self.a + rates.a).rem_euclid(TAU),
            b: (self.b + rates.b).rem_euclid(TAU),
            frame: self.frame + 1,
        }
    }

    pub fn orientation(&self) -> Orientation {
        Orientation {
            a: cos_sin(self.a),
            b: cos_sin(self.b),
        }
    }
}

/// Cached trig of a [`SpinState`], applied to every sample of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    a: (f64, f64),
    b: (f64, f64),
}

impl Orientation {
    /// Spin about x by A, then about z by B.
    #[inline(always)]
    pub fn apply(&self, v: Vec3) -> Vec3 {
        v.rotate_x(self.a).rotate_z(self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_adds_rates_and_counts_frames() {
        let rates = SpinRates { a: 0.08, b: 0.03 };
        let s = SpinState::new().advanced(&rates).advanced(&rates);
        assert!((s.a - 0.16).abs() < 1e-12);
        assert!((s.b - 0.06).abs() < 1e-12);
        assert_eq!(s.frame, 2);
    }

    #[test]
    fn angles_wrap_into_one_turn() {
        let rates = SpinRates { a: 1.0, b: 2.5 };
        let mut s = SpinState::new();
        for _ in 0..50 {
            s = s.advanced(&rates);
            assert!((0.0..TAU).contains(&s.a));
            assert!((0.0..TAU).contains(&s.b));
        }
    }

    #[test]
    fn zero_orientation_is_identity() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(SpinState::new().orientation().apply(v), v);
    }
}
