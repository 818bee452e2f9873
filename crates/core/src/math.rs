//! Small 3D vector math for the torus pipeline.
//!
//! Rotations use the row-vector convention (`v · M`), which keeps the
//! composed formulas identical to the classic closed-form donut equations.

/// 3D vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Rotate about the x axis given `(cos, sin)` of the angle.
    #[inline(always)]
    pub fn rotate_x(self, (c, s): (f64, f64)) -> Self {
        Self::new(self.x, self.y * c - self.z * s, self.y * s + self.z * c)
    }

    /// Rotate about the y axis given `(cos, sin)` of the angle.
    #[inline(always)]
    pub fn rotate_y(self, (c, s): (f64, f64)) -> Self {
        Self::new(self.x * c - self.z * s, self.y, self.x * s + self.z * c)
    }

    /// Rotate about the z axis given `(cos, sin)` of the angle.
    #[inline(always)]
    pub fn rotate_z(self, (c, s): (f64, f64)) -> Self {
        Self::new(self.x * c - self.y * s, self.x * s + self.y * c, self.z)
    }
}

impl From<(f64, f64, f64)> for Vec3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

/// `(cos, sin)` pair of an angle.
#[inline(always)]
pub fn cos_sin(angle: f64) -> (f64, f64) {
    let (s, c) = angle.sin_cos();
    (c, s)
}
