/// 3-component points transformed by homogeneous matrices
use nalgebra as na;
use std::fmt;
use std::ops::Mul;

use crate::error::{ensure_finite, Result};
use crate::matrix::Matrix4;

/// A point in world units.
///
/// Components are not validated: NaN and infinities are carried through every
/// operation. Use [`Vector3::try_new`] when the caller wants them rejected.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Like [`Vector3::new`], but fails on any non-finite component.
    pub fn try_new(x: f64, y: f64, z: f64) -> Result<Self> {
        Ok(Self {
            x: ensure_finite("x", x)?,
            y: ensure_finite("y", y)?,
            z: ensure_finite("z", z)?,
        })
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn from_array([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Transform this point as the homogeneous row vector `(x, y, z, 1)`.
    ///
    /// `x' = x*e[0][0] + y*e[1][0] + z*e[2][0] + e[3][0]`, likewise for y' and
    /// z' with columns 1 and 2. The fourth output component is dropped without
    /// a perspective divide.
    pub fn apply_matrix(&self, matrix: &Matrix4) -> Vector3 {
        let row = na::RowVector4::new(self.x, self.y, self.z, 1.0) * matrix.as_na();
        Vector3::new(row[0], row[1], row[2])
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(value: [f64; 3]) -> Self {
        Self::from_array(value)
    }
}

impl Mul<&Matrix4> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: &Matrix4) -> Vector3 {
        self.apply_matrix(rhs)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
