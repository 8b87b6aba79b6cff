/// 4x4 homogeneous transform matrices in row-vector convention
use nalgebra as na;
use std::fmt;
use std::ops::{Index, Mul};

/// A 4x4 homogeneous transform.
///
/// Elements are addressed as `(row, col)`. Points are treated as row vectors
/// multiplied on the left (`p' = p * M`), so translation lives in the bottom
/// row (`e[3][0..3]`) and `a * b` applies `a` first, then `b`.
///
/// Values are immutable: every operation returns a new matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4(na::Matrix4<f64>);

impl Matrix4 {
    /// Build a matrix from its rows.
    pub fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        let [r0, r1, r2, r3] = rows;
        Self(na::Matrix4::new(
            r0[0], r0[1], r0[2], r0[3],
            r1[0], r1[1], r1[2], r1[3],
            r2[0], r2[1], r2[2], r2[3],
            r3[0], r3[1], r3[2], r3[3],
        ))
    }

    pub fn identity() -> Self {
        Self(na::Matrix4::identity())
    }

    /// Rotation about the X axis by `angle` radians (right-handed).
    ///
    /// Keeps x, maps `(y, z)` to `(y cos - z sin, y sin + z cos)`.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, s, 0.0],
            [0.0, -s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the Y axis by `angle` radians (right-handed).
    ///
    /// Keeps y, maps `(x, z)` to `(x cos + z sin, -x sin + z cos)`.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [c, 0.0, -s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the Z axis by `angle` radians (right-handed).
    ///
    /// Keeps z, maps `(x, y)` to `(x cos - y sin, x sin + y cos)`.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [c, s, 0.0, 0.0],
            [-s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Identity with the offset written into the bottom row.
    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        let mut m = na::Matrix4::identity();
        m[(3, 0)] = x;
        m[(3, 1)] = y;
        m[(3, 2)] = z;
        Self(m)
    }

    /// Standard matrix product `self * other`. Not commutative.
    pub fn multiply(&self, other: &Matrix4) -> Matrix4 {
        Self(self.0 * other.0)
    }

    pub fn transpose(&self) -> Matrix4 {
        Self(self.0.transpose())
    }

    /// Element at `(row, col)`. Panics if either index is above 3.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.0[(row, col)]
    }

    pub fn to_rows(&self) -> [[f64; 4]; 4] {
        let mut rows = [[0.0; 4]; 4];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = self.0[(i, j)];
            }
        }
        rows
    }

    /// All 16 elements, row-major.
    pub fn to_array(&self) -> [f64; 16] {
        let mut out = [0.0; 16];
        for (k, value) in out.iter_mut().enumerate() {
            *value = self.0[(k / 4, k % 4)];
        }
        out
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    pub(crate) fn as_na(&self) -> &na::Matrix4<f64> {
        &self.0
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<(usize, usize)> for Matrix4 {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.0[index]
    }
}

impl Mul for Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: Matrix4) -> Matrix4 {
        self.multiply(&rhs)
    }
}

impl Mul<&Matrix4> for &Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: &Matrix4) -> Matrix4 {
        self.multiply(rhs)
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.to_rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{}, {}, {}, {}]", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}
