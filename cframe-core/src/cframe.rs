/// Coordinate frames: a position plus a fixed-order Euler rotation
use log::trace;
use std::fmt;

use crate::error::{ensure_finite, Result};
use crate::matrix::Matrix4;
use crate::vector::Vector3;

/// Rotation about the three principal axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
}

impl EulerAngles {
    pub fn new(rx: f64, ry: f64, rz: f64) -> Self {
        Self { rx, ry, rz }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// `rotation_x(rx) * rotation_y(ry) * rotation_z(rz)`, in that order.
    pub fn to_matrix(&self) -> Matrix4 {
        Matrix4::rotation_x(self.rx)
            .multiply(&Matrix4::rotation_y(self.ry))
            .multiply(&Matrix4::rotation_z(self.rz))
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.rx, self.ry, self.rz]
    }
}

impl From<[f64; 3]> for EulerAngles {
    fn from([rx, ry, rz]: [f64; 3]) -> Self {
        Self::new(rx, ry, rz)
    }
}

/// A coordinate frame: where something is and which way it faces.
///
/// The rotation matrix is derived once from the angles at construction and
/// never changes; there are no setters. Transforming a point rotates it about
/// the origin first, then translates it by the position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CFrame {
    position: Vector3,
    angles: EulerAngles,
    rotation: Matrix4,
}

impl CFrame {
    pub fn new(x: f64, y: f64, z: f64, rx: f64, ry: f64, rz: f64) -> Self {
        Self::from_parts(Vector3::new(x, y, z), EulerAngles::new(rx, ry, rz))
    }

    /// Like [`CFrame::new`], but fails if any of the six inputs is NaN or
    /// infinite.
    pub fn try_new(x: f64, y: f64, z: f64, rx: f64, ry: f64, rz: f64) -> Result<Self> {
        let position = Vector3::try_new(x, y, z)?;
        let angles = EulerAngles::new(
            ensure_finite("rx", rx)?,
            ensure_finite("ry", ry)?,
            ensure_finite("rz", rz)?,
        );
        Ok(Self::from_parts(position, angles))
    }

    pub fn from_parts(position: Vector3, angles: EulerAngles) -> Self {
        let rotation = angles.to_matrix();
        trace!(
            "cframe at {} with angles ({}, {}, {})",
            position,
            angles.rx,
            angles.ry,
            angles.rz
        );
        Self {
            position,
            angles,
            rotation,
        }
    }

    /// A frame at `(x, y, z)` with no rotation.
    pub fn from_position(x: f64, y: f64, z: f64) -> Self {
        Self::from_parts(Vector3::new(x, y, z), EulerAngles::zero())
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn rotation(&self) -> Matrix4 {
        self.rotation
    }

    pub fn angles(&self) -> EulerAngles {
        self.angles
    }

    /// The translation matrix for this frame's position.
    pub fn translation(&self) -> Matrix4 {
        Matrix4::translation(self.position.x, self.position.y, self.position.z)
    }

    /// Rotate `point` about the origin, then move it by the position.
    pub fn transform_point(&self, point: &Vector3) -> Vector3 {
        point
            .apply_matrix(&self.rotation)
            .apply_matrix(&self.translation())
    }

    pub fn transform_points(&self, points: &[Vector3]) -> Vec<Vector3> {
        points.iter().map(|p| self.transform_point(p)).collect()
    }

    /// The single matrix equivalent to [`CFrame::transform_point`].
    pub fn to_matrix(&self) -> Matrix4 {
        self.rotation.multiply(&self.translation())
    }
}

impl Default for CFrame {
    fn default() -> Self {
        Self::from_parts(Vector3::zero(), EulerAngles::zero())
    }
}

impl fmt::Display for CFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CFrame(position {}, rotation ({}, {}, {}))",
            self.position, self.angles.rx, self.angles.ry, self.angles.rz
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_vector_eq(v: Vector3, expected: (f64, f64, f64)) {
        assert_abs_diff_eq!(v.x, expected.0, epsilon = 1e-9);
        assert_abs_diff_eq!(v.y, expected.1, epsilon = 1e-9);
        assert_abs_diff_eq!(v.z, expected.2, epsilon = 1e-9);
    }

    #[test]
    fn test_euler_angles_array() {
        assert_eq!(EulerAngles::zero().to_array(), [0.0, 0.0, 0.0]);
        assert_eq!(EulerAngles::from([0.1, 0.2, 0.3]).to_array(), [0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_identity_rotation() {
        let frame = CFrame::new(1.0, 2.0, 3.0, 0.0, 0.0, 0.0);
        assert_eq!(frame.rotation(), Matrix4::identity());
    }

    #[test]
    fn test_rotation_order_is_x_then_y_then_z() {
        let frame = CFrame::new(0.0, 0.0, 0.0, 0.3, -1.2, 2.0);
        let expected = Matrix4::rotation_x(0.3)
            .multiply(&Matrix4::rotation_y(-1.2))
            .multiply(&Matrix4::rotation_z(2.0));
        assert_eq!(frame.rotation(), expected);

        let reversed = Matrix4::rotation_z(2.0)
            .multiply(&Matrix4::rotation_y(-1.2))
            .multiply(&Matrix4::rotation_x(0.3));
        assert_ne!(frame.rotation(), reversed);
    }

    #[test]
    fn test_rotate_then_translate() {
        let frame = CFrame::new(10.0, 0.0, 0.0, 0.0, 0.0, FRAC_PI_2);
        let p = frame.transform_point(&Vector3::new(1.0, 0.0, 0.0));
        assert_vector_eq(p, (10.0, 1.0, 0.0));
    }

    #[test]
    fn test_translation_is_not_rotated() {
        // Translating first would send (1,0,0) to (11,0,0) and then rotate it
        // to (0,11,0).
        let frame = CFrame::new(10.0, 0.0, 0.0, 0.0, 0.0, FRAC_PI_2);
        let p = frame.transform_point(&Vector3::new(1.0, 0.0, 0.0));
        assert!((p.y - 11.0).abs() > 1.0);
    }

    #[test]
    fn test_origin_maps_to_position() {
        let frame = CFrame::new(-4.0, 2.5, 7.0, 0.4, PI, -1.0);
        assert_vector_eq(frame.transform_point(&Vector3::zero()), (-4.0, 2.5, 7.0));
    }

    #[test]
    fn test_to_matrix_matches_transform_point() {
        let frame = CFrame::new(1.0, -2.0, 3.0, 0.5, 0.25, -0.75);
        let m = frame.to_matrix();
        for p in [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(-3.0, 4.0, 0.5),
            Vector3::new(0.0, 0.0, -9.0),
        ] {
            let a = frame.transform_point(&p);
            let b = p.apply_matrix(&m);
            assert_vector_eq(a, (b.x, b.y, b.z));
        }
    }

    #[test]
    fn test_transform_points_keeps_order() {
        let frame = CFrame::from_position(1.0, 1.0, 1.0);
        let out = frame.transform_points(&[Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 2.0, 3.0)]);
        assert_eq!(out, vec![Vector3::new(1.0, 1.0, 1.0), Vector3::new(2.0, 3.0, 4.0)]);
    }

    #[test]
    fn test_try_new() {
        assert!(CFrame::try_new(0.0, 0.0, 0.0, 0.1, 0.2, 0.3).is_ok());
        assert!(CFrame::try_new(0.0, 0.0, 0.0, f64::NAN, 0.2, 0.3).is_err());
        assert!(CFrame::try_new(f64::INFINITY, 0.0, 0.0, 0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_nan_angle_propagates() {
        let frame = CFrame::new(0.0, 0.0, 0.0, f64::NAN, 0.0, 0.0);
        assert!(!frame.rotation().is_finite());
        assert!(!frame.transform_point(&Vector3::new(1.0, 1.0, 1.0)).is_finite());
    }

    #[test]
    fn test_default_is_origin() {
        let frame = CFrame::default();
        assert_eq!(frame.position(), Vector3::zero());
        assert_eq!(frame.angles(), EulerAngles::zero());
        assert_eq!(frame.to_matrix(), Matrix4::identity());
    }
}
