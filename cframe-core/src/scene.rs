/// Application state owned by the host: a camera and an ordered point list
use log::{debug, warn};
use std::fmt;
use std::str::FromStr;

use crate::cframe::{CFrame, EulerAngles};
use crate::coerce::format_number;
use crate::error::CFrameError;
use crate::vector::Vector3;

/// One of the six scalars describing the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraProperty {
    X,
    Y,
    Z,
    Rx,
    Ry,
    Rz,
}

impl CameraProperty {
    pub const ALL: [CameraProperty; 6] = [
        CameraProperty::X,
        CameraProperty::Y,
        CameraProperty::Z,
        CameraProperty::Rx,
        CameraProperty::Ry,
        CameraProperty::Rz,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CameraProperty::X => "x",
            CameraProperty::Y => "y",
            CameraProperty::Z => "z",
            CameraProperty::Rx => "rx",
            CameraProperty::Ry => "ry",
            CameraProperty::Rz => "rz",
        }
    }
}

impl FromStr for CameraProperty {
    type Err = CFrameError;

    /// Names are matched exactly (case-sensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CameraProperty::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| CFrameError::UnknownProperty(s.to_string()))
    }
}

impl fmt::Display for CameraProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Camera and point list for one running application.
///
/// The camera is kept as six independent scalars; it is never stored as a
/// [`CFrame`]. [`SceneState::camera_cframe`] builds a fresh frame on demand.
/// Points are append-only and can only be cleared all at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneState {
    camera_position: Vector3,
    camera_rotation: EulerAngles,
    points: Vec<Vector3>,
}

impl SceneState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(&mut self, x: f64, y: f64, z: f64) {
        let point = Vector3::new(x, y, z);
        debug!("adding point {} (#{})", point, self.points.len());
        self.points.push(point);
    }

    pub fn clear_points(&mut self) {
        debug!("clearing {} points", self.points.len());
        self.points.clear();
    }

    pub fn points(&self) -> &[Vector3] {
        &self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn set_camera_position(&mut self, x: f64, y: f64, z: f64) {
        self.camera_position = Vector3::new(x, y, z);
        debug!("camera position set to {}", self.camera_position);
    }

    pub fn set_camera_rotation(&mut self, rx: f64, ry: f64, rz: f64) {
        self.camera_rotation = EulerAngles::new(rx, ry, rz);
        debug!("camera rotation set to ({}, {}, {})", rx, ry, rz);
    }

    pub fn camera_position(&self) -> Vector3 {
        self.camera_position
    }

    pub fn camera_rotation(&self) -> EulerAngles {
        self.camera_rotation
    }

    pub fn camera(&self, property: CameraProperty) -> f64 {
        match property {
            CameraProperty::X => self.camera_position.x,
            CameraProperty::Y => self.camera_position.y,
            CameraProperty::Z => self.camera_position.z,
            CameraProperty::Rx => self.camera_rotation.rx,
            CameraProperty::Ry => self.camera_rotation.ry,
            CameraProperty::Rz => self.camera_rotation.rz,
        }
    }

    /// Look a camera scalar up by name; unknown names read as `0`.
    pub fn get_camera_property(&self, name: &str) -> f64 {
        match name.parse::<CameraProperty>() {
            Ok(property) => self.camera(property),
            Err(err) => {
                warn!("{}, reading as 0", err);
                0.0
            }
        }
    }

    /// [`SceneState::get_camera_property`] rendered the way hosts display
    /// numbers.
    pub fn get_camera_property_string(&self, name: &str) -> String {
        format_number(self.get_camera_property(name))
    }

    /// A new frame from the current camera scalars. Nothing is stored.
    pub fn camera_cframe(&self) -> CFrame {
        CFrame::from_parts(self.camera_position, self.camera_rotation)
    }

    /// Pure factory; the scene is not touched.
    pub fn create_cframe(&self, x: f64, y: f64, z: f64, rx: f64, ry: f64, rz: f64) -> CFrame {
        CFrame::new(x, y, z, rx, ry, rz)
    }

    /// Every stored point passed through `frame`, in insertion order.
    pub fn transformed_points(&self, frame: &CFrame) -> Vec<Vector3> {
        frame.transform_points(&self.points)
    }
}
