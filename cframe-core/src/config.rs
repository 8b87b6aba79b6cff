/// JSON scene descriptions used to seed a `SceneState`
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::scene::SceneState;
use crate::vector::Vector3;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f64; 3],
    pub rotation: [f64; 3],
}

/// Initial camera and points. Every field may be omitted.
///
/// ```json
/// {
///   "camera": { "position": [0, 0, 5], "rotation": [0, 0.5, 0] },
///   "points": [[1, 2, 3], [4, 5, 6]]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub points: Vec<[f64; 3]>,
}

impl SceneConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        info!(
            "loaded scene from {} ({} points)",
            path.display(),
            config.points.len()
        );
        Ok(config)
    }

    /// Non-finite values are written as `null` by serde_json.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn into_scene(self) -> SceneState {
        let mut scene = SceneState::new();
        let [x, y, z] = self.camera.position;
        scene.set_camera_position(x, y, z);
        let [rx, ry, rz] = self.camera.rotation;
        scene.set_camera_rotation(rx, ry, rz);
        for [x, y, z] in self.points {
            scene.add_point(x, y, z);
        }
        scene
    }
}

impl SceneState {
    pub fn to_config(&self) -> SceneConfig {
        SceneConfig {
            camera: CameraConfig {
                position: self.camera_position().to_array(),
                rotation: self.camera_rotation().to_array(),
            },
            points: self.points().iter().map(Vector3::to_array).collect(),
        }
    }

    pub fn from_config(config: SceneConfig) -> Self {
        config.into_scene()
    }
}
