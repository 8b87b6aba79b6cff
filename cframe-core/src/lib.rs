/// CFrame Core Library - Homogeneous transforms and scene state
///
/// This library provides the stateless transform engine (4x4 matrices, points,
/// coordinate frames) together with the mutable scene state and the numeric
/// coercion helpers shared by the terminal and web hosts.

pub mod cframe;
pub mod coerce;
pub mod config;
pub mod error;
pub mod matrix;
pub mod scene;
pub mod vector;

// Re-export commonly used types
pub use cframe::{CFrame, EulerAngles};
pub use config::{CameraConfig, SceneConfig};
pub use error::{CFrameError, Result};
pub use matrix::Matrix4;
pub use scene::{CameraProperty, SceneState};
pub use vector::Vector3;
