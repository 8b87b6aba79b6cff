/// CFrame Web - WASM bindings for browser block hosts
///
/// Block arguments arrive from JavaScript as strings and are coerced the same
/// way the host coerces them (blank is 0, garbage is NaN). Reporter results go
/// back as strings or flat `Float64Array`s.
use cframe_core::coerce::{format_number, parse_triple};
use cframe_core::{CFrame, SceneConfig, SceneState, Vector3};
use log::debug;
use wasm_bindgen::prelude::*;

/// Scene state owned by one host extension instance
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct WebScene {
    scene: SceneState,
}

#[wasm_bindgen]
impl WebScene {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebScene {
        WebScene::default()
    }

    /// Seed a scene from its JSON description.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<WebScene, JsValue> {
        let config =
            SceneConfig::from_json_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WebScene {
            scene: config.into_scene(),
        })
    }

    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.scene
            .to_config()
            .to_json_string()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = addPoint)]
    pub fn add_point(&mut self, x: &str, y: &str, z: &str) {
        let (x, y, z) = parse_triple(x, y, z);
        self.scene.add_point(x, y, z);
    }

    #[wasm_bindgen(js_name = clearPoints)]
    pub fn clear_points(&mut self) {
        self.scene.clear_points();
    }

    #[wasm_bindgen(js_name = pointCount)]
    pub fn point_count(&self) -> usize {
        self.scene.point_count()
    }

    /// Points flattened as `[x0, y0, z0, x1, ...]`.
    pub fn points(&self) -> Vec<f64> {
        flatten(self.scene.points())
    }

    #[wasm_bindgen(js_name = setCameraPosition)]
    pub fn set_camera_position(&mut self, x: &str, y: &str, z: &str) {
        let (x, y, z) = parse_triple(x, y, z);
        self.scene.set_camera_position(x, y, z);
    }

    #[wasm_bindgen(js_name = setCameraRotation)]
    pub fn set_camera_rotation(&mut self, rx: &str, ry: &str, rz: &str) {
        let (rx, ry, rz) = parse_triple(rx, ry, rz);
        self.scene.set_camera_rotation(rx, ry, rz);
    }

    #[wasm_bindgen(js_name = getCameraProperty)]
    pub fn get_camera_property(&self, name: &str) -> String {
        self.scene.get_camera_property_string(name)
    }

    #[wasm_bindgen(js_name = createCFrame)]
    pub fn create_cframe(
        &self,
        x: &str,
        y: &str,
        z: &str,
        rx: &str,
        ry: &str,
        rz: &str,
    ) -> WebCFrame {
        let (x, y, z) = parse_triple(x, y, z);
        let (rx, ry, rz) = parse_triple(rx, ry, rz);
        WebCFrame {
            inner: self.scene.create_cframe(x, y, z, rx, ry, rz),
        }
    }

    /// Every point moved through `frame`, flattened like [`WebScene::points`].
    #[wasm_bindgen(js_name = transformPoints)]
    pub fn transform_points(&self, frame: &WebCFrame) -> Vec<f64> {
        flatten(&self.scene.transformed_points(&frame.inner))
    }
}

/// An immutable coordinate frame handed to JavaScript
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct WebCFrame {
    inner: CFrame,
}

#[wasm_bindgen]
impl WebCFrame {
    pub fn position(&self) -> Vec<f64> {
        self.inner.position().to_array().to_vec()
    }

    /// The 16 rotation elements, row-major.
    pub fn rotation(&self) -> Vec<f64> {
        self.inner.rotation().to_array().to_vec()
    }

    #[wasm_bindgen(js_name = transformPoint)]
    pub fn transform_point(&self, x: &str, y: &str, z: &str) -> Vec<f64> {
        let (x, y, z) = parse_triple(x, y, z);
        let moved = self.inner.transform_point(&Vector3::new(x, y, z));
        debug!("transformed ({}, {}, {}) to {}", x, y, z, moved);
        moved.to_array().to_vec()
    }

    /// One coordinate of a transformed point as host text; `axis` is
    /// `x`, `y` or `z`, anything else reads as 0.
    #[wasm_bindgen(js_name = transformPointAxis)]
    pub fn transform_point_axis(&self, x: &str, y: &str, z: &str, axis: &str) -> String {
        let (x, y, z) = parse_triple(x, y, z);
        let moved = self.inner.transform_point(&Vector3::new(x, y, z));
        let value = match axis {
            "x" => moved.x,
            "y" => moved.y,
            "z" => moved.z,
            _ => 0.0,
        };
        format_number(value)
    }
}

fn flatten(points: &[Vector3]) -> Vec<f64> {
    points.iter().flat_map(|p| p.to_array()).collect()
}
