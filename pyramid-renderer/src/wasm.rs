use wasm_bindgen::prelude::*;

use crate::{Axis, Scene, SceneConfig};

/// JavaScript wrapper around a [`Scene`].
///
/// ```js
/// const pyramid = new PyramidScene("#canvas");
/// button.onclick = () => pyramid.rotateX();
/// ```
#[wasm_bindgen]
#[derive(Debug)]
pub struct PyramidScene {
    scene: Scene,
}

#[wasm_bindgen]
impl PyramidScene {
    /// Creates a scene on the canvas matching `canvas_id` and draws the
    /// initial frame.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<PyramidScene, JsValue> {
        Self::with_rotation_step(canvas_id, crate::RotationControls::DEFAULT_STEP)
    }

    /// Like the constructor, with a custom number of degrees per rotate call.
    #[wasm_bindgen(js_name = "withRotationStep")]
    pub fn with_rotation_step(canvas_id: &str, degrees: f32) -> Result<PyramidScene, JsValue> {
        console_error_panic_hook::set_once();

        let scene = Scene::builder(canvas_id)
            .config(SceneConfig::default())
            .rotation_step(degrees)
            .build()
            .map_err(to_js_error)?;
        scene.render_frame().map_err(to_js_error)?;

        log::info!("PyramidScene initialized");
        Ok(PyramidScene { scene })
    }

    #[wasm_bindgen(js_name = "rotateX")]
    pub fn rotate_x(&mut self) -> Result<Vec<f32>, JsValue> {
        self.rotate(Axis::X)
    }

    #[wasm_bindgen(js_name = "rotateY")]
    pub fn rotate_y(&mut self) -> Result<Vec<f32>, JsValue> {
        self.rotate(Axis::Y)
    }

    #[wasm_bindgen(js_name = "rotateZ")]
    pub fn rotate_z(&mut self) -> Result<Vec<f32>, JsValue> {
        self.rotate(Axis::Z)
    }

    /// Redraws the pyramid at the current angles.
    #[wasm_bindgen]
    pub fn render(&self) -> Result<(), JsValue> {
        self.scene.render_frame().map_err(to_js_error)
    }

    /// Current `[x, y, z]` rotation in degrees.
    #[wasm_bindgen(getter)]
    pub fn angles(&self) -> Vec<f32> {
        self.scene.angles().to_vec()
    }
}

impl PyramidScene {
    fn rotate(&mut self, axis: Axis) -> Result<Vec<f32>, JsValue> {
        self.scene.rotate(axis).map(|angles| angles.to_vec()).map_err(to_js_error)
    }
}

fn to_js_error(e: crate::Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Initialize the library with better panic messages and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // a logger may already be installed by the host page
    let _ = console_log::init_with_level(log::Level::Info);
}
