use wasm_bindgen::prelude::*;

use morph_core::{CloudAnimator, CloudConfig, Rgb};

/// Browser-facing wrapper around the cloud engine.
///
/// The JS side builds a typed-array view over the position buffer once and
/// re-reads it after every `tick`; the buffer is never reallocated, so the
/// pointer stays valid for the lifetime of the world.
#[wasm_bindgen]
pub struct CloudWorld {
    animator: CloudAnimator,
}

#[wasm_bindgen]
impl CloudWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(point_count: usize) -> CloudWorld {
        web_sys::console::log_1(&format!("WASM CloudWorld created: {point_count} points").into());

        let config = CloudConfig {
            point_count,
            ..CloudConfig::default()
        };
        CloudWorld {
            animator: CloudAnimator::new(config),
        }
    }

    /// Advance one animation frame with the current tension reading.
    /// Returns the elapsed time in milliseconds.
    #[wasm_bindgen]
    pub fn tick(&mut self, tension: f32) -> f32 {
        let start = js_sys::Date::now();
        self.animator.tick(tension);
        (js_sys::Date::now() - start) as f32
    }

    /// Switch the target shape by its UI identifier.
    #[wasm_bindgen]
    pub fn set_shape(&mut self, name: &str) -> Result<(), JsValue> {
        self.animator
            .set_shape_by_name(name)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Set the cloud color from a `#rrggbb` string.
    #[wasm_bindgen]
    pub fn set_color(&mut self, hex: &str) -> Result<(), JsValue> {
        let color = Rgb::from_hex(hex).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.animator.set_color(color);
        Ok(())
    }

    /// Pointer to the flat position buffer, 3 floats per point.
    #[wasm_bindgen]
    pub fn positions_ptr(&self) -> *const f32 {
        self.animator.positions_flat().as_ptr()
    }

    #[wasm_bindgen]
    pub fn positions_float_length(&self) -> usize {
        self.animator.positions_flat().len()
    }

    #[wasm_bindgen]
    pub fn point_count(&self) -> usize {
        self.animator.len()
    }

    /// Rotation about the vertical axis the renderer applies to the whole
    /// cloud.
    #[wasm_bindgen]
    pub fn spin_angle(&self) -> f32 {
        self.animator.spin()
    }

    /// Current color as `[r, g, b]` floats in `[0, 1]`.
    #[wasm_bindgen]
    pub fn color_rgb(&self) -> Vec<f32> {
        self.animator.color().to_array().to_vec()
    }

    #[wasm_bindgen]
    pub fn shape_name(&self) -> String {
        self.animator.shape().name().to_string()
    }

    #[wasm_bindgen]
    pub fn is_dirty(&self) -> bool {
        self.animator.is_dirty()
    }

    #[wasm_bindgen]
    pub fn clear_dirty(&mut self) {
        self.animator.clear_dirty();
    }
}
