//! Browser entry points. The page owns the clocks: it calls `frame` from
//! its animation callback and `tick` from a 100 ms interval, and tears both
//! down as soon as `tick` reports the end of the session.

use crate::config::LabConfig;
use crate::lab::Lab;
use crate::render;
use crate::session::Transition;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    console_log::init_with_level(log::Level::Info).expect("Couldn't initialize logger");
}

#[wasm_bindgen]
pub struct WebLab {
    lab: Lab,
}

#[wasm_bindgen]
impl WebLab {
    /// The page supplies the seed, there is no system clock to take it from.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> WebLab {
        let config = LabConfig {
            seed: Some(seed as u64),
            ..LabConfig::default()
        };
        WebLab {
            lab: Lab::new(config),
        }
    }

    #[wasm_bindgen(js_name = startRecording)]
    pub fn start_recording(&mut self) {
        self.lab.start();
    }

    pub fn reset(&mut self) {
        self.lab.reset();
    }

    /// Advance the animation; false once recording has stopped.
    pub fn frame(&mut self) -> bool {
        self.lab.frame().is_some()
    }

    /// Advance the session timer; true exactly once, when the cap is reached.
    pub fn tick(&mut self) -> bool {
        self.lab.tick() == Some(Transition::Terminated)
    }

    #[wasm_bindgen(js_name = isRecording)]
    pub fn is_recording(&self) -> bool {
        self.lab.is_active()
    }

    pub fn svg(&self) -> String {
        render::svg(&self.lab.pose(), self.lab.is_active())
    }

    pub fn snapshot(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.lab.snapshot()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn report(&self) -> Option<String> {
        self.lab.report().map(|report| report.to_string())
    }
}
