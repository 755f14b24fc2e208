#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod display;
pub mod geom;
pub mod layout;
pub mod parse;
pub mod projection;
pub mod report;
pub mod view;

use std::fmt;

use display::{DISPLAY_PRESETS, Display};
use parse::config_json::{self, CalibrationConfig};
use projection::{EdgeDistanceMode, ProjectionEngine};
use serde::Serialize;
use view::{OrthoView, ViewTransform};
use wasm_bindgen::JsError;
use wasm_bindgen::prelude::*;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))] {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            console_error_panic_hook::set_once();
            init_logger();
        }
    } else {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            init_logger();
        }
    }
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {}

#[macro_export]
macro_rules! debug_log {
    ($($t:tt)*) => {{
        #[cfg(feature = "debug_logs")]
        {
            #[cfg(target_arch = "wasm32")]
            {
                ::web_sys::console::log_1(&::wasm_bindgen::JsValue::from_str(&format!($($t)*)));
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                println!("{}", format!($($t)*));
            }
        }
    }};
}

/// Publiek toegangspunt voor de webinterface.
///
/// Houdt alleen de projectie-instellingen vast; displays worden bij elke
/// aanroep volledig meegegeven.
#[wasm_bindgen]
pub struct CalibrationEngine {
    engine: ProjectionEngine,
}

#[wasm_bindgen]
impl CalibrationEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CalibrationEngine {
        CalibrationEngine {
            engine: ProjectionEngine::default(),
        }
    }

    /// Huidige randafstand-methode: `"stable"` of `"precise"`.
    #[wasm_bindgen]
    pub fn edge_mode(&self) -> String {
        edge_mode_name(self.engine.options().edge_mode).to_owned()
    }

    /// Kies de methode voor randafstanden.
    #[wasm_bindgen]
    pub fn set_edge_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        let mode: EdgeDistanceMode = mode.parse().map_err(to_js_error)?;
        debug_log!("edge mode -> {mode:?}");
        self.engine.set_edge_mode(mode);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn near_distance(&self) -> f64 {
        self.engine.options().near_distance
    }

    /// Stel de near-clip afstand (meter) in voor volgende projecties.
    #[wasm_bindgen]
    pub fn set_near_distance(&mut self, near_distance: f64) -> Result<(), JsValue> {
        self.engine
            .set_near_distance(near_distance)
            .map_err(to_js_error)
    }

    /// Bereken de volledige projectie van één display.
    #[wasm_bindgen]
    pub fn project_display(&self, display: JsValue) -> Result<JsValue, JsValue> {
        let display: Display = serde_wasm_bindgen::from_value(display).map_err(to_js_error)?;
        debug_log!("project_display {:?}", display.style.name);
        let projection = self.engine.project(&display).map_err(to_js_error)?;
        to_js_value(&projection)
    }

    /// Frustum van één display; zonder `near_distance` geldt de ingestelde waarde.
    #[wasm_bindgen]
    pub fn near_plane_frustum(
        &self,
        display: JsValue,
        near_distance: Option<f64>,
    ) -> Result<JsValue, JsValue> {
        let display: Display = serde_wasm_bindgen::from_value(display).map_err(to_js_error)?;
        let near = near_distance.unwrap_or(self.engine.options().near_distance);
        let frustum = projection::near_plane_frustum(&display, near).map_err(to_js_error)?;
        to_js_value(&frustum)
    }

    /// Tekstrapport zoals het in het detailpaneel verschijnt.
    #[wasm_bindgen]
    pub fn format_report(&self, display: JsValue) -> Result<String, JsValue> {
        let display: Display = serde_wasm_bindgen::from_value(display).map_err(to_js_error)?;
        let projection = self.engine.project(&display).map_err(to_js_error)?;
        Ok(report::format_projection(&projection))
    }

    /// Schermcoördinaten van de omtrek (TL, TR, BR, BL) in een orthografisch aanzicht.
    #[wasm_bindgen]
    pub fn project_outline(
        &self,
        display: JsValue,
        view: &str,
        scale: f64,
        origin_x: f64,
        origin_y: f64,
    ) -> Result<JsValue, JsValue> {
        let display: Display = serde_wasm_bindgen::from_value(display).map_err(to_js_error)?;
        let view: OrthoView = view.parse().map_err(to_js_error)?;
        display.validate().map_err(to_js_error)?;
        let corners = projection::projection_corners(&display);
        let outline = ViewTransform::new(scale, origin_x, origin_y).project_outline(view, &corners);
        to_js_value(&outline)
    }

    /// Nieuwe display rechts naast `reference`, gedraaid over `yaw` graden.
    #[wasm_bindgen]
    pub fn place_right_of(
        &self,
        reference: JsValue,
        width: f64,
        height: f64,
        yaw: f64,
    ) -> Result<JsValue, JsValue> {
        let reference: Display =
            serde_wasm_bindgen::from_value(reference).map_err(to_js_error)?;
        reference.validate().map_err(to_js_error)?;
        to_js_value(&layout::place_right_of(&reference, width, height, yaw))
    }

    /// Lees een configuratiedocument en controleer alle displays.
    #[wasm_bindgen]
    pub fn parse_config(&self, json: &str) -> Result<JsValue, JsValue> {
        let config = load_config(json).map_err(to_js_error)?;
        to_js_value(&config)
    }

    /// Schrijf displays weg als configuratiedocument met huidige tijdstempel.
    #[wasm_bindgen]
    pub fn serialize_config(&self, displays: JsValue) -> Result<String, JsValue> {
        let displays: Vec<Display> =
            serde_wasm_bindgen::from_value(displays).map_err(to_js_error)?;
        CalibrationConfig::new(displays)
            .to_json_pretty()
            .map_err(to_js_error)
    }

    /// Beschikbare schermformaten (diagonaal in inch, breedte en hoogte in meter).
    #[wasm_bindgen]
    pub fn display_presets(&self) -> Result<JsValue, JsValue> {
        to_js_value(&DISPLAY_PRESETS)
    }
}

impl Default for CalibrationEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn load_config(json: &str) -> config_json::ConfigResult<CalibrationConfig> {
    let config = config_json::parse_str(json)?;
    config.validate_displays()?;
    Ok(config)
}

const fn edge_mode_name(mode: EdgeDistanceMode) -> &'static str {
    match mode {
        EdgeDistanceMode::Stable => "stable",
        EdgeDistanceMode::Precise => "precise",
    }
}

fn to_js_value<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(to_js_error)
}

fn to_js_error<E: fmt::Display>(error: E) -> JsValue {
    js_error(&error.to_string())
}

fn js_error(message: &str) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    {
        JsError::new(message).into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        JsValue::NULL
    }
}
