//! WASM bindings for the catenary core solver.
//!
//! The browser front end supplies two clicked points and an arc length and
//! draws whatever comes back; every failure is surfaced as a string error so
//! the caller can simply skip rendering.

use catenary_core::{CatenaryParameters, Point};
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

mod solver;

pub use solver::WasmCatenarySolver;

/// Solves with default settings and returns `{ a, b, c }`.
#[wasm_bindgen]
pub fn solve_catenary(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    arc_length: f64,
) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let points = (Point::new(x1, y1), Point::new(x2, y2));
    let params = catenary_core::solve_catenary(points, arc_length)
        .map_err(|e| JsValue::from_str(&format!("Catenary solve failed: {}", e)))?;

    to_value(&params).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Height of the curve `a cosh((x - b) / a) + c` at `x`.
#[wasm_bindgen]
pub fn evaluate_catenary(a: f64, b: f64, c: f64, x: f64) -> f64 {
    catenary_core::evaluate_catenary(&CatenaryParameters::new(a, b, c), x)
}

/// Flattens points into `[x0, y0, x1, y1, ...]` for transfer to JS.
pub(crate) fn interleave(points: &[Point]) -> Vec<f64> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}
