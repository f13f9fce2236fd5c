//! Configurable solver handle for the front end.

use anyhow::{anyhow, Context, Result};
use catenary_core::{solve_catenary_with, CatenarySolution, Point, SolverSettings};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::interleave;

#[wasm_bindgen]
pub struct WasmCatenarySolver {
    settings: SolverSettings,
}

impl WasmCatenarySolver {
    fn solve_points(&self, p: Point, q: Point, arc_length: f64) -> Result<CatenarySolution> {
        solve_catenary_with((p, q), arc_length, &self.settings)
            .context("Catenary solve failed")
    }

    fn sample_points(
        &self,
        p: Point,
        q: Point,
        arc_length: f64,
        count: usize,
    ) -> Result<Vec<f64>> {
        let solution = self.solve_points(p, q, arc_length)?;
        let (start, end) = if p.x <= q.x { (p.x, q.x) } else { (q.x, p.x) };
        Ok(interleave(&solution.params.sample(start, end, count)))
    }
}

#[wasm_bindgen]
impl WasmCatenarySolver {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmCatenarySolver {
        console_error_panic_hook::set_once();
        WasmCatenarySolver {
            settings: SolverSettings::default(),
        }
    }

    /// Builds a solver from a (possibly partial) settings object; missing
    /// fields keep their defaults.
    pub fn with_settings(settings: JsValue) -> Result<WasmCatenarySolver, JsValue> {
        console_error_panic_hook::set_once();
        let settings: SolverSettings = from_value(settings)
            .map_err(|e| anyhow!("{}", e))
            .and_then(|s: SolverSettings| {
                s.validate().context("Rejected solver settings")?;
                Ok(s)
            })
            .map_err(|e| JsValue::from_str(&format!("{:#}", e)))?;
        Ok(WasmCatenarySolver { settings })
    }

    pub fn get_settings(&self) -> Result<JsValue, JsValue> {
        to_value(&self.settings)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    pub fn set_tolerance(&mut self, tolerance: f64) {
        self.settings.tolerance = tolerance;
    }

    pub fn set_acceptance_tolerance(&mut self, tolerance: f64) {
        self.settings.acceptance_tolerance = tolerance;
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) {
        self.settings.max_iterations = max_iterations as usize;
    }

    pub fn set_max_halvings(&mut self, max_halvings: u32) {
        self.settings.max_halvings = max_halvings as usize;
    }

    /// Returns the serialized solution with its diagnostics.
    pub fn solve(
        &self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        arc_length: f64,
    ) -> Result<JsValue, JsValue> {
        let solution = self
            .solve_points(Point::new(x1, y1), Point::new(x2, y2), arc_length)
            .map_err(|e| JsValue::from_str(&format!("{:#}", e)))?;
        to_value(&solution).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Solves and samples `count` points between the endpoints, returned as
    /// interleaved `x, y` pairs ready for plotting.
    pub fn sample(
        &self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        arc_length: f64,
        count: u32,
    ) -> Result<Vec<f64>, JsValue> {
        let (p, q) = (Point::new(x1, y1), Point::new(x2, y2));
        self.sample_points(p, q, arc_length, count as usize)
            .map_err(|e| JsValue::from_str(&format!("{:#}", e)))
    }
}

impl Default for WasmCatenarySolver {
    fn default() -> Self {
        Self::new()
    }
}
