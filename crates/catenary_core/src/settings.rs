use serde::{Deserialize, Serialize};

use crate::error::SolveError;

/// Multipliers applied to the estimated `a` when generating initial guesses.
pub const SEED_SCALE_FACTORS: [f64; 5] = [0.5, 1.0, 1.5, 2.0, 3.0];

/// Tunables for the damped Newton solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Residual norm below which an iteration counts as converged.
    ///
    /// The norm is absolute, in the units of the input coordinates. Rounding
    /// in `a cosh(u) + c` grows with the magnitude of `a` and `c`, so for
    /// coordinates in the thousands this should be raised (around `1e-8`)
    /// or every seed can stall just above it.
    pub tolerance: f64,
    /// Residual norm a converged point must re-verify under before it is returned.
    pub acceptance_tolerance: f64,
    pub max_iterations: usize,
    /// Step halvings tried per line search before a step is forced through.
    pub max_halvings: usize,
    /// Horizontal offset of `b` between seeds, as a fraction of the x-span.
    pub seed_offset_fraction: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            acceptance_tolerance: 1e-6,
            max_iterations: 100,
            max_halvings: 10,
            seed_offset_fraction: 0.1,
        }
    }
}

impl SolverSettings {
    pub fn validate(&self) -> Result<(), SolveError> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(SolveError::InvalidSettings(
                "tolerance must be positive.".to_string(),
            ));
        }
        if !(self.acceptance_tolerance.is_finite() && self.acceptance_tolerance > 0.0) {
            return Err(SolveError::InvalidSettings(
                "acceptance_tolerance must be positive.".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(SolveError::InvalidSettings(
                "max_iterations must be greater than zero.".to_string(),
            ));
        }
        if !(self.seed_offset_fraction.is_finite() && self.seed_offset_fraction >= 0.0) {
            return Err(SolveError::InvalidSettings(
                "seed_offset_fraction must be non-negative.".to_string(),
            ));
        }
        Ok(())
    }
}
