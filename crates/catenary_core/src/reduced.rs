//! Single-equation solve for the catenary shape.
//!
//! Eliminating `b` and `c` from the three governing equations leaves
//!
//! ```text
//! sinh(z) / z = sqrt(s^2 - v^2) / h,    z = h / (2a)
//! ```
//!
//! for span `h` and rise `v`. Once `z` is known, `a` follows directly and
//! `b = mid - a atanh(v / s)`, `c = y1 - a cosh((x1 - b) / a)` are closed
//! form. This is faster than the full Newton solve but has no fallback when
//! the iteration stalls, so [`crate::solver::solve_catenary`] remains the
//! primary entry point.

use log::debug;

use crate::error::SolveError;
use crate::seeds::{approximate_shape_root, shape_excess};
use crate::settings::SolverSettings;
use crate::solver::{validate_inputs, verify};
use crate::types::{CatenaryParameters, Point};

const MAX_FIXED_POINT_ITERATIONS: usize = 200;

/// Below this `z` the series map contracts faster than the `asinh` map.
const SERIES_MAP_LIMIT: f64 = 2.0;

/// `(sinh(z) - z) / z^3`, accurate for small `z`.
fn sinh_excess_ratio(z: f64) -> f64 {
    if z < 1.0 {
        let z2 = z * z;
        let mut term = 1.0 / 6.0;
        let mut total = term;
        for k in 1..9 {
            let k = k as f64;
            term *= z2 / ((2.0 * k + 2.0) * (2.0 * k + 3.0));
            total += term;
        }
        total
    } else {
        (z.sinh() - z) / (z * z * z)
    }
}

/// Solves `sinh(z) / z = 1 + excess` for `z > 0` by fixed-point iteration.
///
/// Two maps share the same fixed point: `z <- sqrt(excess / q(z))` with
/// `q(z) = (sinh(z) - z) / z^3` for small `z`, and `z <- asinh((1 + excess) z)`
/// for large `z`. Each contracts strongly in its own range.
pub fn solve_shape_equation(excess: f64) -> Option<f64> {
    if !(excess.is_finite() && excess > 0.0) {
        return None;
    }
    let ratio = 1.0 + excess;
    let mut z = approximate_shape_root(excess);

    for _ in 0..MAX_FIXED_POINT_ITERATIONS {
        let next = if z < SERIES_MAP_LIMIT {
            (excess / sinh_excess_ratio(z)).sqrt()
        } else {
            (ratio * z).asinh()
        };
        if !next.is_finite() || next <= 0.0 {
            return None;
        }
        if (next - z).abs() <= 4.0 * f64::EPSILON * z {
            return Some(next);
        }
        z = next;
    }
    None
}

/// Alternative to [`crate::solver::solve_catenary_with`] that solves the
/// reduced shape equation instead of the full system.
///
/// Applies the same input validation and the same acceptance check.
pub fn solve_reduced(
    points: (Point, Point),
    arc_length: f64,
    settings: &SolverSettings,
) -> Result<CatenaryParameters, SolveError> {
    settings.validate()?;
    let system = validate_inputs(points, arc_length)?;

    let excess = shape_excess(&system);
    let z = solve_shape_equation(excess).ok_or_else(|| {
        debug!("shape equation has no usable root (excess {excess:e})");
        SolveError::NoSolutionFound { attempts: 1 }
    })?;

    let h = system.span();
    let a = h / (2.0 * z);
    let b = system.midpoint_x() - a * (system.rise() / system.arc_length).atanh();
    let c = system.y1 - a * ((system.x1 - b) / a).cosh();
    let params = CatenaryParameters::new(a, b, c);

    verify(&system, &params.to_vector(), settings).map_err(|failure| {
        debug!("reduced solve rejected: {failure}");
        SolveError::NoSolutionFound { attempts: 1 }
    })?;
    Ok(params)
}
