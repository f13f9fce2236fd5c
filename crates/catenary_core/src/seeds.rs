//! Heuristic initial guesses for the Newton solve.

use nalgebra::Vector3;

use crate::equations::CatenarySystem;
use crate::settings::{SolverSettings, SEED_SCALE_FACTORS};

/// Relative slack of the shape equation, `sqrt(s^2 - v^2) / h - 1`, computed
/// without cancellation so it stays accurate as the chain becomes taut.
pub fn shape_excess(system: &CatenarySystem) -> f64 {
    let s = system.arc_length;
    let v = system.rise();
    let h = system.span();
    let chord = system.chord_length();
    (s - chord) * (s + chord) / (h * ((s * s - v * v).sqrt() + h))
}

/// Approximate root `z > 0` of `sinh(z) / z = 1 + excess`.
///
/// Uses the series expansion for small slack and the asymptotic form for
/// large slack. Returns NaN unless `excess > 0`.
pub fn approximate_shape_root(excess: f64) -> f64 {
    if !(excess > 0.0) {
        return f64::NAN;
    }
    if excess < 2.0 {
        (6.0 * excess).sqrt()
    } else {
        let log_term = (2.0 * (1.0 + excess)).ln();
        log_term + log_term.ln()
    }
}

/// Closed-form estimate of `a` from the span, rise and arc length, falling
/// back to `s / 4` when the estimate is unusable.
pub fn estimate_a(system: &CatenarySystem) -> f64 {
    let z = approximate_shape_root(shape_excess(system));
    let a = system.span() / (2.0 * z);
    if a.is_finite() && a > 0.0 {
        a
    } else {
        system.arc_length / 4.0
    }
}

/// Matches `c` to both endpoints in the least-squares sense for a given `a` and `b`.
fn fit_c(system: &CatenarySystem, a: f64, b: f64) -> f64 {
    let c1 = system.y1 - a * ((system.x1 - b) / a).cosh();
    let c2 = system.y2 - a * ((system.x2 - b) / a).cosh();
    0.5 * (c1 + c2)
}

/// Ordered list of `[a, b, c]` starting points.
///
/// The symmetric guess comes first, followed by every combination of the
/// scale factors in [`SEED_SCALE_FACTORS`] with a horizontal shift of `b` by
/// zero, minus and plus `seed_offset_fraction` of the span. The last seed
/// places `b` at its closed-form value `mid - a atanh(v / s)`, which lies far
/// outside the span for nearly taut chains between points at different
/// heights. Repeats of an earlier seed are skipped.
pub fn generate_seeds(system: &CatenarySystem, settings: &SolverSettings) -> Vec<Vector3<f64>> {
    let a0 = estimate_a(system);
    let mid = system.midpoint_x();
    let offset = settings.seed_offset_fraction * system.span();

    let mut seeds: Vec<Vector3<f64>> = Vec::with_capacity(2 + 3 * SEED_SCALE_FACTORS.len());
    let mut push = |a: f64, b: f64| {
        let seed = Vector3::new(a, b, fit_c(system, a, b));
        if !seeds.contains(&seed) {
            seeds.push(seed);
        }
    };

    push(a0, mid);
    for factor in SEED_SCALE_FACTORS {
        let a = a0 * factor;
        for shift in [0.0, -offset, offset] {
            push(a, mid + shift);
        }
    }

    let vertex_b = mid - a0 * (system.rise() / system.arc_length).atanh();
    if vertex_b.is_finite() {
        push(a0, vertex_b);
    }
    seeds
}
