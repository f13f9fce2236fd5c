//! Dense 3×3 linear solve by Gaussian elimination with partial pivoting.

use nalgebra::{Matrix3, Vector3};

/// Solves `a * x = rhs`.
///
/// Returns `None` when a pivot is numerically zero, i.e. not finite or no
/// larger than `f64::EPSILON` times the largest entry of `a`.
pub fn solve_linear_3x3(a: &Matrix3<f64>, rhs: &Vector3<f64>) -> Option<Vector3<f64>> {
    let scale = a.amax();
    if !scale.is_finite() || scale == 0.0 {
        return None;
    }
    let threshold = f64::EPSILON * scale;

    let mut m = *a;
    let mut f = *rhs;

    // Forward elimination
    for k in 0..3 {
        let mut pivot_row = k;
        let mut max_val = m[(k, k)].abs();
        for i in (k + 1)..3 {
            let val = m[(i, k)].abs();
            if val > max_val {
                max_val = val;
                pivot_row = i;
            }
        }
        if !max_val.is_finite() || max_val <= threshold {
            return None;
        }
        if pivot_row != k {
            m.swap_rows(pivot_row, k);
            f.swap_rows(pivot_row, k);
        }

        let pivot = m[(k, k)];
        for i in (k + 1)..3 {
            let factor = m[(i, k)] / pivot;
            if factor == 0.0 {
                continue;
            }
            for j in k..3 {
                m[(i, j)] -= factor * m[(k, j)];
            }
            f[i] -= factor * f[k];
        }
    }

    // Back substitution
    let mut x = Vector3::zeros();
    for i in (0..3).rev() {
        let mut accum = f[i];
        for j in (i + 1)..3 {
            accum -= m[(i, j)] * x[j];
        }
        x[i] = accum / m[(i, i)];
    }

    if x.iter().all(|v| v.is_finite()) {
        Some(x)
    } else {
        None
    }
}
