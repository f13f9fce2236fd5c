//! Top-level catenary solve: input validation, multi-seed Newton search and
//! verification of the result.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::equations::CatenarySystem;
use crate::error::{AttemptFailure, SolveError};
use crate::newton::newton_raphson;
use crate::seeds::generate_seeds;
use crate::settings::SolverSettings;
use crate::traits::NonlinearSystem;
use crate::types::{CatenaryParameters, Point};

/// A verified solution together with how it was found.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatenarySolution {
    pub params: CatenaryParameters,
    /// Residual norm re-evaluated at `params`.
    pub residual_norm: f64,
    pub iterations: usize,
    /// Index of the initial guess that produced the solution.
    pub seed_index: usize,
    /// Number of initial guesses tried, including the successful one.
    pub attempts: usize,
}

/// Finds `(a, b, c)` such that `y = a cosh((x - b) / a) + c` passes through
/// both points with the given arc length between them.
///
/// Points may be given in either order.
pub fn solve_catenary(
    points: (Point, Point),
    arc_length: f64,
) -> Result<CatenaryParameters, SolveError> {
    solve_catenary_with(points, arc_length, &SolverSettings::default()).map(|s| s.params)
}

/// Same as [`solve_catenary`] with explicit settings and diagnostics.
pub fn solve_catenary_with(
    points: (Point, Point),
    arc_length: f64,
    settings: &SolverSettings,
) -> Result<CatenarySolution, SolveError> {
    settings.validate()?;
    let system = validate_inputs(points, arc_length)?;

    let seeds = generate_seeds(&system, settings);
    for (index, seed) in seeds.iter().enumerate() {
        match attempt(&system, *seed, settings) {
            Ok((params, residual_norm, iterations)) => {
                debug!(
                    "seed {index} accepted after {iterations} iterations (‖r‖ = {residual_norm:e})"
                );
                return Ok(CatenarySolution {
                    params,
                    residual_norm,
                    iterations,
                    seed_index: index,
                    attempts: index + 1,
                });
            }
            Err(failure) => debug!("seed {index} ({seed:?}) abandoned: {failure}"),
        }
    }

    warn!(
        "no catenary through {:?} and {:?} with arc length {arc_length} after {} seeds",
        system.left(),
        system.right(),
        seeds.len()
    );
    Err(SolveError::NoSolutionFound {
        attempts: seeds.len(),
    })
}

/// Runs one seed and re-verifies the converged point.
fn attempt(
    system: &CatenarySystem,
    seed: nalgebra::Vector3<f64>,
    settings: &SolverSettings,
) -> Result<(CatenaryParameters, f64, usize), AttemptFailure> {
    let report = newton_raphson(system, seed, settings)?;
    let residual_norm = verify(system, &report.params, settings)?;
    Ok((
        CatenaryParameters::from_vector(&report.params),
        residual_norm,
        report.iterations,
    ))
}

/// Accepts a candidate only if it is feasible and its residual re-evaluates
/// under the acceptance tolerance.
pub(crate) fn verify(
    system: &CatenarySystem,
    params: &nalgebra::Vector3<f64>,
    settings: &SolverSettings,
) -> Result<f64, AttemptFailure> {
    let residual_norm = system.residual(params).norm();
    let finite = params.iter().all(|v| v.is_finite());
    if finite && system.is_feasible(params) && residual_norm < settings.acceptance_tolerance {
        Ok(residual_norm)
    } else {
        Err(AttemptFailure::Unverified { residual_norm })
    }
}

/// Checks the inputs before any iteration and orders the points by x.
pub(crate) fn validate_inputs(
    points: (Point, Point),
    arc_length: f64,
) -> Result<CatenarySystem, SolveError> {
    let (p, q) = points;
    if !(arc_length.is_finite() && arc_length > 0.0) {
        return Err(SolveError::InvalidArcLength { arc_length });
    }
    if !p.is_finite() {
        return Err(SolveError::DegenerateInput { x: p.x });
    }
    if !q.is_finite() {
        return Err(SolveError::DegenerateInput { x: q.x });
    }
    if p.x == q.x {
        return Err(SolveError::DegenerateInput { x: p.x });
    }
    let minimum = p.distance(&q);
    if arc_length < minimum {
        return Err(SolveError::ArcLengthTooShort {
            arc_length,
            minimum,
        });
    }
    Ok(CatenarySystem::new(p, q, arc_length))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector3;

    fn assert_err_contains<T: std::fmt::Debug>(result: Result<T, SolveError>, needle: &str) {
        let err = result.expect_err("expected error");
        let message = format!("{err}");
        assert!(
            message.contains(needle),
            "expected error to contain \"{needle}\", got \"{message}\""
        );
    }

    #[test]
    fn validate_checks_arc_length_first() {
        let p = Point::new(1.0, 0.0);
        assert_eq!(
            validate_inputs((p, p), 0.0),
            Err(SolveError::InvalidArcLength { arc_length: 0.0 })
        );
        assert!(matches!(
            validate_inputs((p, p), f64::NAN),
            Err(SolveError::InvalidArcLength { .. })
        ));
    }

    #[test]
    fn validate_rejects_non_finite_points() {
        let p = Point::new(0.0, 0.0);
        let q = Point::new(f64::INFINITY, 1.0);
        assert!(matches!(
            validate_inputs((p, q), 5.0),
            Err(SolveError::DegenerateInput { .. })
        ));
    }

    #[test]
    fn validate_accepts_exact_chord_length() {
        let system = validate_inputs((Point::new(3.0, 4.0), Point::new(0.0, 0.0)), 5.0)
            .expect("chord length is allowed");
        assert_eq!(system.x1, 0.0);
        assert_eq!(system.x2, 3.0);
    }

    #[test]
    fn invalid_settings_are_reported() {
        let settings = SolverSettings {
            max_iterations: 0,
            ..SolverSettings::default()
        };
        assert_err_contains(
            solve_catenary_with((Point::new(0.0, 0.0), Point::new(1.0, 0.0)), 2.0, &settings),
            "max_iterations",
        );
    }

    #[test]
    fn solution_reports_diagnostics() {
        let solution = solve_catenary_with(
            (Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
            12.0,
            &SolverSettings::default(),
        )
        .expect("symmetric sag should solve");
        assert_eq!(solution.seed_index, 0);
        assert_eq!(solution.attempts, 1);
        assert!(solution.iterations > 0);
        assert!(solution.residual_norm < 1e-10);
    }

    #[test]
    fn verify_rejects_loose_candidates() {
        let system = CatenarySystem::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 12.0);
        let settings = SolverSettings::default();
        let err = verify(&system, &Vector3::new(4.0, 5.0, -4.0), &settings)
            .expect_err("rough guess is not a solution");
        assert!(matches!(err, AttemptFailure::Unverified { .. }));
        let err = verify(&system, &Vector3::new(-4.0, 5.0, -4.0), &settings)
            .expect_err("negative a is infeasible");
        assert!(matches!(err, AttemptFailure::Unverified { .. }));
    }

    #[test]
    fn loose_iteration_tolerance_is_caught_by_verification() {
        // Convergence is declared almost immediately, but the acceptance
        // check still refuses anything that does not satisfy the equations.
        let settings = SolverSettings {
            tolerance: 10.0,
            acceptance_tolerance: 1e-6,
            ..SolverSettings::default()
        };
        let points = (Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let result = solve_catenary_with(points, 12.0, &settings);
        match result {
            Ok(solution) => {
                assert!(solution.residual_norm < 1e-6);
                let p = solution.params;
                assert_abs_diff_eq!(p.evaluate(0.0), 0.0, epsilon = 1e-4);
                assert_abs_diff_eq!(p.evaluate(10.0), 0.0, epsilon = 1e-4);
            }
            Err(err) => assert!(matches!(err, SolveError::NoSolutionFound { .. })),
        }
    }

    #[test]
    fn forced_line_search_steps_never_leak_unverified_results() {
        // A nearly vertical pair with little slack: with only three halvings
        // the first seed needs a forced, non-improving step along the way.
        let settings = SolverSettings {
            max_halvings: 3,
            ..SolverSettings::default()
        };
        let points = (Point::new(0.0, 0.0), Point::new(1.0, 9.0));
        let s = 9.508;
        let system = CatenarySystem::new(points.0, points.1, s);

        let seeds = generate_seeds(&system, &settings);
        let report = newton_raphson(&system, seeds[0], &settings).expect("first seed converges");
        assert!(report.forced_steps >= 1);

        let solution = solve_catenary_with(points, s, &settings).expect("should solve");
        let residual = system.residual(&solution.params.to_vector()).norm();
        assert!(residual < settings.acceptance_tolerance);
        assert!(solution.params.a > 0.0);
    }

    #[test]
    fn forced_steps_under_starved_budget_end_in_clean_failure() {
        let settings = SolverSettings {
            max_halvings: 1,
            max_iterations: 3,
            ..SolverSettings::default()
        };
        let points = (Point::new(0.0, 0.0), Point::new(1.0, 9.0));
        match solve_catenary_with(points, 9.508, &settings) {
            Ok(solution) => {
                let system = CatenarySystem::new(points.0, points.1, 9.508);
                let residual = system.residual(&solution.params.to_vector()).norm();
                assert!(residual < settings.acceptance_tolerance);
            }
            Err(err) => {
                assert!(matches!(err, SolveError::NoSolutionFound { attempts } if attempts > 0))
            }
        }
    }
}
