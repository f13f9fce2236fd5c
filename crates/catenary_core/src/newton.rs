//! Damped Newton-Raphson iteration with a backtracking line search.

use log::{debug, trace};
use nalgebra::Vector3;

use crate::error::AttemptFailure;
use crate::linear::solve_linear_3x3;
use crate::settings::SolverSettings;
use crate::traits::NonlinearSystem;

/// Outcome of a converged Newton attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonReport {
    pub params: Vector3<f64>,
    pub residual_norm: f64,
    pub iterations: usize,
    /// Line searches that ran out of halvings and accepted a non-improving step.
    pub forced_steps: usize,
}

/// Runs Newton-Raphson from `seed` until the residual norm drops below
/// `settings.tolerance`.
///
/// Each step is damped by a backtracking line search: the step size starts
/// at 1 and is halved until the update stays feasible and strictly lowers
/// the residual norm. If `settings.max_halvings` attempts all fail, the last
/// (smallest) candidate is taken anyway, so successive iterates are not
/// guaranteed to be monotone in the residual.
pub fn newton_raphson<S: NonlinearSystem>(
    system: &S,
    seed: Vector3<f64>,
    settings: &SolverSettings,
) -> Result<NewtonReport, AttemptFailure> {
    let mut state = seed;
    let mut residual = system.residual(&state);
    let mut residual_norm = residual.norm();
    let mut iterations = 0usize;
    let mut forced_steps = 0usize;
    let attempts = settings.max_halvings.max(1);

    loop {
        trace!("newton iter {iterations}: x = {state:?}, ‖r‖ = {residual_norm:e}");

        if residual_norm < settings.tolerance {
            debug!("newton converged in {iterations} iterations (‖r‖ = {residual_norm:e})");
            return Ok(NewtonReport {
                params: state,
                residual_norm,
                iterations,
                forced_steps,
            });
        }

        if iterations >= settings.max_iterations {
            debug!(
                "newton failed to converge in {} iterations (‖r‖ = {residual_norm:e})",
                settings.max_iterations
            );
            return Err(AttemptFailure::NoConvergence {
                iterations,
                residual_norm,
            });
        }

        let jacobian = system.jacobian(&state);
        let delta = solve_linear_3x3(&jacobian, &(-residual)).ok_or_else(|| {
            debug!("singular jacobian at iteration {iterations}, x = {state:?}");
            AttemptFailure::SingularSystem {
                iteration: iterations,
            }
        })?;

        let mut step = 1.0;
        let mut accepted = None;
        let mut candidate = state;
        let mut candidate_residual = residual;
        for _ in 0..attempts {
            candidate = state + delta * step;
            candidate_residual = system.residual(&candidate);
            let candidate_norm = candidate_residual.norm();
            if system.is_feasible(&candidate) && candidate_norm < residual_norm {
                accepted = Some(candidate_norm);
                break;
            }
            step *= 0.5;
        }

        state = candidate;
        residual = candidate_residual;
        residual_norm = match accepted {
            Some(norm) => norm,
            None => {
                forced_steps += 1;
                trace!("line search exhausted, forcing step of size {}", step * 2.0);
                residual.norm()
            }
        };
        iterations += 1;
    }
}
