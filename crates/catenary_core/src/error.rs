use thiserror::Error;

/// Errors surfaced to callers of the solver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error("invalid arc length {arc_length}: must be positive and finite")]
    InvalidArcLength { arc_length: f64 },

    #[error("degenerate input at x = {x}: points must have distinct, finite coordinates")]
    DegenerateInput { x: f64 },

    #[error("arc length {arc_length} too short for given points (minimum {minimum})")]
    ArcLengthTooShort { arc_length: f64, minimum: f64 },

    #[error("invalid solver settings: {0}")]
    InvalidSettings(String),

    #[error("no solution found after {attempts} initial guesses")]
    NoSolutionFound { attempts: usize },
}

impl SolveError {
    /// True for inputs that can never be solved, regardless of seeding.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SolveError::InvalidArcLength { .. } | SolveError::DegenerateInput { .. }
        )
    }
}

/// Why a single Newton attempt was abandoned.
///
/// These never reach the caller directly; the solver moves on to the next
/// initial guess and only reports [`SolveError::NoSolutionFound`] once every
/// guess has failed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AttemptFailure {
    #[error("singular or ill-conditioned system at iteration {iteration}")]
    SingularSystem { iteration: usize },

    #[error("no convergence after {iterations} iterations (‖r‖ = {residual_norm})")]
    NoConvergence {
        iterations: usize,
        residual_norm: f64,
    },

    #[error("converged point failed verification (‖r‖ = {residual_norm})")]
    Unverified { residual_norm: f64 },
}
