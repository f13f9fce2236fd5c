//! The `catenary_core` crate fits a hanging-chain curve `y = a cosh((x - b) / a) + c`
//! through two points with a prescribed arc length between them.
//!
//! Key components:
//! - **Equations**: residuals of the point and arc-length constraints with an analytic Jacobian.
//! - **Linear**: 3×3 Gaussian elimination with partial pivoting.
//! - **Newton**: damped Newton-Raphson with a backtracking line search.
//! - **Solver**: validation, multi-seed search and verification (`solve_catenary`).
//! - **Reduced**: a single-equation fixed-point alternative for the same problem.
pub mod equations;
pub mod error;
pub mod linear;
pub mod newton;
pub mod reduced;
pub mod seeds;
pub mod settings;
pub mod solver;
pub mod traits;
pub mod types;

pub use error::SolveError;
pub use settings::SolverSettings;
pub use solver::{solve_catenary, solve_catenary_with, CatenarySolution};
pub use types::{evaluate_catenary, CatenaryParameters, Point};
