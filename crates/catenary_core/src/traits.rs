use nalgebra::{Matrix3, Vector3};

/// A square system of three nonlinear equations in three unknowns.
pub trait NonlinearSystem {
    /// Evaluates the residual vector at `x`.
    /// Points outside the domain yield non-finite residuals.
    fn residual(&self, x: &Vector3<f64>) -> Vector3<f64>;

    /// Evaluates the Jacobian of the residual with respect to `x`.
    fn jacobian(&self, x: &Vector3<f64>) -> Matrix3<f64>;

    /// Whether `x` lies in the domain where the equations are defined.
    fn is_feasible(&self, _x: &Vector3<f64>) -> bool {
        true
    }
}
