//! The three governing equations of a catenary through two points and
//! their analytic Jacobian.
//!
//! Unknowns are ordered `[a, b, c]`. With `u1 = (x1 - b) / a` and
//! `u2 = (x2 - b) / a` the residuals are
//!
//! ```text
//! r1 = a cosh(u1) + c - y1
//! r2 = a cosh(u2) + c - y2
//! r3 = a (sinh(u2) - sinh(u1)) - s
//! ```

use nalgebra::{Matrix3, Vector3};

use crate::traits::NonlinearSystem;
use crate::types::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatenarySystem {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub arc_length: f64,
}

impl CatenarySystem {
    /// Builds the system with the endpoints ordered by ascending x.
    pub fn new(p: Point, q: Point, arc_length: f64) -> Self {
        let (left, right) = if p.x <= q.x { (p, q) } else { (q, p) };
        Self {
            x1: left.x,
            y1: left.y,
            x2: right.x,
            y2: right.y,
            arc_length,
        }
    }

    pub fn left(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn right(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    pub fn span(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn rise(&self) -> f64 {
        self.y2 - self.y1
    }

    pub fn midpoint_x(&self) -> f64 {
        0.5 * (self.x1 + self.x2)
    }

    pub fn chord_length(&self) -> f64 {
        self.left().distance(&self.right())
    }

    fn arguments(&self, a: f64, b: f64) -> (f64, f64) {
        ((self.x1 - b) / a, (self.x2 - b) / a)
    }
}

fn in_domain(a: f64) -> bool {
    a.is_finite() && a > 0.0
}

impl NonlinearSystem for CatenarySystem {
    fn residual(&self, x: &Vector3<f64>) -> Vector3<f64> {
        let (a, b, c) = (x[0], x[1], x[2]);
        if !in_domain(a) {
            return Vector3::repeat(f64::INFINITY);
        }
        let (u1, u2) = self.arguments(a, b);
        Vector3::new(
            a * u1.cosh() + c - self.y1,
            a * u2.cosh() + c - self.y2,
            a * (u2.sinh() - u1.sinh()) - self.arc_length,
        )
    }

    fn jacobian(&self, x: &Vector3<f64>) -> Matrix3<f64> {
        let (a, b) = (x[0], x[1]);
        if !in_domain(a) {
            return Matrix3::zeros();
        }
        let (u1, u2) = self.arguments(a, b);
        let (c1, s1) = (u1.cosh(), u1.sinh());
        let (c2, s2) = (u2.cosh(), u2.sinh());

        #[rustfmt::skip]
        let jacobian = Matrix3::new(
            c1 - u1 * s1,                        -s1,     1.0,
            c2 - u2 * s2,                        -s2,     1.0,
            s2 - s1 - (u2 * c2 - u1 * c1),   c1 - c2,     0.0,
        );
        jacobian
    }

    fn is_feasible(&self, x: &Vector3<f64>) -> bool {
        in_domain(x[0])
    }
}
