//! Plain value types shared by the solver and its callers.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line (chord) distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Parameters of the curve `y = a * cosh((x - b) / a) + c`.
///
/// A solved curve always has `a > 0`, so the curve opens upward and its
/// lowest point sits at `x = b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatenaryParameters {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl CatenaryParameters {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    pub(crate) fn from_vector(v: &Vector3<f64>) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    pub(crate) fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.a, self.b, self.c)
    }

    /// Height of the curve at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.a * ((x - self.b) / self.a).cosh() + self.c
    }

    /// Derivative dy/dx at `x`.
    pub fn slope(&self, x: f64) -> f64 {
        ((x - self.b) / self.a).sinh()
    }

    /// Signed arc length along the curve from `x1` to `x2`.
    pub fn arc_length_between(&self, x1: f64, x2: f64) -> f64 {
        self.a * (((x2 - self.b) / self.a).sinh() - ((x1 - self.b) / self.a).sinh())
    }

    /// The lowest point of the curve.
    pub fn vertex(&self) -> Point {
        Point::new(self.b, self.a + self.c)
    }

    /// Samples `count` points evenly spaced in x from `x_start` to `x_end`,
    /// both endpoints included.
    pub fn sample(&self, x_start: f64, x_end: f64, count: usize) -> Vec<Point> {
        match count {
            0 => Vec::new(),
            1 => vec![Point::new(x_start, self.evaluate(x_start))],
            _ => {
                let step = (x_end - x_start) / (count - 1) as f64;
                (0..count)
                    .map(|i| {
                        let x = if i + 1 == count {
                            x_end
                        } else {
                            x_start + step * i as f64
                        };
                        Point::new(x, self.evaluate(x))
                    })
                    .collect()
            }
        }
    }
}

/// Evaluates `a * cosh((x - b) / a) + c`.
pub fn evaluate_catenary(params: &CatenaryParameters, x: f64) -> f64 {
    params.evaluate(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_is_euclidean() {
        let p = Point::new(0.0, 0.0);
        let q = Point::new(3.0, 4.0);
        assert_relative_eq!(p.distance(&q), 5.0);
        assert_relative_eq!(q.distance(&p), 5.0);
    }

    #[test]
    fn evaluate_at_vertex_is_a_plus_c() {
        let params = CatenaryParameters::new(2.0, 1.5, -3.0);
        assert_relative_eq!(evaluate_catenary(&params, 1.5), -1.0);
        assert_eq!(params.vertex(), Point::new(1.5, -1.0));
        assert_relative_eq!(params.slope(1.5), 0.0);
    }

    #[test]
    fn evaluate_is_symmetric_about_b() {
        let params = CatenaryParameters::new(3.0, 2.0, 0.5);
        assert_relative_eq!(params.evaluate(0.0), params.evaluate(4.0), epsilon = 1e-12);
        assert_relative_eq!(params.slope(0.0), -params.slope(4.0), epsilon = 1e-12);
    }

    #[test]
    fn arc_length_matches_numeric_integration() {
        let params = CatenaryParameters::new(1.7, 0.3, -2.0);
        let (x1, x2) = (-1.0, 2.5);
        let n = 20_000;
        let h = (x2 - x1) / n as f64;
        let integral: f64 = (0..n)
            .map(|i| {
                let x = x1 + (i as f64 + 0.5) * h;
                (1.0 + params.slope(x).powi(2)).sqrt() * h
            })
            .sum();
        assert_relative_eq!(params.arc_length_between(x1, x2), integral, epsilon = 1e-6);
    }

    #[test]
    fn sample_includes_both_endpoints() {
        let params = CatenaryParameters::new(2.0, 5.0, -4.0);
        let samples = params.sample(0.0, 10.0, 11);
        assert_eq!(samples.len(), 11);
        assert_eq!(samples[0].x, 0.0);
        assert_eq!(samples[10].x, 10.0);
        assert_relative_eq!(samples[5].x, 5.0);
        assert_relative_eq!(samples[5].y, -2.0);
        for p in &samples {
            assert_relative_eq!(p.y, params.evaluate(p.x));
        }
    }

    #[test]
    fn sample_handles_tiny_counts() {
        let params = CatenaryParameters::new(1.0, 0.0, 0.0);
        assert!(params.sample(0.0, 1.0, 0).is_empty());
        let single = params.sample(0.0, 1.0, 1);
        assert_eq!(single, vec![Point::new(0.0, 1.0)]);
    }

    #[test]
    fn vector_conversion_preserves_order() {
        let params = CatenaryParameters::new(1.0, 2.0, 3.0);
        let v = params.to_vector();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(CatenaryParameters::from_vector(&v), params);
    }
}
