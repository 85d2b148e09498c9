//! Quadrature rules for finite element reference domains.
//!
//! Rules are returned as plain `(weights, points)` pairs of `f64` data so that the crate can be
//! used without the rest of `femcore`. The reference domains are
//!
//! - the interval `[-1, 1]`,
//! - the square `[-1, 1]^2` and the cube `[-1, 1]^3`,
//! - the triangle with vertices `(0, 0)`, `(1, 0)`, `(0, 1)`,
//! - the tetrahedron with vertices at the origin and the three unit axis points,
//! - the prism formed by the reference triangle times `[-1, 1]`,
//! - the pyramid with base `[-1, 1]^2` in the plane `z = 0` and apex `(0, 0, 1)`.
//!
//! The *strength* of a rule is the largest total polynomial degree it integrates exactly.

pub mod conical;
pub mod tensor;
pub mod univariate;

/// A D-dimensional point.
pub type Point<const D: usize> = [f64; D];

/// A two-dimensional point.
pub type Point2 = Point<2>;

/// A three-dimensional point.
pub type Point3 = Point<3>;

/// A D-dimensional rule, stored as `(weights, points)`.
pub type Rule<const D: usize> = (Vec<f64>, Vec<Point<D>>);

/// A one-dimensional quadrature rule.
pub type Rule1d = Rule<1>;

/// A two-dimensional quadrature rule.
pub type Rule2d = Rule<2>;

/// A three-dimensional rule.
pub type Rule3d = Rule<3>;

/// The number of Gauss points needed to integrate univariate polynomials of degree `strength`.
///
/// An `n`-point Gauss rule is exact for degree `2n - 1`.
pub fn gauss_points_for_strength(strength: usize) -> usize {
    strength / 2 + 1
}

/// Approximates the integral of `f` with the given rule.
pub fn integrate<const D: usize>(rule: &Rule<D>, f: impl Fn(&Point<D>) -> f64) -> f64 {
    let (weights, points) = rule;
    weights.iter().zip(points).map(|(w, x)| w * f(x)).sum()
}
