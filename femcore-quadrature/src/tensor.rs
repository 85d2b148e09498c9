//! 2D and 3D quadrature rules formed by tensor product formulations.
//!
//! For quadrilaterals, hexahedra and prisms, quadrature rules can be constructed as products
//! of lower-dimensional rules. This module provides rules constructed in this fashion.

use crate::conical::triangle;
use crate::univariate::{gauss, gauss_for_strength};
use crate::{Point, Rule, Rule1d};

/// Forms the product of a `D`-dimensional rule with a one-dimensional rule.
///
/// The coordinate contributed by `rule1d` is appended as the last coordinate `E = D + 1`
/// of the product points, and the first rule varies slowest.
///
/// # Panics
///
/// Panics if `E != D + 1`.
pub fn product<const D: usize, const E: usize>(rule: &Rule<D>, rule1d: &Rule1d) -> Rule<E> {
    assert_eq!(E, D + 1, "product dimension must be one larger than the base dimension");
    let (weights, points) = rule;
    let (weights1d, points1d) = rule1d;
    let size = weights.len() * weights1d.len();
    let mut product_weights = Vec::with_capacity(size);
    let mut product_points = Vec::with_capacity(size);

    for (&w, x) in weights.iter().zip(points) {
        for (&w1d, &[t]) in weights1d.iter().zip(points1d) {
            let mut point: Point<E> = [0.0; E];
            point[..D].copy_from_slice(x);
            point[D] = t;
            product_weights.push(w * w1d);
            product_points.push(point);
        }
    }

    (product_weights, product_points)
}

/// A Gauss quadrature rule for the reference quadrilateral.
///
/// The rule is constructed as a tensor product from 1D rules, with the provided number of
/// points per dimension.
pub fn quadrilateral_gauss(num_points_per_dim: usize) -> Rule<2> {
    let rule1d = gauss(num_points_per_dim);
    product(&rule1d, &rule1d)
}

/// A Gauss quadrature rule for the reference hexahedron.
///
/// The rule is constructed as a tensor product from 1D rules, with the provided number of
/// points per dimension.
pub fn hexahedron_gauss(num_points_per_dim: usize) -> Rule<3> {
    let rule1d = gauss(num_points_per_dim);
    let rule2d: Rule<2> = product(&rule1d, &rule1d);
    product(&rule2d, &rule1d)
}

/// A quadrature rule for the reference prism of the given strength.
///
/// The rule is the product of a triangle rule and a Gauss rule along the prism axis, both of
/// the requested strength.
pub fn prism(strength: usize) -> Rule<3> {
    product(&triangle(strength), &gauss_for_strength(strength))
}
