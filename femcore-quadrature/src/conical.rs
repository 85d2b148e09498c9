//! Conical product rules for simplices and pyramids.
//!
//! A conical product rule maps the tensor-product Gauss rule on a square or cube onto a
//! collapsed shape (the Duffy transformation) and folds the Jacobian of the collapse into the
//! weights. The collapse raises the polynomial degree of the integrand along the collapsed
//! directions, so those directions receive correspondingly stronger Gauss rules. The resulting
//! rules integrate all polynomials of total degree up to the requested strength exactly. They
//! use more points than optimal symmetric rules, but exist for any strength and have strictly
//! positive weights with all points in the interior of the shape.

use crate::univariate::gauss_for_strength;
use crate::Rule;

/// Maps a coordinate from `[-1, 1]` to `[0, 1]`.
fn to_unit_interval(xi: f64) -> f64 {
    0.5 * (1.0 + xi)
}

/// A quadrature rule of the given strength for the reference triangle with vertices
/// `(0, 0)`, `(1, 0)` and `(0, 1)`.
pub fn triangle(strength: usize) -> Rule<2> {
    let (weights_a, points_a) = gauss_for_strength(strength);
    let (weights_b, points_b) = gauss_for_strength(strength + 1);

    let mut weights = Vec::with_capacity(weights_a.len() * weights_b.len());
    let mut points = Vec::with_capacity(weights.capacity());
    for (&w_a, &[a]) in weights_a.iter().zip(&points_a) {
        for (&w_b, &[b]) in weights_b.iter().zip(&points_b) {
            let s = to_unit_interval(a);
            let t = to_unit_interval(b);
            points.push([s * (1.0 - t), t]);
            weights.push(w_a * w_b * (1.0 - t) / 4.0);
        }
    }
    (weights, points)
}

/// A quadrature rule of the given strength for the reference tetrahedron with vertices
/// `(0, 0, 0)`, `(1, 0, 0)`, `(0, 1, 0)` and `(0, 0, 1)`.
pub fn tetrahedron(strength: usize) -> Rule<3> {
    let (weights_a, points_a) = gauss_for_strength(strength);
    let (weights_b, points_b) = gauss_for_strength(strength + 1);
    let (weights_c, points_c) = gauss_for_strength(strength + 2);

    let size = weights_a.len() * weights_b.len() * weights_c.len();
    let mut weights = Vec::with_capacity(size);
    let mut points = Vec::with_capacity(size);
    for (&w_a, &[a]) in weights_a.iter().zip(&points_a) {
        for (&w_b, &[b]) in weights_b.iter().zip(&points_b) {
            for (&w_c, &[c]) in weights_c.iter().zip(&points_c) {
                let r = to_unit_interval(a);
                let s = to_unit_interval(b);
                let t = to_unit_interval(c);
                points.push([r * (1.0 - s) * (1.0 - t), s * (1.0 - t), t]);
                weights.push(w_a * w_b * w_c * (1.0 - s) * (1.0 - t) * (1.0 - t) / 8.0);
            }
        }
    }
    (weights, points)
}

/// A quadrature rule of the given strength for the reference pyramid with base `[-1, 1]^2`
/// in the plane `z = 0` and apex `(0, 0, 1)`.
pub fn pyramid(strength: usize) -> Rule<3> {
    let (weights_a, points_a) = gauss_for_strength(strength);
    let (weights_c, points_c) = gauss_for_strength(strength + 2);

    let size = weights_a.len() * weights_a.len() * weights_c.len();
    let mut weights = Vec::with_capacity(size);
    let mut points = Vec::with_capacity(size);
    for (&w_x, &[x]) in weights_a.iter().zip(&points_a) {
        for (&w_y, &[y]) in weights_a.iter().zip(&points_a) {
            for (&w_c, &[c]) in weights_c.iter().zip(&points_c) {
                let z = to_unit_interval(c);
                points.push([x * (1.0 - z), y * (1.0 - z), z]);
                weights.push(w_x * w_y * w_c * (1.0 - z) * (1.0 - z) / 2.0);
            }
        }
    }
    (weights, points)
}
