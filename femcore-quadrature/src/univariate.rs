//! Quadrature rules for the one-dimensional domain `[-1, 1]`.

use crate::{gauss_points_for_strength, Rule};
use log::debug;
use std::f64::consts::PI;

/// Upper bound on Newton iterations per root.
const MAX_NEWTON_ITERATIONS: usize = 100;

/// Recurrence relation for Legendre polynomials.
///
/// Note: we use a formula for which derivatives are *not* defined at |x| == 1, so it is only
/// suitable for evaluation in the open interval (-1, 1).
#[derive(Debug, Default)]
struct LegendreRecurrence {
    n: usize,
    x: f64,
    // p_n(x)
    p_n: f64,
    // p_{n - 1}(x)
    p_n_minus_1: f64,
}

impl LegendreRecurrence {
    fn evaluate(n: usize, x: f64) -> Self {
        //  m P_m(x) = (2m - 1) * x P_{m - 1}(x) - (m - 1) P_{m - 2}(x)
        let mut p_n = 1.0;
        let mut p_n_minus_1 = 0.0;
        for m in 1..=n {
            let m = m as f64;
            let p_n_minus_2 = p_n_minus_1;
            p_n_minus_1 = p_n;
            p_n = ((2.0 * m - 1.0) * x * p_n_minus_1 - (m - 1.0) * p_n_minus_2) / m;
        }

        Self { n, x, p_n, p_n_minus_1 }
    }

    fn value(&self) -> f64 {
        self.p_n
    }

    fn derivative(&self) -> f64 {
        // dp_n/dx (x) = n * (x * p_n(x) - p_{n - 1}(x)) / (x^2 - 1)
        let n = self.n as f64;
        let x = self.x;
        n * (x * self.p_n - self.p_n_minus_1) / (x * x - 1.0)
    }
}

/// Finds the `i`-th largest root of the Legendre polynomial of degree `n` by Newton's method.
fn legendre_root(n: usize, i: usize) -> (f64, f64) {
    // Loosely based on the procedure used in
    // Numerical Recipes, The art of Scientific Computing, Third Edition (2007)
    let mut x = (PI * (i as f64 + 0.75) / (n as f64 + 0.5)).cos();
    for iteration in 1..=MAX_NEWTON_ITERATIONS {
        let p = LegendreRecurrence::evaluate(n, x);
        let dx = -p.value() / p.derivative();
        x += dx;
        if dx.abs() <= 1e-15 {
            debug!("Legendre root {i} of P_{n} converged after {iteration} Newton iterations");
            break;
        }
    }
    (x, LegendreRecurrence::evaluate(n, x).derivative())
}

/// Gauss quadrature for the reference interval [-1, 1].
///
/// Returns the [Gauss quadrature rule] with the given number of points, ordered by increasing
/// coordinate. Given `n` points, the rule integrates polynomials of order up to `2 n - 1` exactly.
///
/// # Panics
///
/// Panics if zero points are requested.
///
/// [Gauss quadrature rule]: https://en.wikipedia.org/wiki/Gaussian_quadrature
pub fn gauss(num_points: usize) -> Rule<1> {
    let n = num_points;
    assert!(n > 0, "number of points must be positive");

    // Only the m non-negative roots are computed, the rest follow by symmetry
    let m = (n + 1) / 2;
    let roots: Vec<(f64, f64)> = (0..m)
        .map(|i| {
            // Odd-degree Legendre polynomials vanish at the origin
            if n % 2 == 1 && i == m - 1 {
                (0.0, LegendreRecurrence::evaluate(n, 0.0).derivative())
            } else {
                legendre_root(n, i)
            }
        })
        .collect();

    let weight = |x: f64, dp: f64| 2.0 / ((1.0 - x * x) * dp * dp);

    let mut points = Vec::with_capacity(n);
    let mut weights = Vec::with_capacity(n);
    for &(x, dp) in &roots {
        // Keep the central root of odd rules at +0.0
        points.push([if x == 0.0 { 0.0 } else { -x }]);
        weights.push(weight(x, dp));
    }
    for &(x, dp) in roots[..n - m].iter().rev() {
        points.push([x]);
        weights.push(weight(x, dp));
    }

    assert_eq!(points.len(), n, "Internal error: incorrect number of points produced");
    (weights, points)
}

/// The Gauss rule with the fewest points that integrates polynomials of degree `strength`
/// exactly.
pub fn gauss_for_strength(strength: usize) -> Rule<1> {
    gauss(gauss_points_for_strength(strength))
}
