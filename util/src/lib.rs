//! Helpers shared by the test suites of the workspace.

/// Poor man's approx assertion for matrices
#[macro_export]
macro_rules! assert_approx_matrix_eq {
    ($x:expr, $y:expr, abstol = $tol:expr) => {{
        let diff = $x - $y;

        let max_absdiff = diff.abs().max();
        let approx_eq = max_absdiff <= $tol;

        if !approx_eq {
            println!("abstol: {:e}", $tol);
            println!("left: {}", $x);
            println!("right: {}", $y);
            println!("diff: {:e}", diff);
        }
        assert!(approx_eq);
    }};
}

#[macro_export]
macro_rules! assert_panics {
    ($e:expr) => {{
        use std::panic::catch_unwind;
        use std::stringify;
        let expr_string = stringify!($e);
        let result = catch_unwind(|| $e);
        if result.is_ok() {
            panic!("assert_panics!({}) failed.", expr_string);
        }
    }};
}

/// Central finite difference approximation of `f'(x)`.
pub fn central_difference(f: impl Fn(f64) -> f64, x: f64, h: f64) -> f64 {
    (f(x + h) - f(x - h)) / (2.0 * h)
}

/// `n!` as a floating-point number. Exact for `n <= 22`.
pub fn factorial(n: i32) -> f64 {
    (1..=n).map(f64::from).product()
}

/// The exact integral of `x^alpha` over `[-1, 1]`.
pub fn interval_monomial_integral(alpha: i32) -> f64 {
    (1.0 - (-1.0f64).powi(alpha + 1)) / (alpha as f64 + 1.0)
}

/// The exact integral of `x^alpha y^beta` over the triangle `(0, 0)`, `(1, 0)`, `(0, 1)`.
pub fn triangle_monomial_integral(alpha: i32, beta: i32) -> f64 {
    factorial(alpha) * factorial(beta) / factorial(alpha + beta + 2)
}

/// The exact integral of `x^alpha y^beta z^gamma` over the unit reference tetrahedron.
pub fn tetrahedron_monomial_integral(alpha: i32, beta: i32, gamma: i32) -> f64 {
    factorial(alpha) * factorial(beta) * factorial(gamma) / factorial(alpha + beta + gamma + 3)
}

/// The exact integral of `x^alpha y^beta z^gamma` over the pyramid with base `[-1, 1]^2` at
/// `z = 0` and apex `(0, 0, 1)`.
pub fn pyramid_monomial_integral(alpha: i32, beta: i32, gamma: i32) -> f64 {
    // The cross-section at height z is the square [-(1 - z), 1 - z]^2, which contributes
    // (1 - z)^(alpha + beta + 2) times the square integral. The remaining integral in z is a
    // Beta function.
    let square = interval_monomial_integral(alpha) * interval_monomial_integral(beta);
    let beta_fn = factorial(gamma) * factorial(alpha + beta + 2) / factorial(alpha + beta + gamma + 3);
    square * beta_fn
}
