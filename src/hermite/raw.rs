//! The raw one-dimensional Hermite polynomial family on `[-1, 1]`.
//!
//! Indices 0 and 1 are the value-type cubics for the endpoints `-1` and `+1`, indices 2 and 3
//! the slope-type cubics for the same endpoints. Every index `i >= 4` is the bubble
//! `xi^(i - 4) (xi^2 - 1)^2 / i!`, which vanishes together with its first derivative at both
//! endpoints.
//!
//! The evaluation order of every expression is fixed, so results are reproducible to the bit.
use crate::Real;
use numeric_literals::replace_float_literals;

/// Running factors `(i!, xi^(i - 6))` for the bubbles of index `i >= 6`.
///
/// Accumulated iteratively starting from `6! = 720`.
#[replace_float_literals(T::from_f64(literal).expect("Literal must fit in T"))]
fn bubble_factors<T: Real>(i: usize, xi: T) -> (T, T) {
    let mut denominator = 720.0;
    let mut xipower = 1.0;
    for n in 6..i {
        xipower *= xi;
        denominator *= T::from_usize(n + 1).expect("Factorial factor must fit in T");
    }
    (denominator, xipower)
}

fn from_index<T: Real>(value: usize) -> T {
    T::from_usize(value).expect("Shape function index must fit in T")
}

/// Value of raw Hermite polynomial `i` at `xi`.
#[replace_float_literals(T::from_f64(literal).expect("Literal must fit in T"))]
pub fn hermite_raw_shape<T: Real>(i: usize, xi: T) -> T {
    match i {
        0 => 0.25 * (2.0 - 3.0 * xi + xi * xi * xi),
        1 => 0.25 * (2.0 + 3.0 * xi - xi * xi * xi),
        2 => 0.25 * (1.0 - xi - xi * xi + xi * xi * xi),
        3 => 0.25 * (-1.0 - xi + xi * xi + xi * xi * xi),
        4 => (xi * xi - 1.0) * (xi * xi - 1.0) / 24.0,
        5 => xi * (xi * xi - 1.0) * (xi * xi - 1.0) / 120.0,
        _ => {
            let (denominator, xipower) = bubble_factors(i, xi);
            (xi * xi * xipower * (xi * xi - 1.0) * (xi * xi - 1.0)) / denominator
        }
    }
}

/// First derivative of raw Hermite polynomial `i` at `xi`.
#[replace_float_literals(T::from_f64(literal).expect("Literal must fit in T"))]
pub fn hermite_raw_shape_deriv<T: Real>(i: usize, xi: T) -> T {
    match i {
        0 => 0.75 * (-1.0 + xi * xi),
        1 => 0.75 * (1.0 - xi * xi),
        2 => 0.25 * (-1.0 - 2.0 * xi + 3.0 * xi * xi),
        3 => 0.25 * (-1.0 + 2.0 * xi + 3.0 * xi * xi),
        4 => 4.0 * xi * (xi * xi - 1.0) / 24.0,
        5 => (4.0 * xi * xi * (xi * xi - 1.0) + (xi * xi - 1.0) * (xi * xi - 1.0)) / 120.0,
        _ => {
            let (denominator, xipower) = bubble_factors(i, xi);
            let m = from_index::<T>(i - 4);
            (4.0 * xi * xi * xi * xipower * (xi * xi - 1.0) + m * xi * xipower * (xi * xi - 1.0) * (xi * xi - 1.0))
                / denominator
        }
    }
}

/// Second derivative of raw Hermite polynomial `i` at `xi`.
#[replace_float_literals(T::from_f64(literal).expect("Literal must fit in T"))]
pub fn hermite_raw_shape_second_deriv<T: Real>(i: usize, xi: T) -> T {
    match i {
        0 => 1.5 * xi,
        1 => -1.5 * xi,
        2 => 0.5 * (-1.0 + 3.0 * xi),
        3 => 0.5 * (1.0 + 3.0 * xi),
        4 => (8.0 * xi * xi + 4.0 * (xi * xi - 1.0)) / 24.0,
        5 => (8.0 * xi * xi * xi + 12.0 * xi * (xi * xi - 1.0)) / 120.0,
        _ => {
            let (denominator, xipower) = bubble_factors(i, xi);
            let xi4 = (xi * xi) * (xi * xi);
            let linear_coefficient = from_index::<T>(8 * (i - 4) + 4);
            let quadratic_coefficient = from_index::<T>((i - 4) * (i - 5));
            (8.0 * xi4 * xipower
                + linear_coefficient * xi * xi * xipower * (xi * xi - 1.0)
                + quadratic_coefficient * xipower * (xi * xi - 1.0) * (xi * xi - 1.0))
                / denominator
        }
    }
}
