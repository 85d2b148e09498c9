use femcore_quadrature::conical::{pyramid, tetrahedron, triangle};
use femcore_quadrature::integrate;
use util::{pyramid_monomial_integral, tetrahedron_monomial_integral, triangle_monomial_integral};

use matrixcompare::assert_scalar_eq;
use proptest::prelude::*;

#[test]
fn triangle_rules_satisfy_expected_accuracy() {
    for strength in 0..=20 {
        let rule = triangle(strength);
        assert!(rule.0.iter().all(|&w| w > 0.0));
        assert_scalar_eq!(rule.0.iter().sum::<f64>(), 0.5, comp = abs, tol = 1e-14);

        for alpha in 0..=strength as i32 {
            for beta in 0..=(strength as i32 - alpha) {
                let expected = triangle_monomial_integral(alpha, beta);
                let estimated = integrate(&rule, |&[x, y]| x.powi(alpha) * y.powi(beta));
                assert_scalar_eq!(estimated, expected, comp = abs, tol = 1e-14);
            }
        }
    }
}

#[test]
fn tetrahedron_rules_satisfy_expected_accuracy() {
    for strength in 0..=10 {
        let rule = tetrahedron(strength);
        assert!(rule.0.iter().all(|&w| w > 0.0));
        assert_scalar_eq!(rule.0.iter().sum::<f64>(), 1.0 / 6.0, comp = abs, tol = 1e-14);

        for alpha in 0..=strength as i32 {
            for beta in 0..=(strength as i32 - alpha) {
                for gamma in 0..=(strength as i32 - alpha - beta) {
                    let expected = tetrahedron_monomial_integral(alpha, beta, gamma);
                    let estimated =
                        integrate(&rule, |&[x, y, z]| x.powi(alpha) * y.powi(beta) * z.powi(gamma));
                    assert_scalar_eq!(estimated, expected, comp = abs, tol = 1e-14);
                }
            }
        }
    }
}

#[test]
fn pyramid_rules_satisfy_expected_accuracy() {
    for strength in 0..=10 {
        let rule = pyramid(strength);
        assert!(rule.0.iter().all(|&w| w > 0.0));
        assert_scalar_eq!(rule.0.iter().sum::<f64>(), 4.0 / 3.0, comp = abs, tol = 1e-14);

        for alpha in 0..=strength as i32 {
            for beta in 0..=(strength as i32 - alpha) {
                for gamma in 0..=(strength as i32 - alpha - beta) {
                    let expected = pyramid_monomial_integral(alpha, beta, gamma);
                    let estimated =
                        integrate(&rule, |&[x, y, z]| x.powi(alpha) * y.powi(beta) * z.powi(gamma));
                    assert_scalar_eq!(estimated, expected, comp = abs, tol = 1e-14);
                }
            }
        }
    }
}

proptest! {
    #[test]
    fn triangle_points_lie_inside_the_reference_triangle(strength in 0usize..30) {
        let (_, points) = triangle(strength);
        for [x, y] in points {
            prop_assert!(x > 0.0 && y > 0.0 && x + y < 1.0);
        }
    }

    #[test]
    fn tetrahedron_points_lie_inside_the_reference_tetrahedron(strength in 0usize..12) {
        let (_, points) = tetrahedron(strength);
        for [x, y, z] in points {
            prop_assert!(x > 0.0 && y > 0.0 && z > 0.0 && x + y + z < 1.0);
        }
    }
}
