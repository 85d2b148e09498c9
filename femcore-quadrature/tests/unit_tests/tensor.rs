use femcore_quadrature::integrate;
use femcore_quadrature::tensor::{hexahedron_gauss, prism, product, quadrilateral_gauss};
use femcore_quadrature::univariate::gauss;
use femcore_quadrature::Rule;
use util::{interval_monomial_integral, triangle_monomial_integral};

use matrixcompare::assert_scalar_eq;

#[test]
fn quadrilateral_gauss_rules_satisfy_expected_accuracy() {
    // Number of points in each dimension of rule
    for n in 1..=20 {
        // Expected polynomial degree that the rule can exactly integrate *along each dimension*
        let expected_polynomial_degree = 2 * n - 1;
        let rule = quadrilateral_gauss(n);
        assert_eq!(rule.0.len(), n * n);
        assert!(rule.0.iter().all(|&w| w > 0.0));

        for alpha in 0..=expected_polynomial_degree as i32 {
            for beta in 0..=expected_polynomial_degree as i32 {
                let expected = interval_monomial_integral(alpha) * interval_monomial_integral(beta);
                let estimated = integrate(&rule, |&[x, y]| x.powi(alpha) * y.powi(beta));
                assert_scalar_eq!(estimated, expected, comp = abs, tol = 1e-14);
            }
        }
    }
}

#[test]
fn hexahedral_gauss_rules_satisfy_expected_accuracy() {
    for n in 1..=8 {
        let expected_polynomial_degree = 2 * n - 1;
        let rule = hexahedron_gauss(n);
        assert_eq!(rule.0.len(), n * n * n);
        assert!(rule.0.iter().all(|&w| w > 0.0));

        for alpha in 0..=expected_polynomial_degree as i32 {
            for beta in 0..=expected_polynomial_degree as i32 {
                for gamma in 0..=expected_polynomial_degree as i32 {
                    let expected = interval_monomial_integral(alpha)
                        * interval_monomial_integral(beta)
                        * interval_monomial_integral(gamma);
                    let estimated =
                        integrate(&rule, |&[x, y, z]| x.powi(alpha) * y.powi(beta) * z.powi(gamma));
                    assert_scalar_eq!(estimated, expected, comp = abs, tol = 1e-13);
                }
            }
        }
    }
}

#[test]
fn product_appends_the_univariate_coordinate() {
    let base: Rule<1> = (vec![1.0, 3.0], vec![[-0.5], [0.5]]);
    let (weights, points): Rule<2> = product(&base, &gauss(1));
    assert_eq!(weights, vec![2.0, 6.0]);
    assert_eq!(points, vec![[-0.5, 0.0], [0.5, 0.0]]);
}

#[test]
fn prism_rules_satisfy_expected_accuracy() {
    for strength in 0..=8 {
        let rule = prism(strength);
        assert!(rule.0.iter().all(|&w| w > 0.0));
        for alpha in 0..=strength as i32 {
            for beta in 0..=(strength as i32 - alpha) {
                for gamma in 0..=(strength as i32 - alpha - beta) {
                    let expected =
                        triangle_monomial_integral(alpha, beta) * interval_monomial_integral(gamma);
                    let estimated =
                        integrate(&rule, |&[x, y, z]| x.powi(alpha) * y.powi(beta) * z.powi(gamma));
                    assert_scalar_eq!(estimated, expected, comp = abs, tol = 1e-14);
                }
            }
        }
    }
}
