use femcore_quadrature::integrate;
use femcore_quadrature::univariate::{gauss, gauss_for_strength};
use util::interval_monomial_integral;

use matrixcompare::assert_scalar_eq;

#[test]
fn gauss_rules_satisfy_expected_accuracy() {
    for n in 1..=200 {
        let expected_polynomial_degree = 2 * n - 1;
        let rule = gauss(n);

        // Also test that weights are positive
        assert!(rule.0.iter().all(|&w| w > 0.0));

        for alpha in 0..=expected_polynomial_degree as i32 {
            let estimated_integral = integrate(&rule, |x| x[0].powi(alpha));
            assert_scalar_eq!(
                estimated_integral,
                interval_monomial_integral(alpha),
                comp = abs,
                tol = 1e-14
            );
        }
    }
}

#[test]
fn gauss_points_are_sorted_and_symmetric() {
    for n in 1..=40 {
        let (weights, points) = gauss(n);
        assert!(points.windows(2).all(|pair| pair[0][0] < pair[1][0]));
        for i in 0..n {
            assert_eq!(points[i][0], -points[n - 1 - i][0]);
            assert_eq!(weights[i], weights[n - 1 - i]);
        }
        assert!(points.iter().all(|&[x]| -1.0 < x && x < 1.0));
    }
}

#[test]
fn odd_gauss_rules_contain_the_origin() {
    for n in (1..=41).step_by(2) {
        let (_, points) = gauss(n);
        assert_eq!(points[n / 2], [0.0]);
    }
}

#[test]
fn gauss_weights_sum_to_interval_length() {
    for n in 1..=100 {
        let (weights, _) = gauss(n);
        assert_scalar_eq!(weights.iter().sum::<f64>(), 2.0, comp = abs, tol = 1e-14);
    }
}

#[test]
fn gauss_for_strength_uses_fewest_points() {
    let expected = [(0, 1), (1, 1), (2, 2), (3, 2), (4, 3), (5, 3), (6, 4), (43, 22)];
    for (strength, num_points) in expected {
        assert_eq!(gauss_for_strength(strength).0.len(), num_points);
    }
}

#[test]
#[should_panic]
fn gauss_rejects_zero_points() {
    gauss(0);
}

#[test]
fn gauss_is_deterministic() {
    for n in [1, 2, 7, 30] {
        let a = gauss(n);
        let b = gauss(n);
        let bits = |rule: &(Vec<f64>, Vec<[f64; 1]>)| -> Vec<(u64, u64)> {
            rule.0
                .iter()
                .zip(&rule.1)
                .map(|(w, [x])| (w.to_bits(), x.to_bits()))
                .collect()
        };
        assert_eq!(bits(&a), bits(&b));
    }
}
