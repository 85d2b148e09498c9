use femcore::proptest::order;
use femcore::quadrature::{generate, Quadrature, QuadratureError, QuadratureRule};
use femcore::{ElementTopology, Order};
use itertools::iproduct;
use matrixcompare::assert_scalar_eq;
use nalgebra::Point3;
use proptest::prelude::*;
use util::{
    interval_monomial_integral, pyramid_monomial_integral, tetrahedron_monomial_integral, triangle_monomial_integral,
};
use ElementTopology::*;

/// The exact integral of `x^a y^b z^c` over the reference shape of the topology.
fn monomial_integral(topology: ElementTopology, [a, b, c]: [i32; 3]) -> f64 {
    let interval = interval_monomial_integral;
    match topology.dim() {
        Some(1) if b == 0 && c == 0 => interval(a),
        Some(2) if c == 0 => match topology {
            Tri3 | Tri6 => triangle_monomial_integral(a, b),
            _ => interval(a) * interval(b),
        },
        Some(3) => match topology {
            Tet4 | Tet10 => tetrahedron_monomial_integral(a, b, c),
            Prism6 | Prism15 | Prism18 => triangle_monomial_integral(a, b) * interval(c),
            Pyramid5 => pyramid_monomial_integral(a, b, c),
            _ => interval(a) * interval(b) * interval(c),
        },
        // Monomials in coordinates beyond the dimension of the shape vanish on the padded points
        _ => 0.0,
    }
}

/// All exponents `[a, b, c]` with `a + b + c <= degree`, restricted to the first `dim` coordinates.
fn exponents(dim: usize, degree: i32) -> Vec<[i32; 3]> {
    let range = |d: usize| if dim > d { 0..=degree } else { 0..=0 };
    iproduct!(range(0), range(1), range(2))
        .filter(|(a, b, c)| a + b + c <= degree)
        .map(|(a, b, c)| [a, b, c])
        .collect()
}

fn monomial(p: &Point3<f64>, [a, b, c]: [i32; 3]) -> f64 {
    p.x.powi(a) * p.y.powi(b) * p.z.powi(c)
}

fn supported_topologies() -> Vec<ElementTopology> {
    ElementTopology::ALL
        .iter()
        .copied()
        .filter(|&topology| topology != Invalid)
        .collect()
}

#[test]
fn generated_rules_integrate_monomials_up_to_order_exactly() {
    for topology in supported_topologies() {
        let dim = topology.dim().unwrap();
        for degree in 0..=9 {
            let order = Order::new(degree as u32);
            let rule: QuadratureRule<f64> = generate(dim, topology, order).unwrap();
            assert_eq!(rule.order(), order);
            assert_eq!(rule.topology(), topology);
            assert_eq!(rule.dim(), dim);

            for alpha in exponents(dim, degree) {
                let estimated = rule.integrate(|p| monomial(p, alpha));
                let expected = monomial_integral(topology, alpha);
                assert_scalar_eq!(estimated, expected, comp = abs, tol = 1e-13);
            }
        }
    }
}

#[test]
fn third_order_edge_rule_integrates_cubic_and_quadratic() {
    let rule: QuadratureRule<f64> = generate(1, Edge2, Order::THIRD).unwrap();
    assert_eq!(rule.len(), 2);
    assert_scalar_eq!(rule.integrate(|p| p.x * p.x * p.x), 0.0, comp = abs, tol = 1e-15);
    assert_scalar_eq!(rule.integrate(|p| p.x * p.x), 2.0 / 3.0, comp = abs, tol = 1e-15);
}

#[test]
fn weights_sum_to_reference_measure() {
    for topology in supported_topologies() {
        let dim = topology.dim().unwrap();
        let measure = topology.reference_measure().unwrap();
        for degree in [0, 1, 2, 5, 12] {
            let rule: QuadratureRule<f64> = generate(dim, topology, Order::new(degree)).unwrap();
            assert_scalar_eq!(rule.sum_of_weights(), measure, comp = abs, tol = 1e-13);
        }
    }
}

#[test]
fn edge_rules_have_positive_weights_and_padded_points() {
    for degree in 0..=20 {
        let rule: QuadratureRule<f64> = generate(1, Edge2, Order::new(degree)).unwrap();
        assert!(rule.weights().iter().all(|&w| w > 0.0));
        assert!(rule
            .points()
            .iter()
            .all(|p| -1.0 < p.x && p.x < 1.0 && p.y == 0.0 && p.z == 0.0));
    }
}

#[test]
fn all_edge_topologies_share_the_canonical_rule() {
    for order in [Order::FIRST, Order::THIRD, Order::SEVENTH] {
        let canonical: QuadratureRule<f64> = generate(1, Edge2, order).unwrap();
        for topology in [Edge3, Edge4] {
            let rule: QuadratureRule<f64> = generate(1, topology, order).unwrap();
            assert_eq!(rule.weights(), canonical.weights());
            assert_eq!(rule.points(), canonical.points());
        }
    }
}

#[test]
fn invalid_topology_falls_back_to_dimension_default() {
    let expected = [(1, Edge2), (2, Quad4), (3, Hex8)];
    for (dim, default) in expected {
        let fallback: QuadratureRule<f64> = generate(dim, Invalid, Order::FIFTH).unwrap();
        let explicit: QuadratureRule<f64> = generate(dim, default, Order::FIFTH).unwrap();
        assert_eq!(fallback.topology(), default);
        assert_eq!(fallback, explicit);
    }
}

#[test]
fn unsupported_dimension_topology_pairs_are_rejected() {
    let cases = [(1, Quad4), (2, Edge2), (2, Hex8), (3, Tri3), (0, Invalid), (4, Invalid), (4, Hex8)];
    for (dim, topology) in cases {
        let result = generate::<f64>(dim, topology, Order::SECOND);
        assert_eq!(result, Err(QuadratureError::UnsupportedTopology { dim, topology }));
    }
}

#[test]
fn generation_is_bitwise_deterministic() {
    for topology in supported_topologies() {
        let dim = topology.dim().unwrap();
        let rule1: QuadratureRule<f64> = generate(dim, topology, Order::SIXTH).unwrap();
        let rule2: QuadratureRule<f64> = generate(dim, topology, Order::SIXTH).unwrap();
        let bits = |rule: &QuadratureRule<f64>| {
            rule.iter()
                .map(|(w, p)| (w.to_bits(), p.coords.map(f64::to_bits)))
                .collect::<Vec<_>>()
        };
        assert_eq!(bits(&rule1), bits(&rule2));
    }
}

#[test]
fn rules_can_be_generated_in_single_precision() {
    let rule: QuadratureRule<f32> = generate(2, Tri3, Order::FOURTH).unwrap();
    assert_scalar_eq!(rule.sum_of_weights(), 0.5f32, comp = abs, tol = 1e-6);
    let (weights, points) = rule.into_parts();
    assert_eq!(weights.len(), points.len());
}

#[test]
fn rule_iteration_matches_weights_and_points() {
    let rule: QuadratureRule<f64> = generate(3, Prism6, Order::THIRD).unwrap();
    let iter = rule.iter();
    assert_eq!(iter.len(), rule.len());
    for ((w, p), (w_expected, p_expected)) in (&rule).into_iter().zip(rule.weights().iter().zip(rule.points())) {
        assert_eq!(w, w_expected);
        assert_eq!(p, p_expected);
    }
}

#[test]
fn rules_survive_json_roundtrip() {
    let rule: QuadratureRule<f64> = generate(2, Tri6, Order::FIFTH).unwrap();
    let json = serde_json::to_string(&rule).unwrap();
    let parsed: QuadratureRule<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, rule);
}

#[test]
fn inconsistent_serialized_rules_are_rejected() {
    let rule: QuadratureRule<f64> = generate(1, Edge2, Order::THIRD).unwrap();
    let json = serde_json::to_value(&rule).unwrap();

    let mut extra_weight = json.clone();
    extra_weight["weights"].as_array_mut().unwrap().push(1.0.into());
    let error = serde_json::from_value::<QuadratureRule<f64>>(extra_weight).unwrap_err();
    assert!(error.to_string().contains("3 weights but 2 points"), "{error}");

    let mut wrong_dimension = json;
    wrong_dimension["dim"] = 2.into();
    assert!(serde_json::from_value::<QuadratureRule<f64>>(wrong_dimension).is_err());
}

proptest! {
    #[test]
    fn rules_of_arbitrary_order_are_exact_and_minimal_on_edges(order in order()) {
        let rule: QuadratureRule<f64> = generate(1, Edge2, order).unwrap();
        let degree = order.degree() as i32;
        prop_assert_eq!(rule.len(), order.degree() as usize / 2 + 1);
        for alpha in 0..=degree {
            let estimated = rule.integrate(|p| p.x.powi(alpha));
            prop_assert!((estimated - interval_monomial_integral(alpha)).abs() <= 1e-13);
        }
    }

    #[test]
    fn prism_rules_of_arbitrary_order_are_exact(order in order()) {
        let rule: QuadratureRule<f64> = generate(3, Prism6, order).unwrap();
        for alpha in exponents(3, order.degree() as i32) {
            let estimated = rule.integrate(|p| monomial(p, alpha));
            prop_assert!((estimated - monomial_integral(Prism6, alpha)).abs() <= 1e-13);
        }
    }
}
