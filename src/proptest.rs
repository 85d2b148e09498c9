use crate::element::EdgeElement;
use crate::{ElementTopology, Order};
use ::proptest::prelude::*;
use nalgebra::Point3;

pub fn point3() -> impl Strategy<Value = Point3<f64>> {
    // Keep coordinates moderate, otherwise mapping derivatives quickly become so large or small
    // that comparisons in tests lose all meaning
    let range = -10.0..10.0;
    [range.clone(), range.clone(), range].prop_map(|[x, y, z]| Point3::new(x, y, z))
}

/// A reference coordinate in `[-1, 1]`.
pub fn reference_coordinate() -> impl Strategy<Value = f64> {
    -1.0..=1.0
}

/// A reference point on the edge `[-1, 1]`, padded with zeros.
pub fn reference_point1() -> impl Strategy<Value = Point3<f64>> {
    reference_coordinate().prop_map(|xi| Point3::new(xi, 0.0, 0.0))
}

/// An interval `[a, b]` with `b - a` bounded away from zero.
pub fn interval() -> impl Strategy<Value = [f64; 2]> {
    (-10.0..10.0, 0.1..10.0).prop_map(|(a, length)| [a, a + length])
}

/// Orders accepted by [`crate::quadrature::generate`], kept small to bound the rule sizes.
pub fn order() -> impl Strategy<Value = Order> {
    (0..=12u32).prop_map(Order::new)
}

/// Parameters for arbitrary edge elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeElementParams {
    /// Restrict elements to the x-axis.
    pub on_axis: bool,
    pub topologies: Vec<ElementTopology>,
}

impl Default for EdgeElementParams {
    fn default() -> Self {
        Self {
            on_axis: true,
            topologies: vec![ElementTopology::Edge2, ElementTopology::Edge3, ElementTopology::Edge4],
        }
    }
}

impl EdgeElementParams {
    pub fn in_space(self) -> Self {
        Self { on_axis: false, ..self }
    }

    pub fn with_topologies(self, topologies: Vec<ElementTopology>) -> Self {
        Self { topologies, ..self }
    }
}

impl Arbitrary for EdgeElement<f64> {
    type Parameters = EdgeElementParams;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        assert!(!params.topologies.is_empty(), "Need at least one edge topology");
        let endpoints = if params.on_axis {
            interval()
                .prop_map(|[a, b]| (Point3::new(a, 0.0, 0.0), Point3::new(b, 0.0, 0.0)))
                .boxed()
        } else {
            (point3(), point3())
                .prop_filter("Edge vertices must be distinct", |(a, b)| (b - a).norm() > 0.1)
                .boxed()
        };
        (::proptest::sample::select(params.topologies), endpoints)
            .prop_map(|(topology, (a, b))| match topology {
                ElementTopology::Edge3 => EdgeElement::edge3(a, b),
                ElementTopology::Edge4 => EdgeElement::edge4(a, b),
                _ => EdgeElement::edge2(a, b),
            })
            .boxed()
    }
}
