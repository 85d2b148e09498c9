//! Lagrange shape functions on the reference edge, used for geometric mappings.
//!
//! Node ordering follows the element conventions: the two vertices at `-1` and `+1` come first,
//! followed by interior nodes in increasing coordinate order (`0` for the quadratic edge,
//! `-1/3` and `1/3` for the cubic edge).
use crate::error::ShapeFunctionError;
use crate::nalgebra::Point3;
use crate::{ElementTopology, MappingEvaluator, Order, Real};
use numeric_literals::replace_float_literals;
use ElementTopology::*;

/// Evaluator for Lagrange mappings of edges.
///
/// Supports linear mappings on every edge topology (using the two vertices only), quadratic
/// mappings on [`ElementTopology::Edge3`] and cubic mappings on [`ElementTopology::Edge4`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Lagrange1d;

/// The polynomial family used for a supported `(topology, order)` pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum EdgeFamily {
    Linear,
    Quadratic,
    Cubic,
}

impl EdgeFamily {
    fn select(topology: ElementTopology, order: Order) -> Option<Self> {
        match (topology, order) {
            (Edge2 | Edge3 | Edge4, Order::FIRST) => Some(Self::Linear),
            (Edge3, Order::SECOND) => Some(Self::Quadratic),
            (Edge4, Order::THIRD) => Some(Self::Cubic),
            _ => None,
        }
    }

    fn num_shape_functions(self) -> usize {
        match self {
            Self::Linear => 2,
            Self::Quadratic => 3,
            Self::Cubic => 4,
        }
    }
}

#[replace_float_literals(T::from_f64(literal).expect("Literal must fit in T"))]
fn edge_basis<T: Real>(family: EdgeFamily, i: usize, xi: T) -> T {
    match (family, i) {
        (EdgeFamily::Linear, 0) => (1.0 - xi) / 2.0,
        (EdgeFamily::Linear, 1) => (1.0 + xi) / 2.0,
        (EdgeFamily::Quadratic, 0) => 0.5 * xi * (xi - 1.0),
        (EdgeFamily::Quadratic, 1) => 0.5 * xi * (xi + 1.0),
        (EdgeFamily::Quadratic, 2) => (1.0 - xi) * (1.0 + xi),
        (EdgeFamily::Cubic, 0) => 9.0 / 16.0 * (1.0 / 9.0 - xi * xi) * (xi - 1.0),
        (EdgeFamily::Cubic, 1) => -9.0 / 16.0 * (1.0 / 9.0 - xi * xi) * (xi + 1.0),
        (EdgeFamily::Cubic, 2) => 27.0 / 16.0 * (1.0 - xi * xi) * (1.0 / 3.0 - xi),
        (EdgeFamily::Cubic, 3) => 27.0 / 16.0 * (1.0 - xi * xi) * (1.0 / 3.0 + xi),
        _ => unreachable!("shape function index is checked against the family size"),
    }
}

#[replace_float_literals(T::from_f64(literal).expect("Literal must fit in T"))]
fn edge_basis_derivative<T: Real>(family: EdgeFamily, i: usize, xi: T) -> T {
    match (family, i) {
        (EdgeFamily::Linear, 0) => -0.5,
        (EdgeFamily::Linear, 1) => 0.5,
        (EdgeFamily::Quadratic, 0) => xi - 0.5,
        (EdgeFamily::Quadratic, 1) => xi + 0.5,
        (EdgeFamily::Quadratic, 2) => -2.0 * xi,
        (EdgeFamily::Cubic, 0) => 9.0 / 16.0 * (-3.0 * xi * xi + 2.0 * xi + 1.0 / 9.0),
        (EdgeFamily::Cubic, 1) => -9.0 / 16.0 * (-3.0 * xi * xi - 2.0 * xi + 1.0 / 9.0),
        (EdgeFamily::Cubic, 2) => 27.0 / 16.0 * (3.0 * xi * xi - 2.0 / 3.0 * xi - 1.0),
        (EdgeFamily::Cubic, 3) => 27.0 / 16.0 * (-3.0 * xi * xi - 2.0 / 3.0 * xi + 1.0),
        _ => unreachable!("shape function index is checked against the family size"),
    }
}

impl Lagrange1d {
    fn family(
        &self,
        topology: ElementTopology,
        order: Order,
        local_index: usize,
    ) -> Result<EdgeFamily, ShapeFunctionError> {
        let family =
            EdgeFamily::select(topology, order).ok_or(ShapeFunctionError::UnsupportedMappingOrder { topology, order })?;
        let count = family.num_shape_functions();
        if local_index >= count {
            return Err(ShapeFunctionError::IndexOutOfRange {
                index: local_index,
                count,
            });
        }
        Ok(family)
    }
}

impl<T: Real> MappingEvaluator<T> for Lagrange1d {
    type Error = ShapeFunctionError;

    fn num_shape_functions(&self, topology: ElementTopology, order: Order) -> usize {
        EdgeFamily::select(topology, order).map_or(0, EdgeFamily::num_shape_functions)
    }

    fn shape(
        &self,
        topology: ElementTopology,
        order: Order,
        local_index: usize,
        point: &Point3<T>,
    ) -> Result<T, Self::Error> {
        let family = self.family(topology, order, local_index)?;
        Ok(edge_basis(family, local_index, point.x))
    }

    fn shape_derivative(
        &self,
        topology: ElementTopology,
        order: Order,
        local_index: usize,
        component: usize,
        point: &Point3<T>,
    ) -> Result<T, Self::Error> {
        let family = self.family(topology, order, local_index)?;
        if component != 0 {
            return Err(ShapeFunctionError::InvalidComponent { component, dim: 1 });
        }
        Ok(edge_basis_derivative(family, local_index, point.x))
    }
}
