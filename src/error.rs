//! Error types.
use crate::{ElementTopology, Order};
use thiserror::Error;

/// Errors returned when generating quadrature rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QuadratureError {
    /// No rule is implemented for the topology in the requested dimension.
    #[error("no quadrature rule available for topology {topology} in dimension {dim}")]
    UnsupportedTopology { dim: usize, topology: ElementTopology },
    /// Stored rule data has a different number of weights and points.
    #[error("quadrature rule has {num_weights} weights but {num_points} points")]
    InconsistentRule { num_weights: usize, num_points: usize },
}

/// Errors returned by shape function evaluators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ShapeFunctionError {
    /// The combination of total polynomial order and topology has no implemented basis.
    #[error("unsupported shape function configuration: order {order} on {topology}")]
    UnsupportedConfiguration { order: Order, topology: ElementTopology },
    /// The basis builds derivative degrees of freedom from the physical mapping, so it cannot be
    /// evaluated on the reference element alone.
    #[error("Hermite elements require the real element to construct gradient-based degrees of freedom")]
    RequiresPhysicalElement,
    /// The Lagrange mapping has no shape functions for the given topology and order.
    #[error("no Lagrange mapping of order {order} on {topology}")]
    UnsupportedMappingOrder { topology: ElementTopology, order: Order },
    /// The shape function index exceeds the number of shape functions of the family.
    #[error("shape function index {index} is out of range for {count} shape functions")]
    IndexOutOfRange { index: usize, count: usize },
    /// A derivative was requested with respect to a coordinate the reference element lacks.
    #[error("reference coordinate {component} does not exist in dimension {dim}")]
    InvalidComponent { component: usize, dim: usize },
}

/// Errors returned when constructing elements from raw node data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ElementError {
    #[error("topology {0} is not an edge")]
    NotAnEdge(ElementTopology),
    #[error("topology {topology} has {expected} nodes, but {actual} were given")]
    WrongNodeCount {
        topology: ElementTopology,
        expected: usize,
        actual: usize,
    },
}
