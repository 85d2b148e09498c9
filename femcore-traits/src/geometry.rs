//! Interfaces through which the numerical core reads element geometry.
use crate::{ElementTopology, Order, Real};
use nalgebra::{Point3, Vector3};
use std::error::Error;

/// Read-only access to the geometry of a single element.
///
/// Node coordinates are stored as three-dimensional points; elements of lower dimension leave the
/// trailing coordinates at zero. Vertices come first, followed by any higher-order nodes, in the
/// order expected by the Lagrange mapping for [`ElementGeometry::topology`].
pub trait ElementGeometry<T: Real> {
    fn topology(&self) -> ElementTopology;

    /// Polynomial order of the geometric mapping from the reference element.
    fn mapping_order(&self) -> Order;

    /// Additional polynomial order from p-refinement.
    fn p_level(&self) -> u32 {
        0
    }

    fn num_nodes(&self) -> usize;

    /// Returns the coordinates of node `i`.
    ///
    /// # Panics
    ///
    /// Implementations panic if `i >= self.num_nodes()`.
    fn vertex(&self, i: usize) -> Point3<T>;

    /// The average of the element vertices.
    fn centroid(&self) -> Point3<T> {
        let n = self.topology().num_vertices().min(self.num_nodes());
        if n == 0 {
            return Point3::origin();
        }
        let sum = (0..n)
            .map(|i| self.vertex(i).coords)
            .fold(Vector3::zeros(), |acc, x| acc + x);
        Point3::from(sum / T::from_usize(n).expect("Vertex count must fit in T"))
    }
}

impl<T: Real, E: ElementGeometry<T> + ?Sized> ElementGeometry<T> for &E {
    fn topology(&self) -> ElementTopology {
        E::topology(self)
    }

    fn mapping_order(&self) -> Order {
        E::mapping_order(self)
    }

    fn p_level(&self) -> u32 {
        E::p_level(self)
    }

    fn num_nodes(&self) -> usize {
        E::num_nodes(self)
    }

    fn vertex(&self, i: usize) -> Point3<T> {
        E::vertex(self, i)
    }

    fn centroid(&self) -> Point3<T> {
        E::centroid(self)
    }
}

/// Evaluates the Lagrange shape functions that define the geometric mapping of an element.
pub trait MappingEvaluator<T: Real> {
    type Error: Error + Send + Sync + 'static;

    /// Number of mapping shape functions for the given topology and order, or zero if the
    /// combination is not supported.
    fn num_shape_functions(&self, topology: ElementTopology, order: Order) -> usize;

    /// Value of mapping shape function `local_index` at the reference point.
    fn shape(
        &self,
        topology: ElementTopology,
        order: Order,
        local_index: usize,
        point: &Point3<T>,
    ) -> Result<T, Self::Error>;

    /// Derivative of mapping shape function `local_index` with respect to reference coordinate
    /// `component` at the reference point.
    fn shape_derivative(
        &self,
        topology: ElementTopology,
        order: Order,
        local_index: usize,
        component: usize,
        point: &Point3<T>,
    ) -> Result<T, Self::Error>;
}
