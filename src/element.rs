//! Element geometry and the geometric mapping from the reference element.
use crate::nalgebra::{Point3, Vector3};
use crate::{ElementGeometry, MappingEvaluator, Real};

mod edge;

pub use edge::EdgeElement;

/// Checks the geometry provider against the mapping evaluator and returns the number of mapping
/// shape functions.
fn num_mapping_functions<T, E, M>(element: &E, mapping: &M) -> usize
where
    T: Real,
    E: ElementGeometry<T> + ?Sized,
    M: MappingEvaluator<T>,
{
    let topology = element.topology();
    let order = element.mapping_order();
    let n = mapping.num_shape_functions(topology, order);
    assert!(
        n > 0,
        "Element reports mapping order {order} on {topology}, which has no mapping shape functions"
    );
    assert!(
        element.num_nodes() >= n,
        "Element has {} nodes, but its mapping needs {n}",
        element.num_nodes()
    );
    n
}

/// Maps reference coordinates to physical coordinates of a one-dimensional element.
///
/// # Panics
///
/// Panics if the element and the mapping evaluator are inconsistent, i.e. the evaluator has no
/// shape functions for the element's topology and mapping order, or the element has too few nodes.
pub fn map_reference_coords<T, E, M>(element: &E, mapping: &M, xi: &Point3<T>) -> Point3<T>
where
    T: Real,
    E: ElementGeometry<T> + ?Sized,
    M: MappingEvaluator<T>,
{
    let n = num_mapping_functions(element, mapping);
    let (topology, order) = (element.topology(), element.mapping_order());
    let x = (0..n)
        .map(|i| {
            let phi = mapping
                .shape(topology, order, i, xi)
                .unwrap_or_else(|err| panic!("Mapping evaluator rejected shape function {i}: {err}"));
            element.vertex(i).coords * phi
        })
        .fold(Vector3::zeros(), |sum, x| sum + x);
    Point3::from(x)
}

/// The derivative `dx/dxi` of the geometric mapping of a one-dimensional element.
///
/// For a point `xi` on the reference edge, this sums `x_i * dphi_i/dxi` over the element nodes
/// `x_i` and the mapping shape functions `phi_i`.
///
/// # Panics
///
/// Panics under the same conditions as [`map_reference_coords`].
pub fn mapping_jacobian<T, E, M>(element: &E, mapping: &M, xi: &Point3<T>) -> Vector3<T>
where
    T: Real,
    E: ElementGeometry<T> + ?Sized,
    M: MappingEvaluator<T>,
{
    let n = num_mapping_functions(element, mapping);
    let (topology, order) = (element.topology(), element.mapping_order());
    (0..n)
        .map(|i| {
            let dphi = mapping
                .shape_derivative(topology, order, i, 0, xi)
                .unwrap_or_else(|err| panic!("Mapping evaluator rejected shape function {i}: {err}"));
            element.vertex(i).coords * dphi
        })
        .fold(Vector3::zeros(), |sum, dx| sum + dx)
}
