use crate::element::{map_reference_coords, mapping_jacobian};
use crate::error::ElementError;
use crate::lagrange::Lagrange1d;
use crate::nalgebra::{distance, Point3, Scalar, Vector3};
use crate::{ElementGeometry, ElementTopology, Order, Real};
use numeric_literals::replace_float_literals;

/// A line element with two, three or four nodes.
///
/// Nodes are stored in three-dimensional space, so edges may be embedded in the line, the
/// plane or in space. The vertices are nodes `0` and `1`; interior nodes follow in increasing
/// reference coordinate order.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeElement<T>
where
    T: Scalar,
{
    topology: ElementTopology,
    nodes: Vec<Point3<T>>,
    p_level: u32,
}

impl<T: Real> EdgeElement<T> {
    /// A linear edge between two vertices.
    pub fn edge2(a: Point3<T>, b: Point3<T>) -> Self {
        Self {
            topology: ElementTopology::Edge2,
            nodes: vec![a, b],
            p_level: 0,
        }
    }

    /// A straight quadratic edge. The interior node is placed at the midpoint.
    #[replace_float_literals(T::from_f64(literal).expect("Literal must fit in T"))]
    pub fn edge3(a: Point3<T>, b: Point3<T>) -> Self {
        let midpoint = a + (b - a) * 0.5;
        Self {
            topology: ElementTopology::Edge3,
            nodes: vec![a, b, midpoint],
            p_level: 0,
        }
    }

    /// A straight cubic edge. The interior nodes are placed at the thirds of the edge.
    #[replace_float_literals(T::from_f64(literal).expect("Literal must fit in T"))]
    pub fn edge4(a: Point3<T>, b: Point3<T>) -> Self {
        let d = b - a;
        Self {
            topology: ElementTopology::Edge4,
            nodes: vec![a, b, a + d / 3.0, a + d * (2.0 / 3.0)],
            p_level: 0,
        }
    }

    /// A linear edge on the x-axis covering `[interval[0], interval[1]]`.
    pub fn from_interval(interval: [T; 2]) -> Self {
        let on_axis = |x| Point3::new(x, T::zero(), T::zero());
        Self::edge2(on_axis(interval[0]), on_axis(interval[1]))
    }

    /// An edge with arbitrary node positions, e.g. a curved quadratic edge.
    pub fn from_nodes(topology: ElementTopology, nodes: Vec<Point3<T>>) -> Result<Self, ElementError> {
        if !topology.is_edge() {
            return Err(ElementError::NotAnEdge(topology));
        }
        if nodes.len() != topology.num_nodes() {
            return Err(ElementError::WrongNodeCount {
                topology,
                expected: topology.num_nodes(),
                actual: nodes.len(),
            });
        }
        Ok(Self {
            topology,
            nodes,
            p_level: 0,
        })
    }

    pub fn with_p_level(self, p_level: u32) -> Self {
        Self { p_level, ..self }
    }

    pub fn nodes(&self) -> &[Point3<T>] {
        &self.nodes
    }

    /// Moves node `i` to a new position.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not a valid node index.
    pub fn set_node(&mut self, i: usize, position: Point3<T>) {
        self.nodes[i] = position;
    }

    /// Maps a reference coordinate in `[-1, 1]` to physical coordinates.
    pub fn map_reference_coords(&self, xi: T) -> Point3<T> {
        map_reference_coords(self, &Lagrange1d, &Point3::new(xi, T::zero(), T::zero()))
    }

    /// The tangent `dx/dxi` of the mapping at the reference coordinate `xi`.
    pub fn reference_jacobian(&self, xi: T) -> Vector3<T> {
        mapping_jacobian(self, &Lagrange1d, &Point3::new(xi, T::zero(), T::zero()))
    }

    /// The straight-line distance between the two vertices.
    pub fn length(&self) -> T {
        distance(&self.nodes[0], &self.nodes[1])
    }
}

impl<T: Real> ElementGeometry<T> for EdgeElement<T> {
    fn topology(&self) -> ElementTopology {
        self.topology
    }

    fn mapping_order(&self) -> Order {
        // Edge topologies always have a default order
        self.topology.default_order().unwrap_or(Order::FIRST)
    }

    fn p_level(&self) -> u32 {
        self.p_level
    }

    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn vertex(&self, i: usize) -> Point3<T> {
        self.nodes[i]
    }
}
