use crate::Order;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Tag identifying the reference shape and node layout of an element.
///
/// The numeric suffix is the number of nodes. `Invalid` marks an unset or unknown topology.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementTopology {
    #[default]
    Invalid,
    Edge2,
    Edge3,
    Edge4,
    Tri3,
    Tri6,
    Quad4,
    Quad8,
    Quad9,
    Tet4,
    Tet10,
    Hex8,
    Hex20,
    Hex27,
    Prism6,
    Prism15,
    Prism18,
    Pyramid5,
}

use ElementTopology::*;

impl ElementTopology {
    /// All valid topologies.
    pub const ALL: [ElementTopology; 17] = [
        Edge2, Edge3, Edge4, Tri3, Tri6, Quad4, Quad8, Quad9, Tet4, Tet10, Hex8, Hex20, Hex27, Prism6, Prism15,
        Prism18, Pyramid5,
    ];

    /// Dimension of the reference shape, or `None` for `Invalid`.
    pub fn dim(&self) -> Option<usize> {
        match self {
            Invalid => None,
            Edge2 | Edge3 | Edge4 => Some(1),
            Tri3 | Tri6 | Quad4 | Quad8 | Quad9 => Some(2),
            Tet4 | Tet10 | Hex8 | Hex20 | Hex27 | Prism6 | Prism15 | Prism18 | Pyramid5 => Some(3),
        }
    }

    pub fn num_nodes(&self) -> usize {
        match self {
            Invalid => 0,
            Edge2 => 2,
            Edge3 => 3,
            Edge4 => 4,
            Tri3 => 3,
            Tri6 => 6,
            Quad4 => 4,
            Quad8 => 8,
            Quad9 => 9,
            Tet4 => 4,
            Tet10 => 10,
            Hex8 => 8,
            Hex20 => 20,
            Hex27 => 27,
            Prism6 => 6,
            Prism15 => 15,
            Prism18 => 18,
            Pyramid5 => 5,
        }
    }

    /// Number of corner nodes. Vertices are always numbered before higher-order nodes.
    pub fn num_vertices(&self) -> usize {
        match self {
            Invalid => 0,
            Edge2 | Edge3 | Edge4 => 2,
            Tri3 | Tri6 => 3,
            Quad4 | Quad8 | Quad9 | Tet4 | Tet10 => 4,
            Pyramid5 => 5,
            Prism6 | Prism15 | Prism18 => 6,
            Hex8 | Hex20 | Hex27 => 8,
        }
    }

    /// The polynomial order of the Lagrange geometric mapping implied by the node layout.
    pub fn default_order(&self) -> Option<Order> {
        match self {
            Invalid => None,
            Edge2 | Tri3 | Quad4 | Tet4 | Hex8 | Prism6 | Pyramid5 => Some(Order::FIRST),
            Edge3 | Tri6 | Quad8 | Quad9 | Tet10 | Hex20 | Hex27 | Prism15 | Prism18 => Some(Order::SECOND),
            Edge4 => Some(Order::THIRD),
        }
    }

    /// Length, area or volume of the reference shape.
    pub fn reference_measure(&self) -> Option<f64> {
        match self {
            Invalid => None,
            Edge2 | Edge3 | Edge4 => Some(2.0),
            Tri3 | Tri6 => Some(0.5),
            Quad4 | Quad8 | Quad9 => Some(4.0),
            Tet4 | Tet10 => Some(1.0 / 6.0),
            Hex8 | Hex20 | Hex27 => Some(8.0),
            Prism6 | Prism15 | Prism18 => Some(1.0),
            Pyramid5 => Some(4.0 / 3.0),
        }
    }

    pub fn is_edge(&self) -> bool {
        self.dim() == Some(1)
    }
}

impl Display for ElementTopology {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Invalid => "INVALID",
            Edge2 => "EDGE2",
            Edge3 => "EDGE3",
            Edge4 => "EDGE4",
            Tri3 => "TRI3",
            Tri6 => "TRI6",
            Quad4 => "QUAD4",
            Quad8 => "QUAD8",
            Quad9 => "QUAD9",
            Tet4 => "TET4",
            Tet10 => "TET10",
            Hex8 => "HEX8",
            Hex20 => "HEX20",
            Hex27 => "HEX27",
            Prism6 => "PRISM6",
            Prism15 => "PRISM15",
            Prism18 => "PRISM18",
            Pyramid5 => "PYRAMID5",
        };
        write!(f, "{name}")
    }
}
