//! Gauss-type rule generation keyed by dimension, topology and order.
use super::{convert_rule, QuadratureError, QuadratureRule};
use crate::{ElementTopology, Order, Real};
use femcore_quadrature::univariate::gauss_for_strength;
use femcore_quadrature::{conical, tensor, Rule, Rule1d};
use log::debug;
use ElementTopology::*;

/// Generates a Gauss-type quadrature rule.
///
/// The rule integrates every polynomial of total degree at most `order` over the reference shape
/// of `topology` exactly. All edge topologies share the canonical rule on `[-1, 1]`,
/// quadrilaterals, hexahedra and prisms receive tensor-product rules and triangles, tetrahedra
/// and pyramids receive conical product rules. The canonical edge rule is always built first,
/// since the tensor-product rules are assembled from it.
///
/// Passing [`ElementTopology::Invalid`] selects the default shape of the dimension: the edge,
/// the quadrilateral or the hexahedron.
///
/// Generation is deterministic: identical inputs produce bit-identical rules.
///
/// # Errors
///
/// Returns [`QuadratureError::UnsupportedTopology`] if `dim` is not 1, 2 or 3, or if the
/// topology does not have dimension `dim`.
pub fn generate<T>(dim: usize, topology: ElementTopology, order: Order) -> Result<QuadratureRule<T>, QuadratureError>
where
    T: Real,
{
    let unsupported = || QuadratureError::UnsupportedTopology { dim, topology };

    let topology = match topology {
        Invalid => default_topology(dim).ok_or_else(unsupported)?,
        other => other,
    };
    if topology.dim() != Some(dim) {
        return Err(unsupported());
    }

    let strength = order.degree() as usize;
    // Higher-dimensional rules are all assembled from the canonical edge rule
    let edge_rule = gauss_for_strength(strength);

    let (weights, points) = match dim {
        1 => convert_rule(edge_rule),
        2 => convert_rule(init_2d(topology, strength, &edge_rule).ok_or_else(unsupported)?),
        3 => convert_rule(init_3d(topology, strength, &edge_rule).ok_or_else(unsupported)?),
        _ => return Err(unsupported()),
    };

    debug!(
        "Generated {}-point Gauss rule of order {} for {} (dimension {})",
        weights.len(),
        order,
        topology,
        dim
    );

    Ok(QuadratureRule {
        dim,
        topology,
        order,
        weights,
        points,
    })
}

fn default_topology(dim: usize) -> Option<ElementTopology> {
    match dim {
        1 => Some(Edge2),
        2 => Some(Quad4),
        3 => Some(Hex8),
        _ => None,
    }
}

fn init_2d(topology: ElementTopology, strength: usize, edge_rule: &Rule1d) -> Option<Rule<2>> {
    match topology {
        Quad4 | Quad8 | Quad9 => Some(tensor::product(edge_rule, edge_rule)),
        Tri3 | Tri6 => Some(conical::triangle(strength)),
        _ => None,
    }
}

fn init_3d(topology: ElementTopology, strength: usize, edge_rule: &Rule1d) -> Option<Rule<3>> {
    match topology {
        Hex8 | Hex20 | Hex27 => {
            let quad_rule: Rule<2> = tensor::product(edge_rule, edge_rule);
            Some(tensor::product(&quad_rule, edge_rule))
        }
        Prism6 | Prism15 | Prism18 => Some(tensor::prism(strength)),
        Tet4 | Tet10 => Some(conical::tetrahedron(strength)),
        Pyramid5 => Some(conical::pyramid(strength)),
        _ => None,
    }
}
