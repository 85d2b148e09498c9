//! Policy for choosing quadrature orders.
use crate::quadrature::{generate, QuadratureError, QuadratureRule};
use crate::{ElementGeometry, ElementTopology, Order, Real};
use log::warn;
use serde::{Deserialize, Serialize};

/// Settings that decide which quadrature order is used when the caller does not fully specify it.
///
/// Missing fields take their default values when deserializing, so a partial configuration such
/// as `{"default_order": 6}` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadratureSettings {
    /// Order used when no order is requested.
    pub default_order: Order,
    /// Additional order per p-refinement level of an element.
    pub p_level_elevation: u32,
}

impl Default for QuadratureSettings {
    fn default() -> Self {
        Self {
            default_order: Order::FOURTH,
            p_level_elevation: 2,
        }
    }
}

impl QuadratureSettings {
    /// The order actually used for a request: the requested (or default) order, raised by
    /// `p_level_elevation * p_level`.
    pub fn effective_order(&self, order: Option<Order>, p_level: u32) -> Order {
        let order = order.unwrap_or_else(|| {
            warn!("No quadrature order requested, falling back to default order {}", self.default_order);
            self.default_order
        });
        order.elevated(self.p_level_elevation.saturating_mul(p_level))
    }

    /// Generates a rule with the effective order. See [`generate`] for details and errors.
    pub fn generate<T: Real>(
        &self,
        dim: usize,
        topology: ElementTopology,
        order: Option<Order>,
        p_level: u32,
    ) -> Result<QuadratureRule<T>, QuadratureError> {
        generate(dim, topology, self.effective_order(order, p_level))
    }

    /// Generates a rule suitable for integrating over the given element.
    ///
    /// The dimension and topology are taken from the element, and its p-level elevates the order.
    pub fn rule_for_element<T, E>(
        &self,
        element: &E,
        order: Option<Order>,
    ) -> Result<QuadratureRule<T>, QuadratureError>
    where
        T: Real,
        E: ElementGeometry<T> + ?Sized,
    {
        let topology = element.topology();
        let dim = topology.dim().unwrap_or(0);
        self.generate(dim, topology, order, element.p_level())
    }
}
