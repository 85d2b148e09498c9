use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Polynomial order, used both for the degree of a basis or geometric mapping and for the
/// strength of a quadrature rule.
///
/// Orders are plain non-negative integers. The named constants cover the common cases, but any
/// order can be constructed with [`Order::new`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Order(u32);

impl Order {
    pub const CONSTANT: Self = Self(0);
    pub const FIRST: Self = Self(1);
    pub const SECOND: Self = Self(2);
    pub const THIRD: Self = Self(3);
    pub const FOURTH: Self = Self(4);
    pub const FIFTH: Self = Self(5);
    pub const SIXTH: Self = Self(6);
    pub const SEVENTH: Self = Self(7);
    pub const EIGHTH: Self = Self(8);
    pub const NINTH: Self = Self(9);
    pub const TENTH: Self = Self(10);

    pub const fn new(degree: u32) -> Self {
        Self(degree)
    }

    /// The polynomial degree represented by this order.
    pub const fn degree(self) -> u32 {
        self.0
    }

    /// The order raised by `increment`, e.g. by the p-refinement level of an element.
    ///
    /// Saturates at `u32::MAX` instead of overflowing.
    pub const fn elevated(self, increment: u32) -> Self {
        Self(self.0.saturating_add(increment))
    }
}

impl From<u32> for Order {
    fn from(degree: u32) -> Self {
        Self(degree)
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
