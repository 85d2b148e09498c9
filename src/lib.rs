//! Quadrature rules and C1-continuous Hermite shape functions for finite element computations.
//!
//! The crate has two independent halves:
//!
//! - [`quadrature`] generates Gauss-type rules for every reference shape, keyed by dimension,
//!   [`ElementTopology`] and [`Order`].
//! - [`hermite`] evaluates the Hermite basis on edges. Since the slope degrees of freedom depend
//!   on the physical element, evaluation goes through an [`ElementGeometry`] and the Lagrange
//!   mapping in [`lagrange`].
pub mod element;
pub mod error;
pub mod hermite;
pub mod lagrange;
pub mod quadrature;
pub mod settings;

#[cfg(feature = "proptest")]
pub mod proptest;

pub use femcore_traits::{ElementGeometry, ElementTopology, MappingEvaluator, Order, Real};

pub extern crate nalgebra;
