use nalgebra::RealField;

pub use nalgebra;

pub mod geometry;
pub mod order;
pub mod topology;

pub use geometry::{ElementGeometry, MappingEvaluator};
pub use order::Order;
pub use topology::ElementTopology;

pub trait Real: RealField + Copy {}

impl<T: RealField + Copy> Real for T {}
