//! C1-continuous Hermite shape functions on edges.
//!
//! The local basis on the reference edge `[-1, 1]` consists of the raw polynomials in [`raw`].
//! Global shape functions are obtained from the raw ones by scaling the two slope-type degrees of
//! freedom with the derivative of the geometric mapping at the corresponding endpoint, so that
//! neighboring elements agree on the *physical* derivative at a shared node.
//!
//! The degrees of freedom of the cubic basis are ordered as
//!
//! | dof | meaning                       | raw index | scaling  |
//! |-----|-------------------------------|-----------|----------|
//! | 0   | value at `xi = -1`            | 0         | none     |
//! | 1   | slope at `xi = -1`            | 2         | `d1xd1x` |
//! | 2   | value at `xi = +1`            | 1         | none     |
//! | 3   | slope at `xi = +1`            | 3         | `d2xd2x` |
//! | >=4 | interior bubble               | same      | none     |
//!
//! Since the slope degrees of freedom are built from the physical mapping, these shape functions
//! cannot be evaluated from a reference point alone. See [`evaluate_reference`].
use crate::element::mapping_jacobian;
use crate::error::ShapeFunctionError;
use crate::lagrange::Lagrange1d;
use crate::nalgebra::{Point3, Scalar};
use crate::{ElementGeometry, ElementTopology, MappingEvaluator, Order, Real};
use log::trace;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

pub mod raw;

pub use raw::{hermite_raw_shape, hermite_raw_shape_deriv, hermite_raw_shape_second_deriv};

/// Derivatives `dx/dxi` of the geometric mapping at the two endpoints of the reference edge.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingCoefficients<T: Scalar> {
    /// Mapping derivative at `xi = -1`.
    pub d1xd1x: T,
    /// Mapping derivative at `xi = +1`.
    pub d2xd2x: T,
}

/// The quantity requested from a shape function.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShapeQuantity {
    Value,
    Derivative,
    SecondDerivative,
}

/// Computes the mapping coefficients of an edge element with its Lagrange mapping.
///
/// The coefficients are the x-components of the mapping derivative at `xi = -1` and `xi = +1`.
/// They are returned as is, without inversion.
///
/// # Panics
///
/// Panics if the element is inconsistent with its own mapping, for example when it reports a
/// mapping order for which its topology has no Lagrange shape functions.
pub fn compute_coefficients<T, E>(element: &E) -> MappingCoefficients<T>
where
    T: Real,
    E: ElementGeometry<T> + ?Sized,
{
    compute_coefficients_with(element, &Lagrange1d)
}

/// Same as [`compute_coefficients`], but with a custom mapping evaluator.
pub fn compute_coefficients_with<T, E, M>(element: &E, mapping: &M) -> MappingCoefficients<T>
where
    T: Real,
    E: ElementGeometry<T> + ?Sized,
    M: MappingEvaluator<T>,
{
    let dxdxi = |xi: T| mapping_jacobian(element, mapping, &Point3::new(xi, T::zero(), T::zero())).x;
    MappingCoefficients {
        d1xd1x: dxdxi(-T::one()),
        d2xd2x: dxdxi(T::one()),
    }
}

/// Computes the mapping coefficients of many elements in parallel.
///
/// The result is in the same order as `elements`.
pub fn par_compute_coefficients<T, E>(elements: &[E]) -> Vec<MappingCoefficients<T>>
where
    T: Real,
    E: ElementGeometry<T> + Sync,
{
    elements
        .par_iter()
        .map(|element| compute_coefficients(element))
        .collect()
}

/// Number of degrees of freedom of the Hermite basis of the given order on an edge.
pub fn n_dofs(order: Order) -> usize {
    order.degree() as usize + 1
}

/// Checks that a Hermite basis of total order `order` is implemented on `topology`.
fn check_configuration(order: Order, topology: ElementTopology) -> Result<(), ShapeFunctionError> {
    match (order, topology) {
        (Order::THIRD, ElementTopology::Edge2 | ElementTopology::Edge3) => Ok(()),
        _ => Err(ShapeFunctionError::UnsupportedConfiguration { order, topology }),
    }
}

fn raw_quantity<T: Real>(i: usize, quantity: ShapeQuantity, xi: T) -> T {
    match quantity {
        ShapeQuantity::Value => hermite_raw_shape(i, xi),
        ShapeQuantity::Derivative => hermite_raw_shape_deriv(i, xi),
        ShapeQuantity::SecondDerivative => hermite_raw_shape_second_deriv(i, xi),
    }
}

/// Maps a global degree of freedom to a scaled raw polynomial.
fn global_quantity<T: Real>(
    coefficients: &MappingCoefficients<T>,
    index: usize,
    quantity: ShapeQuantity,
    xi: T,
) -> T {
    match index {
        0 => raw_quantity(0, quantity, xi),
        1 => coefficients.d1xd1x * raw_quantity(2, quantity, xi),
        2 => raw_quantity(1, quantity, xi),
        3 => coefficients.d2xd2x * raw_quantity(3, quantity, xi),
        i => raw_quantity(i, quantity, xi),
    }
}

/// Evaluates a Hermite shape function from a reference point alone.
///
/// Always fails: the slope degrees of freedom depend on the physical element.
/// Use [`evaluate_physical`] or [`HermiteBasis`] instead.
pub fn evaluate_reference<T: Real>(
    _topology: ElementTopology,
    _order: Order,
    _index: usize,
    _quantity: ShapeQuantity,
    _point: &Point3<T>,
) -> Result<T, ShapeFunctionError> {
    Err(ShapeFunctionError::RequiresPhysicalElement)
}

/// Evaluates global Hermite shape function `index` of the given element at a reference point.
///
/// The total order is `order` raised by the p-level of the element. The mapping coefficients are
/// recomputed from the current element geometry on every call.
///
/// # Errors
///
/// Returns [`ShapeFunctionError::UnsupportedConfiguration`] unless the total order is
/// [`Order::THIRD`] and the element is an [`ElementTopology::Edge2`] or
/// [`ElementTopology::Edge3`].
pub fn evaluate_physical<T, E>(
    element: &E,
    order: Order,
    index: usize,
    quantity: ShapeQuantity,
    point: &Point3<T>,
) -> Result<T, ShapeFunctionError>
where
    T: Real,
    E: ElementGeometry<T> + ?Sized,
{
    let topology = element.topology();
    let total_order = order.elevated(element.p_level());
    check_configuration(total_order, topology)?;
    let coefficients = compute_coefficients(element);
    trace!("Evaluating Hermite {quantity:?} of dof {index} (order {total_order}, {topology})");
    Ok(global_quantity(&coefficients, index, quantity, point.x))
}

/// Value of global Hermite shape function `index`. See [`evaluate_physical`].
pub fn shape<T, E>(element: &E, order: Order, index: usize, point: &Point3<T>) -> Result<T, ShapeFunctionError>
where
    T: Real,
    E: ElementGeometry<T> + ?Sized,
{
    evaluate_physical(element, order, index, ShapeQuantity::Value, point)
}

/// Reference derivative of global Hermite shape function `index`. See [`evaluate_physical`].
pub fn shape_deriv<T, E>(element: &E, order: Order, index: usize, point: &Point3<T>) -> Result<T, ShapeFunctionError>
where
    T: Real,
    E: ElementGeometry<T> + ?Sized,
{
    evaluate_physical(element, order, index, ShapeQuantity::Derivative, point)
}

/// Second reference derivative of global Hermite shape function `index`. See
/// [`evaluate_physical`].
pub fn shape_second_deriv<T, E>(
    element: &E,
    order: Order,
    index: usize,
    point: &Point3<T>,
) -> Result<T, ShapeFunctionError>
where
    T: Real,
    E: ElementGeometry<T> + ?Sized,
{
    evaluate_physical(element, order, index, ShapeQuantity::SecondDerivative, point)
}

/// The Hermite basis of a single element, with cached mapping coefficients.
///
/// The basis borrows the element, so its geometry cannot change while the cached coefficients
/// are alive.
#[derive(Debug, Clone)]
pub struct HermiteBasis<'a, T, E>
where
    T: Scalar,
    E: ?Sized,
{
    element: &'a E,
    order: Order,
    coefficients: MappingCoefficients<T>,
}

impl<'a, T, E> HermiteBasis<'a, T, E>
where
    T: Real,
    E: ElementGeometry<T> + ?Sized,
{
    /// Prepares the basis of the given order for an element.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`evaluate_physical`].
    pub fn new(element: &'a E, order: Order) -> Result<Self, ShapeFunctionError> {
        let total_order = order.elevated(element.p_level());
        check_configuration(total_order, element.topology())?;
        Ok(Self {
            element,
            order: total_order,
            coefficients: compute_coefficients(element),
        })
    }

    pub fn element(&self) -> &'a E {
        self.element
    }

    /// The total order of the basis, including the p-level of the element.
    pub fn order(&self) -> Order {
        self.order
    }

    pub fn coefficients(&self) -> &MappingCoefficients<T> {
        &self.coefficients
    }

    pub fn n_dofs(&self) -> usize {
        n_dofs(self.order)
    }

    pub fn evaluate(&self, index: usize, quantity: ShapeQuantity, xi: T) -> T {
        global_quantity(&self.coefficients, index, quantity, xi)
    }

    pub fn value(&self, index: usize, xi: T) -> T {
        self.evaluate(index, ShapeQuantity::Value, xi)
    }

    pub fn derivative(&self, index: usize, xi: T) -> T {
        self.evaluate(index, ShapeQuantity::Derivative, xi)
    }

    pub fn second_derivative(&self, index: usize, xi: T) -> T {
        self.evaluate(index, ShapeQuantity::SecondDerivative, xi)
    }

    /// Evaluates shape functions `0 .. basis.len()` into `basis`.
    pub fn populate(&self, quantity: ShapeQuantity, xi: T, basis: &mut [T]) {
        for (i, phi) in basis.iter_mut().enumerate() {
            *phi = self.evaluate(i, quantity, xi);
        }
    }

    pub fn populate_values(&self, xi: T, basis: &mut [T]) {
        self.populate(ShapeQuantity::Value, xi, basis)
    }

    pub fn populate_derivatives(&self, xi: T, basis: &mut [T]) {
        self.populate(ShapeQuantity::Derivative, xi, basis)
    }

    pub fn populate_second_derivatives(&self, xi: T, basis: &mut [T]) {
        self.populate(ShapeQuantity::SecondDerivative, xi, basis)
    }

    /// Derivative of shape function `index` with respect to the physical x-coordinate.
    ///
    /// Obtained by dividing the reference derivative by the x-component of the mapping derivative
    /// at `xi`.
    pub fn physical_derivative(&self, index: usize, xi: T) -> T {
        let dxdxi = mapping_jacobian(self.element, &Lagrange1d, &Point3::new(xi, T::zero(), T::zero())).x;
        self.derivative(index, xi) / dxdxi
    }
}
