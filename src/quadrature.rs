//! Quadrature rules on reference elements.
//!
//! Rules are generated by [`generate`] for a `(dimension, topology, order)` triple and stored in a
//! [`QuadratureRule`]. Points are always three-dimensional; coordinates beyond the dimension of
//! the rule are zero.
use crate::nalgebra::{convert, Point3, Scalar};
use crate::{ElementTopology, Order, Real};
use femcore_quadrature::Rule;
use num::Zero;
use serde::{Deserialize, Serialize};
use std::iter::{FusedIterator, Zip};
use std::ops::{AddAssign, Mul};
use std::slice;

pub use crate::error::QuadratureError;
pub use gauss::generate;

mod gauss;

/// A quadrature rule consisting of weights and points.
pub trait Quadrature<T>
where
    T: Scalar,
{
    fn weights(&self) -> &[T];
    fn points(&self) -> &[Point3<T>];

    /// Approximates the integral of the given function using this quadrature rule.
    fn integrate<U, Function>(&self, f: Function) -> U
    where
        Function: Fn(&Point3<T>) -> U,
        U: Zero + Mul<T, Output = U> + AddAssign<U>,
    {
        let mut integral = U::zero();
        for (w, p) in self.weights().iter().zip(self.points()) {
            integral += f(p) * w.clone();
        }
        integral
    }

    fn iter(&self) -> QuadratureIter<T> {
        QuadratureIter {
            inner: self.weights().iter().zip(self.points().iter()),
        }
    }
}

impl<T, X> Quadrature<T> for &X
where
    T: Scalar,
    X: Quadrature<T>,
{
    fn weights(&self) -> &[T] {
        X::weights(self)
    }

    fn points(&self) -> &[Point3<T>] {
        X::points(self)
    }
}

impl<T, A, B> Quadrature<T> for (A, B)
where
    T: Scalar,
    A: AsRef<[T]>,
    B: AsRef<[Point3<T>]>,
{
    fn weights(&self) -> &[T] {
        self.0.as_ref()
    }

    fn points(&self) -> &[Point3<T>] {
        self.1.as_ref()
    }
}

/// Iterator over the `(weight, point)` pairs of a quadrature rule.
#[derive(Debug, Clone)]
pub struct QuadratureIter<'a, T>
where
    T: Scalar,
{
    inner: Zip<slice::Iter<'a, T>, slice::Iter<'a, Point3<T>>>,
}

impl<'a, T> Iterator for QuadratureIter<'a, T>
where
    T: Scalar,
{
    type Item = (&'a T, &'a Point3<T>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T: Scalar> ExactSizeIterator for QuadratureIter<'a, T> {}

impl<'a, T: Scalar> FusedIterator for QuadratureIter<'a, T> {}

/// An immutable quadrature rule for a reference element.
///
/// The rule integrates every polynomial of total degree at most [`QuadratureRule::order`] over
/// the reference shape of [`QuadratureRule::topology`] exactly, up to rounding. Consequently the
/// weights sum to the measure of the reference shape.
///
/// Deserialization checks that the stored data is consistent, see [`QuadratureError`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "SerializedRule<T>",
    bound(deserialize = "T: Scalar + Deserialize<'de>")
)]
pub struct QuadratureRule<T>
where
    T: Scalar,
{
    dim: usize,
    topology: ElementTopology,
    order: Order,
    weights: Vec<T>,
    points: Vec<Point3<T>>,
}

/// Unchecked rule data as read from a serialized rule.
#[derive(Deserialize)]
struct SerializedRule<T>
where
    T: Scalar,
{
    dim: usize,
    topology: ElementTopology,
    order: Order,
    weights: Vec<T>,
    points: Vec<Point3<T>>,
}

impl<T: Scalar> TryFrom<SerializedRule<T>> for QuadratureRule<T> {
    type Error = QuadratureError;

    fn try_from(rule: SerializedRule<T>) -> Result<Self, Self::Error> {
        let SerializedRule {
            dim,
            topology,
            order,
            weights,
            points,
        } = rule;
        if topology.dim() != Some(dim) {
            return Err(QuadratureError::UnsupportedTopology { dim, topology });
        }
        if weights.len() != points.len() {
            return Err(QuadratureError::InconsistentRule {
                num_weights: weights.len(),
                num_points: points.len(),
            });
        }
        Ok(Self {
            dim,
            topology,
            order,
            weights,
            points,
        })
    }
}

impl<T: Scalar> QuadratureRule<T> {
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The topology the rule was built for. Never [`ElementTopology::Invalid`]: rules requested
    /// without a topology report the default topology for their dimension.
    pub fn topology(&self) -> ElementTopology {
        self.topology
    }

    /// The polynomial degree integrated exactly.
    pub fn order(&self) -> Order {
        self.order
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Consumes the rule, returning its weights and points.
    pub fn into_parts(self) -> (Vec<T>, Vec<Point3<T>>) {
        (self.weights, self.points)
    }
}

impl<T: Real> QuadratureRule<T> {
    pub fn sum_of_weights(&self) -> T {
        self.weights.iter().fold(T::zero(), |sum, &w| sum + w)
    }
}

impl<T: Scalar> Quadrature<T> for QuadratureRule<T> {
    fn weights(&self) -> &[T] {
        &self.weights
    }

    fn points(&self) -> &[Point3<T>] {
        &self.points
    }
}

impl<'a, T: Scalar> IntoIterator for &'a QuadratureRule<T> {
    type Item = (&'a T, &'a Point3<T>);
    type IntoIter = QuadratureIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Converts an `f64` rule into a rule over `T`, padding points with zeros.
fn convert_rule<T, const D: usize>(rule: Rule<D>) -> (Vec<T>, Vec<Point3<T>>)
where
    T: Real,
{
    let (weights, points) = rule;
    let weights = weights.into_iter().map(convert).collect();
    let points = points
        .into_iter()
        .map(|p| {
            let mut padded = [0.0; 3];
            padded[..D].copy_from_slice(&p);
            Point3::from(padded).map(convert)
        })
        .collect();
    (weights, points)
}
