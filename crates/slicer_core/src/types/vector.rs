//! Dynamically-sized numeric vector type.
//!
//! [`VecN`] backs both value kinds that flow through this workspace: points
//! in the periodic unit domain `[0,1)^d` and unit-length projection
//! directions in `R^d`. The dimension is a runtime property, fixed at
//! construction.

use num_traits::Float;
use std::ops::{Index, IndexMut, Sub};

/// Dynamically-sized vector over any floating-point type.
///
/// # Type Parameters
///
/// * `T` - Floating-point component type (e.g., `f64`)
///
/// # Invariants
///
/// The dimension is at least 1 and never changes after construction.
///
/// # Examples
///
/// ```
/// use slicer_core::types::VecN;
///
/// let v = VecN::from_vec(vec![3.0_f64, 4.0]);
/// assert_eq!(v.dim(), 2);
/// assert!((v.norm() - 5.0).abs() < 1e-12);
///
/// let unit = v.normalized();
/// assert!((unit.norm() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VecN<T: Float> {
    components: Vec<T>,
}

impl<T: Float> VecN<T> {
    /// Create a zero vector of the given dimension.
    ///
    /// # Panics
    ///
    /// Panics if `dim == 0`.
    pub fn zeros(dim: usize) -> Self {
        assert!(dim > 0, "dimension must be positive");
        Self {
            components: vec![T::zero(); dim],
        }
    }

    /// Create a vector from its components.
    ///
    /// # Panics
    ///
    /// Panics if `components` is empty.
    pub fn from_vec(components: Vec<T>) -> Self {
        assert!(!components.is_empty(), "dimension must be positive");
        Self { components }
    }

    /// Returns the dimension (number of components).
    #[inline]
    pub fn dim(&self) -> usize {
        self.components.len()
    }

    /// Returns the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.components
    }

    /// Returns a mutable slice of the components.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.components
    }

    /// Returns an iterator over the components.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.components.iter()
    }

    /// Returns the squared Euclidean norm.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.components
            .iter()
            .fold(T::zero(), |acc, &c| acc + c * c)
    }

    /// Returns the Euclidean norm.
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Scale every component by `factor` in place.
    pub fn scale(&mut self, factor: T) {
        for c in self.components.iter_mut() {
            *c = *c * factor;
        }
    }

    /// Normalize to unit Euclidean norm in place.
    ///
    /// The zero vector has no direction; normalizing it is a caller error
    /// and is caught in debug builds.
    pub fn normalize(&mut self) {
        let n = self.norm();
        debug_assert!(n > T::zero(), "cannot normalize a zero vector");
        self.scale(T::one() / n);
    }

    /// Returns this vector normalized to unit Euclidean norm.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }
}

impl<T: Float> Index<usize> for VecN<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.components[index]
    }
}

impl<T: Float> IndexMut<usize> for VecN<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.components[index]
    }
}

impl<T: Float> Sub for &VecN<T> {
    type Output = VecN<T>;

    /// Component-wise difference. Panics if dimensions differ.
    fn sub(self, rhs: &VecN<T>) -> VecN<T> {
        assert_eq!(self.dim(), rhs.dim(), "dimension mismatch");
        VecN::from_vec(
            self.components
                .iter()
                .zip(rhs.components.iter())
                .map(|(&a, &b)| a - b)
                .collect(),
        )
    }
}

impl<T: Float> From<Vec<T>> for VecN<T> {
    fn from(components: Vec<T>) -> Self {
        Self::from_vec(components)
    }
}
