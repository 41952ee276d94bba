/* ************************************************************************ **
** This file is part of fixed-linalg, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::error::{Error, Result};
use crate::orientation::{Orientation, Row, Column, VectorType};
use crate::traits::{Scalar, Real, IntoReal};

use std::convert::TryFrom;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use num_traits::Zero;

/// A fixed-size vector with operations for linear algebra.
///
/// `N` is the dimension and `O` the orientation ([`Row`] or [`Column`]).
/// Both are part of the type, so arithmetic between vectors of different
/// length or orientation does not compile. There is no `*` between two
/// vectors; use [`dot`](Vector::dot).
///
/// ```compile_fail
/// use fixed_linalg::{RowVector, ColumnVector};
///
/// let a = RowVector::<f64, 2>::filled(1.0);
/// let c = ColumnVector::<f64, 5>::filled(1.0);
/// let _ = a * c;
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector<X, const N: usize, O> {
    pub(crate) data: [X; N],
    orientation: PhantomData<O>,
}

/// A vector rendered on one line.
pub type RowVector<X, const N: usize> = Vector<X, N, Row>;
/// A vector rendered one element per line.
pub type ColumnVector<X, const N: usize> = Vector<X, N, Column>;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

impl<X: Scalar, const N: usize, O: Orientation> Vector<X, N, O> {
    const NONEMPTY: () = assert!(N > 0, "a vector must have at least one element");

    /// The dimension, for use in const contexts.
    pub const DIMENSION: usize = N;

    /// Wrap an array. Elements are taken positionally.
    #[inline(always)]
    pub fn from_array(data: [X; N]) -> Self {
        let () = Self::NONEMPTY;
        Vector { data, orientation: PhantomData }
    }

    /// Construct a fixed-size vector from a function on indices.
    #[inline(always)]
    pub fn from_fn<F>(f: F) -> Self
    where F: FnMut(usize) -> X,
    { Self::from_array(std::array::from_fn(f)) }

    /// Cast into a plain `[X; N]`.
    #[inline(always)]
    pub fn into_array(self) -> [X; N]
    { self.data }

    /// Borrow as a plain `&[X; N]`.
    #[inline(always)]
    pub fn as_array(&self) -> &[X; N]
    { &self.data }

    /// Borrow as a plain `&mut [X; N]`.
    #[inline(always)]
    pub fn as_mut_array(&mut self) -> &mut [X; N]
    { &mut self.data }

    /// Number of elements.
    #[inline(always)]
    pub fn dimension(&self) -> usize
    { N }

    /// Whether this is a row or a column vector.
    #[inline(always)]
    pub fn vector_type(&self) -> VectorType
    { O::VECTOR_TYPE }

    #[inline(always)]
    pub fn iter(&self) -> std::slice::Iter<'_, X>
    { self.data.iter() }

    #[inline(always)]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, X>
    { self.data.iter_mut() }

    /// Apply a function to each element.
    #[inline]
    pub fn map<B: Scalar, F>(self, f: F) -> Vector<B, N, O>
    where F: FnMut(X) -> B,
    { Vector::from_array(self.data.map(f)) }

    /// Construct a vector with every element set to `value`.
    ///
    /// `Vector::default()` does the same with `X::default()`.
    #[inline]
    pub fn filled(value: X) -> Self
    { Self::from_array([value; N]) }

    /// Copy out the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline]
    pub fn get(&self, index: usize) -> X
    { self[index] }

    /// Construct from a vector of possibly different length and element type.
    ///
    /// The first `min(N, M)` elements are copied; any remaining elements are
    /// `X::default()`. The orientation must match; use `transpose` to change it.
    pub fn resized_from<Y, const M: usize>(other: &Vector<Y, M, O>) -> Self
    where Y: Copy + Into<X>,
    {
        let mut out = Self::default();
        for (dest, &src) in out.iter_mut().zip(other.data.iter()) {
            *dest = src.into();
        }
        out
    }

    /// Truncate or pad with `X::default()` to a different length.
    #[inline]
    pub fn resize<const M: usize>(&self) -> Vector<X, M, O>
    { Vector::resized_from(self) }

    /// The same elements with the opposite orientation.
    #[inline]
    pub fn transpose(&self) -> Vector<X, N, O::Transposed>
    { Vector::from_array(self.data) }

    /// Get the inner product of two vectors.
    #[inline]
    pub fn dot(&self, other: &Self) -> X {
        self.iter().zip(other.iter())
            .fold(X::default(), |acc, (&a, &b)| acc + a * b)
    }

    /// Get the vector's squared magnitude.
    ///
    /// For integer vectors this is computed in `X` and may overflow.
    #[inline]
    pub fn sqnorm(&self) -> X
    { self.dot(self) }
}

impl<X: IntoReal, const N: usize, O: Orientation> Vector<X, N, O> {
    /// Get the vector's Euclidean norm.
    ///
    /// Integer elements are converted to `f64` before squaring, so this works
    /// (and does not overflow) where `sqnorm` would.
    #[inline]
    pub fn magnitude(&self) -> X::Real {
        self.iter()
            .map(|&x| x.into_real())
            .fold(Default::default(), |acc: X::Real, x| acc + x * x)
            .sqrt()
    }
}

impl<X: Real, const N: usize, O: Orientation> Vector<X, N, O> {

    /// A vector of unit length with the same direction.
    ///
    /// The zero vector has no direction. Like division by a zero scalar, this
    /// follows the float semantics and produces NaNs; use `try_normal` to get
    /// an error instead.
    #[inline]
    pub fn normal(&self) -> Self {
        let norm = self.sqnorm().sqrt();
        if norm == X::default() {
            debug!("normalizing a zero-magnitude {}-dimensional vector", N);
        }
        self.map(|x| x / norm)
    }

    /// Normalize in place. Same caveat as `normal` regarding the zero vector.
    #[inline]
    pub fn normalize(&mut self)
    { *self = self.normal(); }

    /// Like `normal`, but fails on a vector of zero magnitude.
    pub fn try_normal(&self) -> Result<Self> {
        let norm = self.sqnorm().sqrt();
        if norm == X::default() {
            return Err(Error::ZeroMagnitude);
        }
        Ok(self.map(|x| x / norm))
    }
}

// -------------------------- END PUBLIC API ---------------------------------

#[inline]
fn check_index(index: usize, dim: usize) {
    assert!(index < dim, "index {} out of range for {}-dimensional vector", index, dim);
}

impl<X: Scalar, const N: usize, O: Orientation> Index<usize> for Vector<X, N, O> {
    type Output = X;

    #[inline]
    fn index(&self, index: usize) -> &X {
        check_index(index, N);
        &self.data[index]
    }
}

impl<X: Scalar, const N: usize, O: Orientation> IndexMut<usize> for Vector<X, N, O> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut X {
        check_index(index, N);
        &mut self.data[index]
    }
}

impl<X: Scalar, const N: usize, O: Orientation> Default for Vector<X, N, O> {
    #[inline]
    fn default() -> Self
    { Self::filled(X::default()) }
}

impl<X: Scalar + Zero, const N: usize, O: Orientation> Zero for Vector<X, N, O> {
    #[inline]
    fn zero() -> Self
    { Self::filled(X::zero()) }

    #[inline]
    fn is_zero(&self) -> bool
    { self.iter().all(Zero::is_zero) }
}

impl<X: Scalar, const N: usize, O: Orientation> From<[X; N]> for Vector<X, N, O> {
    #[inline(always)]
    fn from(data: [X; N]) -> Self
    { Self::from_array(data) }
}

impl<'a, X: Scalar, const N: usize, O: Orientation> TryFrom<&'a [X]> for Vector<X, N, O> {
    type Error = Error;

    fn try_from(slice: &'a [X]) -> Result<Self> {
        if slice.len() != N {
            return Err(Error::ShapeMismatch { expected: N, actual: slice.len() });
        }
        Ok(Self::from_fn(|i| slice[i]))
    }
}

impl<X: Scalar, const N: usize, O: Orientation> IntoIterator for Vector<X, N, O> {
    type Item = X;
    type IntoIter = std::array::IntoIter<X, N>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { IntoIterator::into_iter(self.data) }
}

impl<'a, X: Scalar, const N: usize, O: Orientation> IntoIterator for &'a Vector<X, N, O> {
    type Item = &'a X;
    type IntoIter = std::slice::Iter<'a, X>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.data.iter() }
}

impl<'a, X: Scalar, const N: usize, O: Orientation> IntoIterator for &'a mut Vector<X, N, O> {
    type Item = &'a mut X;
    type IntoIter = std::slice::IterMut<'a, X>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.data.iter_mut() }
}

// forward the debug impl without a surrounding "Vector { .. }", so that
// debug output reads like the array (and is valid JSON for floats)
impl<X: Scalar + fmt::Debug, const N: usize, O> fmt::Debug for Vector<X, N, O> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.data, f) }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction() {
        let v = RowVector::<f64, 3>::filled(2.5);
        assert_eq!(v.into_array(), [2.5; 3]);

        let v = ColumnVector::<i32, 4>::default();
        assert_eq!(v.into_array(), [0; 4]);
        assert!(v.is_zero());

        let v = RowVector::from_array([-5.0f64, -6.0]);
        assert_eq!(v.get(0), -5.0);
        assert_eq!(v.get(1), -6.0);

        let v: ColumnVector<usize, 3> = Vector::from_fn(|i| i * i);
        assert_eq!(v.into_array(), [0, 1, 4]);
    }

    #[test]
    fn resize_truncates_and_pads() {
        let v = RowVector::from_array([1, 2, 3, 4, 5]);
        assert_eq!(v.resize::<2>().into_array(), [1, 2]);
        assert_eq!(v.resize::<7>().into_array(), [1, 2, 3, 4, 5, 0, 0]);

        // element conversion rides along
        let w = RowVector::<f64, 3>::resized_from(&RowVector::from_array([1i32, -2]));
        assert_eq!(w.into_array(), [1.0, -2.0, 0.0]);
    }

    #[test]
    fn shape_queries() {
        let r = RowVector::<f32, 2>::default();
        let c = ColumnVector::<f32, 5>::default();
        assert_eq!((r.dimension(), r.vector_type()), (2, VectorType::Row));
        assert_eq!((c.dimension(), c.vector_type()), (5, VectorType::Column));
        assert_eq!(ColumnVector::<f32, 5>::DIMENSION, 5);
    }

    #[test]
    fn transpose_flips_orientation_only() {
        let c = ColumnVector::from_array([1, 2, 3]);
        let r: RowVector<i32, 3> = c.transpose();
        assert_eq!(r.vector_type(), VectorType::Row);
        assert_eq!(r.into_array(), c.into_array());
        assert_eq!(r.transpose(), c);
    }

    #[test]
    fn integer_magnitude_is_f64() {
        assert_eq!(RowVector::from_array([3i32, -4]).magnitude(), 5.0f64);
        // the squared norm of this does not fit in a u8
        let v = ColumnVector::from_array([200u8, 200]);
        assert_close!(200.0 * 2f64.sqrt(), v.magnitude());
    }

    #[test]
    fn norms() {
        let v = RowVector::from_array([3.0f64, 4.0]);
        assert_eq!(v.sqnorm(), 25.0);
        assert_close!(5.0, v.magnitude());
        assert_close!(abs=1e-12, [0.6, 0.8], v.normal().into_array());

        let mut w = v;
        w.normalize();
        assert_eq!(w, v.normal());

        assert_eq!(RowVector::from_array([1, 2, 3]).sqnorm(), 14);
        assert_eq!(RowVector::from_array([1, 2, 3]).dot(&RowVector::from_array([4, 5, 6])), 32);
    }

    #[test]
    fn zero_vector_normalization() {
        let zero = ColumnVector::<f64, 3>::default();
        assert!(zero.normal().iter().all(|x| x.is_nan()));
        assert_eq!(zero.try_normal(), Err(Error::ZeroMagnitude));

        let mut z = zero;
        z.normalize();
        assert!(z.iter().all(|x| x.is_nan()));

        let v = ColumnVector::from_array([0.0f64, 2.0, 0.0]);
        assert_eq!(v.try_normal().unwrap().into_array(), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn indexing() {
        let mut v = RowVector::from_array([1, 2, 3]);
        v[1] = 20;
        *v.iter_mut().last().unwrap() += 10;
        assert_eq!(v.into_array(), [1, 20, 13]);
        assert_eq!(v[2], 13);
    }

    #[test]
    #[should_panic(expected = "index 3 out of range for 3-dimensional vector")]
    fn index_at_dimension_panics() {
        let v = RowVector::from_array([1, 2, 3]);
        let _x = v[3];
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn get_past_dimension_panics() {
        ColumnVector::<f64, 2>::default().get(17);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_mut_past_dimension_panics() {
        let mut v = ColumnVector::<f64, 2>::default();
        v[2] = 1.0;
    }

    #[test]
    fn from_slice() {
        let v = RowVector::<i32, 3>::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(v.into_array(), [1, 2, 3]);

        assert_eq!(
            RowVector::<i32, 3>::try_from(&[1, 2][..]),
            Err(Error::ShapeMismatch { expected: 3, actual: 2 }),
        );
    }

    #[test]
    fn iteration_and_map() {
        let v = RowVector::from_array([1, 2, 3]);
        assert_eq!(v.into_iter().sum::<i32>(), 6);
        assert_eq!((&v).into_iter().count(), 3);
        assert_eq!(v.map(|x| x as f64 / 2.0).into_array(), [0.5, 1.0, 1.5]);
    }

    #[test]
    fn debug_looks_like_array() {
        assert_eq!(format!("{:?}", RowVector::from_array([1.0f64, 2.5])), "[1.0, 2.5]");
    }
}
