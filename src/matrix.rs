/* ************************************************************************ **
** This file is part of fixed-linalg, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small fixed-size dense matrices.
//!
//! Storage is row-major: a `Matrix<X, R, C>` is conceptually `R` rows of `C`
//! elements each, and `(r, c)` indices address row `r`, column `c`.

use crate::error::{Error, Result};
use crate::traits::Scalar;

use std::convert::TryFrom;
use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{Zero, One};

/// A linear algebra dense matrix with `R` lines and `C` columns.
///
/// Elementwise arithmetic requires both operands to have the same shape,
/// and the matrix product requires the inner dimensions to agree; both are
/// checked by the type system.
///
/// ```compile_fail
/// use fixed_linalg::Matrix;
///
/// let a = Matrix::<f64, 2, 3>::filled(1.0);
/// let b = Matrix::<f64, 2, 3>::filled(1.0);
/// let _ = a * b;
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Matrix<X, const R: usize, const C: usize> {
    pub(crate) rows: [[X; C]; R],
}

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

impl<X: Scalar, const R: usize, const C: usize> Matrix<X, R, C> {
    const NONEMPTY: () = assert!(R > 0 && C > 0, "a matrix must have at least one line and one column");

    pub const LINES: usize = R;
    pub const COLUMNS: usize = C;

    /// Construct a matrix from a 2D array (of rows).
    #[inline(always)]
    pub fn from_array(rows: [[X; C]; R]) -> Self {
        let () = Self::NONEMPTY;
        Matrix { rows }
    }

    /// Construct a matrix from a function of `(row, col)`.
    ///
    /// ```
    /// use fixed_linalg::Matrix;
    ///
    /// let x = [2i32, 3];
    /// let mat: Matrix<_, 2, 4> = Matrix::from_fn(|r, c| x[r].pow(c as u32));
    /// assert_eq!(mat.into_array(), [
    ///     [1, 2, 4,  8],
    ///     [1, 3, 9, 27],
    /// ]);
    /// ```
    #[inline]
    pub fn from_fn<F>(mut f: F) -> Self
    where F: FnMut(usize, usize) -> X,
    { Self::from_array(std::array::from_fn(|r| std::array::from_fn(|c| f(r, c)))) }

    /// Cast into a plain `[[X; C]; R]`.
    #[inline(always)]
    pub fn into_array(self) -> [[X; C]; R]
    { self.rows }

    /// Borrow as a plain `&[[X; C]; R]`.
    #[inline(always)]
    pub fn as_array(&self) -> &[[X; C]; R]
    { &self.rows }

    /// Borrow as a plain `&mut [[X; C]; R]`.
    #[inline(always)]
    pub fn as_mut_array(&mut self) -> &mut [[X; C]; R]
    { &mut self.rows }

    /// Number of lines (rows).
    #[inline(always)]
    pub fn lines(&self) -> usize
    { R }

    /// Number of columns.
    #[inline(always)]
    pub fn columns(&self) -> usize
    { C }

    /// Iterate over the rows.
    #[inline(always)]
    pub fn iter(&self) -> std::slice::Iter<'_, [X; C]>
    { self.rows.iter() }

    /// Map each scalar element of a matrix.
    #[inline]
    pub fn map<B: Scalar, F>(self, mut f: F) -> Matrix<B, R, C>
    where F: FnMut(X) -> B,
    { Matrix::from_array(self.rows.map(|row| row.map(&mut f))) }

    /// Mutable reference to the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= R` or `col >= C`.
    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut X
    { &mut self[(row, col)] }

    /// Construct a matrix with every cell set to `value`.
    #[inline]
    pub fn filled(value: X) -> Self
    { Self::from_array([[value; C]; R]) }

    /// Copy out the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= R` or `col >= C`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> X
    { self[(row, col)] }

    /// Construct from a matrix of possibly different shape and element type.
    ///
    /// The overlapping top-left `min(R, L) × min(C, K)` block is copied;
    /// every other cell is `X::default()`.
    pub fn resized_from<Y, const L: usize, const K: usize>(other: &Matrix<Y, L, K>) -> Self
    where Y: Copy + Into<X>,
    {
        let mut out = Self::default();
        for (dest_row, src_row) in out.rows.iter_mut().zip(other.rows.iter()) {
            for (dest, &src) in dest_row.iter_mut().zip(src_row) {
                *dest = src.into();
            }
        }
        out
    }

    /// Truncate or pad with `X::default()` to a different shape.
    #[inline]
    pub fn resize<const L: usize, const K: usize>(&self) -> Matrix<X, L, K>
    { Matrix::resized_from(self) }

    /// Matrix transpose.
    #[inline]
    pub fn transpose(&self) -> Matrix<X, C, R>
    { Matrix::from_fn(|r, c| self.rows[c][r]) }
}

impl<X: Scalar + Zero + One, const N: usize> Matrix<X, N, N> {
    /// Construct the identity matrix.
    #[inline]
    pub fn eye() -> Self
    { Self::from_fn(|r, c| if r == c { X::one() } else { X::zero() }) }
}

// -------------------------- END PUBLIC API ---------------------------------

#[inline]
fn check_index((row, col): (usize, usize), lines: usize, columns: usize) {
    assert!(
        row < lines && col < columns,
        "index ({}, {}) out of range for {}x{} matrix", row, col, lines, columns,
    );
}

impl<X: Scalar, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<X, R, C> {
    type Output = X;

    #[inline]
    fn index(&self, index: (usize, usize)) -> &X {
        check_index(index, R, C);
        &self.rows[index.0][index.1]
    }
}

impl<X: Scalar, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<X, R, C> {
    #[inline]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut X {
        check_index(index, R, C);
        &mut self.rows[index.0][index.1]
    }
}

impl<X: Scalar, const R: usize, const C: usize> Default for Matrix<X, R, C> {
    #[inline]
    fn default() -> Self
    { Self::filled(X::default()) }
}

impl<X: Scalar + Zero, const R: usize, const C: usize> Zero for Matrix<X, R, C> {
    #[inline]
    fn zero() -> Self
    { Self::filled(X::zero()) }

    #[inline]
    fn is_zero(&self) -> bool
    { self.rows.iter().all(|row| row.iter().all(Zero::is_zero)) }
}

impl<X: Scalar + Zero + One, const N: usize> One for Matrix<X, N, N> {
    #[inline]
    fn one() -> Self
    { Self::eye() }
}

impl<X: Scalar, const R: usize, const C: usize> From<[[X; C]; R]> for Matrix<X, R, C> {
    #[inline(always)]
    fn from(rows: [[X; C]; R]) -> Self
    { Self::from_array(rows) }
}

/// Read a matrix from a flat, row-major slice of exactly `R * C` elements.
impl<'a, X: Scalar, const R: usize, const C: usize> TryFrom<&'a [X]> for Matrix<X, R, C> {
    type Error = Error;

    fn try_from(slice: &'a [X]) -> Result<Self> {
        if slice.len() != R * C {
            return Err(Error::ShapeMismatch { expected: R * C, actual: slice.len() });
        }
        Ok(Self::from_fn(|r, c| slice[r * C + c]))
    }
}

impl<'a, X: Scalar, const R: usize, const C: usize> IntoIterator for &'a Matrix<X, R, C> {
    type Item = &'a [X; C];
    type IntoIter = std::slice::Iter<'a, [X; C]>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.rows.iter() }
}

impl<X: Scalar + fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<X, R, C> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.rows, f) }
}

// ---------------------------------------------------------------------------
