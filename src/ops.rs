/* ************************************************************************ **
** This file is part of fixed-linalg, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::matrix::Matrix;
use crate::orientation::Orientation;
use crate::traits::Scalar;
use crate::vector::Vector;

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub, Mul, Div, Neg};
use std::ops::{AddAssign, SubAssign, MulAssign, DivAssign};

// ---------------------------------------------------------------------------
// vector-vector ops

// NOTE: Operator impls are between same-typed vectors, rather than e.g.
//       Vector<T, N, O> and Vector<U, N, O> where T: Add<U>.
macro_rules! impl_v_add_sub {
    ($( [$($lt:lifetime)*] $Lhs:ty, $Rhs:ty; )+) => {$(
        // vector + vector
        impl<$($lt,)* X: Scalar, const N: usize, O: Orientation> Add<$Rhs> for $Lhs {
            type Output = Vector<X, N, O>;

            #[inline]
            fn add(self, other: $Rhs) -> Self::Output
            { Vector::from_fn(|k| self.data[k] + other.data[k]) }
        }

        // vector - vector
        impl<$($lt,)* X: Scalar, const N: usize, O: Orientation> Sub<$Rhs> for $Lhs {
            type Output = Vector<X, N, O>;

            #[inline]
            fn sub(self, other: $Rhs) -> Self::Output
            { Vector::from_fn(|k| self.data[k] - other.data[k]) }
        }
    )+};
}

impl_v_add_sub!{
    [] Vector<X, N, O>, Vector<X, N, O>;
    ['b] Vector<X, N, O>, &'b Vector<X, N, O>;
    ['a] &'a Vector<X, N, O>, Vector<X, N, O>;
    ['a 'b] &'a Vector<X, N, O>, &'b Vector<X, N, O>;
}

// ---------------------------------------------------------------------------
// vector `op` scalar

macro_rules! impl_v_scalar_ops {
    ($( [$($lt:lifetime)*] $Lhs:ty; )+) => {$(
        impl<$($lt,)* X: Scalar, const N: usize, O: Orientation> Add<X> for $Lhs {
            type Output = Vector<X, N, O>;

            #[inline]
            fn add(self, scalar: X) -> Self::Output
            { self.map_ref(|x| x + scalar) }
        }

        impl<$($lt,)* X: Scalar, const N: usize, O: Orientation> Sub<X> for $Lhs {
            type Output = Vector<X, N, O>;

            #[inline]
            fn sub(self, scalar: X) -> Self::Output
            { self.map_ref(|x| x - scalar) }
        }

        impl<$($lt,)* X: Scalar, const N: usize, O: Orientation> Mul<X> for $Lhs {
            type Output = Vector<X, N, O>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { self.map_ref(|x| x * scalar) }
        }

        // Division by zero is not intercepted; floats give inf/NaN, integers panic.
        impl<$($lt,)* X: Scalar, const N: usize, O: Orientation> Div<X> for $Lhs {
            type Output = Vector<X, N, O>;

            #[inline]
            fn div(self, scalar: X) -> Self::Output
            { self.map_ref(|x| x / scalar) }
        }
    )+};
}

impl_v_scalar_ops!{
    [] Vector<X, N, O>;
    ['a] &'a Vector<X, N, O>;
}

impl<X: Scalar, const N: usize, O: Orientation> Vector<X, N, O> {
    #[inline(always)]
    fn map_ref<F>(&self, f: F) -> Self
    where F: FnMut(X) -> X,
    { self.map(f) }
}

// ---------------------------------------------------------------------------
// vector unary ops

impl<X: Scalar + Neg<Output=X>, const N: usize, O: Orientation> Neg for Vector<X, N, O> {
    type Output = Vector<X, N, O>;

    #[inline]
    fn neg(self) -> Self::Output
    { self.map(|x| -x) }
}

impl<'a, X: Scalar + Neg<Output=X>, const N: usize, O: Orientation> Neg for &'a Vector<X, N, O> {
    type Output = Vector<X, N, O>;

    #[inline]
    fn neg(self) -> Self::Output
    { self.map_ref(|x| -x) }
}

// ---------------------------------------------------------------------------
// matrix-matrix elementwise ops

macro_rules! impl_m_add_sub {
    ($( [$($lt:lifetime)*] $Lhs:ty, $Rhs:ty; )+) => {$(
        // matrix + matrix
        impl<$($lt,)* X: Scalar, const R: usize, const C: usize> Add<$Rhs> for $Lhs {
            type Output = Matrix<X, R, C>;

            #[inline]
            fn add(self, other: $Rhs) -> Self::Output
            { Matrix::from_fn(|r, c| self.rows[r][c] + other.rows[r][c]) }
        }

        // matrix - matrix
        impl<$($lt,)* X: Scalar, const R: usize, const C: usize> Sub<$Rhs> for $Lhs {
            type Output = Matrix<X, R, C>;

            #[inline]
            fn sub(self, other: $Rhs) -> Self::Output
            { Matrix::from_fn(|r, c| self.rows[r][c] - other.rows[r][c]) }
        }
    )+};
}

impl_m_add_sub!{
    [] Matrix<X, R, C>, Matrix<X, R, C>;
    ['b] Matrix<X, R, C>, &'b Matrix<X, R, C>;
    ['a] &'a Matrix<X, R, C>, Matrix<X, R, C>;
    ['a 'b] &'a Matrix<X, R, C>, &'b Matrix<X, R, C>;
}

// ---------------------------------------------------------------------------
// matrix `op` scalar

macro_rules! impl_m_scalar_ops {
    ($( [$($lt:lifetime)*] $Lhs:ty; )+) => {$(
        impl<$($lt,)* X: Scalar, const R: usize, const C: usize> Add<X> for $Lhs {
            type Output = Matrix<X, R, C>;

            #[inline]
            fn add(self, scalar: X) -> Self::Output
            { self.map_ref(|x| x + scalar) }
        }

        impl<$($lt,)* X: Scalar, const R: usize, const C: usize> Sub<X> for $Lhs {
            type Output = Matrix<X, R, C>;

            #[inline]
            fn sub(self, scalar: X) -> Self::Output
            { self.map_ref(|x| x - scalar) }
        }

        impl<$($lt,)* X: Scalar, const R: usize, const C: usize> Mul<X> for $Lhs {
            type Output = Matrix<X, R, C>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { self.map_ref(|x| x * scalar) }
        }

        impl<$($lt,)* X: Scalar, const R: usize, const C: usize> Div<X> for $Lhs {
            type Output = Matrix<X, R, C>;

            #[inline]
            fn div(self, scalar: X) -> Self::Output
            { self.map_ref(|x| x / scalar) }
        }
    )+};
}

impl_m_scalar_ops!{
    [] Matrix<X, R, C>;
    ['a] &'a Matrix<X, R, C>;
}

impl<X: Scalar, const R: usize, const C: usize> Matrix<X, R, C> {
    #[inline(always)]
    fn map_ref<F>(&self, f: F) -> Self
    where F: FnMut(X) -> X,
    { self.map(f) }
}

impl<X: Scalar + Neg<Output=X>, const R: usize, const C: usize> Neg for Matrix<X, R, C> {
    type Output = Matrix<X, R, C>;

    #[inline]
    fn neg(self) -> Self::Output
    { self.map(|x| -x) }
}

impl<'a, X: Scalar + Neg<Output=X>, const R: usize, const C: usize> Neg for &'a Matrix<X, R, C> {
    type Output = Matrix<X, R, C>;

    #[inline]
    fn neg(self) -> Self::Output
    { self.map_ref(|x| -x) }
}

// ---------------------------------------------------------------------------
// matrix * matrix

// This is the usual inner-product definition, `(A B)[i][j] = sum_k A[i][k] B[k][j]`,
// so the inner dimensions must agree and the output is `R x C`.
//
// NOTE: It is not the cell-wise `C[i][j] = A[i][j] * B[j][i]`, which multiplies
//       a single pair of cells with no summation over an inner dimension.
//       That product is not provided under any name.
macro_rules! impl_mat_mat_mul {
    ($( [$($lt:lifetime)*] $Lhs:ty, $Rhs:ty; )+) => {$(
        impl<$($lt,)* X: Scalar, const R: usize, const K: usize, const C: usize> Mul<$Rhs> for $Lhs {
            type Output = Matrix<X, R, C>;

            #[inline]
            fn mul(self, other: $Rhs) -> Self::Output {
                Matrix::from_fn(|r, c| {
                    (0..K).fold(X::default(), |acc, k| acc + self.rows[r][k] * other.rows[k][c])
                })
            }
        }
    )+};
}

impl_mat_mat_mul!{
    [] Matrix<X, R, K>, Matrix<X, K, C>;
    ['b] Matrix<X, R, K>, &'b Matrix<X, K, C>;
    ['a] &'a Matrix<X, R, K>, Matrix<X, K, C>;
    ['a 'b] &'a Matrix<X, R, K>, &'b Matrix<X, K, C>;
}

// ---------------------------------------------------------------------------
// scalar * vector, scalar * matrix

// NOTE: the orphan rules prevent us from impl-ing these ops "for X" so
//       we must generate a separate impl for each primitive type rather than
//       being generic over X: Scalar
macro_rules! impl_scalar_lhs_mul {
    ($($T:ty)*) => {$(
        impl<const N: usize, O: Orientation> Mul<Vector<$T, N, O>> for $T {
            type Output = Vector<$T, N, O>;

            #[inline(always)]
            fn mul(self, vector: Vector<$T, N, O>) -> Self::Output
            { vector * self }
        }

        impl<'a, const N: usize, O: Orientation> Mul<&'a Vector<$T, N, O>> for $T {
            type Output = Vector<$T, N, O>;

            #[inline(always)]
            fn mul(self, vector: &'a Vector<$T, N, O>) -> Self::Output
            { vector * self }
        }

        impl<const R: usize, const C: usize> Mul<Matrix<$T, R, C>> for $T {
            type Output = Matrix<$T, R, C>;

            #[inline(always)]
            fn mul(self, matrix: Matrix<$T, R, C>) -> Self::Output
            { matrix * self }
        }

        impl<'a, const R: usize, const C: usize> Mul<&'a Matrix<$T, R, C>> for $T {
            type Output = Matrix<$T, R, C>;

            #[inline(always)]
            fn mul(self, matrix: &'a Matrix<$T, R, C>) -> Self::Output
            { matrix * self }
        }
    )*};
}

impl_scalar_lhs_mul!{
    f32 f64
    i8 i16 i32 i64 i128 isize
    u8 u16 u32 u64 u128 usize
}

// ---------------------------------------------------------------------------
// assign ops (general)

// `vector += vector` and `vector += scalar` both fall out of the by-reference
// binary impls, and likewise for matrices.
macro_rules! impl_assign_ops {
    ($( [$($generics:tt)*] $T:ty; )+) => {$(
        impl<$($generics)*, B> AddAssign<B> for $T where for<'a> &'a Self: Add<B, Output=Self> {
            #[inline(always)]
            fn add_assign(&mut self, rhs: B)
            { *self = &*self + rhs; }
        }

        impl<$($generics)*, B> SubAssign<B> for $T where for<'a> &'a Self: Sub<B, Output=Self> {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: B)
            { *self = &*self - rhs; }
        }

        // vector *= scalar;
        // matrix *= square matrix;
        impl<$($generics)*, B> MulAssign<B> for $T where for<'a> &'a Self: Mul<B, Output=Self> {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: B)
            { *self = &*self * rhs; }
        }

        impl<$($generics)*, B> DivAssign<B> for $T where for<'a> &'a Self: Div<B, Output=Self> {
            #[inline(always)]
            fn div_assign(&mut self, rhs: B)
            { *self = &*self / rhs; }
        }
    )+};
}

impl_assign_ops!{
    [X, const N: usize, O: Orientation] Vector<X, N, O>;
    [X, const R: usize, const C: usize] Matrix<X, R, C>;
}

// ---------------------------------------------------------------------------
// stdlib integration

impl<X: Scalar, const N: usize, O: Orientation> Sum for Vector<X, N, O> {
    fn sum<I: Iterator<Item=Vector<X, N, O>>>(iter: I) -> Self
    { iter.fold(Vector::default(), |a, b| a + b) }
}

impl<'a, X: Scalar, const N: usize, O: Orientation> Sum<&'a Vector<X, N, O>> for Vector<X, N, O> {
    fn sum<I: Iterator<Item=&'a Vector<X, N, O>>>(iter: I) -> Self
    { iter.fold(Vector::default(), |a, b| a + b) }
}

impl<X: Scalar, const R: usize, const C: usize> Sum for Matrix<X, R, C> {
    fn sum<I: Iterator<Item=Matrix<X, R, C>>>(iter: I) -> Self
    { iter.fold(Matrix::default(), |a, b| a + b) }
}

impl<'a, X: Scalar, const R: usize, const C: usize> Sum<&'a Matrix<X, R, C>> for Matrix<X, R, C> {
    fn sum<I: Iterator<Item=&'a Matrix<X, R, C>>>(iter: I) -> Self
    { iter.fold(Matrix::default(), |a, b| a + b) }
}

// ---------------------------------------------------------------------------

// fmt traits apply the format to each element, so that e.g. `{:.3}` works.
//
// A row vector is written on one line as `1,2,3`; a column vector is written
// one element per line. Matrices are written one row per line.
macro_rules! impl_fmt {
    ($($Format:ident)*) => {$(
        impl<X: Scalar + fmt::$Format, const N: usize, O: Orientation> fmt::$Format for Vector<X, N, O> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_joined(f, &self.data, O::SEPARATOR, <X as fmt::$Format>::fmt)
            }
        }

        impl<X: Scalar + fmt::$Format, const R: usize, const C: usize> fmt::$Format for Matrix<X, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for (i, row) in self.rows.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    write_joined(f, row, ",", <X as fmt::$Format>::fmt)?;
                }
                Ok(())
            }
        }
    )*};
}

impl_fmt!{ Display LowerExp UpperExp }

fn write_joined<X>(
    f: &mut fmt::Formatter<'_>,
    items: &[X],
    sep: &str,
    mut write_item: impl FnMut(&X, &mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    for (i, x) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write_item(x, f)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::{Matrix, RowVector, ColumnVector};

    #[test]
    fn vec_vec() {
        let a = RowVector::from_array([-5.0f64, -6.0]);
        let b = RowVector::<f64, 2>::filled(2.0);
        assert_eq!((a + b).into_array(), [-3.0, -4.0]);
        assert_eq!((&a - &b).into_array(), [-7.0, -8.0]);
        assert_eq!(a + &b, &a + b);

        let mut c = a;
        c += b;
        c -= &a;
        assert_eq!(c, b);
    }

    #[test]
    fn vec_scalar() {
        let v = ColumnVector::from_array([1i32, 2, 3]);
        assert_eq!((v + 1).into_array(), [2, 3, 4]);
        assert_eq!((&v - 1).into_array(), [0, 1, 2]);
        assert_eq!((v * 3).into_array(), [3, 6, 9]);
        assert_eq!((v / 2).into_array(), [0, 1, 1]);
        assert_eq!(3 * v, v * 3);
        assert_eq!(2.0 * RowVector::from_array([0.5f64, 1.0]), RowVector::from_array([1.0, 2.0]));

        let mut w = v;
        w *= 2;
        w += 1;
        w /= 3;
        w -= 1;
        assert_eq!(w.into_array(), [0, 0, 1]);
    }

    #[test]
    fn division_by_zero_scalar_follows_floats() {
        let v = RowVector::from_array([1.0f64, -1.0, 0.0]) / 0.0;
        assert_eq!(v[0], std::f64::INFINITY);
        assert_eq!(v[1], std::f64::NEG_INFINITY);
        assert!(v[2].is_nan());
    }

    #[test]
    #[should_panic]
    fn integer_division_by_zero_panics() {
        let zero = std::hint::black_box(0);
        let _ = RowVector::from_array([1, 2]) / zero;
    }

    #[test]
    fn neg_and_sum() {
        let vs = vec![
            RowVector::from_array([1, 2]),
            RowVector::from_array([3, 4]),
            RowVector::from_array([5, 6]),
        ];
        assert_eq!(vs.iter().sum::<RowVector<i32, 2>>().into_array(), [9, 12]);
        assert_eq!((-vs.into_iter().sum::<RowVector<i32, 2>>()).into_array(), [-9, -12]);
        assert_eq!((-&Matrix::from_array([[1, -2]])).into_array(), [[-1, 2]]);
    }

    #[test]
    fn mat_scalar_and_elementwise() {
        let m = Matrix::from_array([[1.0f64, 2.0], [3.0, 4.0]]);
        assert_eq!((m + 1.0).into_array(), [[2.0, 3.0], [4.0, 5.0]]);
        assert_eq!((m - 1.0).into_array(), [[0.0, 1.0], [2.0, 3.0]]);
        assert_eq!((m * 2.0).into_array(), [[2.0, 4.0], [6.0, 8.0]]);
        assert_eq!((m / 2.0).into_array(), [[0.5, 1.0], [1.5, 2.0]]);
        assert_eq!(2.0 * &m, m * 2.0);
        assert_eq!((m + m).into_array(), (m * 2.0).into_array());
        assert_eq!((&m - m).into_array(), [[0.0; 2]; 2]);

        let mut n = m;
        n += m;
        n -= 1.0;
        n *= 0.5;
        n /= 0.5;
        assert_eq!(n.into_array(), [[1.0, 3.0], [5.0, 7.0]]);
    }

    #[test]
    fn mat_mat() {
        let eye2 = Matrix::<i32, 2, 2>::eye();
        let eye3 = Matrix::<i32, 3, 3>::eye();

        let a = Matrix::from_array([
            [1, 2, 3],
            [4, 5, 6],
        ]);

        let b = Matrix::from_array([
            [1,  1],
            [1, -1],
            [0,  1],
        ]);

        let a_dot_b = Matrix::from_array([
            [3, 2],
            [9, 5],
        ]);

        assert_eq!(a, &eye2 * &a);
        assert_eq!(a, a * eye3);
        assert_eq!(a_dot_b, &a * &b);
        assert_eq!(a_dot_b, a * b);

        let mut sq = a_dot_b;
        sq *= eye2;
        assert_eq!(sq, a_dot_b);
    }

    #[test]
    fn mat_mat_is_not_elementwise() {
        let a = Matrix::from_array([[1, 2], [3, 4]]);
        let b = Matrix::from_array([[5, 6], [7, 8]]);
        assert_eq!((a * b).into_array(), [[19, 22], [43, 50]]);
        assert_ne!(a * b, b * a);

        let cellwise = Matrix::from_fn(|i, j| a[(i, j)] * b[(j, i)]);
        assert_eq!(cellwise.into_array(), [[5, 14], [18, 32]]);
        assert_ne!(a * b, cellwise);
    }

    #[test]
    fn display_row() {
        let v = RowVector::from_array([-3.0f64, -4.0]);
        assert_eq!(v.to_string(), "-3,-4");
        assert_eq!(format!("{:.2}", RowVector::from_array([0.5f64, 1.0 / 3.0])), "0.50,0.33");
    }

    #[test]
    fn display_column() {
        let v = ColumnVector::from_array([1, 2, 3]);
        assert_eq!(v.to_string(), "1\n2\n3");
        assert_eq!(ColumnVector::from_array([7]).to_string(), "7");
    }

    #[test]
    fn display_exp() {
        let v = RowVector::from_array([1500.0f64, 0.25]);
        assert_eq!(format!("{:e}", v), "1.5e3,2.5e-1");
        assert_eq!(format!("{:E}", v), "1.5E3,2.5E-1");
    }

    #[test]
    fn display_matrix() {
        let m = Matrix::from_array([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.to_string(), "1,2,3\n4,5,6");
    }
}
