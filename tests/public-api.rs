/* ************************************************************************ **
** This file is part of fixed-linalg, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Behavior of the public API as seen by a downstream crate.

use fixed_linalg::{Matrix, RowVector, ColumnVector, Vector, VectorType, Error};
use fixed_linalg_assert_close::assert_close;

use rand::random;

#[test]
fn row_vector_sum_renders_on_one_line() {
    let a = RowVector::from_array([-5.0f64, -6.0]);
    let b = RowVector::<f64, 2>::filled(2.0);

    let sum = a + b;
    assert_eq!(sum.into_array(), [-3.0, -4.0]);
    assert_eq!(sum.to_string(), "-3,-4");
}

#[test]
fn transposed_column_scaled_renders_as_row() {
    let c = ColumnVector::from_array([1.0f64, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(c.to_string(), "1\n2\n3\n4\n5");

    let d = c.transpose() * 2.0;
    assert_eq!(d.vector_type(), VectorType::Row);
    assert_eq!(d.to_string(), "2,4,6,8,10");
}

#[test]
fn demo_walkthrough() {
    let mut a = RowVector::from_array([-5.0f64, -6.0]);
    assert_close!(61f64.sqrt(), a.magnitude());
    assert_close!(1.0, a.normal().magnitude());

    a.normalize();
    assert_close!(1.0, a.magnitude());
    assert_close!(abs=1e-12, [-5.0 / 61f64.sqrt(), -6.0 / 61f64.sqrt()], a.into_array());
}

#[test]
fn prop_double_transpose_is_identity() {
    for _ in 0..10 {
        let v = RowVector::<f64, 4>::from_array(random());
        let back: RowVector<f64, 4> = v.transpose().transpose();
        assert_eq!(back.vector_type(), v.vector_type());
        assert_eq!(back, v);

        let c = ColumnVector::<i64, 3>::from_array(random());
        assert_eq!(c.transpose().transpose(), c);
    }
}

#[test]
fn prop_magnitude_is_root_of_self_dot() {
    for _ in 0..10 {
        let v = ColumnVector::<f64, 6>::from_array(random());
        assert_close!(v.dot(&v).sqrt(), v.magnitude());
    }
}

#[test]
fn prop_normal_has_unit_length() {
    for _ in 0..10 {
        // shift away from zero so the magnitude is never tiny
        let v = RowVector::<f64, 3>::from_array(random()) + 0.5;
        assert_close!(rel=1e-12, 1.0, v.normal().magnitude());
        assert_close!(rel=1e-12, 1.0, v.try_normal().unwrap().magnitude());
    }
}

#[test]
fn prop_scalar_add_is_invertible() {
    for _ in 0..10 {
        let v = RowVector::<f64, 5>::from_array(random());
        let k: f64 = random::<f64>() * 100.0;
        assert_close!(abs=1e-12, v.into_array(), ((v + k) - k).into_array());

        let w = ColumnVector::<i32, 3>::from_array([7, -2, 11]);
        assert_eq!((w + 13) - 13, w);
    }
}

#[test]
fn prop_vector_add_commutes() {
    for _ in 0..10 {
        let a = ColumnVector::<f64, 4>::from_array(random());
        let b = ColumnVector::<f64, 4>::from_array(random());
        assert_eq!(a + b, b + a);
    }
}

#[test]
fn zero_vector_normalization_is_checked_or_nan() {
    let zero = RowVector::<f32, 2>::default();
    assert_eq!(zero.try_normal(), Err(Error::ZeroMagnitude));
    assert!(zero.normal().iter().all(|x| x.is_nan()));
}

#[test]
fn vector_resize_keeps_orientation() {
    let c = ColumnVector::from_array([1i32, 2, 3, 4, 5]);
    let short: ColumnVector<i32, 2> = Vector::resized_from(&c);
    let long: ColumnVector<i32, 6> = c.resize();
    assert_eq!(short.into_array(), [1, 2]);
    assert_eq!(long.into_array(), [1, 2, 3, 4, 5, 0]);
}

#[test]
fn matrix_copy_from_larger_truncates() {
    let big = Matrix::<f64, 3, 3>::filled(5.0);
    let small = Matrix::<f64, 2, 2>::resized_from(&big);
    assert_eq!(small, Matrix::filled(5.0));
    assert_eq!((small.lines(), small.columns()), (2, 2));
}

#[test]
fn matrix_copy_from_smaller_zero_extends() {
    let small = Matrix::<f64, 2, 2>::filled(7.0);
    let big = Matrix::<f64, 3, 3>::resized_from(&small);
    for r in 0..3 {
        for c in 0..3 {
            let expected = if r < 2 && c < 2 { 7.0 } else { 0.0 };
            assert_eq!(big.at(r, c), expected, "at ({}, {})", r, c);
        }
    }
}

#[test]
fn matrix_product_against_identity() {
    let m: Matrix<f64, 2, 3> = Matrix::from_fn(|r, c| (r * 3 + c) as f64);
    assert_eq!(Matrix::<f64, 2, 2>::eye() * m, m);
    assert_eq!(m * Matrix::<f64, 3, 3>::eye(), m);

    let gram: Matrix<f64, 2, 2> = m * m.transpose();
    assert_eq!(gram.into_array(), [[5.0, 14.0], [14.0, 50.0]]);
}

#[test]
#[should_panic(expected = "out of range")]
fn vector_index_equal_to_dimension_panics() {
    let v = RowVector::<f64, 2>::default();
    v.get(2);
}

#[test]
#[should_panic(expected = "out of range")]
fn vector_index_past_dimension_panics() {
    let mut v = ColumnVector::<f64, 5>::default();
    v[100] = 1.0;
}

#[test]
#[should_panic(expected = "out of range")]
fn matrix_index_past_bounds_panics() {
    let m = Matrix::<i32, 2, 2>::default();
    let _x = m[(0, 2)];
}
