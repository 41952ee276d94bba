/* ************************************************************************ **
** This file is part of fixed-linalg, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Add, Sub, Mul, Div};

/// Trait for element types of [`Vector`](crate::Vector) and [`Matrix`](crate::Matrix).
///
/// Any `Copy` type that can be added, subtracted, multiplied and divided
/// with itself qualifies.
/// `Default::default()` serves as the zero of the type: it is the fill value of
/// a default-constructed vector or matrix, and the starting point of sums.
///
/// This is blanket-implemented and cannot be implemented manually.
pub trait Scalar
    : Copy + Default + PartialEq
    + Add<Self, Output=Self>
    + Sub<Self, Output=Self>
    + Mul<Self, Output=Self>
    + Div<Self, Output=Self>
{ }

impl<T> Scalar for T
where
    T: Copy + Default + PartialEq,
    T: Add<T, Output=T> + Sub<T, Output=T> + Mul<T, Output=T> + Div<T, Output=T>,
{ }

pub use self::real::Real;
mod real {
    use super::Scalar;

    /// Trait for scalars with a square root.
    ///
    /// Required for normalization. It's currently just the primitive floats;
    /// integer vectors get their magnitude through [`IntoReal`](super::IntoReal).
    ///
    /// This trait is sealed to avoid accidental commitments.
    pub trait Real: Scalar + PartialOrd + Sealed {
        fn sqrt(self) -> Self;
    }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

macro_rules! impl_real {
    ($($T:ty)*) => {$(
        impl Real for $T {
            #[inline(always)] fn sqrt(self) -> $T { <$T>::sqrt(self) }
        }
        impl real::Sealed for $T { }
    )*};
}

impl_real!{ f32 f64 }

/// Scalars whose magnitude can be taken, after conversion to a [`Real`].
///
/// Floats convert to themselves; integers convert to `f64`, which is exact for
/// magnitudes up to 2^53.
pub trait IntoReal: Scalar {
    type Real: Real;

    fn into_real(self) -> Self::Real;
}

macro_rules! impl_into_real {
    ($($T:ty => $R:ty,)*) => {$(
        impl IntoReal for $T {
            type Real = $R;

            #[inline(always)] fn into_real(self) -> $R { self as $R }
        }
    )*};
}

impl_into_real!{
    f32 => f32, f64 => f64,
    i8 => f64, i16 => f64, i32 => f64, i64 => f64, i128 => f64, isize => f64,
    u8 => f64, u16 => f64, u32 => f64, u64 => f64, u128 => f64, usize => f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_of<X: Scalar>(xs: &[X]) -> X {
        xs.iter().fold(X::default(), |acc, &x| acc + x)
    }

    #[test]
    fn primitives_are_scalars() {
        assert_eq!(sum_of(&[1u8, 2, 3]), 6);
        assert_eq!(sum_of(&[-1i64, 2, -3]), -2);
        assert_eq!(sum_of(&[0.5f32, 0.25]), 0.75);
    }

    #[test]
    fn into_real() {
        assert_eq!(7u8.into_real(), 7.0f64);
        assert_eq!((-3i64).into_real(), -3.0f64);
        assert_eq!(0.5f32.into_real(), 0.5f32);
    }

    #[test]
    fn real_sqrt() {
        assert_eq!(Real::sqrt(16.0f64), 4.0);
        assert_eq!(Real::sqrt(0.25f32), 0.5);
    }
}
