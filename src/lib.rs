/* ************************************************************************ **
** This file is part of fixed-linalg, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small fixed-size vector and matrix types whose shapes are part of the type.
//!
//! A [`Vector`] carries its element type, its dimension, and its orientation
//! (row or column) as type parameters; a [`Matrix`] carries its element type
//! and both of its dimensions. Adding a 2-vector to a 5-vector, or a row to a
//! column, is therefore a type error rather than something checked at runtime:
//!
//! ```compile_fail
//! use fixed_linalg::RowVector;
//!
//! let a = RowVector::<f64, 2>::filled(1.0);
//! let b = RowVector::<f64, 5>::filled(1.0);
//! let _ = a + b;
//! ```
//!
//! ```compile_fail
//! use fixed_linalg::{RowVector, ColumnVector};
//!
//! let a = RowVector::<f64, 3>::filled(1.0);
//! let b = ColumnVector::<f64, 3>::filled(1.0);
//! let _ = a + b;
//! ```
//!
//! Element types must support `+`, `-`, `*` and `/` among themselves
//! (see [`Scalar`]). Every constructor requires this, so a vector or matrix
//! of anything else cannot be built in the first place:
//!
//! ```compile_fail
//! use fixed_linalg::RowVector;
//!
//! let _ = RowVector::<&str, 2>::filled("nope");
//! ```
//!
//! ```compile_fail
//! use fixed_linalg::RowVector;
//!
//! let _ = RowVector::from_array(["a", "b"]);
//! ```
//!
//! ```compile_fail
//! use fixed_linalg::Matrix;
//!
//! let _ = Matrix::<String, 1, 2>::from_fn(|_, c| c.to_string());
//! ```
//!
//! Every dimension must be at least one. Zero-sized shapes are rejected when
//! the constructor is instantiated:
//!
//! ```compile_fail
//! use fixed_linalg::RowVector;
//!
//! let _ = RowVector::<f64, 0>::filled(1.0);
//! ```
//!
//! ```compile_fail
//! use fixed_linalg::Matrix;
//!
//! let _ = Matrix::<f64, 0, 3>::default();
//! ```
//!
//! The same shapes with nonzero dimensions are fine:
//!
//! ```
//! use fixed_linalg::{RowVector, Matrix};
//!
//! assert_eq!(RowVector::<f64, 1>::filled(1.0).dimension(), 1);
//! assert_eq!(Matrix::<f64, 1, 3>::default().lines(), 1);
//! ```
//!
//! The only runtime failures are programmer errors (indexing out of bounds,
//! which panics) and the handful of conversions from runtime data, which
//! return [`Error`].

#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate fixed_linalg_assert_close;

mod error;
mod traits;
mod orientation;
mod vector;
mod matrix;
mod ops;

pub use crate::error::{Error, Result};
pub use crate::traits::{Scalar, Real, IntoReal};
pub use crate::orientation::{Orientation, Row, Column, VectorType};
pub use crate::vector::{Vector, RowVector, ColumnVector};
pub use crate::matrix::Matrix;
