/* ************************************************************************ **
** This file is part of fixed-linalg, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Row/column tags for vectors.
//!
//! Orientation lives in the type so that a row vector and a column vector of
//! the same length are distinct types; it only changes by `transpose`.

use std::fmt;
use std::hash::Hash;

/// Runtime-visible orientation of a vector.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VectorType {
    Row,
    Column,
}

impl VectorType {
    /// The orientation a vector has after transposition.
    #[inline]
    pub fn transposed(self) -> Self {
        match self {
            VectorType::Row => VectorType::Column,
            VectorType::Column => VectorType::Row,
        }
    }
}

impl fmt::Display for VectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorType::Row => write!(f, "row"),
            VectorType::Column => write!(f, "column"),
        }
    }
}

/// Type-level orientation tag. Implemented only by [`Row`] and [`Column`].
pub trait Orientation
    : Copy + Default + Eq + Hash + fmt::Debug + 'static
    + private::Sealed
{
    /// The other orientation.
    type Transposed: Orientation<Transposed=Self>;

    const VECTOR_TYPE: VectorType;

    /// Placed between elements when a vector is rendered with `Display`.
    const SEPARATOR: &'static str;
}

/// Tag for row vectors. Rendered on a single line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Row;

/// Tag for column vectors. Rendered one element per line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Column;

impl Orientation for Row {
    type Transposed = Column;
    const VECTOR_TYPE: VectorType = VectorType::Row;
    const SEPARATOR: &'static str = ",";
}

impl Orientation for Column {
    type Transposed = Row;
    const VECTOR_TYPE: VectorType = VectorType::Column;
    const SEPARATOR: &'static str = "\n";
}

mod private {
    pub trait Sealed { }
    impl Sealed for super::Row { }
    impl Sealed for super::Column { }
}
