/* ************************************************************************ **
** This file is part of fixed-linalg, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

/// Errors from conversions of runtime data and from checked normalization.
///
/// Shape mismatches between two vectors or matrices never show up here;
/// those are rejected by the type checker.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A slice did not hold exactly as many elements as the target shape.
    #[error("expected {expected} elements, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// A vector of zero magnitude has no direction.
    #[error("cannot normalize a vector of zero magnitude")]
    ZeroMagnitude,
}

pub type Result<T> = std::result::Result<T, Error>;
