/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/
use crate::Float;
use thiserror::Error;

/// Everything that can go wrong when building or querying
/// a [`crate::LinearApproximation`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApproximationError {
    /// Approximations need at least one input variable
    #[error("A linear approximation needs at least one dimension")]
    ZeroDimensions,

    /// A point has the wrong number of coordinates, or two approximations
    /// have different dimensions
    #[error("Expecting {expected} dimensions, found {found}")]
    DimensionMismatch {
        /// The dimensions of the approximation
        expected: usize,
        /// The dimensions that were given
        found: usize,
    },

    /// There is already a sample at these coordinates, with a different result
    #[error("Conflicting data at {coordinates:?}: the stored result is {existing}, found {new}")]
    ConflictingData {
        /// The coordinates of the sample
        coordinates: Vec<Float>,
        /// The result that was already stored
        existing: Float,
        /// The result that was rejected
        new: Float,
    },

    /// There are not enough samples to fit a hyperplane
    #[error("Not enough data to approximate")]
    NotEnoughData,

    /// The samples do not vary enough along a dimension to fit a hyperplane
    #[error("Not enough diversity of data in dimension {dimension} to approximate")]
    InsufficientDiversity {
        /// The (0-based) dimension
        dimension: usize,
    },

    /// A matrix operation failed
    #[error("Matrix operation failed: {0}")]
    Matrix(String),
}
