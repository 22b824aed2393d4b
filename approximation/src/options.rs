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
use serde::{Deserialize, Serialize};

/// Numerical options of a [`crate::LinearApproximation`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApproximationOptions {
    /// Two numbers are considered equal when they differ by no
    /// more than this. It is used for matching coordinates, detecting
    /// duplicated samples, finding pivots while searching for samples and
    /// checking whether the hyperplane can be solved.
    ///
    /// Defaults to `0.0`, meaning exact comparisons.
    pub tolerance: Float,

    /// The maximum number of steps of the recursive search for
    /// samples that define a hyperplane
    pub search_budget: usize,
}

impl std::default::Default for ApproximationOptions {
    fn default() -> Self {
        Self {
            tolerance: 0.0,
            search_budget: 10_000,
        }
    }
}
