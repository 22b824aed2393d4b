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

/// A known value of the approximated function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// The input variables
    pub coordinates: Vec<Float>,

    /// The value of the function at `coordinates`
    pub result: Float,
}

impl Sample {
    /// Euclidean distance between the sample and a point
    pub fn distance(&self, point: &[Float]) -> Float {
        self.coordinates
            .iter()
            .zip(point.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<Float>()
            .sqrt()
    }

    /// Number of coordinates in which the sample differs from a point
    pub(crate) fn count_differences(&self, point: &[Float], tolerance: Float) -> usize {
        self.coordinates
            .iter()
            .zip(point.iter())
            .filter(|(a, b)| !same(**a, **b, tolerance))
            .count()
    }

    /// Checks whether the sample is located at `point`
    pub(crate) fn is_at(&self, point: &[Float], tolerance: Float) -> bool {
        self.count_differences(point, tolerance) == 0
    }
}

/// Compares two numbers
#[inline(always)]
pub(crate) fn same(a: Float, b: Float, tolerance: Float) -> bool {
    a == b || (a - b).abs() <= tolerance
}
