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
#![deny(missing_docs)]

//! Approximates the value of a function of N variables from a
//! scattered set of samples, by fitting a hyperplane through a few of the
//! samples that are closest to the point of interest.
//!
//! ```
//! use approximation::LinearApproximation;
//!
//! let mut approx = LinearApproximation::new(1).unwrap();
//! approx.add_vals(&[0.0], 0.0).unwrap();
//! approx.add_vals(&[1.0], 10.0).unwrap();
//!
//! let v = approx.approximate(&[0.5]).unwrap();
//! assert!((v - 5.0).abs() < 1e-9);
//! ```

/// The kind of Floating point number used in the library. It is the
/// one stored by [`matrix::Matrix`], so the `"float"` feature (which is
/// forwarded to `matrix`) makes it `f32`, and it is `f64` otherwise.
pub use matrix::Float;

mod error;
pub use error::ApproximationError;

mod options;
pub use options::ApproximationOptions;

mod sample;
pub use sample::Sample;

mod search;

mod linear_approximation;
pub use linear_approximation::LinearApproximation;
