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
use crate::options::OptionsError;
use approximation::ApproximationError;
use thiserror::Error;
use weather::EpwError;

/// Everything that can go wrong when running the `isoclimate` operations
#[derive(Debug, Error)]
pub enum Error {
    /// The options are wrong or could not be read
    #[error(transparent)]
    Options(#[from] OptionsError),

    /// The weather file could not be read, or an ISO summary could not be parsed
    #[error(transparent)]
    Weather(#[from] EpwError),

    /// A linear approximation could not be built or queried
    #[error(transparent)]
    Approximation(#[from] ApproximationError),

    /// A file could not be read or written
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// The file
        path: String,
        /// What went wrong
        #[source]
        source: std::io::Error,
    },

    /// Data could not be (de)serialized as JSON
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
