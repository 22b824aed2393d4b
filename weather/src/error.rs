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

use thiserror::Error;

/// Everything that can go wrong when reading weather data
#[derive(Debug, Error)]
pub enum EpwError {
    /// The weather file could not be read
    #[error("Could not read epw file '{path}': {source}")]
    Io {
        /// The file we tried to read
        path: String,
        /// What went wrong
        #[source]
        source: std::io::Error,
    },

    /// A weather table does not have the expected shape
    #[error("Expecting a weather table of {expected:?} (rows, columns), found {found:?}")]
    WrongSize {
        /// Expected (rows, columns)
        expected: (usize, usize),
        /// Found (rows, columns)
        found: (usize, usize),
    },

    /// An ISO weather summary contains a section we do not know about
    #[error("Unknown section '{0}' in ISO weather data")]
    UnknownSection(String),

    /// An ISO weather summary section has the wrong number of rows or values
    #[error("Malformed section '{section}' in ISO weather data: {message}")]
    MalformedSection {
        /// The section
        section: String,
        /// Description of the problem
        message: String,
    },

    /// A value in an ISO weather summary is not a number
    #[error("Invalid number '{value}' in section '{section}' of ISO weather data")]
    InvalidNumber {
        /// The section
        section: String,
        /// The value we could not parse
        value: String,
    },
}
