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

//! Calendar utilities for yearly, hour-by-hour climate calculations.
//!
//! [`TimeFrame`] is the fixed 8760-slot hour-of-year calendar used by the
//! weather statistics. It always describes a non-leap year, and its slots
//! ([`HourOfYear`]) are labeled by the hour in which they end, as in EPW files.
//!
//! ```
//! use calendar::TimeFrame;
//!
//! let frame = TimeFrame::new();
//! assert_eq!(frame.len(), 8760);
//! assert_eq!(frame.month(8759), 12);
//! assert_eq!(frame.day_of_year(8759), 365);
//! ```

mod time_frame;
pub use crate::time_frame::{HourOfYear, TimeFrame, DAYS_PER_YEAR, HOURS_PER_DAY, HOURS_PER_YEAR};
