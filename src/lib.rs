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

//! Climate statistics for ISO 13790 energy calculations, and a
//! general-purpose linear approximation of scattered data.
//!
//! This crate puts the others together: it reads EPW weather files
//! (see [`weather`]), calculates the solar radiation on eight vertical
//! orientations and the monthly and hourly statistics of the weather, and
//! answers queries on [`LinearApproximation`]s stored as JSON. The behaviour
//! of both can be tuned through an [`Options`] file.
//!
//! ```no_run
//! use isoclimate::{summarize, Options};
//!
//! let options = Options::from_file("./options.json").unwrap();
//! let iso = summarize("./wellington.epw", &options).unwrap();
//! println!("{}", iso.to_iso_string());
//! ```

/// The kind of Floating point number used in the library. It is the
/// one stored by [`matrix::Matrix`], so the `"float"` feature (which is
/// forwarded to `matrix`) makes it `f32`, and it is `f64` otherwise.
pub use matrix::Float;

/// Errors returned by this crate
pub mod error;
pub use error::Error;

/// Configuration of the calculations
pub mod options;
pub use options::{Options, OptionsError};

/// The operations behind the `isoclimate` command line tool
pub mod commands;
pub use commands::{load_approximation, summarize};

// Re-exports
pub use approximation::{ApproximationError, ApproximationOptions, LinearApproximation, Sample};
pub use calendar::{HourOfYear, TimeFrame};
pub use matrix::Matrix;
pub use weather::{
    ClimateAverages, EpwData, EpwError, IsoWeatherData, Location, RadiationOptions,
    SolarRadiation, SurfaceRadiation, WeatherVariable, NUM_SURFACES, SURFACE_AZIMUTHS,
};
