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

//! This library is both a (simplified) [EPW file](https://energyplus.net/weather) reader
//! and a calculator of the climate statistics required by monthly and hourly
//! ISO 13790 energy calculations: the solar radiation incident on eight vertical
//! building orientations, and monthly and hourly-by-month averages of the
//! weather variables.
//!
//! ```no_run
//! use weather::EpwData;
//!
//! let epw = EpwData::from_file("./wellington.epw").unwrap();
//! let iso = epw.to_iso_data();
//! println!("{}", iso.to_iso_string());
//! ```

/// The kind of Floating point number used in the library. It is the
/// one stored by [`matrix::Matrix`], so the `"float"` feature (which is
/// forwarded to `matrix`) makes it `f32`, and it is `f64` otherwise.
pub use matrix::Float;

const PI: Float = std::f64::consts::PI as Float;

/// Errors produced when reading weather data
pub mod error;
pub use crate::error::EpwError;

/// Data associated to a specific Location
pub mod location;
pub use crate::location::Location;

/// For handling EPW Files
pub mod epw;
pub use epw::{EpwData, WeatherVariable};

/// Solar position and the radiation incident on vertical surfaces.
///
/// We follow ASHRAE's conventions here: solar azimuth is measured from
/// south, and it is positive towards the west. Angles are in Radians unless
/// stated otherwise.
pub mod solar_radiation;
pub use solar_radiation::{
    ClimateAverages, RadiationOptions, SolarRadiation, SurfaceRadiation, NUM_SURFACES,
    SURFACE_AZIMUTHS,
};

/// The climate summary consumed by ISO 13790 calculations
pub mod iso_data;
pub use iso_data::IsoWeatherData;

pub use calendar::TimeFrame;
pub use matrix::Matrix;
