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
use approximation::ApproximationOptions;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;
use weather::RadiationOptions;

/// Errors found while reading [`Options`]
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The file could not be opened
    #[error("Could not read options file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON, or does not describe options
    #[error("Could not parse options: {0}")]
    Json(#[from] serde_json::Error),

    /// The options were read, but make no sense
    #[error("Invalid options: {0}")]
    Invalid(String),
}

/// Options for the calculations. Every field (and every field
/// within them) is optional in JSON, falling back to its default.
///
/// ```
/// use isoclimate::Options;
///
/// let options = Options::from_json(r#"{"radiation": {"ground_reflectivity": 0.2}}"#).unwrap();
/// assert_eq!(options.radiation.ground_reflectivity, 0.2);
/// assert_eq!(options.approximation.tolerance, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Options for calculating the solar radiation on surfaces
    pub radiation: RadiationOptions,

    /// Options for linear approximations
    pub approximation: ApproximationOptions,
}

impl Options {
    /// Reads and validates options from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, OptionsError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let options: Options = serde_json::from_reader(reader)?;
        options.validate()?;
        Ok(options)
    }

    /// Reads and validates options from a JSON string
    pub fn from_json(s: &str) -> Result<Self, OptionsError> {
        let options: Options = serde_json::from_str(s)?;
        options.validate()?;
        Ok(options)
    }

    /// Checks that the options make sense
    pub fn validate(&self) -> Result<(), OptionsError> {
        let tilt = self.radiation.doubled_surface_tilt;
        if !tilt.is_finite() {
            return Err(OptionsError::Invalid(format!(
                "doubled_surface_tilt should be a finite number... found {}",
                tilt
            )));
        }
        let rho = self.radiation.ground_reflectivity;
        if !(0.0..=1.0).contains(&rho) {
            return Err(OptionsError::Invalid(format!(
                "ground_reflectivity should be between 0 and 1... found {}",
                rho
            )));
        }
        let tolerance = self.approximation.tolerance;
        if tolerance.is_nan() || tolerance < 0.0 {
            return Err(OptionsError::Invalid(format!(
                "tolerance should not be negative... found {}",
                tolerance
            )));
        }
        if self.approximation.search_budget == 0 {
            return Err(OptionsError::Invalid(
                "search_budget should be at least 1... found 0".to_string(),
            ));
        }
        Ok(())
    }
}
