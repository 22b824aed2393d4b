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
use crate::epw::scanner::EpwScanner;
use crate::epw::WeatherVariable;
use crate::error::EpwError;
use crate::iso_data::IsoWeatherData;
use crate::location::Location;
use crate::solar_radiation::{RadiationOptions, SolarRadiation};
use crate::Float;
use calendar::{TimeFrame, HOURS_PER_YEAR};
use matrix::Matrix;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// The contents of an EPW file that matter for ISO 13790 calculations.
///
/// The data is stored in a table with one row per [`WeatherVariable`]
/// and one column per hour of the year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "SerializedEpwData")]
pub struct EpwData {
    /// The location, as read from the header
    location: Location,

    /// A table of `WeatherVariable::ALL.len()` rows and
    /// [`HOURS_PER_YEAR`] columns
    data: Matrix,

    /// Number of data lines found in the file
    rows_read: usize,

    /// Number of numeric fields that were missing or malformed, and
    /// therefore became zero
    coerced_fields: usize,
}

/// An `EpwData` as read from a file, before checking the shape of its table
#[derive(Deserialize)]
struct SerializedEpwData {
    location: Location,
    data: Matrix,
    rows_read: usize,
    #[serde(default)]
    coerced_fields: usize,
}

impl TryFrom<SerializedEpwData> for EpwData {
    type Error = EpwError;

    fn try_from(value: SerializedEpwData) -> Result<Self, Self::Error> {
        let mut ret = Self::new(value.location, value.data)?;
        ret.rows_read = value.rows_read.min(HOURS_PER_YEAR);
        ret.coerced_fields = value.coerced_fields;
        Ok(ret)
    }
}

impl EpwData {
    /// Reads an EPW file.
    ///
    /// The file is read in full. Only failing to read it is an error; the
    /// contents are parsed leniently (see [`EpwData::from_bytes`]).
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self, EpwError> {
        let path = filename.as_ref();
        let src = std::fs::read(path).map_err(|source| EpwError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let ret = Self::from_bytes(&src);
        info!(
            "Read weather file '{}': {} ({}), {} rows",
            path.display(),
            ret.location.name,
            ret.location.station_id,
            ret.rows_read
        );
        Ok(ret)
    }

    /// Parses the contents of an EPW file.
    ///
    /// The header provides the location; the following seven
    /// lines are ignored; and then up to 8760 data lines are read. Missing
    /// lines leave zeroes in the table, and missing or malformed numbers
    /// become zeroes.
    pub fn from_bytes(src: &[u8]) -> Self {
        let ret = EpwScanner::build_weather_data(src);
        if ret.coerced_fields > 0 {
            debug!(
                "{} missing or malformed numeric fields were replaced by zeroes",
                ret.coerced_fields
            );
        }
        if ret.rows_read < HOURS_PER_YEAR {
            debug!(
                "Only {} of {} data rows were found",
                ret.rows_read, HOURS_PER_YEAR
            );
        }
        ret
    }

    /// Builds an `EpwData` from a location and a data table. The table must have
    /// one row per [`WeatherVariable`] (in the order of [`WeatherVariable::ALL`])
    /// and [`HOURS_PER_YEAR`] columns.
    pub fn new(location: Location, data: Matrix) -> Result<Self, EpwError> {
        let expected = (WeatherVariable::ALL.len(), HOURS_PER_YEAR);
        let found = data.size();
        if found != expected {
            return Err(EpwError::WrongSize { expected, found });
        }
        Ok(Self {
            location,
            data,
            rows_read: HOURS_PER_YEAR,
            coerced_fields: 0,
        })
    }

    pub(crate) fn from_parts(
        location: Location,
        data: Matrix,
        rows_read: usize,
        coerced_fields: usize,
    ) -> Self {
        Self {
            location,
            data,
            rows_read,
            coerced_fields,
        }
    }

    /// The location of the weather station
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// The name of the location
    pub fn name(&self) -> &str {
        &self.location.name
    }

    /// The WMO station number
    pub fn station_id(&self) -> &str {
        &self.location.station_id
    }

    /// Latitude in degrees (north is positive)
    pub fn latitude(&self) -> Float {
        self.location.latitude
    }

    /// Longitude in degrees (east is positive)
    pub fn longitude(&self) -> Float {
        self.location.longitude
    }

    /// Hours from GMT
    pub fn timezone(&self) -> i32 {
        self.location.timezone
    }

    /// The whole data table
    pub fn data(&self) -> &Matrix {
        &self.data
    }

    /// The hourly values of one variable
    pub fn series(&self, variable: WeatherVariable) -> &[Float] {
        self.data.row(variable.index())
    }

    /// The value of a variable at a certain hour of the year.
    ///
    /// # Panics
    /// If `hour >= HOURS_PER_YEAR`
    pub fn value(&self, variable: WeatherVariable, hour: usize) -> Float {
        self.series(variable)[hour]
    }

    /// Number of data lines that were read
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    /// Number of numbers that were missing or could not be parsed
    pub fn coerced_fields(&self) -> usize {
        self.coerced_fields
    }

    /// Calculates the ISO 13790 climate summary, for vertical surfaces
    pub fn to_iso_data(&self) -> IsoWeatherData {
        self.to_iso_data_with(&RadiationOptions::default())
    }

    /// Calculates the ISO 13790 climate summary with custom radiation options
    pub fn to_iso_data_with(&self, options: &RadiationOptions) -> IsoWeatherData {
        let frame = TimeFrame::new();
        let mut solar = SolarRadiation::with_options(&frame, self, options);
        solar.calculate();
        IsoWeatherData::from_averages(solar.averages())
    }

    /// Writes the ISO 13790 climate summary as text, preceded by
    /// a comment line describing the location
    pub fn to_iso_string(&self) -> String {
        format!(
            "# {} ({}), latitude {}, longitude {}, GMT{:+}\n{}",
            self.location.name,
            self.location.station_id,
            self.location.latitude,
            self.location.longitude,
            self.location.timezone,
            self.to_iso_data().to_iso_string()
        )
    }
}
