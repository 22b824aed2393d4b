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
use crate::epw::{EpwData, WeatherVariable};
use crate::{Float, PI};
use calendar::{TimeFrame, HOURS_PER_DAY};
use matrix::Matrix;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

mod position;
pub use position::{SolarGeometry, SunPosition};

/// Number of surfaces for which solar radiation is calculated
pub const NUM_SURFACES: usize = 8;

/// The azimuths (in degrees) of the surfaces for which solar radiation is
/// calculated. These follow the convention of the solar azimuth: measured
/// from south, positive towards the west.
pub const SURFACE_AZIMUTHS: [Float; NUM_SURFACES] =
    [0., 45., 90., 135., 180., 225., 270., 315.];

/// Number of months in a year
const MONTHS: usize = 12;

/// Options for calculating the radiation incident on surfaces
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiationOptions {
    /// Twice the tilt of the surfaces (in Radians). The default
    /// is `PI`, meaning vertical surfaces.
    pub doubled_surface_tilt: Float,

    /// The reflectivity of the ground
    pub ground_reflectivity: Float,
}

impl std::default::Default for RadiationOptions {
    fn default() -> Self {
        Self {
            doubled_surface_tilt: PI,
            ground_reflectivity: 0.14,
        }
    }
}

/// The radiation (in Wh/m2) incident on each of the [`NUM_SURFACES`] surfaces,
/// for every hour of the year. Rows are hours and columns are surfaces, in the
/// order of [`SURFACE_AZIMUTHS`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceRadiation(Matrix);

impl SurfaceRadiation {
    /// Radiation on all surfaces, for all hours, is zero.
    pub fn zeroes(nhours: usize) -> Self {
        Self(Matrix::zeroes(nhours, NUM_SURFACES))
    }

    /// The underlying matrix
    pub fn matrix(&self) -> &Matrix {
        &self.0
    }

    /// Number of hours
    pub fn len(&self) -> usize {
        self.0.size().0
    }

    /// Checks whether there are no hours
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The radiation on every surface at a certain hour
    ///
    /// # Panics
    /// If `i` is out of bounds
    pub fn hour(&self, i: usize) -> &[Float] {
        self.0.row(i)
    }

    /// The radiation on a certain surface, for every hour
    pub fn surface(&self, surface: usize) -> Vec<Float> {
        self.0.rows().map(|row| row[surface]).collect()
    }
}

/// Climate statistics calculated from an [`EpwData`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateAverages {
    /// Monthly mean of each [`WeatherVariable`]. One row per variable (in
    /// the order of [`WeatherVariable::ALL`]) and one column per month.
    pub monthly: Matrix,

    /// Mean radiation incident on each surface (Wh/m2). One row
    /// per month, one column per surface.
    pub monthly_solar: Matrix,

    /// The mean dry bulb temperature of each hour of the day. One row
    /// per month, one column per hour.
    pub hourly_dry_bulb: Matrix,

    /// The mean dew point temperature of each hour of the day. One row
    /// per month, one column per hour.
    pub hourly_dew_point: Matrix,

    /// The mean global horizontal radiation of each hour of the day. One row
    /// per month, one column per hour.
    pub hourly_global_horizontal: Matrix,
}

impl std::default::Default for ClimateAverages {
    fn default() -> Self {
        Self {
            monthly: Matrix::zeroes(WeatherVariable::ALL.len(), MONTHS),
            monthly_solar: Matrix::zeroes(MONTHS, NUM_SURFACES),
            hourly_dry_bulb: Matrix::zeroes(MONTHS, HOURS_PER_DAY),
            hourly_dew_point: Matrix::zeroes(MONTHS, HOURS_PER_DAY),
            hourly_global_horizontal: Matrix::zeroes(MONTHS, HOURS_PER_DAY),
        }
    }
}

impl ClimateAverages {
    /// The 12 monthly means of a variable
    pub fn monthly_mean(&self, variable: WeatherVariable) -> [Float; 12] {
        let mut ret = [0.0; MONTHS];
        ret.copy_from_slice(self.monthly.row(variable.index()));
        ret
    }
}

/// Sums of the hours of a single month
struct MonthAccumulator {
    month: u8,
    hours: usize,
    weather: [Float; 7],
    solar: [Float; NUM_SURFACES],
}

impl MonthAccumulator {
    fn new(month: u8) -> Self {
        Self {
            month,
            hours: 0,
            weather: [0.0; 7],
            solar: [0.0; NUM_SURFACES],
        }
    }

    /// Writes the means into `averages` and restarts for `next_month`
    fn flush(&mut self, averages: &mut ClimateAverages, next_month: u8) {
        if self.hours > 0 {
            let m = self.month as usize - 1;
            let n = self.hours as Float;
            for (v, sum) in self.weather.iter().enumerate() {
                averages.monthly.row_mut(v)[m] = sum / n;
            }
            for (s, sum) in self.solar.iter().enumerate() {
                averages.monthly_solar.row_mut(m)[s] = sum / n;
            }
        }
        *self = Self::new(next_month);
    }
}

/// Calculates the solar radiation incident on [`NUM_SURFACES`] surfaces
/// with different orientations, and the monthly statistics of a weather file.
pub struct SolarRadiation<'a> {
    frame: &'a TimeFrame,
    weather: &'a EpwData,

    /// Tilt of the surfaces, in Radians (i.e., half of
    /// [`RadiationOptions::doubled_surface_tilt`])
    surface_tilt: Float,

    ground_reflectivity: Float,

    surface_radiation: SurfaceRadiation,
    averages: ClimateAverages,
}

impl<'a> SolarRadiation<'a> {
    /// Number of surfaces for which solar radiation is calculated
    pub const NUM_SURFACES: usize = NUM_SURFACES;

    /// Creates a new `SolarRadiation` for vertical surfaces. Nothing is
    /// calculated until [`SolarRadiation::calculate`] is called.
    pub fn new(frame: &'a TimeFrame, weather: &'a EpwData) -> Self {
        Self::with_options(frame, weather, &RadiationOptions::default())
    }

    /// Creates a new `SolarRadiation` with custom options.
    pub fn with_options(
        frame: &'a TimeFrame,
        weather: &'a EpwData,
        options: &RadiationOptions,
    ) -> Self {
        Self {
            frame,
            weather,
            surface_tilt: options.doubled_surface_tilt / 2.,
            ground_reflectivity: options.ground_reflectivity,
            surface_radiation: SurfaceRadiation::zeroes(frame.len()),
            averages: ClimateAverages::default(),
        }
    }

    /// The tilt of the surfaces, in Radians
    pub fn surface_tilt(&self) -> Float {
        self.surface_tilt
    }

    /// The reflectivity of the ground
    pub fn ground_reflectivity(&self) -> Float {
        self.ground_reflectivity
    }

    /// Calculates the radiation on every surface and the climate
    /// statistics, and stores them. Calling it again recalculates everything.
    #[instrument(skip_all)]
    pub fn calculate(&mut self) {
        debug!(
            "Calculating solar radiation for {}",
            self.weather.location().name
        );
        let surfaces = self.calculate_surface_solar_radiation();
        self.averages = self.calculate_averages(&surfaces);
        self.surface_radiation = surfaces;
    }

    /// Calculates the radiation incident on each surface, for every
    /// hour of the year.
    pub fn calculate_surface_solar_radiation(&self) -> SurfaceRadiation {
        let geometry = SolarGeometry::from_location(self.weather.location());
        let nhours = self.frame.len();

        #[cfg(not(feature = "parallel"))]
        let hours = 0..nhours;

        #[cfg(feature = "parallel")]
        let hours = (0..nhours).into_par_iter();

        let rows: Vec<[Float; NUM_SURFACES]> = hours
            .map(|i| self.hour_radiation(&geometry, i))
            .collect();

        let data: Vec<Float> = rows.into_iter().flatten().collect();
        SurfaceRadiation(Matrix::from_data(nhours, NUM_SURFACES, data))
    }

    /// Radiation incident on every surface during the `i`th hour of the year
    fn hour_radiation(&self, geometry: &SolarGeometry, i: usize) -> [Float; NUM_SURFACES] {
        let sun = geometry.sun_position(
            self.frame.day_of_year(i) as Float,
            self.frame.hour(i) as Float,
        );
        let direct = self.weather.value(WeatherVariable::DirectBeam, i);
        let diffuse = self.weather.value(WeatherVariable::Diffuse, i);

        let (sin_tilt, cos_tilt) = self.surface_tilt.sin_cos();
        let (sin_alt, cos_alt) = sun.altitude.sin_cos();

        let ground =
            (direct * sin_alt + diffuse) * self.ground_reflectivity * (1. - cos_tilt) / 2.;

        let mut ret = [0.0; NUM_SURFACES];
        for (total, surface_azimuth) in ret.iter_mut().zip(SURFACE_AZIMUTHS.iter()) {
            let gamma = (sun.azimuth - surface_azimuth.to_radians()).abs();
            let cos_theta = cos_alt * gamma.cos() * sin_tilt + sin_alt * cos_tilt;

            let beam = if cos_theta > 0. {
                direct * cos_theta
            } else {
                0.
            };

            let y = (0.55 + 0.437 * cos_theta + 0.313 * cos_theta * cos_theta).max(0.45);
            let sky = if self.surface_tilt > PI / 2. {
                diffuse * y * sin_tilt
            } else {
                diffuse * (y * sin_tilt + cos_tilt)
            };

            *total = beam + sky + ground;
        }
        ret
    }

    /// Calculates the monthly and hourly-by-month statistics of the weather
    /// and of the radiation on each surface.
    pub fn calculate_averages(&self, surfaces: &SurfaceRadiation) -> ClimateAverages {
        let mut ret = ClimateAverages::default();
        let mut acc = match self.frame.get(0) {
            Some(first) => MonthAccumulator::new(first.month),
            None => return ret,
        };

        for (i, slot) in self.frame.iter().enumerate() {
            if slot.month != acc.month {
                acc.flush(&mut ret, slot.month);
            }
            acc.hours += 1;
            for variable in WeatherVariable::ALL.iter() {
                acc.weather[variable.index()] += self.weather.value(*variable, i);
            }
            for (sum, v) in acc.solar.iter_mut().zip(surfaces.hour(i)) {
                *sum += v;
            }

            let m = slot.month as usize - 1;
            let h = slot.hour as usize - 1;
            ret.hourly_dry_bulb.row_mut(m)[h] += self.weather.value(WeatherVariable::DryBulb, i);
            ret.hourly_dew_point.row_mut(m)[h] +=
                self.weather.value(WeatherVariable::DewPoint, i);
            ret.hourly_global_horizontal.row_mut(m)[h] +=
                self.weather.value(WeatherVariable::GlobalHorizontal, i);
        }
        let last = acc.month;
        acc.flush(&mut ret, last);

        for m in 0..MONTHS {
            let days = TimeFrame::month_length(m as u8 + 1) as Float;
            for bucket in [
                &mut ret.hourly_dry_bulb,
                &mut ret.hourly_dew_point,
                &mut ret.hourly_global_horizontal,
            ] {
                bucket.row_mut(m).iter_mut().for_each(|v| *v /= days);
            }
        }

        ret
    }

    /// The radiation on each surface, for every hour
    pub fn surface_radiation(&self) -> &SurfaceRadiation {
        &self.surface_radiation
    }

    /// All the climate statistics
    pub fn averages(&self) -> &ClimateAverages {
        &self.averages
    }

    /// Mean radiation incident on each surface. One row
    /// per month, one column per surface.
    pub fn monthly_solar_radiation(&self) -> &Matrix {
        &self.averages.monthly_solar
    }

    /// Monthly mean dry bulb temperatures
    pub fn monthly_dry_bulb(&self) -> [Float; 12] {
        self.averages.monthly_mean(WeatherVariable::DryBulb)
    }

    /// Monthly mean dew point temperatures
    pub fn monthly_dew_point(&self) -> [Float; 12] {
        self.averages.monthly_mean(WeatherVariable::DewPoint)
    }

    /// Monthly mean relative humidity
    pub fn monthly_relative_humidity(&self) -> [Float; 12] {
        self.averages.monthly_mean(WeatherVariable::RelativeHumidity)
    }

    /// Monthly mean wind speed
    pub fn monthly_wind_speed(&self) -> [Float; 12] {
        self.averages.monthly_mean(WeatherVariable::WindSpeed)
    }

    /// Monthly mean global horizontal radiation
    pub fn monthly_global_horizontal(&self) -> [Float; 12] {
        self.averages.monthly_mean(WeatherVariable::GlobalHorizontal)
    }

    /// Mean dry bulb temperature of each hour of the day, for each month
    pub fn hourly_dry_bulb(&self) -> &Matrix {
        &self.averages.hourly_dry_bulb
    }

    /// Mean dew point temperature of each hour of the day, for each month
    pub fn hourly_dew_point(&self) -> &Matrix {
        &self.averages.hourly_dew_point
    }

    /// Mean global horizontal radiation of each hour of the day, for each month
    pub fn hourly_global_horizontal(&self) -> &Matrix {
        &self.averages.hourly_global_horizontal
    }
}
