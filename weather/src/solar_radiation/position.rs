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
use crate::location::Location;
use crate::{Float, PI};

/// The position of the sun in the sky, in Radians
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SunPosition {
    /// Angle between the sun and the horizon. Negative
    /// at night.
    pub altitude: Float,

    /// Measured from south, positive towards the west
    pub azimuth: Float,
}

/// Calculates the position of the sun from a certain location, following
/// Duffie and Beckman (Solar Engineering of Thermal Processes)
#[derive(Debug, Clone, Copy)]
pub struct SolarGeometry {
    /// Latitude in Radians. South is negative, North is positive.
    latitude: Float,

    /// Longitude in degrees. East is positive, as in EPW files.
    longitude: Float,

    /// The standard meridian of the timezone, in degrees. East is positive.
    standard_meridian: Float,
}

impl SolarGeometry {
    /// Builds a new `SolarGeometry` from a latitude, longitude and
    /// standard meridian, all in degrees and with East and North
    /// being positive
    pub fn new(latitude: Float, longitude: Float, standard_meridian: Float) -> Self {
        Self {
            latitude: latitude.to_radians(),
            longitude,
            standard_meridian,
        }
    }

    /// Builds a `SolarGeometry` for a certain [`Location`]
    pub fn from_location(location: &Location) -> Self {
        Self::new(
            location.latitude,
            location.longitude,
            location.standard_meridian(),
        )
    }

    /// Equation 1.4.2 in the Book.
    #[inline(always)]
    fn b(n: Float) -> Float {
        (n - 1.0) * 2.0 * PI / 365.0
    }

    /// The Equation of Time (in minutes) based on the day of year
    pub fn equation_of_time(n: Float) -> Float {
        let b = Self::b(n);
        229.2
            * (0.000075 + 0.001868 * b.cos()
                - 0.032077 * b.sin()
                - 0.014615 * (2.0 * b).cos()
                - 0.04089 * (2.0 * b).sin())
    }

    /// Declination (in Radians), according to Equation 1.6.1B
    pub fn declination(n: Float) -> Float {
        let b = Self::b(n);

        0.006918 - 0.399912 * b.cos() + 0.070257 * b.sin() - 0.006758 * (2. * b).cos()
            + 0.000907 * (2. * b).sin()
            - 0.002697 * (3. * b).cos()
            + 0.001480 * (3. * b).sin()
    }

    /// The apparent solar time, in hours, of a certain (standard)
    /// hour of a day of the year
    pub fn apparent_solar_time(&self, n: Float, hour: Float) -> Float {
        hour + Self::equation_of_time(n) / 60. + (self.longitude - self.standard_meridian) / 15.
    }

    /// Returns the hour angle (in Radians) corresponding to an
    /// apparent solar time. Negative in the morning.
    pub fn hour_angle(apparent_solar_time: Float) -> Float {
        ((apparent_solar_time - 12.) * 15.).to_radians()
    }

    /// Calculates the position of the sun at a certain hour of
    /// a day of the year.
    pub fn sun_position(&self, n: Float, hour: Float) -> SunPosition {
        let declination = Self::declination(n);
        let hour_angle = Self::hour_angle(self.apparent_solar_time(n, hour));

        let (sin_d, cos_d) = declination.sin_cos();
        let (sin_h, cos_h) = hour_angle.sin_cos();
        let (sin_l, cos_l) = self.latitude.sin_cos();

        let altitude = (cos_l * cos_d * cos_h + sin_l * sin_d).asin();
        let cos_alt = altitude.cos();
        let azimuth = (sin_h * cos_d / cos_alt)
            .atan2((cos_h * cos_d * sin_l - sin_d * cos_l) / cos_alt);

        SunPosition { altitude, azimuth }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_equation_of_time() {
        // b = 0
        assert_abs_diff_eq!(
            SolarGeometry::equation_of_time(1.),
            229.2 * (0.000075 + 0.001868 - 0.014615),
            epsilon = 1e-5
        );

        // Around November 3rd is the maximum (~16 minutes)
        let eot = SolarGeometry::equation_of_time(307.);
        assert!(eot > 16. && eot < 17., "eot = {}", eot);
    }

    #[test]
    fn test_declination() {
        assert_abs_diff_eq!(
            SolarGeometry::declination(1.),
            0.006918 - 0.399912 - 0.006758 - 0.002697,
            epsilon = 1e-6
        );

        // Solstices
        assert_abs_diff_eq!(
            SolarGeometry::declination(172.).to_degrees(),
            23.45,
            epsilon = 0.1
        );
        assert_abs_diff_eq!(
            SolarGeometry::declination(355.).to_degrees(),
            -23.45,
            epsilon = 0.1
        );
    }

    #[test]
    fn test_apparent_solar_time() {
        // Santiago: GMT-4 (meridian -60), longitude -70.78.
        let g = SolarGeometry::new(-33.38, -70.78, -60.);
        let eot = SolarGeometry::equation_of_time(100.);
        let ast = g.apparent_solar_time(100., 12.);
        assert_abs_diff_eq!(ast, 12. + eot / 60. - 10.78 / 15., epsilon = 1e-5);
    }

    #[test]
    fn test_hour_angle() {
        assert_abs_diff_eq!(SolarGeometry::hour_angle(12.), 0.0);
        assert_abs_diff_eq!(SolarGeometry::hour_angle(18.), PI / 2., epsilon = 1e-6);
        assert_abs_diff_eq!(SolarGeometry::hour_angle(6.), -PI / 2., epsilon = 1e-6);
    }

    #[test]
    fn test_sun_position_equator() {
        let g = SolarGeometry::new(0., 0., 0.);
        let pos = g.sun_position(1., 12.);

        // The sun is to the south, slightly to the east (EoT is negative)
        assert_abs_diff_eq!(pos.altitude.to_degrees(), 66.93, epsilon = 0.1);
        assert!(pos.azimuth < 0.);
        assert!(pos.azimuth > (-5.0 as Float).to_radians());

        // Afternoon: west
        let pos = g.sun_position(1., 16.);
        assert!(pos.azimuth > 0.);

        // Night
        let pos = g.sun_position(1., 1.);
        assert!(pos.altitude < 0.);
    }

    #[test]
    fn test_sun_position_north() {
        // Midday, in the northern hemisphere's summer solstice
        let g = SolarGeometry::new(40., 0., 0.);
        let n = 172.;
        let noon = 12. - SolarGeometry::equation_of_time(n) / 60.;
        let pos = g.sun_position(n, noon);
        let expected = 90. - 40. + SolarGeometry::declination(n).to_degrees();
        assert_abs_diff_eq!(pos.altitude.to_degrees(), expected, epsilon = 1e-3);
        assert_abs_diff_eq!(pos.azimuth, 0.0, epsilon = 1e-4);
    }
}
