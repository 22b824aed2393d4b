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

use crate::Float;
use serde::{Deserialize, Serialize};

/// A Location, as described in the header of an EPW file
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    /// The name of the location (usually, a City)
    pub name: String,

    /// The World Meteorological Organization Station Number.
    pub station_id: String,

    /// The Latitude in Degrees.
    ///
    /// South is negative, North is Positive.
    pub latitude: Float,

    /// The Longitude in Degrees.
    ///
    /// West is Negative, East is Positive    
    pub longitude: Float,

    /// The Timezone of the location, in hours from GMT
    pub timezone: i32,
}

impl Location {
    /// The standard (local) meridian of the timezone, in degrees.
    /// East is positive.
    pub fn standard_meridian(&self) -> Float {
        self.timezone as Float * 15.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_meridian() {
        let loc = Location {
            timezone: -4,
            ..Location::default()
        };
        assert_eq!(loc.standard_meridian(), -60.0);

        let loc = Location {
            timezone: 12,
            ..Location::default()
        };
        assert_eq!(loc.standard_meridian(), 180.0);
    }
}
