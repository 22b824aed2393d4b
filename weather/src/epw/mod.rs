
/// Module for scanning a file
pub(crate) mod scanner;
/// The hourly weather data of an EPW file.
pub mod data;
pub use data::EpwData;

use serde::{Deserialize, Serialize};

/// The hourly variables retained from an EPW file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherVariable {
    /// Dry bulb temperature, in C
    DryBulb,
    /// Dew point temperature, in C
    DewPoint,
    /// Relative humidity, in %
    RelativeHumidity,
    /// Global horizontal radiation, in Wh/m2
    GlobalHorizontal,
    /// Direct (beam) normal radiation, in Wh/m2
    DirectBeam,
    /// Diffuse horizontal radiation, in Wh/m2
    Diffuse,
    /// Wind speed, in m/s
    WindSpeed,
}

impl WeatherVariable {
    /// All the variables, in the order in which they are stored
    pub const ALL: [WeatherVariable; 7] = [
        WeatherVariable::DryBulb,
        WeatherVariable::DewPoint,
        WeatherVariable::RelativeHumidity,
        WeatherVariable::GlobalHorizontal,
        WeatherVariable::DirectBeam,
        WeatherVariable::Diffuse,
        WeatherVariable::WindSpeed,
    ];

    /// The row of this variable in the data table of an [`EpwData`]
    pub fn index(&self) -> usize {
        match self {
            Self::DryBulb => 0,
            Self::DewPoint => 1,
            Self::RelativeHumidity => 2,
            Self::GlobalHorizontal => 3,
            Self::DirectBeam => 4,
            Self::Diffuse => 5,
            Self::WindSpeed => 6,
        }
    }

    /// The (0-based) column of an EPW data line containing this variable
    pub fn epw_column(&self) -> usize {
        match self {
            Self::DryBulb => 6,
            Self::DewPoint => 7,
            Self::RelativeHumidity => 8,
            Self::GlobalHorizontal => 13,
            Self::DirectBeam => 14,
            Self::Diffuse => 15,
            Self::WindSpeed => 21,
        }
    }
}

impl std::fmt::Display for WeatherVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::DryBulb => "dry bulb temperature",
            Self::DewPoint => "dew point temperature",
            Self::RelativeHumidity => "relative humidity",
            Self::GlobalHorizontal => "global horizontal radiation",
            Self::DirectBeam => "direct beam radiation",
            Self::Diffuse => "diffuse radiation",
            Self::WindSpeed => "wind speed",
        };
        write!(f, "{}", name)
    }
}
