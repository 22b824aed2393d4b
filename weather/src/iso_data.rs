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
use crate::epw::WeatherVariable;
use crate::error::EpwError;
use crate::solar_radiation::{ClimateAverages, NUM_SURFACES};
use crate::Float;
use calendar::HOURS_PER_DAY;
use matrix::Matrix;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::str::FromStr;

const MONTHS: usize = 12;

/// The sections of the text version of an [`IsoWeatherData`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Solar,
    HourlyDryBulb,
    HourlyGlobalHorizontal,
    GlobalHorizontal,
    DryBulb,
    WindSpeed,
}

impl Section {
    /// All sections, in the order in which they are written
    const ALL: [Section; 6] = [
        Section::Solar,
        Section::HourlyDryBulb,
        Section::HourlyGlobalHorizontal,
        Section::GlobalHorizontal,
        Section::DryBulb,
        Section::WindSpeed,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::Solar => "solar",
            Self::HourlyDryBulb => "hdbt",
            Self::HourlyGlobalHorizontal => "hEgh",
            Self::GlobalHorizontal => "mEgh",
            Self::DryBulb => "mdbt",
            Self::WindSpeed => "mwind",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().find(|s| s.name() == name).copied()
    }

    /// Values in each row
    fn columns(&self) -> usize {
        match self {
            Self::Solar => NUM_SURFACES,
            Self::HourlyDryBulb | Self::HourlyGlobalHorizontal => HOURS_PER_DAY,
            Self::GlobalHorizontal | Self::DryBulb | Self::WindSpeed => 1,
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::Solar => 0,
            Self::HourlyDryBulb => 1,
            Self::HourlyGlobalHorizontal => 2,
            Self::GlobalHorizontal => 3,
            Self::DryBulb => 4,
            Self::WindSpeed => 5,
        }
    }

    fn malformed(&self, message: String) -> EpwError {
        EpwError::MalformedSection {
            section: self.name().to_string(),
            message,
        }
    }
}

/// The climate summary required by ISO 13790 monthly and hourly
/// calculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsoWeatherData {
    /// Mean solar radiation on each surface (Wh/m2): 12 months by 8 surfaces
    pub msolar: Matrix,

    /// Mean dry bulb temperature of each hour of the day: 12 months by 24 hours
    pub mhdbt: Matrix,

    /// Mean global horizontal radiation of each hour of the day: 12 months by 24 hours
    #[serde(rename = "mhEgh")]
    pub mh_egh: Matrix,

    /// Monthly mean global horizontal radiation
    #[serde(rename = "mEgh")]
    pub m_egh: [Float; 12],

    /// Monthly mean dry bulb temperature
    pub mdbt: [Float; 12],

    /// Monthly mean wind speed
    pub mwind: [Float; 12],
}

impl IsoWeatherData {
    /// Collects the ISO 13790 summary from a set of climate statistics
    pub fn from_averages(averages: &ClimateAverages) -> Self {
        Self {
            msolar: averages.monthly_solar.clone(),
            mhdbt: averages.hourly_dry_bulb.clone(),
            mh_egh: averages.hourly_global_horizontal.clone(),
            m_egh: averages.monthly_mean(WeatherVariable::GlobalHorizontal),
            mdbt: averages.monthly_mean(WeatherVariable::DryBulb),
            mwind: averages.monthly_mean(WeatherVariable::WindSpeed),
        }
    }

    /// Writes the summary as text. Each section is
    /// a line with its name followed by one line per month.
    pub fn to_iso_string(&self) -> String {
        self.to_string()
    }

    /// The values of a section, month by month
    fn section_rows(&self, section: Section) -> Vec<&[Float]> {
        match section {
            Section::Solar => self.msolar.rows().collect(),
            Section::HourlyDryBulb => self.mhdbt.rows().collect(),
            Section::HourlyGlobalHorizontal => self.mh_egh.rows().collect(),
            Section::GlobalHorizontal => self.m_egh.chunks(1).collect(),
            Section::DryBulb => self.mdbt.chunks(1).collect(),
            Section::WindSpeed => self.mwind.chunks(1).collect(),
        }
    }
}

impl std::fmt::Display for IsoWeatherData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for section in Section::ALL.iter() {
            writeln!(f, "{}", section.name())?;
            for row in self.section_rows(*section) {
                let mut line = String::new();
                for (i, v) in row.iter().enumerate() {
                    if i > 0 {
                        line.push(',');
                    }
                    write!(line, "{}", v)?;
                }
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

impl FromStr for IsoWeatherData {
    type Err = EpwError;

    /// Reads the text written by [`IsoWeatherData::to_iso_string`].
    ///
    /// Sections can come in any order, and empty lines and lines
    /// starting with `#` are ignored. Apart from that, this is strict:
    /// every section must be there, once, with 12 rows of the right length.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values: [Option<Vec<Float>>; 6] = Default::default();
        let mut rows = [0usize; 6];
        let mut current: Option<Section> = None;

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // A line that is not a number (and has no commas) is a header
            if !line.contains(',') && line.parse::<Float>().is_err() {
                let section = Section::from_name(line)
                    .ok_or_else(|| EpwError::UnknownSection(line.to_string()))?;
                if values[section.index()].is_some() {
                    return Err(section.malformed("section appears more than once".to_string()));
                }
                values[section.index()] = Some(Vec::with_capacity(MONTHS * section.columns()));
                current = Some(section);
                continue;
            }

            let section = current.ok_or_else(|| EpwError::MalformedSection {
                section: String::new(),
                message: format!("found data before any section header: '{}'", line),
            })?;
            let i = section.index();
            rows[i] += 1;
            if rows[i] > MONTHS {
                return Err(section.malformed(format!("more than {} rows", MONTHS)));
            }

            let row = line
                .split(',')
                .map(|v| {
                    let v = v.trim();
                    v.parse::<Float>().map_err(|_| EpwError::InvalidNumber {
                        section: section.name().to_string(),
                        value: v.to_string(),
                    })
                })
                .collect::<Result<Vec<Float>, EpwError>>()?;
            if row.len() != section.columns() {
                return Err(section.malformed(format!(
                    "expecting {} values per row, found {}",
                    section.columns(),
                    row.len()
                )));
            }
            if let Some(data) = values[i].as_mut() {
                data.extend(row);
            }
        }

        let mut take = |section: Section| -> Result<Vec<Float>, EpwError> {
            let i = section.index();
            match values[i].take() {
                None => Err(section.malformed("section is missing".to_string())),
                Some(_) if rows[i] != MONTHS => Err(section.malformed(format!(
                    "expecting {} rows, found {}",
                    MONTHS, rows[i]
                ))),
                Some(v) => Ok(v),
            }
        };
        let monthly = |v: Vec<Float>| -> [Float; 12] {
            let mut ret = [0.0; MONTHS];
            ret.copy_from_slice(&v);
            ret
        };

        Ok(Self {
            msolar: Matrix::from_data(MONTHS, NUM_SURFACES, take(Section::Solar)?),
            mhdbt: Matrix::from_data(MONTHS, HOURS_PER_DAY, take(Section::HourlyDryBulb)?),
            mh_egh: Matrix::from_data(
                MONTHS,
                HOURS_PER_DAY,
                take(Section::HourlyGlobalHorizontal)?,
            ),
            m_egh: monthly(take(Section::GlobalHorizontal)?),
            mdbt: monthly(take(Section::DryBulb)?),
            mwind: monthly(take(Section::WindSpeed)?),
        })
    }
}
