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
use crate::Float;

use super::data::EpwData;
use super::WeatherVariable;
use calendar::HOURS_PER_YEAR;
use matrix::Matrix;

/// Number of lines between the LOCATION line and the
/// first line of data (i.e., DESIGN CONDITIONS, TYPICAL/EXTREME PERIODS,
/// GROUND TEMPERATURES, HOLIDAYS/DAYLIGHT SAVINGS, COMMENTS 1, COMMENTS 2
/// and DATA PERIODS)
const SKIPPED_LINES: usize = 7;

pub(crate) struct EpwScanner<'a> {
    /// Indicates the position of current character being
    /// scanned
    current: usize,

    /// Indicates the position of the first character of the
    /// element being scanned
    start: usize,

    /// Indicates the line of the EPW file in which we are
    line: usize,

    /// The data source
    src: &'a [u8],

    /// Are we in a string? (i.e. within quotation marks, e.g. " STRING ")
    in_string: bool,

    /// Was the last element scanned the last one in its line?
    end_of_line: bool,

    /// Number of numeric cells that could not be parsed (and became zero)
    coerced: usize,
}

impl<'a> EpwScanner<'a> {
    /// Creates a new scanner.
    pub fn new(src: &'a [u8]) -> Self {
        Self {
            current: 0,
            start: 0,
            line: 1,
            src,
            in_string: false,
            end_of_line: false,
            coerced: 0,
        }
    }

    /// Parses an EPW file. Only the first line (location), and the
    /// data lines are read. Anything that does not look like a number where a
    /// number is expected becomes a zero.
    pub fn build_weather_data(src: &'a [u8]) -> EpwData {
        let mut scanner = EpwScanner::new(src);

        let location = scanner.parse_location();
        for _ in 0..SKIPPED_LINES {
            scanner.skip_line();
        }
        let (data, rows_read) = scanner.parse_data();

        EpwData::from_parts(location, data, rows_read, scanner.coerced)
    }

    /// Checks if the scanner is finished
    fn is_finished(&self) -> bool {
        self.current >= self.src.len()
    }

    /// Scans all the characters until reaching the Comma or the end
    /// of the line. Returns a slice    
    fn scan_element(&mut self) -> Option<&'a [u8]> {
        if self.is_finished() {
            self.end_of_line = true;
            return None;
        }
        self.end_of_line = false;

        loop {
            // Return if scanning is over
            if self.is_finished() {
                self.end_of_line = true;
                break;
            }

            let c = self.src[self.current];

            // If we find a comma, and we are not in a string, break
            if !self.in_string && c == b',' {
                break;
            }

            // Increase line number if required
            if c == b'\n' {
                self.line += 1;
                self.end_of_line = true;
                self.in_string = false;
                break;
            }

            // Toggle string if we are in one.
            if c == b'"' {
                self.in_string = !self.in_string;
            }
            self.current += 1;
        }

        // Ignore the \r thing that I hate
        let mut end = self.current;
        if end > self.start && self.src[end - 1] == b'\r' {
            end -= 1;
        }
        let (ini, fin) = (self.start, end);

        self.current += 1; // skip the comma
        self.start = self.current;

        self.src.get(ini..fin)
    }

    /// Scans the rest of the current line, element by element
    fn scan_record(&mut self) -> Option<Vec<&'a [u8]>> {
        if self.is_finished() {
            return None;
        }
        let mut fields = Vec::with_capacity(35);
        while let Some(element) = self.scan_element() {
            fields.push(element);
            if self.end_of_line {
                break;
            }
        }
        Some(fields)
    }

    /// Consumes a line without looking at it
    fn skip_line(&mut self) -> bool {
        self.scan_record().is_some()
    }

    /// Transforms an element into text, without quotation marks
    fn scan_text(slice: Option<&[u8]>) -> String {
        match slice {
            Some(v) => String::from_utf8_lossy(v)
                .trim()
                .trim_matches('"')
                .to_string(),
            None => String::new(),
        }
    }

    /// Transforms an element into a number. Missing or malformed
    /// numbers become zero, and are counted.
    fn scan_number(&mut self, slice: Option<&[u8]>) -> Float {
        let text = Self::scan_text(slice);
        match text.parse::<Float>() {
            Ok(v) => v,
            Err(_) => {
                self.coerced += 1;
                0.0
            }
        }
    }

    /// Parses a LOCATION line
    fn parse_location(&mut self) -> Location {
        let fields = self.scan_record().unwrap_or_default();
        let field = |i: usize| fields.get(i).copied();

        let name = Self::scan_text(field(1));
        let station_id = Self::scan_text(field(5));
        let latitude = self.scan_number(field(6));
        let longitude = self.scan_number(field(7));
        let timezone = self.scan_number(field(8)) as i32;

        Location {
            name,
            station_id,
            latitude,
            longitude,
            timezone,
        }
    }

    /// Parses up to 8760 data lines. Returns the data table and the
    /// number of lines read.
    fn parse_data(&mut self) -> (Matrix, usize) {
        let mut data = Matrix::zeroes(WeatherVariable::ALL.len(), HOURS_PER_YEAR);
        let mut rows = 0;
        while rows < HOURS_PER_YEAR {
            let fields = match self.scan_record() {
                Some(f) => f,
                None => break,
            };
            for variable in WeatherVariable::ALL.iter() {
                let value = self.scan_number(fields.get(variable.epw_column()).copied());
                data.row_mut(variable.index())[rows] = value;
            }
            rows += 1;
        }
        (data, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SANTIAGO: &str = "LOCATION,SANTIAGO,-,CHL,IWEC Data,855740,-33.38,-70.78,-4.0,476.0\nDESIGN CONDITIONS,1,Climate Design Data 2009 ASHRAE Handbook,,Heating,7,-1.1,0,-2.7,3.2,4.1\nTYPICAL/EXTREME PERIODS,6,Summer - Week Nearest Max Temperature For Period,Extreme,1/20,1/26\nGROUND TEMPERATURES,3,.5,,,,18.03,20.05,20.54,19.99,17.11,13.95,11.03,8.95,8.41,9.49,11.96,15.03\nHOLIDAYS/DAYLIGHT SAVINGS,No,0,0,0\nCOMMENTS 1,\"IWEC- WMO#855740 - South America -- Original Source Data (c) 2001 American Society of Heating, Refrigerating and Air-Conditioning Engineers (ASHRAE), Inc.\"\nCOMMENTS 2, -- Ground temps produced with a standard soil diffusivity of 2.3225760E-03 {m**2/day}\nDATA PERIODS,1,1,Data,Sunday, 1/ 1,12/31\n1987,1,1,1,60,C9C9C9C9*0?9?9?9?9?9?9?9A7A7B8B8A7*0*0E8*0*0,16.7,9.6,63,95600,0,1415,326,0,0,0,0,0,0,0,150,1.5,0,0,9.9,77777,9,999999999,0,0.2680,0,88,0.000,0.0,0.0\n1987,1,1,2,60,C9C9C9C9*0?9?9?9?9?9?9?9A7A7A7A7A7A7*0E8*0*0,15.1,8.4,64,95700,0,1415,317,0,0,0,0,0,0,0,0,0.0,0,0,15.0,22000,9,999999999,0,0.2680,0,88,0.000,0.0,0.0\n1987,1,1,3,60,C9C9C9C9*0?9?9?9?9?9?9?9A7A7B8B8A7*0*0E8*0*0,13.8,7.6,66,95700,0,1415,311,0,0,0,0,0,0,0,0,0.0,0,0,9.9,22000,9,999999999,0,0.2680,0,88,0.000,0.0,0.0\n1987,1,1,4,60,C9C9C9C9*0?9?9?9?9?9?9?9A7A7B8B8A7*0*0E8*0*0,12.7,7.3,70,95700,0,1415,306,0,0,0,0,0,0,0,0,0.0,0,0,9.9,22000,9,999999999,0,0.2680,0,88,0.000,0.0,0.0";

    #[test]
    fn test_scan_element() {
        let raw_source = "Hello,,how\r\n,are,you\n\"auto,con,ruedas\",tres".to_string();
        let source: Vec<u8> = raw_source.into_bytes();

        let mut s = EpwScanner::new(&source);

        assert_eq!("Hello", EpwScanner::scan_text(s.scan_element()));
        assert_eq!(s.line, 1);
        assert!(!s.end_of_line);

        assert_eq!("", EpwScanner::scan_text(s.scan_element()));
        assert_eq!(s.line, 1);

        // The \r is gone
        assert_eq!(s.scan_element(), Some("how".as_bytes()));
        assert_eq!(s.line, 2);
        assert!(s.end_of_line);

        assert_eq!("", EpwScanner::scan_text(s.scan_element()));
        assert_eq!("are", EpwScanner::scan_text(s.scan_element()));
        assert_eq!("you", EpwScanner::scan_text(s.scan_element()));
        assert_eq!(s.line, 3);
        assert!(s.end_of_line);

        // Commas within quotes are not separators
        assert_eq!(
            s.scan_element(),
            Some("\"auto,con,ruedas\"".as_bytes())
        );
        assert_eq!(s.line, 3);

        assert_eq!("tres", EpwScanner::scan_text(s.scan_element()));
        assert!(s.end_of_line);
        assert!(s.scan_element().is_none());
    }

    #[test]
    fn test_scan_record() {
        let source = "a,b,c\n\n1,2\n".as_bytes();
        let mut s = EpwScanner::new(source);

        let r = s.scan_record().unwrap();
        assert_eq!(r.len(), 3);

        // An empty line is a record with one empty element
        let r = s.scan_record().unwrap();
        assert_eq!(r, vec!["".as_bytes()]);

        let r = s.scan_record().unwrap();
        assert_eq!(r, vec!["1".as_bytes(), "2".as_bytes()]);

        assert!(s.scan_record().is_none());
    }

    #[test]
    fn test_scan_number() {
        let mut s = EpwScanner::new(&[]);
        assert_eq!(s.scan_number(Some(" 12.5 ".as_bytes())), 12.5);
        assert_eq!(s.coerced, 0);
        assert_eq!(s.scan_number(Some("-3".as_bytes())), -3.0);
        assert_eq!(s.scan_number(Some("abc".as_bytes())), 0.0);
        assert_eq!(s.scan_number(Some("".as_bytes())), 0.0);
        assert_eq!(s.scan_number(None), 0.0);
        assert_eq!(s.coerced, 3);
    }

    #[test]
    fn test_location() {
        let source = SANTIAGO.as_bytes();
        let mut s = EpwScanner::new(source);
        let location = s.parse_location();

        assert_eq!(location.name, "SANTIAGO");
        assert_eq!(location.station_id, "855740");
        assert_eq!(location.latitude, -33.38);
        assert_eq!(location.longitude, -70.78);
        assert_eq!(location.timezone, -4);
        assert_eq!(s.line, 2);
    }

    #[test]
    fn test_short_location() {
        let source = "LOCATION,Nowhere\n".as_bytes();
        let mut s = EpwScanner::new(source);
        let location = s.parse_location();

        assert_eq!(location.name, "Nowhere");
        assert_eq!(location.station_id, "");
        assert_eq!(location.latitude, 0.0);
        assert_eq!(location.longitude, 0.0);
        assert_eq!(location.timezone, 0);
    }

    #[test]
    fn test_parse_file() {
        let epw = EpwScanner::build_weather_data(SANTIAGO.as_bytes());

        assert_eq!(epw.location().name, "SANTIAGO");
        assert_eq!(epw.rows_read(), 4);
        assert_eq!(epw.coerced_fields(), 0);

        let dry_bulb = epw.series(WeatherVariable::DryBulb);
        assert_eq!(dry_bulb.len(), HOURS_PER_YEAR);
        assert_eq!(&dry_bulb[0..5], &[16.7, 15.1, 13.8, 12.7, 0.0]);

        assert_eq!(epw.series(WeatherVariable::DewPoint)[1], 8.4);
        assert_eq!(epw.series(WeatherVariable::RelativeHumidity)[3], 70.);
        assert_eq!(epw.series(WeatherVariable::WindSpeed)[0], 1.5);
        assert_eq!(epw.series(WeatherVariable::GlobalHorizontal)[0], 0.);
    }

    #[test]
    fn test_malformed_numbers() {
        let mut src = String::from("LOCATION,X,-,-,-,1,10.0,oops,2\n");
        for _ in 0..SKIPPED_LINES {
            src.push_str("SKIPPED\n");
        }
        src.push_str("1999,1,1,1,60,-,N/A,5,50,0,0,0,0,100,200,50,0,0,0,0,0\n");

        let epw = EpwScanner::build_weather_data(src.as_bytes());
        assert_eq!(epw.latitude(), 10.0);
        assert_eq!(epw.longitude(), 0.0);
        assert_eq!(epw.timezone(), 2);

        assert_eq!(epw.series(WeatherVariable::DryBulb)[0], 0.0);
        assert_eq!(epw.series(WeatherVariable::DewPoint)[0], 5.0);
        assert_eq!(epw.series(WeatherVariable::GlobalHorizontal)[0], 100.0);
        assert_eq!(epw.series(WeatherVariable::DirectBeam)[0], 200.0);
        assert_eq!(epw.series(WeatherVariable::Diffuse)[0], 50.0);
        // The line is too short to contain the wind speed
        assert_eq!(epw.series(WeatherVariable::WindSpeed)[0], 0.0);

        // longitude, dry bulb and wind speed
        assert_eq!(epw.coerced_fields(), 3);
    }
}
