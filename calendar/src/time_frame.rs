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

/// Number of hourly slots in a (non-leap) year
pub const HOURS_PER_YEAR: usize = 8760;

/// Number of days in a (non-leap) year
pub const DAYS_PER_YEAR: usize = 365;

/// Hours in a day
pub const HOURS_PER_DAY: usize = 24;

/// One slot of the [`TimeFrame`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HourOfYear {
    /// Hour of the day, from 1 to 24. Hour `h` covers the
    /// interval that ends at `h` o'clock (i.e., EPW convention)
    pub hour: u8,

    /// Day of the month, from 1 to 31
    pub day: u8,

    /// Month of the year, from 1 to 12
    pub month: u8,

    /// Day of the year, from 1 to 365
    pub day_of_year: u16,
}

/// The hour-of-year calendar of a non-leap year.
///
/// It always contains [`HOURS_PER_YEAR`] slots, ordered
/// by month, then day, then hour. February has 28 days, always.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeFrame {
    hours: Vec<HourOfYear>,
}

impl std::default::Default for TimeFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeFrame {
    /// Builds the calendar.
    pub fn new() -> Self {
        let mut hours = Vec::with_capacity(HOURS_PER_YEAR);
        let mut day_of_year: u16 = 0;
        for month in 1..=12u8 {
            for day in 1..=Self::month_length(month) {
                day_of_year += 1;
                for hour in 1..=HOURS_PER_DAY as u8 {
                    hours.push(HourOfYear {
                        hour,
                        day,
                        month,
                        day_of_year,
                    });
                }
            }
        }
        debug_assert_eq!(hours.len(), HOURS_PER_YEAR);
        Self { hours }
    }

    /// The number of days in a month (from 1 to 12) of a non-leap year.
    ///
    /// Anything that is not February, April, June, September or November
    /// is considered to have 31 days.
    pub fn month_length(month: u8) -> u8 {
        match month {
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Number of slots in the calendar (i.e., 8760)
    pub fn len(&self) -> usize {
        self.hours.len()
    }

    /// Never true, but here to keep Clippy happy
    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    /// Gets the slot at index `i`, if it exists
    pub fn get(&self, i: usize) -> Option<HourOfYear> {
        self.hours.get(i).copied()
    }

    /// The hour of the day (1 to 24) of slot `i`
    ///
    /// # Panics
    /// Panics if `i >= 8760`
    pub fn hour(&self, i: usize) -> u8 {
        self.hours[i].hour
    }

    /// The day of the month of slot `i`
    ///
    /// # Panics
    /// Panics if `i >= 8760`
    pub fn day(&self, i: usize) -> u8 {
        self.hours[i].day
    }

    /// The month (1 to 12) of slot `i`
    ///
    /// # Panics
    /// Panics if `i >= 8760`
    pub fn month(&self, i: usize) -> u8 {
        self.hours[i].month
    }

    /// The day of the year (1 to 365) of slot `i`
    ///
    /// # Panics
    /// Panics if `i >= 8760`
    pub fn day_of_year(&self, i: usize) -> u16 {
        self.hours[i].day_of_year
    }

    /// Iterates over all the slots, in order
    pub fn iter(&self) -> std::slice::Iter<'_, HourOfYear> {
        self.hours.iter()
    }
}

impl<'a> IntoIterator for &'a TimeFrame {
    type Item = &'a HourOfYear;
    type IntoIter = std::slice::Iter<'a, HourOfYear>;

    fn into_iter(self) -> Self::IntoIter {
        self.hours.iter()
    }
}
