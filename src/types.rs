use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY, MS_PER_DAY,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::num::{NonZeroU8, NonZeroU16};
use std::str::FromStr;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{_0}")]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        match NonZeroU16::new(value) {
            Some(year) if value <= MAX_YEAR => Ok(Self(year)),
            _ => Err(ParseError::InvalidYear(value)),
        }
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{_0}")]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        match NonZeroU8::new(value) {
            Some(month) if value <= MAX_MONTH => Ok(Self(month)),
            _ => Err(ParseError::InvalidMonth(value)),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based index, handy for month-name tables
    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.get() - 1) as usize
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

/// A day-of-month value, only constructible for a known year and month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{_0}")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the length of the given month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: value,
        };
        let day = NonZeroU8::new(value).ok_or_else(invalid)?;
        if value > days_in_month(year.get(), month.get()) {
            return Err(invalid());
        }
        Ok(Self(day))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

/// A proleptic Gregorian calendar date with no time or zone attached.
///
/// Ordering is chronological (year, then month, then day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CivilDate {
    year:  Year,
    month: Month,
    day:   Day,
}

impl CivilDate {
    /// Builds a date from raw components.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// True when both dates fall in the same month of the same year
    pub fn same_month_as(&self, other: &Self) -> bool {
        self.year == other.year && self.month == other.month
    }

    /// The following calendar day, or `None` past 9999-12-31.
    pub fn succ(&self) -> Option<Self> {
        let (year, month, day) = next_day(self.year(), self.month(), self.day())?;
        Self::new(year, month, day).ok()
    }

    /// Whole days since 1970-01-01 (negative before the epoch).
    pub fn days_since_epoch(&self) -> i64 {
        days_from_civil(self.year(), self.month(), self.day())
    }

    /// UNIX timestamp in milliseconds of this date's midnight in UTC
    pub fn midnight_timestamp(&self) -> i64 {
        self.days_since_epoch() * MS_PER_DAY
    }

    /// Iterates from `self` to `end`, both inclusive. Empty when `end` is earlier.
    pub fn iter_through(self, end: Self) -> impl Iterator<Item = Self> {
        std::iter::successors(Some(self), Self::succ).take_while(move |date| *date <= end)
    }
}

impl FromStr for CivilDate {
    type Err = ParseError;

    /// Parses a strict ISO 8601 calendar date: `YYYY-MM-DD`, with no
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = s.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        };

        let widths_ok = [(year, 4), (month, 2), (day, 2)]
            .iter()
            .all(|(part, width)| part.len() == *width && part.bytes().all(|b| b.is_ascii_digit()));
        if !widths_ok {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }

        let number = |part: &str| {
            part.parse::<u16>()
                .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
        };
        let year = number(*year)?;
        let month = u8::try_from(number(*month)?).map_err(|_| ParseError::InvalidFormat(s.to_owned()))?;
        let day = u8::try_from(number(*day)?).map_err(|_| ParseError::InvalidFormat(s.to_owned()))?;

        Self::new(year, month, day)
    }
}

impl Serialize for CivilDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CivilDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

fn next_day(year: u16, month: u8, day: u8) -> Option<(u16, u8, u8)> {
    if day < days_in_month(year, month) {
        Some((year, month, day + 1))
    } else if month < DECEMBER {
        Some((year, month + 1, MIN_DAY))
    } else if year < MAX_YEAR {
        Some((year + 1, JANUARY, MIN_DAY))
    } else {
        None
    }
}

/// Days from 1970-01-01 to the given civil date (Hinnant's algorithm).
fn days_from_civil(year: u16, month: u8, day: u8) -> i64 {
    let y = i64::from(year) - i64::from(month <= FEBRUARY);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (i64::from(month) + 9) % 12;
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}
