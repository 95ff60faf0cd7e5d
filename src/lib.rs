//! Calendar range selection and trip form rules for a trip planner.
//!
//! A calendar widget reports taps as [`CalendarDay`] values. [`select_day`]
//! folds each tap into a [`DateRange`], [`build_marked_dates`] turns the range
//! into the map the widget renders, and [`format_range_label`] produces the
//! text shown in the date field.

mod config;
mod consts;
mod locale;
mod marked;
mod prelude;
mod range;
mod store;
#[cfg(test)]
mod test_utils;
mod trip;
mod types;
mod validate;

pub use config::{ConfigError, PlannerConfig};
pub use consts::*;
pub use locale::{Locale, LocaleError, format_range_label, format_trip_when};
pub use marked::{MarkedDate, MarkedDateMap, MarkingStyle, build_marked_dates, build_marked_dates_with};
pub use range::{DateRange, RangeError, select_day};
pub use store::{FileTripStore, MemoryTripStore, StoreError, TripId, TripStore};
pub use trip::{
    AttendanceForm, ConfirmAttendance, GuestList, NewTrip, NewTripLink, TripError, TripForm,
    TripLinkForm, TripStep, UpdateTrip,
};
pub use types::{CivilDate, Day, Month, Year};
pub use validate::{is_valid_email, is_valid_url};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Why a date string could not be read as a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0} (expected YYYY-MM-DD)")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// A date string handed over by the calendar widget was malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid date input {input:?}: {source}")]
pub struct InvalidDateInput {
    input:  String,
    #[source]
    source: ParseError,
}

impl InvalidDateInput {
    /// The string as received
    pub fn input(&self) -> &str {
        &self.input
    }

    pub const fn reason(&self) -> &ParseError {
        &self.source
    }
}

/// One day tapped on the calendar widget.
///
/// Carries the widget's ISO date and its UNIX timestamp in milliseconds.
/// Days are ordered by timestamp, which is what range selection compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{date}")]
#[serde(try_from = "WidgetDay", into = "WidgetDay")]
pub struct CalendarDay {
    date:      CivilDate,
    timestamp: i64,
}

/// Wire shape of a day as the calendar widget reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WidgetDay {
    date_string: String,
    timestamp:   i64,
}

impl CalendarDay {
    /// Validates a widget-supplied date string and pairs it with its timestamp.
    ///
    /// # Errors
    /// Returns `InvalidDateInput` if `date_string` is not a valid `YYYY-MM-DD` date.
    pub fn new(date_string: &str, timestamp: i64) -> Result<Self, InvalidDateInput> {
        let date = date_string.parse::<CivilDate>().map_err(|source| {
            tracing::warn!(input = date_string, error = %source, "rejected calendar date");
            InvalidDateInput {
                input: date_string.to_owned(),
                source,
            }
        })?;
        Ok(Self { date, timestamp })
    }

    /// A day stamped at its UTC midnight.
    pub fn at_midnight(date: CivilDate) -> Self {
        Self {
            date,
            timestamp: date.midnight_timestamp(),
        }
    }

    pub const fn date(&self) -> CivilDate {
        self.date
    }

    /// The ISO `YYYY-MM-DD` form, used as the marked-dates key
    pub fn date_string(&self) -> String {
        self.date.to_string()
    }

    pub const fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

impl FromStr for CalendarDay {
    type Err = InvalidDateInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let day = Self::new(s, 0)?;
        Ok(Self::at_midnight(day.date))
    }
}

impl PartialOrd for CalendarDay {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDay {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp
            .cmp(&other.timestamp)
            .then_with(|| self.date.cmp(&other.date))
    }
}

impl TryFrom<WidgetDay> for CalendarDay {
    type Error = InvalidDateInput;

    fn try_from(raw: WidgetDay) -> Result<Self, Self::Error> {
        Self::new(&raw.date_string, raw.timestamp)
    }
}

impl From<CalendarDay> for WidgetDay {
    fn from(day: CalendarDay) -> Self {
        Self {
            date_string: day.date_string(),
            timestamp:   day.timestamp,
        }
    }
}
