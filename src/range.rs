use serde::{Deserialize, Serialize};

use crate::{CalendarDay, InvalidDateInput};

/// The trip dates picked so far on the calendar.
///
/// Selection happens in two taps, so a range is empty, has only its start,
/// or is complete with the start's timestamp no later than the end's. An end
/// without a start cannot be
/// expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RangeFields", into = "RangeFields")]
pub enum DateRange {
    /// Nothing picked yet
    #[default]
    Empty,
    /// First tap recorded, waiting for the second
    Start(CalendarDay),
    /// Both ends picked
    Complete { start: CalendarDay, end: CalendarDay },
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: CalendarDay, end: CalendarDay },

    /// End date given without a start date.
    #[error("Invalid date range: end ({0}) has no start")]
    MissingStart(CalendarDay),

    /// One of the boundary dates could not be parsed.
    #[error(transparent)]
    InvalidDate(#[from] InvalidDateInput),
}

/// Serialized form, mirroring the `startsAt`/`endsAt` pair the screens keep.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RangeFields {
    #[serde(default)]
    starts_at: Option<CalendarDay>,
    #[serde(default)]
    ends_at:   Option<CalendarDay>,
}

impl DateRange {
    /// Creates a complete range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if `start` has a later timestamp than `end`.
    pub fn complete(start: CalendarDay, end: CalendarDay) -> Result<Self, RangeError> {
        if start.timestamp() > end.timestamp() {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self::Complete { start, end })
    }

    /// Parses a complete range from two ISO date strings.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidDate` for a malformed date and
    /// `RangeError::InvalidRange` if the dates are out of order.
    pub fn from_iso(start: &str, end: &str) -> Result<Self, RangeError> {
        Self::complete(start.parse()?, end.parse()?)
    }

    pub const fn start(&self) -> Option<&CalendarDay> {
        match self {
            Self::Empty => None,
            Self::Start(start) | Self::Complete { start, .. } => Some(start),
        }
    }

    pub const fn end(&self) -> Option<&CalendarDay> {
        match self {
            Self::Complete { end, .. } => Some(end),
            Self::Empty | Self::Start(_) => None,
        }
    }

    /// Both boundaries, if the range is complete
    pub const fn bounds(&self) -> Option<(CalendarDay, CalendarDay)> {
        match *self {
            Self::Complete { start, end } => Some((start, end)),
            Self::Empty | Self::Start(_) => None,
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }

    /// Folds one calendar tap into the selection. See [`select_day`].
    #[must_use]
    pub fn select(&self, tapped: CalendarDay) -> Self {
        match *self {
            Self::Empty | Self::Complete { .. } => Self::Start(tapped),
            Self::Start(start) if tapped.timestamp() >= start.timestamp() => Self::Complete { start, end: tapped },
            Self::Start(start) => Self::Complete {
                start: tapped,
                end:   start,
            },
        }
    }
}

/// Applies a tap on `tapped` to the current selection.
///
/// - with nothing selected, or a complete range, the tap starts a new range;
/// - with only a start, the tap completes the range, swapping the ends when
///   `tapped` is earlier than the start.
///
/// Tapping the start day again yields a single-day range.
pub fn select_day(current: &DateRange, tapped: CalendarDay) -> DateRange {
    let next = current.select(tapped);
    tracing::debug!(
        tapped = %tapped,
        start = ?next.start().map(CalendarDay::date_string),
        end = ?next.end().map(CalendarDay::date_string),
        "calendar selection updated"
    );
    next
}

impl TryFrom<RangeFields> for DateRange {
    type Error = RangeError;

    fn try_from(fields: RangeFields) -> Result<Self, Self::Error> {
        match (fields.starts_at, fields.ends_at) {
            (None, None) => Ok(Self::Empty),
            (Some(start), None) => Ok(Self::Start(start)),
            (Some(start), Some(end)) => Self::complete(start, end),
            (None, Some(end)) => Err(RangeError::MissingStart(end)),
        }
    }
}

impl From<DateRange> for RangeFields {
    fn from(range: DateRange) -> Self {
        Self {
            starts_at: range.start().copied(),
            ends_at:   range.end().copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{day, taps};
    use proptest::prelude::*;

    #[test]
    fn test_select_cases() {
        struct TestCase {
            taps:        &'static [&'static str],
            expected:    (Option<&'static str>, Option<&'static str>),
            description: &'static str,
        }

        let cases = [
            TestCase {
                taps:        &[],
                expected:    (None, None),
                description: "no taps",
            },
            TestCase {
                taps:        &["2025-07-12"],
                expected:    (Some("2025-07-12"), None),
                description: "first tap sets start",
            },
            TestCase {
                taps:        &["2025-07-12", "2025-07-18"],
                expected:    (Some("2025-07-12"), Some("2025-07-18")),
                description: "second tap later completes range",
            },
            TestCase {
                taps:        &["2025-07-18", "2025-07-12"],
                expected:    (Some("2025-07-12"), Some("2025-07-18")),
                description: "second tap earlier swaps ends",
            },
            TestCase {
                taps:        &["2025-07-12", "2025-07-12"],
                expected:    (Some("2025-07-12"), Some("2025-07-12")),
                description: "same day twice gives single-day range",
            },
            TestCase {
                taps:        &["2025-07-12", "2025-07-18", "2025-08-01"],
                expected:    (Some("2025-08-01"), None),
                description: "third tap restarts",
            },
            TestCase {
                taps:        &["2025-07-12", "2025-07-18", "2025-07-01", "2025-06-28"],
                expected:    (Some("2025-06-28"), Some("2025-07-01")),
                description: "restart then earlier tap swaps again",
            },
        ];

        for case in &cases {
            let range = taps(case.taps);
            let actual = (
                range.start().map(CalendarDay::date_string),
                range.end().map(CalendarDay::date_string),
            );
            let expected = (
                case.expected.0.map(str::to_owned),
                case.expected.1.map(str::to_owned),
            );
            assert_eq!(actual, expected, "{}", case.description);
        }
    }

    #[test]
    fn test_complete_rejects_reversed() {
        let early = day("2025-07-12");
        let late = day("2025-07-18");

        assert!(DateRange::complete(early, late).is_ok());
        assert!(DateRange::complete(early, early).is_ok());
        assert_eq!(
            DateRange::complete(late, early),
            Err(RangeError::InvalidRange {
                start: late,
                end:   early,
            })
        );
    }

    #[test]
    fn test_from_iso() {
        let range = DateRange::from_iso("2025-07-12", "2025-07-18").unwrap();
        assert_eq!(range.bounds(), Some((day("2025-07-12"), day("2025-07-18"))));

        let err = DateRange::from_iso("2025-07-12", "2025-07-32").unwrap_err();
        assert!(matches!(err, RangeError::InvalidDate(_)));
    }

    #[test]
    fn test_accessors() {
        assert!(DateRange::default().is_empty());
        assert_eq!(DateRange::Empty.start(), None);

        let partial = taps(&["2025-07-12"]);
        assert!(!partial.is_complete());
        assert_eq!(partial.bounds(), None);

        let full = taps(&["2025-07-12", "2025-07-18"]);
        assert!(full.is_complete());
        assert_eq!(full.end(), Some(&day("2025-07-18")));
    }

    #[test]
    fn test_widget_timestamp_decides_order() {
        // Same calendar day reported at different times of day
        let morning = CalendarDay::new("2025-07-12", 1_752_300_000_000).unwrap();
        let evening = CalendarDay::new("2025-07-12", 1_752_340_000_000).unwrap();
        let range = DateRange::Start(evening).select(morning);
        assert_eq!(range.bounds(), Some((morning, evening)));
    }

    #[test]
    fn test_equal_timestamps_keep_tap_order() {
        struct TestCase {
            first:       (&'static str, i64),
            second:      (&'static str, i64),
            expected:    (&'static str, &'static str),
            description: &'static str,
        }

        let cases = [
            TestCase {
                first:       ("2025-07-18", 1_000),
                second:      ("2025-07-12", 1_000),
                expected:    ("2025-07-18", "2025-07-12"),
                description: "tie on timestamp, earlier date tapped second",
            },
            TestCase {
                first:       ("2025-07-12", 1_000),
                second:      ("2025-07-18", 1_000),
                expected:    ("2025-07-12", "2025-07-18"),
                description: "tie on timestamp, later date tapped second",
            },
            TestCase {
                first:       ("2025-07-12", 2_000),
                second:      ("2025-07-18", 1_000),
                expected:    ("2025-07-18", "2025-07-12"),
                description: "smaller timestamp wins the start even with a later date",
            },
        ];

        for case in &cases {
            let first = CalendarDay::new(case.first.0, case.first.1).unwrap();
            let second = CalendarDay::new(case.second.0, case.second.1).unwrap();
            let range = select_day(&DateRange::Start(first), second);
            let (start, end) = range.bounds().unwrap();
            assert_eq!(
                (start.date_string(), end.date_string()),
                (case.expected.0.to_owned(), case.expected.1.to_owned()),
                "{}",
                case.description
            );
        }

        let tied_start = CalendarDay::new("2025-07-18", 1_000).unwrap();
        let tied_end = CalendarDay::new("2025-07-12", 1_000).unwrap();
        assert!(DateRange::complete(tied_start, tied_end).is_ok());
    }

    #[test]
    fn test_serde_shape() {
        let range = taps(&["2025-07-12", "2025-07-18"]);
        let json = serde_json::to_value(range).unwrap();
        assert_eq!(json["startsAt"]["dateString"], "2025-07-12");
        assert_eq!(json["endsAt"]["dateString"], "2025-07-18");

        let back: DateRange = serde_json::from_value(json).unwrap();
        assert_eq!(back, range);

        let empty: DateRange = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, DateRange::Empty);
    }

    #[test]
    fn test_serde_rejects_end_without_start() {
        let json = r#"{"endsAt":{"dateString":"2025-07-18","timestamp":0}}"#;
        assert!(serde_json::from_str::<DateRange>(json).is_err());

        let reversed = r#"{
            "startsAt":{"dateString":"2025-07-18","timestamp":10},
            "endsAt":{"dateString":"2025-07-12","timestamp":0}
        }"#;
        assert!(serde_json::from_str::<DateRange>(reversed).is_err());
    }

    fn arb_day() -> impl Strategy<Value = CalendarDay> {
        (2000_u16..2100, 1_u8..=12, 1_u8..=28).prop_map(|(year, month, day)| {
            let date = crate::CivilDate::new(year, month, day)
                .unwrap_or_else(|e| panic!("generated date should be valid: {e}"));
            CalendarDay::at_midnight(date)
        })
    }

    proptest! {
        #[test]
        fn ordered_taps_complete_in_order(a in arb_day(), b in arb_day()) {
            let (a, b) = if a.timestamp() <= b.timestamp() { (a, b) } else { (b, a) };
            let range = select_day(&select_day(&DateRange::Empty, a), b);
            prop_assert_eq!(range, DateRange::Complete { start: a, end: b });
        }

        #[test]
        fn reversed_taps_swap(a in arb_day(), b in arb_day()) {
            prop_assume!(a.timestamp() > b.timestamp());
            let range = select_day(&select_day(&DateRange::Empty, a), b);
            prop_assert_eq!(range, DateRange::Complete { start: b, end: a });
        }

        #[test]
        fn tap_after_complete_restarts(a in arb_day(), b in arb_day(), c in arb_day()) {
            let (a, b) = if a.timestamp() <= b.timestamp() { (a, b) } else { (b, a) };
            let complete = DateRange::Complete { start: a, end: b };
            prop_assert_eq!(select_day(&complete, c), DateRange::Start(c));
        }

        #[test]
        fn selection_never_reverses(a in arb_day(), b in arb_day()) {
            let range = select_day(&select_day(&DateRange::Empty, a), b);
            let (start, end) = range.bounds().unwrap_or((a, a));
            prop_assert!(start.timestamp() <= end.timestamp());
        }
    }
}
