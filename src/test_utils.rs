//! Test fixtures shared across unit tests.

use crate::{CalendarDay, DateRange, select_day};

/// Parses an ISO date into a midnight-stamped calendar day.
pub fn day(iso: &str) -> CalendarDay {
    iso.parse()
        .unwrap_or_else(|e| panic!("fixture date {iso:?} should parse: {e}"))
}

/// Replays a sequence of taps starting from an empty selection.
pub fn taps(days: &[&str]) -> DateRange {
    days.iter()
        .fold(DateRange::Empty, |range, iso| select_day(&range, day(iso)))
}
