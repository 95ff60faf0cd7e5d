//! The marked-dates map handed back to the calendar widget.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_RANGE_COLOR, DEFAULT_RANGE_TEXT_COLOR};
use crate::{CivilDate, DateRange};

/// How one day is painted on the calendar.
///
/// Serializes to the period-marking shape the widget expects:
/// `startingDay`, `endingDay`, `selected`, `color`, `textColor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkedDate {
    pub starting_day: bool,
    pub ending_day:   bool,
    #[serde(rename = "selected")]
    pub in_range:     bool,
    pub color:        String,
    pub text_color:   String,
}

/// ISO date string to marking, ordered chronologically.
pub type MarkedDateMap = BTreeMap<String, MarkedDate>;

/// Colours used for marked days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkingStyle {
    pub color:      String,
    pub text_color: String,
}

impl Default for MarkingStyle {
    fn default() -> Self {
        Self {
            color:      DEFAULT_RANGE_COLOR.to_owned(),
            text_color: DEFAULT_RANGE_TEXT_COLOR.to_owned(),
        }
    }
}

impl MarkingStyle {
    fn mark(&self, starting_day: bool, ending_day: bool) -> MarkedDate {
        MarkedDate {
            starting_day,
            ending_day,
            in_range: true,
            color: self.color.clone(),
            text_color: self.text_color.clone(),
        }
    }
}

/// Builds the marked-dates map for `range` with the default colours.
pub fn build_marked_dates(range: &DateRange) -> MarkedDateMap {
    build_marked_dates_with(range, &MarkingStyle::default())
}

/// Builds the marked-dates map for `range`.
///
/// An empty range marks nothing. A lone start is one day flagged as both
/// start and end. A complete range marks every civil day from start to end
/// inclusive.
pub fn build_marked_dates_with(range: &DateRange, style: &MarkingStyle) -> MarkedDateMap {
    let (first, last) = match range {
        DateRange::Empty => return MarkedDateMap::new(),
        DateRange::Start(start) => (start.date(), start.date()),
        DateRange::Complete { start, end } => {
            let (a, b) = (start.date(), end.date());
            // timestamps ordered the range; dates decide what gets painted
            if a <= b { (a, b) } else { (b, a) }
        },
    };

    first
        .iter_through(last)
        .map(|date: CivilDate| {
            let mark = style.mark(date == first, date == last);
            (date.to_string(), mark)
        })
        .collect()
}
