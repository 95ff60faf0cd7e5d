use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{ELLIPSIS, MAX_DESTINATION_DISPLAY_LEN};
use crate::prelude::*;
use crate::{CivilDate, DateRange};

const EN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const PT_BR_MONTHS: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];

const EN_MONTHS_SHORT: [&str; 12] =
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

const PT_BR_MONTHS_SHORT: [&str; 12] =
    ["jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez"];

/// Language used for month names and the words joining range boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[display(fmt = "en")]
    #[serde(rename = "en")]
    English,
    #[display(fmt = "pt-BR")]
    #[serde(rename = "pt-BR", alias = "pt-br")]
    BrazilianPortuguese,
}

/// A locale tag this crate has no month names for.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported locale: {0}")]
pub struct LocaleError(String);

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Ok(Self::English),
            "pt-br" | "pt" => Ok(Self::BrazilianPortuguese),
            _ => Err(LocaleError(s.trim().to_owned())),
        }
    }
}

impl Locale {
    pub const fn month_name(self, date: &CivilDate) -> &'static str {
        let index = date.month_typed().index();
        match self {
            Self::English => EN_MONTHS[index],
            Self::BrazilianPortuguese => PT_BR_MONTHS[index],
        }
    }

    pub const fn month_abbrev(self, date: &CivilDate) -> &'static str {
        let index = date.month_typed().index();
        match self {
            Self::English => EN_MONTHS_SHORT[index],
            Self::BrazilianPortuguese => PT_BR_MONTHS_SHORT[index],
        }
    }

    /// "12 July" / "12 de julho"
    fn day_and_month(self, date: &CivilDate) -> String {
        match self {
            Self::English => format!("{} {}", date.day(), self.month_name(date)),
            Self::BrazilianPortuguese => format!("{} de {}", date.day(), self.month_name(date)),
        }
    }

    /// Word placed between the two ends of a range
    const fn range_joiner(self) -> &'static str {
        match self {
            Self::English => "to",
            Self::BrazilianPortuguese => "a",
        }
    }
}

/// Text shown in the date field for the current selection.
///
/// - nothing selected: `""`
/// - start only: `"12 July"`
/// - same month: `"12 to 18 July"`
/// - different months: `"28 June to 3 July"`
pub fn format_range_label(range: &DateRange, locale: Locale) -> String {
    let joiner = locale.range_joiner();
    match range {
        DateRange::Empty => String::new(),
        DateRange::Start(start) => locale.day_and_month(&start.date()),
        DateRange::Complete { start, end } => {
            let (start, end) = (start.date(), end.date());
            if start.same_month_as(&end) {
                format!("{} {joiner} {}", start.day(), locale.day_and_month(&end))
            } else {
                format!(
                    "{} {joiner} {}",
                    locale.day_and_month(&start),
                    locale.day_and_month(&end)
                )
            }
        },
    }
}

/// One-line trip heading, e.g. `"Lisbon from 12 to 18 of Jul."`.
///
/// Long destinations are cut after 14 characters. Days are two digits and
/// the month is the start date's abbreviated name.
pub fn format_trip_when(destination: &str, starts_at: CivilDate, ends_at: CivilDate, locale: Locale) -> String {
    let destination = destination.trim();
    let shown = if destination.chars().count() > MAX_DESTINATION_DISPLAY_LEN {
        let cut: String = destination.chars().take(MAX_DESTINATION_DISPLAY_LEN).collect();
        format!("{cut}{ELLIPSIS}")
    } else {
        destination.to_owned()
    };

    let month = locale.month_abbrev(&starts_at);
    let (from, to) = (starts_at.day(), ends_at.day());
    match locale {
        Locale::English => format!("{shown} from {from:02} to {to:02} of {month}."),
        Locale::BrazilianPortuguese => format!("{shown} de {from:02} a {to:02} de {month}."),
    }
}
