use serde::{Deserialize, Serialize};

use crate::{DateRange, Locale, MarkedDateMap, MarkingStyle, build_marked_dates_with, format_range_label};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid planner config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Display settings for the date picker.
///
/// Every field has a default, so `{}` is a valid config:
///
/// ```
/// use trip_calendar::{Locale, PlannerConfig};
///
/// let config = PlannerConfig::from_json_str(r#"{ "locale": "pt-BR" }"#).unwrap();
/// assert_eq!(config.locale, Locale::BrazilianPortuguese);
/// assert_eq!(config.marking.color, "#bef264");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    pub locale:  Locale,
    pub marking: MarkingStyle,
}

impl PlannerConfig {
    /// # Errors
    /// Returns `ConfigError::Json` for malformed JSON, unknown keys or an
    /// unsupported locale.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Date field label for `range` in the configured locale
    pub fn label(&self, range: &DateRange) -> String {
        format_range_label(range, self.locale)
    }

    /// Marked dates for `range` in the configured colours
    pub fn marked_dates(&self, range: &DateRange) -> MarkedDateMap {
        build_marked_dates_with(range, &self.marking)
    }
}
