use serde::{Deserialize, Serialize};

use super::season::Season;

/// How clock times are rendered by [`Calendar::print_time`](super::Calendar::print_time).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TimeFormat {
    Military,
    TwentyFourHour,
    #[default]
    TwelveHour,
}

string_enum!(TimeFormat {
    Military => "military",
    TwentyFourHour => "24h",
    TwelveHour => "12h",
});

fn default_season_length() -> u32 {
    14
}

/// World settings the calendar depends on.
///
/// Owned by whatever loads world options; the calendar only reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarOptions {
    /// Days per season. Zero is accepted here and clamped where consumed.
    #[serde(default = "default_season_length")]
    pub season_length: u32,
    /// When set, the season never advances.
    #[serde(default)]
    pub eternal_season: bool,
    /// Season reported while `eternal_season` is set.
    #[serde(default)]
    pub initial_season: Season,
    #[serde(default)]
    pub time_format: TimeFormat,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            season_length: default_season_length(),
            eternal_season: false,
            initial_season: Season::Spring,
            time_format: TimeFormat::TwelveHour,
        }
    }
}

impl CalendarOptions {
    pub fn with_season_length(season_length: u32) -> Self {
        Self {
            season_length,
            ..Self::default()
        }
    }

    /// Parse options from a JSON object. Missing keys take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        if options.season_length == 0 {
            tracing::warn!("season_length of 0 will be treated as 1");
        }
        Ok(options)
    }

    /// Days per season, never less than one.
    pub fn season_length(&self) -> i64 {
        i64::from(self.season_length.max(1))
    }
}
