//! Sun and moon derived from a [`Calendar`].
//!
//! Sunrise, sunset and daylight intensity follow piecewise-linear curves
//! through the year: each season interpolates between the solstice and equinox
//! values that bound it, so there are no jumps at season boundaries. The
//! reference values are hour-rounded figures for a mid-latitude temperate
//! location (New England). Nautical twilight there runs 69-82 minutes, so a
//! one-hour twilight window is used on both ends of the day.

use serde::{Deserialize, Serialize};

use super::calendar::Calendar;
use super::season::Season;
use super::units::{TURNS_PER_DAY, TURNS_PER_HOUR, seconds};

/// Length of both dawn and dusk.
pub const TWILIGHT_TURNS: i64 = seconds(60 * 60);

/// Light level of full daylight at an equinox.
pub const DAYLIGHT_LEVEL: f64 = 100.0;

/// Light added by each lit quarter of the moon.
pub const MOONLIGHT_PER_QUARTER: f64 = 2.25;

/// A quantity that peaks or dips at the solstices and sits at a middle value
/// on both equinoxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalCurve {
    pub summer_solstice: f64,
    pub equinox: f64,
    pub winter_solstice: f64,
}

impl SeasonalCurve {
    /// Values at the first and last day of `season`.
    pub fn endpoints(&self, season: Season) -> (f64, f64) {
        match season {
            Season::Spring => (self.equinox, self.summer_solstice),
            Season::Summer => (self.summer_solstice, self.equinox),
            Season::Autumn => (self.equinox, self.winter_solstice),
            Season::Winter => (self.winter_solstice, self.equinox),
        }
    }
}

/// Hour of sunrise.
pub const SUNRISE_HOURS: SeasonalCurve = SeasonalCurve {
    summer_solstice: 5.0,
    equinox: 7.0,
    winter_solstice: 8.0,
};

/// Hour of sunset.
pub const SUNSET_HOURS: SeasonalCurve = SeasonalCurve {
    summer_solstice: 20.0,
    equinox: 19.0,
    winter_solstice: 17.0,
};

/// Solstices are +/- 25% sunlight intensity from the equinoxes.
pub const DAYLIGHT_MODIFIER: SeasonalCurve = SeasonalCurve {
    summer_solstice: 1.25,
    equinox: 1.0,
    winter_solstice: 0.75,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum DayPhase {
    Night,
    Dawn,
    Day,
    Dusk,
}

string_enum!(DayPhase {
    Night => "night",
    Dawn => "dawn",
    Day => "day",
    Dusk => "dusk",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    HalfMoonWaxing,
    WaxingGibbous,
    Full,
    WaningGibbous,
    HalfMoonWaning,
    WaningCrescent,
}

string_enum!(MoonPhase {
    New => "new",
    WaxingCrescent => "waxing_crescent",
    HalfMoonWaxing => "half_moon_waxing",
    WaxingGibbous => "waxing_gibbous",
    Full => "full",
    WaningGibbous => "waning_gibbous",
    HalfMoonWaning => "half_moon_waning",
    WaningCrescent => "waning_crescent",
});

impl MoonPhase {
    /// Phases in cycle order, starting from new moon.
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::New,
        MoonPhase::WaxingCrescent,
        MoonPhase::HalfMoonWaxing,
        MoonPhase::WaxingGibbous,
        MoonPhase::Full,
        MoonPhase::WaningGibbous,
        MoonPhase::HalfMoonWaning,
        MoonPhase::WaningCrescent,
    ];

    pub const COUNT: i64 = 8;

    /// Number of lit quarters, 0 (new) to 4 (full).
    pub fn quarters_lit(self) -> u32 {
        match self {
            MoonPhase::New => 0,
            MoonPhase::WaxingCrescent | MoonPhase::WaningCrescent => 1,
            MoonPhase::HalfMoonWaxing | MoonPhase::HalfMoonWaning => 2,
            MoonPhase::WaxingGibbous | MoonPhase::WaningGibbous => 3,
            MoonPhase::Full => 4,
        }
    }
}

impl Calendar {
    /// Linear blend from `start` on the first day of the season towards `end`
    /// on its last.
    pub fn interpolate_within_season(&self, start: f64, end: f64) -> f64 {
        let percent_elapsed = f64::from(self.day()) / self.season_length() as f64;
        start * (1.0 - percent_elapsed) + end * percent_elapsed
    }

    /// Value of `curve` on the current day.
    pub fn seasonal_value(&self, curve: &SeasonalCurve) -> f64 {
        let (start, end) = curve.endpoints(self.season());
        self.interpolate_within_season(start, end)
    }

    fn at_hour_of_day(&self, hour: f64) -> Calendar {
        self.start_of_day() + (hour * TURNS_PER_HOUR as f64) as i64
    }

    pub fn sunrise(&self) -> Calendar {
        self.at_hour_of_day(self.seasonal_value(&SUNRISE_HOURS))
    }

    pub fn sunset(&self) -> Calendar {
        self.at_hour_of_day(self.seasonal_value(&SUNSET_HOURS))
    }

    pub fn start_of_dawn(&self) -> Calendar {
        self.sunrise() - TWILIGHT_TURNS
    }

    pub fn end_of_dusk(&self) -> Calendar {
        self.sunset() + TWILIGHT_TURNS
    }

    /// Classify the current instant. Each boundary belongs to the later phase:
    /// the sunrise turn is already day and the sunset turn is already dusk.
    pub fn part_of_day(&self) -> DayPhase {
        if *self < self.start_of_dawn() {
            DayPhase::Night
        } else if *self < self.sunrise() {
            DayPhase::Dawn
        } else if *self < self.sunset() {
            DayPhase::Day
        } else if *self < self.end_of_dusk() {
            DayPhase::Dusk
        } else {
            DayPhase::Night
        }
    }

    pub fn is_night(&self) -> bool {
        self.part_of_day() == DayPhase::Night
    }

    pub fn is_dawn(&self) -> bool {
        self.part_of_day() == DayPhase::Dawn
    }

    pub fn is_day(&self) -> bool {
        self.part_of_day() == DayPhase::Day
    }

    pub fn is_dusk(&self) -> bool {
        self.part_of_day() == DayPhase::Dusk
    }

    /// Progress of daylight through twilight: 0 at night, 1 during the day,
    /// ramping up across dawn and back down across dusk. Always within `[0, 1]`.
    pub fn twilight_ratio(&self) -> f64 {
        match self.part_of_day() {
            DayPhase::Night => 0.0,
            DayPhase::Dawn => {
                (self.turn() - self.start_of_dawn().turn()) as f64 / TWILIGHT_TURNS as f64
            }
            DayPhase::Day => 1.0,
            DayPhase::Dusk => {
                (self.end_of_dusk().turn() - self.turn()) as f64 / TWILIGHT_TURNS as f64
            }
        }
    }

    /// Phase of the moon. A full cycle lasts two thirds of a season.
    ///
    /// Days are counted from noon so the phase does not change during a night.
    pub fn moon(&self) -> MoonPhase {
        let cycle_days = self.season_length() as f64 * 2.0 / 3.0;
        let phase_change_per_day = MoonPhase::COUNT as f64 / cycle_days;
        let past_noon = self.turn().rem_euclid(TURNS_PER_DAY) >= TURNS_PER_DAY / 2;
        let current_day = self.turn().div_euclid(TURNS_PER_DAY) + i64::from(past_noon);
        let phase = (current_day as f64 * phase_change_per_day).round() as i64;
        MoonPhase::ALL[phase.rem_euclid(MoonPhase::COUNT) as usize]
    }

    pub fn moon_quarters_lit(&self) -> u32 {
        self.moon().quarters_lit()
    }

    /// Full-day light level for the current point in the year.
    pub fn current_daylight_level(&self) -> f64 {
        self.seasonal_value(&DAYLIGHT_MODIFIER) * DAYLIGHT_LEVEL
    }

    /// Ambient light right now: daylight faded by twilight, plus moonlight.
    pub fn sunlight(&self) -> f64 {
        let twilight = self.twilight_ratio();
        let daylight = self.current_daylight_level() * twilight;
        let moonlight = f64::from(self.moon_quarters_lit()) * MOONLIGHT_PER_QUARTER + twilight;
        daylight + moonlight
    }
}
