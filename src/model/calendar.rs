use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Sub, SubAssign};

use super::options::CalendarOptions;
use super::season::Season;
use super::units::{
    HOURS_PER_DAY, MINUTES_PER_HOUR, SEASONS_PER_YEAR, SECONDS_PER_TURN, TURNS_PER_DAY,
    TURNS_PER_HOUR, TURNS_PER_MINUTE, days, hours, minutes,
};

/// A point in simulated time, counted in turns since turn 0.
///
/// The turn count is the only real state. Second, minute, hour, day, season
/// and year are projections of it, recomputed whenever the count changes, so
/// they can never be stale. The options copy supplies the season length and
/// eternal-season settings that the projection depends on.
///
/// Equality, ordering and hashing look at the turn count alone.
#[derive(Debug, Clone, Copy)]
pub struct Calendar {
    turn: i64,
    options: CalendarOptions,
    second: u32,
    minute: u32,
    hour: u32,
    day: u32,
    season: Season,
    year: i64,
}

impl Calendar {
    /// Create from a raw turn count.
    pub fn new(turn: i64, options: CalendarOptions) -> Self {
        let mut calendar = Self {
            turn,
            options,
            second: 0,
            minute: 0,
            hour: 0,
            day: 0,
            season: Season::Spring,
            year: 0,
        };
        calendar.sync();
        calendar
    }

    /// Create from calendar fields. `day` counts within the season from 0.
    pub fn from_fields(
        minute: i64,
        hour: i64,
        day: i64,
        season: Season,
        year: i64,
        options: CalendarOptions,
    ) -> Self {
        let season_turns = options.season_length() * TURNS_PER_DAY;
        let turn = minutes(minute)
            + hours(hour)
            + days(day)
            + season.index() * season_turns
            + year * season_turns * SEASONS_PER_YEAR;
        Self::new(turn, options)
    }

    /// Recompute every derived field from the turn count.
    ///
    /// Euclidean division keeps fields in range for negative counts.
    fn sync(&mut self) {
        let season_length = self.options.season_length();
        let season_turns = season_length * TURNS_PER_DAY;

        self.year = self.turn.div_euclid(season_turns * SEASONS_PER_YEAR);
        self.season = if self.options.eternal_season {
            self.options.initial_season
        } else {
            Season::from_index_wrapping(self.turn.div_euclid(season_turns))
        };
        self.day = self.turn.div_euclid(TURNS_PER_DAY).rem_euclid(season_length) as u32;
        self.hour = self.turn.div_euclid(TURNS_PER_HOUR).rem_euclid(HOURS_PER_DAY) as u32;
        self.minute = self.turn.div_euclid(TURNS_PER_MINUTE).rem_euclid(MINUTES_PER_HOUR) as u32;
        // (turn * 6) mod 60, without overflowing near i64::MAX
        self.second = (self.turn.rem_euclid(TURNS_PER_MINUTE) * SECONDS_PER_TURN) as u32;
    }

    pub fn turn(&self) -> i64 {
        self.turn
    }

    /// Replace the turn count.
    pub fn set_turn(&mut self, turn: i64) {
        self.turn = turn;
        self.sync();
    }

    /// Advance by a single turn.
    pub fn increment(&mut self) {
        self.set_turn(self.turn + 1);
    }

    pub fn options(&self) -> &CalendarOptions {
        &self.options
    }

    /// The same instant viewed under different options.
    pub fn with_options(&self, options: CalendarOptions) -> Self {
        Self::new(self.turn, options)
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Day within the current season (0-indexed).
    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    /// Days per season, clamped to at least one.
    pub fn season_length(&self) -> i64 {
        self.options.season_length()
    }

    pub fn season_turns(&self) -> i64 {
        self.season_length() * TURNS_PER_DAY
    }

    pub fn year_turns(&self) -> i64 {
        self.season_turns() * SEASONS_PER_YEAR
    }

    /// Midnight of the current day.
    pub fn start_of_day(&self) -> Calendar {
        Self::new(self.turn - self.turn.rem_euclid(TURNS_PER_DAY), self.options)
    }

    pub fn minutes_past_midnight(&self) -> u32 {
        self.minute + self.hour * 60
    }

    pub fn seconds_past_midnight(&self) -> u32 {
        self.second + self.minute * 60 + self.hour * 60 * 60
    }

    /// Turns elapsed since the start of the year.
    pub fn turn_of_year(&self) -> i64 {
        let season_turns = self.season_turns();
        self.season.index() * season_turns + self.turn.rem_euclid(season_turns)
    }

    /// Days elapsed since the start of the year.
    pub fn day_of_year(&self) -> i64 {
        i64::from(self.day) + self.season_length() * self.season.index()
    }

    /// Turns until the time of day of `turn` next comes around, in `1..=TURNS_PER_DAY`.
    pub fn diurnal_time_before(&self, turn: i64) -> i64 {
        let remainder = turn.rem_euclid(TURNS_PER_DAY) - self.turn.rem_euclid(TURNS_PER_DAY);
        if remainder > 0 {
            remainder
        } else {
            TURNS_PER_DAY + remainder
        }
    }

    /// True on turns that are a multiple of `event_frequency`.
    pub fn once_every(&self, event_frequency: i64) -> bool {
        self.turn.rem_euclid(event_frequency.max(1)) == 0
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(0, CalendarOptions::default())
    }
}

impl From<Calendar> for i64 {
    fn from(calendar: Calendar) -> Self {
        calendar.turn
    }
}

impl PartialEq for Calendar {
    fn eq(&self, other: &Self) -> bool {
        self.turn == other.turn
    }
}

impl Eq for Calendar {}

impl PartialEq<i64> for Calendar {
    fn eq(&self, other: &i64) -> bool {
        self.turn == *other
    }
}

impl Hash for Calendar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.turn.hash(state);
    }
}

impl Ord for Calendar {
    fn cmp(&self, other: &Self) -> Ordering {
        self.turn.cmp(&other.turn)
    }
}

impl PartialOrd for Calendar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialOrd<i64> for Calendar {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.turn.cmp(other))
    }
}

impl AddAssign<i64> for Calendar {
    fn add_assign(&mut self, rhs: i64) {
        self.set_turn(self.turn + rhs);
    }
}

impl SubAssign<i64> for Calendar {
    fn sub_assign(&mut self, rhs: i64) {
        self.set_turn(self.turn - rhs);
    }
}

impl AddAssign<Calendar> for Calendar {
    fn add_assign(&mut self, rhs: Calendar) {
        *self += rhs.turn;
    }
}

impl SubAssign<Calendar> for Calendar {
    fn sub_assign(&mut self, rhs: Calendar) {
        *self -= rhs.turn;
    }
}

impl Add<i64> for Calendar {
    type Output = Calendar;

    fn add(mut self, rhs: i64) -> Calendar {
        self += rhs;
        self
    }
}

impl Sub<i64> for Calendar {
    type Output = Calendar;

    fn sub(mut self, rhs: i64) -> Calendar {
        self -= rhs;
        self
    }
}

impl Add<Calendar> for Calendar {
    type Output = Calendar;

    fn add(mut self, rhs: Calendar) -> Calendar {
        self += rhs;
        self
    }
}

impl Sub<Calendar> for Calendar {
    type Output = Calendar;

    fn sub(mut self, rhs: Calendar) -> Calendar {
        self -= rhs;
        self
    }
}
