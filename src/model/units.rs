//! Turn length and unit conversions.
//!
//! One turn is six real-world seconds. Every other duration in the crate is
//! expressed as a whole number of turns.

pub const SECONDS_PER_TURN: i64 = 6;
pub const SECONDS_PER_MINUTE: i64 = 60;
pub const MINUTES_PER_HOUR: i64 = 60;
pub const HOURS_PER_DAY: i64 = 24;
pub const SEASONS_PER_YEAR: i64 = 4;

pub const TURNS_PER_MINUTE: i64 = SECONDS_PER_MINUTE / SECONDS_PER_TURN; // 10
pub const TURNS_PER_HOUR: i64 = TURNS_PER_MINUTE * MINUTES_PER_HOUR; // 600
pub const TURNS_PER_DAY: i64 = TURNS_PER_HOUR * HOURS_PER_DAY; // 14,400

/// Durations at or above this are reported as "forever".
///
/// Kept at `i32::MAX / 100` so the value still fits when scaled to movement points.
pub const INDEFINITELY_LONG: i64 = i32::MAX as i64 / 100;

/// Whole turns in `n` seconds (truncating).
pub const fn seconds(n: i64) -> i64 {
    n / SECONDS_PER_TURN
}

pub const fn minutes(n: i64) -> i64 {
    n * TURNS_PER_MINUTE
}

pub const fn hours(n: i64) -> i64 {
    n * TURNS_PER_HOUR
}

pub const fn days(n: i64) -> i64 {
    n * TURNS_PER_DAY
}

/// Real seconds covered by `turns`.
pub const fn full_seconds_in(turns: i64) -> i64 {
    turns * SECONDS_PER_TURN
}

pub const fn full_minutes_in(turns: i64) -> i64 {
    turns / TURNS_PER_MINUTE
}

pub const fn full_hours_in(turns: i64) -> i64 {
    turns / TURNS_PER_HOUR
}

pub const fn full_days_in(turns: i64) -> i64 {
    turns / TURNS_PER_DAY
}
