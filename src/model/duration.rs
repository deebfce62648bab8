//! Human-readable durations from raw turn counts.

use super::text::count_of;
use super::units::{
    INDEFINITELY_LONG, TURNS_PER_DAY, TURNS_PER_HOUR, TURNS_PER_MINUTE, full_days_in,
    full_hours_in, full_minutes_in, full_seconds_in, hours, minutes,
};

/// Duration in its largest whole unit, rounded down: `"3 hours"`.
pub fn print_clipped_duration(turns: i64) -> String {
    if turns >= INDEFINITELY_LONG {
        return "forever".to_string();
    }

    if turns < TURNS_PER_MINUTE {
        count_of(full_seconds_in(turns), "second", "seconds")
    } else if turns < TURNS_PER_HOUR {
        count_of(full_minutes_in(turns), "minute", "minutes")
    } else if turns < TURNS_PER_DAY {
        count_of(full_hours_in(turns), "hour", "hours")
    } else {
        count_of(full_days_in(turns), "day", "days")
    }
}

/// Duration in its largest unit plus whatever is left over in the next
/// smaller one: `"3 hours and 11 minutes"`.
pub fn print_duration(turns: i64) -> String {
    let divider = if turns > TURNS_PER_MINUTE && turns < INDEFINITELY_LONG {
        if turns < TURNS_PER_HOUR {
            TURNS_PER_MINUTE
        } else if turns < TURNS_PER_DAY {
            TURNS_PER_HOUR
        } else {
            TURNS_PER_DAY
        }
    } else {
        0
    };

    let remainder = if divider != 0 { turns % divider } else { 0 };
    if remainder != 0 {
        return format!(
            "{} and {}",
            print_clipped_duration(turns),
            print_clipped_duration(remainder)
        );
    }

    print_clipped_duration(turns)
}

/// Rough duration: `"about 2 days"`, `"more than 3 hours"`, `"less than 4 hours"`.
///
/// Values within a vicinity of a whole unit round to it; anything further off
/// is reported as a bound. Minutes and seconds are always exact. The short
/// form uses `>` and `<` instead of words.
pub fn print_approx_duration(turns: i64, verbose: bool) -> String {
    let make_result = |turns: i64, verbose_prefix: &str, short_prefix: &str| {
        let prefix = if verbose { verbose_prefix } else { short_prefix };
        format!("{prefix}{}", print_clipped_duration(turns))
    };

    let (divider, vicinity) = if turns > TURNS_PER_DAY {
        (TURNS_PER_DAY, hours(2))
    } else if turns > TURNS_PER_HOUR {
        (TURNS_PER_HOUR, minutes(5))
    } else {
        (0, 0)
    };

    let mut turns = turns;
    if divider != 0 {
        let remainder = turns % divider;
        if remainder >= divider - vicinity {
            turns += divider;
        } else if remainder > vicinity {
            return if remainder < divider / 2 {
                make_result(turns, "more than ", ">")
            } else {
                make_result(turns + divider, "less than ", "<")
            };
        }
    }

    make_result(turns, "about ", "")
}
