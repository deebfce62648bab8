use bevy_ecs::system::Res;

use super::clock::SimClock;
use crate::model::Calendar;
use crate::model::units::{TURNS_PER_DAY, TURNS_PER_HOUR};

// Internal check functions for testability.

fn yearly_check(now: &Calendar) -> bool {
    now.once_every(now.year_turns())
}

fn seasonal_check(now: &Calendar) -> bool {
    now.once_every(now.season_turns())
}

fn daily_check(now: &Calendar) -> bool {
    now.once_every(TURNS_PER_DAY)
}

fn hourly_check(now: &Calendar) -> bool {
    now.once_every(TURNS_PER_HOUR)
}

// Bevy run condition functions (for use with `.run_if()`).

pub fn yearly(clock: Res<SimClock>) -> bool {
    yearly_check(clock.now())
}

/// First turn of each season. Fires even when eternal seasons keep the
/// season name from changing.
pub fn seasonal(clock: Res<SimClock>) -> bool {
    seasonal_check(clock.now())
}

pub fn daily(clock: Res<SimClock>) -> bool {
    daily_check(clock.now())
}

pub fn hourly(clock: Res<SimClock>) -> bool {
    hourly_check(clock.now())
}

pub fn at_night(clock: Res<SimClock>) -> bool {
    clock.now().is_night()
}

/// Full daylight only; dawn and dusk do not count.
pub fn in_daylight(clock: Res<SimClock>) -> bool {
    clock.now().is_day()
}

/// Run condition that fires on turns divisible by `turns`.
pub fn every_turns(turns: i64) -> impl FnMut(Res<SimClock>) -> bool + Clone {
    move |clock: Res<SimClock>| clock.now().once_every(turns)
}
