use bevy_ecs::resource::Resource;
use bevy_ecs::system::ResMut;
use serde::{Deserialize, Serialize};

use crate::model::{Calendar, CalendarOptions, Season};

/// Simulation clock resource holding the world's start time and "now".
///
/// Advances by one turn per tick. The `advance_clock` system moves the clock
/// forward at the end of each tick (in `SimPhase::Last`), so systems see the
/// current time before it advances. `start` is fixed when the clock is created.
#[derive(Resource, Debug, Clone)]
pub struct SimClock {
    start: Calendar,
    turn: Calendar,
}

/// Persisted form of a [`SimClock`]: raw turn counts only. Calendar fields are
/// recomputed on restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockSnapshot {
    pub start: i64,
    pub turn: i64,
}

impl SimClock {
    /// Create a clock at `start_turn`.
    ///
    /// With eternal seasons enabled, `initial_season` is replaced by the season
    /// `start_turn` falls in on the ordinary calendar, so the world stays in
    /// the season it was created in.
    pub fn new(start_turn: i64, options: CalendarOptions) -> Self {
        let options = if options.eternal_season {
            let cycling = CalendarOptions {
                eternal_season: false,
                ..options
            };
            CalendarOptions {
                initial_season: Calendar::new(start_turn, cycling).season(),
                ..options
            }
        } else {
            options
        };
        tracing::debug!(
            start_turn,
            season_length = options.season_length(),
            initial_season = %options.initial_season,
            "clock created"
        );
        let start = Calendar::new(start_turn, options);
        Self { start, turn: start }
    }

    /// Start at the first turn of `season` in `year`.
    pub fn starting_in(season: Season, year: i64, options: CalendarOptions) -> Self {
        let start = Calendar::from_fields(0, 0, 0, season, year, options);
        Self::new(start.turn(), options)
    }

    /// Rebuild a clock from a snapshot. `options` are applied as given, so a
    /// saved `initial_season` is kept even when it differs from the season of
    /// `snapshot.start`. The same holds for [`SimClock::reconfigure`].
    pub fn restore(snapshot: ClockSnapshot, options: CalendarOptions) -> Self {
        tracing::debug!(start = snapshot.start, turn = snapshot.turn, "clock restored");
        Self {
            start: Calendar::new(snapshot.start, options),
            turn: Calendar::new(snapshot.turn, options),
        }
    }

    pub fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            start: self.start.turn(),
            turn: self.turn.turn(),
        }
    }

    /// Calendar at world creation.
    pub fn start(&self) -> &Calendar {
        &self.start
    }

    /// Current simulation time.
    pub fn now(&self) -> &Calendar {
        &self.turn
    }

    pub fn options(&self) -> &CalendarOptions {
        self.turn.options()
    }

    /// Turns since world creation.
    pub fn elapsed(&self) -> i64 {
        self.turn.turn() - self.start.turn()
    }

    /// Advance the clock by one turn.
    pub fn advance(&mut self) {
        let before = self.turn.part_of_day();
        self.turn.increment();
        let after = self.turn.part_of_day();
        if before != after {
            tracing::debug!(turn = self.turn.turn(), phase = %after, "part of day changed");
        }
    }

    /// Apply changed world options (e.g. a new season length) to both calendars.
    pub fn reconfigure(&mut self, options: CalendarOptions) {
        tracing::info!(
            season_length = options.season_length(),
            eternal_season = options.eternal_season,
            "calendar options changed"
        );
        self.start = self.start.with_options(options);
        self.turn = self.turn.with_options(options);
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(0, CalendarOptions::default())
    }
}

/// Bevy system that advances the simulation clock by one turn.
/// Registered in `SimPhase::Last` so all other systems see the current
/// time before it advances.
pub fn advance_clock(mut clock: ResMut<SimClock>) {
    clock.advance();
}
