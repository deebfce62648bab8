use bevy_app::App;

use crate::ecs::clock::SimClock;
use crate::ecs::schedule::SimTick;
use crate::model::units::TURNS_PER_DAY;

/// Run `n` ticks of the simulation schedule.
pub fn tick_turns(app: &mut App, n: i64) {
    for _ in 0..n {
        app.world_mut().run_schedule(SimTick);
    }
}

/// Run a whole number of days worth of ticks.
pub fn tick_days(app: &mut App, n: i64) {
    tick_turns(app, n * TURNS_PER_DAY);
}

/// Current turn count from the clock resource.
pub fn current_turn(app: &App) -> i64 {
    app.world().resource::<SimClock>().now().turn()
}
