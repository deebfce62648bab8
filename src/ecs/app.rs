use bevy_app::App;

use super::clock::SimClock;
use super::schedule::configure_sim_schedule;
use crate::model::CalendarOptions;

/// Build a headless Bevy app with a simulation clock starting at turn 0.
///
/// Manual tick control:
/// ```no_run
/// # use turn_calendar::ecs::{build_sim_app, SimTick};
/// # use turn_calendar::CalendarOptions;
/// let mut app = build_sim_app(CalendarOptions::default());
/// for _ in 0..14_400 {  // 1 day of six-second turns
///     app.world_mut().run_schedule(SimTick);
/// }
/// ```
pub fn build_sim_app(options: CalendarOptions) -> App {
    build_sim_app_with_clock(SimClock::new(0, options))
}

/// Build a headless Bevy app around an existing clock, e.g. one restored
/// from a [`ClockSnapshot`](super::clock::ClockSnapshot).
pub fn build_sim_app_with_clock(clock: SimClock) -> App {
    let mut app = App::empty();
    app.insert_resource(clock);
    app.add_schedule(configure_sim_schedule());
    app
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::sync::atomic::{AtomicU32, Ordering};

    use bevy_ecs::schedule::IntoScheduleConfigs;
    use bevy_ecs::system::Res;

    use super::*;
    use crate::ecs::conditions::{at_night, daily, every_turns, hourly, seasonal};
    use crate::ecs::schedule::{SimPhase, SimTick};
    use crate::ecs::test_helpers::{current_turn, tick_days, tick_turns};
    use crate::model::units::{TURNS_PER_HOUR, minutes};

    fn counting_system(
        counter: &Arc<AtomicU32>,
    ) -> impl FnMut(Res<SimClock>) + Send + Sync + 'static {
        let counter = counter.clone();
        move |_clock: Res<SimClock>| {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn app_builds_without_panic() {
        let _app = build_sim_app(CalendarOptions::default());
    }

    #[test]
    fn single_tick_advances_one_turn() {
        let mut app = build_sim_app(CalendarOptions::default());
        app.world_mut().run_schedule(SimTick);
        assert_eq!(current_turn(&app), 1);
        let clock = app.world().resource::<SimClock>();
        assert_eq!(clock.now().second(), 6);
    }

    #[test]
    fn hour_of_ticks() {
        let mut app = build_sim_app(CalendarOptions::default());
        tick_turns(&mut app, TURNS_PER_HOUR);
        let clock = app.world().resource::<SimClock>();
        assert_eq!(clock.now().hour(), 1);
        assert_eq!(clock.now().minute(), 0);
    }

    #[test]
    fn hourly_system_fires_once_per_hour() {
        let mut app = build_sim_app(CalendarOptions::default());
        let counter = Arc::new(AtomicU32::new(0));
        app.add_systems(
            SimTick,
            counting_system(&counter).run_if(hourly).in_set(SimPhase::Update),
        );
        tick_turns(&mut app, TURNS_PER_HOUR * 2);
        // Fires at turn 0 and turn 600
        assert_eq!(counter.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn daily_and_seasonal_systems() {
        let mut app = build_sim_app(CalendarOptions::with_season_length(2));
        let daily_counter = Arc::new(AtomicU32::new(0));
        app.add_systems(
            SimTick,
            counting_system(&daily_counter).run_if(daily).in_set(SimPhase::Update),
        );
        let seasonal_counter = Arc::new(AtomicU32::new(0));
        app.add_systems(
            SimTick,
            counting_system(&seasonal_counter).run_if(seasonal).in_set(SimPhase::Update),
        );
        tick_days(&mut app, 8);
        assert_eq!(daily_counter.load(Ordering::Relaxed), 8);
        assert_eq!(seasonal_counter.load(Ordering::Relaxed), 4);
    }

    #[test]
    fn every_turns_condition() {
        let mut app = build_sim_app(CalendarOptions::default());
        let counter = Arc::new(AtomicU32::new(0));
        app.add_systems(
            SimTick,
            counting_system(&counter).run_if(every_turns(minutes(1))).in_set(SimPhase::Update),
        );
        tick_turns(&mut app, minutes(5));
        assert_eq!(counter.load(Ordering::Relaxed), 5);
    }

    #[test]
    fn night_system_skips_daylight() {
        let mut app = build_sim_app(CalendarOptions::default());
        let counter = Arc::new(AtomicU32::new(0));
        app.add_systems(
            SimTick,
            counting_system(&counter).run_if(at_night).in_set(SimPhase::Update),
        );
        tick_days(&mut app, 1);
        // Spring day 0: night is 00:00-06:00 and 20:00-24:00
        assert_eq!(counter.load(Ordering::Relaxed), (TURNS_PER_HOUR * 10) as u32);
    }

    #[test]
    fn phases_see_the_turn_before_it_advances() {
        let log = Arc::new(Mutex::new(Vec::<(&'static str, i64)>::new()));

        let pre = log.clone();
        let post = log.clone();

        let mut app = build_sim_app(CalendarOptions::default());
        app.add_systems(
            SimTick,
            (move |clock: Res<SimClock>| {
                pre.lock().unwrap().push(("pre_update", clock.now().turn()));
            })
            .in_set(SimPhase::PreUpdate),
        );
        app.add_systems(
            SimTick,
            (move |clock: Res<SimClock>| {
                post.lock().unwrap().push(("post_update", clock.now().turn()));
            })
            .in_set(SimPhase::PostUpdate),
        );

        tick_turns(&mut app, 3);

        let entries = log.lock().unwrap();
        assert_eq!(
            *entries,
            vec![
                ("pre_update", 0),
                ("post_update", 0),
                ("pre_update", 1),
                ("post_update", 1),
                ("pre_update", 2),
                ("post_update", 2),
            ]
        );
        assert_eq!(current_turn(&app), 3);
    }
}
