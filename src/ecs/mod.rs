pub mod app;
pub mod clock;
pub mod conditions;
pub mod schedule;
#[cfg(test)]
pub(crate) mod test_helpers;

pub use app::{build_sim_app, build_sim_app_with_clock};
pub use clock::{ClockSnapshot, SimClock, advance_clock};
pub use conditions::{at_night, daily, every_turns, hourly, in_daylight, seasonal, yearly};
pub use schedule::{SimPhase, SimTick, configure_sim_schedule};
