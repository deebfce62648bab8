pub mod ecs;
pub mod model;

pub use ecs::{ClockSnapshot, SimClock, build_sim_app};
pub use model::{
    Calendar, CalendarOptions, DayPhase, MoonPhase, Season, TimeFormat, Weekday,
    print_approx_duration, print_clipped_duration, print_duration,
};
