#[macro_use]
mod macros;

pub mod astronomy;
pub mod calendar;
pub mod display;
pub mod duration;
pub mod options;
pub mod season;
pub mod text;
pub mod units;

pub use astronomy::{DayPhase, MoonPhase, SeasonalCurve};
pub use calendar::Calendar;
pub use display::Weekday;
pub use duration::{print_approx_duration, print_clipped_duration, print_duration};
pub use options::{CalendarOptions, TimeFormat};
pub use season::Season;
