use std::fmt;

use super::calendar::Calendar;
use super::options::TimeFormat;
use super::text::count_of;
use super::units::TURNS_PER_DAY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

string_enum!(Weekday {
    Sunday => "Sunday",
    Monday => "Monday",
    Tuesday => "Tuesday",
    Wednesday => "Wednesday",
    Thursday => "Thursday",
    Friday => "Friday",
    Saturday => "Saturday",
});

/// Weekdays starting from the one turn 0 falls on.
const WEEK_FROM_TURN_ZERO: [Weekday; 7] = [
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
];

impl Calendar {
    /// Clock time in the configured [`TimeFormat`]. `just_hour` drops minutes
    /// and seconds (military time always shows them).
    pub fn print_time(&self, just_hour: bool) -> String {
        let (hour, minute, second) = (self.hour(), self.minute(), self.second());
        match self.options().time_format {
            TimeFormat::Military => format!("{hour:02}{minute:02}.{second:02}"),
            TimeFormat::TwentyFourHour if just_hour => hour.to_string(),
            TimeFormat::TwentyFourHour => format!("{hour:02}:{minute:02}:{second:02}"),
            TimeFormat::TwelveHour => {
                let hour_param = match hour % 12 {
                    0 => 12,
                    h => h,
                };
                let meridiem = if hour < 12 { "AM" } else { "PM" };
                if just_hour {
                    format!("{hour_param} {meridiem}")
                } else {
                    // Single-digit hours get a separator so the width stays fixed.
                    let padding = if hour_param < 10 { " " } else { "" };
                    format!("{hour_param}:{minute:02}:{second:02}{padding}{meridiem}")
                }
            }
        }
    }

    /// The largest non-zero unit of this value read as an elapsed period,
    /// e.g. `"3 days"`. Under a minute-and-a-bit it counts turns.
    pub fn textify_period(&self) -> String {
        let season = self.season().index();
        if self.year() > 0 {
            count_of(self.year(), "year", "years")
        } else if season > 0 && !self.options().eternal_season {
            count_of(season, "season", "seasons")
        } else if self.day() > 0 {
            count_of(i64::from(self.day()), "day", "days")
        } else if self.hour() > 0 {
            count_of(i64::from(self.hour()), "hour", "hours")
        } else if self.minute() >= 5 {
            count_of(i64::from(self.minute()), "minute", "minutes")
        } else {
            let turns = i64::from(self.second() / 6 + self.minute() * 10);
            count_of(turns, "turn", "turns")
        }
    }

    /// Day of the week. Turn 0 is a Thursday.
    pub fn day_of_week(&self) -> Weekday {
        let day = self.turn().div_euclid(TURNS_PER_DAY).rem_euclid(7);
        WEEK_FROM_TURN_ZERO[day as usize]
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Y{}.{}.D{} {:02}:{:02}:{:02}",
            self.year(),
            self.season().name(),
            self.day(),
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::options::CalendarOptions;
    use crate::model::season::Season;
    use crate::model::units::{days, hours, minutes};

    fn with_format(turn: i64, time_format: TimeFormat) -> Calendar {
        Calendar::new(
            turn,
            CalendarOptions {
                time_format,
                ..CalendarOptions::default()
            },
        )
    }

    #[test]
    fn military_time() {
        let c = with_format(hours(7) + minutes(5) + 3, TimeFormat::Military);
        assert_eq!(c.print_time(false), "0705.18");
        assert_eq!(c.print_time(true), "0705.18");
    }

    #[test]
    fn twenty_four_hour_time() {
        let c = with_format(hours(21) + minutes(45), TimeFormat::TwentyFourHour);
        assert_eq!(c.print_time(false), "21:45:00");
        assert_eq!(c.print_time(true), "21");
        let early = with_format(hours(3), TimeFormat::TwentyFourHour);
        assert_eq!(early.print_time(false), "03:00:00");
    }

    #[test]
    fn twelve_hour_time() {
        let midnight = with_format(0, TimeFormat::TwelveHour);
        assert_eq!(midnight.print_time(false), "12:00:00AM");
        assert_eq!(midnight.print_time(true), "12 AM");

        let morning = with_format(hours(9) + minutes(15), TimeFormat::TwelveHour);
        assert_eq!(morning.print_time(false), "9:15:00 AM");

        let noon = with_format(hours(12), TimeFormat::TwelveHour);
        assert_eq!(noon.print_time(true), "12 PM");

        let evening = with_format(hours(18) + minutes(30) + 1, TimeFormat::TwelveHour);
        assert_eq!(evening.print_time(false), "6:30:06 PM");
        assert_eq!(evening.print_time(true), "6 PM");
    }

    #[test]
    fn textify_picks_largest_unit() {
        let options = CalendarOptions::default();
        assert_eq!(Calendar::new(days(56 * 2), options).textify_period(), "2 years");
        assert_eq!(Calendar::new(days(14), options).textify_period(), "1 season");
        assert_eq!(Calendar::new(days(3), options).textify_period(), "3 days");
        assert_eq!(Calendar::new(hours(1), options).textify_period(), "1 hour");
        assert_eq!(Calendar::new(minutes(7), options).textify_period(), "7 minutes");
        assert_eq!(Calendar::new(minutes(2) + 4, options).textify_period(), "24 turns");
        assert_eq!(Calendar::new(0, options).textify_period(), "0 turns");
    }

    #[test]
    fn textify_skips_seasons_when_eternal() {
        let options = CalendarOptions {
            eternal_season: true,
            initial_season: Season::Autumn,
            ..CalendarOptions::default()
        };
        assert_eq!(Calendar::new(days(15), options).textify_period(), "1 day");
    }

    #[test]
    fn weekdays_start_on_thursday() {
        let options = CalendarOptions::default();
        assert_eq!(Calendar::new(0, options).day_of_week(), Weekday::Thursday);
        assert_eq!(Calendar::new(days(3) + hours(5), options).day_of_week(), Weekday::Sunday);
        assert_eq!(Calendar::new(days(6), options).day_of_week(), Weekday::Wednesday);
        assert_eq!(Calendar::new(days(7), options).day_of_week(), Weekday::Thursday);
        assert_eq!(Weekday::Monday.to_string(), "Monday");
    }

    #[test]
    fn display_format() {
        let turn = days(14 * 4 + 16) + hours(8) + minutes(4) + 2;
        let c = Calendar::new(turn, CalendarOptions::default());
        assert_eq!(c.to_string(), "Y1.Summer.D2 08:04:12");
    }
}
