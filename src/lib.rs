//! Selectable Sundays between a season start and a rolling annual deadline.
//!
//! The core is four total functions: [`normalize_to_midnight`],
//! [`next_sunday_on_or_after`], [`enumerate_sundays`] and [`resolve_target`].
//! [`Schedule`] groups their result by month for display, and
//! [`Destination`] names the page a selected Sunday leads to.

mod clock;
mod config;
mod consts;
mod date;
mod locale;
mod navigation;
mod prelude;
pub mod render;
mod schedule;
mod sunday;
mod target;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, ScheduleConfig, find_config_locations};
pub use consts::*;
pub use date::{CalendarDate, normalize_to_midnight};
pub use locale::Locale;
pub use navigation::{Destination, Navigator};
pub use schedule::{MonthGroup, Schedule, ScheduleEntry, ScheduleError};
pub use sunday::{SundaySequence, enumerate_sundays, next_sunday_on_or_after};
pub use target::{resolve_anniversary, resolve_target};
pub use types::{Day, Month, MonthDay};

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {_0}")]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {month:02}")]
    InvalidDay { month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}
