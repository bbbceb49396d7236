use std::str::FromStr;

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Weekday};
use serde::{Deserialize, Serialize};

use crate::{
    DATE_SEPARATOR, MonthDay, ParseError,
    prelude::*,
    types::{Month, parse_u8},
};

/// A single calendar day with no time-of-day component.
///
/// Ordering and equality look at the calendar day only, so two values built
/// from different times on the same day compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "_0.year()", "_0.month()", "_0.day()")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a date from year, month and day.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` for a month outside `1..=12`,
    /// `ParseError::InvalidDay` for a day that does not exist in that month
    /// and `ParseError::InvalidYear` for a year chrono cannot represent.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        let month_typed = Month::new(month)?;
        NaiveDate::from_ymd_opt(year, month_typed.get().into(), day.into())
            .map(Self)
            .ok_or_else(|| {
                if day == 0 || day > 31 || NaiveDate::from_ymd_opt(year, 1, 1).is_some() {
                    ParseError::InvalidDay { month, day }
                } else {
                    ParseError::InvalidYear(year)
                }
            })
    }

    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The occurrence of an anniversary in the given year.
    ///
    /// Saturates at chrono's representable range.
    pub fn in_year(year: i32, anniversary: MonthDay) -> Self {
        let month: u32 = anniversary.month().get().into();
        let day: u32 = anniversary.day().get().into();
        NaiveDate::from_ymd_opt(year, month, day).map_or_else(
            || Self(if year < 0 { NaiveDate::MIN } else { NaiveDate::MAX }),
            Self,
        )
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month number, 1 to 12
    pub fn month(&self) -> u8 {
        // chrono guarantees 1..=12
        u8::try_from(self.0.month()).unwrap_or(u8::MAX)
    }

    /// Day of month, 1 to 31
    pub fn day(&self) -> u8 {
        u8::try_from(self.0.day()).unwrap_or(u8::MAX)
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn is_sunday(&self) -> bool {
        self.weekday() == Weekday::Sun
    }

    /// Adds days, or returns `None` past chrono's representable range.
    pub fn checked_add_days(self, days: u32) -> Option<Self> {
        self.0.checked_add_days(Days::new(days.into())).map(Self)
    }

    /// Adds days, saturating at chrono's representable range.
    pub fn saturating_add_days(self, days: u32) -> Self {
        self.checked_add_days(days).unwrap_or(Self(NaiveDate::MAX))
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: &Self) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    /// This day at 00:00:00.
    pub fn midnight(&self) -> NaiveDateTime {
        self.0.and_time(NaiveTime::default())
    }

    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_naive(date)
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(datetime: NaiveDateTime) -> Self {
        Self(datetime.date())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for CalendarDate {
    /// Uses the calendar day in the value's own time zone.
    fn from(datetime: DateTime<Tz>) -> Self {
        Self(datetime.date_naive())
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            [year, month, day] => {
                let year = year
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat((*year).to_owned()))?;
                let month = parse_u8(month)?;
                let day = parse_u8(day)?;
                Self::from_ymd(year, month, day)
            },
            _ => Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {trimmed}"
            ))),
        }
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Strips the time of day from any chrono date or date-time.
pub fn normalize_to_midnight(date: impl Into<CalendarDate>) -> CalendarDate {
    date.into()
}
