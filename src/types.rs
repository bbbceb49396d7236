use crate::consts::{DATE_SEPARATOR, DAYS_IN_MONTH, MAX_MONTH, TARGET_DAY, TARGET_MONTH};
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day-of-month value guaranteed to exist in its month in every year.
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the given month.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    /// February 29 is rejected.
    pub fn new(value: u8, month: Month) -> Result<Self, ParseError> {
        let invalid = ParseError::InvalidDay {
            month: month.get(),
            day:   value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > days_in_month(month) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Checked at compile time.
const SEASON_DEADLINE: MonthDay = match (NonZeroU8::new(TARGET_MONTH), NonZeroU8::new(TARGET_DAY)) {
    (Some(month), Some(day)) if TARGET_MONTH <= MAX_MONTH && TARGET_DAY <= DAYS_IN_MONTH[TARGET_MONTH as usize] => {
        MonthDay {
            month: Month(month),
            day:   Day(day),
        }
    },
    _ => panic!("season deadline constants must form a valid month and day"),
};

/// A month and day that recur every year, e.g. the Feb 8 deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: Month,
    day:   Day,
}

impl MonthDay {
    /// Creates a new anniversary from raw month and day numbers.
    ///
    /// # Errors
    /// Returns `ParseError` if the month is out of range or the day does not
    /// exist in that month (including February 29).
    pub fn new(month: u8, day: u8) -> Result<Self, ParseError> {
        let month = Month::new(month)?;
        let day = Day::new(day, month)?;
        Ok(Self { month, day })
    }

    /// February 8, the default season deadline
    pub const fn season_deadline() -> Self {
        SEASON_DEADLINE
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }
}

impl Default for MonthDay {
    fn default() -> Self {
        Self::season_deadline()
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{DATE_SEPARATOR}{:02}", self.month.get(), self.day.get())
    }
}

impl FromStr for MonthDay {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            [month, day] => {
                let month = parse_u8(month)?;
                let day = parse_u8(day)?;
                Self::new(month, day)
            },
            _ => Err(ParseError::InvalidFormat(format!(
                "Expected MM{DATE_SEPARATOR}DD, found {trimmed}"
            ))),
        }
    }
}

impl Serialize for MonthDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MonthDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Helper functions

pub(crate) fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

pub const fn days_in_month(month: Month) -> u8 {
    DAYS_IN_MONTH[month.get() as usize]
}
