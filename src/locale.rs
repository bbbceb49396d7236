use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, ParseError, prelude::*};

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Language of the rendered labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[display(fmt = "korean")]
    Korean,
    #[display(fmt = "english")]
    English,
}

impl Locale {
    /// Button text for a Sunday, e.g. `11월 9일(일)`.
    pub fn entry_label(self, date: CalendarDate) -> String {
        match self {
            Self::Korean => format!("{}월 {}일(일)", date.month(), date.day()),
            Self::English => format!("Sun, {} {}", short_month(date.month()), date.day()),
        }
    }

    /// Accessible description of selecting a Sunday, e.g. `2025년 11월 9일(일) 선택`.
    pub fn selection_label(self, date: CalendarDate) -> String {
        match self {
            Self::Korean => format!("{}년 {}월 {}일(일) 선택", date.year(), date.month(), date.day()),
            Self::English => format!(
                "Select Sunday, {} {}, {}",
                short_month(date.month()),
                date.day(),
                date.year()
            ),
        }
    }

    /// Heading of a month group, e.g. `2025년 11월`.
    pub fn month_title(self, year: i32, month: u8) -> String {
        match self {
            Self::Korean => format!("{year}년 {month}월"),
            Self::English => format!("{} {year}", month_name(month)),
        }
    }

    /// Shown instead of the schedule when there is no Sunday to pick.
    pub const fn empty_message(self) -> &'static str {
        match self {
            Self::Korean => "표시할 일요일이 없습니다.",
            Self::English => "No Sundays to display.",
        }
    }
}

impl FromStr for Locale {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "korean" | "ko" => Ok(Self::Korean),
            "english" | "en" => Ok(Self::English),
            "" => Err(ParseError::EmptyInput),
            other => Err(ParseError::InvalidFormat(format!("Unknown locale: {other}"))),
        }
    }
}

fn month_name(month: u8) -> &'static str {
    usize::from(month)
        .checked_sub(1)
        .and_then(|i| ENGLISH_MONTHS.get(i))
        .copied()
        .unwrap_or("?")
}

fn short_month(month: u8) -> &'static str {
    let name = month_name(month);
    name.get(..3).unwrap_or(name)
}
