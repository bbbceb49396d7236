use chrono::NaiveDate;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in a week, the stride between consecutive Sundays
pub const DAYS_PER_WEEK: u32 = 7;

/// Month of the rolling annual deadline
pub const TARGET_MONTH: u8 = FEBRUARY;
/// Day of the rolling annual deadline
pub const TARGET_DAY: u8 = 8;

/// Default first day of the season: 2025-11-04
/// Checked at compile time.
pub const DEFAULT_SEASON_START: NaiveDate = match NaiveDate::from_ymd_opt(2025, 11, 4) {
    Some(date) => date,
    None => panic!("default season start must be a valid date"),
};

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days: an anniversary must exist in every year, so Feb 29 is never valid
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator between month and day in a destination page name
pub const DESTINATION_SEPARATOR: char = '_';
/// File extension of destination pages
pub const DESTINATION_EXTENSION: &str = "html";
