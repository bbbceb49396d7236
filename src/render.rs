//! Plain-text view of a [`Schedule`].

use std::io::{self, Write};

use crate::{Locale, Schedule};

const TODAY_MARKER: &str = "*";
const ARROW: &str = "->";
const LAST_MARKER: &str = "(last)";

/// Writes one heading per month followed by its Sundays and their pages.
///
/// An empty schedule writes the locale's empty-state message instead.
///
/// # Errors
/// Propagates errors from `writer`.
pub fn render_text<W: Write + ?Sized>(schedule: &Schedule, locale: Locale, writer: &mut W) -> io::Result<()> {
    if schedule.is_empty() {
        return writeln!(writer, "{}", locale.empty_message());
    }

    for (i, group) in schedule.groups().iter().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        writeln!(writer, "{}", locale.month_title(group.year, group.month))?;

        for entry in &group.entries {
            let today = if entry.is_today { TODAY_MARKER } else { " " };
            write!(
                writer,
                "{today} {} {ARROW} {}",
                locale.entry_label(entry.date),
                entry.destination
            )?;
            if entry.is_last {
                write!(writer, " {LAST_MARKER}")?;
            }
            writeln!(writer)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CalendarDate, MonthDay, ScheduleConfig};

    fn date(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    fn render(schedule: &Schedule, locale: Locale) -> String {
        let mut out = Vec::new();
        render_text(schedule, locale, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_korean() {
        let config = ScheduleConfig {
            season_start: date(2025, 11, 20),
            target: MonthDay::new(12, 8).unwrap(),
            ..ScheduleConfig::default()
        };
        let schedule = Schedule::build(&config, date(2025, 11, 30));

        let expected = "\
2025년 11월
  11월 23일(일) -> 11_23.html
* 11월 30일(일) -> 11_30.html

2025년 12월
  12월 7일(일) -> 12_07.html (last)
";
        assert_eq!(render(&schedule, Locale::Korean), expected);
    }

    #[test]
    fn test_render_english() {
        let config = ScheduleConfig {
            season_start: date(2025, 11, 4),
            target: MonthDay::new(11, 10).unwrap(),
            ..ScheduleConfig::default()
        };
        let schedule = Schedule::build(&config, date(2025, 11, 4));

        assert_eq!(
            render(&schedule, Locale::English),
            "November 2025\n  Sun, Nov 9 -> 11_09.html (last)\n"
        );
    }

    #[test]
    fn test_render_empty() {
        let config = ScheduleConfig {
            season_start: date(2025, 11, 4),
            target: MonthDay::new(11, 4).unwrap(),
            ..ScheduleConfig::default()
        };
        let schedule = Schedule::build(&config, date(2025, 11, 4));

        assert_eq!(render(&schedule, Locale::Korean), "표시할 일요일이 없습니다.\n");
        assert_eq!(render(&schedule, Locale::English), "No Sundays to display.\n");
    }
}
