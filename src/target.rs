use log::debug;

use crate::{CalendarDate, MonthDay};

/// The season deadline relative to `today`: Feb 8 of this year while it has
/// not passed (Feb 8 itself included), otherwise Feb 8 of next year.
pub fn resolve_target(today: impl Into<CalendarDate>) -> CalendarDate {
    resolve_anniversary(today, MonthDay::season_deadline())
}

/// Next occurrence of `anniversary` on or after `today`.
pub fn resolve_anniversary(today: impl Into<CalendarDate>, anniversary: MonthDay) -> CalendarDate {
    let today = today.into();
    let this_year = CalendarDate::in_year(today.year(), anniversary);

    let target = if today <= this_year {
        this_year
    } else {
        CalendarDate::in_year(today.year().saturating_add(1), anniversary)
    };

    debug!("Resolved {anniversary} relative to {today}: {target}");
    target
}
