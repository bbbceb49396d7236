use chrono::Datelike;
use log::trace;
use serde::Serialize;

use crate::{CalendarDate, DAYS_PER_WEEK, prelude::*};

/// Sundays in ascending order, exactly one week apart.
///
/// Only [`enumerate_sundays`] builds one, which keeps the stride invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deref, Serialize)]
#[serde(transparent)]
pub struct SundaySequence(Vec<CalendarDate>);

impl SundaySequence {
    pub fn first(&self) -> Option<CalendarDate> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<CalendarDate> {
        self.0.last().copied()
    }

    /// Binary search, the sequence is sorted.
    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.0.binary_search(date).is_ok()
    }

    pub fn into_vec(self) -> Vec<CalendarDate> {
        self.0
    }
}

impl IntoIterator for SundaySequence {
    type Item = CalendarDate;
    type IntoIter = std::vec::IntoIter<CalendarDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SundaySequence {
    type Item = &'a CalendarDate;
    type IntoIter = std::slice::Iter<'a, CalendarDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The nearest Sunday on or after `date`.
///
/// A Sunday is returned unchanged. Saturates at chrono's representable range.
pub fn next_sunday_on_or_after(date: impl Into<CalendarDate>) -> CalendarDate {
    let date = date.into();
    // 0 = Sunday ... 6 = Saturday
    let weekday = date.as_naive().weekday().num_days_from_sunday();
    let offset = (DAYS_PER_WEEK - weekday) % DAYS_PER_WEEK;
    date.saturating_add_days(offset)
}

/// Every Sunday in the closed interval `[from, to]`.
///
/// An interval without a Sunday, including `from > to`, gives an empty sequence.
pub fn enumerate_sundays(from: impl Into<CalendarDate>, to: impl Into<CalendarDate>) -> SundaySequence {
    let to = to.into();
    let mut current = next_sunday_on_or_after(from);
    let mut sundays = Vec::new();

    // Saturation can land on a non-Sunday at the end of chrono's range
    while current <= to && current.is_sunday() {
        trace!("Enumerated Sunday {current}");
        sundays.push(current);
        match current.checked_add_days(DAYS_PER_WEEK) {
            Some(next) => current = next,
            None => break,
        }
    }

    SundaySequence(sundays)
}
