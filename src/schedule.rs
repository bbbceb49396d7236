use std::collections::BTreeMap;

use log::{debug, info};
use serde::Serialize;

use crate::{
    CalendarDate, Clock, Destination, Navigator, ScheduleConfig, enumerate_sundays, resolve_anniversary,
};

/// Error type for schedule operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// The selected date is not one of the schedule's Sundays.
    #[error("{0} is not a selectable Sunday in this schedule")]
    NotInSchedule(CalendarDate),
}

/// One selectable Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub date:        CalendarDate,
    pub destination: Destination,
    pub is_today:    bool,
    /// Set on the final Sunday of the whole schedule only.
    pub is_last:     bool,
}

/// Sundays that fall in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGroup {
    pub year:    i32,
    pub month:   u8,
    pub entries: Vec<ScheduleEntry>,
}

/// Every Sunday from the season start up to the resolved deadline, grouped
/// by month in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    today:        CalendarDate,
    season_start: CalendarDate,
    target:       CalendarDate,
    groups:       Vec<MonthGroup>,
}

impl Schedule {
    /// Builds the schedule as seen on `today`.
    pub fn build(config: &ScheduleConfig, today: impl Into<CalendarDate>) -> Self {
        let today = today.into();
        let season_start = config.season_start;
        let target = resolve_anniversary(today, config.target);
        let sundays = enumerate_sundays(season_start, target);
        debug!(
            "Schedule for {today}: {} Sundays between {season_start} and {target}",
            sundays.len()
        );

        let last = sundays.last();
        let mut by_month: BTreeMap<(i32, u8), Vec<ScheduleEntry>> = BTreeMap::new();
        for date in sundays {
            by_month
                .entry((date.year(), date.month()))
                .or_default()
                .push(ScheduleEntry {
                    date,
                    destination: Destination::for_date(date),
                    is_today: date == today,
                    is_last: Some(date) == last,
                });
        }

        let groups = by_month
            .into_iter()
            .map(|((year, month), entries)| MonthGroup { year, month, entries })
            .collect();

        Self {
            today,
            season_start,
            target,
            groups,
        }
    }

    /// Builds the schedule for the clock's current day.
    pub fn from_clock(config: &ScheduleConfig, clock: &dyn Clock) -> Self {
        Self::build(config, clock.today())
    }

    pub const fn today(&self) -> CalendarDate {
        self.today
    }

    pub const fn season_start(&self) -> CalendarDate {
        self.season_start
    }

    pub const fn target(&self) -> CalendarDate {
        self.target
    }

    pub fn groups(&self) -> &[MonthGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of Sundays across all groups
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    /// All entries in chronological order.
    pub fn entries(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.groups.iter().flat_map(|g| g.entries.iter())
    }

    pub fn entry(&self, date: CalendarDate) -> Option<&ScheduleEntry> {
        self.entries().find(|e| e.date == date)
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.entry(date).is_some()
    }

    /// Sends the destination of `date` to `navigator`.
    ///
    /// # Errors
    /// Returns `ScheduleError::NotInSchedule` if `date` is not one of the
    /// schedule's Sundays; the navigator is not called.
    pub fn select<N>(&self, date: CalendarDate, navigator: &mut N) -> Result<Destination, ScheduleError>
    where
        N: Navigator + ?Sized,
    {
        let entry = self.entry(date).ok_or(ScheduleError::NotInSchedule(date))?;
        info!("Selected {date}, navigating to {}", entry.destination);
        navigator.navigate(&entry.destination);
        Ok(entry.destination.clone())
    }
}
