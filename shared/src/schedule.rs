//! Weekly timetable expanded onto the days of the current month.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::config::{ClassRule, SiteConfig};
use crate::error::{SiteError, SiteResult};
use crate::models::{ClassOccurrence, DateKey, Schedule};

/// A class that runs every week on the same weekday
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurringClass {
    pub weekday: Weekday,
    pub class: ClassOccurrence,
}

impl RecurringClass {
    pub fn new(weekday: Weekday, class: ClassOccurrence) -> Self {
        Self { weekday, class }
    }

    pub fn from_rule(rule: &ClassRule) -> SiteResult<Self> {
        let weekday = rule
            .weekday
            .trim()
            .parse::<Weekday>()
            .map_err(|_| SiteError::UnknownWeekday(rule.weekday.clone()))?;
        Ok(Self::new(weekday, rule.class.clone()))
    }
}

/// Date of the `week`-th (zero based) `weekday` in the given month.
///
/// Returns `None` once the computed day runs past the end of the month.
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, week: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset =
        (weekday.num_days_from_sunday() + 7 - first.weekday().num_days_from_sunday()) % 7;
    let day = week.checked_mul(7)?.checked_add(1 + offset)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Expand `rules` over the month containing `today`, `weeks` occurrences per
/// rule at most. Rules are applied in order, so a day's classes follow rule
/// order.
pub fn build_schedule(today: NaiveDate, rules: &[RecurringClass], weeks: u32) -> Schedule {
    let mut schedule = Schedule::new();

    for rule in rules {
        for week in 0..weeks {
            let Some(date) = nth_weekday_of_month(today.year(), today.month(), rule.weekday, week)
            else {
                continue;
            };
            schedule.push(DateKey::new(date), rule.class.clone());
        }
    }

    debug!(
        "Built schedule for {}-{:02}: {} classes over {} days",
        today.year(),
        today.month(),
        schedule.total_classes(),
        schedule.len()
    );

    schedule
}

impl Schedule {
    /// Schedule for the month of `today` from the configured timetable.
    pub fn from_config(config: &SiteConfig, today: NaiveDate) -> SiteResult<Self> {
        let rules = config
            .classes
            .iter()
            .map(RecurringClass::from_rule)
            .collect::<SiteResult<Vec<_>>>()?;
        Ok(build_schedule(today, &rules, config.weeks_per_month))
    }
}
