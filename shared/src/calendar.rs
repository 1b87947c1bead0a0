//! Month grid, day selection and the day details panel as plain data.
//!
//! A [`CalendarRenderer`] turns these into whatever the display layer needs;
//! the frontend renders Yew `Html`, tests render text.

use chrono::{Datelike, Months, NaiveDate};

use crate::models::{ClassOccurrence, DateKey, Schedule};

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const NO_CLASSES_MESSAGE: &str = "No classes scheduled for this date.";

/// Number of days in `month` of `year`, 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(0)
}

/// Layout of one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    first: NaiveDate,
    days_in_month: u32,
}

impl MonthGrid {
    /// Grid for the month that contains `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let first = date.with_day(1).unwrap_or(date);
        Self {
            first,
            days_in_month: days_in_month(first.year(), first.month()),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Weekday of the 1st, 0 = Sunday. Also the number of leading blanks.
    pub fn first_weekday(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    /// Long month name and year, e.g. "December 2024".
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    pub fn date_key(&self, day: u32) -> Option<DateKey> {
        NaiveDate::from_ymd_opt(self.year(), self.month(), day).map(DateKey::new)
    }

    /// Grid children in display order: weekday labels, leading blanks, then
    /// one cell per day of the month.
    pub fn cells(&self, schedule: &Schedule) -> Vec<GridCell> {
        let mut cells = Vec::with_capacity(7 + (self.first_weekday() + self.days_in_month) as usize);

        cells.extend(WEEKDAY_LABELS.into_iter().map(GridCell::Weekday));
        cells.extend((0..self.first_weekday()).map(|_| GridCell::Blank));
        cells.extend((1..=self.days_in_month).filter_map(|day| {
            let key = self.date_key(day)?;
            Some(GridCell::Day(DayCell {
                key,
                classes: schedule.classes_on(&key).to_vec(),
            }))
        }));

        cells
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCell {
    Weekday(&'static str),
    /// Placeholder before the 1st; not selectable.
    Blank,
    Day(DayCell),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub key: DateKey,
    pub classes: Vec<ClassOccurrence>,
}

impl DayCell {
    pub fn day(&self) -> u32 {
        self.key.day()
    }

    pub fn has_class(&self) -> bool {
        !self.classes.is_empty()
    }
}

/// Which day, if any, the visitor has picked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarView {
    selected: Option<DateKey>,
}

/// Result of a selection, previous key to new key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    pub previous: Option<DateKey>,
    pub current: DateKey,
}

impl CalendarView {
    pub fn selected(&self) -> Option<DateKey> {
        self.selected
    }

    pub fn is_selected(&self, key: &DateKey) -> bool {
        self.selected.as_ref() == Some(key)
    }

    /// Move the selection to `key`. The previous day, if any, is deselected in
    /// the same step.
    pub fn select(&mut self, key: DateKey) -> SelectionChange {
        let previous = self.selected.replace(key);
        SelectionChange { previous, current: key }
    }
}

/// Content of the details panel for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayDetails {
    Empty,
    Classes {
        heading: String,
        items: Vec<ClassOccurrence>,
    },
}

impl DayDetails {
    pub fn for_day(key: &DateKey, classes: &[ClassOccurrence]) -> Self {
        if classes.is_empty() {
            return DayDetails::Empty;
        }
        DayDetails::Classes {
            heading: long_date(key),
            items: classes.to_vec(),
        }
    }
}

/// "December 2, 2024"
pub fn long_date(key: &DateKey) -> String {
    key.date().format("%B %-d, %Y").to_string()
}

/// Turns the calendar view model into a concrete view.
pub trait CalendarRenderer {
    type Output;

    fn render_grid(&self, cells: &[GridCell], view: &CalendarView) -> Self::Output;

    fn render_details(&self, details: &DayDetails) -> Self::Output;
}
