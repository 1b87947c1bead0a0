//! Browser-free core of the site: the class schedule, the calendar view model,
//! contact form validation and the arithmetic behind the page effects.
//!
//! Everything here is plain data in, plain data out, so it can be exercised
//! with `cargo test` without a DOM.

pub mod calendar;
pub mod config;
pub mod contact;
pub mod effects;
pub mod error;
pub mod models;
pub mod schedule;

pub use calendar::{CalendarRenderer, CalendarView, DayDetails, GridCell, MonthGrid};
pub use config::SiteConfig;
pub use contact::{ContactSubmission, FormOutcome};
pub use error::{SiteError, SiteResult};
pub use models::{ClassOccurrence, DateKey, Difficulty, Schedule};
