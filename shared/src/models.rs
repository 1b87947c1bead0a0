use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Skill level of a class, drives the indicator colour on the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    /// Background colour of the small dot shown inside a day cell.
    pub fn color(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "#22c55e",
            Difficulty::Intermediate => "#3b82f6",
            Difficulty::Advanced => "#f97316",
        }
    }

    /// Legend class used by the details list, e.g. `legend-dot--advanced`.
    pub fn legend_class(&self) -> String {
        format!("legend-dot--{}", self.as_str())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scheduled class on a given day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassOccurrence {
    pub name: String,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl ClassOccurrence {
    pub fn new(name: impl Into<String>, difficulty: Difficulty, time: Option<&str>) -> Self {
        Self {
            name: name.into(),
            difficulty,
            time: time.map(str::to_string),
        }
    }
}

/// Calendar day identifier, rendered as `YYYY-MM-DD`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub const FORMAT: &'static str = "%Y-%m-%d";

    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, Self::FORMAT).map(Self)
    }
}

impl TryFrom<String> for DateKey {
    type Error = chrono::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.to_string()
    }
}

/// Classes per day for one month.
///
/// Days keep their classes in the order they were added; adding to a day
/// that already has classes appends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule(BTreeMap<DateKey, Vec<ClassOccurrence>>);

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: DateKey, occurrence: ClassOccurrence) {
        self.0.entry(key).or_default().push(occurrence);
    }

    /// Classes on `key`, empty when nothing is scheduled.
    pub fn classes_on(&self, key: &DateKey) -> &[ClassOccurrence] {
        self.0.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of days with at least one class.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total_classes(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DateKey, &[ClassOccurrence])> {
        self.0.iter().map(|(key, classes)| (key, classes.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &DateKey> {
        self.0.keys()
    }
}
