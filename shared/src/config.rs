use serde::{Deserialize, Serialize};

use crate::error::SiteResult;
use crate::models::{ClassOccurrence, Difficulty};

/// Tunables for the page behaviors and the weekly timetable.
///
/// Every field has a default, so a partial JSON document only overrides what
/// it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub classes: Vec<ClassRule>,
    pub weeks_per_month: u32,
    /// Height of the sticky header, subtracted from anchor scroll targets.
    pub header_offset: f64,
    pub back_to_top_threshold: f64,
    pub parallax_factor: f64,
    pub reveal: RevealConfig,
}

/// A weekly class as written in configuration, weekday by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRule {
    pub weekday: String,
    #[serde(flatten)]
    pub class: ClassOccurrence,
}

impl ClassRule {
    pub fn new(weekday: &str, name: &str, difficulty: Difficulty, time: &str) -> Self {
        Self {
            weekday: weekday.to_string(),
            class: ClassOccurrence::new(name, difficulty, Some(time)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub card_stagger_ms: u32,
    pub testimonial_delay_ms: u32,
    pub stat_delay_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            root_margin: "0px 0px -80px 0px".to_string(),
            card_stagger_ms: 80,
            testimonial_delay_ms: 100,
            stat_delay_ms: 150,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            classes: vec![
                ClassRule::new("Monday", "Beginner Fundamentals", Difficulty::Beginner, "6:00 PM"),
                ClassRule::new("Wednesday", "Intermediate Technique", Difficulty::Intermediate, "7:00 PM"),
                ClassRule::new("Friday", "Advanced Training", Difficulty::Advanced, "6:30 PM"),
                ClassRule::new("Saturday", "Kids Climbing Camp", Difficulty::Beginner, "10:00 AM"),
                ClassRule::new("Sunday", "Family Climbing Day", Difficulty::Beginner, "2:00 PM"),
            ],
            weeks_per_month: 4,
            header_offset: 80.0,
            back_to_top_threshold: 400.0,
            parallax_factor: 0.3,
            reveal: RevealConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> SiteResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.classes.len(), 5);
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_json(r#"{"header_offset": 120, "reveal": {"card_stagger_ms": 50}}"#)
            .unwrap();
        assert_eq!(config.header_offset, 120.0);
        assert_eq!(config.reveal.card_stagger_ms, 50);
        assert_eq!(config.reveal.threshold, 0.15);
        assert_eq!(config.weeks_per_month, 4);
    }

    #[test]
    fn test_class_rules_flatten_occurrence() {
        let config = SiteConfig::from_json(
            r#"{"classes": [{"weekday": "Tuesday", "name": "Bouldering 101", "difficulty": "beginner"}]}"#,
        )
        .unwrap();
        assert_eq!(config.classes.len(), 1);
        assert_eq!(config.classes[0].weekday, "Tuesday");
        assert_eq!(config.classes[0].class.name, "Bouldering 101");
        assert_eq!(config.classes[0].class.time, None);
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let result = SiteConfig::from_json(r#"{"classes": [{"weekday": "Monday", "difficulty": "expert"}]}"#);
        assert!(matches!(result, Err(SiteError::Config(_))));
    }
}
