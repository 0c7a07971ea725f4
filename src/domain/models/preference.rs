use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

pub const MIN_RECOMMENDATIONS: u8 = 1;
pub const MAX_RECOMMENDATIONS: u8 = 5;
pub const DEFAULT_RECOMMENDATIONS: u8 = 3;

/// How the learner prefers to take in new material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LearningStyle {
    #[default]
    Visual,
    Auditory,
    Kinesthetic,
    ReadingWriting,
    Mixed,
}

impl LearningStyle {
    /// Label shown to the learner and embedded in the prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "Visual (diagrams, videos)",
            LearningStyle::Auditory => "Auditory (podcasts, lectures)",
            LearningStyle::Kinesthetic => "Kinesthetic (hands-on, interactive)",
            LearningStyle::ReadingWriting => "Reading/Writing",
            LearningStyle::Mixed => "Mixed",
        }
    }

    /// Accepts short names ("visual", "reading-writing") as well as full labels.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase();
        let key = normalized
            .split(" (")
            .next()
            .unwrap_or_default()
            .replace(['-', '_', ' '], "/");

        match key.as_str() {
            "visual" => Some(LearningStyle::Visual),
            "auditory" => Some(LearningStyle::Auditory),
            "kinesthetic" => Some(LearningStyle::Kinesthetic),
            "reading/writing" | "reading" | "writing" | "readingwriting" => {
                Some(LearningStyle::ReadingWriting)
            }
            "mixed" => Some(LearningStyle::Mixed),
            _ => None,
        }
    }
}

impl std::fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LearningStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            DomainError::validation(format!(
                "Unknown learning style '{}'. Expected one of: visual, auditory, kinesthetic, reading-writing, mixed",
                s
            ))
        })
    }
}

/// The learner's current understanding level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            DomainError::validation(format!(
                "Unknown difficulty '{}'. Expected one of: beginner, intermediate, advanced",
                s
            ))
        })
    }
}

/// The four fields that drive one recommendation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceInput {
    topic: String,
    style: LearningStyle,
    difficulty: Difficulty,
    count: u8,
}

impl PreferenceInput {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            style: LearningStyle::default(),
            difficulty: Difficulty::default(),
            count: DEFAULT_RECOMMENDATIONS,
        }
    }

    pub fn with_style(mut self, style: LearningStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_count(mut self, count: u8) -> Self {
        self.count = count;
        self
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn style(&self) -> LearningStyle {
        self.style
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.topic.trim().is_empty() {
            return Err(DomainError::validation("Please enter a topic to learn."));
        }

        if !(MIN_RECOMMENDATIONS..=MAX_RECOMMENDATIONS).contains(&self.count) {
            return Err(DomainError::validation(format!(
                "Number of recommendations must be between {} and {}, got {}",
                MIN_RECOMMENDATIONS, MAX_RECOMMENDATIONS, self.count
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_parse_accepts_short_names_and_labels() {
        assert_eq!(LearningStyle::parse("visual"), Some(LearningStyle::Visual));
        assert_eq!(
            LearningStyle::parse("Visual (diagrams, videos)"),
            Some(LearningStyle::Visual)
        );
        assert_eq!(
            LearningStyle::parse("reading-writing"),
            Some(LearningStyle::ReadingWriting)
        );
        assert_eq!(
            LearningStyle::parse("Reading/Writing"),
            Some(LearningStyle::ReadingWriting)
        );
        assert_eq!(LearningStyle::parse(" MIXED "), Some(LearningStyle::Mixed));
        assert_eq!(LearningStyle::parse("olfactory"), None);
    }

    #[test]
    fn test_style_labels_round_trip_through_parse() {
        for style in [
            LearningStyle::Visual,
            LearningStyle::Auditory,
            LearningStyle::Kinesthetic,
            LearningStyle::ReadingWriting,
            LearningStyle::Mixed,
        ] {
            assert_eq!(LearningStyle::parse(style.as_str()), Some(style));
        }
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::parse("Beginner"), Some(Difficulty::Beginner));
        assert_eq!(Difficulty::parse("advanced"), Some(Difficulty::Advanced));
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_input_defaults() {
        let input = PreferenceInput::new("Linear Algebra");
        assert_eq!(input.style(), LearningStyle::Visual);
        assert_eq!(input.difficulty(), Difficulty::Beginner);
        assert_eq!(input.count(), DEFAULT_RECOMMENDATIONS);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_empty_or_blank_topic_is_rejected() {
        assert!(PreferenceInput::new("").validate().unwrap_err().is_validation());
        assert!(PreferenceInput::new("   ").validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_count_bounds() {
        let base = PreferenceInput::new("Rust");
        assert!(base.clone().with_count(1).validate().is_ok());
        assert!(base.clone().with_count(5).validate().is_ok());
        assert!(base.clone().with_count(0).validate().is_err());
        assert!(base.with_count(6).validate().is_err());
    }
}
