use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Difficulty, LearningStyle, PreferenceInput};

/// One immutable record of a past recommendation request and its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    id: String,
    topic: String,
    style: LearningStyle,
    difficulty: Difficulty,
    count: u8,
    result: String,
    image_url: Option<String>,
    created_at: i64,
}

impl HistoryEntry {
    pub fn new(input: &PreferenceInput, result: String, image_url: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            topic: input.topic().to_string(),
            style: input.style(),
            difficulty: input.difficulty(),
            count: input.count(),
            result,
            image_url,
            created_at: current_timestamp(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
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

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Title used for history listings, e.g. `Rust (Style: Mixed, Difficulty: Beginner)`.
    pub fn title(&self) -> String {
        format!(
            "{} (Style: {}, Difficulty: {})",
            self.topic, self.style, self.difficulty
        )
    }
}

fn current_timestamp() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_copies_input_fields() {
        let input = PreferenceInput::new("Quantum Physics")
            .with_style(LearningStyle::Visual)
            .with_difficulty(Difficulty::Beginner)
            .with_count(3);

        let entry = HistoryEntry::new(
            &input,
            "Quantum physics studies...".to_string(),
            Some("https://images.example/q.jpeg".to_string()),
        );

        assert_eq!(entry.topic(), "Quantum Physics");
        assert_eq!(entry.style(), LearningStyle::Visual);
        assert_eq!(entry.difficulty(), Difficulty::Beginner);
        assert_eq!(entry.count(), 3);
        assert_eq!(entry.result(), "Quantum physics studies...");
        assert_eq!(entry.image_url(), Some("https://images.example/q.jpeg"));
        assert!(entry.created_at() > 0);
    }

    #[test]
    fn test_identical_inputs_produce_distinct_entries() {
        let input = PreferenceInput::new("Rust");
        let a = HistoryEntry::new(&input, "same".to_string(), None);
        let b = HistoryEntry::new(&input, "same".to_string(), None);

        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_title() {
        let input = PreferenceInput::new("Rust")
            .with_style(LearningStyle::Mixed)
            .with_difficulty(Difficulty::Advanced);
        let entry = HistoryEntry::new(&input, "x".to_string(), None);

        assert_eq!(entry.title(), "Rust (Style: Mixed, Difficulty: Advanced)");
        assert!(entry.image_url().is_none());
    }
}
