use anyhow::{anyhow, Result};

use crate::{DomainError, HistoryEntry, ImageAttempt, PreferenceInput, Recommendation};

use super::super::Container;

pub struct RecommendationController<'a> {
    container: &'a Container,
}

impl<'a> RecommendationController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn ask(&self, input: PreferenceInput) -> Result<String> {
        let use_case = self.container.recommendation_use_case();

        match use_case.execute(self.container.session(), input).await {
            Ok(recommendation) => Ok(self.format_recommendation(&recommendation)),
            Err(e) => Err(anyhow!(format_error(&e))),
        }
    }

    /// Render the entry generated last, if any.
    pub async fn latest(&self) -> String {
        let view = self.container.session().view().await;
        match view.latest {
            Some(entry) => format_plan(&entry, &view.image_attempt),
            None => "Nothing generated yet. Use `ask <topic>` to get a recommendation.".to_string(),
        }
    }

    fn format_recommendation(&self, recommendation: &Recommendation) -> String {
        let entry = recommendation.entry();
        let attempt = ImageAttempt::from_lookup(entry.topic(), recommendation.image());

        let mut output = String::new();
        if let Some(warning) = recommendation.image_warning() {
            output.push_str(&format!("Image lookup warning: {}\n\n", warning));
        }
        output.push_str(&format_plan(entry, &attempt));
        output.push_str("\n\nYour personalized content is ready!");
        output
    }
}

fn format_plan(entry: &HistoryEntry, attempt: &ImageAttempt) -> String {
    let mut output = format!("Your Plan for: {}\n\n", entry.topic());

    match entry.image_url() {
        Some(url) => output.push_str(&format!("Visual for {}: {}\n\n", entry.topic(), url)),
        None if attempt.searched_for(entry.topic()) => output.push_str(&format!(
            "No specific image found for '{}'.\n\n",
            entry.topic()
        )),
        None => {}
    }

    output.push_str(&format!(
        "*Learning Style: {} | Difficulty: {}*\n\n",
        entry.style(),
        entry.difficulty()
    ));
    output.push_str(entry.result());
    output
}

/// Human-readable message for a failed request, including the raw response
/// body where one exists.
pub fn format_error(error: &DomainError) -> String {
    match error {
        DomainError::Validation(msg) => msg.clone(),
        DomainError::Network { message, body } => {
            format!("API Error: {}\nResponse content: {}", message, body)
        }
        DomainError::Format { message, body } => format!(
            "Unexpected API response format. {}\nResponse content: {}",
            message, body
        ),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Difficulty, LearningStyle};

    fn entry(image_url: Option<&str>) -> HistoryEntry {
        let input = PreferenceInput::new("Quantum Physics")
            .with_style(LearningStyle::Visual)
            .with_difficulty(Difficulty::Beginner);
        HistoryEntry::new(&input, "Body".to_string(), image_url.map(str::to_string))
    }

    #[test]
    fn test_plan_with_image() {
        let text = format_plan(&entry(Some("https://p/m.jpeg")), &ImageAttempt::NotAttempted);
        assert!(text.starts_with("Your Plan for: Quantum Physics"));
        assert!(text.contains("Visual for Quantum Physics: https://p/m.jpeg"));
        assert!(text.contains("*Learning Style: Visual (diagrams, videos) | Difficulty: Beginner*"));
        assert!(text.ends_with("Body"));
    }

    #[test]
    fn test_plan_distinguishes_not_found_from_not_attempted() {
        let not_found = ImageAttempt::NotFound {
            topic: "Quantum Physics".into(),
        };
        assert!(format_plan(&entry(None), &not_found)
            .contains("No specific image found for 'Quantum Physics'."));
        assert!(!format_plan(&entry(None), &ImageAttempt::NotAttempted).contains("No specific image"));
    }

    #[test]
    fn test_plan_ignores_attempt_for_other_topic() {
        let other = ImageAttempt::NotFound { topic: "Go".into() };
        let text = format_plan(&entry(None), &other);
        assert!(!text.contains("No specific image"));
        assert!(text.starts_with("Your Plan for: Quantum Physics"));
    }

    #[test]
    fn test_format_network_error_includes_body() {
        let err = DomainError::network("API returned 500", Some("{\"error\":\"down\"}".into()));
        let text = format_error(&err);
        assert!(text.starts_with("API Error: API returned 500"));
        assert!(text.ends_with("Response content: {\"error\":\"down\"}"));
    }

    #[test]
    fn test_format_validation_error_is_plain_warning() {
        let err = DomainError::validation("Please enter a topic to learn.");
        assert_eq!(format_error(&err), "Please enter a topic to learn.");
    }
}
