use std::sync::Arc;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::application::{ChatClient, ImageSearch, SessionContext};
use crate::domain::{DomainError, HistoryEntry, ImageAttempt, ImageLookup, PreferenceInput};

/// Result of a successful request: the new history entry and how the image
/// lookup went (including any soft failure worth showing).
#[derive(Debug)]
pub struct Recommendation {
    entry: HistoryEntry,
    image: ImageLookup,
}

impl Recommendation {
    pub fn entry(&self) -> &HistoryEntry {
        &self.entry
    }

    pub fn image(&self) -> &ImageLookup {
        &self.image
    }

    pub fn image_warning(&self) -> Option<&DomainError> {
        self.image.warning()
    }
}

/// Turns one set of learning preferences into a history entry: image lookup
/// first, then the completion call, strictly one after the other.
pub struct RequestRecommendationUseCase {
    chat_client: Arc<dyn ChatClient>,
    image_search: Arc<dyn ImageSearch>,
    show_progress: bool,
}

impl RequestRecommendationUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>, image_search: Arc<dyn ImageSearch>) -> Self {
        Self {
            chat_client,
            image_search,
            show_progress: false,
        }
    }

    /// Show a terminal spinner while each call is in flight.
    pub fn with_progress(mut self) -> Self {
        self.show_progress = true;
        self
    }

    pub async fn execute(
        &self,
        session: &SessionContext,
        input: PreferenceInput,
    ) -> Result<Recommendation, DomainError> {
        input.validate()?;

        info!(
            "Requesting recommendation: {} (style={}, difficulty={}, count={})",
            input.topic(),
            input.style(),
            input.difficulty(),
            input.count()
        );

        let start_time = Instant::now();

        let spinner = self.spinner();

        session.reset_image_attempt().await;
        spinner.set_message("Finding an inspiring image for your topic...");
        let image = self.find_image(input.topic()).await;
        session
            .record_image_attempt(ImageAttempt::from_lookup(input.topic(), &image))
            .await;

        spinner.set_message(format!(
            "Generating personalized content for \"{}\"...",
            input.topic()
        ));
        let completion = self.chat_client.explanation_and_resources(&input).await;
        spinner.finish_and_clear();

        // A failed completion leaves the image attempt above in place.
        let result = completion?;

        let entry = HistoryEntry::new(&input, result, image.url().map(str::to_string));
        session.record_generated(entry.clone()).await;

        info!(
            "Recommendation for '{}' ready in {:.2}s",
            entry.topic(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(Recommendation { entry, image })
    }

    fn spinner(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }

    async fn find_image(&self, topic: &str) -> ImageLookup {
        let lookup = self.image_search.find_topic_image(topic).await;
        match &lookup {
            ImageLookup::Found(url) => info!("Found image for '{}': {}", topic, url),
            ImageLookup::NoResults => info!("No image found for '{}'", topic),
            ImageLookup::Unavailable(e) => {
                warn!("Image lookup for '{}' failed: {}. Continuing without image.", topic, e)
            }
        }
        lookup
    }
}
