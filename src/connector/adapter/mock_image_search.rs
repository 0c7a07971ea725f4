use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ImageSearch;
use crate::domain::{DomainError, ImageLookup};

#[derive(Debug, Clone)]
enum Behavior {
    Found(String),
    Empty,
    Offline,
}

/// Offline [`ImageSearch`] with a fixed outcome.
pub struct MockImageSearch {
    behavior: Behavior,
    calls: AtomicUsize,
}

impl MockImageSearch {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Found(url.into()))
    }

    pub fn empty() -> Self {
        Self::with_behavior(Behavior::Empty)
    }

    /// Every lookup comes back as a soft network failure.
    pub fn offline() -> Self {
        Self::with_behavior(Behavior::Offline)
    }

    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockImageSearch {
    fn default() -> Self {
        Self::empty()
    }
}

#[async_trait]
impl ImageSearch for MockImageSearch {
    async fn find_topic_image(&self, _query: &str) -> ImageLookup {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            Behavior::Found(url) => ImageLookup::Found(url.clone()),
            Behavior::Empty => ImageLookup::NoResults,
            Behavior::Offline => ImageLookup::Unavailable(DomainError::network(
                "MockImageSearch: request failed: offline",
                None,
            )),
        }
    }
}
