use crate::domain::DomainError;

/// Outcome of one image-search call. Failures are soft: they never abort a
/// recommendation, they only mean no image is attached.
#[derive(Debug)]
pub enum ImageLookup {
    Found(String),
    NoResults,
    Unavailable(DomainError),
}

impl ImageLookup {
    pub fn url(&self) -> Option<&str> {
        match self {
            ImageLookup::Found(url) => Some(url),
            _ => None,
        }
    }

    pub fn into_url(self) -> Option<String> {
        match self {
            ImageLookup::Found(url) => Some(url),
            _ => None,
        }
    }

    /// The soft failure behind a missing image, if the lookup did not simply come up empty.
    pub fn warning(&self) -> Option<&DomainError> {
        match self {
            ImageLookup::Unavailable(err) => Some(err),
            _ => None,
        }
    }
}

/// The session's record of the most recent image lookup.
///
/// `NotAttempted` and `NotFound` are kept apart so the front-end can tell
/// "we never searched" from "we searched and came back empty".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageAttempt {
    #[default]
    NotAttempted,
    Found { topic: String, url: String },
    NotFound { topic: String },
}

impl ImageAttempt {
    pub fn from_lookup(topic: &str, lookup: &ImageLookup) -> Self {
        match lookup.url() {
            Some(url) => ImageAttempt::Found {
                topic: topic.to_string(),
                url: url.to_string(),
            },
            None => ImageAttempt::NotFound {
                topic: topic.to_string(),
            },
        }
    }

    pub fn was_attempted(&self) -> bool {
        !matches!(self, ImageAttempt::NotAttempted)
    }

    /// Topic of the most recent lookup, if one was made.
    pub fn topic(&self) -> Option<&str> {
        match self {
            ImageAttempt::Found { topic, .. } | ImageAttempt::NotFound { topic } => Some(topic),
            ImageAttempt::NotAttempted => None,
        }
    }

    /// Whether the most recent lookup was made for `topic`.
    pub fn searched_for(&self, topic: &str) -> bool {
        self.topic() == Some(topic)
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            ImageAttempt::Found { url, .. } => Some(url),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_url_only_for_found() {
        assert_eq!(ImageLookup::Found("u".into()).url(), Some("u"));
        assert_eq!(ImageLookup::NoResults.url(), None);
        let failed = ImageLookup::Unavailable(DomainError::network("timeout", None));
        assert!(failed.url().is_none());
        assert!(failed.warning().is_some_and(|e| e.is_network()));
        assert!(ImageLookup::NoResults.warning().is_none());
    }

    #[test]
    fn test_attempt_distinguishes_not_found_from_not_attempted() {
        let attempt = ImageAttempt::from_lookup("Rust", &ImageLookup::NoResults);
        assert!(attempt.was_attempted());
        assert_eq!(
            attempt,
            ImageAttempt::NotFound {
                topic: "Rust".into()
            }
        );
        assert!(!ImageAttempt::default().was_attempted());
    }

    #[test]
    fn test_attempt_remembers_its_topic() {
        let attempt = ImageAttempt::from_lookup("Go", &ImageLookup::NoResults);
        assert_eq!(attempt.topic(), Some("Go"));
        assert!(attempt.searched_for("Go"));
        assert!(!attempt.searched_for("Rust"));
        assert!(!ImageAttempt::NotAttempted.searched_for("Go"));
    }

    #[test]
    fn test_attempt_from_found_lookup() {
        let attempt = ImageAttempt::from_lookup("Rust", &ImageLookup::Found("u".into()));
        assert_eq!(attempt.url(), Some("u"));
    }
}
