use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatClient;
use crate::domain::DomainError;

#[derive(Debug, Clone)]
enum Behavior {
    Respond,
    HttpStatus { status: u16, body: String },
    Malformed,
}

/// Offline [`ChatClient`] that answers with a deterministic study plan.
///
/// Used by `--mock` runs and by tests, which can also make it fail the way a
/// real endpoint would.
pub struct MockChatClient {
    behavior: Behavior,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self::with_behavior(Behavior::Respond)
    }

    /// Fail every call with a `NetworkError` carrying `body`.
    pub fn failing_with_status(status: u16, body: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::HttpStatus {
            status,
            body: body.into(),
        })
    }

    /// Fail every call with a `FormatError`.
    pub fn malformed() -> Self {
        Self::with_behavior(Behavior::Malformed)
    }

    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().ok().and_then(|p| p.clone())
    }

    fn plan_for(user: &str) -> String {
        let topic = user
            .split('"')
            .nth(1)
            .filter(|t| !t.is_empty())
            .unwrap_or("your topic");

        format!(
            "## {topic}\n\n\
             {topic} is a rich subject. Start with the core ideas and build from there.\n\n\
             ### Resources\n\
             1. An introductory article on {topic}.\n\
             2. A short video series covering the basics of {topic}.\n\n\
             Keep going, you've got this!"
        )
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, _system: &str, user: &str) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(user.to_string());
        }

        match &self.behavior {
            Behavior::Respond => {
                debug!("MockChatClient: generating canned plan");
                Ok(Self::plan_for(user))
            }
            Behavior::HttpStatus { status, body } => Err(DomainError::network(
                format!("MockChatClient: API returned {status}"),
                Some(body.clone()),
            )),
            Behavior::Malformed => Err(DomainError::format(
                "MockChatClient: response has no choices[0].message.content",
                "{}",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_plan_mentions_quoted_topic() {
        let client = MockChatClient::new();
        let text = client
            .complete("sys", "The user wants to learn about: \"Graph Theory\".")
            .await
            .unwrap();

        assert!(text.starts_with("## Graph Theory"));
        assert_eq!(client.calls(), 1);
        assert!(client.last_prompt().unwrap().contains("Graph Theory"));
    }

    #[tokio::test]
    async fn test_failing_client_reports_body() {
        let client = MockChatClient::failing_with_status(500, "boom");
        let err = client.complete("sys", "user").await.unwrap_err();

        assert!(err.is_network());
        assert_eq!(err.response_body(), Some("boom"));
    }
}
