use async_trait::async_trait;

use crate::domain::{build_learning_prompt, DomainError, PreferenceInput, SYSTEM_PROMPT};

/// An interface for sending chat-style prompts to an LLM and receiving text responses.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details so the recommendation use case stays decoupled from any particular
/// provider or HTTP client library.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send a `system` context message followed by a `user` prompt and return
    /// the assistant's response text verbatim.
    ///
    /// Exactly one attempt is made.
    async fn complete(&self, system: &str, user: &str) -> Result<String, DomainError>;

    /// Ask for a topic explanation plus `input.count()` resource suggestions
    /// using the learning-assistant persona.
    async fn explanation_and_resources(
        &self,
        input: &PreferenceInput,
    ) -> Result<String, DomainError> {
        let prompt = build_learning_prompt(input);
        self.complete(SYSTEM_PROMPT, &prompt).await
    }
}
