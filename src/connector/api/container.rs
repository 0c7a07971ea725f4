use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::{
    ChatClient, ClearHistoryUseCase, ImageSearch, InMemoryHistoryRepository, MockChatClient,
    MockImageSearch, OpenRouterClient, PexelsClient, RequestRecommendationUseCase, SessionContext,
};

pub struct ContainerConfig {
    /// Use offline mock clients instead of OpenRouter and Pexels.
    pub mock: bool,
    /// Draw spinners while requests are in flight.
    pub progress: bool,
}

/// Wires clients and the session together for one run of the program.
///
/// A container serves exactly one session; its history lives as long as the
/// container does.
pub struct Container {
    chat_client: Arc<dyn ChatClient>,
    image_search: Arc<dyn ImageSearch>,
    session: SessionContext,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let (chat_client, image_search): (Arc<dyn ChatClient>, Arc<dyn ImageSearch>) =
            if config.mock {
                debug!("Using mock completion and image clients");
                (
                    Arc::new(MockChatClient::new()),
                    Arc::new(MockImageSearch::empty()),
                )
            } else {
                let chat = OpenRouterClient::from_env()?;
                debug!("Using completion endpoint {} (model {})", chat.url(), chat.model());
                let images = PexelsClient::from_env()?;
                debug!("Using image search endpoint {}", images.url());
                (Arc::new(chat), Arc::new(images))
            };

        Ok(Self::with_clients(chat_client, image_search, config))
    }

    /// Build a container around explicit clients.
    pub fn with_clients(
        chat_client: Arc<dyn ChatClient>,
        image_search: Arc<dyn ImageSearch>,
        config: ContainerConfig,
    ) -> Self {
        let session = SessionContext::new(Arc::new(InMemoryHistoryRepository::new()));
        debug!("Started session {}", session.id());
        Self {
            chat_client,
            image_search,
            session,
            config,
        }
    }

    pub fn recommendation_use_case(&self) -> RequestRecommendationUseCase {
        let use_case =
            RequestRecommendationUseCase::new(self.chat_client.clone(), self.image_search.clone());

        if self.config.progress {
            use_case.with_progress()
        } else {
            use_case
        }
    }

    pub fn clear_history_use_case(&self) -> ClearHistoryUseCase {
        ClearHistoryUseCase::new()
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::adapter::required_env;
    use crate::DomainError;

    const KEYS: [&str; 2] = ["OPENROUTER_API_KEY", "PEXELS_API_KEY"];

    fn config_error(err: &anyhow::Error) -> bool {
        err.downcast_ref::<DomainError>()
            .is_some_and(DomainError::is_config)
    }

    // The only test in the crate that mutates the process environment.
    #[test]
    fn test_api_keys_from_environment() {
        for key in KEYS {
            std::env::remove_var(key);
        }
        assert!(OpenRouterClient::from_env().is_err_and(|e| e.is_config()));
        assert!(PexelsClient::from_env().is_err_and(|e| e.is_config()));

        let mock = Container::new(ContainerConfig {
            mock: true,
            progress: false,
        });
        assert!(mock.is_ok());

        let real = Container::new(ContainerConfig {
            mock: false,
            progress: false,
        });
        assert!(real.is_err_and(|e| config_error(&e)));

        for key in KEYS {
            std::env::set_var(key, "   ");
            assert!(required_env(key).is_err_and(|e| e.is_config()));
        }
        assert!(OpenRouterClient::from_env().is_err_and(|e| e.is_config()));
        assert!(PexelsClient::from_env().is_err_and(|e| e.is_config()));

        for key in KEYS {
            std::env::set_var(key, "  sk-test \n");
            assert_eq!(required_env(key).unwrap(), "sk-test");
        }
        assert!(OpenRouterClient::from_env().is_ok());
        assert!(PexelsClient::from_env().is_ok());
        assert!(Container::new(ContainerConfig {
            mock: false,
            progress: false,
        })
        .is_ok());

        for key in KEYS {
            std::env::remove_var(key);
        }
    }
}
