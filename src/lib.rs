pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    ChatClient, ClearHistoryUseCase, HistoryRepository, ImageSearch, Recommendation,
    RequestRecommendationUseCase, SessionContext, SessionView,
};

pub use cli::Commands;

pub use connector::{
    Container, ContainerConfig, InMemoryHistoryRepository, MockChatClient, MockImageSearch,
    OpenRouterClient, PexelsClient, Router, Shell,
};

pub use domain::{
    build_learning_prompt, Difficulty, DomainError, HistoryEntry, ImageAttempt, ImageLookup,
    LearningStyle, PreferenceInput, DEFAULT_RECOMMENDATIONS, MAX_RECOMMENDATIONS,
    MIN_RECOMMENDATIONS, SYSTEM_PROMPT,
};
