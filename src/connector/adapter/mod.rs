mod env;
mod in_memory_history_repository;
mod mock_chat_client;
mod mock_image_search;
mod openrouter_client;
mod pexels_client;

pub use in_memory_history_repository::*;
pub use mock_chat_client::*;
pub use mock_image_search::*;
pub use openrouter_client::OpenRouterClient;
pub use pexels_client::PexelsClient;

pub(crate) use env::required_env;

