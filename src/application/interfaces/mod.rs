mod chat_client;
mod history_repository;
mod image_search;

pub use chat_client::*;
pub use history_repository::*;
pub use image_search::*;
