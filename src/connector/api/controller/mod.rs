pub mod history_controller;
pub mod recommendation_controller;

pub use history_controller::HistoryController;
pub use recommendation_controller::RecommendationController;
