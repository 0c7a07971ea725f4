use anyhow::Result;

use crate::{Commands, PreferenceInput};

use super::container::Container;
use super::controller::RecommendationController;

pub struct Router<'a> {
    recommendation_controller: RecommendationController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            recommendation_controller: RecommendationController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Ask {
                topic,
                style,
                difficulty,
                count,
            } => {
                let input = PreferenceInput::new(topic)
                    .with_style(style)
                    .with_difficulty(difficulty)
                    .with_count(count);
                self.recommendation_controller.ask(input).await
            }
            Commands::Session => unreachable!("Session command is handled separately in main"),
        }
    }
}
