use clap::Subcommand;

use crate::{Difficulty, LearningStyle, DEFAULT_RECOMMENDATIONS};

#[derive(Subcommand)]
pub enum Commands {
    /// Get a personalized explanation and resource list for one topic
    Ask {
        /// What topic are you trying to learn? (e.g. "Quantum Physics")
        topic: String,

        /// Preferred learning style: visual, auditory, kinesthetic, reading-writing, mixed
        #[arg(short, long, default_value = "visual")]
        style: LearningStyle,

        /// Current understanding level: beginner, intermediate, advanced
        #[arg(short, long, default_value = "beginner")]
        difficulty: Difficulty,

        /// Number of resource recommendations (1-5)
        #[arg(short = 'n', long, default_value_t = DEFAULT_RECOMMENDATIONS,
              value_parser = clap::value_parser!(u8).range(1..=5))]
        count: u8,
    },

    /// Start an interactive session that keeps a learning history
    Session,
}
