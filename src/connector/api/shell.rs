use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::{
    Difficulty, LearningStyle, PreferenceInput, DEFAULT_RECOMMENDATIONS, MAX_RECOMMENDATIONS,
    MIN_RECOMMENDATIONS,
};

use super::container::Container;
use super::controller::{HistoryController, RecommendationController};

const PROMPT: &str = "learn> ";

const HELP: &str = "\
Commands:
  ask [topic]        Get a recommendation (reuses the last topic when omitted)
  style <name>       visual | auditory | kinesthetic | reading-writing | mixed
  difficulty <name>  beginner | intermediate | advanced
  count <n>          Number of recommendations (1-5)
  prefs              Show the current preferences
  show [n]           Show the latest plan, or history entry n
  history            List your learning history
  clear              Clear all history
  help               Show this help
  quit               Leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Ask(Option<String>),
    Style(LearningStyle),
    Difficulty(Difficulty),
    Count(u8),
    Prefs,
    Show(Option<usize>),
    History,
    Clear,
    Help,
    Quit,
    Empty,
}

impl ShellCommand {
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command.to_lowercase().as_str() {
            "" => Ok(ShellCommand::Empty),
            "ask" => Ok(ShellCommand::Ask((!rest.is_empty()).then(|| rest.to_string()))),
            "style" => rest
                .parse::<LearningStyle>()
                .map(ShellCommand::Style)
                .map_err(|e| e.to_string()),
            "difficulty" | "level" => rest
                .parse::<Difficulty>()
                .map(ShellCommand::Difficulty)
                .map_err(|e| e.to_string()),
            "count" => match rest.parse::<u8>() {
                Ok(n) if (MIN_RECOMMENDATIONS..=MAX_RECOMMENDATIONS).contains(&n) => {
                    Ok(ShellCommand::Count(n))
                }
                _ => Err(format!(
                    "count must be a number between {} and {}",
                    MIN_RECOMMENDATIONS, MAX_RECOMMENDATIONS
                )),
            },
            "prefs" => Ok(ShellCommand::Prefs),
            "show" if rest.is_empty() => Ok(ShellCommand::Show(None)),
            "show" => rest
                .parse::<usize>()
                .map(|n| ShellCommand::Show(Some(n)))
                .map_err(|_| format!("'{}' is not a history position", rest)),
            "history" => Ok(ShellCommand::History),
            "clear" => Ok(ShellCommand::Clear),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            other => Err(format!("Unknown command '{}'. Type `help` for a list.", other)),
        }
    }
}

/// Form values the learner has chosen so far.
#[derive(Debug, Clone)]
struct Form {
    topic: String,
    style: LearningStyle,
    difficulty: Difficulty,
    count: u8,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            topic: String::new(),
            style: LearningStyle::default(),
            difficulty: Difficulty::default(),
            count: DEFAULT_RECOMMENDATIONS,
        }
    }
}

impl Form {
    fn to_input(&self) -> PreferenceInput {
        PreferenceInput::new(self.topic.clone())
            .with_style(self.style)
            .with_difficulty(self.difficulty)
            .with_count(self.count)
    }

    fn describe(&self) -> String {
        let topic = if self.topic.is_empty() {
            "(none)"
        } else {
            self.topic.as_str()
        };
        format!(
            "Topic: {}\nLearning style: {}\nDifficulty: {}\nRecommendations: {}",
            topic, self.style, self.difficulty, self.count
        )
    }
}

/// Line-oriented interactive front-end over one session.
pub struct Shell<'a> {
    recommendation_controller: RecommendationController<'a>,
    history_controller: HistoryController<'a>,
    form: Form,
}

impl<'a> Shell<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            recommendation_controller: RecommendationController::new(container),
            history_controller: HistoryController::new(container),
            form: Form::default(),
        }
    }

    /// Read commands until `quit` or end of input. Request failures are
    /// printed and the session continues.
    pub async fn run<R, W>(&mut self, reader: R, writer: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        writer
            .write_all(b"Personalized Learning Assistant. Type `help` for commands.\n")
            .await?;

        let mut lines = reader.lines();
        loop {
            writer.write_all(PROMPT.as_bytes()).await?;
            writer.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            let output = match ShellCommand::parse(&line) {
                Ok(ShellCommand::Quit) => break,
                Ok(command) => self.handle(command).await,
                Err(message) => message,
            };

            if !output.is_empty() {
                writer.write_all(output.as_bytes()).await?;
                writer.write_all(b"\n").await?;
            }
        }

        writer.write_all(b"Goodbye!\n").await?;
        writer.flush().await?;
        Ok(())
    }

    async fn handle(&mut self, command: ShellCommand) -> String {
        debug!("Shell command: {:?}", command);
        match command {
            ShellCommand::Ask(topic) => {
                if let Some(topic) = topic {
                    self.form.topic = topic;
                }
                match self.recommendation_controller.ask(self.form.to_input()).await {
                    Ok(output) => output,
                    Err(e) => e.to_string(),
                }
            }
            ShellCommand::Style(style) => {
                self.form.style = style;
                format!("Learning style set to {}", style)
            }
            ShellCommand::Difficulty(difficulty) => {
                self.form.difficulty = difficulty;
                format!("Difficulty set to {}", difficulty)
            }
            ShellCommand::Count(count) => {
                self.form.count = count;
                format!("Number of recommendations set to {}", count)
            }
            ShellCommand::Prefs => self.form.describe(),
            ShellCommand::Show(None) => self.recommendation_controller.latest().await,
            ShellCommand::Show(Some(position)) => {
                match self.history_controller.show(position).await {
                    Ok(output) => output,
                    Err(e) => e.to_string(),
                }
            }
            ShellCommand::History => self.history_controller.list().await,
            ShellCommand::Clear => self.history_controller.clear().await,
            ShellCommand::Help => HELP.to_string(),
            ShellCommand::Quit | ShellCommand::Empty => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ask_with_and_without_topic() {
        assert_eq!(
            ShellCommand::parse("ask Quantum Physics"),
            Ok(ShellCommand::Ask(Some("Quantum Physics".to_string())))
        );
        assert_eq!(ShellCommand::parse("ask"), Ok(ShellCommand::Ask(None)));
        assert_eq!(ShellCommand::parse("  ask   "), Ok(ShellCommand::Ask(None)));
    }

    #[test]
    fn parse_preferences() {
        assert_eq!(
            ShellCommand::parse("style reading-writing"),
            Ok(ShellCommand::Style(LearningStyle::ReadingWriting))
        );
        assert_eq!(
            ShellCommand::parse("difficulty Advanced"),
            Ok(ShellCommand::Difficulty(Difficulty::Advanced))
        );
        assert_eq!(ShellCommand::parse("count 5"), Ok(ShellCommand::Count(5)));
        assert!(ShellCommand::parse("count 9").is_err());
        assert!(ShellCommand::parse("style smell").is_err());
    }

    #[test]
    fn parse_misc_commands() {
        assert_eq!(ShellCommand::parse(""), Ok(ShellCommand::Empty));
        assert_eq!(ShellCommand::parse("show"), Ok(ShellCommand::Show(None)));
        assert_eq!(ShellCommand::parse("show 2"), Ok(ShellCommand::Show(Some(2))));
        assert!(ShellCommand::parse("show two").is_err());
        assert_eq!(ShellCommand::parse("EXIT"), Ok(ShellCommand::Quit));
        assert!(ShellCommand::parse("dance").is_err());
    }
}
