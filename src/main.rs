use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tokio::io::BufReader;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use learnassist::{Commands, Container, ContainerConfig, Router, Shell};

#[derive(Parser)]
#[command(name = "learnassist")]
#[command(author, version, about = "Personalized learning recommendations in your terminal", long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use offline mock clients instead of OpenRouter and Pexels
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        mock: cli.mock,
        progress: std::io::stderr().is_terminal(),
    })?;

    if let Commands::Session = cli.command {
        let mut shell = Shell::new(&container);
        let mut stdout = tokio::io::stdout();
        return shell
            .run(BufReader::new(tokio::io::stdin()), &mut stdout)
            .await;
    }

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;
    use learnassist::{Difficulty, LearningStyle};

    #[test]
    fn ask_parses_preferences() {
        let cli = Cli::try_parse_from([
            "learnassist",
            "ask",
            "Quantum Physics",
            "--style",
            "kinesthetic",
            "--difficulty",
            "advanced",
            "-n",
            "5",
        ])
        .unwrap();

        match cli.command {
            Commands::Ask {
                topic,
                style,
                difficulty,
                count,
            } => {
                assert_eq!(topic, "Quantum Physics");
                assert_eq!(style, LearningStyle::Kinesthetic);
                assert_eq!(difficulty, Difficulty::Advanced);
                assert_eq!(count, 5);
            }
            Commands::Session => panic!("expected ask"),
        }
    }

    #[test]
    fn ask_rejects_count_out_of_range() {
        let res = Cli::try_parse_from(["learnassist", "ask", "Rust", "--count", "6"]);
        assert!(res.is_err());
    }

    #[test]
    fn mock_flag_is_global() {
        let cli = Cli::try_parse_from(["learnassist", "session", "--mock"]).unwrap();
        assert!(cli.mock);
    }
}
