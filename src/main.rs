use anyhow::*;
use clap::{ArgAction, Parser};
use log::info;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

mod input;
mod output;
mod quiz;

use crate::input::TerminalInput;
use crate::output::TerminalOutput;
use crate::quiz::definition::QuizDefinition;
use crate::quiz::settings::Settings;
use crate::quiz::Quiz;

#[derive(Parser, Debug)]
#[command(name = "quiz-runner")]
#[command(about = "Timed quiz on the terminal")]
struct Args {
    /// CSV file with one `question,answer` pair per line
    #[arg(long, default_value = "problems.csv")]
    csv: PathBuf,

    /// Time limit for the quiz, in seconds
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    time: u64,

    /// Present questions in random order
    #[arg(
        long,
        default_value_t = false,
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    shuffle: bool,
}

impl From<&Args> for Settings {
    fn from(args: &Args) -> Self {
        Settings {
            time_limit: Duration::from_secs(args.time),
            shuffle: args.shuffle,
        }
    }
}

fn run(args: Args) -> Result<()> {
    let settings = Settings::from(&args);
    let mut definition = QuizDefinition::open(&args.csv)?;
    if settings.shuffle {
        info!("Shuffling {} questions", definition.get_questions().len());
        definition.shuffle(&mut rand::thread_rng());
    }
    let quiz = Quiz::new(
        definition,
        settings,
        TerminalInput::new(),
        TerminalOutput::new(),
    );
    quiz.run()?;
    Ok(())
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("{:#}", e);
        process::exit(1);
    }
}
