use anyhow::*;
use log::info;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use self::deadline::Deadline;
use self::definition::*;
use self::phase::*;
use self::score::*;
use self::settings::*;
use crate::input::AnswerInput;
use crate::output::QuizOutput;

pub mod deadline;
pub mod definition;
pub mod phase;
pub mod score;
pub mod settings;


/// Races the answer collector against the deadline and returns the tally at
/// whichever comes first. A collector still blocked on input is left behind.
pub fn run_session<I, O>(
    questions: Vec<Question>,
    time_limit: Duration,
    input: I,
    output: O,
) -> Result<SessionResult>
where
    I: AnswerInput + Send + 'static,
    O: QuizOutput + Send + 'static,
{
    let total = questions.len();
    let scoreboard: ScoreHandle = Arc::new(Scoreboard::new());
    let deadline = Deadline::start(time_limit);

    let collector = AnswerCollector::new(questions, input, output, scoreboard.clone());
    thread::Builder::new()
        .name("answer-collector".into())
        .spawn(move || collector.run())
        .context("Could not start answer collector")?;

    let (ending, correct) = scoreboard.wait_for_end(&deadline);
    info!(
        "Session ended ({:?}) with {}/{} correct answers",
        ending, correct, total
    );
    Ok(SessionResult {
        correct,
        total,
        ending,
    })
}

pub struct Quiz<I, O> {
    settings: Settings,
    questions: Vec<Question>,
    input: I,
    output: O,
}

impl<I, O> Quiz<I, O>
where
    I: AnswerInput + Send + 'static,
    O: QuizOutput + Clone + Send + 'static,
{
    pub fn new(definition: QuizDefinition, settings: Settings, input: I, output: O) -> Self {
        Quiz {
            settings,
            questions: definition.into_questions(),
            input,
            output,
        }
    }

    pub fn run(self) -> Result<SessionResult> {
        let Quiz {
            settings,
            questions,
            mut input,
            output,
        } = self;

        info!("Entering quiz phase: startup");
        StartupState::new(settings.time_limit, output.clone()).run(&mut input);

        info!("Entering quiz phase: questions");
        let result = run_session(questions, settings.time_limit, input, output.clone())?;

        info!("Entering quiz phase: results");
        ResultsState::new(result, output).run();
        Ok(result)
    }
}
