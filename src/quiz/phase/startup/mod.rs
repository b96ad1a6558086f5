use log::{info, warn};
use std::time::Duration;

use crate::input::AnswerInput;
use crate::output::{Message, QuizOutput};


#[derive(Clone, Debug)]
pub struct StartupState<O> {
    time_limit: Duration,
    output: O,
}

impl<O: QuizOutput> StartupState<O> {
    pub fn new(time_limit: Duration, output: O) -> Self {
        StartupState { time_limit, output }
    }

    /// Greets the player and holds until they press ENTER.
    pub fn run<I: AnswerInput>(&self, input: &mut I) {
        self.output.say(&Message::Welcome);
        self.output.say(&Message::PressEnter);
        match input.read_answer() {
            Ok(Some(_)) => (),
            Ok(None) => info!("Input closed before the quiz started"),
            Err(e) => warn!("{:#}", e),
        }
        self.output.say(&Message::TimeLimit(self.time_limit));
    }
}
