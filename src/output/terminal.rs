use log::warn;
use std::io::{self, Write};

use crate::output::{Message, QuizOutput};

#[derive(Clone, Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        TerminalOutput
    }

    fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            Welcome => "\t\t\t\tWelcome to the Quiz\n".into(),
            PressEnter => "\t\t\t\tPress ENTER to start\n".into(),
            TimeLimit(duration) => format!(
                "\t\t\t\tTime limit for the quiz is: {} seconds\n",
                duration.as_secs()
            ),
            // The answer is typed on the same line
            Question(prompt) => format!("{}\t", prompt),
            Results(correct, total) => {
                format!("\nTotal correct answers: {}/{}\n", correct, total)
            }
            AllCorrect => "Hurray! You answered all the questions correctly.\n".into(),
            NoneCorrect => "Ouch!\n".into(),
        }
    }
}

impl QuizOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        let text = self.interpret_message(message);
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = handle
            .write_all(text.as_bytes())
            .and_then(|_| handle.flush())
        {
            warn!("Could not write to terminal: {}", e);
        }
    }
}
