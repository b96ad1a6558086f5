use std::time::Duration;

#[cfg(test)]
pub mod mock;
pub mod terminal;

pub use terminal::TerminalOutput;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    AllCorrect,
    NoneCorrect,
    PressEnter,
    Question(String),
    Results(usize, usize),
    TimeLimit(Duration),
    Welcome,
}

pub trait QuizOutput {
    fn say(&self, message: &Message);
}
