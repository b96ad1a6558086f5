use crate::output::{Message, QuizOutput};
use crate::quiz::score::Ending;

#[cfg(test)]
mod tests;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SessionResult {
    pub correct: usize,
    pub total: usize,
    pub ending: Ending,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict {
    Perfect,
    Partial,
    Zero,
}

impl SessionResult {
    /// A quiz without questions counts as perfect.
    pub fn get_verdict(&self) -> Verdict {
        if self.correct == self.total {
            Verdict::Perfect
        } else if self.correct == 0 {
            Verdict::Zero
        } else {
            Verdict::Partial
        }
    }
}

#[derive(Debug)]
pub struct ResultsState<O> {
    result: SessionResult,
    output: O,
}

impl<O: QuizOutput> ResultsState<O> {
    pub fn new(result: SessionResult, output: O) -> Self {
        ResultsState { result, output }
    }

    pub fn run(&self) {
        self.output
            .say(&Message::Results(self.result.correct, self.result.total));
        match self.result.get_verdict() {
            Verdict::Perfect => self.output.say(&Message::AllCorrect),
            Verdict::Zero => self.output.say(&Message::NoneCorrect),
            Verdict::Partial => (),
        }
    }
}
