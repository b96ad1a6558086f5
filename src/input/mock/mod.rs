use anyhow::*;
use std::collections::VecDeque;
use std::thread;
use std::time::Duration;

use crate::input::AnswerInput;

enum Entry {
    Line(Duration, String),
    Failure,
}

/// Replays scripted lines, each after its own typing delay.
#[derive(Default)]
pub struct MockAnswerInput {
    entries: VecDeque<Entry>,
}

impl MockAnswerInput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn line(self, line: &str) -> Self {
        self.delayed_line(Duration::from_millis(0), line)
    }

    pub fn delayed_line(mut self, delay: Duration, line: &str) -> Self {
        self.entries
            .push_back(Entry::Line(delay, format!("{}\n", line)));
        self
    }

    pub fn failure(mut self) -> Self {
        self.entries.push_back(Entry::Failure);
        self
    }
}

impl AnswerInput for MockAnswerInput {
    fn read_answer(&mut self) -> Result<Option<String>> {
        match self.entries.pop_front() {
            Some(Entry::Line(delay, line)) => {
                thread::sleep(delay);
                Ok(Some(line))
            }
            Some(Entry::Failure) => Err(anyhow!("Input stream is broken")),
            None => Ok(None),
        }
    }
}
