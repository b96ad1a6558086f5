use log::{debug, info, warn};

use crate::input::AnswerInput;
use crate::output::{Message, QuizOutput};
use crate::quiz::definition::Question;
use crate::quiz::score::ScoreHandle;


/// Asks every question in order and scores the answers.
pub struct AnswerCollector<I, O> {
    questions: Vec<Question>,
    input: I,
    output: O,
    scoreboard: ScoreHandle,
}

impl<I: AnswerInput, O: QuizOutput> AnswerCollector<I, O> {
    pub fn new(questions: Vec<Question>, input: I, output: O, scoreboard: ScoreHandle) -> Self {
        AnswerCollector {
            questions,
            input,
            output,
            scoreboard,
        }
    }

    pub fn run(mut self) {
        for (index, question) in self.questions.iter().enumerate() {
            let output = &self.output;
            let asked = self
                .scoreboard
                .ask_if_open(|| output.say(&Message::Question(question.prompt.clone())));
            if !asked {
                debug!("Session closed before question {}", index + 1);
                return;
            }

            let answer = match self.input.read_answer() {
                Ok(Some(answer)) => answer,
                Ok(None) => {
                    info!(
                        "Input exhausted after {} of {} questions",
                        index,
                        self.questions.len()
                    );
                    break;
                }
                Err(e) => {
                    warn!("{:#}", e);
                    break;
                }
            };

            if question.is_answer_correct(&answer) && !self.scoreboard.record_correct() {
                debug!(
                    "Discarding answer to question {} submitted after the deadline",
                    index + 1
                );
                return;
            }
        }
        self.scoreboard.mark_finished();
    }
}
