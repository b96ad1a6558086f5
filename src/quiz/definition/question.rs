use serde::Deserialize;

/// Strips the line terminator left over by the console. Only trailing carriage returns
/// and line feeds are removed, so spaces typed by the player remain significant.
pub fn trim_line_ending(line: &str) -> &str {
    line.trim_end_matches(|c| c == '\r' || c == '\n')
}

#[derive(Debug, Deserialize)]
pub struct RawQuestion {
    pub prompt: String,
    pub answer: String,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Question {
    pub prompt: String,
    pub answer: String,
}

impl Question {
    pub fn new<P: Into<String>, A: Into<String>>(prompt: P, answer: A) -> Self {
        Question {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }

    pub fn is_answer_correct(&self, answer: &str) -> bool {
        trim_line_ending(answer) == self.answer
    }
}

impl From<RawQuestion> for Question {
    fn from(raw_question: RawQuestion) -> Self {
        Question::new(raw_question.prompt, raw_question.answer)
    }
}
