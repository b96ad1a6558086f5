use anyhow::*;
use log::info;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs::File;
use std::path::Path;

pub mod question;

pub use question::{Question, RawQuestion};


#[derive(Debug)]
pub struct QuizDefinition {
    questions: Vec<Question>,
}

impl QuizDefinition {
    pub fn new(questions: Vec<Question>) -> Self {
        QuizDefinition { questions }
    }

    pub fn open(source: &Path) -> Result<QuizDefinition> {
        let file = File::open(source)
            .with_context(|| format!("Could not open quiz file `{}`", source.display()))?;
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut questions = Vec::new();
        for (index, record) in csv_reader.records().enumerate() {
            let record_number = index + 1;
            let record = record.with_context(|| {
                format!(
                    "Could not read record {} of `{}`",
                    record_number,
                    source.display()
                )
            })?;
            if record.len() < 2 {
                return Err(anyhow!(
                    "Record {} of `{}` needs a question and an answer, found {} field(s)",
                    record_number,
                    source.display(),
                    record.len()
                ));
            }
            let raw_question: RawQuestion = record.deserialize(None).with_context(|| {
                format!(
                    "Could not parse record {} of `{}`",
                    record_number,
                    source.display()
                )
            })?;
            questions.push(raw_question.into());
        }

        info!(
            "Loaded {} questions from {}",
            questions.len(),
            source.display()
        );
        Ok(QuizDefinition::new(questions))
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.questions.shuffle(rng);
    }

    pub fn get_questions(&self) -> &Vec<Question> {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}
