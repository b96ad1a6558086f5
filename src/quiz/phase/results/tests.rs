use super::*;
use crate::output::mock::MockQuizOutput;

fn result(correct: usize, total: usize) -> SessionResult {
    SessionResult {
        correct,
        total,
        ending: Ending::Completed,
    }
}

#[test]
fn congratulates_perfect_score() {
    let output = MockQuizOutput::new();
    ResultsState::new(result(2, 2), output.clone()).run();
    assert_eq!(
        output.flush(),
        [Message::Results(2, 2), Message::AllCorrect]
    );
}

#[test]
fn commiserates_zero_score() {
    let output = MockQuizOutput::new();
    ResultsState::new(result(0, 2), output.clone()).run();
    assert_eq!(
        output.flush(),
        [Message::Results(0, 2), Message::NoneCorrect]
    );
}

#[test]
fn partial_score_has_no_comment() {
    let output = MockQuizOutput::new();
    ResultsState::new(result(1, 2), output.clone()).run();
    assert_eq!(output.flush(), [Message::Results(1, 2)]);
}

#[test]
fn empty_quiz_is_perfect() {
    assert_eq!(result(0, 0).get_verdict(), Verdict::Perfect);
    let output = MockQuizOutput::new();
    ResultsState::new(result(0, 0), output.clone()).run();
    assert!(output.contains_message(&Message::AllCorrect));
    assert!(!output.contains_message(&Message::NoneCorrect));
}
