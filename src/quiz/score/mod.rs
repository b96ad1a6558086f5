use log::debug;
use parking_lot::{Condvar, Mutex};
use std::sync::Arc;

use crate::quiz::deadline::Deadline;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Ending {
    Completed,
    TimeUp,
}

#[derive(Debug, Default)]
struct Tally {
    correct: usize,
    finished: bool,
    closed: bool,
}

/// Correct answer count shared between the answer collector and the session.
/// Once closed, the count is frozen and late answers are rejected.
#[derive(Debug, Default)]
pub struct Scoreboard {
    tally: Mutex<Tally>,
    finished: Condvar,
}

pub type ScoreHandle = Arc<Scoreboard>;

impl Scoreboard {
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns false if the session was already closed, in which case the answer
    /// does not count.
    pub fn record_correct(&self) -> bool {
        let mut tally = self.tally.lock();
        if tally.closed {
            return false;
        }
        tally.correct += 1;
        true
    }

    pub fn mark_finished(&self) {
        let mut tally = self.tally.lock();
        tally.finished = true;
        self.finished.notify_all();
    }

    /// Runs `ask` only while the session is open. The board stays locked meanwhile,
    /// so nothing asked here can land after the final tally is read.
    pub fn ask_if_open<F: FnOnce()>(&self, ask: F) -> bool {
        let tally = self.tally.lock();
        if tally.closed {
            return false;
        }
        ask();
        true
    }

    #[cfg(test)]
    pub fn get_correct(&self) -> usize {
        self.tally.lock().correct
    }

    /// Blocks until every question was processed or the deadline passes, whichever
    /// comes first. The board is closed under the same lock the final count is read
    /// with.
    pub fn wait_for_end(&self, deadline: &Deadline) -> (Ending, usize) {
        let mut tally = self.tally.lock();
        while !tally.finished {
            match deadline.expires_at() {
                Some(expires_at) => {
                    if self.finished.wait_until(&mut tally, expires_at).timed_out() {
                        break;
                    }
                }
                None => self.finished.wait(&mut tally),
            }
        }
        let ending = if tally.finished {
            Ending::Completed
        } else {
            Ending::TimeUp
        };
        tally.closed = true;
        debug!("Scoreboard closed with {} correct answers", tally.correct);
        (ending, tally.correct)
    }
}
