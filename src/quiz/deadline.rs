use std::time::{Duration, Instant};

/// The instant after which no answer is scored. Armed once when the session starts.
/// A time limit too large for the clock never expires.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    expires_at: Option<Instant>,
}

impl Deadline {
    pub fn start(time_limit: Duration) -> Self {
        Deadline {
            expires_at: Instant::now().checked_add(time_limit),
        }
    }

    pub fn expires_at(&self) -> Option<Instant> {
        self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_time_limit() {
        let before = Instant::now();
        let deadline = Deadline::start(Duration::from_secs(30));
        let after = Instant::now();
        let expires_at = deadline.expires_at().unwrap();
        assert!(expires_at >= before + Duration::from_secs(30));
        assert!(expires_at <= after + Duration::from_secs(30));
    }

    #[test]
    fn huge_time_limit_never_expires() {
        let deadline = Deadline::start(Duration::from_secs(u64::MAX));
        assert!(deadline.expires_at().is_none());
    }
}
