use std::time::Duration;

#[derive(Debug)]
pub struct Settings {
    pub time_limit: Duration,
    pub shuffle: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            time_limit: Duration::from_secs(30),
            shuffle: false,
        }
    }
}
