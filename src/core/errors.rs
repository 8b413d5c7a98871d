use thiserror::Error;

#[derive(Error, Debug)]
pub enum TwiError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid deck entry {index}: {reason}")]
    InvalidDeck { index: usize, reason: String },

    #[error("days_this_week must be between 0 and 7, got {0}")]
    InvalidProgress(u32),
}

impl From<std::io::Error> for TwiError {
    fn from(error: std::io::Error) -> Self {
        TwiError::Io(Box::new(error))
    }
}
