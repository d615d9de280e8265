use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexicardsError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("HTTP error {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("No definition available for '{0}'")]
    NoDefinition(String),

    #[error("Failed to start runtime: {0}")]
    Runtime(String),

    #[error("LexicardsError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for LexicardsError {
    fn from(error: std::io::Error) -> Self {
        LexicardsError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for LexicardsError {
    fn from(error: reqwest::Error) -> Self {
        LexicardsError::Reqwest(Box::new(error))
    }
}
