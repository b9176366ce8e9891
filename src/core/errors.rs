use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordlensError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Network error: {0}. Please try again.")]
    Reqwest(Box<reqwest::Error>),

    #[error("No definitions found for \"{0}\". Please check your spelling.")]
    WordNotFound(String),

    #[error("The dictionary service returned HTTP {0}. Please try again.")]
    Http(u16),

    #[error("WordlensError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for WordlensError {
    fn from(error: std::io::Error) -> Self {
        WordlensError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for WordlensError {
    fn from(error: reqwest::Error) -> Self {
        WordlensError::Reqwest(Box::new(error))
    }
}
