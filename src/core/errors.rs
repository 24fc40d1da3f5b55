use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordMatchError {
    #[error("No candidate users to compare against")]
    EmptyPopulation,

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Invalid difficulty option: {0}")]
    InvalidDifficulty(String),

    #[error("Word is not in the dictionary: {0}")]
    UnknownWord(String),

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::io::Error> for WordMatchError {
    fn from(error: std::io::Error) -> Self {
        WordMatchError::Io(Box::new(error))
    }
}

pub type Result<T> = std::result::Result<T, WordMatchError>;
