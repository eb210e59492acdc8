use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiaryLensError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("Lexicon error: {0}")]
    Lexicon(String),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for DiaryLensError {
    fn from(e: serde_json::Error) -> Self {
        DiaryLensError::Serialize(e.to_string())
    }
}
