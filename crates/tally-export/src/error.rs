use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed CSV: {0}")]
    MalformedCsv(String),

    #[error("Export verification failed for {path}: {reason}")]
    Verification { path: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
