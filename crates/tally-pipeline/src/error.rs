use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Owner not found: {0}")]
    OwnerNotFound(i64),

    #[error("Fetch failed: {0}")]
    Fetch(#[from] tally_client::Error),

    #[error("Correlation failed: {0}")]
    Correlate(#[from] tally_core::Error),

    #[error("Export failed: {0}")]
    Export(#[from] tally_export::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
