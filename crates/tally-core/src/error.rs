use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Task references unknown owner: {0}")]
    UnresolvedOwnerReference(i64),

    #[error("Owner id appears more than once: {0}")]
    DuplicateOwner(i64),
}

pub type Result<T> = std::result::Result<T, Error>;
