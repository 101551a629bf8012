use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("invalid email address")]
    InvalidEmail,
    #[error("session storage unavailable")]
    StorageUnavailable,
    #[error("session storage write failed: {0}")]
    StorageWrite(String),
}
