use std::fmt;

#[derive(Clone, Debug)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
    Storage(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "{message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Server responded {status}: {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
            AppError::Storage(message) => write!(formatter, "Storage error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<portfolio_core::Error> for AppError {
    fn from(err: portfolio_core::Error) -> Self {
        match err {
            portfolio_core::Error::StorageUnavailable | portfolio_core::Error::StorageWrite(_) => {
                AppError::Storage(err.to_string())
            }
            other => AppError::Config(other.to_string()),
        }
    }
}
