use std::fmt;

/// Unified error type for the stringlab crate.
#[derive(Debug, Clone)]
pub enum ServiceError {
    /// Required input missing or otherwise malformed.
    InvalidInput(String),
    /// Input present but of the wrong type.
    WrongType(String),
    /// Lookup found no matching record.
    NotFound(String),
    /// A record with the same identity already exists.
    Conflict(String),
    /// Natural-language query matched no known filter.
    Unparseable(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            ServiceError::WrongType(msg) => write!(f, "wrong type: {msg}"),
            ServiceError::NotFound(msg) => write!(f, "not found: {msg}"),
            ServiceError::Conflict(msg) => write!(f, "conflict: {msg}"),
            ServiceError::Unparseable(msg) => write!(f, "unparseable query: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {}

/// Result type alias using [`ServiceError`].
pub type ServiceResult<T> = Result<T, ServiceError>;
