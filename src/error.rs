//! Error types for the skills API

use thiserror::Error;

/// Result type alias using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the skills API
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or incomplete request input
    #[error("{0}")]
    InvalidInput(String),

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Resource already exists
    #[error("{0}")]
    Conflict(String),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Check if error is a client error (caller's fault)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput(_) | Error::NotFound(_) | Error::Conflict(_)
        )
    }

    /// HTTP status code this error maps to at the API boundary
    pub fn status_code(&self) -> u16 {
        match self {
            Error::InvalidInput(_) => 400,
            Error::NotFound(_) => 404,
            Error::Conflict(_) => 409,
            _ => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::InvalidInput("bad".into()).status_code(), 400);
        assert_eq!(Error::NotFound("Skill not found".into()).status_code(), 404);
        assert_eq!(Error::Conflict("Skill already exists".into()).status_code(), 409);
        assert_eq!(Error::Database(sqlx::Error::RowNotFound).status_code(), 500);
        assert_eq!(Error::Internal("boom".into()).status_code(), 500);
    }

    #[test]
    fn test_client_error_messages_are_bare() {
        let err = Error::NotFound("Skill not found".into());
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "Skill not found");
        assert!(!Error::Config("x".into()).is_client_error());
    }
}
