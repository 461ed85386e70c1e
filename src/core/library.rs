use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum LibraryError {
    Database {
        message: String,
        reason_code: Option<String>,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // Carries every violation found in a payload so callers can report them at once.
    Validation {
        message: String,
        violations: Vec<String>,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn database(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Database { message: message.to_string(), reason_code }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, violations: Vec<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), violations }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {}", err).as_str())
    }
}

impl From<sqlx::Error> for LibraryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => {
                LibraryError::not_found("row not found")
            }
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                LibraryError::duplicate_key(
                    format!("duplicate key {}", db_err.message()).as_str())
            }
            sqlx::Error::Database(ref db_err) => {
                LibraryError::database(
                    format!("sql database error {}", db_err.message()).as_str(),
                    db_err.code().map(|c| c.to_string()))
            }
            _ => {
                LibraryError::database(
                    format!("sql database error {}", err).as_str(), None)
            }
        }
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Database { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, violations } => {
                write!(f, "{} {:?}", message, violations)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for repository and service operations.
pub type LibraryResult<T> = Result<T, LibraryError>;
