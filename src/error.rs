//! Error types shared by the persistence layer and the menu. Store failures and
//! operator input mistakes are kept apart so the menu can decide which ones are
//! worth a retry prompt and which ones end the process.

use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by the data operations in [`crate::db`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database could not be opened or bootstrapped. Only surfaces at
    /// startup and is fatal there.
    #[error("could not open student database at {}: {source}", .path.display())]
    Connection {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The directory meant to hold the database file could not be created.
    #[error("could not create data directory {}: {source}", .path.display())]
    DataDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A write was rejected by a schema constraint (unique email, not-null,
    /// date check). Nothing was persisted.
    #[error("{0}")]
    ConstraintViolation(String),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

/// Problems with what the operator typed, caught before anything reaches the
/// store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid choice. Please enter a number between 1 and 5.")]
    InvalidMenuChoice(String),

    #[error("Student ID must be a number.")]
    InvalidId(String),

    #[error("Enrollment date '{0}' is not a valid YYYY-MM-DD date.")]
    InvalidDate(String),

    #[error("{0} is required.")]
    MissingField(&'static str),
}

pub type StoreResult<T> = Result<T, StoreError>;
