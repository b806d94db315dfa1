//! Error types.

use std::{error, fmt};
use thiserror::Error;

/// Boxed source error carried by [`StoreError`].
pub type BoxError = Box<dyn error::Error + Send + Sync + 'static>;

/// The table operation that failed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operation {
    /// Scan of the whole table.
    Scan,
    /// Query of the per-user index.
    Query,
    /// Put of a whole record.
    Put,
    /// Delete by key.
    Delete,
    /// Update of named attributes.
    Update,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Scan => "scan",
            Self::Query => "query",
            Self::Put => "put",
            Self::Delete => "delete",
            Self::Update => "update",
        };
        f.write_str(name)
    }
}

/// A request against the todo table failed.
///
/// Covers transport faults, throttling, permission errors, failed
/// preconditions and records that could not be (de)serialized. Failures are
/// never retried.
#[derive(Debug, Error)]
#[error("todo table {operation} request failed")]
pub struct StoreError {
    operation: Operation,
    #[source]
    source: BoxError,
}

impl StoreError {
    /// Wrap the error that made `operation` fail.
    pub fn new(operation: Operation, source: impl Into<BoxError>) -> Self {
        Self {
            operation,
            source: source.into(),
        }
    }

    /// The operation that failed.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The underlying error, for callers that need to inspect it.
    pub fn into_source(self) -> BoxError {
        self.source
    }
}

/// Configuration could not be read from the environment.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("environment variable {0} is not set")]
    Missing(&'static str),
    /// A variable holds a value that cannot be parsed.
    #[error("environment variable {variable} has invalid value {value:?}")]
    Invalid {
        /// The offending variable.
        variable: &'static str,
        /// The value it holds.
        value: String,
    },
}
