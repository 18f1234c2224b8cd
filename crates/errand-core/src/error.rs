//! Error types for the errand planning library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::Coordinate;

/// Comprehensive error type for all route planning operations.
#[derive(Error, Debug)]
pub enum ErrandError {
    /// The routing collaborator produced no usable route for a leg
    #[error("No route available from {from} to {to}: {reason}")]
    RoutingUnavailable {
        from: Coordinate,
        to: Coordinate,
        reason: String,
    },
    /// Duration or distance text from the routing collaborator could not be
    /// parsed
    #[error("Malformed {field} text in route leg: '{text}'")]
    MalformedLegText { field: &'static str, text: String },
    /// No favorite route with the given name exists for the user
    #[error("Favorite route '{name}' not found for user '{user_id}'")]
    FavoriteNotFound { user_id: String, name: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> ErrandError {
        ErrandError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ErrandError {
        ErrandError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

/// Builder for routing failures on a single leg.
pub struct RoutingErrorBuilder {
    from: Coordinate,
    to: Coordinate,
}

impl RoutingErrorBuilder {
    /// Build the error with the given reason.
    pub fn because(self, reason: impl Into<String>) -> ErrandError {
        ErrandError::RoutingUnavailable {
            from: self.from,
            to: self.to,
            reason: reason.into(),
        }
    }
}

impl ErrandError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a builder for a routing failure between two points.
    pub fn routing(from: Coordinate, to: Coordinate) -> RoutingErrorBuilder {
        RoutingErrorBuilder { from, to }
    }

    /// Creates a malformed leg text error for the given field.
    pub fn malformed(field: &'static str, text: impl Into<String>) -> Self {
        Self::MalformedLegText {
            field,
            text: text.into(),
        }
    }

    /// Wraps a blocking task join failure.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {error}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ErrandError::database(message).with_source(e))
    }
}

/// Extension trait mapping any displayable error into a configuration error.
pub trait ConfigResultExt<T> {
    /// Map the error into [`ErrandError::Configuration`] with a message.
    fn config_context(self, message: &str) -> Result<T>;
}

impl<T, E> ConfigResultExt<T> for std::result::Result<T, E>
where
    E: std::fmt::Display,
{
    fn config_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ErrandError::Configuration {
            message: format!("{message}: {e}"),
        })
    }
}

/// Result type alias for errand operations
pub type Result<T> = std::result::Result<T, ErrandError>;
