use thiserror::Error;

/// Internal error type for store operations
///
/// Store methods return this; request handlers convert it to `WebError`
/// before anything reaches the client. `Database` wraps any failure of the
/// underlying store, while `InvalidIdentifier` and `NotFound` describe
/// addressing problems with a specific record.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Database query or operation failed
    #[error("Database error: {operation} failed: {source}")]
    Database {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    /// Supplied id is not a well-formed identifier
    #[error("Invalid identifier: {value}")]
    InvalidIdentifier { value: String },

    /// No record exists for the given id
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

impl InternalError {
    /// Create a database error with operation context
    pub fn database(operation: impl Into<String>, source: sea_orm::DbErr) -> Self {
        Self::Database {
            operation: operation.into(),
            source,
        }
    }

    pub fn invalid_identifier(value: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            value: value.into(),
        }
    }

    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}
