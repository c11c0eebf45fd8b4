use thiserror::Error;

/// Core error type for schema export operations.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid descriptor: {0}")]
    InvalidDescriptor(String),

    /// A relation field whose target entity could not be determined.
    #[error("Relation field {entity}.{field} has no target entity")]
    MissingRelationTarget { entity: String, field: String },
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        ExportError::Serialization(e.to_string())
    }
}

/// Result type alias using ExportError.
pub type Result<T> = std::result::Result<T, ExportError>;
