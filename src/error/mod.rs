use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Session storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage connection failed: {message}")]
    Connection { message: String },

    #[error("Migration failed: {message}")]
    Migration { message: String },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Field schema catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Page '{page}' already registered")]
    DuplicatePage { page: String },

    #[error("Duplicate field '{field}' in page '{page}'")]
    DuplicateField { page: String, field: String },

    #[error("Select field '{field}' in page '{page}' has no options")]
    EmptySelect { page: String, field: String },

    #[error("Invalid schema: {message}")]
    Invalid { message: String },
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
