use thiserror::Error;

/// Error types for the catalog layer
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Error from the database operations
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// The seed fixture referenced a record that was not inserted
    #[error("Fixture error: {0}")]
    Fixture(String),
}

/// Type alias for Result with CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;
