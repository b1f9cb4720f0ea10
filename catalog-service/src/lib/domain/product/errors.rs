use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The referenced provider does not exist.
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
