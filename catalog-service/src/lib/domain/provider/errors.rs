use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// The reference service does not know this country code.
    #[error("Country code rejected: {0}")]
    CountryCodeRejected(String),

    #[error("Provider not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
