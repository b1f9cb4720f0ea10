use auth::PasswordError;
use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for account and session operations.
///
/// Variants stay distinct here so the cause can be logged; the HTTP
/// boundary collapses the security-sensitive ones into a small fixed set
/// of client messages.
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Email already registered: {0}")]
    EmailAlreadyExists(String),

    /// Unknown email or wrong password. The two are deliberately not
    /// distinguished anywhere in the type.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Session token expired")]
    TokenExpired,

    /// Bad signature, broken structure, missing claims, or a class tag
    /// that does not match the consuming operation.
    #[error("Session token invalid")]
    TokenInvalid,

    /// The account behind a valid token no longer exists.
    #[error("Account no longer exists: {0}")]
    AccountGone(String),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token signing failed: {0}")]
    Signing(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
