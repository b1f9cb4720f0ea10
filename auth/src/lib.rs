//! Session and credential primitives.
//!
//! Provides the security core shared by the HTTP services:
//! - Password hashing (Argon2id)
//! - Signed session tokens with access/refresh classes
//! - Token pair issuance
//!
//! The crate knows nothing about HTTP or storage; services wire these
//! pieces into their own middleware and handlers.
//!
//! # Examples
//!
//! ## Password hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest).unwrap());
//! assert!(!hasher.verify("not_my_password", &digest).unwrap());
//! ```
//!
//! ## Session tokens
//! ```
//! use auth::{SessionIssuer, TokenCodec, TokenKind};
//!
//! let codec = TokenCodec::new("secret_key_at_least_32_bytes_long!").unwrap();
//! let issuer = SessionIssuer::new(codec);
//!
//! let pair = issuer.issue("user@example.com").unwrap();
//! let claims = issuer.codec().verify(&pair.access.token).unwrap();
//! assert_eq!(claims.sub, "user@example.com");
//! assert_eq!(claims.kind, TokenKind::Access);
//! ```

pub mod password;
pub mod session;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use session::IssuedToken;
pub use session::SessionIssuer;
pub use session::TokenPair;
pub use token::SessionClaims;
pub use token::TokenCodec;
pub use token::TokenError;
pub use token::TokenKind;
