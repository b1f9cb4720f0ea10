use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Error type for token operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Signing secret must not be empty")]
    EmptySecret,

    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token is invalid")]
    Invalid,
}

/// Token class tag embedded in every session token.
///
/// Access tokens authorize resource requests; refresh tokens only mint new
/// pairs. Consumers check the tag explicitly, the lifetime difference is
/// not a substitute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Subject: the account email.
    pub sub: String,

    /// Token class tag.
    #[serde(rename = "type")]
    pub kind: TokenKind,

    /// Issued at (Unix timestamp).
    pub iat: i64,

    /// Expiration (Unix timestamp, enforced by the codec on verify).
    pub exp: i64,

    /// Unique token id. Pairs minted within the same second still get
    /// distinct token strings.
    pub jti: String,
}

impl SessionClaims {
    /// Build claims for `subject` expiring `lifetime` after `issued_at`.
    pub fn new(
        subject: impl Into<String>,
        kind: TokenKind,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Self {
        Self {
            sub: subject.into(),
            kind,
            iat: issued_at.timestamp(),
            exp: (issued_at + lifetime).timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }
}

/// Signs and verifies session tokens with a shared HS256 secret.
///
/// Tokens are stateless and self-verifying: no session store is consulted,
/// which trades instant revocation for horizontal scalability.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

impl TokenCodec {
    /// Build a codec over the process-wide secret.
    ///
    /// # Errors
    /// * `EmptySecret` - the secret is empty; a configuration fault the
    ///   process must treat as fatal at startup
    pub fn new(secret: &str) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::EmptySecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            algorithm: Algorithm::HS256,
        })
    }

    /// Sign claims into an opaque token string.
    ///
    /// # Errors
    /// * `SigningFailed` - token encoding failed
    pub fn sign(&self, claims: &SessionClaims) -> Result<String, TokenError> {
        encode(&Header::new(self.algorithm), claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify signature integrity and expiry.
    ///
    /// Three caller-distinguishable outcomes: the claims, `Expired`
    /// (signature valid, past `exp`), or `Invalid` (bad signature,
    /// structurally broken, or required claims missing). Expiry is exact;
    /// no leeway.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret_key_at_least_32_bytes!";

    fn codec() -> TokenCodec {
        TokenCodec::new(SECRET).expect("Failed to build codec")
    }

    #[test]
    fn test_empty_secret_is_rejected() {
        assert_eq!(TokenCodec::new("").unwrap_err(), TokenError::EmptySecret);
    }

    #[test]
    fn test_sign_and_verify() {
        let codec = codec();
        let claims = SessionClaims::new(
            "user@example.com",
            TokenKind::Access,
            Utc::now(),
            Duration::hours(2),
        );

        let token = codec.sign(&claims).expect("Failed to sign token");
        let decoded = codec.verify(&token).expect("Failed to verify token");

        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_expired_token_is_distinguished() {
        let codec = codec();
        let issued_at = Utc::now() - Duration::hours(3);
        let claims = SessionClaims::new(
            "user@example.com",
            TokenKind::Access,
            issued_at,
            Duration::hours(2),
        );

        let token = codec.sign(&claims).expect("Failed to sign token");
        assert_eq!(codec.verify(&token).unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        assert_eq!(
            codec().verify("not.a.token").unwrap_err(),
            TokenError::Invalid
        );
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let claims = SessionClaims::new(
            "user@example.com",
            TokenKind::Access,
            Utc::now(),
            Duration::hours(2),
        );
        let token = codec().sign(&claims).expect("Failed to sign token");

        let other = TokenCodec::new("another_secret_also_32_bytes_long!").unwrap();
        assert_eq!(other.verify(&token).unwrap_err(), TokenError::Invalid);
    }

    #[test]
    fn test_missing_class_tag_is_invalid() {
        // Signed with the right secret but without the `type` claim.
        let exp = (Utc::now() + Duration::hours(1)).timestamp();
        let token = encode(
            &Header::new(Algorithm::HS256),
            &serde_json::json!({ "sub": "user@example.com", "exp": exp }),
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .expect("Failed to sign token");

        assert_eq!(codec().verify(&token).unwrap_err(), TokenError::Invalid);
    }
}
