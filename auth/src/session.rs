use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::token::SessionClaims;
use crate::token::TokenCodec;
use crate::token::TokenError;
use crate::token::TokenKind;

const ACCESS_TOKEN_LIFETIME_HOURS: i64 = 2;
const REFRESH_TOKEN_LIFETIME_DAYS: i64 = 2;

/// A signed token together with its absolute expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// An access/refresh pair minted for one subject at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access: IssuedToken,
    pub refresh: IssuedToken,
}

/// Mints token pairs for verified identities.
///
/// Pure over external state: a pair is a function of the subject email,
/// the codec's secret, and the clock. No directory or hasher calls.
pub struct SessionIssuer {
    codec: TokenCodec,
    access_lifetime: Duration,
    refresh_lifetime: Duration,
}

impl SessionIssuer {
    /// Issuer with the standard lifetimes: access 2 hours, refresh 2 days.
    pub fn new(codec: TokenCodec) -> Self {
        Self {
            codec,
            access_lifetime: Duration::hours(ACCESS_TOKEN_LIFETIME_HOURS),
            refresh_lifetime: Duration::days(REFRESH_TOKEN_LIFETIME_DAYS),
        }
    }

    /// Issuer with custom lifetimes, for tests that need short-lived pairs.
    pub fn with_lifetimes(codec: TokenCodec, access: Duration, refresh: Duration) -> Self {
        Self {
            codec,
            access_lifetime: access,
            refresh_lifetime: refresh,
        }
    }

    /// The codec this issuer signs with; verification goes through it too.
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Issue a fresh pair bound to `email`.
    ///
    /// Both claim sets share one issued-at instant and differ only in
    /// class tag and lifetime.
    ///
    /// # Errors
    /// * `SigningFailed` - token encoding failed
    pub fn issue(&self, email: &str) -> Result<TokenPair, TokenError> {
        let issued_at = Utc::now();

        let access_claims =
            SessionClaims::new(email, TokenKind::Access, issued_at, self.access_lifetime);
        let refresh_claims =
            SessionClaims::new(email, TokenKind::Refresh, issued_at, self.refresh_lifetime);

        Ok(TokenPair {
            access: IssuedToken {
                token: self.codec.sign(&access_claims)?,
                expires_at: issued_at + self.access_lifetime,
            },
            refresh: IssuedToken {
                token: self.codec.sign(&refresh_claims)?,
                expires_at: issued_at + self.refresh_lifetime,
            },
        })
    }
}
