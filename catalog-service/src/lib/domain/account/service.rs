use std::sync::Arc;

use auth::PasswordHasher;
use auth::SessionClaims;
use auth::SessionIssuer;
use auth::TokenError;
use auth::TokenKind;
use auth::TokenPair;
use chrono::Utc;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::Principal;
use crate::domain::account::models::RegisterCommand;
use crate::domain::account::ports::AccountRepository;

/// Domain service for registration, login, and session management.
///
/// Steps within one call are strictly sequential: validate, hash or
/// verify, directory call, token issuance. The first failure is terminal.
pub struct AccountService {
    repository: Arc<dyn AccountRepository>,
    issuer: Arc<SessionIssuer>,
    password_hasher: PasswordHasher,
}

impl AccountService {
    pub fn new(repository: Arc<dyn AccountRepository>, issuer: Arc<SessionIssuer>) -> Self {
        Self {
            repository,
            issuer,
            password_hasher: PasswordHasher::new(),
        }
    }

    /// Register a new account and open its first session.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - the email is taken (directory conflict)
    /// * `Password` - hashing failed
    pub async fn register(
        &self,
        command: RegisterCommand,
    ) -> Result<(Principal, TokenPair), AccountError> {
        let password_hash = self.password_hasher.hash(&command.password)?;

        let now = Utc::now();
        let account = Account {
            id: AccountId::new(),
            email: command.email,
            name: command.name,
            password_hash,
            created_at: now,
            updated_at: now,
        };

        let account = self.repository.create(account).await?;
        let tokens = self.issue(account.email.as_str())?;

        Ok((Principal::from(&account), tokens))
    }

    /// Authenticate an email/password pair and open a session.
    ///
    /// An unknown email and a wrong password both come back as
    /// `InvalidCredentials`; callers cannot tell which happened.
    ///
    /// # Errors
    /// * `InvalidCredentials` - no such account, or the password mismatches
    /// * `Password` - the stored digest is corrupted
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(Principal, TokenPair), AccountError> {
        let account = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        let matches = self
            .password_hasher
            .verify(password, &account.password_hash)?;
        if !matches {
            return Err(AccountError::InvalidCredentials);
        }

        let tokens = self.issue(account.email.as_str())?;
        Ok((Principal::from(&account), tokens))
    }

    /// Mint a fresh token pair from a still-valid refresh token.
    ///
    /// The presented token must carry the refresh class tag; an access
    /// token here is rejected exactly like a forged one. The subject must
    /// still resolve in the directory. The old refresh token stays valid
    /// until its own expiry, so repeated calls with it each succeed and
    /// each produce an independent pair.
    ///
    /// # Errors
    /// * `TokenExpired` / `TokenInvalid` - the token failed verification
    /// * `AccountGone` - the subject no longer exists
    pub async fn refresh_session(&self, refresh_token: &str) -> Result<TokenPair, AccountError> {
        let claims = self.verify(refresh_token, TokenKind::Refresh)?;

        let account = self
            .repository
            .find_by_email(&claims.sub)
            .await?
            .ok_or_else(|| AccountError::AccountGone(claims.sub.clone()))?;

        self.issue(account.email.as_str())
    }

    /// Resolve the principal behind an access token.
    ///
    /// # Errors
    /// * `TokenExpired` / `TokenInvalid` - the token failed verification
    /// * `AccountGone` - the subject no longer exists
    pub async fn authorize(&self, access_token: &str) -> Result<Principal, AccountError> {
        let claims = self.verify(access_token, TokenKind::Access)?;

        let account = self
            .repository
            .find_by_email(&claims.sub)
            .await?
            .ok_or_else(|| AccountError::AccountGone(claims.sub.clone()))?;

        Ok(Principal::from(&account))
    }

    fn verify(&self, token: &str, expected: TokenKind) -> Result<SessionClaims, AccountError> {
        let claims = self.issuer.codec().verify(token).map_err(|e| match e {
            TokenError::Expired => AccountError::TokenExpired,
            _ => AccountError::TokenInvalid,
        })?;

        // The class tag check is independent of the lifetime difference.
        if claims.kind != expected {
            return Err(AccountError::TokenInvalid);
        }

        Ok(claims)
    }

    fn issue(&self, email: &str) -> Result<TokenPair, AccountError> {
        self.issuer
            .issue(email)
            .map_err(|e| AccountError::Signing(e.to_string()))
    }
}
