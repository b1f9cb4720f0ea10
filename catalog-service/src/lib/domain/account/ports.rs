use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;

/// Persistence boundary for account records.
///
/// The directory owns email uniqueness: `create` must surface a duplicate
/// as `EmailAlreadyExists`, this service never pre-checks.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - the email is already registered
    /// * `Database` - the operation failed
    async fn create(&self, account: Account) -> Result<Account, AccountError>;

    /// Retrieve an account by its exact email.
    ///
    /// # Errors
    /// * `Database` - the operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError>;
}
