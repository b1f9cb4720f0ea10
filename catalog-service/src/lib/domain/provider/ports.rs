use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::provider::errors::ProviderError;
use crate::domain::provider::models::Provider;
use crate::domain::provider::models::ProviderFilter;

/// Persistence operations for supplier records.
#[async_trait]
pub trait ProviderRepository: Send + Sync + 'static {
    async fn create(&self, provider: Provider) -> Result<Provider, ProviderError>;

    /// List providers matching `filter`.
    async fn find(&self, filter: ProviderFilter) -> Result<Vec<Provider>, ProviderError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Provider>, ProviderError>;

    /// Update a provider in place.
    ///
    /// # Errors
    /// * `NotFound` - no row matched the id
    async fn update(&self, provider: Provider) -> Result<Provider, ProviderError>;

    /// # Errors
    /// * `NotFound` - no row matched the id
    async fn delete(&self, id: Uuid) -> Result<(), ProviderError>;
}

/// Reference check for supplier country codes.
///
/// Backed by an external service; a transport failure counts as a
/// rejection (the adapter logs the cause).
#[async_trait]
pub trait CountryCodeVerifier: Send + Sync + 'static {
    async fn verify(&self, code: &str) -> bool;
}
