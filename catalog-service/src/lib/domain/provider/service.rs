use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::provider::errors::ProviderError;
use crate::domain::provider::models::CreateProviderCommand;
use crate::domain::provider::models::Provider;
use crate::domain::provider::models::ProviderFilter;
use crate::domain::provider::models::UpdateProviderCommand;
use crate::domain::provider::ports::CountryCodeVerifier;
use crate::domain::provider::ports::ProviderRepository;

/// Domain service for supplier records.
///
/// Country codes are checked against the reference service before any
/// write that sets them.
pub struct ProviderService {
    repository: Arc<dyn ProviderRepository>,
    country_codes: Arc<dyn CountryCodeVerifier>,
}

impl ProviderService {
    pub fn new(
        repository: Arc<dyn ProviderRepository>,
        country_codes: Arc<dyn CountryCodeVerifier>,
    ) -> Self {
        Self {
            repository,
            country_codes,
        }
    }

    /// # Errors
    /// * `CountryCodeRejected` - the code failed the reference check
    pub async fn create(&self, command: CreateProviderCommand) -> Result<Provider, ProviderError> {
        if !self.country_codes.verify(&command.country_code).await {
            return Err(ProviderError::CountryCodeRejected(command.country_code));
        }

        let now = Utc::now();
        let provider = Provider {
            id: Uuid::new_v4(),
            name: command.name,
            country_code: command.country_code,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(provider).await
    }

    pub async fn find(&self, filter: ProviderFilter) -> Result<Vec<Provider>, ProviderError> {
        self.repository.find(filter).await
    }

    /// # Errors
    /// * `NotFound` - no provider with this id
    pub async fn get(&self, id: Uuid) -> Result<Provider, ProviderError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProviderError::NotFound(id.to_string()))
    }

    /// Partial update; the country code is re-verified only when supplied.
    ///
    /// # Errors
    /// * `NotFound` - no provider with this id
    /// * `CountryCodeRejected` - the new code failed the reference check
    pub async fn update(
        &self,
        id: Uuid,
        command: UpdateProviderCommand,
    ) -> Result<Provider, ProviderError> {
        let mut provider = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProviderError::NotFound(id.to_string()))?;

        if let Some(country_code) = command.country_code {
            if !self.country_codes.verify(&country_code).await {
                return Err(ProviderError::CountryCodeRejected(country_code));
            }
            provider.country_code = country_code;
        }

        if let Some(name) = command.name {
            provider.name = name;
        }

        provider.updated_at = Utc::now();
        self.repository.update(provider).await
    }

    /// # Errors
    /// * `NotFound` - no provider with this id
    pub async fn delete(&self, id: Uuid) -> Result<(), ProviderError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;

    use super::*;

    mock! {
        pub TestProviderRepository {}

        #[async_trait]
        impl ProviderRepository for TestProviderRepository {
            async fn create(&self, provider: Provider) -> Result<Provider, ProviderError>;
            async fn find(&self, filter: ProviderFilter) -> Result<Vec<Provider>, ProviderError>;
            async fn find_by_id(&self, id: Uuid) -> Result<Option<Provider>, ProviderError>;
            async fn update(&self, provider: Provider) -> Result<Provider, ProviderError>;
            async fn delete(&self, id: Uuid) -> Result<(), ProviderError>;
        }
    }

    mock! {
        pub TestCountryCodeVerifier {}

        #[async_trait]
        impl CountryCodeVerifier for TestCountryCodeVerifier {
            async fn verify(&self, code: &str) -> bool;
        }
    }

    fn provider(name: &str, country_code: &str) -> Provider {
        let now = Utc::now();
        Provider {
            id: Uuid::new_v4(),
            name: name.to_string(),
            country_code: country_code.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_verifies_country_code() {
        let mut repository = MockTestProviderRepository::new();
        repository
            .expect_create()
            .withf(|p| p.name == "Frutas Tropicais" && p.country_code == "BRA")
            .times(1)
            .returning(|p| Ok(p));

        let mut verifier = MockTestCountryCodeVerifier::new();
        verifier
            .expect_verify()
            .withf(|code| code == "BRA")
            .times(1)
            .returning(|_| true);

        let service = ProviderService::new(Arc::new(repository), Arc::new(verifier));
        let created = service
            .create(CreateProviderCommand {
                name: "Frutas Tropicais".to_string(),
                country_code: "BRA".to_string(),
            })
            .await
            .expect("Create failed");

        assert_eq!(created.country_code, "BRA");
    }

    #[tokio::test]
    async fn test_create_rejected_code_never_reaches_storage() {
        let mut repository = MockTestProviderRepository::new();
        repository.expect_create().times(0);

        let mut verifier = MockTestCountryCodeVerifier::new();
        verifier.expect_verify().times(1).returning(|_| false);

        let service = ProviderService::new(Arc::new(repository), Arc::new(verifier));
        let result = service
            .create(CreateProviderCommand {
                name: "Frutas Tropicais".to_string(),
                country_code: "ZZZ".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProviderError::CountryCodeRejected(_)
        ));
    }

    #[tokio::test]
    async fn test_update_skips_verification_without_new_code() {
        let existing = provider("Frutas Tropicais", "BRA");
        let id = existing.id;

        let mut repository = MockTestProviderRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository
            .expect_update()
            .withf(|p| p.name == "Frutas do Norte" && p.country_code == "BRA")
            .times(1)
            .returning(|p| Ok(p));

        let mut verifier = MockTestCountryCodeVerifier::new();
        verifier.expect_verify().times(0);

        let service = ProviderService::new(Arc::new(repository), Arc::new(verifier));
        let updated = service
            .update(
                id,
                UpdateProviderCommand {
                    name: Some("Frutas do Norte".to_string()),
                    country_code: None,
                },
            )
            .await
            .expect("Update failed");

        assert_eq!(updated.name, "Frutas do Norte");
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let mut repository = MockTestProviderRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let verifier = MockTestCountryCodeVerifier::new();
        let service = ProviderService::new(Arc::new(repository), Arc::new(verifier));

        let result = service.get(Uuid::new_v4()).await;
        assert!(matches!(result.unwrap_err(), ProviderError::NotFound(_)));
    }
}
