use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductWithProvider;
use crate::domain::product::models::UpdateProductCommand;
use crate::domain::product::ports::ProductRepository;
use crate::domain::provider::ports::ProviderRepository;

/// Domain service for catalog items.
///
/// Writes that set a provider reference resolve it first; a dangling
/// reference is rejected before the row is touched.
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
    providers: Arc<dyn ProviderRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>, providers: Arc<dyn ProviderRepository>) -> Self {
        Self {
            repository,
            providers,
        }
    }

    /// # Errors
    /// * `UnknownProvider` - the referenced provider does not exist
    pub async fn create(&self, command: CreateProductCommand) -> Result<Product, ProductError> {
        self.resolve_provider(command.provider_id).await?;

        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: command.name,
            description: command.description,
            price: command.price,
            quantity: command.quantity,
            category: command.category,
            provider_id: command.provider_id,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(product).await
    }

    pub async fn find(&self) -> Result<Vec<ProductWithProvider>, ProductError> {
        self.repository.find_with_provider().await
    }

    /// # Errors
    /// * `NotFound` - no product with this id
    pub async fn get(&self, id: Uuid) -> Result<Product, ProductError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    pub async fn count(&self) -> Result<i64, ProductError> {
        self.repository.count().await
    }

    /// Partial update; a new provider reference is resolved first.
    ///
    /// # Errors
    /// * `NotFound` - no product with this id
    /// * `UnknownProvider` - the new provider reference does not exist
    pub async fn update(
        &self,
        id: Uuid,
        command: UpdateProductCommand,
    ) -> Result<Product, ProductError> {
        let mut product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        if let Some(provider_id) = command.provider_id {
            self.resolve_provider(provider_id).await?;
            product.provider_id = provider_id;
        }

        if let Some(name) = command.name {
            product.name = name;
        }
        if let Some(description) = command.description {
            product.description = Some(description);
        }
        if let Some(price) = command.price {
            product.price = Some(price);
        }
        if let Some(quantity) = command.quantity {
            product.quantity = Some(quantity);
        }
        if let Some(category) = command.category {
            product.category = category;
        }

        product.updated_at = Utc::now();
        self.repository.update(product).await
    }

    /// # Errors
    /// * `NotFound` - no product with this id
    pub async fn delete(&self, id: Uuid) -> Result<(), ProductError> {
        self.repository.delete(id).await
    }

    async fn resolve_provider(&self, provider_id: Uuid) -> Result<(), ProductError> {
        let provider = self
            .providers
            .find_by_id(provider_id)
            .await
            .map_err(|e| ProductError::Database(e.to_string()))?;

        match provider {
            Some(_) => Ok(()),
            None => Err(ProductError::UnknownProvider(provider_id.to_string())),
        }
    }
}
