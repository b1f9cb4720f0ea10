use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductWithProvider;

/// Persistence operations for catalog items.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    async fn create(&self, product: Product) -> Result<Product, ProductError>;

    /// List every product together with its owning provider.
    async fn find_with_provider(&self) -> Result<Vec<ProductWithProvider>, ProductError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, ProductError>;

    /// Total number of products.
    async fn count(&self) -> Result<i64, ProductError>;

    /// # Errors
    /// * `NotFound` - no row matched the id
    async fn update(&self, product: Product) -> Result<Product, ProductError>;

    /// # Errors
    /// * `NotFound` - no row matched the id
    async fn delete(&self, id: Uuid) -> Result<(), ProductError>;
}
