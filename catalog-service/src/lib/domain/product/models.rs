use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::provider::models::Provider;

/// Catalog item, always owned by a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub category: String,
    pub provider_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A product joined with its owning provider for listings.
///
/// The provider is optional so a dangling reference degrades to a bare
/// product instead of failing the whole listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductWithProvider {
    pub product: Product,
    pub provider: Option<Provider>,
}

#[derive(Debug)]
pub struct CreateProductCommand {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub category: String,
    pub provider_id: Uuid,
}

/// Partial update; only provided fields change.
#[derive(Debug, Default)]
pub struct UpdateProductCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub category: Option<String>,
    pub provider_id: Option<Uuid>,
}
