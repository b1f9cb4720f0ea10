use axum::extract::State;
use serde::Serialize;

use super::create_product::ProductData;
use super::create_provider::ProviderData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::product::models::ProductWithProvider;
use crate::inbound::http::router::AppState;

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ProductWithProviderData>>, ApiError> {
    let products = state.product_service.find().await?;

    let data = products.iter().map(ProductWithProviderData::from).collect();

    Ok(ApiSuccess::ok(data))
}

/// Listing entry: the product with its owning provider embedded.
#[derive(Debug, Clone, Serialize)]
pub struct ProductWithProviderData {
    #[serde(flatten)]
    pub product: ProductData,
    pub provider: Option<ProviderData>,
}

impl From<&ProductWithProvider> for ProductWithProviderData {
    fn from(entry: &ProductWithProvider) -> Self {
        Self {
            product: ProductData::from(&entry.product),
            provider: entry.provider.as_ref().map(ProviderData::from),
        }
    }
}
