use axum::extract::State;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::product::models::Product;
use crate::inbound::http::router::AppState;
use crate::inbound::http::schemas::product::CreateProductRequest;

pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<CreateProductRequest>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let command = body.validate().map_err(ApiError::Validation)?;

    let product = state.product_service.create(command).await?;

    Ok(ApiSuccess::ok(ProductData::from(&product)))
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub category: String,
    pub provider_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Product> for ProductData {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            quantity: product.quantity,
            category: product.category.clone(),
            provider_id: product.provider_id.to_string(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
