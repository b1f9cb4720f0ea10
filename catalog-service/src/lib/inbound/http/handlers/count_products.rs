use axum::extract::State;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn count_products(
    State(state): State<AppState>,
) -> Result<ApiSuccess<ProductCountData>, ApiError> {
    let count = state.product_service.count().await?;

    Ok(ApiSuccess::ok(ProductCountData { count }))
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductCountData {
    pub count: i64,
}
