use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use serde::Deserialize;
use serde_json::Value;

use super::create_product::ProductData;
use super::parse_id;
use super::to_projected_json;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<GetProductQuery>,
) -> Result<ApiSuccess<Value>, ApiError> {
    let product = state.product_service.get(parse_id(&id)?).await?;

    let data = to_projected_json(ProductData::from(&product), query.fields.as_deref())?;

    Ok(ApiSuccess::ok(data))
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetProductQuery {
    /// Comma-separated keys to keep in the record.
    pub fields: Option<String>,
}
