use axum::extract::Path;
use axum::extract::State;
use axum::Json;

use super::create_product::ProductData;
use super::parse_id;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::inbound::http::schemas::product::UpdateProductRequest;

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let command = body.validate().map_err(ApiError::Validation)?;

    let product = state.product_service.update(parse_id(&id)?, command).await?;

    Ok(ApiSuccess::ok(ProductData::from(&product)))
}
