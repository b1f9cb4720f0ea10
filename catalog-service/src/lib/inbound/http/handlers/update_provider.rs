use axum::extract::Path;
use axum::extract::State;
use axum::Json;

use super::create_provider::ProviderData;
use super::parse_id;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::inbound::http::schemas::provider::UpdateProviderRequest;

pub async fn update_provider(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateProviderRequest>,
) -> Result<ApiSuccess<ProviderData>, ApiError> {
    let command = body.validate().map_err(ApiError::Validation)?;

    let provider = state.provider_service.update(parse_id(&id)?, command).await?;

    Ok(ApiSuccess::ok(ProviderData::from(&provider)))
}
