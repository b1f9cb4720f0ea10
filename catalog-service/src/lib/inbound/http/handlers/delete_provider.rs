use axum::extract::Path;
use axum::extract::State;
use serde_json::Value;

use super::parse_id;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn delete_provider(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<Value>, ApiError> {
    state.provider_service.delete(parse_id(&id)?).await?;

    Ok(ApiSuccess::ok(Value::Null))
}
