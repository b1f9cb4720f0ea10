use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use serde::Deserialize;
use serde_json::Value;

use super::create_provider::ProviderData;
use super::parse_id;
use super::to_projected_json;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_provider(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<GetProviderQuery>,
) -> Result<ApiSuccess<Value>, ApiError> {
    let provider = state.provider_service.get(parse_id(&id)?).await?;

    let data = to_projected_json(ProviderData::from(&provider), query.fields.as_deref())?;

    Ok(ApiSuccess::ok(data))
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetProviderQuery {
    /// Comma-separated keys to keep in the record.
    pub fields: Option<String>,
}
