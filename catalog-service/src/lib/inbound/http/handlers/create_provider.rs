use axum::extract::State;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::provider::models::Provider;
use crate::inbound::http::router::AppState;
use crate::inbound::http::schemas::provider::CreateProviderRequest;

pub async fn create_provider(
    State(state): State<AppState>,
    Json(body): Json<CreateProviderRequest>,
) -> Result<ApiSuccess<ProviderData>, ApiError> {
    let command = body.validate().map_err(ApiError::Validation)?;

    let provider = state.provider_service.create(command).await?;

    Ok(ApiSuccess::ok(ProviderData::from(&provider)))
}

#[derive(Debug, Clone, Serialize)]
pub struct ProviderData {
    pub id: String,
    pub name: String,
    pub country_code: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<&Provider> for ProviderData {
    fn from(provider: &Provider) -> Self {
        Self {
            id: provider.id.to_string(),
            name: provider.name.clone(),
            country_code: provider.country_code.clone(),
            created_at: provider.created_at,
            updated_at: provider.updated_at,
        }
    }
}
