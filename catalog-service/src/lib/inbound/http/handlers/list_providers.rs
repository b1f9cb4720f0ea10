use axum::extract::Query;
use axum::extract::State;
use serde::Deserialize;
use serde_json::Value;

use super::create_provider::ProviderData;
use super::to_projected_json;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::provider::models::ProviderFilter;
use crate::inbound::http::router::AppState;

pub async fn list_providers(
    State(state): State<AppState>,
    Query(query): Query<ListProvidersQuery>,
) -> Result<ApiSuccess<Vec<Value>>, ApiError> {
    let filter = ProviderFilter {
        name_contains: query.name,
        country_code: query.country_code,
    };

    let providers = state.provider_service.find(filter).await?;

    let data = providers
        .iter()
        .map(|provider| to_projected_json(ProviderData::from(provider), query.fields.as_deref()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ApiSuccess::ok(data))
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListProvidersQuery {
    /// Substring filter on the name.
    pub name: Option<String>,
    /// Exact country code filter.
    pub country_code: Option<String>,
    /// Comma-separated keys to keep in each record.
    pub fields: Option<String>,
}
