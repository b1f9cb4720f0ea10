use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::register::TokensData;
use super::ApiError;
use super::ApiSuccess;
use super::MSG_MISSING_REFRESH_TOKEN;
use crate::inbound::http::router::AppState;

pub async fn refresh_token(
    State(state): State<AppState>,
    Json(body): Json<RefreshTokenRequest>,
) -> Result<ApiSuccess<TokensData>, ApiError> {
    // Missing input is its own condition, not an invalid token.
    let token = body
        .refresh_token
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::BadRequest(MSG_MISSING_REFRESH_TOKEN.to_string()))?;

    let tokens = state.account_service.refresh_session(&token).await?;

    Ok(ApiSuccess::ok(TokensData::from(&tokens)))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: Option<String>,
}
