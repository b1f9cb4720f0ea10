use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::register::SessionResponseData;
use super::ApiError;
use super::ApiSuccess;
use super::MSG_MISSING_CREDENTIALS;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<SessionResponseData>, ApiError> {
    let (email, password) = match (body.email, body.password) {
        (Some(email), Some(password)) => (email, password),
        _ => return Err(ApiError::BadRequest(MSG_MISSING_CREDENTIALS.to_string())),
    };

    let (principal, tokens) = state.account_service.login(&email, &password).await?;

    Ok(ApiSuccess::ok(SessionResponseData::new(&principal, &tokens)))
}

/// Raw login body. Presence is checked here; everything beyond that is
/// answered with the one generic credentials message.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}
