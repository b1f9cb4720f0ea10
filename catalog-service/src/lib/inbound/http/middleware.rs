use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::MSG_INVALID_TOKEN;
use crate::inbound::http::handlers::MSG_TOKEN_NOT_PROVIDED;
use crate::inbound::http::router::AppState;

/// Gate in front of every protected route.
///
/// Extracts the bearer token, verifies it as an access token, resolves
/// the account, and attaches the password-stripped principal to request
/// extensions. Every failure short-circuits with 401 before the handler
/// runs; there is no partial continuation.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let principal = state.account_service.authorize(token).await.map_err(|e| {
        tracing::warn!(error = %e, "Access token rejected");
        unauthorized(MSG_INVALID_TOKEN)
    })?;

    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| unauthorized(MSG_TOKEN_NOT_PROVIDED))?;

    let value = header
        .to_str()
        .map_err(|_| unauthorized(MSG_INVALID_TOKEN))?;

    value
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized(MSG_INVALID_TOKEN))
}

fn unauthorized(message: &str) -> Response {
    ApiError::Unauthorized(message.to_string()).into_response()
}
