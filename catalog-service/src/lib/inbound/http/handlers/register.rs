use auth::IssuedToken;
use auth::TokenPair;
use axum::extract::State;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::models::Principal;
use crate::inbound::http::router::AppState;
use crate::inbound::http::schemas::account::RegisterRequest;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<ApiSuccess<SessionResponseData>, ApiError> {
    let command = body.validate().map_err(ApiError::Validation)?;

    let (principal, tokens) = state.account_service.register(command).await?;

    Ok(ApiSuccess::ok(SessionResponseData::new(&principal, &tokens)))
}

/// Register/login success payload: the account view plus a token pair.
/// `AccountData` is built from [`Principal`], so a password can never
/// appear here.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponseData {
    pub user: AccountData,
    pub tokens: TokensData,
}

impl SessionResponseData {
    pub fn new(principal: &Principal, tokens: &TokenPair) -> Self {
        Self {
            user: principal.into(),
            tokens: tokens.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountData {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<&Principal> for AccountData {
    fn from(principal: &Principal) -> Self {
        Self {
            id: principal.id.to_string(),
            email: principal.email.clone(),
            name: principal.name.clone(),
            created_at: principal.created_at,
            updated_at: principal.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokensData {
    pub access_token: IssuedTokenData,
    pub refresh_token: IssuedTokenData,
}

impl From<&TokenPair> for TokensData {
    fn from(pair: &TokenPair) -> Self {
        Self {
            access_token: (&pair.access).into(),
            refresh_token: (&pair.refresh).into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IssuedTokenData {
    pub token: String,
    /// Absolute expiry instant reported alongside the opaque token.
    #[serde(rename = "expiresIn")]
    pub expires_in: DateTime<Utc>,
}

impl From<&IssuedToken> for IssuedTokenData {
    fn from(issued: &IssuedToken) -> Self {
        Self {
            token: issued.token.clone(),
            expires_in: issued.expires_at,
        }
    }
}
