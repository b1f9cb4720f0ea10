use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::domain::account::errors::AccountError;
use crate::domain::product::errors::ProductError;
use crate::domain::provider::errors::ProviderError;
use crate::inbound::http::schemas::FieldError;

pub mod count_products;
pub mod create_product;
pub mod create_provider;
pub mod delete_product;
pub mod delete_provider;
pub mod get_product;
pub mod get_provider;
pub mod list_products;
pub mod list_providers;
pub mod login;
pub mod refresh_token;
pub mod register;
pub mod update_product;
pub mod update_provider;

/// Client-facing messages for the security-sensitive paths. Distinct
/// internal causes collapse into this fixed set at the boundary.
pub const MSG_INVALID_CREDENTIALS: &str = "Senha ou e-mail incorretos.";
pub const MSG_MISSING_CREDENTIALS: &str = "Envie todos dados de acesso.";
pub const MSG_EMAIL_TAKEN: &str = "E-mail já cadastrado.";
pub const MSG_INVALID_TOKEN: &str = "Invalid or expired token";
pub const MSG_TOKEN_NOT_PROVIDED: &str = "Token not provided";
pub const MSG_MISSING_REFRESH_TOKEN: &str = "Por favor envie o refreshToken.";
pub const MSG_NOT_FOUND: &str = "Registro não encontrado.";
pub const MSG_GENERIC: &str = "Ocorreu um erro.";

/// Success envelope: `{"success": true, "data": <payload>}`.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<SuccessBody<T>>);

#[derive(Debug, Clone, Serialize)]
struct SuccessBody<T: Serialize> {
    success: bool,
    data: T,
}

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(SuccessBody { success: true, data }))
    }

    pub fn ok(data: T) -> Self {
        Self::new(StatusCode::OK, data)
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Failure envelope: `{"success": false, "error": <message | field list>}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    BadRequest(String),
    Validation(Vec<FieldError>),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    /// Unexpected failure. The cause is logged server-side; the client
    /// sees status 400 and the generic message, nothing more.
    Internal(String),
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldError>),
}

#[derive(Debug, Clone, Serialize)]
struct ErrorBody {
    success: bool,
    error: ErrorDetail,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorDetail::Message(msg)),
            ApiError::Validation(fields) => (StatusCode::BAD_REQUEST, ErrorDetail::Fields(fields)),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, ErrorDetail::Message(msg)),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorDetail::Message(msg)),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, ErrorDetail::Message(msg)),
            ApiError::Internal(cause) => {
                tracing::error!(%cause, "Request failed unexpectedly");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorDetail::Message(MSG_GENERIC.to_string()),
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                success: false,
                error: detail,
            }),
        )
            .into_response()
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::InvalidCredentials => {
                ApiError::BadRequest(MSG_INVALID_CREDENTIALS.to_string())
            }
            AccountError::EmailAlreadyExists(_) => ApiError::Conflict(MSG_EMAIL_TAKEN.to_string()),
            // Expired, forged, wrong class tag, and vanished subjects are
            // indistinguishable to the client.
            AccountError::TokenExpired | AccountError::TokenInvalid => {
                ApiError::BadRequest(MSG_INVALID_TOKEN.to_string())
            }
            AccountError::AccountGone(email) => {
                tracing::warn!(%email, "Session refers to a deleted account");
                ApiError::BadRequest(MSG_INVALID_TOKEN.to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::CountryCodeRejected(_) => ApiError::Validation(vec![FieldError::new(
                "Código invalido",
                "country_code",
            )]),
            ProviderError::NotFound(_) => ApiError::NotFound(MSG_NOT_FOUND.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => ApiError::NotFound(MSG_NOT_FOUND.to_string()),
            ProductError::UnknownProvider(_) => ApiError::Validation(vec![FieldError::new(
                "Código de fornecedor invalido.",
                "providerId",
            )]),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Serialize a record, optionally narrowed to the requested fields.
pub fn to_projected_json<T: Serialize>(record: T, fields: Option<&str>) -> Result<Value, ApiError> {
    let value = serde_json::to_value(record).map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(match fields {
        Some(fields) => select_fields(value, fields),
        None => value,
    })
}

/// Parse a path id; a non-UUID id names no record, so it is a 404.
pub fn parse_id(raw: &str) -> Result<uuid::Uuid, ApiError> {
    uuid::Uuid::parse_str(raw).map_err(|_| ApiError::NotFound(MSG_NOT_FOUND.to_string()))
}

/// Narrow a serialized record to the comma-separated keys in `fields`.
///
/// Non-object values pass through untouched; unknown keys are simply
/// absent from the result, mirroring a projection that selects nothing.
pub fn select_fields(value: Value, fields: &str) -> Value {
    let keep: Vec<&str> = fields
        .split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect();

    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(key, _)| keep.contains(&key.as_str()))
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_select_fields_keeps_only_requested_keys() {
        let record = json!({ "id": "1", "name": "Abacate", "category": "frutas" });

        let narrowed = select_fields(record, "name, category");
        assert_eq!(narrowed, json!({ "name": "Abacate", "category": "frutas" }));
    }

    #[test]
    fn test_select_fields_ignores_unknown_keys() {
        let record = json!({ "id": "1" });
        assert_eq!(select_fields(record, "nope"), json!({}));
    }

    #[test]
    fn test_error_detail_serializes_as_message_or_list() {
        let message = ErrorBody {
            success: false,
            error: ErrorDetail::Message(MSG_GENERIC.to_string()),
        };
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({ "success": false, "error": "Ocorreu um erro." })
        );

        let fields = ErrorBody {
            success: false,
            error: ErrorDetail::Fields(vec![FieldError::new("Código invalido", "country_code")]),
        };
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            json!({
                "success": false,
                "error": [{ "message": "Código invalido", "path": ["country_code"] }]
            })
        );
    }
}
