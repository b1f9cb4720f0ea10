use serde::Deserialize;
use uuid::Uuid;

use super::FieldError;
use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::UpdateProductCommand;

const MSG_NAME_REQUIRED: &str = "Necessário um nome para o produto.";
const MSG_NAME_TOO_SHORT: &str = "Nome muito curto.";
const MSG_DESCRIPTION_TOO_SHORT: &str = "Descrição muito curta.";
const MSG_CATEGORY_REQUIRED: &str = "Necessário uma categoria para o produto.";
const MSG_PROVIDER_INVALID: &str = "Código de fornecedor invalido.";

const NAME_MIN_LENGTH: usize = 5;
const DESCRIPTION_MIN_LENGTH: usize = 20;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub category: Option<String>,
    pub provider_id: Option<String>,
}

impl CreateProductRequest {
    pub fn validate(self) -> Result<CreateProductCommand, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = match self.name.map(|v| v.trim().to_string()) {
            None => {
                errors.push(FieldError::new(MSG_NAME_REQUIRED, "name"));
                None
            }
            Some(v) if v.chars().count() < NAME_MIN_LENGTH => {
                errors.push(FieldError::new(MSG_NAME_TOO_SHORT, "name"));
                None
            }
            Some(v) => Some(v),
        };

        let description = validate_description(self.description, &mut errors);

        let category = match self.category.map(|v| v.trim().to_string()) {
            Some(v) if !v.is_empty() => Some(v),
            _ => {
                errors.push(FieldError::new(MSG_CATEGORY_REQUIRED, "category"));
                None
            }
        };

        let provider_id = match self.provider_id.as_deref().map(Uuid::parse_str) {
            Some(Ok(id)) => Some(id),
            _ => {
                errors.push(FieldError::new(MSG_PROVIDER_INVALID, "providerId"));
                None
            }
        };

        match (name, category, provider_id) {
            (Some(name), Some(category), Some(provider_id)) => Ok(CreateProductCommand {
                name,
                description,
                price: self.price,
                quantity: self.quantity,
                category,
                provider_id,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub category: Option<String>,
    pub provider_id: Option<String>,
}

impl UpdateProductRequest {
    /// Every field is optional; present ones obey the create rules.
    pub fn validate(self) -> Result<UpdateProductCommand, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = match self.name.map(|v| v.trim().to_string()) {
            Some(v) if v.chars().count() < NAME_MIN_LENGTH => {
                errors.push(FieldError::new(MSG_NAME_TOO_SHORT, "name"));
                None
            }
            other => other,
        };

        let description = validate_description(self.description, &mut errors);

        let provider_id = match self.provider_id.as_deref().map(Uuid::parse_str) {
            None => None,
            Some(Ok(id)) => Some(id),
            Some(Err(_)) => {
                errors.push(FieldError::new(MSG_PROVIDER_INVALID, "providerId"));
                None
            }
        };

        if errors.is_empty() {
            Ok(UpdateProductCommand {
                name,
                description,
                price: self.price,
                quantity: self.quantity,
                category: self.category,
                provider_id,
            })
        } else {
            Err(errors)
        }
    }
}

fn validate_description(
    description: Option<String>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match description.map(|v| v.trim().to_string()) {
        Some(v) if v.chars().count() < DESCRIPTION_MIN_LENGTH => {
            errors.push(FieldError::new(MSG_DESCRIPTION_TOO_SHORT, "description"));
            None
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateProductRequest {
        CreateProductRequest {
            name: Some("Abacate Hass".to_string()),
            description: Some("Abacates selecionados da safra corrente.".to_string()),
            price: Some(12.5),
            quantity: Some(40),
            category: Some("frutas".to_string()),
            provider_id: Some(Uuid::new_v4().to_string()),
        }
    }

    #[test]
    fn test_valid_request() {
        let command = valid_request().validate().expect("Validation failed");

        assert_eq!(command.name, "Abacate Hass");
        assert_eq!(command.quantity, Some(40));
    }

    #[test]
    fn test_short_description_is_rejected() {
        let mut request = valid_request();
        request.description = Some("curta".to_string());

        let errors = request.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, vec!["description"]);
    }

    #[test]
    fn test_provider_reference_must_parse() {
        let mut request = valid_request();
        request.provider_id = Some("abc".to_string());

        let errors = request.validate().unwrap_err();
        assert_eq!(errors[0].message, MSG_PROVIDER_INVALID);
        assert_eq!(errors[0].path, vec!["providerId"]);
    }

    #[test]
    fn test_update_accepts_empty_body() {
        let command = UpdateProductRequest::default()
            .validate()
            .expect("Validation failed");

        assert!(command.name.is_none());
        assert!(command.provider_id.is_none());
    }
}
