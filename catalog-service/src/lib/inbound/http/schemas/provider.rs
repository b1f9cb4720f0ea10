use serde::Deserialize;

use super::FieldError;
use crate::domain::provider::models::CreateProviderCommand;
use crate::domain::provider::models::UpdateProviderCommand;

const MSG_NAME_REQUIRED: &str = "Necessário um nome para o fornecedor.";
const MSG_NAME_TOO_SHORT: &str = "Nome muito curto.";
const MSG_CODE_REQUIRED: &str = "Necessário um código do país do fornecedor.";
const MSG_CODE_TOO_SHORT: &str = "Código muito curto.";

const NAME_MIN_LENGTH: usize = 5;
// ISO alpha-2 at minimum; the reference service is the real gate.
const CODE_MIN_LENGTH: usize = 2;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProviderRequest {
    pub name: Option<String>,
    pub country_code: Option<String>,
}

impl CreateProviderRequest {
    pub fn validate(self) -> Result<CreateProviderCommand, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = required_field(self.name, NAME_MIN_LENGTH, "name", MSG_NAME_REQUIRED, MSG_NAME_TOO_SHORT, &mut errors);
        let country_code = required_field(
            self.country_code,
            CODE_MIN_LENGTH,
            "country_code",
            MSG_CODE_REQUIRED,
            MSG_CODE_TOO_SHORT,
            &mut errors,
        );

        match (name, country_code) {
            (Some(name), Some(country_code)) => Ok(CreateProviderCommand { name, country_code }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProviderRequest {
    pub name: Option<String>,
    pub country_code: Option<String>,
}

impl UpdateProviderRequest {
    /// Every field is optional; present ones obey the create rules.
    pub fn validate(self) -> Result<UpdateProviderCommand, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = optional_field(self.name, NAME_MIN_LENGTH, "name", MSG_NAME_TOO_SHORT, &mut errors);
        let country_code = optional_field(
            self.country_code,
            CODE_MIN_LENGTH,
            "country_code",
            MSG_CODE_TOO_SHORT,
            &mut errors,
        );

        if errors.is_empty() {
            Ok(UpdateProviderCommand { name, country_code })
        } else {
            Err(errors)
        }
    }
}

fn required_field(
    value: Option<String>,
    min_length: usize,
    path: &str,
    missing_message: &str,
    short_message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value.map(|v| v.trim().to_string()) {
        None => {
            errors.push(FieldError::new(missing_message, path));
            None
        }
        Some(v) if v.chars().count() < min_length => {
            errors.push(FieldError::new(short_message, path));
            None
        }
        Some(v) => Some(v),
    }
}

fn optional_field(
    value: Option<String>,
    min_length: usize,
    path: &str,
    short_message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if v.chars().count() < min_length => {
            errors.push(FieldError::new(short_message, path));
            None
        }
        other => other,
    }
}
