use serde::Deserialize;

use super::FieldError;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::RegisterCommand;

const MSG_INVALID_EMAIL: &str = "E-mail invalido.";
const MSG_WEAK_PASSWORD: &str = "A senha deve ter pelo menos 8 caracteres e incluir pelo menos \
uma letra maiúscula, uma letra minúscula, um número e um caractere especial.";

/// Raw register body, checked and trimmed into a [`RegisterCommand`].
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl RegisterRequest {
    pub fn validate(self) -> Result<RegisterCommand, Vec<FieldError>> {
        let mut errors = Vec::new();

        let email = match self.email.as_deref().map(str::trim) {
            None | Some("") => {
                errors.push(FieldError::new(MSG_INVALID_EMAIL, "email"));
                None
            }
            Some(raw) => match EmailAddress::new(raw.to_string()) {
                Ok(email) => Some(email),
                Err(_) => {
                    errors.push(FieldError::new(MSG_INVALID_EMAIL, "email"));
                    None
                }
            },
        };

        let password = match self.password {
            Some(password) if password_is_strong(&password) => Some(password),
            _ => {
                errors.push(FieldError::new(MSG_WEAK_PASSWORD, "password"));
                None
            }
        };

        match (email, password) {
            (Some(email), Some(password)) => Ok(RegisterCommand {
                email,
                name: self
                    .name
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty()),
                password,
            }),
            _ => Err(errors),
        }
    }
}

/// At least 8 characters including an uppercase letter, a lowercase
/// letter, a digit, and a symbol.
fn password_is_strong(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(char::is_uppercase)
        && password.chars().any(char::is_lowercase)
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| !c.is_alphanumeric())
}
