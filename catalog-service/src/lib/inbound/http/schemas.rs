use serde::Serialize;

pub mod account;
pub mod product;
pub mod provider;

/// A single field-level validation error.
///
/// Handlers forward these lists verbatim inside the failure envelope;
/// nothing downstream inspects them.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub message: String,
    pub path: Vec<String>,
}

impl FieldError {
    pub fn new(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: vec![path.into()],
        }
    }
}
