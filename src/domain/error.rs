use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("domain value `{entity}` missing")]
    Missing { entity: &'static str },
    #[error("domain validation failed: {message}")]
    Validation { message: String },
}

impl DomainError {
    pub fn missing(entity: &'static str) -> Self {
        Self::Missing { entity }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
