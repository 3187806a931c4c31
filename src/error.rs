use crate::types::IntegrationType;
use thiserror::Error;

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors surfaced by the client. Domain-validation variants are produced
/// before any network call; `Transport` wraps network and decode failures.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    #[error("integration type {value:?} is not recognized")]
    UnknownIntegrationType { value: String },

    #[error("id type {value:?} is not recognized")]
    UnknownIdType { value: String },

    #[error("reference_id is required for integration type {integration_type}")]
    MissingReferenceId { integration_type: IntegrationType },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    #[error("Transport error: {message}")]
    Transport { message: String },
}

impl GatewayError {
    pub(crate) fn required(field: &str) -> Self {
        GatewayError::Validation {
            message: format!("{} is required", field),
            field: Some(field.to_string()),
        }
    }

    /// True when the failure happened on the wire (or while decoding the
    /// response) rather than in pre-flight validation.
    pub fn is_transport(&self) -> bool {
        matches!(self, GatewayError::Transport { .. })
    }
}
