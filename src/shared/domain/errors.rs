/// Validation failures shared by every entity in the portal.
///
/// These are raised at the boundary, before anything reaches storage, so a
/// caller receiving one of them knows nothing was persisted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidEnumValue { field: &'static str, value: String },

    #[error("Missing required field '{0}'")]
    MissingRequiredField(&'static str),

    #[error("{entity} cannot move from {from} to {to}")]
    InvalidTransition {
        entity: &'static str,
        from: &'static str,
        to: &'static str,
    },
}

impl DomainError {
    pub fn invalid_enum(field: &'static str, value: &str) -> Self {
        DomainError::InvalidEnumValue {
            field,
            value: value.to_string(),
        }
    }

    /// Machine readable code used in API error envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::InvalidEnumValue { .. } => "INVALID_ENUM_VALUE",
            DomainError::MissingRequiredField(_) => "MISSING_REQUIRED_FIELD",
            DomainError::InvalidTransition { .. } => "INVALID_TRANSITION",
        }
    }
}
