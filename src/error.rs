use thiserror::Error;

/// Main error type for the planner
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown {kind}: {name}")]
    NotFound { kind: &'static str, name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        PlannerError::InvalidInput(message.into())
    }

    pub(crate) fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        PlannerError::NotFound {
            kind,
            name: name.into(),
        }
    }

    /// True when the error was caused by the caller's input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PlannerError::InvalidInput(_)
                | PlannerError::Validation(_)
                | PlannerError::Serialization(_)
                | PlannerError::NotFound { .. }
        )
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::InvalidInput(_) => "INVALID_INPUT",
            PlannerError::Validation(_) => "VALIDATION_ERROR",
            PlannerError::Serialization(_) => "SERIALIZATION_ERROR",
            PlannerError::Config(_) => "CONFIG_ERROR",
            PlannerError::NotFound { .. } => "NOT_FOUND",
            PlannerError::Io(_) => "IO_ERROR",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        })
    }
}
