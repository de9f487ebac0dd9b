use thiserror::Error;

/// Errors returned by executor backends.
#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("operation '{op}' not supported by executor '{executor}'")]
    Unsupported { executor: String, op: &'static str },

    #[error("invalid specification: {0}")]
    InvalidSpec(String),

    #[error("missing option: {0}")]
    MissingOption(String),

    #[error("invalid option {key}: {reason}")]
    InvalidOption { key: String, reason: String },

    #[error("backend error: {0}")]
    Backend(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ExecutorError {
    /// Short label value for metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            ExecutorError::Unsupported { .. } => "unsupported",
            ExecutorError::InvalidSpec(_) => "invalid_spec",
            ExecutorError::MissingOption(_) => "missing_option",
            ExecutorError::InvalidOption { .. } => "invalid_option",
            ExecutorError::Backend(_) => "backend",
            ExecutorError::Internal(_) => "internal",
        }
    }
}
