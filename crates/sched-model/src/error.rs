use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown executor kind: {0}")]
    UnknownExecutorKind(String),

    #[error("invalid executor kind '{0}': must match ^[A-Z0-9]+$")]
    InvalidKind(String),

    #[error("invalid executor config: {0}")]
    InvalidConfig(String),

    #[error("invalid model: {0}")]
    Invalid(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
