use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("failed to stage alignment inputs: {0}")]
    Staging(String),

    #[error("alignment tool failed: {0}")]
    ToolFailure(String),

    #[error("alignment tool exited successfully but produced no output file")]
    OutputMissing,

    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn staging(message: impl Into<String>) -> Self {
        Self::Staging(message.into())
    }

    pub fn tool_failure(stderr: impl Into<String>) -> Self {
        Self::ToolFailure(stderr.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        Self::Infrastructure(message.into())
    }
}
