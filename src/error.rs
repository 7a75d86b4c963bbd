use crate::context::StoreError;
use crate::data::{LoaderError, RequestError};
use thiserror::Error;

pub type ToolResult<T> = Result<T, ToolError>;

/// Failures surfaced to the caller as `{"status": "error", "message": ...}`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    #[error("Invalid JSON format in params")]
    InvalidInput,

    #[error("Missing key in JSON data: '{0}'")]
    MissingColumn(String),

    #[error("Missing required argument '{0}'")]
    MissingArgument(String),

    #[error("ToolContext required for {0}")]
    ContextRequired(&'static str),

    #[error("Chart '{0}' not found in artifacts")]
    NotFound(String),

    #[error("Error generating chart: {0}")]
    Render(String),

    #[error("Error {action}: {reason}")]
    Operation { action: &'static str, reason: String },

    #[error("Tool '{0}' not found")]
    UnknownTool(String),
}

impl ToolError {
    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ToolError::InvalidInput => "invalid_input",
            ToolError::MissingColumn(_) => "missing_column",
            ToolError::MissingArgument(_) => "missing_argument",
            ToolError::ContextRequired(_) => "context_required",
            ToolError::NotFound(_) => "not_found",
            ToolError::Render(_) => "render_error",
            ToolError::Operation { .. } => "operation_error",
            ToolError::UnknownTool(_) => "unknown_tool",
        }
    }

    /// Wrap a store failure for the operation named by `action`.
    pub fn operation(action: &'static str) -> impl FnOnce(StoreError) -> ToolError {
        move |err| ToolError::Operation {
            action,
            reason: err.to_string(),
        }
    }
}

impl From<RequestError> for ToolError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::InvalidJson(_) => ToolError::InvalidInput,
            RequestError::MissingKey(key) => ToolError::MissingColumn(key),
            other => ToolError::Render(other.to_string()),
        }
    }
}

impl From<LoaderError> for ToolError {
    fn from(err: LoaderError) -> Self {
        match err {
            LoaderError::MissingColumn(column) => ToolError::MissingColumn(column),
            other => ToolError::Render(other.to_string()),
        }
    }
}
