//! Structured tool results.

use crate::error::ToolError;
use crate::tools::history::ChartRecord;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    Success,
    Error,
    Warning,
}

/// Result of a tool call. Serializes to a flat JSON object with `status`,
/// `message` and the fields of `data`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResponse<T> {
    pub status: ToolStatus,
    pub message: String,
    #[serde(flatten)]
    pub data: Option<T>,
    #[serde(skip)]
    pub error: Option<ToolError>,
}

impl<T: Serialize> ToolResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: ToolStatus::Success,
            message: message.into(),
            data: Some(data),
            error: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            status: ToolStatus::Warning,
            message: message.into(),
            data: None,
            error: None,
        }
    }

    pub fn failure(error: ToolError) -> Self {
        Self {
            status: ToolStatus::Error,
            message: error.to_string(),
            data: None,
            error: Some(error),
        }
    }

    pub fn from_result(result: Result<Self, ToolError>) -> Self {
        result.unwrap_or_else(|err| {
            warn!(kind = err.kind(), "{}", err);
            Self::failure(err)
        })
    }

    pub fn is_success(&self) -> bool {
        self.status == ToolStatus::Success
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|err| {
            json!({
                "status": ToolStatus::Error,
                "message": format!("Failed to serialize tool result: {}", err),
            })
        })
    }
}

/// Where a rendered chart ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RenderOutput {
    Artifact {
        artifact_name: String,
        version: u64,
        chart_type: String,
    },
    File {
        filepath: String,
        chart_type: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartListing {
    pub chart_artifacts: Vec<String>,
    pub charts_history: Vec<ChartRecord>,
    pub total_charts: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadedChart {
    pub chart_filename: String,
    pub chart_info: Option<ChartRecord>,
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteOutcome {
    pub removed: usize,
}
