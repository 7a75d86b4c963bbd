//! Chart loading tool.

use crate::charts::PNG_MIME;
use crate::context::ToolContext;
use crate::error::{ToolError, ToolResult};
use crate::tools::history::read_history;
use crate::tools::response::{LoadedChart, ToolResponse};
use crate::tools::ChartTools;
use tracing::debug;

impl ChartTools {
    /// Load a stored chart artifact and its tracked metadata, if any.
    pub fn load_chart(
        &self,
        chart_filename: &str,
        ctx: Option<&ToolContext<'_>>,
    ) -> ToolResponse<LoadedChart> {
        ToolResponse::from_result(self.try_load_chart(chart_filename, ctx))
    }

    fn try_load_chart(
        &self,
        chart_filename: &str,
        ctx: Option<&ToolContext<'_>>,
    ) -> ToolResult<ToolResponse<LoadedChart>> {
        let ctx = ctx.ok_or(ToolError::ContextRequired("artifact access"))?;

        let artifact = ctx
            .load_artifact(chart_filename)
            .map_err(ToolError::operation("loading chart"))?
            .ok_or_else(|| ToolError::NotFound(chart_filename.to_string()))?;

        // A blob without a tracking record is still a valid chart
        let chart_info = read_history(ctx.state(), &self.config().state_key)
            .map_err(ToolError::operation("loading chart"))?
            .into_iter()
            .find(|record| record.filename == chart_filename);

        debug!(
            chart = chart_filename,
            size = artifact.data.len(),
            tracked = chart_info.is_some(),
            "loaded chart"
        );

        Ok(ToolResponse::success(
            format!("Chart '{}' loaded successfully", chart_filename),
            LoadedChart {
                chart_filename: chart_filename.to_string(),
                chart_info,
                mime_type: artifact.mime_type.unwrap_or_else(|| PNG_MIME.to_string()),
            },
        ))
    }
}
