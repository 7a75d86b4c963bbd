//! Chart tracking removal tool.

use crate::context::ToolContext;
use crate::error::{ToolError, ToolResult};
use crate::tools::history::{read_history, write_history};
use crate::tools::response::{DeleteOutcome, ToolResponse};
use crate::tools::ChartTools;
use tracing::info;

impl ChartTools {
    /// Stop tracking a chart. Every record with this filename is removed;
    /// the artifact itself stays in the store.
    pub fn delete_chart(
        &self,
        chart_filename: &str,
        ctx: Option<&mut ToolContext<'_>>,
    ) -> ToolResponse<DeleteOutcome> {
        ToolResponse::from_result(self.try_delete_chart(chart_filename, ctx))
    }

    fn try_delete_chart(
        &self,
        chart_filename: &str,
        ctx: Option<&mut ToolContext<'_>>,
    ) -> ToolResult<ToolResponse<DeleteOutcome>> {
        let ctx = ctx.ok_or(ToolError::ContextRequired("state management"))?;
        let key = &self.config().state_key;

        let charts_history =
            read_history(ctx.state(), key).map_err(ToolError::operation("deleting chart"))?;
        let before = charts_history.len();
        let updated: Vec<_> = charts_history
            .into_iter()
            .filter(|record| record.filename != chart_filename)
            .collect();

        let removed = before - updated.len();
        if removed == 0 {
            return Ok(ToolResponse::warning(format!(
                "Chart '{}' was not found in tracking history",
                chart_filename
            )));
        }

        write_history(ctx.state_mut(), key, &updated)
            .map_err(ToolError::operation("deleting chart"))?;

        info!(chart = chart_filename, removed, "chart removed from tracking");
        Ok(ToolResponse::success(
            format!(
                "Chart '{}' removed from tracking. {} chart(s) removed.",
                chart_filename, removed
            ),
            DeleteOutcome { removed },
        ))
    }
}
