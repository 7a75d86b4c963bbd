//! Chart listing tool.

use crate::context::ToolContext;
use crate::error::{ToolError, ToolResult};
use crate::tools::history::read_history;
use crate::tools::response::{ChartListing, ToolResponse};
use crate::tools::ChartTools;
use tracing::debug;

impl ChartTools {
    /// List stored PNG artifacts next to the tracked chart history.
    ///
    /// The two views are reported as they are; a tracked record without a
    /// blob, or a blob without a record, is left for the caller to reconcile.
    pub fn list_charts(&self, ctx: Option<&ToolContext<'_>>) -> ToolResponse<ChartListing> {
        ToolResponse::from_result(self.try_list_charts(ctx))
    }

    fn try_list_charts(
        &self,
        ctx: Option<&ToolContext<'_>>,
    ) -> ToolResult<ToolResponse<ChartListing>> {
        let ctx = ctx.ok_or(ToolError::ContextRequired("artifact access"))?;

        let chart_artifacts: Vec<String> = ctx
            .list_artifacts()
            .map_err(ToolError::operation("listing charts"))?
            .into_iter()
            .filter(|name| name.ends_with(".png"))
            .collect();
        let charts_history = read_history(ctx.state(), &self.config().state_key)
            .map_err(ToolError::operation("listing charts"))?;

        let total_charts = chart_artifacts.len();
        debug!(total_charts, tracked = charts_history.len(), "listed charts");

        Ok(ToolResponse::success(
            format!("Found {} chart artifacts", total_charts),
            ChartListing {
                chart_artifacts,
                charts_history,
                total_charts,
            },
        ))
    }
}
