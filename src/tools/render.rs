//! Chart rendering tool.

use crate::charts::{ChartPlot, StaticChartRenderer, PNG_MIME};
use crate::context::{Artifact, ToolContext};
use crate::data::{ChartRequest, DataLoader, DataProcessor};
use crate::error::{ToolError, ToolResult};
use crate::tools::history::{read_history, write_history, ChartRecord};
use crate::tools::response::{RenderOutput, ToolResponse};
use crate::tools::ChartTools;
use chrono::Local;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Second-resolution local time stamp used in chart filenames.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

impl ChartTools {
    /// Render a chart from JSON `params` (`df`, `x_col`, `y_col`).
    ///
    /// With a context the PNG is saved as an artifact and tracked in session
    /// state; without one it is written under `save_folder`.
    pub fn render(
        &self,
        params: &str,
        chart_type: &str,
        save_folder: impl AsRef<Path>,
        ctx: Option<&mut ToolContext<'_>>,
    ) -> ToolResponse<RenderOutput> {
        ToolResponse::from_result(self.try_render(params, chart_type, save_folder.as_ref(), ctx))
    }

    fn try_render(
        &self,
        params: &str,
        chart_type: &str,
        save_folder: &Path,
        ctx: Option<&mut ToolContext<'_>>,
    ) -> ToolResult<ToolResponse<RenderOutput>> {
        let request = ChartRequest::parse(params, chart_type)?;
        let table = DataLoader::from_json(&request.df)?;
        debug!(
            columns = ?table.get_columns(),
            rows = table.get_row_count(),
            "chart data loaded"
        );
        let series = DataProcessor::xy_series(&table, &request.x_col, &request.y_col)?;
        let plot = ChartPlot::new(request.kind(), &request.x_col, &request.y_col, series);

        let config = self.config();
        let png = StaticChartRenderer::render_png(&plot, &config.canvas(), config.font_path.as_deref())
            .map_err(|e| ToolError::Render(e.to_string()))?;

        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let filename = request.filename(&timestamp);

        match ctx {
            Some(ctx) => self.save_as_artifact(ctx, &request, filename, timestamp, png),
            None => Self::save_to_folder(save_folder, &request, &filename, &png),
        }
    }

    fn save_as_artifact(
        &self,
        ctx: &mut ToolContext<'_>,
        request: &ChartRequest,
        filename: String,
        timestamp: String,
        png: Vec<u8>,
    ) -> ToolResult<ToolResponse<RenderOutput>> {
        let store_failed = |e: crate::context::StoreError| ToolError::Render(e.to_string());

        // Blob first: a record never points at a blob that was not stored
        let version = ctx
            .save_artifact(&filename, Artifact::new(png, PNG_MIME))
            .map_err(store_failed)?;

        let key = &self.config().state_key;
        let mut charts = read_history(ctx.state(), key).map_err(store_failed)?;
        charts.push(ChartRecord {
            filename: filename.clone(),
            chart_type: request.chart_type.clone(),
            x_col: request.x_col.clone(),
            y_col: request.y_col.clone(),
            timestamp,
            version: Some(version),
        });
        write_history(ctx.state_mut(), key, &charts).map_err(store_failed)?;

        info!(artifact = %filename, version, "chart saved as artifact");
        Ok(ToolResponse::success(
            format!("Chart saved as artifact: {}", filename),
            RenderOutput::Artifact {
                artifact_name: filename,
                version,
                chart_type: request.chart_type.clone(),
            },
        ))
    }

    fn save_to_folder(
        save_folder: &Path,
        request: &ChartRequest,
        filename: &str,
        png: &[u8],
    ) -> ToolResult<ToolResponse<RenderOutput>> {
        let io_failed = |e: std::io::Error| ToolError::Render(e.to_string());

        // Column names and the type tag end up in the file name; keep the
        // file inside `save_folder`
        if Path::new(filename).file_name() != Some(OsStr::new(filename)) {
            return Err(ToolError::Render(format!(
                "chart filename '{}' is not a plain file name",
                filename
            )));
        }

        fs::create_dir_all(save_folder).map_err(io_failed)?;
        let filepath = save_folder.join(filename);
        fs::write(&filepath, png).map_err(io_failed)?;

        let filepath = filepath.to_string_lossy().to_string();
        info!(path = %filepath, "chart saved to file");
        Ok(ToolResponse::success(
            format!("Chart saved to {}", filepath),
            RenderOutput::File {
                filepath,
                chart_type: request.chart_type.clone(),
            },
        ))
    }
}
