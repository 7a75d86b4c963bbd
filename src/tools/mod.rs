//! Tools module - chart tools callable by an agent host
//!
//! | tool                | operation                          |
//! |---------------------|------------------------------------|
//! | `plot_tool`         | [`ChartTools::render`]             |
//! | `list_charts_tool`  | [`ChartTools::list_charts`]        |
//! | `load_chart_tool`   | [`ChartTools::load_chart`]         |
//! | `delete_chart_tool` | [`ChartTools::delete_chart`]       |

mod catalog;
mod history;
mod loader;
mod registry;
mod render;
mod response;
mod tracker;

pub use history::{read_history, write_history, ChartRecord};
pub use registry::{Tool, ToolDefinition, ToolRegistry};
pub use render::TIMESTAMP_FORMAT;
pub use response::{ChartListing, DeleteOutcome, LoadedChart, RenderOutput, ToolResponse, ToolStatus};

use crate::config::ChartConfig;

/// The chart operations, sharing one configuration.
#[derive(Debug, Clone, Default)]
pub struct ChartTools {
    config: ChartConfig,
}

impl ChartTools {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }
}
