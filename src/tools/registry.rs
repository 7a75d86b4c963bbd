//! JSON tool surface: each chart operation as a named tool with a parameter
//! schema, dispatched by name.

use crate::context::ToolContext;
use crate::error::ToolError;
use crate::tools::response::ToolResponse;
use crate::tools::ChartTools;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

pub trait Tool {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn parameters(&self) -> Value;
    fn execute(&self, args: &Value, ctx: Option<&mut ToolContext<'_>>) -> Value;
}

/// Declaration advertised to the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Registry holding the four chart tools.
    pub fn with_chart_tools(tools: ChartTools) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(PlotTool(tools.clone())));
        registry.register(Box::new(ListChartsTool(tools.clone())));
        registry.register(Box::new(LoadChartTool(tools.clone())));
        registry.register(Box::new(DeleteChartTool(tools)));
        registry
    }

    pub fn register(&mut self, tool: Box<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Tool declarations sorted by name.
    pub fn get_definitions(&self) -> Vec<ToolDefinition> {
        let mut definitions: Vec<ToolDefinition> = self
            .tools
            .values()
            .map(|t| ToolDefinition {
                name: t.name().to_string(),
                description: t.description().to_string(),
                parameters: t.parameters(),
            })
            .collect();
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        definitions
    }

    pub fn execute(&self, name: &str, args: &Value, ctx: Option<&mut ToolContext<'_>>) -> Value {
        debug!(tool = name, "executing tool");
        match self.tools.get(name) {
            Some(tool) => tool.execute(args, ctx),
            None => ToolResponse::<()>::failure(ToolError::UnknownTool(name.to_string())).to_value(),
        }
    }
}

fn string_arg<'v>(args: &'v Value, key: &str) -> Option<&'v str> {
    args.get(key).and_then(Value::as_str)
}

fn required_arg<'v>(args: &'v Value, key: &str) -> Result<&'v str, Value> {
    string_arg(args, key).ok_or_else(|| {
        ToolResponse::<()>::failure(ToolError::MissingArgument(key.to_string())).to_value()
    })
}

struct PlotTool(ChartTools);

impl Tool for PlotTool {
    fn name(&self) -> &str {
        "plot_tool"
    }

    fn description(&self) -> &str {
        "Generate a chart from JSON parameters and save it as an artifact or local file"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "params": {
                    "type": "string",
                    "description": "JSON string containing 'df', 'x_col' and 'y_col'"
                },
                "chart_type": {
                    "type": "string",
                    "enum": ["line", "bar", "scatter", "area"],
                    "description": "Type of chart, defaults to line"
                },
                "save_folder": {
                    "type": "string",
                    "description": "Folder for the image when no session is available"
                }
            },
            "required": ["params"]
        })
    }

    fn execute(&self, args: &Value, ctx: Option<&mut ToolContext<'_>>) -> Value {
        // Models sometimes send the params object itself instead of a string
        let params = match args.get("params") {
            Some(Value::String(s)) => s.clone(),
            Some(value @ (Value::Object(_) | Value::Array(_))) => value.to_string(),
            _ => {
                return ToolResponse::<()>::failure(ToolError::MissingArgument(
                    "params".to_string(),
                ))
                .to_value()
            }
        };
        let chart_type = string_arg(args, "chart_type").unwrap_or("line");
        let save_folder = string_arg(args, "save_folder")
            .map(PathBuf::from)
            .unwrap_or_else(|| self.0.config().save_folder.clone());

        self.0
            .render(&params, chart_type, save_folder, ctx)
            .to_value()
    }
}

struct ListChartsTool(ChartTools);

impl Tool for ListChartsTool {
    fn name(&self) -> &str {
        "list_charts_tool"
    }

    fn description(&self) -> &str {
        "List all generated charts stored as artifacts"
    }

    fn parameters(&self) -> Value {
        json!({ "type": "object", "properties": {} })
    }

    fn execute(&self, _args: &Value, ctx: Option<&mut ToolContext<'_>>) -> Value {
        self.0.list_charts(ctx.as_deref()).to_value()
    }
}

struct LoadChartTool(ChartTools);

impl Tool for LoadChartTool {
    fn name(&self) -> &str {
        "load_chart_tool"
    }

    fn description(&self) -> &str {
        "Load a previously generated chart artifact"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "chart_filename": {
                    "type": "string",
                    "description": "Name of the chart file to load"
                }
            },
            "required": ["chart_filename"]
        })
    }

    fn execute(&self, args: &Value, ctx: Option<&mut ToolContext<'_>>) -> Value {
        match required_arg(args, "chart_filename") {
            Ok(name) => self.0.load_chart(name, ctx.as_deref()).to_value(),
            Err(response) => response,
        }
    }
}

struct DeleteChartTool(ChartTools);

impl Tool for DeleteChartTool {
    fn name(&self) -> &str {
        "delete_chart_tool"
    }

    fn description(&self) -> &str {
        "Remove a chart from tracking; the stored artifact may remain available"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "chart_filename": {
                    "type": "string",
                    "description": "Name of the chart file to delete from tracking"
                }
            },
            "required": ["chart_filename"]
        })
    }

    fn execute(&self, args: &Value, ctx: Option<&mut ToolContext<'_>>) -> Value {
        match required_arg(args, "chart_filename") {
            Ok(name) => self.0.delete_chart(name, ctx).to_value(),
            Err(response) => response,
        }
    }
}
