//! Chartify Tools - chart rendering and tracking tools for agent hosts
//!
//! Renders line, bar, scatter and area charts from JSON tabular data to PNG,
//! stores them as session artifacts (or local files) and keeps a history of
//! generated charts in session state.

pub mod charts;
pub mod config;
pub mod context;
pub mod data;
pub mod error;
pub mod telemetry;
pub mod tools;

pub use config::ChartConfig;
pub use context::{
    Artifact, ArtifactStore, MemoryArtifactStore, MemorySessionState, SessionState, ToolContext,
};
pub use error::{ToolError, ToolResult};
pub use tools::{ChartRecord, ChartTools, ToolRegistry, ToolResponse, ToolStatus};
