#![allow(dead_code)]

use chartify_tools::{
    ChartConfig, ChartTools, MemoryArtifactStore, MemorySessionState, ToolContext,
};
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Host-side collaborators for one session.
#[derive(Default)]
pub struct Session {
    pub artifacts: MemoryArtifactStore,
    pub state: MemorySessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctx(&mut self) -> ToolContext<'_> {
        ToolContext::new(&mut self.artifacts, &mut self.state)
    }
}

/// Tools rendering small images to keep tests quick.
pub fn small_tools() -> ChartTools {
    ChartTools::new(ChartConfig {
        width: 400,
        height: 300,
        scale: 1.0,
        ..ChartConfig::default()
    })
}

pub fn sales_params() -> String {
    json!({
        "df": {
            "month": [1, 2, 3, 4],
            "total_sales": [120.0, 95.5, 143.25, 160.0]
        },
        "x_col": "month",
        "y_col": "total_sales"
    })
    .to_string()
}

/// Unique, not yet existing directory under the system temp dir.
pub fn temp_dir(label: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "chartify-tools-{}-{}-{}",
        label,
        std::process::id(),
        n
    ))
}

/// Check `{chart_type}_{y}_vs_{x}_{YYYYMMDD_HHMMSS}.png`.
pub fn assert_chart_filename(name: &str, chart_type: &str, y_col: &str, x_col: &str) {
    let prefix = format!("{}_{}_vs_{}_", chart_type, y_col, x_col);
    let stamp = name
        .strip_prefix(&prefix)
        .and_then(|rest| rest.strip_suffix(".png"))
        .unwrap_or_else(|| panic!("unexpected chart filename: {}", name));

    let (date, time) = stamp.split_once('_').expect("timestamp separator");
    assert_eq!(date.len(), 8, "date part of {}", name);
    assert_eq!(time.len(), 6, "time part of {}", name);
    assert!(
        date.chars().chain(time.chars()).all(|c| c.is_ascii_digit()),
        "timestamp digits in {}",
        name
    );
}
