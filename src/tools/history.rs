//! Chart history kept in session state.
//!
//! The list is read, changed and written back as a whole. Two overlapping
//! calls against the same session can lose one of their updates; hosts that
//! run tool calls concurrently must serialize them per session.

use crate::context::{SessionState, StoreError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata of one rendered chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRecord {
    pub filename: String,
    pub chart_type: String,
    pub x_col: String,
    pub y_col: String,
    pub timestamp: String,
    /// Artifact version, only set for charts saved as artifacts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
}

/// Read the tracked chart list. A missing entry is an empty list.
pub fn read_history(state: &dyn SessionState, key: &str) -> Result<Vec<ChartRecord>, StoreError> {
    match state.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => serde_json::from_value(value).map_err(|source| StoreError::MalformedState {
            key: key.to_string(),
            source,
        }),
    }
}

pub fn write_history(
    state: &mut dyn SessionState,
    key: &str,
    records: &[ChartRecord],
) -> Result<(), StoreError> {
    let value = serde_json::to_value(records).map_err(|source| StoreError::MalformedState {
        key: key.to_string(),
        source,
    })?;
    state.set(key, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::MemorySessionState;
    use serde_json::json;

    #[test]
    fn missing_key_reads_as_empty() {
        let state = MemorySessionState::new();
        assert!(read_history(&state, "generated_charts").unwrap().is_empty());
    }

    #[test]
    fn records_without_version_are_accepted() {
        let mut state = MemorySessionState::new();
        state.set(
            "generated_charts",
            json!([{
                "filename": "line_y_vs_x_20240101_120000.png",
                "chart_type": "line",
                "x_col": "x",
                "y_col": "y",
                "timestamp": "20240101_120000"
            }]),
        );

        let records = read_history(&state, "generated_charts").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].version, None);
    }

    #[test]
    fn malformed_entry_is_reported() {
        let mut state = MemorySessionState::new();
        state.set("generated_charts", json!("not a list"));
        assert!(matches!(
            read_history(&state, "generated_charts"),
            Err(StoreError::MalformedState { key, .. }) if key == "generated_charts"
        ));
    }
}
