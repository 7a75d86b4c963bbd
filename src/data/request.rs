//! Chart request parsing.

use crate::charts::ChartKind;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Invalid JSON format in params")]
    InvalidJson(#[from] serde_json::Error),
    #[error("params must be a JSON object")]
    NotAnObject,
    #[error("'{0}'")]
    MissingKey(String),
    #[error("'{0}' must be a string")]
    NotAString(String),
}

/// A parsed render request: table payload, the two column names and the
/// chart type tag as the caller sent it.
#[derive(Debug, Clone)]
pub struct ChartRequest {
    pub df: Value,
    pub x_col: String,
    pub y_col: String,
    pub chart_type: String,
}

impl ChartRequest {
    pub fn parse(params: &str, chart_type: &str) -> Result<Self, RequestError> {
        let data: Value = serde_json::from_str(params)?;
        let Value::Object(mut data) = data else {
            return Err(RequestError::NotAnObject);
        };

        let df = data
            .remove("df")
            .ok_or_else(|| RequestError::MissingKey("df".to_string()))?;
        let x_col = Self::string_field(&data, "x_col")?;
        let y_col = Self::string_field(&data, "y_col")?;

        Ok(Self {
            df,
            x_col,
            y_col,
            chart_type: chart_type.to_string(),
        })
    }

    fn string_field(
        data: &serde_json::Map<String, Value>,
        key: &str,
    ) -> Result<String, RequestError> {
        match data.get(key) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(RequestError::NotAString(key.to_string())),
            None => Err(RequestError::MissingKey(key.to_string())),
        }
    }

    pub fn kind(&self) -> ChartKind {
        ChartKind::from_tag(&self.chart_type)
    }

    /// `{chart_type}_{y_col}_vs_{x_col}_{timestamp}.png`
    pub fn filename(&self, timestamp: &str) -> String {
        format!(
            "{}_{}_vs_{}_{}.png",
            self.chart_type, self.y_col, self.x_col, timestamp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_params_and_builds_filename() {
        let request = ChartRequest::parse(
            r#"{"df": {"day": [1, 2], "temp": [3, 4]}, "x_col": "day", "y_col": "temp"}"#,
            "scatter",
        )
        .expect("request");

        assert_eq!(request.x_col, "day");
        assert_eq!(request.y_col, "temp");
        assert_eq!(request.kind(), ChartKind::Scatter);
        assert_eq!(
            request.filename("20240131_235959"),
            "scatter_temp_vs_day_20240131_235959.png"
        );
    }

    #[test]
    fn unknown_tag_keeps_its_name_but_draws_a_line() {
        let request =
            ChartRequest::parse(r#"{"df": {}, "x_col": "a", "y_col": "b"}"#, "pie").expect("request");
        assert_eq!(request.kind(), ChartKind::Line);
        assert!(request.filename("20240101_000000").starts_with("pie_b_vs_a_"));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            ChartRequest::parse("{not json", "line"),
            Err(RequestError::InvalidJson(_))
        ));
    }

    #[test]
    fn missing_keys_are_named() {
        assert!(matches!(
            ChartRequest::parse(r#"{"df": {}, "x_col": "a"}"#, "line"),
            Err(RequestError::MissingKey(key)) if key == "y_col"
        ));
        assert!(matches!(
            ChartRequest::parse(r#"{"x_col": "a", "y_col": "b"}"#, "line"),
            Err(RequestError::MissingKey(key)) if key == "df"
        ));
        assert!(matches!(
            ChartRequest::parse(r#"[1, 2]"#, "line"),
            Err(RequestError::NotAnObject)
        ));
    }
}
