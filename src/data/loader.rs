//! JSON Data Loader Module
//! Builds a Polars DataFrame from the `df` payload of a chart request.
//!
//! Two payload shapes are accepted:
//! - column mapping: `{"month": ["Jan", "Feb"], "sales": [10, 12]}`
//! - row records:    `[{"month": "Jan", "sales": 10}, {"month": "Feb", "sales": 12}]`

use polars::prelude::*;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to build table: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("df must be an object of columns or an array of row objects")]
    UnsupportedShape,
    #[error("column '{0}' must be an array of values")]
    InvalidColumn(String),
    #[error("row {0} is not an object")]
    InvalidRow(usize),
    #[error("'{0}'")]
    MissingColumn(String),
}

/// Tabular chart data backed by a Polars DataFrame.
pub struct DataLoader {
    df: DataFrame,
}

impl DataLoader {
    /// Build the table from a JSON `df` value.
    pub fn from_json(value: &Value) -> Result<Self, LoaderError> {
        let columns = match value {
            Value::Object(map) => Self::columns_from_mapping(map)?,
            Value::Array(rows) => Self::columns_from_records(rows)?,
            _ => return Err(LoaderError::UnsupportedShape),
        };

        let df = DataFrame::new(columns)?;
        Ok(Self { df })
    }

    fn columns_from_mapping(map: &Map<String, Value>) -> Result<Vec<Column>, LoaderError> {
        map.iter()
            .map(|(name, values)| match values {
                Value::Array(values) => Ok(Self::infer_column(name, values)),
                _ => Err(LoaderError::InvalidColumn(name.clone())),
            })
            .collect()
    }

    fn columns_from_records(rows: &[Value]) -> Result<Vec<Column>, LoaderError> {
        // Column order follows first appearance across rows
        let mut names: Vec<String> = Vec::new();
        for (idx, row) in rows.iter().enumerate() {
            let Value::Object(record) = row else {
                return Err(LoaderError::InvalidRow(idx));
            };
            for key in record.keys() {
                if !names.contains(key) {
                    names.push(key.clone());
                }
            }
        }

        let columns = names
            .iter()
            .map(|name| {
                let values: Vec<Value> = rows
                    .iter()
                    .map(|row| row.get(name).cloned().unwrap_or(Value::Null))
                    .collect();
                Self::infer_column(name, &values)
            })
            .collect();

        Ok(columns)
    }

    /// Pick a column dtype from its JSON values: all numbers become Float64,
    /// all booleans become Boolean, anything else is kept as text.
    fn infer_column(name: &str, values: &[Value]) -> Column {
        if values.iter().all(|v| v.is_null() || v.is_number()) {
            let data: Vec<Option<f64>> = values.iter().map(Value::as_f64).collect();
            Column::new(name.into(), data)
        } else if values.iter().all(|v| v.is_null() || v.is_boolean()) {
            let data: Vec<Option<bool>> = values.iter().map(Value::as_bool).collect();
            Column::new(name.into(), data)
        } else {
            let data: Vec<Option<String>> = values
                .iter()
                .map(|v| match v {
                    Value::Null => None,
                    Value::String(s) => Some(s.clone()),
                    other => Some(other.to_string()),
                })
                .collect();
            Column::new(name.into(), data)
        }
    }

    /// Get list of column names.
    pub fn get_columns(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.df.get_column_index(column).is_some()
    }

    /// Check whether a column holds numeric values.
    pub fn is_numeric(&self, column: &str) -> Result<bool, LoaderError> {
        let col = self.column(column)?;
        Ok(matches!(
            col.dtype(),
            DataType::Float32
                | DataType::Float64
                | DataType::Int8
                | DataType::Int16
                | DataType::Int32
                | DataType::Int64
                | DataType::UInt8
                | DataType::UInt16
                | DataType::UInt32
                | DataType::UInt64
        ))
    }

    /// Get column values cast to f64. Cells that cannot be parsed are `None`.
    pub fn get_f64_values(&self, column: &str) -> Result<Vec<Option<f64>>, LoaderError> {
        let col = self.column(column)?;
        let value_f64 = col.cast(&DataType::Float64)?;
        let value_ca = value_f64.f64()?;

        Ok((0..self.df.height())
            .map(|i| value_ca.get(i).filter(|v| !v.is_nan()))
            .collect())
    }

    /// Get column values rendered as text labels.
    pub fn get_labels(&self, column: &str) -> Result<Vec<Option<String>>, LoaderError> {
        let col = self.column(column)?;

        Ok((0..self.df.height())
            .map(|i| {
                let val = col.get(i).ok()?;
                if val.is_null() {
                    None
                } else {
                    Some(val.to_string().trim_matches('"').to_string())
                }
            })
            .collect())
    }

    /// Get the number of rows in the table.
    pub fn get_row_count(&self) -> usize {
        self.df.height()
    }

    fn column(&self, column: &str) -> Result<&Column, LoaderError> {
        if !self.has_column(column) {
            return Err(LoaderError::MissingColumn(column.to_string()));
        }
        Ok(self.df.column(column)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_table_from_column_mapping() {
        let loader = DataLoader::from_json(&json!({
            "month": ["Jan", "Feb", "Mar"],
            "sales": [10, 12.5, 9]
        }))
        .expect("table");

        assert_eq!(loader.get_row_count(), 3);
        assert!(loader.has_column("month"));
        assert!(loader.is_numeric("sales").expect("sales"));
        assert!(!loader.is_numeric("month").expect("month"));
        assert_eq!(
            loader.get_f64_values("sales").expect("values"),
            vec![Some(10.0), Some(12.5), Some(9.0)]
        );
    }

    #[test]
    fn builds_table_from_row_records_with_gaps() {
        let loader = DataLoader::from_json(&json!([
            {"day": 1, "temp": 20.5},
            {"day": 2},
            {"day": 3, "temp": 22.0, "note": "sunny"}
        ]))
        .expect("table");

        assert_eq!(loader.get_columns(), vec!["day", "temp", "note"]);
        assert_eq!(
            loader.get_f64_values("temp").expect("temp"),
            vec![Some(20.5), None, Some(22.0)]
        );
        assert_eq!(
            loader.get_labels("note").expect("note"),
            vec![None, None, Some("sunny".to_string())]
        );
    }

    #[test]
    fn mixed_values_become_text() {
        let loader = DataLoader::from_json(&json!({"id": [1, "b", true]})).expect("table");
        assert!(!loader.is_numeric("id").expect("id"));
        assert_eq!(
            loader.get_labels("id").expect("labels"),
            vec![
                Some("1".to_string()),
                Some("b".to_string()),
                Some("true".to_string())
            ]
        );
    }

    #[test]
    fn numeric_text_is_cast_when_reading_values() {
        let loader = DataLoader::from_json(&json!({"v": ["1.5", "oops", "3"]})).expect("table");
        assert_eq!(
            loader.get_f64_values("v").expect("values"),
            vec![Some(1.5), None, Some(3.0)]
        );
    }

    #[test]
    fn rejects_unsupported_shapes() {
        assert!(matches!(
            DataLoader::from_json(&json!(42)),
            Err(LoaderError::UnsupportedShape)
        ));
        assert!(matches!(
            DataLoader::from_json(&json!({"x": 1})),
            Err(LoaderError::InvalidColumn(name)) if name == "x"
        ));
        assert!(matches!(
            DataLoader::from_json(&json!([{"x": 1}, 2])),
            Err(LoaderError::InvalidRow(1))
        ));
    }

    #[test]
    fn unequal_column_lengths_fail() {
        assert!(matches!(
            DataLoader::from_json(&json!({"x": [1, 2], "y": [1]})),
            Err(LoaderError::PolarsError(_))
        ));
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let loader = DataLoader::from_json(&json!({"x": [1]})).expect("table");
        assert!(matches!(
            loader.get_f64_values("y"),
            Err(LoaderError::MissingColumn(name)) if name == "y"
        ));
    }
}
