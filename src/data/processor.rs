//! Data Processor Module
//! Turns two table columns into the x/y point series a chart is drawn from.

use crate::data::loader::{DataLoader, LoaderError};

/// X axis values of a series.
#[derive(Debug, Clone, PartialEq)]
pub enum XValues {
    /// Continuous axis, one value per point
    Numeric(Vec<f64>),
    /// Categorical axis: distinct labels in first-seen order, plus the
    /// category index of every point
    Categorical {
        labels: Vec<String>,
        positions: Vec<usize>,
    },
}

/// Paired x/y values with rows lacking a plottable value removed.
#[derive(Debug, Clone, PartialEq)]
pub struct XySeries {
    pub x: XValues,
    pub y: Vec<f64>,
}

impl XySeries {
    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Points in plot coordinates. Categories sit at their integer index.
    pub fn points(&self) -> Vec<(f64, f64)> {
        match &self.x {
            XValues::Numeric(xs) => xs.iter().copied().zip(self.y.iter().copied()).collect(),
            XValues::Categorical { positions, .. } => positions
                .iter()
                .map(|&p| p as f64)
                .zip(self.y.iter().copied())
                .collect(),
        }
    }

    pub fn category_labels(&self) -> Option<&[String]> {
        match &self.x {
            XValues::Categorical { labels, .. } => Some(labels),
            XValues::Numeric(_) => None,
        }
    }
}

/// Handles extraction of plottable series from loaded tables.
pub struct DataProcessor;

impl DataProcessor {
    /// Extract the `x_col`/`y_col` pair from the table.
    ///
    /// A numeric x column gives a continuous axis, anything else a
    /// categorical one. Rows with a null x or a non-numeric y are dropped.
    pub fn xy_series(
        table: &DataLoader,
        x_col: &str,
        y_col: &str,
    ) -> Result<XySeries, LoaderError> {
        for column in [x_col, y_col] {
            if !table.has_column(column) {
                return Err(LoaderError::MissingColumn(column.to_string()));
            }
        }

        let y_values = table.get_f64_values(y_col)?;

        if table.is_numeric(x_col)? {
            let x_values = table.get_f64_values(x_col)?;
            let (xs, ys): (Vec<f64>, Vec<f64>) = x_values
                .into_iter()
                .zip(y_values)
                .filter_map(|(x, y)| Some((x?, y?)))
                .unzip();

            return Ok(XySeries {
                x: XValues::Numeric(xs),
                y: ys,
            });
        }

        let mut labels: Vec<String> = Vec::new();
        let mut positions: Vec<usize> = Vec::new();
        let mut ys: Vec<f64> = Vec::new();

        for (label, y) in table.get_labels(x_col)?.into_iter().zip(y_values) {
            let (Some(label), Some(y)) = (label, y) else {
                continue;
            };
            let position = match labels.iter().position(|l| *l == label) {
                Some(pos) => pos,
                None => {
                    labels.push(label);
                    labels.len() - 1
                }
            };
            positions.push(position);
            ys.push(y);
        }

        Ok(XySeries {
            x: XValues::Categorical { labels, positions },
            y: ys,
        })
    }
}
