//! Chart Plotter Module
//! Describes what a chart shows: kind, titles, data, axis ranges and theme.

use crate::charts::ChartKind;
use crate::data::{XValues, XySeries};
use plotters::style::RGBColor;
use std::ops::Range;

/// Light theme colors
pub const BACKGROUND: RGBColor = RGBColor(255, 255, 255);
pub const ACCENT: RGBColor = RGBColor(99, 110, 250); // Series color
pub const GRID: RGBColor = RGBColor(235, 240, 248);
pub const AXIS: RGBColor = RGBColor(200, 205, 215);
pub const TEXT: RGBColor = RGBColor(42, 63, 95);

/// Bars fill this share of the gap between neighbouring x values
const BAR_FILL: f64 = 0.8;
/// Extra room added around the data on each axis
const RANGE_PAD: f64 = 0.05;

/// Everything needed to draw one chart.
#[derive(Debug, Clone)]
pub struct ChartPlot {
    pub kind: ChartKind,
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub series: XySeries,
}

impl ChartPlot {
    pub fn new(kind: ChartKind, x_col: &str, y_col: &str, series: XySeries) -> Self {
        Self {
            kind,
            title: format!("{} vs {}", y_col, x_col),
            x_title: Self::axis_title(x_col),
            y_title: Self::axis_title(y_col),
            series,
        }
    }

    /// Turn a column name into an axis title: underscores become spaces and
    /// every word starts with a capital, the rest lowercased.
    pub fn axis_title(column: &str) -> String {
        let mut title = String::with_capacity(column.len());
        let mut prev_cased = false;
        for c in column.replace('_', " ").chars() {
            if c.is_alphabetic() {
                if prev_cased {
                    title.extend(c.to_lowercase());
                } else {
                    title.extend(c.to_uppercase());
                }
                prev_cased = true;
            } else {
                title.push(c);
                prev_cased = false;
            }
        }
        title
    }

    /// Width of a single bar in x units.
    pub fn bar_width(&self) -> f64 {
        match &self.series.x {
            XValues::Categorical { .. } => BAR_FILL,
            XValues::Numeric(xs) => {
                let mut sorted = xs.clone();
                sorted.sort_by(|a, b| a.total_cmp(b));
                sorted.dedup();
                sorted
                    .windows(2)
                    .map(|w| w[1] - w[0])
                    .fold(None, |min: Option<f64>, gap| {
                        Some(min.map_or(gap, |m| m.min(gap)))
                    })
                    .map_or(BAR_FILL, |gap| gap * BAR_FILL)
            }
        }
    }

    pub fn x_range(&self) -> Range<f64> {
        match &self.series.x {
            XValues::Categorical { labels, .. } => -0.5..(labels.len() as f64 - 0.5),
            XValues::Numeric(xs) => {
                let (min, max) = Self::bounds(xs.iter().copied());
                if self.kind == ChartKind::Bar {
                    let half = self.bar_width() / 2.0;
                    return Self::padded(min - half, max + half, 0.0);
                }
                Self::padded(min, max, RANGE_PAD)
            }
        }
    }

    pub fn y_range(&self) -> Range<f64> {
        let (mut min, mut max) = Self::bounds(self.series.y.iter().copied());
        if self.kind.needs_zero_baseline() {
            min = min.min(0.0);
            max = max.max(0.0);
        }
        Self::padded(min, max, RANGE_PAD)
    }

    fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
        values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
            (min.min(v), max.max(v))
        })
    }

    fn padded(min: f64, max: f64, share: f64) -> Range<f64> {
        if !min.is_finite() || !max.is_finite() {
            return 0.0..1.0;
        }
        let span = max - min;
        if span <= f64::EPSILON {
            let pad = (min.abs() * 0.1).max(1.0);
            return (min - pad)..(max + pad);
        }
        let pad = span * share;
        (min - pad)..(max + pad)
    }
}
