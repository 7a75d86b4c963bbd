//! Static Chart Renderer
//! Rasterizes a [`ChartPlot`] with plotters and encodes it as PNG.
//!
//! Layout:
//! 1. Title: "{y_col} vs {x_col}" at the top
//! 2. Cartesian plot area with light grid and axis titles
//! 3. One series in the accent color, drawn per chart kind

use crate::charts::fonts;
use crate::charts::plotter::{ACCENT, AXIS, BACKGROUND, GRID, TEXT};
use crate::charts::{ChartKind, ChartPlot};
use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_backend::DrawingErrorKind;
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("no plottable rows in '{0}'")]
    NoData(String),
    #[error("invalid canvas {width}x{height} at scale {scale}")]
    InvalidCanvas { width: u32, height: u32, scale: f64 },
    #[error("font unavailable: {0}")]
    Font(String),
    #[error("drawing failed: {0}")]
    Drawing(String),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Output size: logical width/height and the pixel scale applied to both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub scale: f64,
}

impl Canvas {
    pub fn new(width: u32, height: u32, scale: f64) -> Self {
        Self {
            width,
            height,
            scale,
        }
    }

    /// Actual bitmap size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.px(self.width as f64), self.px(self.height as f64))
    }

    /// Scale a logical length to pixels.
    fn px(&self, logical: f64) -> u32 {
        (logical * self.scale).round().max(0.0) as u32
    }

    fn validate(&self) -> Result<(), RenderError> {
        let (w, h) = self.pixel_size();
        if w == 0 || h == 0 || !self.scale.is_finite() {
            return Err(RenderError::InvalidCanvas {
                width: self.width,
                height: self.height,
                scale: self.scale,
            });
        }
        Ok(())
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(800, 600, 2.0)
    }
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render the chart to PNG bytes.
    ///
    /// Text needs a registered font; if none can be loaded, or the font
    /// fails while drawing, the chart is rendered again without text.
    pub fn render_png(
        plot: &ChartPlot,
        canvas: &Canvas,
        font_path: Option<&Path>,
    ) -> Result<Vec<u8>, RenderError> {
        canvas.validate()?;
        if plot.series.is_empty() {
            return Err(RenderError::NoData(plot.title.clone()));
        }

        let family = fonts::ensure_font(font_path);
        let pixels = match Self::rasterize(plot, canvas, family) {
            Err(RenderError::Font(reason)) if family.is_some() => {
                warn!(%reason, "font failed while drawing, retrying without text");
                Self::rasterize(plot, canvas, None)?
            }
            other => other?,
        };

        let (w, h) = canvas.pixel_size();
        let image = RgbImage::from_raw(w, h, pixels).ok_or(RenderError::InvalidCanvas {
            width: canvas.width,
            height: canvas.height,
            scale: canvas.scale,
        })?;

        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, ImageFormat::Png)?;
        let bytes = bytes.into_inner();

        debug!(
            kind = plot.kind.as_str(),
            width = w,
            height = h,
            size = bytes.len(),
            "chart rendered"
        );
        Ok(bytes)
    }

    /// Draw into a raw RGB buffer. Text is skipped without a font family.
    fn rasterize(
        plot: &ChartPlot,
        canvas: &Canvas,
        family: Option<&str>,
    ) -> Result<Vec<u8>, RenderError> {
        let (w, h) = canvas.pixel_size();
        let mut buffer = vec![0u8; w as usize * h as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (w, h)).into_drawing_area();
            root.fill(&BACKGROUND).map_err(drawing_error)?;
            Self::draw_chart(&root, plot, canvas, family)?;
            root.present().map_err(drawing_error)?;
        }
        Ok(buffer)
    }

    fn draw_chart(
        root: &DrawingArea<BitMapBackend<'_>, Shift>,
        plot: &ChartPlot,
        canvas: &Canvas,
        family: Option<&str>,
    ) -> Result<(), RenderError> {
        let with_text = family.is_some();
        let family = family.unwrap_or(fonts::FONT_FAMILY);
        let label_area = if with_text { 60.0 } else { 12.0 };

        let mut builder = ChartBuilder::on(root);
        builder
            .margin(canvas.px(20.0))
            .x_label_area_size(canvas.px(label_area))
            .y_label_area_size(canvas.px(label_area + 10.0));
        if with_text {
            builder.caption(
                &plot.title,
                (family, canvas.px(16.0) as f64)
                    .into_font()
                    .color(&TEXT),
            );
        }

        let mut chart = builder
            .build_cartesian_2d(plot.x_range(), plot.y_range())
            .map_err(drawing_error)?;

        let categories = plot.series.category_labels();
        let category_label = |x: &f64| -> String {
            let Some(labels) = categories else {
                return String::new();
            };
            let idx = x.round();
            if (x - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        };

        let label_style = (family, canvas.px(12.0) as f64)
            .into_font()
            .color(&TEXT);
        let desc_style = (family, canvas.px(14.0) as f64)
            .into_font()
            .color(&TEXT);

        let mut mesh = chart.configure_mesh();
        mesh.axis_style(ShapeStyle::from(&AXIS).stroke_width(canvas.px(1.0)))
            .light_line_style(ShapeStyle::from(&GRID).stroke_width(canvas.px(1.0)))
            .bold_line_style(ShapeStyle::from(&GRID).stroke_width(canvas.px(1.0)));
        if with_text {
            mesh.x_desc(plot.x_title.as_str())
                .y_desc(plot.y_title.as_str())
                .axis_desc_style(desc_style)
                .x_label_style(label_style.clone())
                .y_label_style(label_style)
                .y_labels(10);
            match categories {
                Some(labels) => {
                    mesh.x_labels(labels.len() * 2 + 1)
                        .x_label_formatter(&category_label);
                }
                None => {
                    mesh.x_labels(10);
                }
            }
        } else {
            mesh.x_labels(0).y_labels(0);
        }
        mesh.draw().map_err(drawing_error)?;

        let points = plot.series.points();
        let line_style = ShapeStyle::from(&ACCENT).stroke_width(canvas.px(2.0));

        match plot.kind {
            ChartKind::Line => {
                chart
                    .draw_series(LineSeries::new(points, line_style))
                    .map_err(drawing_error)?;
            }
            ChartKind::Scatter => {
                let radius = canvas.px(4.0);
                chart
                    .draw_series(
                        points
                            .into_iter()
                            .map(|p| Circle::new(p, radius, ACCENT.filled())),
                    )
                    .map_err(drawing_error)?;
            }
            ChartKind::Area => {
                chart
                    .draw_series(
                        AreaSeries::new(points, 0.0, ACCENT.mix(0.3).filled())
                            .border_style(line_style),
                    )
                    .map_err(drawing_error)?;
            }
            ChartKind::Bar => {
                let half = plot.bar_width() / 2.0;
                chart
                    .draw_series(points.into_iter().map(|(x, y)| {
                        Rectangle::new([(x - half, 0.0), (x + half, y)], ACCENT.filled())
                    }))
                    .map_err(drawing_error)?;
            }
        }

        Ok(())
    }
}

fn drawing_error<E>(err: DrawingAreaErrorKind<E>) -> RenderError
where
    E: std::error::Error + Send + Sync,
{
    match err {
        DrawingAreaErrorKind::BackendError(DrawingErrorKind::FontError(e)) => {
            RenderError::Font(e.to_string())
        }
        other => RenderError::Drawing(other.to_string()),
    }
}
