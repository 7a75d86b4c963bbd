/// Chart type selected by the caller's tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    Scatter,
    Area,
}

impl ChartKind {
    /// Map a chart type tag to a kind. Unrecognized tags draw a line chart.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "line" => ChartKind::Line,
            "bar" => ChartKind::Bar,
            "scatter" => ChartKind::Scatter,
            "area" => ChartKind::Area,
            _ => ChartKind::Line,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Scatter => "scatter",
            ChartKind::Area => "area",
        }
    }

    /// Bar and area charts are drawn from a zero baseline.
    pub fn needs_zero_baseline(&self) -> bool {
        matches!(self, ChartKind::Bar | ChartKind::Area)
    }
}
