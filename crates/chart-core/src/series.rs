// File: crates/chart-core/src/series.rs
// Summary: Series and X-axis models for bar/line charts.
// Notes:
// - Data points are tagged optionals: an absent point is excluded from
//   domain aggregation but plots at the baseline (0).

use std::str::FromStr;

use crate::error::ChartError;

/// One plotted line or bar set. `data[i]` pairs positionally with the
/// x-axis label at the same index.
#[derive(Clone, Debug)]
pub struct Series {
    pub data: Vec<Option<f64>>,
    pub color: String,
    pub label: String,
    pub stroke_width: u32,
    pub label_x_offset: f64,
    pub label_y_offset: f64,
}

impl Series {
    pub fn new(label: impl Into<String>, color: impl Into<String>, data: Vec<Option<f64>>) -> Self {
        Self {
            data,
            color: color.into(),
            label: label.into(),
            stroke_width: 1,
            label_x_offset: 0.0,
            label_y_offset: 0.0,
        }
    }

    /// Convenience constructor for fully-present data.
    pub fn from_values(label: impl Into<String>, color: impl Into<String>, values: &[f64]) -> Self {
        Self::new(label, color, values.iter().copied().map(Some).collect())
    }

    /// Line stroke width; valid values are 1..=4 (checked at config validation).
    pub fn with_stroke_width(mut self, width: u32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_label_offsets(mut self, dx: f64, dy: f64) -> Self {
        self.label_x_offset = dx;
        self.label_y_offset = dy;
        self
    }

    /// Value plotted at `index`: the data point, or the baseline (0) when absent.
    pub fn plotted_value(&self, index: usize) -> f64 {
        self.data.get(index).copied().flatten().unwrap_or(0.0)
    }
}

/// Horizontal axis interpretation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    /// Discrete band per label.
    Category,
    /// Labels are 4-digit years, scaled continuously at year resolution.
    Year,
    /// Labels are ISO-8601 UTC timestamps, scaled continuously.
    Time,
}

impl FromStr for AxisKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category" => Ok(Self::Category),
            "year" => Ok(Self::Year),
            "time" => Ok(Self::Time),
            other => Err(ChartError::config(format!("unknown x-axis kind '{other}'"))),
        }
    }
}

/// Horizontal axis definition: kind plus one label per data index.
#[derive(Clone, Debug)]
pub struct XAxis {
    pub kind: AxisKind,
    pub data: Vec<String>,
}

impl XAxis {
    pub fn new(kind: AxisKind, data: Vec<String>) -> Self {
        Self { kind, data }
    }

    pub fn category(labels: &[&str]) -> Self {
        Self::new(AxisKind::Category, labels.iter().map(|s| s.to_string()).collect())
    }

    pub fn years(labels: &[&str]) -> Self {
        Self::new(AxisKind::Year, labels.iter().map(|s| s.to_string()).collect())
    }

    pub fn timestamps(labels: &[&str]) -> Self {
        Self::new(AxisKind::Time, labels.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_kind_parses_known_names() {
        assert_eq!("category".parse::<AxisKind>().unwrap(), AxisKind::Category);
        assert_eq!("year".parse::<AxisKind>().unwrap(), AxisKind::Year);
        assert_eq!("time".parse::<AxisKind>().unwrap(), AxisKind::Time);
        assert!("polar".parse::<AxisKind>().is_err());
    }

    #[test]
    fn absent_points_plot_at_baseline() {
        let s = Series::new("a", "#000", vec![Some(2.0), None]);
        assert_eq!(s.plotted_value(0), 2.0);
        assert_eq!(s.plotted_value(1), 0.0);
        assert_eq!(s.plotted_value(9), 0.0);
    }
}
