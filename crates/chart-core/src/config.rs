// File: crates/chart-core/src/config.rs
// Summary: Declarative per-chart configuration with defaults and validation.

use crate::error::ChartError;
use crate::series::{Series, XAxis};
use crate::types::{Insets, ACCENT_COLOR, BACKGROUND_COLOR};

/// Full configuration surface for one chart instance.
///
/// Defaults: `canvas_background_color = "#EBE9E0"`,
/// `primary_accent_color = "#E3120B"`.
#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub margin: Insets,
    pub title: String,
    pub subtitle: String,
    pub footer_text: String,
    pub series: Vec<Series>,
    pub x_axis: XAxis,
    pub canvas_background_color: String,
    pub primary_accent_color: String,
}

impl ChartConfig {
    pub fn new(canvas_width: u32, canvas_height: u32, margin: Insets, series: Vec<Series>, x_axis: XAxis) -> Self {
        Self {
            canvas_width,
            canvas_height,
            margin,
            title: String::new(),
            subtitle: String::new(),
            footer_text: String::new(),
            series,
            x_axis,
            canvas_background_color: BACKGROUND_COLOR.to_string(),
            primary_accent_color: ACCENT_COLOR.to_string(),
        }
    }

    pub fn with_titles(
        mut self,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        footer_text: impl Into<String>,
    ) -> Self {
        self.title = title.into();
        self.subtitle = subtitle.into();
        self.footer_text = footer_text.into();
        self
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.canvas_background_color = color.into();
        self
    }

    pub fn with_accent(mut self, color: impl Into<String>) -> Self {
        self.primary_accent_color = color.into();
        self
    }

    /// Plotting-area width (canvas minus horizontal insets).
    pub fn chart_width(&self) -> f64 {
        (self.canvas_width - self.margin.hsum()) as f64
    }

    /// Plotting-area height (canvas minus vertical insets).
    pub fn chart_height(&self) -> f64 {
        (self.canvas_height - self.margin.vsum()) as f64
    }

    /// Check every structural invariant the renderers rely on.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ChartError::config("canvas dimensions must be positive"));
        }
        if self.margin.hsum() >= self.canvas_width {
            return Err(ChartError::config(format!(
                "horizontal margins ({}) consume the canvas width ({})",
                self.margin.hsum(),
                self.canvas_width
            )));
        }
        if self.margin.vsum() >= self.canvas_height {
            return Err(ChartError::config(format!(
                "vertical margins ({}) consume the canvas height ({})",
                self.margin.vsum(),
                self.canvas_height
            )));
        }
        if self.series.is_empty() {
            return Err(ChartError::config("at least one series is required"));
        }
        for s in &self.series {
            if s.data.len() != self.x_axis.data.len() {
                return Err(ChartError::config(format!(
                    "series '{}' has {} points but the x-axis has {} labels",
                    s.label,
                    s.data.len(),
                    self.x_axis.data.len()
                )));
            }
            if !(1..=4).contains(&s.stroke_width) {
                return Err(ChartError::config(format!(
                    "series '{}' stroke width {} is outside 1..=4",
                    s.label, s.stroke_width
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{AxisKind, XAxis};

    fn base() -> ChartConfig {
        ChartConfig::new(
            595,
            290,
            Insets::new(40, 60, 80, 40),
            vec![Series::from_values("gdp", "#E3120B", &[1.0, 2.0, 3.0])],
            XAxis::new(AxisKind::Category, vec!["a".into(), "b".into(), "c".into()]),
        )
    }

    #[test]
    fn valid_config_passes() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let mut cfg = base();
        cfg.series[0].data.push(Some(4.0));
        assert!(matches!(cfg.validate(), Err(ChartError::Configuration(_))));
    }

    #[test]
    fn oversized_margins_are_rejected() {
        let mut cfg = base();
        cfg.margin = Insets::new(300, 300, 10, 10);
        assert!(matches!(cfg.validate(), Err(ChartError::Configuration(_))));
    }

    #[test]
    fn empty_series_list_is_rejected() {
        let mut cfg = base();
        cfg.series.clear();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn stroke_width_out_of_range_is_rejected() {
        let mut cfg = base();
        cfg.series[0].stroke_width = 5;
        assert!(cfg.validate().is_err());
    }
}
