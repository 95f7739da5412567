// File: crates/chart-core/src/chart.rs
// Summary: Chart assembly: scales, gridlines, axes, series marks, decorations.

use crate::config::ChartConfig;
use crate::decor;
use crate::error::ChartError;
use crate::scale::{min_max_values, BandScale, LinearScale, TimeScale};
use crate::scene::{Scene, Surface, TextAnchor};
use crate::series::{AxisKind, Series};
use crate::ticks::{format_tick_value, format_year_tick, ticks, timestamp_year};

const GRID_STROKE: &str = "red";
const AXIS_FONT_SIZE: f64 = 14.0;
const TICK_LENGTH: f64 = 6.0;
const TICK_LABEL_PAD: f64 = 9.0;
const Y_AXIS_SHIFT: f64 = 6.0;
const Y_TICK_COUNT: usize = 10;
const SERIES_LABEL_SIZE: f64 = 12.0;

/// Which chart variant a configuration is rendered as. The line chart's
/// x-axis kind (year vs timestamp) selects between its two time variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
}

/// One chart instance: a kind plus its declarative configuration.
/// `scene()` is a pure function of the configuration.
pub struct Chart {
    pub kind: ChartKind,
    pub config: ChartConfig,
}

impl Chart {
    pub fn new(kind: ChartKind, config: ChartConfig) -> Self {
        Self { kind, config }
    }

    pub fn bar(config: ChartConfig) -> Self {
        Self::new(ChartKind::Bar, config)
    }

    pub fn line(config: ChartConfig) -> Self {
        Self::new(ChartKind::Line, config)
    }

    /// Validate the configuration and build the full scene graph.
    pub fn scene(&self) -> Result<Scene, ChartError> {
        let cfg = &self.config;
        cfg.validate()?;

        let mut scene = Scene::new(cfg.canvas_width, cfg.canvas_height, cfg.canvas_background_color.clone());

        // 1px accent border along the canvas top
        scene.line(
            0.0,
            0.5,
            cfg.canvas_width as f64,
            0.5,
            &cfg.primary_accent_color,
            1.0,
        );

        let bounds = min_max_values(&cfg.series);
        let y_scale = LinearScale::vertical(bounds, cfg.chart_height())?;

        match self.kind {
            ChartKind::Bar => self.build_bar(&mut scene, &y_scale)?,
            ChartKind::Line => self.build_line(&mut scene, &y_scale)?,
        }

        self.draw_y_axis_labels(&mut scene, &y_scale);

        decor::accent_block(&mut scene, &cfg.margin, &cfg.primary_accent_color);
        decor::title(&mut scene, &cfg.margin, &cfg.title);
        decor::subtitle(&mut scene, &cfg.margin, &cfg.subtitle);
        decor::footer(&mut scene, &cfg.margin, cfg.canvas_height, &cfg.footer_text);

        Ok(scene)
    }

    fn build_bar(&self, scene: &mut Scene, y_scale: &LinearScale) -> Result<(), ChartError> {
        let cfg = &self.config;
        if cfg.x_axis.kind != AxisKind::Category {
            return Err(ChartError::config("bar charts require a category x-axis"));
        }
        let x_scale = BandScale::new(&cfg.x_axis.data, cfg.chart_width());

        self.draw_gridlines(scene, y_scale);

        let (ox, oy) = self.plot_origin();
        let ch = cfg.chart_height();
        for series in &cfg.series {
            for i in 0..cfg.x_axis.data.len() {
                let value = series.plotted_value(i);
                let x = ox + x_scale.position_at(i).unwrap_or(0.0);
                let y_px = y_scale.to_px(value);
                // later series overplot earlier ones at the same x position
                scene.rect(x, oy + y_px, x_scale.bandwidth(), ch - y_px, &series.color);
            }
        }

        self.draw_band_axis(scene, &x_scale);
        Ok(())
    }

    fn build_line(&self, scene: &mut Scene, y_scale: &LinearScale) -> Result<(), ChartError> {
        let cfg = &self.config;
        if cfg.x_axis.kind == AxisKind::Category {
            return Err(ChartError::config("line charts require a year or time x-axis"));
        }
        let x_scale = TimeScale::from_labels(cfg.x_axis.kind, &cfg.x_axis.data, cfg.chart_width())?;

        self.draw_gridlines(scene, y_scale);

        let (ox, oy) = self.plot_origin();
        for series in &cfg.series {
            let points: Vec<(f64, f64)> = (0..cfg.x_axis.data.len())
                .map(|i| {
                    let x = ox + x_scale.position_at(i).unwrap_or(0.0);
                    let y = oy + y_scale.to_px(series.plotted_value(i));
                    (x, y)
                })
                .collect();
            scene.path(&points, &series.color, series.stroke_width as f64);
            self.draw_series_label(scene, series, y_scale);
        }

        self.draw_time_axis(scene, &x_scale);
        Ok(())
    }

    /// Trailing label at the line's final point, shifted by the series'
    /// configured offsets.
    fn draw_series_label(&self, scene: &mut Scene, series: &Series, y_scale: &LinearScale) {
        if series.label.is_empty() {
            return;
        }
        let cfg = &self.config;
        let (ox, oy) = self.plot_origin();
        let last_index = cfg.x_axis.data.len().saturating_sub(1);
        let last_value = series.plotted_value(last_index);
        let x = ox + cfg.chart_width() - cfg.margin.right as f64 + series.label_x_offset;
        let y = oy + y_scale.to_px(last_value) + series.label_y_offset;
        scene.text(x, y, &series.label, SERIES_LABEL_SIZE, false, &series.color, TextAnchor::Start);
    }

    /// Horizontal gridline at every y-tick, spanning the full plotting width.
    fn draw_gridlines(&self, scene: &mut Scene, y_scale: &LinearScale) {
        let (ox, oy) = self.plot_origin();
        let cw = self.config.chart_width();
        let (d0, d1) = y_scale.domain();
        for t in ticks(d0, d1, Y_TICK_COUNT) {
            let y = oy + y_scale.to_px(t);
            scene.line(ox, y, ox + cw, y, GRID_STROKE, 1.0);
        }
    }

    fn draw_band_axis(&self, scene: &mut Scene, x_scale: &BandScale) {
        let cfg = &self.config;
        let (ox, oy) = self.plot_origin();
        let baseline = oy + cfg.chart_height();
        scene.line(ox, baseline, ox + cfg.chart_width(), baseline, "#000000", 1.0);
        for (i, label) in x_scale.labels().iter().enumerate() {
            let center = ox + x_scale.position_at(i).unwrap_or(0.0) + x_scale.bandwidth() / 2.0;
            scene.line(center, baseline, center, baseline + TICK_LENGTH, "#000000", 1.0);
            scene.text(
                center,
                baseline + TICK_LENGTH + AXIS_FONT_SIZE,
                label,
                AXIS_FONT_SIZE,
                false,
                "#000000",
                TextAnchor::Middle,
            );
        }
    }

    /// One tick per axis datum, with compact year labels on year axes.
    fn draw_time_axis(&self, scene: &mut Scene, x_scale: &TimeScale) {
        let cfg = &self.config;
        let (ox, oy) = self.plot_origin();
        let baseline = oy + cfg.chart_height();
        scene.line(ox, baseline, ox + cfg.chart_width(), baseline, "#000000", 1.0);
        for (i, &instant) in x_scale.instants().iter().enumerate() {
            let x = ox + x_scale.to_px(instant);
            let label = match cfg.x_axis.kind {
                AxisKind::Year => format_year_tick(i, timestamp_year(instant)),
                _ => format_timestamp_tick(instant, x_scale.instants()),
            };
            scene.line(x, baseline, x, baseline + TICK_LENGTH, "#000000", 1.0);
            scene.text(
                x,
                baseline + TICK_LENGTH + AXIS_FONT_SIZE,
                &label,
                AXIS_FONT_SIZE,
                false,
                "#000000",
                TextAnchor::Middle,
            );
        }
    }

    /// Value-axis labels only (tick lines stripped), right of the plot and
    /// shifted up 6px.
    fn draw_y_axis_labels(&self, scene: &mut Scene, y_scale: &LinearScale) {
        let cfg = &self.config;
        let (ox, oy) = self.plot_origin();
        let x = ox + cfg.chart_width() + cfg.margin.right as f64 - TICK_LABEL_PAD;
        let (d0, d1) = y_scale.domain();
        let tick_values = ticks(d0, d1, Y_TICK_COUNT);
        let step = if tick_values.len() > 1 { tick_values[1] - tick_values[0] } else { 1.0 };
        for t in tick_values {
            let y = oy + y_scale.to_px(t) - Y_AXIS_SHIFT + AXIS_FONT_SIZE / 2.0;
            scene.text(
                x,
                y,
                &format_tick_value(t, step),
                AXIS_FONT_SIZE,
                false,
                "#000000",
                TextAnchor::End,
            );
        }
    }

    fn plot_origin(&self) -> (f64, f64) {
        (self.config.margin.left as f64, self.config.margin.top as f64)
    }
}

/// Timestamp tick label: clock time when the whole domain fits in a single
/// day, calendar date otherwise.
fn format_timestamp_tick(instant: i64, all: &[i64]) -> String {
    let span = match (all.iter().min(), all.iter().max()) {
        (Some(min), Some(max)) => max - min,
        _ => 0,
    };
    let dt = match chrono::DateTime::from_timestamp(instant, 0) {
        Some(dt) => dt,
        None => return String::new(),
    };
    if span < 86_400 {
        dt.format("%H:%M").to_string()
    } else {
        dt.format("%Y-%m-%d").to_string()
    }
}
