// File: crates/chart-core/src/scale.rs
// Summary: Domain aggregation plus linear, band, and time scale transforms.

use chrono::NaiveDate;

use crate::error::ChartError;
use crate::series::{AxisKind, Series};

/// Band padding fraction between (and outside) category slots.
pub const BAND_PADDING: f64 = 0.3;

/// Aggregated value-domain bounds across one or more series.
///
/// When every point in every series is absent the bounds are the infinite
/// sentinel pair; callers must check [`DomainBounds::is_degenerate`] before
/// building a scale from them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DomainBounds {
    pub min: f64,
    pub max: f64,
}

impl DomainBounds {
    pub fn is_degenerate(&self) -> bool {
        !self.min.is_finite() || !self.max.is_finite()
    }
}

/// Compute `{min, max}` over all present values in `series`.
///
/// Absent points are excluded entirely (never coerced to 0). The minimum is
/// clamped down to 0 and the maximum up to 0, so an all-positive data set
/// still anchors its baseline at zero.
pub fn min_max_values(series: &[Series]) -> DomainBounds {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut any = false;
    for s in series {
        for v in s.data.iter().flatten() {
            min = min.min(*v);
            max = max.max(*v);
            any = true;
        }
    }
    if !any {
        return DomainBounds { min: f64::NEG_INFINITY, max: f64::INFINITY };
    }
    DomainBounds { min: min.min(0.0), max: max.max(0.0) }
}

/// Continuous linear scale mapping a value domain onto a pixel range.
///
/// The range may be inverted (start > end); the vertical axis uses
/// `(height, 0)` so larger values map toward the top of the canvas.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Result<Self, ChartError> {
        let (d0, mut d1) = domain;
        if !d0.is_finite() || !d1.is_finite() {
            return Err(ChartError::DegenerateDomain);
        }
        if (d1 - d0).abs() < 1e-12 {
            d1 = d0 + 1.0;
        }
        Ok(Self { d0, d1, r0: range.0, r1: range.1 })
    }

    /// Vertical scale: domain bounds onto `[height, 0]` (inverted pixel range).
    pub fn vertical(bounds: DomainBounds, height: f64) -> Result<Self, ChartError> {
        Self::new((bounds.min, bounds.max), (height, 0.0))
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        self.r0 + (v - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }

    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        self.d0 + (px - self.r0) / (self.r1 - self.r0) * (self.d1 - self.d0)
    }
}

/// Discrete band scale: one uniform slot per category with padding fraction
/// `BAND_PADDING` applied both between bands and at the edges.
#[derive(Clone, Debug)]
pub struct BandScale {
    labels: Vec<String>,
    step: f64,
    bandwidth: f64,
    start: f64,
}

impl BandScale {
    pub fn new(labels: &[String], width: f64) -> Self {
        let n = labels.len().max(1) as f64;
        let p = BAND_PADDING;
        let step = width / (n - p + 2.0 * p).max(1.0);
        let bandwidth = step * (1.0 - p);
        // centre the occupied span inside the range
        let start = (width - step * (n - p)) * 0.5;
        Self { labels: labels.to_vec(), step, bandwidth, start }
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Left edge of the band for `label`, or `None` for an unknown category.
    pub fn position(&self, label: &str) -> Option<f64> {
        let idx = self.labels.iter().position(|l| l == label)?;
        Some(self.start + self.step * idx as f64)
    }

    /// Band left edge by data index.
    pub fn position_at(&self, index: usize) -> Option<f64> {
        if index >= self.labels.len() {
            return None;
        }
        Some(self.start + self.step * index as f64)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// Continuous time scale over parsed axis labels, mapped onto `[0, width]`.
#[derive(Clone, Debug)]
pub struct TimeScale {
    /// Parsed timestamp (seconds since epoch) per axis label, in data order.
    instants: Vec<i64>,
    scale: LinearScale,
}

impl TimeScale {
    /// Parse every label according to `kind` and build the scale over the
    /// min/max of the parsed instants.
    pub fn from_labels(kind: AxisKind, labels: &[String], width: f64) -> Result<Self, ChartError> {
        let instants = labels
            .iter()
            .map(|l| parse_instant(kind, l))
            .collect::<Result<Vec<_>, _>>()?;
        let min = instants.iter().min().copied().unwrap_or(0);
        let max = instants.iter().max().copied().unwrap_or(0);
        let scale = LinearScale::new((min as f64, max as f64), (0.0, width))?;
        Ok(Self { instants, scale })
    }

    /// Pixel position of the label at `index`.
    pub fn position_at(&self, index: usize) -> Option<f64> {
        self.instants.get(index).map(|&t| self.scale.to_px(t as f64))
    }

    pub fn instants(&self) -> &[i64] {
        &self.instants
    }

    pub fn to_px(&self, instant: i64) -> f64 {
        self.scale.to_px(instant as f64)
    }
}

/// Parse one axis label into seconds since the Unix epoch.
///
/// `Year` labels are 4-digit years pinned to Jan 1; `Time` labels are
/// `YYYY-MM-DDTHH:MM:SSZ` UTC timestamps.
pub fn parse_instant(kind: AxisKind, label: &str) -> Result<i64, ChartError> {
    match kind {
        AxisKind::Year => {
            let year: i32 = label
                .trim()
                .parse()
                .map_err(|_| ChartError::config(format!("unparseable year label '{label}'")))?;
            NaiveDate::from_ymd_opt(year, 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc().timestamp())
                .ok_or_else(|| ChartError::config(format!("year out of range '{label}'")))
        }
        AxisKind::Time => {
            let dt = chrono::NaiveDateTime::parse_from_str(label, "%Y-%m-%dT%H:%M:%SZ")
                .map_err(|_| ChartError::config(format!("unparseable timestamp '{label}'")))?;
            Ok(dt.and_utc().timestamp())
        }
        AxisKind::Category => Err(ChartError::config(
            "category axis labels have no time interpretation".to_string(),
        )),
    }
}
