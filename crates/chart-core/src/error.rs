// File: crates/chart-core/src/error.rs
// Summary: Library error type for configuration and scale construction failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The supplied chart or graph configuration is invalid.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Domain aggregation produced no usable values (all points absent),
    /// so a scale cannot be constructed from it.
    #[error("degenerate domain: no present data values to scale")]
    DegenerateDomain,
}

impl ChartError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}
