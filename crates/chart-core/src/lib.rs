// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and layout.

pub mod chart;
pub mod config;
pub mod decor;
pub mod error;
pub mod force;
pub mod scale;
pub mod scene;
pub mod series;
pub mod ticks;
pub mod types;

pub use chart::{Chart, ChartKind};
pub use config::ChartConfig;
pub use error::ChartError;
pub use force::{ForceSimulation, GraphConfig, GraphLink, GraphNode, GraphView, NodeState};
pub use scale::{min_max_values, BandScale, DomainBounds, LinearScale, TimeScale};
pub use scene::{Scene, Shape, Surface, TextAnchor};
pub use series::{AxisKind, Series, XAxis};
pub use types::{canvas_preset, Insets, CANVAS_PRESETS};
