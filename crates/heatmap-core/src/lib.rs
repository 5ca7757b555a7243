// File: crates/heatmap-core/src/lib.rs
// Summary: Core library entry point; exports public API for heat-map construction and SVG rendering.

pub mod axis;
pub mod chart;
pub mod dataset;
pub mod scale;
pub mod svg;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use chart::{HeatMap, RenderOptions};
pub use dataset::{month_name, Dataset, DatasetError, MonthRecord};
pub use scale::{linspace, BandScale, LinearScale, QuantizeScale};
pub use theme::{Theme, PALETTE};
pub use types::Insets;
