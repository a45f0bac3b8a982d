// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod annotation;
pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use annotation::Annotation;
pub use axis::Axis;
pub use chart::{Chart, LegendEntry, LegendPosition, RenderOptions, Swatch};
pub use error::ChartError;
pub use series::{Series, Stroke};
pub use text::TextShaper;
pub use theme::Theme;

/// Re-exported so callers can pick colors without depending on skia-safe directly.
pub use skia_safe::Color;
