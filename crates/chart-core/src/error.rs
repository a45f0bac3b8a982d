// File: crates/chart-core/src/error.rs
// Summary: Typed rendering errors; callers usually see them through anyhow.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("axis '{label}' has an empty or invalid range [{min}, {max}]")]
    InvalidAxisRange { label: String, min: f64, max: f64 },

    #[error("surface {width}x{height} leaves no room for the plot area")]
    PlotAreaTooSmall { width: i32, height: i32 },

    #[error("failed to create raster surface ({width}x{height})")]
    Surface { width: i32, height: i32 },

    #[error("encode PNG failed")]
    Encode,

    #[error("failed to read pixels back from the raster surface")]
    ReadPixels,
}
