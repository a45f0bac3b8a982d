// File: crates/monod-cli/src/sink.rs
// Summary: Chart export targets: PNG file on disk, or nothing at all.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_core::{Chart, RenderOptions};

/// Consumes the finished chart. Returns where it went, if anywhere.
pub trait ChartSink {
    fn export(&mut self, chart: &Chart) -> Result<Option<PathBuf>>;
}

/// Renders with Skia's CPU raster backend and writes a PNG, creating parent directories.
#[derive(Clone, Debug)]
pub struct PngFileSink {
    path: PathBuf,
    opts: RenderOptions,
}

impl PngFileSink {
    pub fn new(path: impl Into<PathBuf>, opts: RenderOptions) -> Self {
        Self { path: path.into(), opts }
    }
}

impl ChartSink for PngFileSink {
    fn export(&mut self, chart: &Chart) -> Result<Option<PathBuf>> {
        chart
            .render_to_png(&self.opts, &self.path)
            .with_context(|| format!("failed to write chart to {}", self.path.display()))?;
        tracing::info!(path = %self.path.display(), width = self.opts.width, height = self.opts.height, "chart written");
        Ok(Some(self.path.clone()))
    }
}

/// Used with `--no-chart`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardSink;

impl ChartSink for DiscardSink {
    fn export(&mut self, _chart: &Chart) -> Result<Option<PathBuf>> {
        tracing::debug!("chart export disabled");
        Ok(None)
    }
}
