// File: crates/chart-core/src/annotation.rs
// Summary: Reference overlays drawn on top of series: guide lines across the plot and point markers.

use skia_safe as skia;

use crate::series::Stroke;

#[derive(Clone, Debug, PartialEq)]
pub enum Annotation {
    /// Horizontal line at `y`, spanning the full x range.
    HLine { y: f64, stroke: Stroke, label: Option<String> },
    /// Vertical line at `x`, spanning the full y range.
    VLine { x: f64, stroke: Stroke, label: Option<String> },
    /// Filled circle at `(x, y)`; radius in pixels.
    Marker { x: f64, y: f64, radius: f32, color: skia::Color, label: Option<String> },
}

impl Annotation {
    pub fn hline(y: f64, stroke: Stroke) -> Self {
        Self::HLine { y, stroke, label: None }
    }

    pub fn vline(x: f64, stroke: Stroke) -> Self {
        Self::VLine { x, stroke, label: None }
    }

    pub fn marker(x: f64, y: f64, radius: f32, color: skia::Color) -> Self {
        Self::Marker { x, y, radius, color, label: None }
    }

    pub fn with_label(mut self, text: impl Into<String>) -> Self {
        let text = Some(text.into());
        match &mut self {
            Self::HLine { label, .. } | Self::VLine { label, .. } | Self::Marker { label, .. } => *label = text,
        }
        self
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Self::HLine { label, .. } | Self::VLine { label, .. } | Self::Marker { label, .. } => label.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_label_sets_label_for_every_kind() {
        let stroke = Stroke::dashed(skia::Color::RED, 1.5);
        let items = [
            Annotation::hline(1.0, stroke).with_label("h"),
            Annotation::vline(2.0, stroke).with_label("v"),
            Annotation::marker(1.0, 0.5, 5.0, skia::Color::RED).with_label("m"),
        ];
        let labels: Vec<_> = items.iter().filter_map(Annotation::label).collect();
        assert_eq!(labels, ["h", "v", "m"]);
        assert_eq!(Annotation::hline(0.0, stroke).label(), None);
    }
}
