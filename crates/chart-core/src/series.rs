// File: crates/chart-core/src/series.rs
// Summary: Line series model and stroke styling shared with annotations.

use skia_safe as skia;

/// Stroke style for lines: color, width in pixels, optional on/off dash pattern.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: skia::Color,
    pub width: f32,
    pub dash: Option<[f32; 2]>,
}

impl Stroke {
    pub fn solid(color: skia::Color, width: f32) -> Self {
        Self { color, width, dash: None }
    }

    pub fn dashed(color: skia::Color, width: f32) -> Self {
        // on/off lengths scale with width so thick dashes stay readable
        let w = width.max(1.0);
        Self { color, width, dash: Some([6.0 * w, 3.5 * w]) }
    }

    pub(crate) fn paint(&self) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(self.width);
        paint.set_color(self.color);
        if let Some(intervals) = self.dash {
            paint.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
        }
        paint
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub data_xy: Vec<(f64, f64)>,
    pub label: Option<String>,
    pub stroke: Stroke,
}

impl Series {
    pub fn line(data: Vec<(f64, f64)>, stroke: Stroke) -> Self {
        Self { data_xy: data, label: None, stroke }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn len(&self) -> usize { self.data_xy.len() }
    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashed_stroke_scales_pattern_with_width() {
        let s = Stroke::dashed(skia::Color::RED, 2.0);
        assert_eq!(s.dash, Some([12.0, 7.0]));
        assert_eq!(Stroke::solid(skia::Color::RED, 2.0).dash, None);
    }

    #[test]
    fn label_is_optional() {
        let s = Series::line(vec![(0.0, 0.0), (1.0, 1.0)], Stroke::solid(skia::Color::BLUE, 1.0));
        assert!(s.label.is_none());
        assert_eq!(s.with_label("curve").label.as_deref(), Some("curve"));
    }
}
