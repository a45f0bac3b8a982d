// File: crates/chart-core/src/scale.rs
// Summary: Linear value-to-pixel transform used for both axes.

/// Maps the data interval `[vmin, vmax]` onto the pixel interval `[px_start, px_end]`.
/// Y scales pass `px_start = bottom`, `px_end = top` so larger values sit higher.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub px_start: f32,
    pub px_end: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(px_start: f32, px_end: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { px_start, px_end, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.vmax - self.vmin;
        self.px_start + ((v - self.vmin) / span) as f32 * (self.px_end - self.px_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_endpoints_and_midpoint() {
        let x = LinearScale::new(100.0, 500.0, 0.0, 4.0);
        assert_eq!(x.to_px(0.0), 100.0);
        assert_eq!(x.to_px(4.0), 500.0);
        assert_eq!(x.to_px(2.0), 300.0);
    }

    #[test]
    fn inverted_pixel_range_for_y() {
        let y = LinearScale::new(600.0, 100.0, 0.0, 1.0);
        assert_eq!(y.to_px(0.0), 600.0);
        assert_eq!(y.to_px(1.0), 100.0);
        assert_eq!(y.to_px(0.5), 350.0);
    }
}
