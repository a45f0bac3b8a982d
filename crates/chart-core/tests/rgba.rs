// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chart_core::{Annotation, Axis, Chart, Color, RenderOptions, Series, Stroke, Theme};

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::line(vec![(0.0, 0.0), (4.0, 4.0)], Stroke::solid(Color::BLUE, 2.0)));
    chart.add_annotation(Annotation::hline(2.0, Stroke::solid(Color::RED, 3.0)));

    let mut opts = RenderOptions::default();
    opts.theme = Theme::light();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is plain background
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);

    // Default insets put the plot at y 56..568, so y = 2.0 lands on row 312.
    let at = |x: usize, y: usize| &px[y * stride + x * 4..y * stride + x * 4 + 4];
    let p = at(500, 312);
    assert!(p[0] > 200 && p[1] < 80 && p[2] < 80, "expected red guide line, got {p:?}");
}
