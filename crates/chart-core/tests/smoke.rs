// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use chart_core::{Annotation, Axis, Chart, Color, RenderOptions, Series, Stroke};

fn annotated_chart() -> Chart {
    let mut chart = Chart::new().with_title("Smoke");
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(
        Series::line(
            vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)],
            Stroke::solid(Color::BLUE, 2.5),
        )
        .with_label("data"),
    );
    chart.add_annotation(Annotation::hline(3.0, Stroke::dashed(Color::RED, 1.5)).with_label("ceiling"));
    chart.add_annotation(Annotation::vline(1.0, Stroke::dashed(Color::GREEN, 1.5)));
    chart.add_annotation(Annotation::marker(1.0, 2.0, 6.0, Color::RED).with_label("point"));
    chart
}

#[test]
fn render_smoke_png() {
    let chart = annotated_chart();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance

    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("nested/smoke.png");
    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_with_labels_and_legend() {
    let chart = annotated_chart();
    let bytes = chart.render_to_png_bytes(&RenderOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn legend_lists_series_then_annotations() {
    let labels: Vec<String> = annotated_chart().legend_entries().into_iter().map(|e| e.label).collect();
    assert_eq!(labels, ["data", "ceiling", "point"]);
}

#[test]
fn invalid_axis_range_is_rejected() {
    let mut chart = annotated_chart();
    chart.y_axis = Axis::new("Y", 0.0, 0.0);
    let err = chart.render_to_png_bytes(&RenderOptions::default()).unwrap_err();
    assert!(err.to_string().contains("invalid range"), "{err}");
}

#[test]
fn tiny_surface_is_rejected() {
    let mut opts = RenderOptions::default();
    opts.width = 64;
    opts.height = 64;
    assert!(annotated_chart().render_to_png_bytes(&opts).is_err());
}
