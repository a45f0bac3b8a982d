// File: crates/monod-cli/src/plot.rs
// Summary: Builds the Monod chart (curve, μ_max asymptote, K_s threshold, half-rate marker) from a sampled series.

use chart_core::{Annotation, Axis, Chart, Color, LegendPosition, Series, Stroke};
use monod_core::format::format_value;
use monod_core::{KineticParameters, SampleSeries};

pub const TITLE: &str = "Monod Growth Kinetics Analysis";
pub const X_LABEL: &str = "Substrate Concentration (S) [g/L]";
pub const Y_LABEL: &str = "Specific Growth Rate (μ) [h⁻¹]";
/// The y-axis stops 10% above μ_max so the asymptote stays visible.
pub const Y_HEADROOM: f64 = 1.1;

const MARKER_RADIUS: f32 = 6.0;

/// Self-contained chart for one parameter set; nothing is drawn until a sink exports it.
pub fn build_chart(params: &KineticParameters, series: &SampleSeries) -> Chart {
    let mu_max = params.mu_max();
    let ks = params.ks();
    let mu_at_ks = params.half_saturation_rate();
    let (mu_txt, ks_txt) = (format_value(mu_max), format_value(ks));

    let blue = Color::from_rgb(0, 0, 255);
    let red = Color::from_rgb(255, 0, 0);
    let green = Color::from_rgb(0, 128, 0);

    let mut chart = Chart::new().with_title(TITLE);
    chart.x_axis = Axis::new(X_LABEL, 0.0, series.max_substrate());
    chart.y_axis = Axis::new(Y_LABEL, 0.0, mu_max * Y_HEADROOM);
    // The curve rises to the upper right, leaving the lower right corner free.
    chart.legend_position = LegendPosition::LowerRight;

    chart.add_series(
        Series::line(series.points(), Stroke::solid(blue, 2.5))
            .with_label(format!("Monod Curve (μ_max={mu_txt}, K_s={ks_txt})")),
    );
    chart.add_annotation(
        Annotation::hline(mu_max, Stroke::dashed(red, 1.5)).with_label(format!("μ_max = {mu_txt} h⁻¹")),
    );
    chart.add_annotation(
        Annotation::vline(ks, Stroke::dashed(green, 1.5)).with_label(format!("K_s = {ks_txt} g/L")),
    );
    chart.add_annotation(
        Annotation::marker(ks, mu_at_ks, MARKER_RADIUS, red).with_label(format!("μ at K_s ({mu_at_ks:.2} h⁻¹)")),
    );

    tracing::debug!(
        x_max = chart.x_axis.max,
        y_max = chart.y_axis.max,
        points = series.len(),
        "built Monod chart"
    );
    chart
}
