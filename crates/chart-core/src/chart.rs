// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless PNG/RGBA rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::annotation::Annotation;
use crate::error::ChartError;
use crate::geometry::RectI32;
use crate::grid::{format_tick, nice_step, nice_ticks};
use crate::scale::LinearScale;
use crate::series::{Series, Stroke};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::Axis;

const TITLE_SIZE: f32 = 20.0;
const AXIS_LABEL_SIZE: f32 = 15.0;
const TICK_LABEL_SIZE: f32 = 12.0;
const LEGEND_SIZE: f32 = 13.0;
const X_TICK_TARGET: usize = 10;
const Y_TICK_TARGET: usize = 6;
const TICK_LEN: f32 = 5.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// When false no text (title, ticks, axis labels, legend) is drawn; output is font-independent.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendPosition {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

/// Legend key drawn next to an entry's label.
#[derive(Clone, Debug, PartialEq)]
pub enum Swatch {
    Line(Stroke),
    Marker { color: skia::Color, radius: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub swatch: Swatch,
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<Series>,
    pub annotations: Vec<Annotation>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub show_grid: bool,
    pub show_legend: bool,
    pub legend_position: LegendPosition,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            annotations: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            show_grid: true,
            show_legend: true,
            legend_position: LegendPosition::UpperRight,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn add_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// Labeled items in draw order: series first, then annotations.
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        let from_series = self.series.iter().filter_map(|s| {
            s.label.as_ref().map(|label| LegendEntry { label: label.clone(), swatch: Swatch::Line(s.stroke) })
        });
        let from_annotations = self.annotations.iter().filter_map(|a| {
            let label = a.label()?.to_string();
            let swatch = match a {
                Annotation::HLine { stroke, .. } | Annotation::VLine { stroke, .. } => Swatch::Line(*stroke),
                Annotation::Marker { color, radius, .. } => Swatch::Marker { color: *color, radius: *radius },
            };
            Some(LegendEntry { label, swatch })
        });
        from_series.chain(from_annotations).collect()
    }

    /// Check axis ranges and surface size before any drawing happens.
    pub fn validate(&self, opts: &RenderOptions) -> Result<(), ChartError> {
        self.x_axis.validate()?;
        self.y_axis.validate()?;
        if RectI32::inset(opts.width, opts.height, &opts.insets).is_empty() {
            return Err(ChartError::PlotAreaTooSmall { width: opts.width, height: opts.height });
        }
        Ok(())
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render the chart and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart and return `(pixels, width, height, stride)` as unpremultiplied RGBA8.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::ReadPixels.into());
        }
        Ok((pixels, opts.width as u32, opts.height as u32, stride))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        self.validate(opts)?;
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;
        let shaper = opts.draw_labels.then(TextShaper::new);
        self.draw(surface.canvas(), opts, shaper.as_ref());
        Ok(surface)
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, text: Option<&TextShaper>) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = RectI32::inset(opts.width, opts.height, &opts.insets);
        let sx = LinearScale::new(plot.left as f32, plot.right as f32, self.x_axis.min, self.x_axis.max);
        let sy = LinearScale::new(plot.bottom as f32, plot.top as f32, self.y_axis.min, self.y_axis.max);
        let x_ticks = Ticks::for_axis(&self.x_axis, X_TICK_TARGET);
        let y_ticks = Ticks::for_axis(&self.y_axis, Y_TICK_TARGET);

        if self.show_grid {
            draw_grid(canvas, &plot, &sx, &sy, &x_ticks, &y_ticks, theme);
        }

        // Data layers stay inside the plot rect
        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        for s in &self.series {
            draw_line_series(canvas, &sx, &sy, s);
        }
        for a in &self.annotations {
            draw_annotation(canvas, &plot, &sx, &sy, a);
        }
        canvas.restore();

        draw_axes(canvas, &plot, &sx, &sy, &x_ticks, &y_ticks, theme);

        if let Some(text) = text {
            draw_tick_labels(canvas, text, &plot, &sx, &sy, &x_ticks, &y_ticks, theme);
            draw_titles(canvas, text, &plot, self, theme);
            if self.show_legend {
                draw_legend(canvas, text, &plot, &self.legend_entries(), self.legend_position, theme);
            }
        }
    }
}

struct Ticks {
    values: Vec<f64>,
    step: f64,
}

impl Ticks {
    fn for_axis(axis: &Axis, target: usize) -> Self {
        Self { values: nice_ticks(axis.min, axis.max, target), step: nice_step(axis.span(), target) }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &Ticks,
    y_ticks: &Ticks,
    theme: &Theme,
) {
    let paint = Stroke { color: theme.grid, width: 0.8, dash: Some([4.0, 3.0]) }.paint();
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

    // verticals
    for &x in &x_ticks.values {
        let px = sx.to_px(x);
        canvas.draw_line((px, t), (px, b), &paint);
    }
    // horizontals
    for &y in &y_ticks.values {
        let py = sy.to_px(y);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    plot: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &Ticks,
    y_ticks: &Ticks,
    theme: &Theme,
) {
    let axis_paint = Stroke::solid(theme.axis_line, 1.2).paint();
    canvas.draw_rect(plot.to_skia(), &axis_paint);

    let (l, b) = (plot.left as f32, plot.bottom as f32);
    for &x in &x_ticks.values {
        let px = sx.to_px(x);
        canvas.draw_line((px, b), (px, b + TICK_LEN), &axis_paint);
    }
    for &y in &y_ticks.values {
        let py = sy.to_px(y);
        canvas.draw_line((l - TICK_LEN, py), (l, py), &axis_paint);
    }
}

fn draw_line_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((sx.to_px(x0), sy.to_px(y0)));

    for &(x, y) in data.iter().skip(1) {
        path.line_to((sx.to_px(x), sy.to_px(y)));
    }

    canvas.draw_path(&path, &series.stroke.paint());
}

fn draw_annotation(canvas: &skia::Canvas, plot: &RectI32, sx: &LinearScale, sy: &LinearScale, annotation: &Annotation) {
    match annotation {
        Annotation::HLine { y, stroke, .. } => {
            let py = sy.to_px(*y);
            canvas.draw_line((plot.left as f32, py), (plot.right as f32, py), &stroke.paint());
        }
        Annotation::VLine { x, stroke, .. } => {
            let px = sx.to_px(*x);
            canvas.draw_line((px, plot.top as f32), (px, plot.bottom as f32), &stroke.paint());
        }
        Annotation::Marker { x, y, radius, color, .. } => {
            canvas.draw_circle((sx.to_px(*x), sy.to_px(*y)), *radius, &fill_paint(*color));
        }
    }
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    text: &TextShaper,
    plot: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &Ticks,
    y_ticks: &Ticks,
    theme: &Theme,
) {
    let below = plot.bottom as f32 + TICK_LEN + TICK_LABEL_SIZE + 4.0;
    for &x in &x_ticks.values {
        let label = format_tick(x, x_ticks.step);
        text.draw_centered(canvas, &label, sx.to_px(x), below, TICK_LABEL_SIZE, theme.tick);
    }
    let right = plot.left as f32 - TICK_LEN - 4.0;
    for &y in &y_ticks.values {
        let label = format_tick(y, y_ticks.step);
        text.draw_right(canvas, &label, right, sy.to_px(y) + TICK_LABEL_SIZE * 0.35, TICK_LABEL_SIZE, theme.tick);
    }
}

fn draw_titles(canvas: &skia::Canvas, text: &TextShaper, plot: &RectI32, chart: &Chart, theme: &Theme) {
    if let Some(title) = &chart.title {
        text.draw_centered(canvas, title, plot.center_x(), plot.top as f32 - 20.0, TITLE_SIZE, theme.title);
    }
    text.draw_centered(
        canvas,
        &chart.x_axis.label,
        plot.center_x(),
        plot.bottom as f32 + 54.0,
        AXIS_LABEL_SIZE,
        theme.axis_label,
    );
    text.draw_vertical(
        canvas,
        &chart.y_axis.label,
        plot.left as f32 - 64.0,
        plot.center_y(),
        AXIS_LABEL_SIZE,
        theme.axis_label,
    );
}

fn draw_legend(
    canvas: &skia::Canvas,
    text: &TextShaper,
    plot: &RectI32,
    entries: &[LegendEntry],
    position: LegendPosition,
    theme: &Theme,
) {
    if entries.is_empty() {
        return;
    }
    const PAD: f32 = 10.0;
    const ROW: f32 = 22.0;
    const SWATCH: f32 = 30.0;
    const GAP: f32 = 8.0;
    const MARGIN: f32 = 12.0;

    let text_w = entries
        .iter()
        .map(|e| text.measure_width(&e.label, LEGEND_SIZE))
        .fold(0.0f32, f32::max);
    let w = PAD * 2.0 + SWATCH + GAP + text_w;
    let h = PAD * 2.0 + ROW * entries.len() as f32;

    let left = match position {
        LegendPosition::UpperLeft | LegendPosition::LowerLeft => plot.left as f32 + MARGIN,
        LegendPosition::UpperRight | LegendPosition::LowerRight => plot.right as f32 - MARGIN - w,
    };
    let top = match position {
        LegendPosition::UpperLeft | LegendPosition::UpperRight => plot.top as f32 + MARGIN,
        LegendPosition::LowerLeft | LegendPosition::LowerRight => plot.bottom as f32 - MARGIN - h,
    };

    let frame = skia::Rect::from_xywh(left, top, w, h);
    canvas.draw_round_rect(frame, 4.0, 4.0, &fill_paint(theme.legend_background));
    canvas.draw_round_rect(frame, 4.0, 4.0, &Stroke::solid(theme.legend_border, 1.0).paint());

    for (i, entry) in entries.iter().enumerate() {
        let cy = top + PAD + ROW * (i as f32 + 0.5);
        let x0 = left + PAD;
        match &entry.swatch {
            Swatch::Line(stroke) => {
                canvas.draw_line((x0, cy), (x0 + SWATCH, cy), &stroke.paint());
            }
            Swatch::Marker { color, radius } => {
                canvas.draw_circle((x0 + SWATCH * 0.5, cy), *radius, &fill_paint(*color));
            }
        }
        text.draw_left(canvas, &entry.label, x0 + SWATCH + GAP, cy + LEGEND_SIZE * 0.35, LEGEND_SIZE, theme.axis_label);
    }
}
