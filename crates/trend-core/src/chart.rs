// File: crates/trend-core/src/chart.rs
// Summary: Headless bar+line price trend rendering using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::debug;

use crate::grid::{linspace, slot_center};
use crate::layout::{Insets, PlotRect, HEIGHT, WIDTH};
use crate::normalize::NormalizedChart;
use crate::series::{AlignedSeries, SeriesKind};
use crate::theme::Theme;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_labels: bool,
    pub title: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
            title: None,
        }
    }
}

/// Renders a normalized chart: supplier series as grouped bars, market series as lines.
pub struct PriceTrendChart<'a> {
    data: &'a NormalizedChart,
}

impl<'a> PriceTrendChart<'a> {
    pub fn new(data: &'a NormalizedChart) -> Self {
        Self { data }
    }

    /// Render to an in-memory PNG.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        debug!(
            width = opts.width,
            height = opts.height,
            categories = self.data.categories.len(),
            bytes = data.as_bytes().len(),
            "rendered price trend chart"
        );
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("write PNG '{}'", path.display()))?;
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let frame = Frame::new(
            PlotRect::within(opts.width, opts.height, &opts.insets),
            self.data.axis_range.min,
            self.data.axis_range.max,
            self.data.categories.len(),
        );

        draw_grid(canvas, &frame, theme);

        let bar_count = self.data.supplier.len();
        for (j, s) in self.data.supplier.iter().enumerate() {
            draw_bar_series(canvas, &frame, s, j, bar_count, theme.bar_color(j));
        }
        for (j, s) in self.data.market.iter().enumerate() {
            draw_line_series(canvas, &frame, s, theme.line_color(j));
        }

        draw_axes(canvas, &frame, theme);
        if opts.draw_labels {
            draw_labels(canvas, &frame, self.data, opts);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

/// Pixel mapping for one render pass.
struct Frame {
    rect: PlotRect,
    vmin: f64,
    vmax: f64,
    slots: usize,
}

impl Frame {
    fn new(rect: PlotRect, vmin: f64, vmax: f64, slots: usize) -> Self {
        // degenerate range (one distinct value) still needs a drawable span
        let vmax = if (vmax - vmin).abs() < 1e-9 { vmin + 1.0 } else { vmax };
        Self { rect, vmin, vmax, slots }
    }

    fn slot_width(&self) -> f32 {
        self.rect.width() as f32 / self.slots.max(1) as f32
    }

    fn x(&self, index: usize) -> f32 {
        slot_center(self.rect.left as f64, self.rect.right as f64, self.slots, index) as f32
    }

    fn y(&self, v: f64) -> f32 {
        let span = self.vmax - self.vmin;
        self.rect.bottom as f32 - ((v - self.vmin) / span) as f32 * self.rect.height() as f32
    }
}

fn draw_grid(canvas: &skia::Canvas, frame: &Frame, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let r = &frame.rect;
    for i in 0..frame.slots {
        let x = frame.x(i);
        canvas.draw_line((x, r.top as f32), (x, r.bottom as f32), &paint);
    }
    for y in linspace(r.top as f64, r.bottom as f64, 6) {
        canvas.draw_line((r.left as f32, y as f32), (r.right as f32, y as f32), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, frame: &Frame, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    let r = &frame.rect;
    canvas.draw_line((r.left as f32, r.bottom as f32), (r.right as f32, r.bottom as f32), &axis_paint);
    canvas.draw_line((r.left as f32, r.top as f32), (r.left as f32, r.bottom as f32), &axis_paint);
}

fn draw_bar_series(
    canvas: &skia::Canvas,
    frame: &Frame,
    series: &AlignedSeries,
    index: usize,
    count: usize,
    color: skia::Color,
) {
    debug_assert_eq!(series.kind, SeriesKind::Bar);
    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);
    body.set_color(color);

    // bars of one category share 70% of the slot
    let group = frame.slot_width() * 0.7;
    let bar_w = (group / count.max(1) as f32).max(1.0);
    let base = frame.y(0.0f64.max(frame.vmin).min(frame.vmax));

    for (i, v) in series.values.iter().enumerate() {
        let Some(v) = v else { continue };
        let left = frame.x(i) - group * 0.5 + bar_w * index as f32;
        let top = frame.y(*v).min(base);
        let bottom = frame.y(*v).max(base);
        let rect = skia::Rect::from_ltrb(left, top, left + bar_w, bottom.max(top + 1.0));
        canvas.draw_rect(rect, &body);
    }
}

fn draw_line_series(canvas: &skia::Canvas, frame: &Frame, series: &AlignedSeries, color: skia::Color) {
    debug_assert_eq!(series.kind, SeriesKind::Line);
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(color);

    let mut dot = skia::Paint::default();
    dot.set_anti_alias(true);
    dot.set_style(skia::paint::Style::Fill);
    dot.set_color(color);

    // absent values break the line instead of dropping to zero
    let mut path = skia::Path::new();
    let mut pen_down = false;
    for (i, v) in series.values.iter().enumerate() {
        match v {
            Some(v) => {
                let p = (frame.x(i), frame.y(*v));
                if pen_down { path.line_to(p); } else { path.move_to(p); }
                pen_down = true;
                canvas.draw_circle(p, 3.0, &dot);
            }
            None => pen_down = false,
        }
    }
    canvas.draw_path(&path, &stroke);
}

fn draw_labels(canvas: &skia::Canvas, frame: &Frame, data: &NormalizedChart, opts: &RenderOptions) {
    let theme = &opts.theme;
    let r = &frame.rect;

    let mut text = skia::Paint::default();
    text.set_anti_alias(true);
    text.set_color(theme.axis_label);
    let mut tick_paint = skia::Paint::default();
    tick_paint.set_anti_alias(true);
    tick_paint.set_color(theme.tick);
    let mut font = skia::Font::default();
    font.set_size(12.0);

    // value ticks
    for v in data.axis_range.ticks(6) {
        let label = format_tick(v);
        let (w, _) = font.measure_str(&label, None);
        canvas.draw_str(&label, (r.left as f32 - w - 8.0, frame.y(v) + 4.0), &font, &tick_paint);
    }

    // category labels, thinned so neighbours do not overlap
    let max_labels = (r.width() / 64).max(1) as usize;
    let stride = data.categories.len().div_ceil(max_labels).max(1);
    for (i, c) in data.categories.iter().enumerate().step_by(stride) {
        let (w, _) = font.measure_str(c, None);
        canvas.draw_str(c, (frame.x(i) - w * 0.5, r.bottom as f32 + 18.0), &font, &tick_paint);
    }

    // legend
    let mut x = r.left as f32;
    let y = r.bottom as f32 + 48.0;
    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);
    let (mut bars, mut lines) = (0usize, 0usize);
    for entry in data.legend() {
        let color = match entry.kind {
            SeriesKind::Bar => { bars += 1; theme.bar_color(bars - 1) }
            SeriesKind::Line => { lines += 1; theme.line_color(lines - 1) }
        };
        swatch.set_color(color);
        match entry.kind {
            SeriesKind::Bar => canvas.draw_rect(skia::Rect::from_xywh(x, y - 10.0, 12.0, 12.0), &swatch),
            SeriesKind::Line => canvas.draw_rect(skia::Rect::from_xywh(x, y - 5.0, 16.0, 2.0), &swatch),
        };
        let (w, _) = font.measure_str(&entry.name, None);
        canvas.draw_str(&entry.name, (x + 20.0, y), &font, &text);
        x += 20.0 + w + 16.0;
    }

    if let Some(title) = &opts.title {
        let mut title_font = skia::Font::default();
        title_font.set_size(16.0);
        canvas.draw_str(title, (r.left as f32, r.top as f32 - 14.0), &title_font, &text);
    }
}

fn format_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 { format!("{v:.0}") } else { format!("{v:.2}") }
}
