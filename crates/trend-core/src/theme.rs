// File: crates/trend-core/src/theme.rs
// Summary: Light/Dark theming for the price trend chart, with per-series palettes.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    /// Supplier bar fills, cycled by series index.
    pub bars: [skia::Color; 4],
    /// Market line strokes, cycled by series index.
    pub lines: [skia::Color; 4],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            bars: [
                skia::Color::from_argb(255, 96, 156, 255),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 180, 120, 255),
                skia::Color::from_argb(255, 90, 200, 210),
            ],
            lines: [
                skia::Color::from_argb(255, 255, 176, 64),
                skia::Color::from_argb(255, 220, 80, 80),
                skia::Color::from_argb(255, 255, 230, 70),
                skia::Color::from_argb(255, 240, 120, 200),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            bars: [
                skia::Color::from_argb(255, 40, 120, 200),
                skia::Color::from_argb(255, 20, 160, 90),
                skia::Color::from_argb(255, 120, 70, 200),
                skia::Color::from_argb(255, 30, 150, 160),
            ],
            lines: [
                skia::Color::from_argb(255, 230, 120, 0),
                skia::Color::from_argb(255, 200, 60, 60),
                skia::Color::from_argb(255, 180, 150, 0),
                skia::Color::from_argb(255, 200, 60, 150),
            ],
        }
    }

    pub fn bar_color(&self, index: usize) -> skia::Color { self.bars[index % self.bars.len()] }

    pub fn line_color(&self, index: usize) -> skia::Color { self.lines[index % self.lines.len()] }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
