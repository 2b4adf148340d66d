// File: crates/trace-render-skia/src/theme.rs
// Summary: Light/Dark palettes for the line, grid and crosshair overlay.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub line_stroke: skia::Color,
    pub crosshair: skia::Color,
    pub marker_fill: skia::Color,
    pub marker_stroke: skia::Color,
    pub badge_fill: skia::Color,
    pub badge_text: skia::Color,
}

impl Theme {
    /// White page, steel-blue trace, gray badges.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(51, 128, 128, 128), // gray @ 0.2
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            line_stroke: skia::Color::from_argb(255, 70, 130, 180), // steelblue
            crosshair: skia::Color::from_argb(255, 0, 0, 0),
            marker_fill: skia::Color::from_argb(179, 0, 0, 0), // black @ 0.7
            marker_stroke: skia::Color::from_argb(179, 255, 255, 255),
            badge_fill: skia::Color::from_argb(255, 128, 128, 128),
            badge_text: skia::Color::from_argb(255, 255, 255, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            crosshair: skia::Color::from_argb(255, 255, 230, 70),
            marker_fill: skia::Color::from_argb(200, 255, 230, 70),
            marker_stroke: skia::Color::from_argb(255, 18, 18, 20),
            badge_fill: skia::Color::from_argb(255, 60, 60, 70),
            badge_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
