// File: crates/trace-render-skia/src/lib.rs
// Summary: Skia CPU renderer for trace-core frames: grid, axes, labels, line and crosshair overlay.

use anyhow::{Context, Result};
use skia_safe as skia;
use trace_core::{Anchor, Axis, Frame, Insets, OverlayState, PixelPoint, Tooltip};

pub mod text;
pub mod theme;

pub use text::TextShaper;
pub use theme::Theme;

const LABEL_SIZE: f32 = 11.0;
const BADGE_PADDING: f32 = 5.0;
const BADGE_RADIUS: f32 = 5.0;

pub struct RenderOptions {
    pub margins: Insets,
    pub theme: Theme,
    /// Tick labels and tooltip text; off for font-independent snapshots.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { margins: Insets::default(), theme: Theme::light(), draw_labels: true }
    }
}

pub struct SkiaRenderer {
    text: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { text: TextShaper::new() }
    }

    /// Render `frame` and return PNG bytes.
    pub fn render_to_png_bytes(&self, frame: &Frame, opts: &RenderOptions) -> Result<Vec<u8>> {
        let width = surface_dim(frame.size.width, opts.margins.hsum())?;
        let height = surface_dim(frame.size.height, opts.margins.vsum())?;
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {width}x{height} raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);
        canvas.save();
        canvas.translate((opts.margins.left as f32, opts.margins.top as f32));

        draw_grid(canvas, frame, &opts.theme);
        draw_axes(canvas, frame, &opts.theme);
        if opts.draw_labels {
            self.draw_tick_labels(canvas, frame, &opts.theme);
        }
        draw_line(canvas, &frame.line, &opts.theme);
        self.draw_overlay(canvas, frame, opts);
        canvas.restore();

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        tracing::debug!(width, height, bytes = data.as_bytes().len(), "rendered frame");
        Ok(data.as_bytes().to_vec())
    }

    /// Render `frame` to a PNG file, creating parent directories.
    pub fn render_to_png(
        &self,
        frame: &Frame,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(frame, opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn draw_tick_labels(&self, canvas: &skia::Canvas, frame: &Frame, theme: &Theme) {
        let h = frame.size.height as f32;
        for label in frame.x_labels.iter().chain(&frame.y_labels) {
            let (tw, th) = self.text.measure(&label.text, LABEL_SIZE);
            let (x, y) = match label.axis {
                Axis::X => (label.position - tw * 0.5, h + 6.0),
                Axis::Y => (-tw - 6.0, label.position - th * 0.5),
            };
            self.text.draw_top_left(canvas, &label.text, x, y, LABEL_SIZE, theme.axis_label);
        }
    }

    fn draw_overlay(&self, canvas: &skia::Canvas, frame: &Frame, opts: &RenderOptions) {
        let OverlayState::Visible(overlay) = &frame.overlay else { return };
        let theme = &opts.theme;

        let mut guide = skia::Paint::default();
        guide.set_anti_alias(true);
        guide.set_style(skia::paint::Style::Stroke);
        guide.set_stroke_width(1.0);
        guide.set_color(theme.crosshair);
        guide.set_path_effect(skia::PathEffect::dash(&[2.0, 2.0], 0.0));
        for g in &overlay.guides {
            canvas.draw_line(pt(g.from), pt(g.to), &guide);
        }

        if let Some(marker) = overlay.marker {
            let mut fill = skia::Paint::default();
            fill.set_anti_alias(true);
            fill.set_color(theme.marker_fill);
            canvas.draw_circle(pt(marker.center), marker.radius, &fill);

            let mut ring = skia::Paint::default();
            ring.set_anti_alias(true);
            ring.set_style(skia::paint::Style::Stroke);
            ring.set_stroke_width(1.0);
            ring.set_color(theme.marker_stroke);
            canvas.draw_circle(pt(marker.center), marker.radius, &ring);
        }

        if opts.draw_labels {
            for tip in [&overlay.tooltip, &overlay.value_badge, &overlay.time_badge] {
                self.draw_badge(canvas, tip, theme);
            }
        }
    }

    fn draw_badge(&self, canvas: &skia::Canvas, tip: &Tooltip, theme: &Theme) {
        let (tw, th) = self.text.measure(&tip.text, LABEL_SIZE);
        let bw = tw + BADGE_PADDING * 2.0;
        let bh = th + BADGE_PADDING * 2.0;
        let left = match tip.anchor {
            Anchor::Start => tip.position.x,
            Anchor::Center => tip.position.x - bw * 0.5,
            Anchor::End => tip.position.x - bw,
        };
        let top = tip.position.y - bh * 0.5;

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(theme.badge_fill);
        canvas.draw_round_rect(skia::Rect::from_xywh(left, top, bw, bh), BADGE_RADIUS, BADGE_RADIUS, &fill);
        self.text.draw_top_left(
            canvas,
            &tip.text,
            left + BADGE_PADDING,
            top + BADGE_PADDING,
            LABEL_SIZE,
            theme.badge_text,
        );
    }
}

// ---- helpers ----------------------------------------------------------------

/// Plot extent plus margins as a Skia surface dimension.
fn surface_dim(plot: u32, margins: u32) -> Result<i32> {
    let total = plot.saturating_add(margins).max(1);
    i32::try_from(total).with_context(|| format!("surface dimension {total} px exceeds the raster limit"))
}

#[inline]
fn pt(p: PixelPoint) -> (f32, f32) {
    (p.x, p.y)
}

fn draw_grid(canvas: &skia::Canvas, frame: &Frame, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    for line in &frame.grid {
        let (a, b) = line.segment();
        canvas.draw_line(pt(a), pt(b), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, frame: &Frame, theme: &Theme) {
    let w = frame.size.width as f32;
    let h = frame.size.height as f32;
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    canvas.draw_line((0.0, h), (w, h), &paint);
    canvas.draw_line((0.0, 0.0), (0.0, h), &paint);
}

fn draw_line(canvas: &skia::Canvas, runs: &[Vec<PixelPoint>], theme: &Theme) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(1.5);
    stroke.set_color(theme.line_stroke);

    for run in runs {
        let Some((first, rest)) = run.split_first() else { continue };
        if rest.is_empty() {
            // Isolated sample between gaps: draw a dot so it stays visible.
            let mut dot = stroke.clone();
            dot.set_style(skia::paint::Style::Fill);
            canvas.draw_circle(pt(*first), 1.5, &dot);
            continue;
        }
        let mut path = skia::Path::new();
        path.move_to(pt(*first));
        for p in rest {
            path.line_to(pt(*p));
        }
        canvas.draw_path(&path, &stroke);
    }
}
