// File: crates/trace-render-skia/tests/smoke.rs
// Purpose: End-to-end render of idle, tracking and empty frames to PNG.

use trace_core::{Chart, ChartConfig, Dataset, Frame, OverlayState, PlotSize, Sample};
use trace_render_skia::{RenderOptions, SkiaRenderer};

fn chart() -> Chart {
    let data = Dataset::new(
        (0..40)
            .map(|i| Sample::new(i as f64 * 50.0, (i as f64 * 0.3).sin() * 4.0))
            .collect(),
    );
    Chart::with_dataset(ChartConfig::default(), data).expect("default config is valid")
}

fn decode(bytes: &[u8]) -> image::RgbaImage {
    image::load_from_memory(bytes).expect("decode png").to_rgba8()
}

#[test]
fn render_idle_frame_png() {
    let chart = chart();
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let bytes = SkiaRenderer::new().render_to_png_bytes(&chart.frame(), &opts).expect("render");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = decode(&bytes);
    let (w, h) = chart.outer_size();
    assert_eq!((img.width(), img.height()), (w, h));
}

#[test]
fn tracking_overlay_changes_pixels() {
    let mut chart = chart();
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let renderer = SkiaRenderer::new();
    let idle = decode(&renderer.render_to_png_bytes(&chart.frame(), &opts).unwrap());

    chart.on_pointer_move(300.0, 40.0);
    let frame = chart.frame();
    let marker = frame.overlay.visible().and_then(|o| o.marker).expect("marker");
    let tracking = decode(&renderer.render_to_png_bytes(&frame, &opts).unwrap());
    assert_ne!(idle.as_raw(), tracking.as_raw());

    // The marker centre sits on the surface offset by the left/top margins.
    let cx = (marker.center.x + opts.margins.left as f32).round() as u32;
    let cy = (marker.center.y + opts.margins.top as f32).round() as u32;
    assert_ne!(idle.get_pixel(cx, cy), tracking.get_pixel(cx, cy));
}

#[test]
fn empty_chart_still_renders() {
    let chart = Chart::with_dataset(ChartConfig::default(), Dataset::empty()).unwrap();
    let bytes = SkiaRenderer::new()
        .render_to_png_bytes(&chart.frame(), &RenderOptions::default())
        .expect("render empty");
    assert!(!bytes.is_empty());
}

#[test]
fn render_to_png_writes_file() {
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    SkiaRenderer::new()
        .render_to_png(&chart().frame(), &RenderOptions::default(), &out)
        .expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

#[test]
fn oversized_surface_is_an_error() {
    let frame = Frame {
        size: PlotSize::new(u32::MAX, 10),
        line: Vec::new(),
        grid: Vec::new(),
        x_labels: Vec::new(),
        y_labels: Vec::new(),
        overlay: OverlayState::Hidden,
    };
    let err = SkiaRenderer::new()
        .render_to_png_bytes(&frame, &RenderOptions::default())
        .expect_err("width beyond i32 must not render");
    assert!(err.to_string().contains("exceeds"), "unexpected error: {err}");
}
