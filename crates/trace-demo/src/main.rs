// File: crates/trace-demo/src/main.rs
// Summary: Demo loads a date,value CSV (or synthesises a bipolar trace), sweeps the cursor and writes PNG frames.

mod loader;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use trace_core::{
    Chart, ChartConfig, Dataset, DomainPadding, Insets, LabelFormat, Sample, TickSpec, WidthPolicy,
};
use trace_render_skia::{theme, RenderOptions, SkiaRenderer};
use tracing_subscriber::EnvFilter;

/// Cursor positions rendered per sweep.
const SWEEP_STEPS: u32 = 6;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let arg = std::env::args().nth(1);
    let (stem, config, dataset) = match arg.as_deref() {
        Some(raw) => {
            let path = Path::new(raw);
            let data = loader::load_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_string();
            (stem, daily_config(), data)
        }
        None => {
            tracing::info!("no CSV given; using a synthetic bipolar trace");
            ("voltage".to_string(), voltage_config(), synthetic_trace(400))
        }
    };
    tracing::info!(samples = dataset.len(), "loaded dataset");

    let mut chart = Chart::new(config)?;
    chart.begin_load();
    chart.finish_load(dataset);
    let (w, h) = chart.outer_size();
    tracing::info!(width = w, height = h, plot = ?chart.size(), "chart ready");

    let renderer = SkiaRenderer::new();
    let palette = std::env::var("TRACE_THEME").map(|n| theme::find(&n)).unwrap_or_else(|_| theme::Theme::light());
    tracing::debug!(theme = palette.name, "palette");
    let opts = RenderOptions { margins: chart.config().layout.margins, theme: palette, draw_labels: true };

    let idle = out_name(&stem, "idle");
    renderer.render_to_png(&chart.frame(), &opts, &idle)?;
    tracing::info!("wrote {}", idle.display());

    // Simulated pointer sweep across the plot, left to right.
    let width = chart.size().width as f32;
    let height = chart.size().height as f32;
    for step in 0..SWEEP_STEPS {
        let x = width * (step as f32 + 0.5) / SWEEP_STEPS as f32;
        if step == 0 {
            chart.on_pointer_enter(x, height * 0.5);
        } else {
            chart.on_pointer_move(x, height * 0.5);
        }
        let frame = chart.frame();
        if let Some(o) = frame.overlay.visible() {
            tracing::info!(x, index = o.index, tooltip = %o.tooltip.text, "cursor");
        }
        let out = out_name(&stem, &format!("cursor_{step}"));
        renderer.render_to_png(&frame, &opts, &out)?;
        tracing::info!("wrote {}", out.display());
    }

    chart.on_pointer_leave();
    debug_assert!(chart.overlay().is_hidden());
    Ok(())
}

/// Daily closing values: fixed width, y domain anchored at zero.
fn daily_config() -> ChartConfig {
    ChartConfig::default()
        .with_margins(Insets::new(70, 20, 20, 50))
        .with_width(WidthPolicy::Fixed(960))
        .with_height(250, None)
        .with_padding(DomainPadding::ZeroBaseline)
        .with_nice(10)
        .with_format(LabelFormat::new("%Y-%m-%d", 2))
}

/// Zero-centred signal: width grows with sample count, symmetric value domain.
fn voltage_config() -> ChartConfig {
    ChartConfig::default()
        .with_margins(Insets::new(60, 70, 20, 40))
        .with_width(WidthPolicy::PerSample { per_sample_px: 4, minimum_count: 200 })
        .with_height(320, Some(40))
        .with_padding(DomainPadding::Symmetric)
        .with_ticks(TickSpec::Every(200.0), TickSpec::Count(8))
        .with_format(LabelFormat::new("%S%.3f", 3))
}

/// Offset sine sampled every 5 ms with one dropout.
fn synthetic_trace(n: usize) -> Dataset {
    let samples = (0..n)
        .map(|i| {
            let t = i as f64 * 5.0;
            if i == n / 3 {
                Sample::absent(t)
            } else {
                Sample::new(t, (t / 80.0).sin() * 2.5 + 0.6)
            }
        })
        .collect();
    Dataset::new(samples)
}

/// Produce output file name like target/out/trace_<stem>_<suffix>.png
fn out_name(stem: &str, suffix: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    out.push(format!("trace_{stem}_{suffix}.png"));
    out
}
