// File: crates/trace-core/tests/layout.rs
// Purpose: Plot sizing for fixed and per-sample widths, margins and grid-unit rounding.

use trace_core::{ChartLayout, Insets, LayoutConfig, PlotSize, WidthPolicy};

fn per_sample(per_sample_px: u32, minimum_count: usize) -> LayoutConfig {
    LayoutConfig {
        margins: Insets::new(60, 20, 20, 30),
        width: WidthPolicy::PerSample { per_sample_px, minimum_count },
        height: 250,
        grid_unit: None,
    }
}

#[test]
fn sparse_data_uses_minimum_count() {
    let size = ChartLayout::compute(5, &per_sample(10, 200));
    assert_eq!(size.width, 1920);
}

#[test]
fn wide_data_stretches_plot() {
    let size = ChartLayout::compute(500, &per_sample(10, 200));
    assert_eq!(size.width, 500 * 10 - 80);
}

#[test]
fn fixed_width_subtracts_margins() {
    let cfg = LayoutConfig {
        margins: Insets::new(70, 20, 20, 50),
        width: WidthPolicy::Fixed(960),
        height: 250,
        grid_unit: None,
    };
    assert_eq!(ChartLayout::compute(0, &cfg), PlotSize::new(870, 180));
    assert_eq!(ChartLayout::compute(10_000, &cfg), PlotSize::new(870, 180));
}

#[test]
fn height_floors_to_grid_unit() {
    let mut cfg = per_sample(10, 200);
    cfg.grid_unit = Some(40);
    // 250 - 50 = 200 is already a multiple.
    assert_eq!(ChartLayout::compute(0, &cfg).height, 200);
    cfg.height = 275;
    assert_eq!(ChartLayout::compute(0, &cfg).height, 200);
    cfg.grid_unit = Some(0);
    assert_eq!(ChartLayout::compute(0, &cfg).height, 225);
}

#[test]
fn margins_larger_than_surface_saturate() {
    let cfg = LayoutConfig {
        margins: Insets::new(600, 600, 200, 200),
        width: WidthPolicy::Fixed(800),
        height: 300,
        grid_unit: None,
    };
    assert_eq!(ChartLayout::compute(3, &cfg), PlotSize::new(0, 0));
}

#[test]
fn outer_adds_margins_back() {
    let cfg = per_sample(10, 200);
    let size = ChartLayout::compute(5, &cfg);
    assert_eq!(ChartLayout::outer(size, &cfg.margins), (2000, 250));
}
