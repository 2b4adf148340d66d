// File: crates/trace-core/src/layout.rs
// Summary: Plot size from sample count, margins, width policy and grid-unit rounding.

use crate::types::{Insets, PlotSize};

/// Default outer surface width in pixels.
pub const WIDTH: u32 = 960;
/// Default outer surface height in pixels.
pub const HEIGHT: u32 = 250;

/// How the plot width is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidthPolicy {
    /// Fixed outer width; margins are taken out of it.
    Fixed(u32),
    /// Each sample gets `per_sample_px` pixels, counting at least
    /// `minimum_count` samples so sparse data still gets a usable plot.
    PerSample { per_sample_px: u32, minimum_count: usize },
}

impl Default for WidthPolicy {
    fn default() -> Self {
        WidthPolicy::Fixed(WIDTH)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    pub margins: Insets,
    pub width: WidthPolicy,
    /// Outer height including margins.
    pub height: u32,
    /// Floor the plot height to a multiple of this many pixels.
    pub grid_unit: Option<u32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { margins: Insets::default(), width: WidthPolicy::default(), height: HEIGHT, grid_unit: None }
    }
}

/// Pure sizing rules for the plot area.
pub struct ChartLayout;

impl ChartLayout {
    /// Inner plot size for `sample_count` samples. Subtractions saturate at zero.
    pub fn compute(sample_count: usize, cfg: &LayoutConfig) -> PlotSize {
        let outer_width = match cfg.width {
            WidthPolicy::Fixed(w) => w as u64,
            WidthPolicy::PerSample { per_sample_px, minimum_count } => {
                sample_count.max(minimum_count) as u64 * per_sample_px as u64
            }
        };
        let width = outer_width.saturating_sub(cfg.margins.hsum() as u64);
        let mut height = cfg.height.saturating_sub(cfg.margins.vsum());
        if let Some(unit) = cfg.grid_unit.filter(|&u| u > 0) {
            height = height / unit * unit;
        }
        let size = PlotSize::new(width.min(u32::MAX as u64) as u32, height);
        tracing::debug!(sample_count, width = size.width, height = size.height, "computed plot size");
        size
    }

    /// Plot size plus margins.
    pub fn outer(size: PlotSize, margins: &Insets) -> (u32, u32) {
        (
            size.width.saturating_add(margins.hsum()),
            size.height.saturating_add(margins.vsum()),
        )
    }
}
