// File: crates/trace-core/src/chart.rs
// Summary: Chart facade wiring layout, scales, grid and cursor; tracks dataset loading and builds frames.

use crate::axis::{axis_labels, Axis, AxisLabel};
use crate::config::ChartConfig;
use crate::cursor::{CursorController, CursorPhase, OverlayState};
use crate::error::ChartError;
use crate::grid::{GridGenerator, GridLine};
use crate::layout::ChartLayout;
use crate::scale::{ScaleTransform, Scales};
use crate::types::{Dataset, PixelPoint, PlotSize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// A load is in flight; the chart behaves as empty and ignores the pointer.
    Pending,
    Ready,
}

/// Declarative description of one rendered frame, in plot-local pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub size: PlotSize,
    /// Line vertices, split into runs at samples without a value.
    pub line: Vec<Vec<PixelPoint>>,
    pub grid: Vec<GridLine>,
    pub x_labels: Vec<AxisLabel>,
    pub y_labels: Vec<AxisLabel>,
    pub overlay: OverlayState,
}

pub struct Chart {
    config: ChartConfig,
    grid: GridGenerator,
    load: LoadState,
    cursor: CursorController,
}

impl Chart {
    /// Chart waiting for its first dataset.
    pub fn new(config: ChartConfig) -> Result<Self, ChartError> {
        config.validate()?;
        let grid = GridGenerator::new(config.x_ticks, config.y_ticks);
        let cursor = build_cursor(&config, Dataset::empty());
        Ok(Self { config, grid, load: LoadState::Pending, cursor })
    }

    /// Chart with an already loaded dataset.
    pub fn with_dataset(config: ChartConfig, dataset: Dataset) -> Result<Self, ChartError> {
        let mut chart = Self::new(config)?;
        chart.finish_load(dataset);
        Ok(chart)
    }

    /// Mark a load as started: drop the overlay and disable pointer handling.
    pub fn begin_load(&mut self) {
        tracing::debug!("dataset load started");
        self.load = LoadState::Pending;
        self.cursor = build_cursor(&self.config, Dataset::empty());
    }

    /// Install a loaded dataset. The latest completed load wins; any previous
    /// overlay state is discarded.
    pub fn finish_load(&mut self, dataset: Dataset) {
        tracing::debug!(samples = dataset.len(), "dataset loaded");
        self.cursor = build_cursor(&self.config, dataset);
        self.load = LoadState::Ready;
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn is_ready(&self) -> bool {
        self.load == LoadState::Ready
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        self.cursor.dataset()
    }

    pub fn scales(&self) -> &Scales {
        self.cursor.scales()
    }

    pub fn size(&self) -> PlotSize {
        self.cursor.size()
    }

    /// Outer surface size (plot plus margins).
    pub fn outer_size(&self) -> (u32, u32) {
        ChartLayout::outer(self.size(), &self.config.layout.margins)
    }

    pub fn cursor(&self) -> &CursorController {
        &self.cursor
    }

    pub fn phase(&self) -> CursorPhase {
        self.cursor.phase()
    }

    pub fn on_pointer_enter(&mut self, x: f32, y: f32) {
        if self.is_ready() {
            self.cursor.on_pointer_enter(x, y);
        }
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        if self.is_ready() {
            self.cursor.on_pointer_move(x, y);
        }
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor.on_pointer_leave();
    }

    pub fn overlay(&self) -> OverlayState {
        self.cursor.overlay()
    }

    pub fn grid_lines(&self) -> impl Iterator<Item = GridLine> {
        self.grid.lines(self.scales(), self.size())
    }

    /// Pixel vertices of the line, broken at absent values.
    pub fn line_path(&self) -> Vec<Vec<PixelPoint>> {
        let scales = self.scales();
        let mut runs = Vec::new();
        let mut run = Vec::new();
        for s in self.dataset().samples() {
            if s.has_value() {
                run.push(PixelPoint::new(scales.x.to_px(s.time), scales.y.to_px(s.value)));
            } else if !run.is_empty() {
                runs.push(std::mem::take(&mut run));
            }
        }
        if !run.is_empty() {
            runs.push(run);
        }
        runs
    }

    pub fn frame(&self) -> Frame {
        let scales = self.scales();
        Frame {
            size: self.size(),
            line: self.line_path(),
            grid: self.grid_lines().collect(),
            x_labels: axis_labels(&scales.x, Axis::X, self.config.x_ticks, &self.config.format),
            y_labels: axis_labels(&scales.y, Axis::Y, self.config.y_ticks, &self.config.format),
            overlay: self.overlay(),
        }
    }
}

fn build_cursor(config: &ChartConfig, dataset: Dataset) -> CursorController {
    let size = ChartLayout::compute(dataset.len(), &config.layout);
    let scales = config.scale_builder().build(&dataset, size);
    CursorController::new(dataset, scales, size, config.format.clone(), config.overlay)
}
