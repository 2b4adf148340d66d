// File: crates/trace-core/src/config.rs
// Summary: Chart configuration with defaults, builder helpers and validation.

use chrono::format::{Item, StrftimeItems};

use crate::axis::LabelFormat;
use crate::cursor::OverlayConfig;
use crate::error::ChartError;
use crate::grid::TickSpec;
use crate::layout::{LayoutConfig, WidthPolicy};
use crate::scale::{DomainPadding, ScaleBuilder};
use crate::types::Insets;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub layout: LayoutConfig,
    pub padding: DomainPadding,
    /// Round the value domain outward to this many nice ticks.
    pub nice: Option<usize>,
    pub x_ticks: TickSpec,
    pub y_ticks: TickSpec,
    pub format: LabelFormat,
    pub overlay: OverlayConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            padding: DomainPadding::None,
            nice: None,
            x_ticks: TickSpec::Count(10),
            y_ticks: TickSpec::Count(10),
            format: LabelFormat::default(),
            overlay: OverlayConfig::default(),
        }
    }
}

impl ChartConfig {
    pub fn with_margins(mut self, margins: Insets) -> Self {
        self.layout.margins = margins;
        self
    }

    pub fn with_width(mut self, width: WidthPolicy) -> Self {
        self.layout.width = width;
        self
    }

    pub fn with_height(mut self, height: u32, grid_unit: Option<u32>) -> Self {
        self.layout.height = height;
        self.layout.grid_unit = grid_unit;
        self
    }

    pub fn with_padding(mut self, padding: DomainPadding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_nice(mut self, count: usize) -> Self {
        self.nice = Some(count);
        self
    }

    pub fn with_ticks(mut self, x: TickSpec, y: TickSpec) -> Self {
        self.x_ticks = x;
        self.y_ticks = y;
        self
    }

    pub fn with_format(mut self, format: LabelFormat) -> Self {
        self.format = format;
        self
    }

    pub fn scale_builder(&self) -> ScaleBuilder {
        ScaleBuilder { padding: self.padding, nice: self.nice }
    }

    /// Reject settings that would produce nonsense geometry or unprintable labels.
    pub fn validate(&self) -> Result<(), ChartError> {
        if let WidthPolicy::PerSample { per_sample_px: 0, .. } = self.layout.width {
            return Err(invalid("per-sample width must be positive"));
        }
        if self.layout.grid_unit == Some(0) {
            return Err(invalid("grid unit must be positive"));
        }
        if self.nice == Some(0) {
            return Err(invalid("nice tick count must be positive"));
        }
        for (name, spec) in [("x", self.x_ticks), ("y", self.y_ticks)] {
            match spec {
                TickSpec::Count(0) | TickSpec::Divisions(0) => {
                    return Err(invalid(format!("{name} tick count must be positive")));
                }
                TickSpec::Every(step) if !(step.is_finite() && step > 0.0) => {
                    return Err(invalid(format!("{name} tick interval must be finite and positive")));
                }
                _ => {}
            }
        }
        if StrftimeItems::new(&self.format.time).any(|item| matches!(item, Item::Error)) {
            return Err(invalid(format!("bad time format {:?}", self.format.time)));
        }
        if !(self.overlay.marker_radius.is_finite() && self.overlay.marker_radius >= 0.0) {
            return Err(invalid("marker radius must be finite and non-negative"));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> ChartError {
    ChartError::InvalidConfig(msg.into())
}
