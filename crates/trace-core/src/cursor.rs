// File: crates/trace-core/src/cursor.rs
// Summary: Cursor state machine turning pointer events into a declarative crosshair/tooltip overlay.
// Notes:
// - Pointer coordinates are plot-local pixels (origin at the plot's top-left corner).
// - The controller owns its dataset and scales and never mutates either; a new
//   dataset means a new controller.

use crate::axis::LabelFormat;
use crate::locate::nearest_index;
use crate::scale::{ScaleTransform, Scales};
use crate::types::{Dataset, PixelPoint, PlotSize, Sample};

/// Overlay geometry settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayConfig {
    /// Marker radius while tracking; hidden markers collapse to zero.
    pub marker_radius: f32,
    /// Gap between the marker and the tooltip box.
    pub tooltip_offset: f32,
    /// Gap between the plot edge and the axis badges.
    pub badge_offset: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self { marker_radius: 5.0, tooltip_offset: 12.0, badge_offset: 8.0 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub active_sample: Option<Sample>,
    pub pointer: Option<PixelPoint>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorPhase {
    /// No pointer over the plot.
    Idle,
    /// Pointer present and snapped to a sample.
    Tracking,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub center: PixelPoint,
    pub radius: f32,
}

/// Crosshair guide segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Guide {
    pub from: PixelPoint,
    pub to: PixelPoint,
}

/// Which part of a text box sits on its `position`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Box extends right of the position.
    Start,
    Center,
    /// Box extends left of the position.
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub text: String,
    pub position: PixelPoint,
    pub anchor: Anchor,
}

/// Everything the host draws while tracking.
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    pub sample: Sample,
    pub index: usize,
    /// `None` when the sample has no value.
    pub marker: Option<Marker>,
    /// Vertical guide first; the horizontal one is omitted for absent values.
    pub guides: Vec<Guide>,
    /// Time and value next to the marker.
    pub tooltip: Tooltip,
    /// Value at the right edge, level with the marker.
    pub value_badge: Tooltip,
    /// Time under the x axis, below the marker.
    pub time_badge: Tooltip,
}

#[derive(Clone, Debug, PartialEq)]
pub enum OverlayState {
    Hidden,
    Visible(Overlay),
}

impl OverlayState {
    pub fn is_hidden(&self) -> bool {
        matches!(self, OverlayState::Hidden)
    }

    pub fn visible(&self) -> Option<&Overlay> {
        match self {
            OverlayState::Visible(o) => Some(o),
            OverlayState::Hidden => None,
        }
    }

    /// Radius the host should draw the marker with (zero when hidden).
    pub fn marker_radius(&self) -> f32 {
        self.visible().and_then(|o| o.marker).map_or(0.0, |m| m.radius)
    }
}

pub struct CursorController {
    dataset: Dataset,
    scales: Scales,
    size: PlotSize,
    format: LabelFormat,
    config: OverlayConfig,
    state: CursorState,
    active_index: Option<usize>,
}

impl CursorController {
    pub fn new(dataset: Dataset, scales: Scales, size: PlotSize, format: LabelFormat, config: OverlayConfig) -> Self {
        Self { dataset, scales, size, format, config, state: CursorState::default(), active_index: None }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn scales(&self) -> &Scales {
        &self.scales
    }

    pub fn size(&self) -> PlotSize {
        self.size
    }

    pub fn state(&self) -> &CursorState {
        &self.state
    }

    pub fn phase(&self) -> CursorPhase {
        if self.state.active_sample.is_some() {
            CursorPhase::Tracking
        } else {
            CursorPhase::Idle
        }
    }

    pub fn on_pointer_enter(&mut self, x: f32, y: f32) {
        self.on_pointer_move(x, y);
    }

    /// Snap to the sample nearest the time under `x`. No-op on an empty dataset.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let t = self.scales.x.inverse(x as f64);
        let Some(index) = nearest_index(self.dataset.samples(), t) else {
            tracing::trace!(x, y, "pointer move ignored: no samples");
            return;
        };
        let sample = self.dataset.samples()[index];
        tracing::trace!(x, y, query = t, index, "cursor snapped");
        self.active_index = Some(index);
        self.state = CursorState { active_sample: Some(sample), pointer: Some(PixelPoint::new(x, y)) };
    }

    pub fn on_pointer_leave(&mut self) {
        if self.phase() == CursorPhase::Idle {
            return;
        }
        tracing::trace!("cursor cleared");
        self.active_index = None;
        self.state = CursorState::default();
    }

    /// Declarative description of the crosshair, marker and tooltips.
    pub fn overlay(&self) -> OverlayState {
        let (Some(sample), Some(index)) = (self.state.active_sample, self.active_index) else {
            return OverlayState::Hidden;
        };
        let w = self.size.width as f32;
        let h = self.size.height as f32;
        let mx = self.scales.x.to_px(sample.time);
        let my = sample.has_value().then(|| self.scales.y.to_px(sample.value));
        let pointer_y = self.state.pointer.map_or(h * 0.5, |p| p.y);
        let anchor_y = my.unwrap_or(pointer_y);

        let mut guides = vec![Guide { from: PixelPoint::new(mx, 0.0), to: PixelPoint::new(mx, h) }];
        if let Some(my) = my {
            guides.push(Guide { from: PixelPoint::new(0.0, my), to: PixelPoint::new(w, my) });
        }
        let marker = my.map(|my| Marker { center: PixelPoint::new(mx, my), radius: self.config.marker_radius });

        let time_text = self.format.format_time(sample.time);
        let value_text = self.format.format_value(sample.value);
        let off = self.config.tooltip_offset;
        // Flip to the left of the marker in the right half so the box stays inside.
        let (tx, anchor) = if mx > w * 0.5 { (mx - off, Anchor::End) } else { (mx + off, Anchor::Start) };
        let tooltip = Tooltip {
            text: format!("{time_text}: {value_text}"),
            position: PixelPoint::new(tx, anchor_y - off),
            anchor,
        };
        let badge = self.config.badge_offset;

        OverlayState::Visible(Overlay {
            sample,
            index,
            marker,
            guides,
            tooltip,
            value_badge: Tooltip {
                text: value_text,
                position: PixelPoint::new(w + badge, anchor_y),
                anchor: Anchor::Start,
            },
            time_badge: Tooltip {
                text: time_text,
                position: PixelPoint::new(mx, h + badge),
                anchor: Anchor::Center,
            },
        })
    }
}
