// File: crates/trace-core/src/lib.rs
// Summary: Core library entry point; time-series scales, grid, nearest-sample cursor and frame description.

pub mod axis;
pub mod chart;
pub mod config;
pub mod cursor;
pub mod error;
pub mod grid;
pub mod layout;
pub mod locate;
pub mod scale;
pub mod types;

pub use axis::{Axis, AxisLabel, LabelFormat};
pub use chart::{Chart, Frame, LoadState};
pub use config::ChartConfig;
pub use cursor::{Anchor, CursorController, CursorPhase, CursorState, Overlay, OverlayConfig, OverlayState, Tooltip};
pub use error::ChartError;
pub use grid::{GridGenerator, GridLine, TickSpec};
pub use layout::{ChartLayout, LayoutConfig, WidthPolicy};
pub use locate::{nearest, nearest_index};
pub use scale::{DomainPadding, ScaleBuilder, ScaleTransform, Scales, TimeScale, ValueScale};
pub use types::{Dataset, Domain, Insets, Millis, PixelPoint, PlotSize, Sample};
