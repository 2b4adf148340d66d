// File: crates/trace-core/src/axis.rs
// Summary: Axis identifiers, tick label formatting and positioned axis labels.

use std::fmt::Write;

use crate::grid::TickSpec;
use crate::scale::ScaleTransform;
use crate::types::Millis;

/// Placeholder for values that cannot be shown.
pub const MISSING: &str = "N/A";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal time axis.
    X,
    /// Vertical value axis.
    Y,
}

/// Formatting rules for tick labels and the cursor tooltip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelFormat {
    /// chrono `strftime` pattern applied in UTC.
    pub time: String,
    /// Fractional digits for values.
    pub value_precision: usize,
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self { time: "%Y-%m-%d".to_string(), value_precision: 2 }
    }
}

impl LabelFormat {
    pub fn new(time: impl Into<String>, value_precision: usize) -> Self {
        Self { time: time.into(), value_precision }
    }

    /// Time in UTC; `N/A` for non-finite times, out-of-range dates and
    /// patterns chrono cannot render.
    pub fn format_time(&self, t: Millis) -> String {
        if !t.is_finite() {
            return MISSING.to_string();
        }
        let Some(dt) = chrono::DateTime::from_timestamp_millis(t.round() as i64) else {
            return MISSING.to_string();
        };
        let mut out = String::new();
        match write!(out, "{}", dt.format(&self.time)) {
            Ok(()) => out,
            Err(_) => MISSING.to_string(),
        }
    }

    pub fn format_value(&self, v: f64) -> String {
        if v.is_finite() {
            format!("{:.*}", self.value_precision, v)
        } else {
            MISSING.to_string()
        }
    }
}

/// Tick label at a pixel position along an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    pub axis: Axis,
    pub position: f32,
    pub text: String,
}

/// Labels for every tick of `scale` on `axis`.
pub fn axis_labels<S: ScaleTransform>(
    scale: &S,
    axis: Axis,
    spec: TickSpec,
    format: &LabelFormat,
) -> Vec<AxisLabel> {
    scale
        .ticks(spec)
        .map(|tick| AxisLabel {
            axis,
            position: scale.to_px(tick),
            text: match axis {
                Axis::X => format.format_time(tick),
                Axis::Y => format.format_value(tick),
            },
        })
        .collect()
}
