// File: crates/trace-core/src/types.rs
// Summary: Shared data types: samples, dataset, domains, pixel geometry and margins.

use crate::error::ChartError;

/// Epoch milliseconds.
pub type Millis = f64;

/// One time-value observation. `value` may be `NaN` (absent).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub time: Millis,
    pub value: f64,
}

impl Sample {
    pub const fn new(time: Millis, value: f64) -> Self {
        Self { time, value }
    }

    /// Build a sample from a UTC timestamp.
    pub fn at(time: chrono::DateTime<chrono::Utc>, value: f64) -> Self {
        Self { time: time.timestamp_millis() as f64, value }
    }

    /// Sample carrying no value (renders as a gap).
    pub const fn absent(time: Millis) -> Self {
        Self { time, value: f64::NAN }
    }

    #[inline]
    pub fn has_value(&self) -> bool {
        self.value.is_finite()
    }

    /// Sample time as a UTC timestamp; `None` when out of chrono's range.
    pub fn datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp_millis(self.time.round() as i64)
    }
}

/// Time-ordered, immutable sample sequence owned by one chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    /// Wrap samples that the loader already ordered by time.
    /// Ordering is asserted in debug builds only.
    pub fn new(samples: Vec<Sample>) -> Self {
        debug_assert!(
            first_unordered(&samples).is_none(),
            "dataset samples must be non-decreasing by time"
        );
        Self { samples }
    }

    /// Checked constructor for loaders that want a recoverable error.
    pub fn try_new(samples: Vec<Sample>) -> Result<Self, ChartError> {
        if let Some(index) = first_unordered(&samples) {
            return Err(ChartError::Unordered { index });
        }
        Ok(Self { samples })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// `[first.time, last.time]`, relying on the ordering invariant.
    pub fn time_extent(&self) -> Option<Domain> {
        let first = self.samples.first()?;
        let last = self.samples.last()?;
        Some(Domain::new(first.time, last.time))
    }

    /// Min/max over finite values; absent values are skipped.
    pub fn value_extent(&self) -> Option<Domain> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for s in self.samples.iter().filter(|s| s.has_value()) {
            min = min.min(s.value);
            max = max.max(s.value);
        }
        if min.is_finite() && max.is_finite() {
            Some(Domain::new(min, max))
        } else {
            None
        }
    }
}

impl From<Vec<Sample>> for Dataset {
    fn from(samples: Vec<Sample>) -> Self {
        Self::new(samples)
    }
}

fn first_unordered(samples: &[Sample]) -> Option<usize> {
    samples
        .windows(2)
        .position(|w| w[1].time < w[0].time)
        .map(|i| i + 1)
}

/// Closed interval of domain values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub const UNIT: Domain = Domain { min: 0.0, max: 1.0 };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

/// Point in plot-local pixel space (origin at the plot's top-left corner).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

impl PixelPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Inner plot dimensions in pixels (margins excluded).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotSize {
    pub width: u32,
    pub height: u32,
}

impl PlotSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left.saturating_add(self.right) }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top.saturating_add(self.bottom) }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(70, 20, 20, 50)
    }
}
