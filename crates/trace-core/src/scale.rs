// File: crates/trace-core/src/scale.rs
// Summary: Time (X) and Value (Y) linear scales, value-domain padding and the scale builder.

use crate::grid::{tick_step, time_interval, Ticks, TickSpec};
use crate::types::{Dataset, Domain, Millis, PlotSize};

/// Spans below this are treated as a single point.
const DEGENERATE_SPAN: f64 = 1e-12;

/// Forward (domain -> pixel) and inverse (pixel -> domain) mapping shared by both axes.
pub trait ScaleTransform {
    fn forward(&self, v: f64) -> f64;
    fn inverse(&self, px: f64) -> f64;
    fn domain(&self) -> Domain;
    /// Pixel range as `(start, end)`; `end < start` for the inverted Y axis.
    fn range(&self) -> (f64, f64);
    /// False when the scale was built from an empty dataset.
    fn is_fitted(&self) -> bool;
    /// Tick values for labels and grid lines.
    fn ticks(&self, spec: TickSpec) -> Ticks;

    #[inline]
    fn to_px(&self, v: f64) -> f32 {
        self.forward(v) as f32
    }
}

/// Affine map from a domain onto a pixel range.
///
/// A degenerate domain (zero span, e.g. a single sample) maps every value to the
/// midpoint of the range, and its inverse returns `domain.min`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: Domain,
    range: (f64, f64),
    fitted: bool,
}

impl LinearScale {
    pub fn new(domain: Domain, range: (f64, f64)) -> Self {
        Self { domain, range, fitted: true }
    }

    /// Placeholder over the unit domain used when there is no data.
    pub fn unfitted(range: (f64, f64)) -> Self {
        Self { domain: Domain::UNIT, range, fitted: false }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.domain.span().abs() < DEGENERATE_SPAN
    }

    #[inline]
    pub fn forward(&self, v: f64) -> f64 {
        let (r0, r1) = self.range;
        if self.is_degenerate() {
            return (r0 + r1) * 0.5;
        }
        r0 + (v - self.domain.min) / self.domain.span() * (r1 - r0)
    }

    #[inline]
    pub fn inverse(&self, px: f64) -> f64 {
        let (r0, r1) = self.range;
        let rspan = r1 - r0;
        if self.is_degenerate() || rspan.abs() < DEGENERATE_SPAN {
            return self.domain.min;
        }
        self.domain.min + (px - r0) / rspan * self.domain.span()
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted
    }
}

/// Horizontal scale: epoch milliseconds onto `[0, width]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    inner: LinearScale,
}

impl TimeScale {
    pub fn new(domain: Domain, width: f64) -> Self {
        Self { inner: LinearScale::new(domain, (0.0, width)) }
    }

    pub fn unfitted(width: f64) -> Self {
        Self { inner: LinearScale::unfitted((0.0, width)) }
    }

    pub fn linear(&self) -> &LinearScale {
        &self.inner
    }
}

impl ScaleTransform for TimeScale {
    fn forward(&self, t: Millis) -> f64 { self.inner.forward(t) }
    fn inverse(&self, px: f64) -> Millis { self.inner.inverse(px) }
    fn domain(&self) -> Domain { self.inner.domain() }
    fn range(&self) -> (f64, f64) { self.inner.range() }
    fn is_fitted(&self) -> bool { self.inner.is_fitted() }

    fn ticks(&self, spec: TickSpec) -> Ticks {
        if !self.is_fitted() {
            return Ticks::empty();
        }
        let d = self.domain();
        match spec {
            TickSpec::Count(n) => match time_interval(d.span(), n) {
                Some(step) => Ticks::time(d, step),
                None => Ticks::empty(),
            },
            TickSpec::Every(step) => Ticks::multiples(d, step),
            TickSpec::Divisions(n) => Ticks::divisions(&self.inner, n),
        }
    }
}

/// Vertical scale: values onto `[height, 0]` so larger values plot higher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    inner: LinearScale,
}

impl ValueScale {
    pub fn new(domain: Domain, height: f64) -> Self {
        Self { inner: LinearScale::new(domain, (height, 0.0)) }
    }

    pub fn unfitted(height: f64) -> Self {
        Self { inner: LinearScale::unfitted((height, 0.0)) }
    }

    pub fn linear(&self) -> &LinearScale {
        &self.inner
    }
}

impl ScaleTransform for ValueScale {
    fn forward(&self, v: f64) -> f64 { self.inner.forward(v) }
    fn inverse(&self, py: f64) -> f64 { self.inner.inverse(py) }
    fn domain(&self) -> Domain { self.inner.domain() }
    fn range(&self) -> (f64, f64) { self.inner.range() }
    fn is_fitted(&self) -> bool { self.inner.is_fitted() }

    fn ticks(&self, spec: TickSpec) -> Ticks {
        if !self.is_fitted() {
            return Ticks::empty();
        }
        let d = self.domain();
        match spec {
            TickSpec::Count(0) => Ticks::empty(),
            TickSpec::Count(n) => match tick_step(d.min, d.max, n) {
                Some(step) => Ticks::multiples(d, step),
                // Constant values: one tick at the value itself.
                None => Ticks::single(d.min),
            },
            TickSpec::Every(step) => Ticks::multiples(d, step),
            TickSpec::Divisions(n) => Ticks::divisions(&self.inner, n),
        }
    }
}

/// How the value domain is widened around the raw data extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DomainPadding {
    /// Raw `[min, max]`.
    #[default]
    None,
    /// Equalise magnitudes around zero for zero-centred signals.
    Symmetric,
    /// Always include zero (`[min(0, min), max(0, max)]`).
    ZeroBaseline,
}

impl DomainPadding {
    pub fn apply(self, d: Domain) -> Domain {
        match self {
            DomainPadding::None => d,
            DomainPadding::Symmetric => {
                let (amin, amax) = (d.min.abs(), d.max.abs());
                let diff = (amax - amin).abs();
                if amax > amin {
                    Domain::new(d.min - diff, d.max)
                } else if amin > amax {
                    Domain::new(d.min, d.max + diff)
                } else {
                    d
                }
            }
            DomainPadding::ZeroBaseline => Domain::new(d.min.min(0.0), d.max.max(0.0)),
        }
    }
}

/// Extend `d` outward so both bounds land on multiples of the tick step for `count` ticks.
pub fn nice(d: Domain, count: usize) -> Domain {
    let (mut lo, mut hi) = (d.min, d.max);
    let mut prev: Option<f64> = None;
    for _ in 0..10 {
        let Some(step) = tick_step(lo, hi, count) else { break };
        if prev == Some(step) {
            break;
        }
        lo = (lo / step).floor() * step;
        hi = (hi / step).ceil() * step;
        prev = Some(step);
    }
    Domain::new(lo, hi)
}

/// The pair of scales a chart draws with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scales {
    pub x: TimeScale,
    pub y: ValueScale,
}

/// Derives both scales from a dataset and the plot size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScaleBuilder {
    pub padding: DomainPadding,
    /// Round the value domain to this many nice ticks.
    pub nice: Option<usize>,
}

impl ScaleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_padding(mut self, padding: DomainPadding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_nice(mut self, count: usize) -> Self {
        self.nice = Some(count);
        self
    }

    pub fn build(&self, data: &Dataset, size: PlotSize) -> Scales {
        let width = size.width as f64;
        let height = size.height as f64;
        let x = match data.time_extent() {
            Some(d) => TimeScale::new(d, width),
            None => TimeScale::unfitted(width),
        };
        let y = match data.value_extent() {
            Some(d) => {
                let mut d = self.padding.apply(d);
                if let Some(count) = self.nice {
                    d = nice(d, count);
                }
                ValueScale::new(d, height)
            }
            None => ValueScale::unfitted(height),
        };
        tracing::debug!(
            x_domain = ?x.domain(),
            y_domain = ?y.domain(),
            padding = ?self.padding,
            "built scales"
        );
        Scales { x, y }
    }
}
