// File: crates/trace-core/src/grid.rs
// Summary: Tick selection (linear steps, time intervals, pixel divisions) and grid line generation.

use chrono::{DateTime, Datelike, NaiveDate};

use crate::axis::Axis;
use crate::scale::{LinearScale, ScaleTransform, Scales};
use crate::types::{Domain, Millis, PixelPoint, PlotSize};

/// Upper bound on ticks produced for a single axis.
pub const MAX_TICKS: usize = 1_000;

const SECOND: f64 = 1_000.0;
const MINUTE: f64 = 60.0 * SECOND;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const WEEK: f64 = 7.0 * DAY;
const MONTH: f64 = 30.0 * DAY;
const YEAR: f64 = 365.0 * DAY;

/// 1970-01-04, the first Sunday after the epoch.
const FIRST_SUNDAY: Millis = 3.0 * DAY;

/// Candidate time tick intervals in milliseconds. Week steps start on Sunday;
/// month and year lengths are nominal and snap to calendar months in `Ticks::time`.
const TIME_INTERVALS: [f64; 30] = [
    1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0, 200.0, 500.0,
    SECOND, 2.0 * SECOND, 5.0 * SECOND, 15.0 * SECOND, 30.0 * SECOND,
    MINUTE, 2.0 * MINUTE, 5.0 * MINUTE, 15.0 * MINUTE, 30.0 * MINUTE,
    HOUR, 3.0 * HOUR, 6.0 * HOUR, 12.0 * HOUR,
    DAY, 2.0 * DAY, WEEK, 2.0 * WEEK, MONTH, 3.0 * MONTH,
    YEAR,
];

/// How ticks are chosen along an axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickSpec {
    /// Roughly this many ticks at round steps (1/2/5 x 10^k, or a time interval).
    Count(usize),
    /// Every multiple of this step, in domain units (milliseconds on the time axis).
    Every(f64),
    /// This many lines evenly spaced in pixel space, edges included.
    Divisions(usize),
}

impl Default for TickSpec {
    fn default() -> Self {
        TickSpec::Count(10)
    }
}

/// Round step giving about `count` ticks over `[start, stop]`.
pub fn tick_step(start: f64, stop: f64, count: usize) -> Option<f64> {
    let span = (stop - start).abs();
    if count == 0 || !span.is_finite() || span <= 0.0 {
        return None;
    }
    let raw = span / count as f64;
    let power = 10f64.powf(raw.log10().floor());
    let error = raw / power;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    Some(factor * power)
}

/// Smallest interval from the time ladder giving at most `count` ticks over `span` ms.
pub fn time_interval(span: f64, count: usize) -> Option<f64> {
    if count == 0 || !span.is_finite() || span < 0.0 {
        return None;
    }
    let target = span / count as f64;
    match TIME_INTERVALS.iter().copied().find(|&iv| iv >= target) {
        Some(iv) => Some(iv),
        None => Some((target / YEAR).ceil() * YEAR),
    }
}

/// Months since year 0 of the UTC month containing `t`.
fn month_index(t: Millis) -> Option<i64> {
    if !t.is_finite() {
        return None;
    }
    let dt = DateTime::from_timestamp_millis(t.floor() as i64)?;
    Some(dt.year() as i64 * 12 + dt.month0() as i64)
}

/// Midnight UTC on the first day of month `index`.
fn month_start(index: i64) -> Option<Millis> {
    let year = i32::try_from(index.div_euclid(12)).ok()?;
    let month = index.rem_euclid(12) as u32 + 1;
    let start = NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)?;
    Some(start.and_utc().timestamp_millis() as f64)
}

#[derive(Clone, Copy, Debug)]
enum TickSource {
    Multiples { origin: f64, first: f64, step: f64 },
    Months { first: i64, step: i64 },
    Divisions { scale: LinearScale, start_px: f64, step_px: f64 },
    Single(f64),
}

/// Lazy, finite sequence of tick values.
#[derive(Clone, Copy, Debug)]
pub struct Ticks {
    source: TickSource,
    next: usize,
    len: usize,
}

impl Ticks {
    pub fn empty() -> Self {
        Self { source: TickSource::Single(0.0), next: 0, len: 0 }
    }

    pub fn single(v: f64) -> Self {
        Self { source: TickSource::Single(v), next: 0, len: 1 }
    }

    /// Every multiple of `step` inside `domain`.
    pub fn multiples(domain: Domain, step: f64) -> Self {
        Self::offset_multiples(domain, 0.0, step)
    }

    /// `origin + k * step` inside `domain`. When that would exceed `MAX_TICKS`
    /// the step is widened so the ticks still cover the whole domain.
    pub fn offset_multiples(domain: Domain, origin: f64, step: f64) -> Self {
        if !step.is_finite() || step <= 0.0 || !origin.is_finite() {
            return Self::empty();
        }
        let mut step = step;
        loop {
            let first = ((domain.min - origin) / step).ceil();
            let last = ((domain.max - origin) / step).floor();
            if !first.is_finite() || !last.is_finite() || last < first {
                return Self::empty();
            }
            let count = last - first + 1.0;
            if count <= MAX_TICKS as f64 {
                let source = TickSource::Multiples { origin, first, step };
                return Self { source, next: 0, len: count as usize };
            }
            step *= (count / MAX_TICKS as f64).ceil();
        }
    }

    /// First day of every `step`-th calendar month inside `domain`, counted
    /// from January of year 0 (so `step = 12` lands on January 1st).
    pub fn months(domain: Domain, step: i64) -> Self {
        if step <= 0 {
            return Self::empty();
        }
        let (Some(lo), Some(hi)) = (month_index(domain.min), month_index(domain.max)) else {
            return Self::empty();
        };
        let lo = match month_start(lo) {
            Some(start) if start >= domain.min => lo,
            _ => lo + 1,
        };
        let mut step = step;
        loop {
            let first = lo + (step - lo.rem_euclid(step)) % step;
            let last = hi - hi.rem_euclid(step);
            if last < first || month_start(last).is_none() {
                return Self::empty();
            }
            let count = (last - first) / step + 1;
            if count <= MAX_TICKS as i64 {
                let source = TickSource::Months { first, step };
                return Self { source, next: 0, len: count as usize };
            }
            step *= (count + MAX_TICKS as i64 - 1) / MAX_TICKS as i64;
        }
    }

    /// Ticks for a time interval from the ladder: sub-week steps are plain
    /// multiples of the epoch, weeks start on Sunday, longer steps follow
    /// calendar months and years.
    pub fn time(domain: Domain, interval: f64) -> Self {
        if interval >= YEAR {
            Self::months(domain, ((interval / YEAR).round().max(1.0) as i64).saturating_mul(12))
        } else if interval >= MONTH {
            Self::months(domain, (interval / MONTH).round().max(1.0) as i64)
        } else if interval >= WEEK {
            Self::offset_multiples(domain, FIRST_SUNDAY, interval)
        } else {
            Self::multiples(domain, interval)
        }
    }

    /// `n` pixel positions spread evenly over the scale's range; fewer than two
    /// still yields both edges.
    pub fn divisions(scale: &LinearScale, n: usize) -> Self {
        if n == 0 {
            return Self::empty();
        }
        let n = n.clamp(2, MAX_TICKS);
        let (r0, r1) = scale.range();
        // Walk pixels in ascending order so x and y behave alike.
        let (lo, hi) = if r0 <= r1 { (r0, r1) } else { (r1, r0) };
        let step_px = (hi - lo) / (n as f64 - 1.0);
        Self {
            source: TickSource::Divisions { scale: *scale, start_px: lo, step_px },
            next: 0,
            len: n,
        }
    }
}

impl Iterator for Ticks {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.len {
            return None;
        }
        let i = self.next;
        self.next += 1;
        match self.source {
            TickSource::Multiples { origin, first, step } => Some(origin + (first + i as f64) * step),
            TickSource::Months { first, step } => month_start(first + i as i64 * step),
            TickSource::Divisions { scale, start_px, step_px } => Some(scale.inverse(start_px + step_px * i as f64)),
            TickSource::Single(v) => Some(v),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.len - self.next.min(self.len);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Ticks {}

/// Guide line at a tick, spanning the opposite plot dimension.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub axis: Axis,
    /// Pixel coordinate along `axis`.
    pub position: f32,
    pub tick_value: f64,
    /// Length of the opposite dimension (plot height for X lines, width for Y lines).
    pub extent: f32,
}

impl GridLine {
    /// Endpoints in plot-local pixels.
    pub fn segment(&self) -> (PixelPoint, PixelPoint) {
        match self.axis {
            Axis::X => (PixelPoint::new(self.position, 0.0), PixelPoint::new(self.position, self.extent)),
            Axis::Y => (PixelPoint::new(0.0, self.position), PixelPoint::new(self.extent, self.position)),
        }
    }
}

/// Grid lines for one scale; empty for unfitted scales.
pub fn grid_lines<S: ScaleTransform + Copy>(
    scale: &S,
    axis: Axis,
    spec: TickSpec,
    extent: f32,
) -> impl Iterator<Item = GridLine> {
    let scale = *scale;
    scale.ticks(spec).map(move |tick_value| GridLine {
        axis,
        position: scale.to_px(tick_value),
        tick_value,
        extent,
    })
}

/// Produces the background grid for both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GridGenerator {
    pub x_ticks: TickSpec,
    pub y_ticks: TickSpec,
}

impl GridGenerator {
    pub fn new(x_ticks: TickSpec, y_ticks: TickSpec) -> Self {
        Self { x_ticks, y_ticks }
    }

    /// Vertical lines at time ticks, spanning the plot height.
    pub fn vertical(&self, scales: &Scales, size: PlotSize) -> impl Iterator<Item = GridLine> {
        grid_lines(&scales.x, Axis::X, self.x_ticks, size.height as f32)
    }

    /// Horizontal lines at value ticks, spanning the plot width.
    pub fn horizontal(&self, scales: &Scales, size: PlotSize) -> impl Iterator<Item = GridLine> {
        grid_lines(&scales.y, Axis::Y, self.y_ticks, size.width as f32)
    }

    pub fn lines(&self, scales: &Scales, size: PlotSize) -> impl Iterator<Item = GridLine> {
        self.vertical(scales, size).chain(self.horizontal(scales, size))
    }
}
