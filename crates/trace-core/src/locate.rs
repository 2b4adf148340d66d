// File: crates/trace-core/src/locate.rs
// Summary: Nearest-sample lookup over a time-ordered sample slice (lower-bound bisection).

use crate::types::{Millis, Sample};

/// Index of the first sample whose time is not less than `t`.
#[inline]
pub fn lower_bound(samples: &[Sample], t: Millis) -> usize {
    samples.partition_point(|s| s.time < t)
}

/// Index of the sample closest in time to `t`.
///
/// Out-of-domain queries clamp to the first or last sample. When both
/// neighbours are equally distant the later one wins. `None` only for an
/// empty slice. Runs in O(log n).
pub fn nearest_index(samples: &[Sample], t: Millis) -> Option<usize> {
    if samples.is_empty() {
        return None;
    }
    let i = lower_bound(samples, t);
    if i == 0 {
        return Some(0);
    }
    if i == samples.len() {
        return Some(samples.len() - 1);
    }
    let before = t - samples[i - 1].time;
    let after = samples[i].time - t;
    Some(if before < after { i - 1 } else { i })
}

/// Sample closest in time to `t`; see [`nearest_index`].
pub fn nearest(samples: &[Sample], t: Millis) -> Option<&Sample> {
    nearest_index(samples, t).map(|i| &samples[i])
}
