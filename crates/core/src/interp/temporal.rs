//! Temporal phase: piecewise-linear interpolation along the source time
//! axis. Never extrapolates — a destination time outside the source bounds
//! is a hard error, and a destination time equal to a source sample returns
//! that sample's value unchanged.

use chrono::{DateTime, Utc};

use crate::error::{ForcingError, Result};
use crate::interp::spatial::locate;

/// Seconds offset of every instant from the first, as f64.
pub(crate) fn offsets_from(epoch: DateTime<Utc>, times: &[DateTime<Utc>]) -> Vec<f64> {
    times
        .iter()
        .map(|t| (*t - epoch).num_milliseconds() as f64 / 1000.0)
        .collect()
}

/// Reject any destination time outside `[src.first(), src.last()]`.
pub(crate) fn check_bounds(src: &[DateTime<Utc>], dst: &[DateTime<Utc>]) -> Result<()> {
    let start = src[0];
    let end = src[src.len() - 1];
    for t in dst {
        if *t < start || *t > end {
            return Err(ForcingError::TimeOutOfBounds {
                requested: *t,
                start,
                end,
            });
        }
    }
    Ok(())
}

/// Bracket a pre-validated destination offset on the source offset axis.
///
/// Bounds were checked against the original timestamps, so `locate` cannot
/// miss; the zero-fraction knot convention makes exact hits exact.
pub(crate) fn bracket(src_offsets: &[f64], t: f64) -> (usize, usize, f64) {
    locate(src_offsets, t).expect("destination time validated against source bounds")
}
