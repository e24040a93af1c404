//! Error types for forcing-field preparation.
//!
//! Every variant is fatal: inputs are deterministic in-memory arrays, so
//! nothing is retried and the pipeline aborts on the first failure rather
//! than persisting a partially-written forcing field.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur while reconstructing or regridding forcing fields.
#[derive(Error, Debug)]
pub enum ForcingError {
    /// A track sequence needs at least two fixes to define an interval.
    #[error("best track has {0} fixes, need at least 2")]
    TrackTooShort(usize),

    /// Track fixes must be strictly time-ordered.
    #[error("track fixes out of order at index {index}: {time} does not follow {previous}")]
    UnorderedTrack {
        index: usize,
        time: DateTime<Utc>,
        previous: DateTime<Utc>,
    },

    /// Paired coordinate arrays must have equal, non-zero lengths.
    #[error("mismatched array lengths for {context}: {left} vs {right}")]
    MismatchedLengths {
        context: &'static str,
        left: usize,
        right: usize,
    },

    /// A radius-of-maximum-winds model produced a non-positive radius.
    #[error("non-positive radius of maximum winds: {0} m")]
    InvalidRmax(f64),

    /// Gridded field dimensions do not match the value buffer.
    #[error("gridded field shape mismatch: {expected} values expected ({n_time}×{n_lat}×{n_lon}), got {actual}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        n_time: usize,
        n_lat: usize,
        n_lon: usize,
    },

    /// A coordinate or time axis is not strictly increasing.
    #[error("{axis} axis is not strictly increasing at index {index}")]
    NonMonotonicAxis { axis: &'static str, index: usize },

    /// Spatial interpolation produced a not-a-number value, usually a
    /// destination point outside the source grid extent.
    #[error(
        "non-finite interpolant at source time index {time_index}, destination point {point_index}"
    )]
    NonFiniteInterpolant {
        time_index: usize,
        point_index: usize,
    },

    /// A destination time lies outside the source time bounds; temporal
    /// interpolation never extrapolates.
    #[error("destination time {requested} outside source range [{start}, {end}]")]
    TimeOutOfBounds {
        requested: DateTime<Utc>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// A track fix timestamp has no exact slot in the output time axis.
    #[error("track interval {interval}: fix time {timestamp} absent from output time axis")]
    TimestampNotInAxis {
        interval: usize,
        timestamp: DateTime<Utc>,
    },
}

/// Result type for forcing-core operations.
pub type Result<T> = std::result::Result<T, ForcingError>;
