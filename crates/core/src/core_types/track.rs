//! Best-track records: the storm-center observation sequence driving the
//! vortex reconstruction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core_types::units::{Degrees, HectoPascals, MetersPerSecond};
use crate::error::{ForcingError, Result};

/// One storm-center fix from a best-track archive.
///
/// Parsed once by the track-data collaborator and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BestTrackFix {
    /// Observation instant (UTC, typically 6-hourly)
    pub time: DateTime<Utc>,
    /// Storm-center longitude
    pub lon: Degrees,
    /// Storm-center latitude
    pub lat: Degrees,
    /// Minimum central pressure
    pub central_pressure: HectoPascals,
    /// Maximum sustained wind
    pub max_wind: MetersPerSecond,
}

/// A validated, time-ordered sequence of best-track fixes.
///
/// Consecutive fixes define one reconstruction interval; the final fix is
/// only ever a successor, never a reconstruction center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackSequence {
    fixes: Vec<BestTrackFix>,
}

impl TrackSequence {
    /// Build a sequence from raw fixes.
    ///
    /// Fails with [`ForcingError::TrackTooShort`] for fewer than two fixes
    /// and [`ForcingError::UnorderedTrack`] when times are not strictly
    /// increasing.
    pub fn new(fixes: Vec<BestTrackFix>) -> Result<Self> {
        if fixes.len() < 2 {
            return Err(ForcingError::TrackTooShort(fixes.len()));
        }
        for (index, pair) in fixes.windows(2).enumerate() {
            if pair[1].time <= pair[0].time {
                return Err(ForcingError::UnorderedTrack {
                    index: index + 1,
                    time: pair[1].time,
                    previous: pair[0].time,
                });
            }
        }
        Ok(TrackSequence { fixes })
    }

    #[must_use]
    pub fn fixes(&self) -> &[BestTrackFix] {
        &self.fixes
    }

    /// Number of fixes in the track.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fixes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fixes.is_empty()
    }

    /// Number of reconstruction intervals (fix pairs).
    #[must_use]
    pub fn interval_count(&self) -> usize {
        self.fixes.len() - 1
    }

    /// Iterate consecutive fix pairs `(current, next)` in time order.
    pub fn intervals(&self) -> impl Iterator<Item = (&BestTrackFix, &BestTrackFix)> {
        self.fixes.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}
