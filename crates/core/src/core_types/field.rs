//! Gridded time-varying fields from the reanalysis/observation collaborator,
//! and the point series produced by projecting them onto query points.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ForcingError, Result};

/// A regular lon/lat grid of one scalar quantity varying in time.
///
/// Values are stored row-major as `[time][lat][lon]`. Both coordinate axes
/// and the time axis must be strictly increasing; the struct is read-only
/// after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GriddedField {
    lon: Vec<f64>,
    lat: Vec<f64>,
    time: Vec<DateTime<Utc>>,
    values: Vec<f64>,
}

fn check_monotonic(axis: &[f64], name: &'static str) -> Result<()> {
    for (index, pair) in axis.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(ForcingError::NonMonotonicAxis {
                axis: name,
                index: index + 1,
            });
        }
    }
    Ok(())
}

impl GriddedField {
    /// Build a field from its axes and flattened `[time][lat][lon]` values.
    ///
    /// Fails on empty axes, a value buffer of the wrong length, or any axis
    /// that is not strictly increasing.
    pub fn new(
        lon: Vec<f64>,
        lat: Vec<f64>,
        time: Vec<DateTime<Utc>>,
        values: Vec<f64>,
    ) -> Result<Self> {
        if lon.is_empty() || lat.is_empty() || time.is_empty() {
            return Err(ForcingError::ShapeMismatch {
                expected: 0,
                actual: values.len(),
                n_time: time.len(),
                n_lat: lat.len(),
                n_lon: lon.len(),
            });
        }
        let expected = time.len() * lat.len() * lon.len();
        if values.len() != expected {
            return Err(ForcingError::ShapeMismatch {
                expected,
                actual: values.len(),
                n_time: time.len(),
                n_lat: lat.len(),
                n_lon: lon.len(),
            });
        }
        check_monotonic(&lon, "lon")?;
        check_monotonic(&lat, "lat")?;
        for (index, pair) in time.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(ForcingError::NonMonotonicAxis {
                    axis: "time",
                    index: index + 1,
                });
            }
        }
        Ok(GriddedField {
            lon,
            lat,
            time,
            values,
        })
    }

    #[must_use]
    pub fn n_lon(&self) -> usize {
        self.lon.len()
    }

    #[must_use]
    pub fn n_lat(&self) -> usize {
        self.lat.len()
    }

    #[must_use]
    pub fn n_time(&self) -> usize {
        self.time.len()
    }

    #[must_use]
    pub fn lon(&self) -> &[f64] {
        &self.lon
    }

    #[must_use]
    pub fn lat(&self) -> &[f64] {
        &self.lat
    }

    #[must_use]
    pub fn time(&self) -> &[DateTime<Utc>] {
        &self.time
    }

    /// Value at `(time, lat, lon)` indices.
    #[must_use]
    pub fn value_at(&self, it: usize, ilat: usize, ilon: usize) -> f64 {
        self.values[(it * self.lat.len() + ilat) * self.lon.len() + ilon]
    }

    /// One `[lat][lon]` slice of the value buffer.
    #[must_use]
    pub fn time_slice(&self, it: usize) -> &[f64] {
        let slice_len = self.lat.len() * self.lon.len();
        &self.values[it * slice_len..(it + 1) * slice_len]
    }
}

/// A gridded field projected onto a query point set across a target time
/// axis: `values[time][point]`, row-major. Constructed on demand and never
/// cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpolatedSeries {
    times: Vec<DateTime<Utc>>,
    n_points: usize,
    values: Vec<f64>,
}

impl InterpolatedSeries {
    pub(crate) fn from_rows(
        times: Vec<DateTime<Utc>>,
        n_points: usize,
        values: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(values.len(), times.len() * n_points);
        InterpolatedSeries {
            times,
            n_points,
            values,
        }
    }

    #[must_use]
    pub fn times(&self) -> &[DateTime<Utc>] {
        &self.times
    }

    #[must_use]
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// One row of point values at time index `it`.
    #[must_use]
    pub fn row(&self, it: usize) -> &[f64] {
        &self.values[it * self.n_points..(it + 1) * self.n_points]
    }

    /// Value at `(time, point)` indices.
    #[must_use]
    pub fn value_at(&self, it: usize, ipoint: usize) -> f64 {
        self.values[it * self.n_points + ipoint]
    }
}
