//! Core data records and shared utilities

pub mod field;
pub mod geo;
pub mod query;
pub mod track;
pub mod units;

pub use field::{GriddedField, InterpolatedSeries};
pub use geo::{coriolis_parameter, great_circle_distance, local_cartesian_offset, EARTH_RADIUS};
pub use query::QueryPointSet;
pub use track::{BestTrackFix, TrackSequence};
pub use units::*;
