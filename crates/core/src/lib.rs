//! Storm-Surge Forcing Core Library
//!
//! Prepares meteorological forcing (wind, pressure) for an unstructured-grid
//! ocean circulation model:
//! - Parametric tropical-cyclone reconstruction from best-track data
//!   (Fujita pressure profile, gradient-wind balance, Ueno translation wind)
//! - Two-stage spatio-temporal interpolation between regular reanalysis
//!   grids, unstructured-mesh points and observation sites
//! - A track driver that assembles per-interval reconstructions into the
//!   forcing time series the model I/O layer persists
//!
//! Mesh parsing, archive reading, plotting and file writing are external
//! collaborators — this crate consumes and produces plain arrays and typed
//! records only.

// Core types and utilities
pub mod core_types;

pub mod driver;
pub mod error;
pub mod interp;
pub mod vortex;

// Re-export core types
pub use core_types::{BestTrackFix, GriddedField, InterpolatedSeries, QueryPointSet, TrackSequence};
pub use core_types::{Degrees, HectoPascals, Hours, Meters, MetersPerSecond, Pascals};

// Re-export the pipeline surface
pub use driver::{ForcingSeries, TrackSequenceDriver, VortexModelSet};
pub use error::{ForcingError, Result};
pub use interp::{interpolate_at_point_times, interpolate_space_time, SpatialScheme};
pub use vortex::{
    PressureProfile, RmaxModel, SynthesisCoefficients, TranslationModel, VortexConfig,
    VortexFieldSample,
};
