//! Parametric tropical-cyclone vortex reconstruction
//!
//! Sub-models (radius of maximum winds, pressure profile, translation wind)
//! are explicit enums; the reconstructor combines them per track interval.

pub mod pressure;
pub mod reconstructor;
pub mod rmax;
pub mod translation;

pub use pressure::PressureProfile;
pub use reconstructor::{constants, SynthesisCoefficients, VortexConfig, VortexFieldSample};
pub use rmax::RmaxModel;
pub use translation::TranslationModel;
