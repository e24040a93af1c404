//! Storm translation (asymmetric) wind models
//!
//! Ueno (1981): the storm's forward motion contributes a wind component that
//! is strongest near the radius of maximum winds and decays away from it as
//! `exp(−π/4 · |r − Rmax| / Rmax)`, applied identically to both components.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::core_types::geo::EARTH_RADIUS;
use crate::core_types::units::{Degrees, Hours, Meters};

/// Selectable translation-wind model.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum TranslationModel {
    /// Ueno (1981) exponential-decay formulation
    #[default]
    Ueno1981,
}

impl TranslationModel {
    /// Storm translation velocity (east, north) in m/s between the current
    /// center and its successor, `dt` hours apart.
    #[must_use]
    pub fn velocity(
        &self,
        lonc: Degrees,
        latc: Degrees,
        lonc_next: Degrees,
        latc_next: Degrees,
        dt: Hours,
    ) -> Vector2<f64> {
        match self {
            TranslationModel::Ueno1981 => {
                let dx = *EARTH_RADIUS * (lonc_next - lonc).to_radians() * latc.to_radians().cos();
                let dy = *EARTH_RADIUS * (latc_next - latc).to_radians();
                Vector2::new(dx, dy) / dt.to_seconds()
            }
        }
    }

    /// Radial decay weight at distance `r` from the center.
    #[must_use]
    pub fn decay(&self, r: Meters, rmax: Meters) -> f64 {
        match self {
            TranslationModel::Ueno1981 => {
                (-std::f64::consts::FRAC_PI_4 * (*r - *rmax).abs() / *rmax).exp()
            }
        }
    }
}
