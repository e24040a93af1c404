//! Analytic radial pressure profiles
//!
//! Fujita (1952): `Pr(r) = P∞ − (P∞ − Pc)/√(1 + (r/Rmax)²)`. The profile
//! reaches `Pc` exactly at the center and approaches `P∞` as r → ∞; its
//! radial derivative feeds the gradient-wind balance.

use serde::{Deserialize, Serialize};

use crate::core_types::units::{HectoPascals, Meters};

/// Selectable analytic pressure-profile model. A single variant today; the
/// enum keeps the alternate-profile slot explicit instead of an integer flag.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum PressureProfile {
    /// Fujita (1952) pressure-deficit profile
    #[default]
    Fujita,
}

impl PressureProfile {
    /// Surface pressure at radial distance `r` from the storm center.
    #[must_use]
    pub fn pressure_at(
        &self,
        r: Meters,
        rmax: Meters,
        central: HectoPascals,
        ambient: HectoPascals,
    ) -> HectoPascals {
        match self {
            PressureProfile::Fujita => {
                let x = *r / *rmax;
                ambient - (ambient - central) / (1.0 + x * x).sqrt()
            }
        }
    }

    /// Radial pressure gradient dP/dr in Pa/m at distance `r`.
    ///
    /// The gradient feeds the momentum balance, so the hPa deficit is
    /// converted to pascals here.
    #[must_use]
    pub fn gradient_at(
        &self,
        r: Meters,
        rmax: Meters,
        central: HectoPascals,
        ambient: HectoPascals,
    ) -> f64 {
        match self {
            PressureProfile::Fujita => {
                let deficit_pa = *(ambient - central).to_pascals();
                let x = *r / *rmax;
                deficit_pa * *r / (*rmax * *rmax) / (1.0 + x * x).powf(1.5)
            }
        }
    }
}
