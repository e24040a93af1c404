//! Radius-of-maximum-winds models
//!
//! Two empirical estimates of where the wind speed peaks, selected by an
//! explicit enum rather than an integer mode flag. Only the quadratic
//! pressure form is exercised by the production pipeline; the Graham-Nunn
//! variant is carried as-published and should be treated as provisional.

use serde::{Deserialize, Serialize};

use crate::core_types::units::{Degrees, HectoPascals, Kilometers, Meters, MetersPerSecond};
use crate::error::{ForcingError, Result};

/// Selectable radius-of-maximum-winds model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RmaxModel {
    /// Quadratic fit in central-pressure deficit from 900 hPa:
    /// `Rmax_km = rk − 0.4·(Pc − 900) + 0.01·(Pc − 900)²`.
    ///
    /// `rk` is an empirical coefficient, typically 30-60.
    PressureQuadratic {
        /// Empirical radius coefficient (km)
        rk: f64,
    },
    /// Graham and Nunn (1959): latitude, pressure-deficit and peak-wind
    /// dependent fit. Provisional; not exercised by the default pipeline.
    GrahamNunn,
}

impl Default for RmaxModel {
    fn default() -> Self {
        RmaxModel::PressureQuadratic { rk: 40.0 }
    }
}

impl RmaxModel {
    /// Evaluate the model.
    ///
    /// Fails with [`ForcingError::InvalidRmax`] when the empirical fit
    /// produces a non-positive radius (deep lows far outside the fitted
    /// pressure range can do this).
    pub fn radius(
        &self,
        central_pressure: HectoPascals,
        ambient_pressure: HectoPascals,
        lat: Degrees,
        max_wind: MetersPerSecond,
    ) -> Result<Meters> {
        let pc = *central_pressure;
        let rmax_km = match self {
            RmaxModel::PressureQuadratic { rk } => {
                let deficit = pc - 900.0;
                rk - 0.4 * deficit + 0.01 * deficit * deficit
            }
            RmaxModel::GrahamNunn => {
                28.25 * (0.0873 * (*lat - 28.0)).tanh()
                    + 12.22 * ((pc - *ambient_pressure) / 33.86).exp()
                    + 0.2 * *max_wind
                    + 37.22
            }
        };
        let rmax = Kilometers::new(rmax_km).to_meters();
        if *rmax <= 0.0 {
            return Err(ForcingError::InvalidRmax(*rmax));
        }
        Ok(rmax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn quadratic_model_matches_hand_computation() {
        // Pc = 950: 40 - 0.4*50 + 0.01*2500 = 45 km
        let rmax = RmaxModel::PressureQuadratic { rk: 40.0 }
            .radius(
                HectoPascals::new(950.0),
                HectoPascals::STANDARD,
                Degrees::new(20.0),
                MetersPerSecond::new(50.0),
            )
            .unwrap();
        assert_relative_eq!(*rmax, 45_000.0, max_relative = 1e-12);
    }

    #[test]
    fn quadratic_model_with_zero_deficit() {
        // Pc = 900 reduces to rk itself.
        let rmax = RmaxModel::PressureQuadratic { rk: 40.0 }
            .radius(
                HectoPascals::new(900.0),
                HectoPascals::STANDARD,
                Degrees::new(20.0),
                MetersPerSecond::new(0.0),
            )
            .unwrap();
        assert_eq!(*rmax, 40_000.0);
    }

    #[test]
    fn graham_nunn_stays_positive_with_zero_max_wind() {
        let rmax = RmaxModel::GrahamNunn
            .radius(
                HectoPascals::new(950.0),
                HectoPascals::STANDARD,
                Degrees::new(20.0),
                MetersPerSecond::new(0.0),
            )
            .unwrap();
        assert!(*rmax > 0.0);
    }

    #[test]
    fn invalid_radius_is_rejected() {
        // A small rk with a moderate deficit drives the quadratic negative:
        // 5 - 0.4*20 + 0.01*400 = 1 km... pick a deficit in the trough.
        // rk=1, Pc=920: 1 - 8 + 4 = -3 km.
        let result = RmaxModel::PressureQuadratic { rk: 1.0 }.radius(
            HectoPascals::new(920.0),
            HectoPascals::STANDARD,
            Degrees::new(20.0),
            MetersPerSecond::new(50.0),
        );
        assert!(matches!(result, Err(ForcingError::InvalidRmax(_))));
    }
}
