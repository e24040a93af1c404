//! Parametric tropical-cyclone field reconstruction
//!
//! Given one best-track fix and its successor, rebuilds the analytic surface
//! pressure field, the gradient (symmetric) wind and the translation
//! (asymmetric) wind at an arbitrary query point set, then synthesizes the
//! combined wind vector:
//!
//! ```text
//! Vg = −f·r/2 + √(f²·r²/4 + (r/ρ)·dP/dr)     (gradient-wind balance)
//! wind_x = c1·u_mov − c2·u_g
//! wind_y = c1·v_mov + c2·v_g
//! ```
//!
//! Everything is computed eagerly at construction; the sample is a read-only
//! result. Each query point is independent, so the per-point loop runs on
//! the rayon pool.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core_types::geo::{coriolis_parameter, great_circle_distance, local_cartesian_offset};
use crate::core_types::query::QueryPointSet;
use crate::core_types::track::BestTrackFix;
use crate::core_types::units::{Degrees, HectoPascals, Hours, Meters, MetersPerSecond};
use crate::error::Result;
use crate::vortex::pressure::PressureProfile;
use crate::vortex::rmax::RmaxModel;
use crate::vortex::translation::TranslationModel;

/// Physical constants of the vortex model
pub mod constants {
    /// Surface air density (kg/m³)
    pub const AIR_DENSITY: f64 = 1.29;

    /// Default storm inflow angle (degrees)
    pub const DEFAULT_INFLOW_ANGLE: f64 = 20.0;

    /// Default best-track fix spacing (hours)
    pub const DEFAULT_FIX_SPACING: f64 = 6.0;
}

/// Empirical blending weights for the translation and gradient wind
/// contributions. The only caller-tunable part of the synthesis; typical
/// values are 0.5-0.9.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SynthesisCoefficients {
    /// Weight of the translation (asymmetric) wind
    pub c1: f64,
    /// Weight of the gradient (symmetric) wind
    pub c2: f64,
}

impl Default for SynthesisCoefficients {
    fn default() -> Self {
        SynthesisCoefficients { c1: 0.8, c2: 0.8 }
    }
}

/// Configuration for one reconstruction interval: the current fix, its
/// successor (the translation wind needs the storm's displacement), and the
/// physical sub-model selections.
///
/// A successor is always required — the track driver never reconstructs the
/// final fix, so a missing successor is unrepresentable here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VortexConfig {
    /// Storm-center longitude at the current fix
    pub center_lon: Degrees,
    /// Storm-center latitude at the current fix
    pub center_lat: Degrees,
    /// Central pressure at the current fix
    pub central_pressure: HectoPascals,
    /// Maximum sustained wind at the current fix
    pub max_wind: MetersPerSecond,
    /// Storm-center longitude at the successor fix
    pub next_lon: Degrees,
    /// Storm-center latitude at the successor fix
    pub next_lat: Degrees,
    /// Ambient (far-field) pressure
    pub ambient_pressure: HectoPascals,
    /// Time separation between the current and successor fixes
    pub dt: Hours,
    /// Storm inflow angle
    pub inflow_angle: Degrees,
    /// Explicit radius of maximum winds; when absent, `rmax_model` is used
    pub rmax: Option<Meters>,
    pub rmax_model: RmaxModel,
    pub pressure_profile: PressureProfile,
    pub translation_model: TranslationModel,
}

impl VortexConfig {
    /// Configuration for the interval between `current` and `next`, with the
    /// default sub-models, standard ambient pressure and inflow angle, and
    /// `dt` taken from the fix timestamps.
    #[must_use]
    pub fn from_interval(current: &BestTrackFix, next: &BestTrackFix) -> Self {
        let dt_seconds = (next.time - current.time).num_seconds() as f64;
        VortexConfig {
            center_lon: current.lon,
            center_lat: current.lat,
            central_pressure: current.central_pressure,
            max_wind: current.max_wind,
            next_lon: next.lon,
            next_lat: next.lat,
            ambient_pressure: HectoPascals::STANDARD,
            dt: Hours::new(dt_seconds / 3600.0),
            inflow_angle: Degrees::new(constants::DEFAULT_INFLOW_ANGLE),
            rmax: None,
            rmax_model: RmaxModel::default(),
            pressure_profile: PressureProfile::default(),
            translation_model: TranslationModel::default(),
        }
    }

    /// Radius of maximum winds: the explicit value when supplied, otherwise
    /// the selected empirical model.
    pub fn radius_of_maximum_winds(&self) -> Result<Meters> {
        match self.rmax {
            Some(rmax) => {
                if *rmax <= 0.0 {
                    return Err(crate::error::ForcingError::InvalidRmax(*rmax));
                }
                Ok(rmax)
            }
            None => self.rmax_model.radius(
                self.central_pressure,
                self.ambient_pressure,
                self.center_lat,
                self.max_wind,
            ),
        }
    }
}

/// The reconstructed fields for one interval, evaluated at every query
/// point: surface pressure (hPa), synthesized wind components and speed
/// (m/s).
///
/// Defined everywhere including the storm center, where the gradient terms
/// degenerate to zero and the translation term alone remains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VortexFieldSample {
    rmax: Meters,
    pressure: Vec<f64>,
    wind_u: Vec<f64>,
    wind_v: Vec<f64>,
    wind_speed: Vec<f64>,
}

impl VortexFieldSample {
    /// Reconstruct the pressure and wind fields at `points`.
    ///
    /// Fails only on invalid configuration (non-positive radius of maximum
    /// winds); a query point at the exact storm center is a valid degenerate
    /// case, not an error.
    pub fn reconstruct(
        config: &VortexConfig,
        points: &QueryPointSet,
        coefficients: SynthesisCoefficients,
    ) -> Result<Self> {
        let rmax = config.radius_of_maximum_winds()?;
        let translation = config.translation_model.velocity(
            config.center_lon,
            config.center_lat,
            config.next_lon,
            config.next_lat,
            config.dt,
        );
        let theta = config.inflow_angle.to_radians();
        let (sin_t, cos_t) = theta.sin_cos();

        let per_point: Vec<(f64, f64, f64, f64)> = points
            .lon()
            .par_iter()
            .zip(points.lat().par_iter())
            .map(|(&plon, &plat)| {
                let lon = Degrees::new(plon);
                let lat = Degrees::new(plat);
                let r = great_circle_distance(lon, lat, config.center_lon, config.center_lat);

                let pr = config.pressure_profile.pressure_at(
                    r,
                    rmax,
                    config.central_pressure,
                    config.ambient_pressure,
                );
                let dpdr = config.pressure_profile.gradient_at(
                    r,
                    rmax,
                    config.central_pressure,
                    config.ambient_pressure,
                );

                // Gradient-wind balance; the discriminant is zero at r = 0,
                // so the center degenerates to Vg = 0 rather than erroring.
                let f = coriolis_parameter(lat);
                let vg = -f * *r / 2.0
                    + (f * f * *r * *r / 4.0 + *r / constants::AIR_DENSITY * dpdr).sqrt();

                // Unit direction from the center through the query point,
                // rotated by the inflow angle. At r = 0 the direction is
                // undefined and both components collapse to zero.
                let (dx, dy) =
                    local_cartesian_offset(lon, lat, config.center_lon, config.center_lat);
                let norm = (*dx).hypot(*dy);
                let (ex, ey) = if norm > 0.0 {
                    (*dx / norm, *dy / norm)
                } else {
                    (0.0, 0.0)
                };
                let u_g = vg * (ex * sin_t + ey * cos_t);
                let v_g = vg * (ex * cos_t - ey * sin_t);

                let decay = config.translation_model.decay(r, rmax);
                let u_mov = translation.x * decay;
                let v_mov = translation.y * decay;

                let wind_x = coefficients.c1 * u_mov - coefficients.c2 * u_g;
                let wind_y = coefficients.c1 * v_mov + coefficients.c2 * v_g;
                let speed = wind_x.hypot(wind_y);

                (*pr, wind_x, wind_y, speed)
            })
            .collect();

        let mut pressure = Vec::with_capacity(per_point.len());
        let mut wind_u = Vec::with_capacity(per_point.len());
        let mut wind_v = Vec::with_capacity(per_point.len());
        let mut wind_speed = Vec::with_capacity(per_point.len());
        for (p, u, v, s) in per_point {
            pressure.push(p);
            wind_u.push(u);
            wind_v.push(v);
            wind_speed.push(s);
        }

        Ok(VortexFieldSample {
            rmax,
            pressure,
            wind_u,
            wind_v,
            wind_speed,
        })
    }

    /// Radius of maximum winds used for this interval.
    #[must_use]
    pub fn rmax(&self) -> Meters {
        self.rmax
    }

    /// Surface pressure per query point (hPa).
    #[must_use]
    pub fn pressure(&self) -> &[f64] {
        &self.pressure
    }

    /// Zonal synthesized wind per query point (m/s).
    #[must_use]
    pub fn wind_u(&self) -> &[f64] {
        &self.wind_u
    }

    /// Meridional synthesized wind per query point (m/s).
    #[must_use]
    pub fn wind_v(&self) -> &[f64] {
        &self.wind_v
    }

    /// Synthesized wind speed per query point (m/s).
    #[must_use]
    pub fn wind_speed(&self) -> &[f64] {
        &self.wind_speed
    }
}
