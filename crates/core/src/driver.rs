//! Track-sequence driver: reconstructs the vortex for every consecutive pair
//! of best-track fixes and writes the results into the matching time slots
//! of a pre-allocated forcing series.
//!
//! The driver does not interpolate between fixes — slots coincident with a
//! fix timestamp get vortex-model values, every other slot keeps its
//! baseline (ambient pressure, zero wind). Temporal smoothing of the
//! combined field, when wanted, is a downstream concern.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core_types::query::QueryPointSet;
use crate::core_types::track::TrackSequence;
use crate::core_types::units::{Degrees, HectoPascals, Meters};
use crate::error::{ForcingError, Result};
use crate::vortex::{
    constants, PressureProfile, RmaxModel, SynthesisCoefficients, TranslationModel, VortexConfig,
    VortexFieldSample,
};

/// The pre-allocated forcing-field time series spanning the full model run.
///
/// Pressure lives on mesh nodes in pascals; wind components live on element
/// centroids in m/s. Rows are `[time][point]` row-major. Each driver write
/// touches one whole time row and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForcingSeries {
    times: Vec<DateTime<Utc>>,
    n_nodes: usize,
    n_elems: usize,
    node_pressure: Vec<f64>,
    elem_uwind: Vec<f64>,
    elem_vwind: Vec<f64>,
}

impl ForcingSeries {
    /// Allocate a baseline series: ambient pressure everywhere, zero wind.
    #[must_use]
    pub fn baseline(
        times: Vec<DateTime<Utc>>,
        n_nodes: usize,
        n_elems: usize,
        ambient: HectoPascals,
    ) -> Self {
        let ambient_pa = *ambient.to_pascals();
        ForcingSeries {
            node_pressure: vec![ambient_pa; times.len() * n_nodes],
            elem_uwind: vec![0.0; times.len() * n_elems],
            elem_vwind: vec![0.0; times.len() * n_elems],
            n_nodes,
            n_elems,
            times,
        }
    }

    #[must_use]
    pub fn times(&self) -> &[DateTime<Utc>] {
        &self.times
    }

    #[must_use]
    pub fn n_nodes(&self) -> usize {
        self.n_nodes
    }

    #[must_use]
    pub fn n_elems(&self) -> usize {
        self.n_elems
    }

    /// Node pressure row (Pa) at time index `it`.
    #[must_use]
    pub fn node_pressure(&self, it: usize) -> &[f64] {
        &self.node_pressure[it * self.n_nodes..(it + 1) * self.n_nodes]
    }

    /// Zonal element wind row (m/s) at time index `it`.
    #[must_use]
    pub fn elem_uwind(&self, it: usize) -> &[f64] {
        &self.elem_uwind[it * self.n_elems..(it + 1) * self.n_elems]
    }

    /// Meridional element wind row (m/s) at time index `it`.
    #[must_use]
    pub fn elem_vwind(&self, it: usize) -> &[f64] {
        &self.elem_vwind[it * self.n_elems..(it + 1) * self.n_elems]
    }

    fn write_slot(&mut self, it: usize, sample_nodes: &VortexFieldSample, sample_elems: &VortexFieldSample) {
        let row = &mut self.node_pressure[it * self.n_nodes..(it + 1) * self.n_nodes];
        for (dst, src) in row.iter_mut().zip(sample_nodes.pressure()) {
            *dst = *HectoPascals::new(*src).to_pascals();
        }
        self.elem_uwind[it * self.n_elems..(it + 1) * self.n_elems]
            .copy_from_slice(sample_elems.wind_u());
        self.elem_vwind[it * self.n_elems..(it + 1) * self.n_elems]
            .copy_from_slice(sample_elems.wind_v());
    }
}

/// Vortex sub-model selections shared by every interval the driver runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VortexModelSet {
    pub rmax_model: RmaxModel,
    pub pressure_profile: PressureProfile,
    pub translation_model: TranslationModel,
    /// Explicit radius of maximum winds applied to every interval; when
    /// absent each interval evaluates `rmax_model` for its own fix.
    pub rmax: Option<Meters>,
    pub ambient_pressure: HectoPascals,
    pub inflow_angle: Degrees,
}

impl Default for VortexModelSet {
    fn default() -> Self {
        VortexModelSet {
            rmax_model: RmaxModel::default(),
            pressure_profile: PressureProfile::default(),
            translation_model: TranslationModel::default(),
            rmax: None,
            ambient_pressure: HectoPascals::STANDARD,
            inflow_angle: Degrees::new(constants::DEFAULT_INFLOW_ANGLE),
        }
    }
}

/// Drives [`VortexFieldSample`] across every consecutive pair of track fixes.
#[derive(Debug, Clone)]
pub struct TrackSequenceDriver {
    track: TrackSequence,
    models: VortexModelSet,
    coefficients: SynthesisCoefficients,
}

impl TrackSequenceDriver {
    #[must_use]
    pub fn new(
        track: TrackSequence,
        models: VortexModelSet,
        coefficients: SynthesisCoefficients,
    ) -> Self {
        TrackSequenceDriver {
            track,
            models,
            coefficients,
        }
    }

    /// Reconstruct every interval and write each result into the series slot
    /// matching the interval's leading fix timestamp.
    ///
    /// The pressure field is evaluated at `node_points`, the wind field at
    /// `elem_points` — matching where the circulation model holds each
    /// variable. Fails when point counts disagree with the series layout,
    /// when a fix timestamp has no exact slot in the series time axis, or on
    /// invalid vortex configuration; the series is not usable after a
    /// mid-run failure.
    pub fn run(
        &self,
        series: &mut ForcingSeries,
        node_points: &QueryPointSet,
        elem_points: &QueryPointSet,
    ) -> Result<()> {
        if node_points.len() != series.n_nodes() {
            return Err(ForcingError::MismatchedLengths {
                context: "node points vs series nodes",
                left: node_points.len(),
                right: series.n_nodes(),
            });
        }
        if elem_points.len() != series.n_elems() {
            return Err(ForcingError::MismatchedLengths {
                context: "element points vs series elements",
                left: elem_points.len(),
                right: series.n_elems(),
            });
        }

        let slot_index: FxHashMap<DateTime<Utc>, usize> = series
            .times()
            .iter()
            .enumerate()
            .map(|(it, time)| (*time, it))
            .collect();

        info!(
            intervals = self.track.interval_count(),
            nodes = node_points.len(),
            elements = elem_points.len(),
            "running vortex reconstruction across track"
        );

        for (interval, (current, next)) in self.track.intervals().enumerate() {
            let mut config = VortexConfig::from_interval(current, next);
            config.ambient_pressure = self.models.ambient_pressure;
            config.inflow_angle = self.models.inflow_angle;
            config.rmax = self.models.rmax;
            config.rmax_model = self.models.rmax_model;
            config.pressure_profile = self.models.pressure_profile;
            config.translation_model = self.models.translation_model;

            let it = *slot_index.get(&current.time).ok_or_else(|| {
                ForcingError::TimestampNotInAxis {
                    interval,
                    timestamp: current.time,
                }
            })?;

            let sample_nodes =
                VortexFieldSample::reconstruct(&config, node_points, self.coefficients)?;
            let sample_elems =
                VortexFieldSample::reconstruct(&config, elem_points, self.coefficients)?;

            series.write_slot(it, &sample_nodes, &sample_elems);
            debug!(
                interval,
                slot = it,
                rmax_m = *sample_elems.rmax(),
                "wrote vortex fields into forcing slot"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::track::BestTrackFix;
    use crate::core_types::units::MetersPerSecond;
    use chrono::TimeZone;

    fn t(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1993, 10, 8, 0, 0, 0).unwrap()
            + chrono::Duration::hours(i64::from(hour))
    }

    fn fix(hour: u32, lon: f64, lat: f64) -> BestTrackFix {
        BestTrackFix {
            time: t(hour),
            lon: Degrees::new(lon),
            lat: Degrees::new(lat),
            central_pressure: HectoPascals::new(950.0),
            max_wind: MetersPerSecond::new(50.0),
        }
    }

    fn three_fix_track() -> TrackSequence {
        TrackSequence::new(vec![
            fix(6, 130.0, 20.0),
            fix(12, 131.0, 21.0),
            fix(18, 132.0, 22.0),
        ])
        .unwrap()
    }

    fn near_track_points() -> QueryPointSet {
        QueryPointSet::from_points(vec![130.2, 131.1], vec![20.1, 21.3]).unwrap()
    }

    #[test]
    fn writes_exactly_one_slot_per_interval() {
        let track = three_fix_track();
        // Axis with extra slots before, between and after the fixes.
        let times: Vec<_> = (0..8).map(|i| t(i * 6)).collect();
        let mut series = ForcingSeries::baseline(times, 2, 2, HectoPascals::STANDARD);
        let driver = TrackSequenceDriver::new(
            track,
            VortexModelSet::default(),
            SynthesisCoefficients { c1: 0.5, c2: 0.9 },
        );
        driver
            .run(&mut series, &near_track_points(), &near_track_points())
            .unwrap();

        let baseline_pa = 101_325.0;
        for it in 0..8 {
            let touched = it == 1 || it == 2; // fixes at hours 6 and 12
            let pressure_row = series.node_pressure(it);
            let u_row = series.elem_uwind(it);
            if touched {
                assert!(
                    pressure_row.iter().all(|p| *p < baseline_pa),
                    "slot {it} should hold vortex pressure"
                );
                assert!(u_row.iter().any(|u| *u != 0.0));
            } else {
                assert!(
                    pressure_row.iter().all(|p| *p == baseline_pa),
                    "slot {it} must keep the baseline"
                );
                assert!(u_row.iter().all(|u| *u == 0.0));
            }
        }
    }

    #[test]
    fn last_fix_is_never_a_reconstruction_center() {
        let track = three_fix_track();
        // Axis missing the final fix time entirely; the run still succeeds
        // because hour 18 is only ever a successor.
        let times = vec![t(6), t(12)];
        let mut series = ForcingSeries::baseline(times, 2, 2, HectoPascals::STANDARD);
        let driver = TrackSequenceDriver::new(
            track,
            VortexModelSet::default(),
            SynthesisCoefficients::default(),
        );
        assert!(driver
            .run(&mut series, &near_track_points(), &near_track_points())
            .is_ok());
    }

    #[test]
    fn missing_slot_names_the_interval() {
        let track = three_fix_track();
        let times = vec![t(6)]; // no slot for the second interval's fix at hour 12
        let mut series = ForcingSeries::baseline(times, 2, 2, HectoPascals::STANDARD);
        let driver = TrackSequenceDriver::new(
            track,
            VortexModelSet::default(),
            SynthesisCoefficients::default(),
        );
        let result = driver.run(&mut series, &near_track_points(), &near_track_points());
        assert!(matches!(
            result,
            Err(ForcingError::TimestampNotInAxis { interval: 1, .. })
        ));
    }

    #[test]
    fn rejects_mismatched_point_counts() {
        let track = three_fix_track();
        let mut series = ForcingSeries::baseline(vec![t(6), t(12)], 3, 2, HectoPascals::STANDARD);
        let driver = TrackSequenceDriver::new(
            track,
            VortexModelSet::default(),
            SynthesisCoefficients::default(),
        );
        let result = driver.run(&mut series, &near_track_points(), &near_track_points());
        assert!(matches!(
            result,
            Err(ForcingError::MismatchedLengths { .. })
        ));
    }

    #[test]
    fn pressure_is_written_in_pascals() {
        // Query point at the first fix's center: slot pressure must be the
        // central pressure converted to Pa.
        let track = TrackSequence::new(vec![fix(6, 130.0, 20.0), fix(12, 131.0, 21.0)]).unwrap();
        let center = QueryPointSet::from_points(vec![130.0], vec![20.0]).unwrap();
        let mut series = ForcingSeries::baseline(vec![t(6)], 1, 1, HectoPascals::STANDARD);
        let driver = TrackSequenceDriver::new(
            track,
            VortexModelSet::default(),
            SynthesisCoefficients::default(),
        );
        driver.run(&mut series, &center, &center).unwrap();
        assert_eq!(series.node_pressure(0)[0], 95_000.0);
    }
}
