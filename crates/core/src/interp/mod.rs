//! Spatio-temporal interpolation: projecting a gridded time-varying field
//! onto arbitrary points and times.
//!
//! Two-stage pipeline: every source time slice is first sampled at the
//! destination points (spatial phase, parallel across slices), then each
//! destination time is produced by piecewise-linear interpolation between
//! the sampled slices (temporal phase). Nothing is cached; the operation is
//! a pure transformation of its immutable inputs.
//!
//! Failure modes are loud by design: a not-a-number from the spatial phase
//! (destination point outside the source grid) aborts with the offending
//! slice and point, and a destination time outside the source time bounds
//! aborts before any temporal work — partially corrupt forcing fields are
//! worse than no output.

pub mod spatial;
pub mod temporal;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use tracing::debug;

use crate::core_types::field::{GriddedField, InterpolatedSeries};
use crate::core_types::query::QueryPointSet;
use crate::error::{ForcingError, Result};

pub use spatial::SpatialScheme;

/// Spatial phase: sample every source time slice at the destination points.
/// Returns `[src_time][point]` row-major.
fn spatial_phase(
    field: &GriddedField,
    points: &QueryPointSet,
    scheme: SpatialScheme,
) -> Result<Vec<f64>> {
    let n_points = points.len();
    let rows: Vec<Vec<f64>> = (0..field.n_time())
        .into_par_iter()
        .map(|it| -> Result<Vec<f64>> {
            let slice = field.time_slice(it);
            let row: Vec<f64> = points
                .iter()
                .map(|(plon, plat)| {
                    spatial::sample_slice(field.lon(), field.lat(), slice, plon, plat, scheme)
                })
                .collect();
            if let Some(point_index) = row.iter().position(|v| !v.is_finite()) {
                return Err(ForcingError::NonFiniteInterpolant {
                    time_index: it,
                    point_index,
                });
            }
            Ok(row)
        })
        .collect::<Result<Vec<_>>>()?;

    let mut flat = Vec::with_capacity(field.n_time() * n_points);
    for row in rows {
        flat.extend_from_slice(&row);
    }
    Ok(flat)
}

/// Project `field` onto `points` across a shared destination time axis.
///
/// Every destination time must lie within the source time bounds; the
/// spatial phase must produce finite values at every point. Both violations
/// abort the whole operation.
pub fn interpolate_space_time(
    field: &GriddedField,
    points: &QueryPointSet,
    dst_times: &[DateTime<Utc>],
    scheme: SpatialScheme,
) -> Result<InterpolatedSeries> {
    temporal::check_bounds(field.time(), dst_times)?;
    debug!(
        n_src_times = field.n_time(),
        n_dst_times = dst_times.len(),
        n_points = points.len(),
        ?scheme,
        "interpolating gridded field onto point set"
    );

    let sampled = spatial_phase(field, points, scheme)?;
    let n_points = points.len();

    let epoch = field.time()[0];
    let src_offsets = temporal::offsets_from(epoch, field.time());
    let dst_offsets = temporal::offsets_from(epoch, dst_times);

    let mut values = vec![0.0; dst_times.len() * n_points];
    values
        .par_chunks_mut(n_points)
        .enumerate()
        .for_each(|(idt, out)| {
            let (i0, i1, frac) = temporal::bracket(&src_offsets, dst_offsets[idt]);
            let low = &sampled[i0 * n_points..(i0 + 1) * n_points];
            let high = &sampled[i1 * n_points..(i1 + 1) * n_points];
            for ip in 0..n_points {
                out[ip] = low[ip] + (high[ip] - low[ip]) * frac;
            }
        });

    Ok(InterpolatedSeries::from_rows(
        dst_times.to_vec(),
        n_points,
        values,
    ))
}

/// Project `field` onto `points`, each at its own target time (one value per
/// point — the satellite-overpass sampling mode).
///
/// `point_times` must have one entry per destination point.
pub fn interpolate_at_point_times(
    field: &GriddedField,
    points: &QueryPointSet,
    point_times: &[DateTime<Utc>],
    scheme: SpatialScheme,
) -> Result<Vec<f64>> {
    if point_times.len() != points.len() {
        return Err(ForcingError::MismatchedLengths {
            context: "per-point target times",
            left: point_times.len(),
            right: points.len(),
        });
    }
    temporal::check_bounds(field.time(), point_times)?;

    let sampled = spatial_phase(field, points, scheme)?;
    let n_points = points.len();

    let epoch = field.time()[0];
    let src_offsets = temporal::offsets_from(epoch, field.time());
    let point_offsets = temporal::offsets_from(epoch, point_times);

    let values = (0..n_points)
        .map(|ip| {
            let (i0, i1, frac) = temporal::bracket(&src_offsets, point_offsets[ip]);
            let low = sampled[i0 * n_points + ip];
            let high = sampled[i1 * n_points + ip];
            low + (high - low) * frac
        })
        .collect();
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeZone;

    fn t(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2019, 8, 8, hour, 0, 0).unwrap()
    }

    fn constant_field(value: f64) -> GriddedField {
        GriddedField::new(
            vec![120.0, 121.0, 122.0],
            vec![19.0, 20.0, 21.0],
            vec![t(0), t(6), t(12)],
            vec![value; 27],
        )
        .unwrap()
    }

    /// Field whose value is `hour + lon − 120`, linear in both time and lon.
    fn ramp_field() -> GriddedField {
        let times = [t(0), t(6), t(12)];
        let mut values = Vec::new();
        for (it, _) in times.iter().enumerate() {
            for _ilat in 0..3 {
                for ilon in 0..3 {
                    values.push((it * 6) as f64 + ilon as f64);
                }
            }
        }
        GriddedField::new(
            vec![120.0, 121.0, 122.0],
            vec![19.0, 20.0, 21.0],
            times.to_vec(),
            values,
        )
        .unwrap()
    }

    #[test]
    fn constant_field_survives_both_phases() {
        let field = constant_field(7.25);
        let points =
            QueryPointSet::from_points(vec![120.5, 121.7, 120.0], vec![19.5, 20.3, 21.0]).unwrap();
        let dst = [t(0), t(3), t(9), t(12)];
        let series =
            interpolate_space_time(&field, &points, &dst, SpatialScheme::Linear).unwrap();
        for it in 0..dst.len() {
            for ip in 0..points.len() {
                assert_relative_eq!(series.value_at(it, ip), 7.25, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn knot_times_reproduce_source_samples_exactly() {
        let field = ramp_field();
        let points = QueryPointSet::from_points(vec![121.0], vec![20.0]).unwrap();
        let series =
            interpolate_space_time(&field, &points, &[t(6)], SpatialScheme::Linear).unwrap();
        // Source value at hour 6, lon 121: 6 + 1 = 7, with no smoothing error.
        assert_eq!(series.value_at(0, 0), 7.0);
    }

    #[test]
    fn temporal_midpoint_is_linear() {
        let field = ramp_field();
        let points = QueryPointSet::from_points(vec![120.5], vec![19.5]).unwrap();
        let series =
            interpolate_space_time(&field, &points, &[t(3)], SpatialScheme::Linear).unwrap();
        // 3 hours into the ramp at lon 120.5: 3 + 0.5.
        assert_relative_eq!(series.value_at(0, 0), 3.5, max_relative = 1e-12);
    }

    #[test]
    fn out_of_range_times_fail() {
        let field = constant_field(1.0);
        let points = QueryPointSet::from_points(vec![121.0], vec![20.0]).unwrap();
        let early = interpolate_space_time(
            &field,
            &points,
            &[Utc.with_ymd_and_hms(2019, 8, 7, 23, 0, 0).unwrap()],
            SpatialScheme::Linear,
        );
        assert!(matches!(early, Err(ForcingError::TimeOutOfBounds { .. })));
        let late = interpolate_space_time(&field, &points, &[t(13)], SpatialScheme::Linear);
        assert!(matches!(late, Err(ForcingError::TimeOutOfBounds { .. })));
    }

    #[test]
    fn point_outside_grid_fails_loudly() {
        let field = constant_field(1.0);
        let points = QueryPointSet::from_points(vec![119.0, 121.0], vec![20.0, 20.0]).unwrap();
        let result = interpolate_space_time(&field, &points, &[t(6)], SpatialScheme::Linear);
        assert!(matches!(
            result,
            Err(ForcingError::NonFiniteInterpolant {
                point_index: 0,
                ..
            })
        ));
        // Nearest-neighbor fallback clamps instead.
        let series =
            interpolate_space_time(&field, &points, &[t(6)], SpatialScheme::Nearest).unwrap();
        assert_eq!(series.value_at(0, 0), 1.0);
    }

    #[test]
    fn per_point_times_evaluate_one_lookup_each() {
        let field = ramp_field();
        let points = QueryPointSet::from_points(vec![120.0, 121.0], vec![20.0, 20.0]).unwrap();
        let values = interpolate_at_point_times(
            &field,
            &points,
            &[t(3), t(12)],
            SpatialScheme::Linear,
        )
        .unwrap();
        // Point 0 at hour 3, lon 120: 3 + 0. Point 1 at hour 12, lon 121: 13.
        assert_relative_eq!(values[0], 3.0, max_relative = 1e-12);
        assert_relative_eq!(values[1], 13.0, max_relative = 1e-12);
    }

    #[test]
    fn per_point_times_require_one_time_per_point() {
        let field = constant_field(1.0);
        let points = QueryPointSet::from_points(vec![120.5, 121.0], vec![20.0, 20.0]).unwrap();
        let result =
            interpolate_at_point_times(&field, &points, &[t(6)], SpatialScheme::Linear);
        assert!(matches!(
            result,
            Err(ForcingError::MismatchedLengths { .. })
        ));
    }
}
