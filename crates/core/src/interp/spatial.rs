//! Spatial phase: sampling one regular-grid time slice at scattered points.
//!
//! `Linear` is bilinear interpolation on the source lon/lat axes and yields
//! not-a-number outside the grid's bounding box — the caller turns that into
//! a loud failure rather than writing corrupt forcing values. `Nearest`
//! clamps to the closest grid point and is the fallback for sparse-coverage
//! regions such as coastally masked fields.

use serde::{Deserialize, Serialize};

/// Selectable spatial interpolation scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpatialScheme {
    /// Bilinear on the source grid axes (default); NaN outside the grid
    #[default]
    Linear,
    /// Nearest grid point; clamps outside the grid
    Nearest,
}

/// Locate `x` on a strictly increasing axis.
///
/// Returns `(lower, upper, fraction)` bracketing indices, with
/// `lower == upper` and a zero fraction when `x` falls exactly on a knot, so
/// exact hits never touch a neighbor. `None` when `x` is outside the axis.
pub(crate) fn locate(axis: &[f64], x: f64) -> Option<(usize, usize, f64)> {
    let n = axis.len();
    if x < axis[0] || x > axis[n - 1] {
        return None;
    }
    let mut i = axis.partition_point(|v| *v <= x);
    debug_assert!(i > 0);
    i -= 1;
    if i == n - 1 {
        return Some((i, i, 0.0));
    }
    let frac = (x - axis[i]) / (axis[i + 1] - axis[i]);
    if frac == 0.0 {
        Some((i, i, 0.0))
    } else {
        Some((i, i + 1, frac))
    }
}

/// Index of the axis knot closest to `x`, clamping beyond either end.
fn nearest_index(axis: &[f64], x: f64) -> usize {
    let n = axis.len();
    if x <= axis[0] {
        return 0;
    }
    if x >= axis[n - 1] {
        return n - 1;
    }
    let i = axis.partition_point(|v| *v <= x) - 1;
    if x - axis[i] <= axis[i + 1] - x {
        i
    } else {
        i + 1
    }
}

/// Sample one `[lat][lon]` row-major slice at `(plon, plat)`.
pub(crate) fn sample_slice(
    lon_axis: &[f64],
    lat_axis: &[f64],
    slice: &[f64],
    plon: f64,
    plat: f64,
    scheme: SpatialScheme,
) -> f64 {
    let n_lon = lon_axis.len();
    match scheme {
        SpatialScheme::Linear => {
            let Some((ix0, ix1, fx)) = locate(lon_axis, plon) else {
                return f64::NAN;
            };
            let Some((iy0, iy1, fy)) = locate(lat_axis, plat) else {
                return f64::NAN;
            };
            let v00 = slice[iy0 * n_lon + ix0];
            let v01 = slice[iy0 * n_lon + ix1];
            let v10 = slice[iy1 * n_lon + ix0];
            let v11 = slice[iy1 * n_lon + ix1];
            let low = v00 + (v01 - v00) * fx;
            let high = v10 + (v11 - v10) * fx;
            low + (high - low) * fy
        }
        SpatialScheme::Nearest => {
            let ix = nearest_index(lon_axis, plon);
            let iy = nearest_index(lat_axis, plat);
            slice[iy * n_lon + ix]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const LON: [f64; 3] = [120.0, 121.0, 122.0];
    const LAT: [f64; 2] = [20.0, 21.0];
    // [lat][lon]: value = 10·ilat + ilon
    const SLICE: [f64; 6] = [0.0, 1.0, 2.0, 10.0, 11.0, 12.0];

    #[test]
    fn locate_hits_knots_exactly() {
        assert_eq!(locate(&LON, 120.0), Some((0, 0, 0.0)));
        assert_eq!(locate(&LON, 121.0), Some((1, 1, 0.0)));
        assert_eq!(locate(&LON, 122.0), Some((2, 2, 0.0)));
        assert_eq!(locate(&LON, 119.9), None);
        assert_eq!(locate(&LON, 122.1), None);
        let (i0, i1, frac) = locate(&LON, 120.25).unwrap();
        assert_eq!((i0, i1), (0, 1));
        assert_relative_eq!(frac, 0.25, max_relative = 1e-12);
    }

    #[test]
    fn bilinear_reproduces_grid_values() {
        for (iy, lat) in LAT.iter().enumerate() {
            for (ix, lon) in LON.iter().enumerate() {
                let v = sample_slice(&LON, &LAT, &SLICE, *lon, *lat, SpatialScheme::Linear);
                assert_eq!(v, SLICE[iy * 3 + ix]);
            }
        }
    }

    #[test]
    fn bilinear_interpolates_cell_centers() {
        let v = sample_slice(&LON, &LAT, &SLICE, 120.5, 20.5, SpatialScheme::Linear);
        // Mean of 0, 1, 10, 11.
        assert_relative_eq!(v, 5.5, max_relative = 1e-12);
    }

    #[test]
    fn linear_outside_grid_is_nan() {
        let v = sample_slice(&LON, &LAT, &SLICE, 119.0, 20.5, SpatialScheme::Linear);
        assert!(v.is_nan());
        let v = sample_slice(&LON, &LAT, &SLICE, 120.5, 21.5, SpatialScheme::Linear);
        assert!(v.is_nan());
    }

    #[test]
    fn nearest_clamps_outside_grid() {
        let v = sample_slice(&LON, &LAT, &SLICE, 100.0, 0.0, SpatialScheme::Nearest);
        assert_eq!(v, 0.0);
        let v = sample_slice(&LON, &LAT, &SLICE, 130.0, 30.0, SpatialScheme::Nearest);
        assert_eq!(v, 12.0);
    }

    #[test]
    fn nearest_picks_the_closer_knot() {
        let v = sample_slice(&LON, &LAT, &SLICE, 120.4, 20.0, SpatialScheme::Nearest);
        assert_eq!(v, 0.0);
        let v = sample_slice(&LON, &LAT, &SLICE, 120.6, 20.0, SpatialScheme::Nearest);
        assert_eq!(v, 1.0);
    }
}
