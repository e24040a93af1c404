//! Spherical geometry shared by the vortex reconstruction and regridding paths
//!
//! Distances use the haversine formula on a sphere of radius 6 371 004 m,
//! matching the constant used throughout the forcing pipeline. The `asin`
//! argument is clamped to `[-1, 1]` so antipodal point pairs cannot produce a
//! domain error from floating-point overshoot.

use crate::core_types::units::{Degrees, Meters};

/// Mean Earth radius (m)
pub const EARTH_RADIUS: Meters = Meters::new(6_371_004.0);

/// Earth rotation rate Ω (rad/s)
pub const OMEGA: f64 = 7.292115e-5;

/// Great-circle distance between two lon/lat points in degrees.
///
/// Pure and symmetric in its two point arguments; returns exactly zero when
/// the points coincide.
#[must_use]
pub fn great_circle_distance(lon1: Degrees, lat1: Degrees, lon2: Degrees, lat2: Degrees) -> Meters {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    // Clamp guards asin against sqrt(1 + ulp) for near-antipodal inputs.
    let arg = a.sqrt().clamp(-1.0, 1.0);
    EARTH_RADIUS * (2.0 * arg.asin())
}

/// Coriolis parameter f = 2·Ω·sin(lat)
#[must_use]
pub fn coriolis_parameter(lat: Degrees) -> f64 {
    2.0 * OMEGA * lat.to_radians().sin()
}

/// Local Cartesian offset (east, north) in meters of a point relative to a
/// reference, with the zonal arc scaled by the cosine of the mean latitude.
///
/// This is the flat-earth offset the gradient-wind decomposition uses; it is
/// only meaningful at storm scale, not for global separations.
#[must_use]
pub fn local_cartesian_offset(
    lon: Degrees,
    lat: Degrees,
    ref_lon: Degrees,
    ref_lat: Degrees,
) -> (Meters, Meters) {
    let mean_lat = (lat + ref_lat) * 0.5;
    let dx = *EARTH_RADIUS * (lon - ref_lon).to_radians() * mean_lat.to_radians().cos();
    let dy = *EARTH_RADIUS * (lat - ref_lat).to_radians();
    (Meters::new(dx), Meters::new(dy))
}
