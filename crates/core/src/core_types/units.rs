//! Semantic unit types for the quantities crossing the forcing-core API
//!
//! Newtype wrappers prevent accidental mixing of incompatible units
//! (hectopascals with pascals, degrees with radians-as-f64, hours with
//! seconds). All inner values are f64: best-track pressures and great-circle
//! distances are small differences of large numbers and f32 loses too much.
//!
//! # Design
//! - `Deref` to the inner f64 so formulas read naturally (`*lat`, `(*r).sqrt()`)
//! - Explicit conversion methods between related types (`HectoPascals::to_pascals`)
//! - Serde support on everything that appears in a data record
//! - `const fn new` constructors so physical constants can live in `const` items

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Deref, DerefMut, Div, Mul, Neg, Sub, SubAssign};

macro_rules! unit_arithmetic {
    ($name:ident) => {
        impl Add for $name {
            type Output = $name;
            #[inline]
            fn add(self, rhs: $name) -> $name {
                $name(self.0 + rhs.0)
            }
        }

        impl Sub for $name {
            type Output = $name;
            #[inline]
            fn sub(self, rhs: $name) -> $name {
                $name(self.0 - rhs.0)
            }
        }

        impl AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: $name) {
                self.0 += rhs.0;
            }
        }

        impl SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: $name) {
                self.0 -= rhs.0;
            }
        }

        impl Mul<f64> for $name {
            type Output = $name;
            #[inline]
            fn mul(self, rhs: f64) -> $name {
                $name(self.0 * rhs)
            }
        }

        impl Div<f64> for $name {
            type Output = $name;
            #[inline]
            fn div(self, rhs: f64) -> $name {
                $name(self.0 / rhs)
            }
        }

        impl Neg for $name {
            type Output = $name;
            #[inline]
            fn neg(self) -> $name {
                $name(-self.0)
            }
        }

        impl Deref for $name {
            type Target = f64;
            #[inline]
            fn deref(&self) -> &f64 {
                &self.0
            }
        }

        impl DerefMut for $name {
            #[inline]
            fn deref_mut(&mut self) -> &mut f64 {
                &mut self.0
            }
        }
    };
}

// ============================================================================
// ANGLES
// ============================================================================

/// Geographic angle in decimal degrees (longitude, latitude, inflow angle)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Degrees(f64);

unit_arithmetic!(Degrees);

impl Degrees {
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Degrees(value)
    }

    /// Value converted to radians, for trigonometric use
    #[inline]
    #[must_use]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

// ============================================================================
// LENGTHS
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Meters(f64);

unit_arithmetic!(Meters);

impl Meters {
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Meters(value)
    }

    #[inline]
    #[must_use]
    pub fn to_kilometers(self) -> Kilometers {
        Kilometers(self.0 / 1000.0)
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m", self.0)
    }
}

/// Length in kilometers (the empirical radius formulas work in km)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Kilometers(f64);

unit_arithmetic!(Kilometers);

impl Kilometers {
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Kilometers(value)
    }

    #[inline]
    #[must_use]
    pub fn to_meters(self) -> Meters {
        Meters(self.0 * 1000.0)
    }
}

impl From<Kilometers> for Meters {
    #[inline]
    fn from(km: Kilometers) -> Meters {
        km.to_meters()
    }
}

impl fmt::Display for Kilometers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km", self.0)
    }
}

// ============================================================================
// PRESSURE
// ============================================================================

/// Atmospheric pressure in hectopascals (best-track convention)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct HectoPascals(f64);

unit_arithmetic!(HectoPascals);

impl HectoPascals {
    /// ICAO standard sea-level pressure
    pub const STANDARD: HectoPascals = HectoPascals(1013.25);

    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        HectoPascals(value)
    }

    /// Convert to pascals (the unit the forcing writer persists)
    #[inline]
    #[must_use]
    pub fn to_pascals(self) -> Pascals {
        Pascals(self.0 * 100.0)
    }
}

impl fmt::Display for HectoPascals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hPa", self.0)
    }
}

/// Atmospheric pressure in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Pascals(f64);

unit_arithmetic!(Pascals);

impl Pascals {
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Pascals(value)
    }
}

impl From<HectoPascals> for Pascals {
    #[inline]
    fn from(hpa: HectoPascals) -> Pascals {
        hpa.to_pascals()
    }
}

impl fmt::Display for Pascals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Pa", self.0)
    }
}

// ============================================================================
// SPEED AND TIME
// ============================================================================

/// Wind speed in meters per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct MetersPerSecond(f64);

unit_arithmetic!(MetersPerSecond);

impl MetersPerSecond {
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        MetersPerSecond(value)
    }
}

impl fmt::Display for MetersPerSecond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m/s", self.0)
    }
}

/// Duration in hours (best-track fix spacing)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Hours(f64);

unit_arithmetic!(Hours);

impl Hours {
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Hours(value)
    }

    #[inline]
    #[must_use]
    pub fn to_seconds(self) -> f64 {
        self.0 * 3600.0
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} h", self.0)
    }
}
