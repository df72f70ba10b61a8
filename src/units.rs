//! # Unit Types
//!
//! Lightweight newtype wrappers for the engineering units that cross the
//! crate boundary. Internally the engine works in one consistent SI
//! system (meters, kilonewtons, megapascals). External units from the
//! legacy input sheets (millimeter dimensions, kgf/cm² stresses,
//! tonne-force loads) are converted through the types and constants in
//! this module, never in the middle of a formula.
//!
//! ## Design Philosophy
//!
//! Simple `f64` newtypes instead of a full units library:
//! - the engine uses a small, fixed set of units
//! - JSON serialization stays clean (just numbers)
//! - zero runtime overhead
//!
//! ## Example
//!
//! ```rust
//! use girder_core::units::{Meters, Millimeters, KgfPerCm2, MegaPascals};
//!
//! let web: Meters = Millimeters(200.0).into();
//! assert_eq!(web.0, 0.2);
//!
//! let fc: MegaPascals = KgfPerCm2(280.0).into();
//! assert!((fc.0 - 27.46).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// kgf/cm² per MPa (1 MPa = 10.19716 kgf/cm²)
pub const KGF_CM2_PER_MPA: f64 = 10.197_16;

/// kN per tonne-force (1 tf = 9.80665 kN)
pub const KN_PER_TF: f64 = 9.806_65;

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters (external section dimensions)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in meters (internal)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in megapascals (internal)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaPascals(pub f64);

/// Stress in kgf/cm² (legacy slab-deck material sheets)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgfPerCm2(pub f64);

impl From<KgfPerCm2> for MegaPascals {
    fn from(kgf: KgfPerCm2) -> Self {
        MegaPascals(kgf.0 / KGF_CM2_PER_MPA)
    }
}

impl From<MegaPascals> for KgfPerCm2 {
    fn from(mpa: MegaPascals) -> Self {
        KgfPerCm2(mpa.0 * KGF_CM2_PER_MPA)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square millimeters (tendon steel areas)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMillimeters(pub f64);

/// Area in square meters (internal)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

impl From<SquareMillimeters> for SquareMeters {
    fn from(mm2: SquareMillimeters) -> Self {
        SquareMeters(mm2.0 / 1.0e6)
    }
}

impl From<SquareMeters> for SquareMillimeters {
    fn from(m2: SquareMeters) -> Self {
        SquareMillimeters(m2.0 * 1.0e6)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(MegaPascals);
impl_arithmetic!(KgfPerCm2);
impl_arithmetic!(SquareMillimeters);
impl_arithmetic!(SquareMeters);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_meters() {
        let mm = Millimeters(1700.0);
        let m: Meters = mm.into();
        assert_eq!(m.0, 1.7);
    }

    #[test]
    fn test_kgf_cm2_to_mpa() {
        let fc: MegaPascals = KgfPerCm2(280.0).into();
        assert!((fc.0 - 27.458).abs() < 0.01);

        let back: KgfPerCm2 = fc.into();
        assert!((back.0 - 280.0).abs() < 1e-9);
    }

    #[test]
    fn test_tf_to_kn_constant() {
        assert!((KN_PER_TF - 9.80665).abs() < 1e-9);
    }

    #[test]
    fn test_mm2_to_m2() {
        let area: SquareMeters = SquareMillimeters(1184.4).into();
        assert!((area.0 - 1.1844e-3).abs() < 1e-15);

        let back: SquareMillimeters = area.into();
        assert!((back.0 - 1184.4).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(10.0);
        let b = Meters(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let m = Meters(30.0);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "30.0");

        let roundtrip: Meters = serde_json::from_str(&json).unwrap();
        assert_eq!(m, roundtrip);
    }
}
