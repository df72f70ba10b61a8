//! # Concrete and Prestressing-System Parameters
//!
//! Material inputs shared by the loss engine and the code checks. Stresses
//! are in MPa, unit weight in kN/m³. The elastic-modulus expressions are
//! the SI forms of the source code equations:
//!
//! - at transfer: `Eci = 4270·√f'ci` (MPa)
//! - at service:  `Ec  = 4700·√f'c`  (MPa, equals the 15000·√f'c kgf/cm²
//!   form of the legacy slab sheets)

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Concrete material parameters.
///
/// ## JSON Example
///
/// ```json
/// { "fci_mpa": 28.0, "fc_mpa": 35.0, "unit_weight_kn_m3": 24.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteMaterial {
    /// Compressive strength at transfer f'ci (MPa)
    pub fci_mpa: f64,
    /// Compressive strength at service f'c (MPa)
    pub fc_mpa: f64,
    /// Unit weight (kN/m³), typically 24.0
    pub unit_weight_kn_m3: f64,
}

impl ConcreteMaterial {
    /// Validate material parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.fci_mpa <= 0.0 {
            return Err(CalcError::invalid_input(
                "fci_mpa",
                self.fci_mpa,
                "transfer strength must be positive",
            ));
        }
        if self.fc_mpa <= 0.0 {
            return Err(CalcError::invalid_input(
                "fc_mpa",
                self.fc_mpa,
                "service strength must be positive",
            ));
        }
        if self.fc_mpa < self.fci_mpa {
            return Err(CalcError::invalid_input(
                "fc_mpa",
                self.fc_mpa,
                "service strength cannot be below transfer strength",
            ));
        }
        if self.unit_weight_kn_m3 <= 0.0 {
            return Err(CalcError::invalid_input(
                "unit_weight_kn_m3",
                self.unit_weight_kn_m3,
                "unit weight must be positive",
            ));
        }
        Ok(())
    }

    /// Elastic modulus at transfer, Eci = 4270·√f'ci (MPa)
    pub fn transfer_modulus_mpa(&self) -> f64 {
        4270.0 * self.fci_mpa.sqrt()
    }

    /// Elastic modulus at service, Ec = 4700·√f'c (MPa)
    pub fn service_modulus_mpa(&self) -> f64 {
        4700.0 * self.fc_mpa.sqrt()
    }
}

impl Default for ConcreteMaterial {
    fn default() -> Self {
        ConcreteMaterial {
            fci_mpa: 28.0,
            fc_mpa: 35.0,
            unit_weight_kn_m3: 24.0,
        }
    }
}

/// Prestressing-system parameters: friction, seating, and long-term
/// material coefficients.
///
/// ## JSON Example
///
/// ```json
/// {
///   "friction_mu": 0.25,
///   "wobble_k_per_m": 0.0002,
///   "anchorage_slip_mm": 6.0,
///   "creep_coefficient": 2.0,
///   "shrinkage_microstrain": 200.0,
///   "relaxation_rate_percent": 2.5
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrestressParams {
    /// Curvature friction coefficient μ (per radian)
    pub friction_mu: f64,
    /// Wobble friction coefficient K (per meter)
    pub wobble_k_per_m: f64,
    /// Anchorage wedge slip (mm)
    pub anchorage_slip_mm: f64,
    /// Creep coefficient φ
    pub creep_coefficient: f64,
    /// Ultimate shrinkage strain (×10⁻⁶)
    pub shrinkage_microstrain: f64,
    /// Steel relaxation rate (% of initial stress)
    pub relaxation_rate_percent: f64,
}

impl PrestressParams {
    /// Validate prestressing parameters. Coefficients may be zero (a stage
    /// can be switched off) but never negative.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("friction_mu", self.friction_mu),
            ("wobble_k_per_m", self.wobble_k_per_m),
            ("anchorage_slip_mm", self.anchorage_slip_mm),
            ("creep_coefficient", self.creep_coefficient),
            ("shrinkage_microstrain", self.shrinkage_microstrain),
            ("relaxation_rate_percent", self.relaxation_rate_percent),
        ];
        for (name, value) in fields {
            if value < 0.0 || !value.is_finite() {
                return Err(CalcError::invalid_input(
                    name,
                    value,
                    "must be finite and non-negative",
                ));
            }
        }
        Ok(())
    }
}

impl Default for PrestressParams {
    fn default() -> Self {
        PrestressParams {
            friction_mu: 0.25,
            wobble_k_per_m: 0.0002,
            anchorage_slip_mm: 6.0,
            creep_coefficient: 2.0,
            shrinkage_microstrain: 200.0,
            relaxation_rate_percent: 2.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_modulus() {
        let concrete = ConcreteMaterial {
            fci_mpa: 28.0,
            fc_mpa: 35.0,
            unit_weight_kn_m3: 24.0,
        };
        // 4270 * sqrt(28) = 22594
        assert!((concrete.transfer_modulus_mpa() - 22594.3).abs() < 1.0);
    }

    #[test]
    fn test_service_modulus_matches_legacy_form() {
        // 4700·√f'c MPa must equal 15000·√(f'c·10.197) kgf/cm² within a
        // fraction of a percent; both come from the same code expression.
        let concrete = ConcreteMaterial::default();
        let ec_mpa = concrete.service_modulus_mpa();
        let fc_kgf = concrete.fc_mpa * crate::units::KGF_CM2_PER_MPA;
        let ec_legacy_mpa = 15000.0 * fc_kgf.sqrt() / crate::units::KGF_CM2_PER_MPA;
        assert!((ec_mpa - ec_legacy_mpa).abs() / ec_mpa < 0.005);
    }

    #[test]
    fn test_invalid_strength_rejected() {
        let concrete = ConcreteMaterial {
            fci_mpa: 0.0,
            ..Default::default()
        };
        assert!(concrete.validate().is_err());

        let inverted = ConcreteMaterial {
            fci_mpa: 40.0,
            fc_mpa: 35.0,
            unit_weight_kn_m3: 24.0,
        };
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn test_prestress_params_validation() {
        assert!(PrestressParams::default().validate().is_ok());

        let bad = PrestressParams {
            friction_mu: -0.1,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let params = PrestressParams::default();
        let json = serde_json::to_string(&params).unwrap();
        let roundtrip: PrestressParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, roundtrip);
    }
}
