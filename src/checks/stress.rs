//! # Fiber Stress Checks
//!
//! Superimposes the prestress and bending stresses at the extreme fibers
//! for three load stages and compares each against its allowable limits.
//!
//! Sign convention: compression positive, tension negative. A fiber
//! passes when `−allowable_tension ≤ f ≤ allowable_compression`, both
//! boundaries inclusive.
//!
//! Stages and limits:
//!
//! | stage        | prestress force          | moments                | compression | tension      |
//! |--------------|--------------------------|------------------------|-------------|--------------|
//! | Transfer     | after immediate losses   | self weight            | 0.6·f'ci    | 0.8·√f'ci    |
//! | ServiceDead  | effective (all losses)   | self wt + superimposed | 0.4·f'c     | 0.8·√f'c     |
//! | ServiceTotal | effective (all losses)   | + live (with impact)   | 0.6·f'c     | 0.8·√f'c     |
//!
//! The ServiceTotal limits accept an optional overstress factor for load
//! combinations that permit elevated allowables.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::material::ConcreteMaterial;
use crate::section::SectionProperties;

/// Load stage for the staged stress check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStage {
    /// Immediately after transfer, before long-term losses
    Transfer,
    /// Effective prestress + all dead load
    ServiceDead,
    /// Effective prestress + dead + live load
    ServiceTotal,
}

impl LoadStage {
    /// All stages in check order
    pub const ALL: [LoadStage; 3] = [
        LoadStage::Transfer,
        LoadStage::ServiceDead,
        LoadStage::ServiceTotal,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            LoadStage::Transfer => "Transfer",
            LoadStage::ServiceDead => "Service (dead load)",
            LoadStage::ServiceTotal => "Service (total load)",
        }
    }
}

/// Allowable stress pair for one stage (MPa, both stored positive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllowableStresses {
    pub compression_mpa: f64,
    pub tension_mpa: f64,
}

impl AllowableStresses {
    /// Stage allowables from the concrete strengths. `overstress_factor`
    /// scales the ServiceTotal limits only.
    pub fn for_stage(
        stage: LoadStage,
        concrete: &ConcreteMaterial,
        overstress_factor: Option<f64>,
    ) -> CalcResult<AllowableStresses> {
        concrete.validate()?;
        if let Some(factor) = overstress_factor {
            if !factor.is_finite() || factor < 1.0 {
                return Err(CalcError::invalid_input(
                    "overstress_factor",
                    factor,
                    "overstress factor must be at least 1.0",
                ));
            }
        }
        Ok(match stage {
            LoadStage::Transfer => AllowableStresses {
                compression_mpa: 0.6 * concrete.fci_mpa,
                tension_mpa: 0.8 * concrete.fci_mpa.sqrt(),
            },
            LoadStage::ServiceDead => AllowableStresses {
                compression_mpa: 0.4 * concrete.fc_mpa,
                tension_mpa: 0.8 * concrete.fc_mpa.sqrt(),
            },
            LoadStage::ServiceTotal => {
                let factor = overstress_factor.unwrap_or(1.0);
                AllowableStresses {
                    compression_mpa: 0.6 * concrete.fc_mpa * factor,
                    tension_mpa: 0.8 * concrete.fc_mpa.sqrt() * factor,
                }
            }
        })
    }
}

/// A fiber stress passes when it lies between the tension and compression
/// limits, boundaries inclusive.
pub fn stress_within_limits(stress_mpa: f64, allowables: &AllowableStresses) -> bool {
    stress_mpa >= -allowables.tension_mpa && stress_mpa <= allowables.compression_mpa
}

/// Forces and moments feeding the staged stress check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressCheckInput {
    pub concrete: ConcreteMaterial,
    /// Prestress force after immediate losses, used at Transfer (kN)
    pub transfer_force_kn: f64,
    /// Prestress force after all losses, used at service stages (kN)
    pub effective_force_kn: f64,
    /// Tendon-group eccentricity below the centroid (m)
    pub eccentricity_m: f64,
    /// Mid-span self-weight moment (kN·m)
    pub moment_self_weight_kn_m: f64,
    /// Mid-span superimposed dead-load moment (kN·m)
    pub moment_superimposed_kn_m: f64,
    /// Mid-span live-load moment, impact included (kN·m)
    pub moment_live_kn_m: f64,
    /// Optional elevated-allowable factor for the ServiceTotal stage
    pub overstress_factor: Option<f64>,
}

impl StressCheckInput {
    pub fn validate(&self) -> CalcResult<()> {
        self.concrete.validate()?;
        let forces = [
            ("transfer_force_kn", self.transfer_force_kn),
            ("effective_force_kn", self.effective_force_kn),
        ];
        for (name, value) in forces {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    name,
                    value,
                    "prestress force must be positive",
                ));
            }
        }
        let moments = [
            ("moment_self_weight_kn_m", self.moment_self_weight_kn_m),
            ("moment_superimposed_kn_m", self.moment_superimposed_kn_m),
            ("moment_live_kn_m", self.moment_live_kn_m),
        ];
        for (name, value) in moments {
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::invalid_input(
                    name,
                    value,
                    "moment must be a non-negative finite number",
                ));
            }
        }
        if !self.eccentricity_m.is_finite() {
            return Err(CalcError::invalid_input(
                "eccentricity_m",
                self.eccentricity_m,
                "eccentricity must be finite",
            ));
        }
        Ok(())
    }
}

/// Fiber stresses and verdict for one load stage (MPa, compression
/// positive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressState {
    pub stage: LoadStage,
    pub top_fiber_mpa: f64,
    pub bottom_fiber_mpa: f64,
    pub allowable_compression_mpa: f64,
    pub allowable_tension_mpa: f64,
    pub top_pass: bool,
    pub bottom_pass: bool,
}

impl StressState {
    pub fn pass(&self) -> bool {
        self.top_pass && self.bottom_pass
    }
}

/// Run all three stages. Returns one `StressState` per stage, in
/// [`LoadStage::ALL`] order.
pub fn check_stresses(
    input: &StressCheckInput,
    section: &SectionProperties,
) -> CalcResult<Vec<StressState>> {
    input.validate()?;
    if section.net_area_m2 <= 0.0
        || section.section_modulus_top_m3 <= 0.0
        || section.section_modulus_bottom_m3 <= 0.0
    {
        return Err(CalcError::invalid_input(
            "section",
            section.net_area_m2,
            "section area and moduli must be positive",
        ));
    }

    let mut states = Vec::with_capacity(LoadStage::ALL.len());
    for stage in LoadStage::ALL {
        let (force, moment) = match stage {
            LoadStage::Transfer => (input.transfer_force_kn, input.moment_self_weight_kn_m),
            LoadStage::ServiceDead => (
                input.effective_force_kn,
                input.moment_self_weight_kn_m + input.moment_superimposed_kn_m,
            ),
            LoadStage::ServiceTotal => (
                input.effective_force_kn,
                input.moment_self_weight_kn_m
                    + input.moment_superimposed_kn_m
                    + input.moment_live_kn_m,
            ),
        };
        let allowables =
            AllowableStresses::for_stage(stage, &input.concrete, input.overstress_factor)?;
        let state = fiber_stresses(force, input.eccentricity_m, moment, section, stage, allowables);
        states.push(state);
    }
    Ok(states)
}

/// `P/A ∓ P·e/S ± M/S` at both fibers, kN and m in, MPa out.
fn fiber_stresses(
    force_kn: f64,
    eccentricity_m: f64,
    moment_kn_m: f64,
    section: &SectionProperties,
    stage: LoadStage,
    allowables: AllowableStresses,
) -> StressState {
    let axial_kpa = force_kn / section.net_area_m2;
    let prestress_moment = force_kn * eccentricity_m;

    let top_kpa = axial_kpa - prestress_moment / section.section_modulus_top_m3
        + moment_kn_m / section.section_modulus_top_m3;
    let bottom_kpa = axial_kpa + prestress_moment / section.section_modulus_bottom_m3
        - moment_kn_m / section.section_modulus_bottom_m3;

    let top_mpa = top_kpa / 1000.0;
    let bottom_mpa = bottom_kpa / 1000.0;

    StressState {
        stage,
        top_fiber_mpa: top_mpa,
        bottom_fiber_mpa: bottom_mpa,
        allowable_compression_mpa: allowables.compression_mpa,
        allowable_tension_mpa: allowables.tension_mpa,
        top_pass: stress_within_limits(top_mpa, &allowables),
        bottom_pass: stress_within_limits(bottom_mpa, &allowables),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GirderGeometry;
    use crate::section::girder_section_properties;

    fn standard_input() -> StressCheckInput {
        StressCheckInput {
            concrete: ConcreteMaterial::default(),
            transfer_force_kn: 5400.0,
            effective_force_kn: 4800.0,
            eccentricity_m: 0.55,
            moment_self_weight_kn_m: 1800.0,
            moment_superimposed_kn_m: 600.0,
            moment_live_kn_m: 1400.0,
            overstress_factor: None,
        }
    }

    fn standard_section() -> SectionProperties {
        girder_section_properties(&GirderGeometry::default()).unwrap()
    }

    #[test]
    fn test_three_stages_in_order() {
        let states = check_stresses(&standard_input(), &standard_section()).unwrap();
        assert_eq!(states.len(), 3);
        assert_eq!(states[0].stage, LoadStage::Transfer);
        assert_eq!(states[1].stage, LoadStage::ServiceDead);
        assert_eq!(states[2].stage, LoadStage::ServiceTotal);
    }

    #[test]
    fn test_inclusive_boundaries() {
        let allowables = AllowableStresses {
            compression_mpa: 21.0,
            tension_mpa: 4.7,
        };
        assert!(stress_within_limits(21.0, &allowables));
        assert!(stress_within_limits(-4.7, &allowables));
        assert!(stress_within_limits(0.0, &allowables));
        assert!(!stress_within_limits(21.0 + 1e-9, &allowables));
        assert!(!stress_within_limits(-4.7 - 1e-9, &allowables));
    }

    #[test]
    fn test_transfer_limits_use_fci() {
        let concrete = ConcreteMaterial::default();
        let a = AllowableStresses::for_stage(LoadStage::Transfer, &concrete, None).unwrap();
        assert!((a.compression_mpa - 0.6 * 28.0).abs() < 1e-12);
        assert!((a.tension_mpa - 0.8 * 28.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_service_total_overstress_scales_limits() {
        let concrete = ConcreteMaterial::default();
        let base =
            AllowableStresses::for_stage(LoadStage::ServiceTotal, &concrete, None).unwrap();
        let raised =
            AllowableStresses::for_stage(LoadStage::ServiceTotal, &concrete, Some(1.25)).unwrap();
        assert!((raised.compression_mpa - base.compression_mpa * 1.25).abs() < 1e-12);
        assert!((raised.tension_mpa - base.tension_mpa * 1.25).abs() < 1e-12);

        // the factor must not touch the other stages
        let dead =
            AllowableStresses::for_stage(LoadStage::ServiceDead, &concrete, Some(1.25)).unwrap();
        assert!((dead.compression_mpa - 0.4 * 35.0).abs() < 1e-12);
    }

    #[test]
    fn test_overstress_below_one_rejected() {
        let concrete = ConcreteMaterial::default();
        let err =
            AllowableStresses::for_stage(LoadStage::ServiceTotal, &concrete, Some(0.9)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_prestress_compresses_bottom_fiber() {
        // with no applied moment the bottom fiber carries P/A + P·e/S
        let mut input = standard_input();
        input.moment_self_weight_kn_m = 0.0;
        input.moment_superimposed_kn_m = 0.0;
        input.moment_live_kn_m = 0.0;
        let states = check_stresses(&input, &standard_section()).unwrap();
        let transfer = &states[0];
        assert!(transfer.bottom_fiber_mpa > transfer.top_fiber_mpa);
        assert!(transfer.bottom_fiber_mpa > 0.0);
    }

    #[test]
    fn test_moments_relieve_bottom_fiber() {
        let section = standard_section();
        let base = check_stresses(&standard_input(), &section).unwrap();
        let mut more_live = standard_input();
        more_live.moment_live_kn_m += 500.0;
        let loaded = check_stresses(&more_live, &section).unwrap();
        assert!(loaded[2].bottom_fiber_mpa < base[2].bottom_fiber_mpa);
        assert!(loaded[2].top_fiber_mpa > base[2].top_fiber_mpa);
    }

    #[test]
    fn test_negative_force_rejected() {
        let mut input = standard_input();
        input.effective_force_kn = -100.0;
        let err = check_stresses(&input, &standard_section()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_stage_serialization() {
        let json = serde_json::to_string(&LoadStage::ServiceTotal).unwrap();
        assert_eq!(json, "\"service_total\"");
        let states = check_stresses(&standard_input(), &standard_section()).unwrap();
        let json = serde_json::to_string(&states).unwrap();
        let roundtrip: Vec<StressState> = serde_json::from_str(&json).unwrap();
        assert_eq!(states, roundtrip);
    }
}
