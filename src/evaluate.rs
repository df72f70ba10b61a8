//! # Evaluation Pipelines
//!
//! Top-level drivers that run the full calculation chain for one member
//! and assemble a serializable report:
//!
//! Girder: geometry → section properties → tendon layout → loss history →
//! stress, flexure, deflection and shear checks.
//!
//! Slab deck: geometry → section properties → load derivation →
//! user-entered loss summary → the same four checks.
//!
//! Any stage error is terminal; it is forwarded unchanged and no partial
//! report is produced.

use serde::{Deserialize, Serialize};

use crate::checks::{
    check_deflection, check_shear, check_stresses, solve_flexure, DeflectionInput,
    DeflectionResult, FlexuralResult, FlexureInput, ShearInput, ShearResult, StirrupConfig,
    StressCheckInput, StressState,
};
use crate::errors::{CalcError, CalcResult};
use crate::geometry::{GirderGeometry, SlabGeometry};
use crate::loads::{derive_slab_loads, SlabLoadInput, SlabLoads};
use crate::losses::{
    compute_losses, summarize_slab_losses, LossInput, LossOutput, SlabLossInput, SlabLossSummary,
};
use crate::material::{ConcreteMaterial, PrestressParams};
use crate::section::{girder_section_properties, slab_section_properties, SectionProperties};
use crate::tendons::{slab_tendon_layout, StrandType, TendonType};
use crate::units::{Meters, Millimeters};

/// Complete input for a girder evaluation.
///
/// The superimposed dead-load and live-load moments and the factored
/// shear are direct design inputs for the girder; only the slab deck
/// derives its loads internally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GirderInput {
    pub geometry: GirderGeometry,
    pub concrete: ConcreteMaterial,
    pub prestress: PrestressParams,
    /// Simple span (m)
    pub span_m: f64,
    pub tendon_type: TendonType,
    pub tendon_count: u32,
    /// Jacking force per tendon override (kN); `None` uses the catalog
    pub jacking_force_kn: Option<f64>,
    /// Superimposed dead-load moment at mid-span (kN·m)
    pub moment_superimposed_kn_m: f64,
    /// Live-load moment at mid-span, impact included (kN·m)
    pub moment_live_kn_m: f64,
    /// Factored design shear at the critical section (kN)
    pub factored_shear_kn: f64,
    pub stirrups: StirrupConfig,
    /// Optional elevated-allowable factor for the service-total stage
    pub overstress_factor: Option<f64>,
    pub has_sidewalk: bool,
}

impl Default for GirderInput {
    fn default() -> Self {
        GirderInput {
            geometry: GirderGeometry::default(),
            concrete: ConcreteMaterial::default(),
            prestress: PrestressParams::default(),
            span_m: 30.0,
            tendon_type: TendonType::T12S12_7B,
            tendon_count: 4,
            jacking_force_kn: None,
            moment_superimposed_kn_m: 600.0,
            moment_live_kn_m: 1400.0,
            factored_shear_kn: 900.0,
            stirrups: StirrupConfig {
                size: crate::checks::RebarSize::D13,
                legs: 2,
                spacing_mm: 150.0,
                yield_mpa: None,
            },
            overstress_factor: None,
            has_sidewalk: false,
        }
    }
}

/// Full girder evaluation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GirderReport {
    pub section: SectionProperties,
    pub losses: LossOutput,
    pub stresses: Vec<StressState>,
    pub flexure: FlexuralResult,
    pub deflection: DeflectionResult,
    pub shear: ShearResult,
    /// All checks pass
    pub pass: bool,
}

/// Run the complete girder pipeline.
pub fn evaluate_girder(input: &GirderInput) -> CalcResult<GirderReport> {
    let section = girder_section_properties(&input.geometry)?;

    let losses = compute_losses(
        &LossInput {
            span_m: input.span_m,
            tendon_type: input.tendon_type,
            tendon_count: input.tendon_count,
            jacking_force_kn: input.jacking_force_kn,
            concrete: input.concrete,
            prestress: input.prestress,
        },
        &section,
    )?;

    let stresses = check_stresses(
        &StressCheckInput {
            concrete: input.concrete,
            transfer_force_kn: losses.force_after_immediate_kn,
            effective_force_kn: losses.summary.effective_force_kn,
            eccentricity_m: losses.eccentricity_m,
            moment_self_weight_kn_m: losses.self_weight_moment_kn_m,
            moment_superimposed_kn_m: input.moment_superimposed_kn_m,
            moment_live_kn_m: input.moment_live_kn_m,
            overstress_factor: input.overstress_factor,
        },
        &section,
    )?;

    let entry = input.tendon_type.properties();
    // dp measured from the top fiber to the tendon centroid
    let dp_m = section.height_m - (section.centroid_from_bottom_m - losses.eccentricity_m);
    let flexure = solve_flexure(&FlexureInput {
        fc_mpa: input.concrete.fc_mpa,
        fpu_mpa: entry.fpu_mpa,
        aps_mm2: entry.area_mm2 * input.tendon_count as f64,
        dp_m,
        flange_width_m: Meters::from(Millimeters(input.geometry.top_flange_width_mm)).value(),
        flange_thickness_m: Meters::from(Millimeters(input.geometry.top_flange_thickness_mm))
            .value(),
        web_width_m: Meters::from(Millimeters(input.geometry.web_width_mm)).value(),
        moment_dead_kn_m: losses.self_weight_moment_kn_m + input.moment_superimposed_kn_m,
        moment_live_kn_m: input.moment_live_kn_m,
    })?;

    let deflection = check_deflection(&DeflectionInput {
        span_m: input.span_m,
        moment_live_kn_m: input.moment_live_kn_m,
        concrete: input.concrete,
        moment_of_inertia_m4: section.moment_of_inertia_m4,
        has_sidewalk: input.has_sidewalk,
    })?;

    let shear = check_shear(&ShearInput {
        fc_mpa: input.concrete.fc_mpa,
        web_width_m: Meters::from(Millimeters(input.geometry.web_width_mm)).value(),
        overall_height_m: section.height_m,
        factored_shear_kn: input.factored_shear_kn,
        stirrups: input.stirrups,
    })?;

    let pass = losses.steel_checks.iter().all(|c| c.pass)
        && stresses.iter().all(|s| s.pass())
        && flexure.pass
        && deflection.pass
        && shear.pass;

    Ok(GirderReport {
        section,
        losses,
        stresses,
        flexure,
        deflection,
        shear,
        pass,
    })
}

/// Complete input for a slab-deck evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlabInput {
    pub geometry: SlabGeometry,
    pub concrete: ConcreteMaterial,
    pub loads: SlabLoadInput,
    pub strand_type: StrandType,
    /// Strands per tendon
    pub strands_per_tendon: u32,
    /// Jacking stress override (MPa); `None` uses 0.737·fpu
    pub jacking_stress_mpa: Option<f64>,
    /// User-entered per-stage stress losses (MPa)
    pub losses: SlabLossInput,
    pub stirrups: StirrupConfig,
    pub overstress_factor: Option<f64>,
    pub has_sidewalk: bool,
}

/// Full slab-deck evaluation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabReport {
    pub section: SectionProperties,
    pub loads: SlabLoads,
    pub loss_summary: SlabLossSummary,
    /// Tendon count, duct count + 1
    pub tendon_count: u32,
    /// Effective prestress force for the service stages (kN)
    pub effective_force_kn: f64,
    pub stresses: Vec<StressState>,
    pub flexure: FlexuralResult,
    pub deflection: DeflectionResult,
    pub shear: ShearResult,
    pub pass: bool,
}

/// Run the complete slab-deck pipeline.
pub fn evaluate_slab(input: &SlabInput) -> CalcResult<SlabReport> {
    let section = slab_section_properties(&input.geometry)?;
    let layout = slab_tendon_layout(&input.geometry)?;

    if input.strands_per_tendon == 0 {
        return Err(CalcError::invalid_input(
            "strands_per_tendon",
            0.0,
            "tendons need at least one strand",
        ));
    }

    let loads = derive_slab_loads(&input.loads, &input.geometry, &input.concrete, &section)?;

    let jacking_stress = input
        .jacking_stress_mpa
        .unwrap_or_else(|| input.strand_type.default_jacking_stress_mpa());
    let loss_summary = summarize_slab_losses(jacking_stress, &input.losses)?;

    let tendon_count = layout.count();
    let aps_mm2 =
        input.strand_type.area_mm2() * input.strands_per_tendon as f64 * tendon_count as f64;
    // N/mm² · mm² = N, /1000 to kN
    let effective_force_kn = loss_summary.effective_stress_mpa * aps_mm2 / 1000.0;
    let transfer_force_kn = loss_summary.construction_stress_mpa * aps_mm2 / 1000.0;

    let eccentricity_m = section.centroid_from_bottom_m - layout.mean_mid_elevation_m();
    let stresses = check_stresses(
        &StressCheckInput {
            concrete: input.concrete,
            transfer_force_kn,
            effective_force_kn,
            eccentricity_m,
            moment_self_weight_kn_m: loads.moment_self_weight_kn_m,
            moment_superimposed_kn_m: loads.moment_superimposed_kn_m,
            moment_live_kn_m: loads.moment_live_kn_m,
            overstress_factor: input.overstress_factor,
        },
        &section,
    )?;

    // Rectangular compression zone: the full slab width is available and
    // the stress block never leaves the section.
    let slab_width_m = Meters::from(Millimeters(input.geometry.slab_width_mm())).value();
    let height_m = section.height_m;
    let flexure = solve_flexure(&FlexureInput {
        fc_mpa: input.concrete.fc_mpa,
        fpu_mpa: input.strand_type.fpu_mpa(),
        aps_mm2,
        dp_m: height_m - layout.mean_mid_elevation_m(),
        flange_width_m: slab_width_m,
        flange_thickness_m: height_m,
        web_width_m: slab_width_m,
        moment_dead_kn_m: loads.moment_dead_total_kn_m,
        moment_live_kn_m: loads.moment_live_kn_m,
    })?;

    let deflection = check_deflection(&DeflectionInput {
        span_m: input.loads.span_m,
        moment_live_kn_m: loads.moment_live_kn_m,
        concrete: input.concrete,
        moment_of_inertia_m4: section.moment_of_inertia_m4,
        has_sidewalk: input.has_sidewalk,
    })?;

    let shear = check_shear(&ShearInput {
        fc_mpa: input.concrete.fc_mpa,
        web_width_m: Meters::from(Millimeters(input.geometry.deck_width_mm())).value(),
        overall_height_m: height_m,
        factored_shear_kn: loads.factored_shear_kn,
        stirrups: input.stirrups,
    })?;

    let pass = stresses.iter().all(|s| s.pass())
        && flexure.pass
        && deflection.pass
        && shear.pass;

    Ok(SlabReport {
        section,
        loads,
        loss_summary,
        tendon_count,
        effective_force_kn,
        stresses,
        flexure,
        deflection,
        shear,
        pass,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::RebarSize;

    fn standard_slab_input() -> SlabInput {
        SlabInput {
            geometry: SlabGeometry::default(),
            concrete: ConcreteMaterial::default(),
            loads: SlabLoadInput::default(),
            strand_type: StrandType::Swpr7bl12_7,
            strands_per_tendon: 12,
            jacking_stress_mpa: None,
            losses: SlabLossInput {
                friction_mpa: 60.0,
                anchorage_mpa: 45.0,
                elastic_shortening_mpa: 20.0,
                shrinkage_mpa: 40.0,
                creep_mpa: 55.0,
                relaxation_mpa: 30.0,
            },
            stirrups: StirrupConfig {
                size: RebarSize::D13,
                legs: 12,
                spacing_mm: 200.0,
                yield_mpa: None,
            },
            overstress_factor: None,
            has_sidewalk: false,
        }
    }

    #[test]
    fn test_girder_pipeline_runs() {
        let report = evaluate_girder(&GirderInput::default()).unwrap();
        assert_eq!(report.stresses.len(), 3);
        assert_eq!(report.losses.records.len(), 4);
        assert!(report.flexure.converged);
        assert!(report.section.gross_area_m2 > 0.0);
    }

    #[test]
    fn test_girder_error_propagates_from_geometry() {
        let mut input = GirderInput::default();
        input.geometry.web_width_mm = 0.0;
        let err = evaluate_girder(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_girder_error_propagates_from_layout() {
        let mut input = GirderInput::default();
        input.tendon_count = 9;
        let err = evaluate_girder(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_TENDON_SELECTION");
    }

    #[test]
    fn test_girder_deterministic() {
        let a = evaluate_girder(&GirderInput::default()).unwrap();
        let b = evaluate_girder(&GirderInput::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_slab_pipeline_runs() {
        let report = evaluate_slab(&standard_slab_input()).unwrap();
        // 5 ducts make 6 tendons
        assert_eq!(report.tendon_count, 6);
        assert_eq!(report.stresses.len(), 3);
        assert!(report.flexure.converged);
        assert!(report.effective_force_kn > 0.0);
    }

    #[test]
    fn test_slab_effective_force_from_stress() {
        let input = standard_slab_input();
        let report = evaluate_slab(&input).unwrap();
        let aps = 98.71 * 12.0 * 6.0;
        let expected = report.loss_summary.effective_stress_mpa * aps / 1000.0;
        assert!((report.effective_force_kn - expected).abs() < 1e-9);
    }

    #[test]
    fn test_slab_zero_strands_rejected() {
        let mut input = standard_slab_input();
        input.strands_per_tendon = 0;
        assert!(evaluate_slab(&input).is_err());
    }

    #[test]
    fn test_report_serialization_roundtrip() {
        let report = evaluate_girder(&GirderInput::default()).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let roundtrip: GirderReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, roundtrip);

        let report = evaluate_slab(&standard_slab_input()).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let roundtrip: SlabReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, roundtrip);
    }
}
