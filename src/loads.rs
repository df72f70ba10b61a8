//! # Slab-Deck Load Derivation
//!
//! Derives the mid-span design moments and the critical-section design
//! shear for a simply supported voided slab deck:
//!
//! - dead load from the section areas (solid end zones use the gross
//!   area, the voided interior the net area) plus asphalt overlay,
//!   pipeline and railing line loads
//! - live load as the envelope of the design-truck and the lane loading,
//!   amplified by impact, overload, lane-reduction and lane-count factors
//! - shear evaluated at `h/2` from the support face, factored as
//!   `Vu = 1.3·V_dead + 1.67·V_LL`
//!
//! All outputs in kN and kN·m. The legacy tonne-force live-load constants
//! are converted at their definition sites below.
//!
//! Girder live/dead moments are direct user inputs and do not pass
//! through this module.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::geometry::SlabGeometry;
use crate::material::ConcreteMaterial;
use crate::section::SectionProperties;
use crate::units::{Meters, Millimeters, KN_PER_TF};

/// Lane loading UDL, 0.960 tf/m (kN/m)
const LANE_UDL_KN_PER_M: f64 = 0.960 * KN_PER_TF;
/// Lane loading knife load for moment, 8.2 tf (kN)
const LANE_KNIFE_MOMENT_KN: f64 = 8.2 * KN_PER_TF;
/// Lane loading knife load for shear, 11.8 tf (kN)
const LANE_KNIFE_SHEAR_KN: f64 = 11.8 * KN_PER_TF;
/// Design-truck mid-span moment envelope slope, 8.2125 tf (kN)
const TRUCK_MOMENT_SLOPE_KN: f64 = 8.2125 * KN_PER_TF;
/// Design-truck mid-span moment envelope intercept, 38.78125 tf·m (kN·m)
const TRUCK_MOMENT_INTERCEPT_KN_M: f64 = 38.78125 * KN_PER_TF;
/// Design-truck heavy axle, 14.6 tf (kN)
const TRUCK_AXLE_HEAVY_KN: f64 = 14.6 * KN_PER_TF;
/// Design-truck light axle, 3.65 tf (kN)
const TRUCK_AXLE_LIGHT_KN: f64 = 3.65 * KN_PER_TF;
/// Axle spacings behind the lead axle (m)
const TRUCK_AXLE_OFFSET_1_M: f64 = 4.25;
const TRUCK_AXLE_OFFSET_2_M: f64 = 8.5;

/// Load parameters for the slab deck.
///
/// ## JSON Example
///
/// ```json
/// {
///   "span_m": 25.0,
///   "solid_zone_start_m": 1.0,
///   "solid_zone_end_m": 1.0,
///   "asphalt_thickness_mm": 50.0,
///   "asphalt_unit_weight_kn_m3": 22.6,
///   "pipeline_load_kn_m": 0.5,
///   "railing_load_kn_m": 1.0,
///   "impact_factor_user": 0.3,
///   "overload_factor": 0.0,
///   "lane_reduction_factor": 1.0,
///   "num_lanes": 2
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlabLoadInput {
    /// Simple span (m)
    pub span_m: f64,
    /// Solid (unvoided) zone length at the start support (m)
    pub solid_zone_start_m: f64,
    /// Solid zone length at the end support (m)
    pub solid_zone_end_m: f64,
    /// Asphalt overlay thickness (mm)
    pub asphalt_thickness_mm: f64,
    /// Asphalt unit weight (kN/m³)
    pub asphalt_unit_weight_kn_m3: f64,
    /// Pipeline/utility line load (kN/m)
    pub pipeline_load_kn_m: f64,
    /// Railing line load (kN/m)
    pub railing_load_kn_m: f64,
    /// User impact factor ceiling; the applied factor is
    /// min(user, 15.24/(L + 38.1))
    pub impact_factor_user: f64,
    /// Overload allowance, applied as (1 + factor)
    pub overload_factor: f64,
    /// Multi-lane reduction factor
    pub lane_reduction_factor: f64,
    /// Number of design lanes
    pub num_lanes: u32,
}

impl Default for SlabLoadInput {
    fn default() -> Self {
        SlabLoadInput {
            span_m: 25.0,
            solid_zone_start_m: 1.0,
            solid_zone_end_m: 1.0,
            asphalt_thickness_mm: 50.0,
            asphalt_unit_weight_kn_m3: 22.6,
            pipeline_load_kn_m: 0.5,
            railing_load_kn_m: 1.0,
            impact_factor_user: 0.3,
            overload_factor: 0.0,
            lane_reduction_factor: 1.0,
            num_lanes: 2,
        }
    }
}

impl SlabLoadInput {
    pub fn validate(&self) -> CalcResult<()> {
        if !self.span_m.is_finite() || self.span_m <= 0.0 {
            return Err(CalcError::degenerate_span(
                self.span_m,
                "load derivation needs a positive span",
            ));
        }
        if self.solid_zone_start_m < 0.0 || self.solid_zone_end_m < 0.0 {
            return Err(CalcError::invalid_input(
                "solid_zone_m",
                self.solid_zone_start_m.min(self.solid_zone_end_m),
                "solid end-zone lengths cannot be negative",
            ));
        }
        if self.solid_zone_start_m + self.solid_zone_end_m > self.span_m {
            return Err(CalcError::invalid_input(
                "solid_zone_m",
                self.solid_zone_start_m + self.solid_zone_end_m,
                "solid end zones cannot exceed the span",
            ));
        }
        let non_negative = [
            ("asphalt_thickness_mm", self.asphalt_thickness_mm),
            ("asphalt_unit_weight_kn_m3", self.asphalt_unit_weight_kn_m3),
            ("pipeline_load_kn_m", self.pipeline_load_kn_m),
            ("railing_load_kn_m", self.railing_load_kn_m),
            ("impact_factor_user", self.impact_factor_user),
            ("overload_factor", self.overload_factor),
            ("lane_reduction_factor", self.lane_reduction_factor),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::invalid_input(
                    name,
                    value,
                    "must be a non-negative finite number",
                ));
            }
        }
        Ok(())
    }
}

/// Derived slab-deck loads. Moments in kN·m, shears in kN, line loads in
/// kN/m.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlabLoads {
    /// Self weight per metre, averaged over solid and voided zones (kN/m)
    pub self_weight_kn_per_m: f64,
    /// Asphalt overlay weight (kN/m)
    pub asphalt_weight_kn_per_m: f64,
    /// Asphalt + pipeline + railing (kN/m)
    pub superimposed_dead_kn_per_m: f64,
    /// Mid-span self-weight moment (kN·m)
    pub moment_self_weight_kn_m: f64,
    /// Mid-span superimposed-dead moment (kN·m)
    pub moment_superimposed_kn_m: f64,
    /// Total dead-load moment (kN·m)
    pub moment_dead_total_kn_m: f64,
    /// Truck-envelope mid-span moment, one lane, unfactored (kN·m)
    pub moment_truck_kn_m: f64,
    /// Lane-loading mid-span moment, one lane, unfactored (kN·m)
    pub moment_lane_kn_m: f64,
    /// Applied impact factor, min(user, 15.24/(L + 38.1))
    pub impact_factor: f64,
    /// Governing live-load moment after all amplification factors (kN·m)
    pub moment_live_kn_m: f64,
    /// Critical shear section distance from the support, h/2 (m)
    pub shear_section_m: f64,
    /// Dead-load shear at the critical section (kN)
    pub shear_dead_kn: f64,
    /// Truck live-load shear, one lane, unfactored (kN)
    pub shear_truck_kn: f64,
    /// Lane live-load shear, one lane, unfactored (kN)
    pub shear_lane_kn: f64,
    /// Governing live-load shear after all amplification factors (kN)
    pub shear_live_kn: f64,
    /// Factored design shear, 1.3·V_dead + 1.67·V_LL (kN)
    pub factored_shear_kn: f64,
}

/// Derive the slab-deck design loads from the geometry and section
/// properties.
pub fn derive_slab_loads(
    input: &SlabLoadInput,
    geometry: &SlabGeometry,
    concrete: &ConcreteMaterial,
    section: &SectionProperties,
) -> CalcResult<SlabLoads> {
    input.validate()?;
    geometry.validate()?;
    concrete.validate()?;
    if section.net_area_m2 <= 0.0 {
        return Err(CalcError::invalid_input(
            "section",
            section.net_area_m2,
            "section area must be positive",
        ));
    }

    let span = input.span_m;
    let solid_length = input.solid_zone_start_m + input.solid_zone_end_m;
    let voided_length = span - solid_length;

    // Dead load. Solid end zones weigh in at the gross area, the voided
    // interior at the net area; the average line load spreads the total
    // over the span.
    let total_weight = (section.net_area_m2 * voided_length
        + section.gross_area_m2 * solid_length)
        * concrete.unit_weight_kn_m3;
    let self_weight = total_weight / span;

    let deck_width_m = Meters::from(Millimeters(geometry.deck_width_mm())).value();
    let asphalt_thickness_m = Meters::from(Millimeters(input.asphalt_thickness_mm)).value();
    let asphalt_weight = deck_width_m * asphalt_thickness_m * input.asphalt_unit_weight_kn_m3;
    let superimposed = asphalt_weight + input.pipeline_load_kn_m + input.railing_load_kn_m;

    let moment_self_weight = self_weight * span.powi(2) / 8.0;
    let moment_superimposed = superimposed * span.powi(2) / 8.0;

    // Live-load moment envelope, one lane, unfactored.
    let moment_truck = TRUCK_MOMENT_SLOPE_KN * span - TRUCK_MOMENT_INTERCEPT_KN_M;
    let moment_lane = LANE_UDL_KN_PER_M * span.powi(2) / 8.0 + LANE_KNIFE_MOMENT_KN * span / 4.0;
    let moment_envelope = moment_truck.max(moment_lane).max(0.0);

    let impact_factor = input.impact_factor_user.min(15.24 / (span + 38.1));
    let amplification = (1.0 + impact_factor)
        * (1.0 + input.overload_factor)
        * input.lane_reduction_factor
        * input.num_lanes as f64;
    let moment_live = moment_envelope * amplification;

    // Shear at h/2 from the support.
    let height_m = Meters::from(Millimeters(geometry.overall_height_mm())).value();
    let x = height_m / 2.0;
    let shear_dead = (self_weight + superimposed) * (span / 2.0 - x);

    let truck_term = |axle_kn: f64, offset_m: f64| {
        let distance = span - x - offset_m;
        if distance > 0.0 {
            axle_kn * distance
        } else {
            0.0
        }
    };
    let shear_truck = (truck_term(TRUCK_AXLE_HEAVY_KN, 0.0)
        + truck_term(TRUCK_AXLE_HEAVY_KN, TRUCK_AXLE_OFFSET_1_M)
        + truck_term(TRUCK_AXLE_LIGHT_KN, TRUCK_AXLE_OFFSET_2_M))
        / span;
    let shear_lane =
        (LANE_KNIFE_SHEAR_KN * (span - x) + LANE_UDL_KN_PER_M * span.powi(2) / 2.0) / span;

    let shear_live = shear_truck.max(shear_lane) * amplification;
    let factored_shear = 1.3 * shear_dead + 1.67 * shear_live;

    Ok(SlabLoads {
        self_weight_kn_per_m: self_weight,
        asphalt_weight_kn_per_m: asphalt_weight,
        superimposed_dead_kn_per_m: superimposed,
        moment_self_weight_kn_m: moment_self_weight,
        moment_superimposed_kn_m: moment_superimposed,
        moment_dead_total_kn_m: moment_self_weight + moment_superimposed,
        moment_truck_kn_m: moment_truck,
        moment_lane_kn_m: moment_lane,
        impact_factor,
        moment_live_kn_m: moment_live,
        shear_section_m: x,
        shear_dead_kn: shear_dead,
        shear_truck_kn: shear_truck,
        shear_lane_kn: shear_lane,
        shear_live_kn: shear_live,
        factored_shear_kn: factored_shear,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::slab_section_properties;

    fn standard() -> (SlabLoadInput, SlabGeometry, ConcreteMaterial, SectionProperties) {
        let geometry = SlabGeometry::default();
        let section = slab_section_properties(&geometry).unwrap();
        (
            SlabLoadInput::default(),
            geometry,
            ConcreteMaterial::default(),
            section,
        )
    }

    #[test]
    fn test_dead_load_uses_both_areas() {
        let (input, geometry, concrete, section) = standard();
        let loads = derive_slab_loads(&input, &geometry, &concrete, &section).unwrap();

        // net < average < gross line load
        let net_line = section.net_area_m2 * 24.0;
        let gross_line = section.gross_area_m2 * 24.0;
        assert!(loads.self_weight_kn_per_m > net_line);
        assert!(loads.self_weight_kn_per_m < gross_line);
    }

    #[test]
    fn test_impact_factor_capped_by_span_formula() {
        let (mut input, geometry, concrete, section) = standard();
        input.impact_factor_user = 0.9;
        let loads = derive_slab_loads(&input, &geometry, &concrete, &section).unwrap();
        // 15.24/(25 + 38.1) = 0.2415 governs over 0.9
        assert!((loads.impact_factor - 15.24 / 63.1).abs() < 1e-9);

        input.impact_factor_user = 0.1;
        let loads = derive_slab_loads(&input, &geometry, &concrete, &section).unwrap();
        assert_eq!(loads.impact_factor, 0.1);
    }

    #[test]
    fn test_live_moment_envelope_non_negative() {
        let (mut input, geometry, concrete, section) = standard();
        // very short span: truck line goes negative, lane governs
        input.span_m = 3.0;
        input.solid_zone_start_m = 0.5;
        input.solid_zone_end_m = 0.5;
        let loads = derive_slab_loads(&input, &geometry, &concrete, &section).unwrap();
        assert!(loads.moment_truck_kn_m < 0.0);
        assert!(loads.moment_live_kn_m >= 0.0);
    }

    #[test]
    fn test_truck_governs_long_span() {
        let (mut input, geometry, concrete, section) = standard();
        input.span_m = 30.0;
        let loads = derive_slab_loads(&input, &geometry, &concrete, &section).unwrap();
        assert!(loads.moment_truck_kn_m > loads.moment_lane_kn_m);
    }

    #[test]
    fn test_factored_shear_combination() {
        let (input, geometry, concrete, section) = standard();
        let loads = derive_slab_loads(&input, &geometry, &concrete, &section).unwrap();
        assert!(
            (loads.factored_shear_kn - (1.3 * loads.shear_dead_kn + 1.67 * loads.shear_live_kn))
                .abs()
                < 1e-9
        );
        assert!(loads.shear_section_m > 0.0);
        assert!(loads.shear_dead_kn > 0.0);
        assert!(loads.shear_live_kn > 0.0);
    }

    #[test]
    fn test_zero_span_rejected() {
        let (mut input, geometry, concrete, section) = standard();
        input.span_m = 0.0;
        let err = derive_slab_loads(&input, &geometry, &concrete, &section).unwrap_err();
        assert_eq!(err.error_code(), "DEGENERATE_SPAN");
    }

    #[test]
    fn test_solid_zones_exceeding_span_rejected() {
        let (mut input, geometry, concrete, section) = standard();
        // 1.0 + 1.0 m of solid zones in a 1.5 m span
        input.span_m = 1.5;
        let err = derive_slab_loads(&input, &geometry, &concrete, &section).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let (input, geometry, concrete, section) = standard();
        let loads = derive_slab_loads(&input, &geometry, &concrete, &section).unwrap();
        let json = serde_json::to_string(&loads).unwrap();
        let roundtrip: SlabLoads = serde_json::from_str(&json).unwrap();
        assert_eq!(loads, roundtrip);
    }
}
