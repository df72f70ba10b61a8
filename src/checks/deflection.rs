//! # Live-Load Deflection Check
//!
//! Elastic mid-span deflection under the live-load moment,
//! `δ = 5·M·L²/(48·Ec·I)`, with `Ec = 4700·√f'c` MPa, compared against
//! the span ratio limit L/800 (L/1000 when the deck carries a sidewalk).

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::material::ConcreteMaterial;

/// Span-ratio denominator without a sidewalk.
const LIMIT_VEHICULAR: f64 = 800.0;
/// Span-ratio denominator with pedestrian traffic.
const LIMIT_WITH_SIDEWALK: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeflectionInput {
    /// Simple span (m)
    pub span_m: f64,
    /// Mid-span live-load moment, impact included (kN·m)
    pub moment_live_kn_m: f64,
    /// Concrete material; the service modulus Ec applies
    pub concrete: ConcreteMaterial,
    /// Gross moment of inertia (m⁴)
    pub moment_of_inertia_m4: f64,
    /// Pedestrian traffic tightens the limit to L/1000
    pub has_sidewalk: bool,
}

impl DeflectionInput {
    pub fn validate(&self) -> CalcResult<()> {
        self.concrete.validate()?;
        if !self.span_m.is_finite() || self.span_m <= 0.0 {
            return Err(CalcError::degenerate_span(
                self.span_m,
                "deflection check needs a positive span",
            ));
        }
        if !self.moment_of_inertia_m4.is_finite() || self.moment_of_inertia_m4 <= 0.0 {
            return Err(CalcError::invalid_input(
                "moment_of_inertia_m4",
                self.moment_of_inertia_m4,
                "moment of inertia must be positive",
            ));
        }
        if !self.moment_live_kn_m.is_finite() || self.moment_live_kn_m < 0.0 {
            return Err(CalcError::invalid_input(
                "moment_live_kn_m",
                self.moment_live_kn_m,
                "moment must be a non-negative finite number",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeflectionResult {
    /// Computed mid-span deflection (mm)
    pub deflection_mm: f64,
    /// Allowable deflection (mm)
    pub allowable_mm: f64,
    /// Span-ratio denominator applied (800 or 1000)
    pub limit_denominator: f64,
    /// Service elastic modulus used (MPa)
    pub elastic_modulus_mpa: f64,
    pub pass: bool,
}

/// Run the live-load deflection check.
pub fn check_deflection(input: &DeflectionInput) -> CalcResult<DeflectionResult> {
    input.validate()?;

    let ec_mpa = input.concrete.service_modulus_mpa();
    // kN·m · m² / (kPa · m⁴) = m
    let ec_kpa = ec_mpa * 1000.0;
    let deflection_m = 5.0 * input.moment_live_kn_m * input.span_m.powi(2)
        / (48.0 * ec_kpa * input.moment_of_inertia_m4);

    let denominator = if input.has_sidewalk {
        LIMIT_WITH_SIDEWALK
    } else {
        LIMIT_VEHICULAR
    };
    let allowable_m = input.span_m / denominator;

    Ok(DeflectionResult {
        deflection_mm: deflection_m * 1000.0,
        allowable_mm: allowable_m * 1000.0,
        limit_denominator: denominator,
        elastic_modulus_mpa: ec_mpa,
        pass: deflection_m <= allowable_m,
    })
}
