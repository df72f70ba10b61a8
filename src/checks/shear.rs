//! # Shear Capacity Check
//!
//! Sectional shear check at the critical section:
//!
//! - effective shear depth `dv = 0.8·h`
//! - concrete contribution `Vc = 0.141·√f'c·bw·dv` (MPa, m)
//! - stirrup contribution `Vs = Av·fyt·dv/s`
//! - `φ·Vn = 0.9·(Vc + Vs) ≥ Vu`
//!
//! plus the transverse-reinforcement detailing rules: minimum area
//! `Av ≥ 0.35·bw·s/fyt` and maximum spacing `min(0.75·h, 600 mm)`. The
//! overall verdict requires capacity and both detailing rules.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{KgfPerCm2, MegaPascals, Meters, Millimeters};

const STRENGTH_REDUCTION_PHI: f64 = 0.9;
/// SI form of the legacy 0.45·√f'c kgf/cm² concrete shear stress.
const CONCRETE_SHEAR_COEFF: f64 = 0.141;
const MAX_SPACING_CAP_MM: f64 = 600.0;

/// Deformed-bar sizes used for stirrups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RebarSize {
    D10,
    D13,
    D16,
    D19,
}

impl RebarSize {
    /// All bar sizes for UI selection
    pub const ALL: [RebarSize; 4] = [
        RebarSize::D10,
        RebarSize::D13,
        RebarSize::D16,
        RebarSize::D19,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            RebarSize::D10 => "D10",
            RebarSize::D13 => "D13",
            RebarSize::D16 => "D16",
            RebarSize::D19 => "D19",
        }
    }

    /// Parse from a bar designation
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "D10" => Ok(RebarSize::D10),
            "D13" => Ok(RebarSize::D13),
            "D16" => Ok(RebarSize::D16),
            "D19" => Ok(RebarSize::D19),
            _ => Err(CalcError::invalid_input(
                "rebar_size",
                0.0,
                "unknown bar designation",
            )),
        }
    }

    /// Nominal cross-section area of one bar (mm²)
    pub fn area_mm2(&self) -> f64 {
        match self {
            RebarSize::D10 => 71.33,
            RebarSize::D13 => 126.7,
            RebarSize::D16 => 198.6,
            RebarSize::D19 => 286.5,
        }
    }

    /// Default yield strength (MPa). The small bars are the 2800 kgf/cm²
    /// grade, the larger ones 4200 kgf/cm².
    pub fn default_yield_mpa(&self) -> f64 {
        match self {
            RebarSize::D10 | RebarSize::D13 => MegaPascals::from(KgfPerCm2(2800.0)).value(),
            RebarSize::D16 | RebarSize::D19 => MegaPascals::from(KgfPerCm2(4200.0)).value(),
        }
    }
}

impl std::fmt::Display for RebarSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Stirrup arrangement at the critical section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StirrupConfig {
    pub size: RebarSize,
    /// Vertical legs crossing the shear plane
    pub legs: u32,
    /// Longitudinal spacing (mm)
    pub spacing_mm: f64,
    /// Yield strength override (MPa); `None` uses the bar-grade default
    pub yield_mpa: Option<f64>,
}

impl StirrupConfig {
    /// Total stirrup area per layer, bar area × legs (mm²)
    pub fn area_mm2(&self) -> f64 {
        self.size.area_mm2() * self.legs as f64
    }

    pub fn yield_strength_mpa(&self) -> f64 {
        self.yield_mpa.unwrap_or_else(|| self.size.default_yield_mpa())
    }

    pub fn validate(&self) -> CalcResult<()> {
        if self.legs == 0 {
            return Err(CalcError::invalid_input(
                "legs",
                0.0,
                "stirrups need at least one leg",
            ));
        }
        if !self.spacing_mm.is_finite() || self.spacing_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "spacing_mm",
                self.spacing_mm,
                "stirrup spacing must be positive",
            ));
        }
        if let Some(fy) = self.yield_mpa {
            if !fy.is_finite() || fy <= 0.0 {
                return Err(CalcError::invalid_input(
                    "yield_mpa",
                    fy,
                    "yield strength must be positive",
                ));
            }
        }
        Ok(())
    }
}

/// Input for the shear capacity check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShearInput {
    /// Concrete strength f'c (MPa)
    pub fc_mpa: f64,
    /// Shear width bw (m)
    pub web_width_m: f64,
    /// Overall member height h (m)
    pub overall_height_m: f64,
    /// Factored design shear Vu (kN)
    pub factored_shear_kn: f64,
    pub stirrups: StirrupConfig,
}

impl ShearInput {
    pub fn validate(&self) -> CalcResult<()> {
        self.stirrups.validate()?;
        let positive = [
            ("fc_mpa", self.fc_mpa),
            ("web_width_m", self.web_width_m),
            ("overall_height_m", self.overall_height_m),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    name,
                    value,
                    "must be a positive finite number",
                ));
            }
        }
        if !self.factored_shear_kn.is_finite() || self.factored_shear_kn < 0.0 {
            return Err(CalcError::invalid_input(
                "factored_shear_kn",
                self.factored_shear_kn,
                "design shear must be a non-negative finite number",
            ));
        }
        Ok(())
    }
}

/// Shear check result. Forces in kN, lengths in m/mm as named.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShearResult {
    /// Effective shear depth dv = 0.8·h (m)
    pub effective_depth_m: f64,
    /// Concrete contribution Vc (kN)
    pub concrete_capacity_kn: f64,
    /// Stirrup contribution Vs (kN)
    pub steel_capacity_kn: f64,
    /// Nominal capacity Vn = Vc + Vs (kN)
    pub nominal_capacity_kn: f64,
    /// Design capacity φ·Vn (kN)
    pub design_capacity_kn: f64,
    /// Factored demand Vu (kN)
    pub demand_kn: f64,
    /// Provided stirrup area (mm²)
    pub stirrup_area_mm2: f64,
    /// Minimum required stirrup area 0.35·bw·s/fyt (mm²)
    pub min_stirrup_area_mm2: f64,
    /// Maximum permitted spacing min(0.75·h, 600 mm) (mm)
    pub max_spacing_mm: f64,
    pub capacity_pass: bool,
    pub min_area_pass: bool,
    pub spacing_pass: bool,
    /// Capacity and both detailing rules
    pub pass: bool,
}

/// Run the shear capacity check.
pub fn check_shear(input: &ShearInput) -> CalcResult<ShearResult> {
    input.validate()?;

    let dv = 0.8 * input.overall_height_m;
    // MPa·m² = MN, ×1000 to kN
    let vc = CONCRETE_SHEAR_COEFF * input.fc_mpa.sqrt() * input.web_width_m * dv * 1000.0;

    let av_mm2 = input.stirrups.area_mm2();
    let fyt = input.stirrups.yield_strength_mpa();
    let spacing_m = Meters::from(Millimeters(input.stirrups.spacing_mm)).value();
    // N/mm² · mm² = N, ×dv/s dimensionless, /1000 to kN
    let vs = av_mm2 * fyt * dv / spacing_m / 1000.0;

    let vn = vc + vs;
    let design = STRENGTH_REDUCTION_PHI * vn;

    let bw_mm = Millimeters::from(Meters(input.web_width_m)).value();
    let min_area = 0.35 * bw_mm * input.stirrups.spacing_mm / fyt;
    let max_spacing =
        Millimeters::from(Meters(0.75 * input.overall_height_m)).value().min(MAX_SPACING_CAP_MM);

    let capacity_pass = design >= input.factored_shear_kn;
    let min_area_pass = av_mm2 >= min_area;
    let spacing_pass = input.stirrups.spacing_mm <= max_spacing;

    Ok(ShearResult {
        effective_depth_m: dv,
        concrete_capacity_kn: vc,
        steel_capacity_kn: vs,
        nominal_capacity_kn: vn,
        design_capacity_kn: design,
        demand_kn: input.factored_shear_kn,
        stirrup_area_mm2: av_mm2,
        min_stirrup_area_mm2: min_area,
        max_spacing_mm: max_spacing,
        capacity_pass,
        min_area_pass,
        spacing_pass,
        pass: capacity_pass && min_area_pass && spacing_pass,
    })
}
