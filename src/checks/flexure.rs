//! # Flexural Strength Solver
//!
//! Ultimate-strength check with a bonded-tendon stress model. The
//! neutral-axis depth is found by fixed-point iteration on force
//! equilibrium:
//!
//! 1. start at `c = 0.1·dp`
//! 2. steel stress `fps = fpu·(1 − 0.28·c/dp)`, tension `T = Aps·fps`
//! 3. stress-block depth `a = β₁·c`; compression from the bilinear width
//!    profile `C = 0.85·f'c·(b·min(a, tf) + bw·max(a − tf, 0))`
//! 4. update `c ← c·T/C`
//!
//! until `|T − C|/T < 0.001`, capped at 100 iterations. A run that hits
//! the cap is NOT an error: the result carries `converged: false` and the
//! last iterate so callers can inspect the partial state, and the check
//! fails.
//!
//! Capacity `φ·Mn` with `φ = 0.9` is compared against
//! `Mu = 1.2·M_DL + 1.6·M_LL`.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

const STRENGTH_REDUCTION_PHI: f64 = 0.9;
const CONVERGENCE_TOLERANCE: f64 = 0.001;
const MAX_ITERATIONS: u32 = 100;

/// Rectangular-stress-block depth factor β₁ as a function of f'c (MPa):
/// 0.85 up to 28 MPa, then reduced 0.05 per 7 MPa, floored at 0.65.
pub fn beta1(fc_mpa: f64) -> f64 {
    if fc_mpa <= 28.0 {
        0.85
    } else {
        (0.85 - 0.05 * (fc_mpa - 28.0) / 7.0).max(0.65)
    }
}

/// Input for the flexural strength check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlexureInput {
    /// Concrete strength f'c (MPa)
    pub fc_mpa: f64,
    /// Tendon ultimate strength fpu (MPa)
    pub fpu_mpa: f64,
    /// Total prestressing steel area (mm²)
    pub aps_mm2: f64,
    /// Depth from the compression face to the steel centroid (m)
    pub dp_m: f64,
    /// Compression flange width b (m)
    pub flange_width_m: f64,
    /// Flange thickness tf; the section is rectangular when the stress
    /// block stays within it (m)
    pub flange_thickness_m: f64,
    /// Web width bw below the flange (m)
    pub web_width_m: f64,
    /// Unfactored dead-load moment (kN·m)
    pub moment_dead_kn_m: f64,
    /// Unfactored live-load moment, impact included (kN·m)
    pub moment_live_kn_m: f64,
}

impl FlexureInput {
    pub fn validate(&self) -> CalcResult<()> {
        let positive = [
            ("fc_mpa", self.fc_mpa),
            ("fpu_mpa", self.fpu_mpa),
            ("aps_mm2", self.aps_mm2),
            ("dp_m", self.dp_m),
            ("flange_width_m", self.flange_width_m),
            ("flange_thickness_m", self.flange_thickness_m),
            ("web_width_m", self.web_width_m),
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
        if self.web_width_m > self.flange_width_m {
            return Err(CalcError::invalid_input(
                "web_width_m",
                self.web_width_m,
                "web cannot be wider than the compression flange",
            ));
        }
        let moments = [
            ("moment_dead_kn_m", self.moment_dead_kn_m),
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
        Ok(())
    }
}

/// Flexural strength result. Moments in kN·m, depths in m.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlexuralResult {
    /// Factored demand Mu = 1.2·M_DL + 1.6·M_LL (kN·m)
    pub required_moment_kn_m: f64,
    /// Nominal capacity Mn (kN·m)
    pub nominal_moment_kn_m: f64,
    /// Design capacity φ·Mn (kN·m)
    pub design_moment_kn_m: f64,
    /// Neutral-axis depth c at the last iterate (m)
    pub neutral_axis_depth_m: f64,
    /// Tendon stress fps at the last iterate (MPa)
    pub steel_stress_mpa: f64,
    /// Stress-block depth a = β₁·c (m)
    pub stress_block_depth_m: f64,
    pub iterations: u32,
    pub converged: bool,
    /// False when unconverged, regardless of the moment comparison
    pub pass: bool,
}

/// Run the iterative flexural strength check.
pub fn solve_flexure(input: &FlexureInput) -> CalcResult<FlexuralResult> {
    input.validate()?;

    let b1 = beta1(input.fc_mpa);
    let fc = input.fc_mpa;
    let dp = input.dp_m;
    let tf = input.flange_thickness_m;
    let b = input.flange_width_m;
    let bw = input.web_width_m;

    let mut c = 0.1 * dp;
    let mut fps_mpa = input.fpu_mpa * (1.0 - 0.28 * c / dp);
    let mut tension_kn = input.aps_mm2 * fps_mpa / 1000.0;
    let mut a = b1 * c;
    let mut iterations = 1;
    let mut converged = false;

    loop {
        // MPa·m² = MN, ×1000 to kN
        let compression_kn =
            0.85 * fc * (b * a.min(tf) + bw * (a - tf).max(0.0)) * 1000.0;

        if !compression_kn.is_finite() || compression_kn <= 0.0 || tension_kn <= 0.0 {
            break;
        }
        if (tension_kn - compression_kn).abs() / tension_kn < CONVERGENCE_TOLERANCE {
            converged = true;
            break;
        }
        if iterations >= MAX_ITERATIONS {
            break;
        }
        c *= tension_kn / compression_kn;
        iterations += 1;
        fps_mpa = input.fpu_mpa * (1.0 - 0.28 * c / dp);
        tension_kn = input.aps_mm2 * fps_mpa / 1000.0;
        a = b1 * c;
    }

    let nominal = if a <= tf {
        // rectangular block
        tension_kn * (dp - a / 2.0)
    } else {
        // flange overhang and web block, each with its own lever arm
        let flange_kn = 0.85 * fc * (b - bw) * tf * 1000.0;
        let web_kn = 0.85 * fc * bw * a * 1000.0;
        flange_kn * (dp - tf / 2.0) + web_kn * (dp - a / 2.0)
    };

    let required = 1.2 * input.moment_dead_kn_m + 1.6 * input.moment_live_kn_m;
    let design = STRENGTH_REDUCTION_PHI * nominal;

    Ok(FlexuralResult {
        required_moment_kn_m: required,
        nominal_moment_kn_m: nominal,
        design_moment_kn_m: design,
        neutral_axis_depth_m: c,
        steel_stress_mpa: fps_mpa,
        stress_block_depth_m: a,
        iterations,
        converged,
        pass: converged && design >= required,
    })
}
