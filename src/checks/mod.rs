//! # Code Checks
//!
//! The four serviceability and strength checks run on a prestressed
//! member: staged fiber stresses against allowable limits, flexural
//! strength with the iterative neutral-axis solver, live-load deflection,
//! and shear capacity with transverse-reinforcement detailing rules.
//!
//! Each check is a pure function from a small input struct to a
//! serializable result carrying demand, capacity and a pass flag.

pub mod deflection;
pub mod flexure;
pub mod shear;
pub mod stress;

pub use deflection::{check_deflection, DeflectionInput, DeflectionResult};
pub use flexure::{beta1, solve_flexure, FlexuralResult, FlexureInput};
pub use shear::{check_shear, RebarSize, ShearInput, ShearResult, StirrupConfig};
pub use stress::{
    check_stresses, stress_within_limits, AllowableStresses, LoadStage, StressCheckInput,
    StressState,
};
