//! # girder_core - Prestressed Concrete Girder Calculation Engine
//!
//! `girder_core` is a stateless calculation engine for precast
//! prestressed concrete bridge members: solid PCI-style I-girders and
//! post-tensioned voided slab decks. It computes section properties,
//! the full prestress-loss history, and the four governing code checks
//! (fiber stresses, flexural strength, live-load deflection, shear).
//! All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **SI Internally**: Meters, kilonewtons and megapascals everywhere;
//!   legacy unit constants are converted once, at their definition sites
//!
//! ## Quick Start
//!
//! ```rust
//! use girder_core::evaluate::{evaluate_girder, GirderInput};
//!
//! // Evaluate the standard 30 m girder with four tendons
//! let report = evaluate_girder(&GirderInput::default()).unwrap();
//! assert_eq!(report.stresses.len(), 3);
//!
//! // Serialize the report for storage or transmission
//! let json = serde_json::to_string_pretty(&report).unwrap();
//! # let _ = json;
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Member dimension structs and validation
//! - [`section`] - Composite section properties (area, centroid, inertia)
//! - [`tendons`] - Tendon catalog, layout tables and the parabolic profile
//! - [`losses`] - Friction, seating, elastic and long-term loss history
//! - [`loads`] - Slab-deck dead and live-load derivation
//! - [`checks`] - Stress, flexure, deflection and shear checks
//! - [`evaluate`] - End-to-end pipelines producing full reports
//! - [`material`] - Concrete and prestressing parameters
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod checks;
pub mod errors;
pub mod evaluate;
pub mod geometry;
pub mod loads;
pub mod losses;
pub mod material;
pub mod section;
pub mod tendons;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use evaluate::{evaluate_girder, evaluate_slab, GirderInput, GirderReport, SlabInput, SlabReport};
pub use geometry::{GirderGeometry, SlabGeometry};
pub use section::{girder_section_properties, slab_section_properties, SectionProperties};
