//! # Tendon Reference Data
//!
//! Immutable prestressing-tendon reference data: the product catalog
//! (multi-strand tendon units and single strands) and the fixed layout
//! tables mapping tendon count to anchorage/mid-span coordinates, plus the
//! parabolic longitudinal profile.
//!
//! All tables are compiled-in configuration behind validated enum/count
//! keys; there is no process-wide mutable state.

pub mod catalog;
pub mod layout;

pub use catalog::{StrandType, TendonCatalogEntry, TendonType};
pub use layout::{
    girder_layout, slab_duct_positions, slab_tendon_layout, DuctPosition, TendonLayout,
    TendonPosition,
};
