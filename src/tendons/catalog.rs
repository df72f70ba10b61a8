//! Tendon product catalog.
//!
//! Two families of reference data:
//!
//! - [`TendonType`]: complete multi-strand post-tensioning tendon units for
//!   the I-girder (12-strand anchor heads), with a catalog jacking force.
//! - [`StrandType`]: individual seven-wire strands for the slab deck,
//!   where a tendon is assembled from a chosen strand count.
//!
//! Forces in kN, areas in mm², stresses in MPa.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Static catalog entry for a prestressing tendon product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TendonCatalogEntry {
    /// Catalog jacking force per tendon (kN)
    pub jacking_force_kn: f64,
    /// Steel area per tendon (mm²)
    pub area_mm2: f64,
    /// Ultimate tensile strength fpu (MPa)
    pub fpu_mpa: f64,
    /// Yield strength fpy (MPa)
    pub fpy_mpa: f64,
    /// Elastic modulus Es (MPa)
    pub es_mpa: f64,
}

/// Multi-strand tendon units for the I-girder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TendonType {
    /// 12 × 12.7 mm strands, 1720 MPa class
    #[serde(rename = "12S12.7A")]
    T12S12_7A,
    /// 12 × 12.7 mm strands, 1850 MPa class
    #[serde(rename = "12S12.7B")]
    T12S12_7B,
    /// 12 × 15.2 mm strands
    #[serde(rename = "12S15.2")]
    T12S15_2,
}

impl TendonType {
    /// All tendon types for UI selection
    pub const ALL: [TendonType; 3] = [
        TendonType::T12S12_7A,
        TendonType::T12S12_7B,
        TendonType::T12S15_2,
    ];

    /// Product code string
    pub fn code(&self) -> &'static str {
        match self {
            TendonType::T12S12_7A => "12S12.7A",
            TendonType::T12S12_7B => "12S12.7B",
            TendonType::T12S15_2 => "12S15.2",
        }
    }

    /// Parse from a product code
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "12S12.7A" => Ok(TendonType::T12S12_7A),
            "12S12.7B" => Ok(TendonType::T12S12_7B),
            "12S15.2" => Ok(TendonType::T12S15_2),
            _ => Err(CalcError::invalid_tendon(s, "unknown tendon product code")),
        }
    }

    /// Catalog properties for this tendon unit
    pub fn properties(&self) -> TendonCatalogEntry {
        match self {
            TendonType::T12S12_7A => TendonCatalogEntry {
                jacking_force_kn: 1429.0,
                area_mm2: 1184.4,
                fpu_mpa: 1720.0,
                fpy_mpa: 1460.0,
                es_mpa: 195_000.0,
            },
            TendonType::T12S12_7B => TendonCatalogEntry {
                jacking_force_kn: 1547.0,
                area_mm2: 1184.4,
                fpu_mpa: 1850.0,
                fpy_mpa: 1580.0,
                es_mpa: 195_000.0,
            },
            TendonType::T12S15_2 => TendonCatalogEntry {
                jacking_force_kn: 2164.0,
                area_mm2: 1664.4,
                fpu_mpa: 1850.0,
                fpy_mpa: 1580.0,
                es_mpa: 195_000.0,
            },
        }
    }

    /// Maximum recommended jacking force per tendon:
    /// min(0.70·fpu, 0.85·fpy) · area
    pub fn recommended_jacking_force_kn(&self) -> f64 {
        let entry = self.properties();
        let allowable_mpa = (0.70 * entry.fpu_mpa).min(0.85 * entry.fpy_mpa);
        allowable_mpa * entry.area_mm2 / 1000.0
    }
}

impl std::fmt::Display for TendonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Seven-wire strands for slab-deck tendons (JIS SWPR7BL designations).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrandType {
    /// 12.7 mm low-relaxation strand
    #[serde(rename = "SWPR7BL12.7")]
    Swpr7bl12_7,
    /// 15.2 mm low-relaxation strand
    #[serde(rename = "SWPR7BL15.2")]
    Swpr7bl15_2,
}

impl StrandType {
    /// All strand types for UI selection
    pub const ALL: [StrandType; 2] = [StrandType::Swpr7bl12_7, StrandType::Swpr7bl15_2];

    /// Product code string
    pub fn code(&self) -> &'static str {
        match self {
            StrandType::Swpr7bl12_7 => "SWPR7BL12.7",
            StrandType::Swpr7bl15_2 => "SWPR7BL15.2",
        }
    }

    /// Parse from a product code
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "SWPR7BL12.7" => Ok(StrandType::Swpr7bl12_7),
            "SWPR7BL15.2" => Ok(StrandType::Swpr7bl15_2),
            _ => Err(CalcError::invalid_tendon(s, "unknown strand product code")),
        }
    }

    /// Steel area per strand (mm²)
    pub fn area_mm2(&self) -> f64 {
        match self {
            StrandType::Swpr7bl12_7 => 98.71,
            StrandType::Swpr7bl15_2 => 138.7,
        }
    }

    /// Ultimate tensile strength fpu (MPa)
    pub fn fpu_mpa(&self) -> f64 {
        match self {
            StrandType::Swpr7bl12_7 => 1850.0,
            StrandType::Swpr7bl15_2 => 1880.0,
        }
    }

    /// Yield strength fpy (MPa)
    pub fn fpy_mpa(&self) -> f64 {
        match self {
            StrandType::Swpr7bl12_7 => 1580.0,
            StrandType::Swpr7bl15_2 => 1600.0,
        }
    }

    /// Default jacking stress, 0.737·fpu (MPa)
    pub fn default_jacking_stress_mpa(&self) -> f64 {
        0.737 * self.fpu_mpa()
    }

    /// Default jacking force for a tendon of `strands` strands (kN)
    pub fn default_jacking_force_kn(&self, strands: u32) -> CalcResult<f64> {
        if strands == 0 {
            return Err(CalcError::invalid_tendon(
                self.code(),
                "strand count must be at least 1",
            ));
        }
        let area = self.area_mm2() * strands as f64;
        Ok(self.default_jacking_stress_mpa() * area / 1000.0)
    }
}

impl std::fmt::Display for StrandType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
