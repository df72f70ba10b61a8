//! # Geometry Normalizer
//!
//! Raw cross-section dimensions for the two supported superstructure
//! types: the solid PCI I-girder and the voided (corrugated-duct) slab
//! deck. Dimensions enter in millimeters, are validated for strict
//! positivity and geometric consistency, and are normalized to meters
//! before any downstream calculation sees them.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Meters, Millimeters};

/// PCI I-girder cross-section dimensions (mm).
///
/// The section is symmetric about its vertical axis: one top flange, two
/// top haunches, one web, two bottom haunches, one bottom flange.
///
/// ## JSON Example (30 m span standard section)
///
/// ```json
/// {
///   "overall_height_mm": 1700.0,
///   "web_width_mm": 200.0,
///   "top_flange_width_mm": 1000.0,
///   "top_flange_thickness_mm": 150.0,
///   "top_haunch_height_mm": 150.0,
///   "bottom_flange_thickness_mm": 240.0,
///   "bottom_haunch_height_mm": 210.0,
///   "bottom_haunch_width_mm": 175.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GirderGeometry {
    /// Overall section height (mm)
    pub overall_height_mm: f64,
    /// Web width (mm)
    pub web_width_mm: f64,
    /// Top flange width (mm)
    pub top_flange_width_mm: f64,
    /// Top flange thickness (mm)
    pub top_flange_thickness_mm: f64,
    /// Top haunch height, each side (mm)
    pub top_haunch_height_mm: f64,
    /// Bottom flange thickness (mm)
    pub bottom_flange_thickness_mm: f64,
    /// Bottom haunch height, each side (mm)
    pub bottom_haunch_height_mm: f64,
    /// Bottom haunch width, each side (mm)
    pub bottom_haunch_width_mm: f64,
}

impl GirderGeometry {
    /// Validate all dimensions: strictly positive, web narrower than the
    /// top flange, and a positive clear web height once the flanges and
    /// haunches are subtracted.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("overall_height_mm", self.overall_height_mm),
            ("web_width_mm", self.web_width_mm),
            ("top_flange_width_mm", self.top_flange_width_mm),
            ("top_flange_thickness_mm", self.top_flange_thickness_mm),
            ("top_haunch_height_mm", self.top_haunch_height_mm),
            ("bottom_flange_thickness_mm", self.bottom_flange_thickness_mm),
            ("bottom_haunch_height_mm", self.bottom_haunch_height_mm),
            ("bottom_haunch_width_mm", self.bottom_haunch_width_mm),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_geometry(
                    name,
                    value,
                    "dimension must be a positive length",
                ));
            }
        }
        if self.web_width_mm >= self.top_flange_width_mm {
            return Err(CalcError::invalid_geometry(
                "web_width_mm",
                self.web_width_mm,
                "web must be narrower than the top flange",
            ));
        }
        if self.web_height_mm() <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "overall_height_mm",
                self.overall_height_mm,
                "flanges and haunches leave no clear web height",
            ));
        }
        Ok(())
    }

    /// Clear web height between the haunches (mm)
    pub fn web_height_mm(&self) -> f64 {
        self.overall_height_mm
            - self.top_flange_thickness_mm
            - self.top_haunch_height_mm
            - self.bottom_flange_thickness_mm
            - self.bottom_haunch_height_mm
    }

    /// Validated dimensions in meters for the section calculator.
    pub(crate) fn normalized(&self) -> CalcResult<GirderDims> {
        self.validate()?;
        let m = |mm: f64| Meters::from(Millimeters(mm)).value();
        Ok(GirderDims {
            height: m(self.overall_height_mm),
            web_width: m(self.web_width_mm),
            top_flange_width: m(self.top_flange_width_mm),
            top_flange_thickness: m(self.top_flange_thickness_mm),
            top_haunch_height: m(self.top_haunch_height_mm),
            bottom_flange_thickness: m(self.bottom_flange_thickness_mm),
            bottom_haunch_height: m(self.bottom_haunch_height_mm),
            bottom_haunch_width: m(self.bottom_haunch_width_mm),
        })
    }
}

impl Default for GirderGeometry {
    /// Standard 30 m span section.
    fn default() -> Self {
        GirderGeometry {
            overall_height_mm: 1700.0,
            web_width_mm: 200.0,
            top_flange_width_mm: 1000.0,
            top_flange_thickness_mm: 150.0,
            top_haunch_height_mm: 150.0,
            bottom_flange_thickness_mm: 240.0,
            bottom_haunch_height_mm: 210.0,
            bottom_haunch_width_mm: 175.0,
        }
    }
}

/// Girder dimensions normalized to meters. Internal to the engine.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GirderDims {
    pub height: f64,
    pub web_width: f64,
    pub top_flange_width: f64,
    pub top_flange_thickness: f64,
    pub top_haunch_height: f64,
    pub bottom_flange_thickness: f64,
    pub bottom_haunch_height: f64,
    pub bottom_haunch_width: f64,
}

impl GirderDims {
    pub fn web_height(&self) -> f64 {
        self.height
            - self.top_flange_thickness
            - self.top_haunch_height
            - self.bottom_flange_thickness
            - self.bottom_haunch_height
    }
}

/// Voided slab-deck cross-section dimensions (mm).
///
/// The main slab width is derived from the duct row as `(N−1)·spacing +
/// 2·edge distance + duct diameter`, and the full deck adds a cantilever
/// on each side (rectangular edge plus tapered soffit).
///
/// ## JSON Example
///
/// ```json
/// {
///   "cantilever_width_mm": 1000.0,
///   "cantilever_edge_thickness_mm": 200.0,
///   "cantilever_taper_height_mm": 150.0,
///   "duct_cover_top_mm": 150.0,
///   "duct_diameter_mm": 450.0,
///   "duct_cover_bottom_mm": 150.0,
///   "duct_count": 5,
///   "duct_spacing_mm": 900.0,
///   "duct_edge_distance_mm": 450.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlabGeometry {
    /// Cantilever width, each side (mm)
    pub cantilever_width_mm: f64,
    /// Cantilever edge (constant) thickness (mm)
    pub cantilever_edge_thickness_mm: f64,
    /// Cantilever taper height at the slab face (mm)
    pub cantilever_taper_height_mm: f64,
    /// Concrete cover above the ducts (mm)
    pub duct_cover_top_mm: f64,
    /// Corrugated duct diameter (mm)
    pub duct_diameter_mm: f64,
    /// Concrete cover below the ducts (mm)
    pub duct_cover_bottom_mm: f64,
    /// Number of ducts
    pub duct_count: u32,
    /// Duct center-to-center spacing (mm)
    pub duct_spacing_mm: f64,
    /// Edge distance from the outer duct face to the slab edge (mm)
    pub duct_edge_distance_mm: f64,
}

impl SlabGeometry {
    /// Validate all dimensions and the duct arrangement.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("cantilever_width_mm", self.cantilever_width_mm),
            (
                "cantilever_edge_thickness_mm",
                self.cantilever_edge_thickness_mm,
            ),
            ("cantilever_taper_height_mm", self.cantilever_taper_height_mm),
            ("duct_cover_top_mm", self.duct_cover_top_mm),
            ("duct_diameter_mm", self.duct_diameter_mm),
            ("duct_cover_bottom_mm", self.duct_cover_bottom_mm),
            ("duct_spacing_mm", self.duct_spacing_mm),
            ("duct_edge_distance_mm", self.duct_edge_distance_mm),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_geometry(
                    name,
                    value,
                    "dimension must be a positive length",
                ));
            }
        }
        if self.duct_count == 0 {
            return Err(CalcError::invalid_geometry(
                "duct_count",
                0.0,
                "at least one duct is required",
            ));
        }
        if self.duct_spacing_mm <= self.duct_diameter_mm {
            return Err(CalcError::invalid_geometry(
                "duct_spacing_mm",
                self.duct_spacing_mm,
                "duct spacing must exceed the duct diameter",
            ));
        }
        let cantilever_depth = self.cantilever_edge_thickness_mm + self.cantilever_taper_height_mm;
        if cantilever_depth >= self.overall_height_mm() {
            return Err(CalcError::invalid_geometry(
                "cantilever_taper_height_mm",
                self.cantilever_taper_height_mm,
                "cantilever depth must be less than the slab depth",
            ));
        }
        Ok(())
    }

    /// Overall slab depth: top cover + duct diameter + bottom cover (mm)
    pub fn overall_height_mm(&self) -> f64 {
        self.duct_cover_top_mm + self.duct_diameter_mm + self.duct_cover_bottom_mm
    }

    /// Main slab width spanned by the duct row (mm)
    pub fn slab_width_mm(&self) -> f64 {
        (self.duct_count as f64 - 1.0) * self.duct_spacing_mm
            + 2.0 * self.duct_edge_distance_mm
            + self.duct_diameter_mm
    }

    /// Full deck width including both cantilevers (mm)
    pub fn deck_width_mm(&self) -> f64 {
        self.slab_width_mm() + 2.0 * self.cantilever_width_mm
    }
}

impl Default for SlabGeometry {
    fn default() -> Self {
        SlabGeometry {
            cantilever_width_mm: 1000.0,
            cantilever_edge_thickness_mm: 200.0,
            cantilever_taper_height_mm: 150.0,
            duct_cover_top_mm: 150.0,
            duct_diameter_mm: 450.0,
            duct_cover_bottom_mm: 150.0,
            duct_count: 5,
            duct_spacing_mm: 900.0,
            duct_edge_distance_mm: 450.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_girder_valid() {
        assert!(GirderGeometry::default().validate().is_ok());
    }

    #[test]
    fn test_zero_web_width_invalid() {
        let geom = GirderGeometry {
            web_width_mm: 0.0,
            ..Default::default()
        };
        let err = geom.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_negative_dimension_invalid() {
        let geom = GirderGeometry {
            top_haunch_height_mm: -150.0,
            ..Default::default()
        };
        assert!(geom.validate().is_err());
    }

    #[test]
    fn test_no_clear_web_height_invalid() {
        let geom = GirderGeometry {
            overall_height_mm: 600.0,
            ..Default::default()
        };
        assert!(geom.validate().is_err());
    }

    #[test]
    fn test_web_height() {
        let geom = GirderGeometry::default();
        // 1700 - 150 - 150 - 240 - 210 = 950
        assert!((geom.web_height_mm() - 950.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalized_units() {
        let dims = GirderGeometry::default().normalized().unwrap();
        assert!((dims.height - 1.7).abs() < 1e-12);
        assert!((dims.web_width - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_slab_derived_widths() {
        let geom = SlabGeometry::default();
        // (5-1)*900 + 2*450 + 450 = 4950
        assert!((geom.slab_width_mm() - 4950.0).abs() < 1e-9);
        assert!((geom.deck_width_mm() - 6950.0).abs() < 1e-9);
        assert!((geom.overall_height_mm() - 750.0).abs() < 1e-9);
    }

    #[test]
    fn test_slab_duct_spacing_invalid() {
        let geom = SlabGeometry {
            duct_spacing_mm: 400.0,
            ..Default::default()
        };
        assert!(geom.validate().is_err());
    }

    #[test]
    fn test_geometry_serialization_roundtrip() {
        let geom = GirderGeometry::default();
        let json = serde_json::to_string_pretty(&geom).unwrap();
        let roundtrip: GirderGeometry = serde_json::from_str(&json).unwrap();
        assert_eq!(geom, roundtrip);
    }
}
