//! Tendon layout tables and the parabolic longitudinal profile.
//!
//! Girder layouts are fixed lookup tables keyed by tendon count (3..=7):
//! anchorage (end-span) and mid-span elevations above the bottom fiber,
//! plus the transverse position within the section. Slab-deck duct and
//! tendon positions are derived parametrically from the duct spacing
//! instead of looked up.
//!
//! The longitudinal profile of every tendon is the parabola through the
//! anchorage and mid-span elevations with zero slope at mid-span.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::{CalcError, CalcResult};
use crate::geometry::SlabGeometry;
use crate::units::{Meters, Millimeters};

/// One tendon's position: transverse x (positive right of the section
/// centerline) and elevations above the bottom fiber at the anchorage and
/// at mid-span. All in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TendonPosition {
    pub id: u32,
    pub x_mm: f64,
    pub y_end_mm: f64,
    pub y_mid_mm: f64,
}

impl TendonPosition {
    /// Tendon elevation (m above the bottom fiber) at longitudinal
    /// position `x_m`, from the parabola through the anchorage and
    /// mid-span elevations with zero slope at mid-span:
    /// `y(x) = y_mid + a·(x − L/2)²`, `a = (y_end − y_mid)/(L/2)²`.
    pub fn elevation_at_m(&self, x_m: f64, span_m: f64) -> CalcResult<f64> {
        if span_m <= 0.0 {
            return Err(CalcError::degenerate_span(
                span_m,
                "tendon profile needs a positive span",
            ));
        }
        let y_end = Meters::from(Millimeters(self.y_end_mm)).value();
        let y_mid = Meters::from(Millimeters(self.y_mid_mm)).value();
        let half = span_m / 2.0;
        let a = (y_end - y_mid) / (half * half);
        Ok(y_mid + a * (x_m - half).powi(2))
    }

    /// Total angular change of the parabolic profile over the half-span,
    /// `α = |4·(y_end − y_mid)| / L` (radians).
    pub fn total_angle_change_rad(&self, span_m: f64) -> CalcResult<f64> {
        if span_m <= 0.0 {
            return Err(CalcError::degenerate_span(
                span_m,
                "tendon drape angle needs a positive span",
            ));
        }
        let y_end = Meters::from(Millimeters(self.y_end_mm)).value();
        let y_mid = Meters::from(Millimeters(self.y_mid_mm)).value();
        Ok((4.0 * (y_end - y_mid) / span_m).abs())
    }
}

/// Ordered tendon layout for one section. Sequence length always equals
/// the requested tendon count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TendonLayout {
    pub tendons: Vec<TendonPosition>,
}

impl TendonLayout {
    /// Number of tendons in the layout
    pub fn count(&self) -> u32 {
        self.tendons.len() as u32
    }

    /// Mean mid-span elevation of the tendon group (m above the bottom
    /// fiber), the group centroid used for eccentricity.
    pub fn mean_mid_elevation_m(&self) -> f64 {
        if self.tendons.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.tendons.iter().map(|t| t.y_mid_mm).sum();
        Meters::from(Millimeters(sum / self.tendons.len() as f64)).value()
    }
}

/// One duct position in the slab deck: transverse x from the centerline
/// and axis elevation above the bottom fiber (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DuctPosition {
    pub id: u32,
    pub x_mm: f64,
    pub y_mm: f64,
}

/// Raw girder tables: (id, transverse x, end elevation, mid elevation),
/// all mm above the bottom fiber. One table per supported tendon count.
const GIRDER_3: [(u32, f64, f64, f64); 3] = [
    (1, 0.0, 1050.0, 120.0),
    (2, -120.0, 750.0, 120.0),
    (3, 120.0, 450.0, 120.0),
];

const GIRDER_4: [(u32, f64, f64, f64); 4] = [
    (1, 0.0, 1300.0, 240.0),
    (2, 0.0, 1000.0, 120.0),
    (3, -120.0, 700.0, 120.0),
    (4, 120.0, 400.0, 120.0),
];

const GIRDER_5: [(u32, f64, f64, f64); 5] = [
    (1, 0.0, 1600.0, 360.0),
    (2, 0.0, 1300.0, 240.0),
    (3, 0.0, 1000.0, 120.0),
    (4, -120.0, 700.0, 120.0),
    (5, 120.0, 400.0, 120.0),
];

const GIRDER_6: [(u32, f64, f64, f64); 6] = [
    (1, 0.0, 1850.0, 240.0),
    (2, 0.0, 1550.0, 120.0),
    (3, -120.0, 1250.0, 240.0),
    (4, 120.0, 950.0, 240.0),
    (5, -120.0, 650.0, 120.0),
    (6, 120.0, 350.0, 120.0),
];

const GIRDER_7: [(u32, f64, f64, f64); 7] = [
    (1, 0.0, 2000.0, 360.0),
    (2, 0.0, 1700.0, 240.0),
    (3, 0.0, 1400.0, 120.0),
    (4, -120.0, 1100.0, 240.0),
    (5, 120.0, 800.0, 240.0),
    (6, -120.0, 500.0, 120.0),
    (7, 120.0, 200.0, 120.0),
];

static GIRDER_LAYOUTS: Lazy<BTreeMap<u32, TendonLayout>> = Lazy::new(|| {
    let build = |raw: &[(u32, f64, f64, f64)]| TendonLayout {
        tendons: raw
            .iter()
            .map(|&(id, x_mm, y_end_mm, y_mid_mm)| TendonPosition {
                id,
                x_mm,
                y_end_mm,
                y_mid_mm,
            })
            .collect(),
    };
    let mut map = BTreeMap::new();
    map.insert(3, build(&GIRDER_3));
    map.insert(4, build(&GIRDER_4));
    map.insert(5, build(&GIRDER_5));
    map.insert(6, build(&GIRDER_6));
    map.insert(7, build(&GIRDER_7));
    map
});

/// Look up the girder tendon layout for a tendon count.
///
/// Counts without a table (anything outside 3..=7) are an error. There is
/// no fallback layout; a missing table must never be papered over.
pub fn girder_layout(count: u32) -> CalcResult<TendonLayout> {
    GIRDER_LAYOUTS.get(&count).cloned().ok_or_else(|| {
        CalcError::invalid_tendon(
            count.to_string(),
            "no girder layout table for this tendon count (supported: 3..=7)",
        )
    })
}

/// Duct positions for the slab deck, centered about the section
/// centerline at the duct axis elevation.
pub fn slab_duct_positions(geometry: &SlabGeometry) -> CalcResult<Vec<DuctPosition>> {
    geometry.validate()?;
    let n = geometry.duct_count;
    let start_x = -((n as f64 - 1.0) * geometry.duct_spacing_mm) / 2.0;
    let y = geometry.duct_cover_bottom_mm + geometry.duct_diameter_mm / 2.0;
    Ok((0..n)
        .map(|i| DuctPosition {
            id: i + 1,
            x_mm: start_x + i as f64 * geometry.duct_spacing_mm,
            y_mm: y,
        })
        .collect())
}

/// Mid-span elevation of slab-deck tendons above the bottom fiber (mm)
const SLAB_TENDON_MID_ELEVATION_MM: f64 = 150.0;

/// Tendon layout for the slab deck, derived parametrically: N ducts give
/// N+1 tendons, one in each gap and one outside each end of the duct row,
/// offset half a duct spacing. Anchorages sit at the duct axis; the
/// mid-span low point is a fixed 150 mm above the bottom fiber.
pub fn slab_tendon_layout(geometry: &SlabGeometry) -> CalcResult<TendonLayout> {
    geometry.validate()?;
    let n = geometry.duct_count;
    let duct_start_x = -((n as f64 - 1.0) * geometry.duct_spacing_mm) / 2.0;
    let y_end = geometry.duct_cover_bottom_mm + geometry.duct_diameter_mm / 2.0;

    let tendons = (0..=n)
        .map(|i| TendonPosition {
            id: i + 1,
            x_mm: duct_start_x - geometry.duct_spacing_mm / 2.0
                + i as f64 * geometry.duct_spacing_mm,
            y_end_mm: y_end,
            y_mid_mm: SLAB_TENDON_MID_ELEVATION_MM,
        })
        .collect();
    Ok(TendonLayout { tendons })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_length_matches_count() {
        for count in 3..=7 {
            let layout = girder_layout(count).unwrap();
            assert_eq!(layout.count(), count);
            // ids are 1..=count in order
            for (i, tendon) in layout.tendons.iter().enumerate() {
                assert_eq!(tendon.id, i as u32 + 1);
            }
        }
    }

    #[test]
    fn test_missing_count_is_error() {
        for count in [0, 1, 2, 8, 100] {
            let err = girder_layout(count).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_TENDON_SELECTION");
        }
    }

    #[test]
    fn test_four_tendon_elevations() {
        let layout = girder_layout(4).unwrap();
        assert_eq!(layout.tendons[0].y_end_mm, 1300.0);
        assert_eq!(layout.tendons[0].y_mid_mm, 240.0);
        assert_eq!(layout.tendons[3].y_end_mm, 400.0);
        // group centroid at mid-span: (240+120+120+120)/4 = 150 mm
        assert!((layout.mean_mid_elevation_m() - 0.150).abs() < 1e-12);
    }

    #[test]
    fn test_profile_endpoints() {
        let tendon = TendonPosition {
            id: 1,
            x_mm: 0.0,
            y_end_mm: 1600.0,
            y_mid_mm: 120.0,
        };
        let span = 30.0;
        let at_end = tendon.elevation_at_m(0.0, span).unwrap();
        let at_mid = tendon.elevation_at_m(span / 2.0, span).unwrap();
        let at_far = tendon.elevation_at_m(span, span).unwrap();
        assert!((at_end - 1.6).abs() < 1e-12);
        assert!((at_mid - 0.12).abs() < 1e-12);
        assert!((at_far - 1.6).abs() < 1e-12);
    }

    #[test]
    fn test_profile_zero_slope_at_midspan() {
        let tendon = TendonPosition {
            id: 1,
            x_mm: 0.0,
            y_end_mm: 1300.0,
            y_mid_mm: 240.0,
        };
        let span = 30.0;
        let eps = 1e-6;
        let left = tendon.elevation_at_m(span / 2.0 - eps, span).unwrap();
        let right = tendon.elevation_at_m(span / 2.0 + eps, span).unwrap();
        assert!((right - left).abs() / (2.0 * eps) < 1e-6);
    }

    #[test]
    fn test_profile_rejects_degenerate_span() {
        let tendon = girder_layout(3).unwrap().tendons[0];
        let err = tendon.elevation_at_m(1.0, 0.0).unwrap_err();
        assert_eq!(err.error_code(), "DEGENERATE_SPAN");
    }

    #[test]
    fn test_drape_angle() {
        let tendon = TendonPosition {
            id: 1,
            x_mm: 0.0,
            y_end_mm: 1600.0,
            y_mid_mm: 120.0,
        };
        // |4·(1.6 − 0.12)| / 30 = 0.19733
        let alpha = tendon.total_angle_change_rad(30.0).unwrap();
        assert!((alpha - 0.19733).abs() < 1e-4);
    }

    #[test]
    fn test_slab_duct_positions_centered() {
        let geom = SlabGeometry::default();
        let ducts = slab_duct_positions(&geom).unwrap();
        assert_eq!(ducts.len(), 5);
        assert!((ducts[0].x_mm + 1800.0).abs() < 1e-9);
        assert!((ducts[4].x_mm - 1800.0).abs() < 1e-9);
        // symmetric about the centerline
        assert!((ducts[2].x_mm).abs() < 1e-9);
        // axis elevation: bottom cover + radius = 150 + 225
        assert!((ducts[0].y_mm - 375.0).abs() < 1e-9);
    }

    #[test]
    fn test_slab_tendons_one_more_than_ducts() {
        let geom = SlabGeometry::default();
        let layout = slab_tendon_layout(&geom).unwrap();
        assert_eq!(layout.count(), geom.duct_count + 1);
        // outermost tendons half a spacing beyond the outer ducts
        assert!((layout.tendons[0].x_mm + 2250.0).abs() < 1e-9);
        assert!((layout.tendons[5].x_mm - 2250.0).abs() < 1e-9);
        // anchors at the duct axis, low point at 150 mm
        assert_eq!(layout.tendons[0].y_end_mm, 375.0);
        assert_eq!(layout.tendons[0].y_mid_mm, 150.0);
    }

    #[test]
    fn test_layout_serialization_roundtrip() {
        let layout = girder_layout(5).unwrap();
        let json = serde_json::to_string(&layout).unwrap();
        let roundtrip: TendonLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(layout, roundtrip);
    }
}
