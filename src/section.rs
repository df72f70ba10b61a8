//! # Section Property Calculator
//!
//! Decomposes a cross-section into primitive parts (rectangles, wide-base
//! triangles, circular voids with negative area), then computes the
//! composite centroid, moment of inertia by the parallel-axis theorem, and
//! the section moduli. All results are in meters.
//!
//! The part tables are fixed per section type:
//!
//! - **I-girder**: top flange, 2 top haunches, web, 2 bottom haunches,
//!   bottom flange (all rectangles).
//! - **Voided slab**: main rectangle, 2 cantilevers (rectangle + triangle),
//!   N circular duct voids subtracted.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::geometry::{GirderGeometry, SlabGeometry};
use crate::units::{Meters, Millimeters};

/// Derived cross-section properties (SI units). Immutable value computed
/// once per geometry; recomputed from scratch whenever the geometry
/// changes.
///
/// ## JSON Example
///
/// ```json
/// {
///   "gross_area_m2": 0.65,
///   "net_area_m2": 0.65,
///   "height_m": 1.7,
///   "centroid_from_bottom_m": 0.84,
///   "centroid_from_top_m": 0.86,
///   "moment_of_inertia_m4": 0.27,
///   "section_modulus_top_m3": 0.31,
///   "section_modulus_bottom_m3": 0.32
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Gross concrete area, voids not deducted (m²)
    pub gross_area_m2: f64,
    /// Net concrete area, duct voids deducted (m²); equals gross for the
    /// solid girder
    pub net_area_m2: f64,
    /// Overall section height (m)
    pub height_m: f64,
    /// Centroid elevation above the bottom fiber (m)
    pub centroid_from_bottom_m: f64,
    /// Centroid depth below the top fiber (m)
    pub centroid_from_top_m: f64,
    /// Moment of inertia about the centroid (m⁴)
    pub moment_of_inertia_m4: f64,
    /// Section modulus at the top fiber, I / y_top (m³)
    pub section_modulus_top_m3: f64,
    /// Section modulus at the bottom fiber, I / y_bottom (m³)
    pub section_modulus_bottom_m3: f64,
}

/// A primitive part of the decomposition. Area is signed (negative for
/// voids); centroid is measured from the bottom fiber.
struct Part {
    area: f64,
    centroid: f64,
    self_inertia: f64,
}

impl Part {
    fn rectangle(width: f64, height: f64, centroid: f64) -> Part {
        Part {
            area: width * height,
            centroid,
            self_inertia: width * height.powi(3) / 12.0,
        }
    }

    /// Triangle attached along its wide (horizontal) edge.
    fn triangle(base: f64, height: f64, centroid: f64) -> Part {
        Part {
            area: 0.5 * base * height,
            centroid,
            self_inertia: base * height.powi(3) / 36.0,
        }
    }

    fn circular_void(diameter: f64, centroid: f64) -> Part {
        let r = diameter / 2.0;
        Part {
            area: -(PI * r * r),
            centroid,
            self_inertia: -(PI * r.powi(4) / 4.0),
        }
    }
}

/// Composite centroid, inertia and moduli over a part list.
fn composite(parts: &[Part], height_m: f64, gross_area_m2: f64) -> CalcResult<SectionProperties> {
    let net_area: f64 = parts.iter().map(|p| p.area).sum();
    if net_area <= 0.0 {
        return Err(CalcError::invalid_geometry(
            "net_area_m2",
            net_area,
            "section decomposition yields no positive area",
        ));
    }

    let moment_area: f64 = parts.iter().map(|p| p.area * p.centroid).sum();
    let y_bar = moment_area / net_area;
    if y_bar <= 0.0 || y_bar >= height_m {
        return Err(CalcError::invalid_geometry(
            "centroid_from_bottom_m",
            y_bar,
            "composite centroid falls outside the section",
        ));
    }

    let inertia: f64 = parts
        .iter()
        .map(|p| p.self_inertia + p.area * (p.centroid - y_bar).powi(2))
        .sum();
    if inertia <= 0.0 {
        return Err(CalcError::invalid_geometry(
            "moment_of_inertia_m4",
            inertia,
            "composite inertia is not positive",
        ));
    }

    let y_top = height_m - y_bar;
    Ok(SectionProperties {
        gross_area_m2,
        net_area_m2: net_area,
        height_m,
        centroid_from_bottom_m: y_bar,
        centroid_from_top_m: y_top,
        moment_of_inertia_m4: inertia,
        section_modulus_top_m3: inertia / y_top,
        section_modulus_bottom_m3: inertia / y_bar,
    })
}

/// Compute section properties for a PCI I-girder.
///
/// Returns `InvalidGeometry` for any non-positive or inconsistent
/// dimension; never panics or divides by a zero area.
pub fn girder_section_properties(geometry: &GirderGeometry) -> CalcResult<SectionProperties> {
    let d = geometry.normalized()?;
    let web_height = d.web_height();

    let parts = [
        // top flange
        Part::rectangle(
            d.top_flange_width,
            d.top_flange_thickness,
            d.height - d.top_flange_thickness / 2.0,
        ),
        // top haunches, one each side of the web
        Part::rectangle(
            d.top_flange_width - d.web_width,
            d.top_haunch_height,
            d.height - d.top_flange_thickness - d.top_haunch_height / 2.0,
        ),
        // web
        Part::rectangle(
            d.web_width,
            web_height,
            d.bottom_flange_thickness + d.bottom_haunch_height + web_height / 2.0,
        ),
        // bottom haunches
        Part::rectangle(
            2.0 * d.bottom_haunch_width,
            d.bottom_haunch_height,
            d.bottom_flange_thickness + d.bottom_haunch_height / 2.0,
        ),
        // bottom flange, including the haunch overhangs
        Part::rectangle(
            d.web_width + 2.0 * d.bottom_haunch_width,
            d.bottom_flange_thickness,
            d.bottom_flange_thickness / 2.0,
        ),
    ];

    let gross: f64 = parts.iter().map(|p| p.area).sum();
    composite(&parts, d.height, gross)
}

/// Compute section properties for a voided slab deck. The duct voids are
/// deducted from both area and inertia; `gross_area_m2` keeps the
/// un-deducted value for self-weight of the solid end zones.
pub fn slab_section_properties(geometry: &SlabGeometry) -> CalcResult<SectionProperties> {
    geometry.validate()?;
    let m = |mm: f64| Meters::from(Millimeters(mm)).value();

    let height = m(geometry.overall_height_mm());
    let slab_width = m(geometry.slab_width_mm());
    let cantilever_width = m(geometry.cantilever_width_mm);
    let edge_thickness = m(geometry.cantilever_edge_thickness_mm);
    let taper_height = m(geometry.cantilever_taper_height_mm);
    let duct_diameter = m(geometry.duct_diameter_mm);
    let duct_axis = height - m(geometry.duct_cover_top_mm) - duct_diameter / 2.0;

    let mut parts = vec![
        // main slab rectangle
        Part::rectangle(slab_width, height, height / 2.0),
        // cantilever edge rectangles (both sides), hung from the top fiber
        Part::rectangle(
            2.0 * cantilever_width,
            edge_thickness,
            height - edge_thickness / 2.0,
        ),
    ];
    // cantilever taper triangles, wide edge at the underside of the edge
    // rectangle, apex pointing down
    let triangle_centroid = height - edge_thickness - taper_height / 3.0;
    parts.push(Part::triangle(
        cantilever_width,
        taper_height,
        triangle_centroid,
    ));
    parts.push(Part::triangle(
        cantilever_width,
        taper_height,
        triangle_centroid,
    ));

    let gross: f64 = parts.iter().map(|p| p.area).sum();

    for _ in 0..geometry.duct_count {
        parts.push(Part::circular_void(duct_diameter, duct_axis));
    }

    composite(&parts, height, gross)
}
