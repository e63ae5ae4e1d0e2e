//! Per-object pipeline: points → hull → min-area rect → normalize → placement.
//!
//! `ObjectGeometry` bundles everything a renderer needs for one object.

use nalgebra::Vector2;

use crate::error::GeometryError;
use crate::obb::{convex_hull, min_area_rect, normalize_angle, GeomCfg, OrientedRect};
use crate::placement::{place_marker, MarkerSpec, PlacementResult};

/// Length in pixels of the orientation indicator drawn from the box center.
pub const ORIENTATION_AXIS_LEN: f64 = 100.0;

/// Normalized oriented rectangle of a boundary point set.
pub fn locate(points: &[Vector2<f64>], cfg: GeomCfg) -> Result<OrientedRect, GeometryError> {
    let hull = convex_hull(points, cfg)?;
    let raw = min_area_rect(&hull, cfg)?;
    Ok(normalize_angle(raw))
}

/// End point of the orientation indicator of length `len` starting at the center.
#[inline]
pub fn axis_endpoint(rect: &OrientedRect, len: f64) -> Vector2<f64> {
    let th = rect.angle.to_radians();
    rect.center + Vector2::new(th.cos(), th.sin()) * len
}

/// Render-ready geometry of one detected object.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectGeometry {
    pub rect: OrientedRect,
    pub rect_corners: [Vector2<f64>; 4],
    pub placement: PlacementResult,
    pub marker_corners: [Vector2<f64>; 4],
    pub orientation_axis: Vector2<f64>,
}

impl ObjectGeometry {
    /// Normalized angle rounded to two decimals for reports.
    pub fn display_angle(&self) -> f64 {
        (self.rect.angle * 100.0).round() / 100.0
    }

    /// Marker center truncated toward zero to whole pixels.
    pub fn marker_pixel(&self) -> (i64, i64) {
        let c = self.placement.marker.center;
        (c.x.trunc() as i64, c.y.trunc() as i64)
    }
}

/// Run the full pipeline for one object.
pub fn process_object(
    points: &[Vector2<f64>],
    marker: &MarkerSpec,
    cfg: GeomCfg,
) -> Result<ObjectGeometry, GeometryError> {
    let rect = locate(points, cfg)?;
    let placement = place_marker(&rect, marker);
    Ok(ObjectGeometry {
        rect,
        rect_corners: rect.corners(),
        placement,
        marker_corners: placement.marker.corners(),
        orientation_axis: axis_endpoint(&rect, ORIENTATION_AXIS_LEN),
    })
}
