//! Marker placement relative to an oriented rectangle.
//!
//! The marker is anchored near the local corner `(+w/2, −h/2)`, inset by
//! `offset` pixels along each local axis (not a Euclidean inset), and
//! inherits the source rectangle's angle. Anchors that fall outside the
//! rectangle (`offset > w/2` or `offset > h/2`) are allowed.

use nalgebra::Vector2;

use crate::error::GeometryError;
use crate::obb::OrientedRect;

/// Marker configuration: inset from the anchor corner plus footprint, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerSpec {
    pub offset: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for MarkerSpec {
    fn default() -> Self {
        Self {
            offset: 30.0,
            width: 40.0,
            height: 20.0,
        }
    }
}

impl MarkerSpec {
    /// Build a spec; every field must be finite and strictly positive.
    pub fn new(offset: f64, width: f64, height: f64) -> Result<Self, GeometryError> {
        for (name, value) in [("offset", offset), ("width", width), ("height", height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(GeometryError::invalid_marker(format!(
                    "{name} must be a finite positive number, got {value}"
                )));
            }
        }
        Ok(Self {
            offset,
            width,
            height,
        })
    }
}

/// Marker rectangle plus the image-frame vector from the source center to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementResult {
    pub marker: OrientedRect,
    pub vector_from_center: Vector2<f64>,
}

impl PlacementResult {
    #[inline]
    pub fn marker_center(&self) -> Vector2<f64> {
        self.marker.center
    }
}

/// Unrotated offset from the rectangle center to the marker center.
#[inline]
pub fn anchor_offset(rect: &OrientedRect, spec: &MarkerSpec) -> Vector2<f64> {
    Vector2::new(
        0.5 * rect.width - spec.offset,
        -0.5 * rect.height + spec.offset,
    )
}

/// Place the marker for a normalized source rectangle.
pub fn place_marker(rect: &OrientedRect, spec: &MarkerSpec) -> PlacementResult {
    let vector_from_center = rect.rotation() * anchor_offset(rect, spec);
    PlacementResult {
        marker: OrientedRect::new(
            rect.center + vector_from_center,
            spec.width,
            spec.height,
            rect.angle,
        ),
        vector_from_center,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn source(angle: f64) -> OrientedRect {
        OrientedRect::new(vector![100.0, 100.0], 200.0, 100.0, angle)
    }

    fn spec30() -> MarkerSpec {
        MarkerSpec::new(30.0, 40.0, 20.0).unwrap()
    }

    #[test]
    fn unrotated_marker_center() {
        let res = place_marker(&source(0.0), &spec30());
        assert!((res.marker.center - vector![170.0, 80.0]).norm() < 1e-9);
        assert!((res.vector_from_center - vector![70.0, -20.0]).norm() < 1e-9);
        assert_eq!(res.marker.angle, 0.0);
        assert_eq!((res.marker.width, res.marker.height), (40.0, 20.0));
    }

    #[test]
    fn quarter_turn_marker_center() {
        let res = place_marker(&source(90.0), &spec30());
        assert!((res.marker.center - vector![120.0, 170.0]).norm() < 1e-9);
        assert_eq!(res.marker.angle, 90.0);
    }

    #[test]
    fn anchor_outside_rect_is_permitted() {
        // offset larger than both half extents: anchor lands beyond the opposite sides
        let spec = MarkerSpec::new(120.0, 10.0, 10.0).unwrap();
        let res = place_marker(&source(0.0), &spec);
        assert!((res.marker.center - vector![80.0, 170.0]).norm() < 1e-9);
    }

    #[test]
    fn marker_spec_rejects_non_positive() {
        assert!(MarkerSpec::new(0.0, 40.0, 20.0).is_err());
        assert!(MarkerSpec::new(30.0, -1.0, 20.0).is_err());
        assert!(matches!(
            MarkerSpec::new(30.0, 40.0, f64::NAN),
            Err(GeometryError::InvalidMarker { .. })
        ));
        assert_eq!(MarkerSpec::default(), spec30());
    }
}
