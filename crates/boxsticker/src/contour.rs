//! Choosing the object among several extracted contours.
//!
//! An image may yield many external contours; only the one enclosing the
//! largest area is treated as the object.

use nalgebra::Vector2;

use crate::error::GeometryError;

/// Absolute shoelace area of the closed polygon through `points` in order.
///
/// Returns 0 for fewer than three points.
pub fn polygon_area(points: &[Vector2<f64>]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        twice += a.x * b.y - a.y * b.x;
    }
    0.5 * twice.abs()
}

/// The contour with the largest enclosed area (first one on ties).
pub fn largest_contour(contours: &[Vec<Vector2<f64>>]) -> Result<&[Vector2<f64>], GeometryError> {
    let mut best: Option<(f64, &[Vector2<f64>])> = None;
    for c in contours {
        let area = polygon_area(c);
        if best.as_ref().is_none_or(|(a, _)| area > *a) {
            best = Some((area, c.as_slice()));
        }
    }
    best.map(|(_, c)| c).ok_or(GeometryError::EmptyInput)
}
