use nalgebra::Vector2;

use super::types::{pow2_at_least, GeomCfg};
use crate::error::GeometryError;

/// Andrew's monotone chain convex hull.
///
/// Returns the hull with positive signed area (counter-clockwise in a y-up
/// frame, which appears clockwise on screen), without a repeated closing
/// point and without collinear boundary points.
///
/// Errors
/// - `EmptyInput` for no points, `NonFinitePoint` for NaN/∞ coordinates.
/// - `DegenerateGeometry` when fewer than three hull vertices remain
///   (one distinct point, a segment, or collinear input).
pub fn convex_hull(
    points: &[Vector2<f64>],
    cfg: GeomCfg,
) -> Result<Vec<Vector2<f64>>, GeometryError> {
    if points.is_empty() {
        return Err(GeometryError::EmptyInput);
    }
    if let Some(index) = points.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
        return Err(GeometryError::NonFinitePoint { index });
    }
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup_by(|a, b| (*a - *b).norm() <= cfg.eps_dedup);
    if pts.len() < 3 {
        return Err(GeometryError::degenerate(format!(
            "{} distinct point(s), need at least 3",
            pts.len()
        )));
    }

    let mut lower: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    if hull.len() < 3 {
        return Err(GeometryError::degenerate("all points are collinear"));
    }
    Ok(hull)
}

/// Sign-exact z-component of `(b − a) × (c − a)`; positive for a left turn.
///
/// Offsets are rescaled by a power of two before multiplying so the products
/// cannot overflow for very large coordinates.
#[inline]
fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    let reach = ab.amax().max(ac.amax());
    if reach == 0.0 {
        return 0.0;
    }
    let s = pow2_at_least(reach);
    let (ab, ac) = (ab / s, ac / s);
    ab.x * ac.y - ab.y * ac.x
}
