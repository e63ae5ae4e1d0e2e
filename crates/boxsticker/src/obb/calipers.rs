//! Minimum-area enclosing rectangle via rotating calipers.
//!
//! Every hull edge direction is a candidate rectangle axis. Projecting the
//! hull onto the edge and its perpendicular gives the extents of the tightest
//! rectangle with that orientation; the smallest area wins.
//!
//! Determinism
//! - Candidates within `GeomCfg::eps_area_rel` (relative) of the incumbent
//!   do not replace it, so the first such edge in hull order wins.
//! - The reported angle is folded into (-90, 90].

use nalgebra::Vector2;

use super::types::{pow2_at_least, GeomCfg, OrientedRect};
use crate::error::GeometryError;

/// Fit the minimum-area rectangle around a convex hull in hull order.
///
/// Pre: `hull` comes from `convex_hull` (or is otherwise convex and ordered).
/// Post: `width` is the extent along the winning edge, `height` across it.
///
/// Projections run in a local frame anchored at `hull[0]` and scaled by a
/// power of two covering the largest coordinate offset, so inputs are
/// supported as long as those offsets stay below `2^1023`.
pub fn min_area_rect(
    hull: &[Vector2<f64>],
    cfg: GeomCfg,
) -> Result<OrientedRect, GeometryError> {
    if hull.is_empty() {
        return Err(GeometryError::EmptyInput);
    }
    if hull.len() < 3 {
        return Err(GeometryError::degenerate(format!(
            "hull has {} vertices, need at least 3",
            hull.len()
        )));
    }

    let origin = hull[0];
    let reach = hull.iter().map(|q| (q - origin).amax()).fold(0.0, f64::max);
    let scale = pow2_at_least(reach);
    if !(scale.is_finite() && scale > 0.0) {
        return Err(GeometryError::degenerate(format!(
            "hull offsets are not representable (reach {reach:e})"
        )));
    }
    let local: Vec<Vector2<f64>> = hull.iter().map(|q| (q - origin) / scale).collect();

    let n = local.len();
    let mut best: Option<(f64, OrientedRect)> = None;
    let mut extent = 0.0_f64;
    for i in 0..n {
        let p = local[i];
        let edge = local[(i + 1) % n] - p;
        let len = edge.norm();
        if len <= cfg.eps_dedup / scale {
            continue;
        }
        let u = edge / len;
        let v = Vector2::new(-u.y, u.x);

        let (mut lo_u, mut hi_u) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut lo_v, mut hi_v) = (f64::INFINITY, f64::NEG_INFINITY);
        for q in &local {
            let d = q - p;
            let a = u.dot(&d);
            let b = v.dot(&d);
            lo_u = lo_u.min(a);
            hi_u = hi_u.max(a);
            lo_v = lo_v.min(b);
            hi_v = hi_v.max(b);
        }
        let width = hi_u - lo_u;
        let height = hi_v - lo_v;
        let area = width * height;
        extent = extent.max(width).max(height);

        let replace = match &best {
            None => true,
            Some((best_area, _)) => area < best_area - cfg.eps_area_rel * best_area.abs(),
        };
        if replace {
            let center = p + u * (0.5 * (lo_u + hi_u)) + v * (0.5 * (lo_v + hi_v));
            let angle = fold_half_turn(u.y.atan2(u.x).to_degrees());
            let rect = OrientedRect::new(
                origin + center * scale,
                width * scale,
                height * scale,
                angle,
            );
            best = Some((area, rect));
        }
    }

    let (area, rect) = best.ok_or_else(|| GeometryError::degenerate("hull has no usable edge"))?;
    if !(area > cfg.eps_collinear * extent * extent) {
        return Err(GeometryError::degenerate(format!(
            "enclosing rectangle has zero area (relative {area:e})"
        )));
    }
    Ok(rect)
}

/// Fold an angle in degrees into (-90, 90]; an axis and its reverse describe
/// the same rectangle.
#[inline]
fn fold_half_turn(mut deg: f64) -> f64 {
    while deg > 90.0 {
        deg -= 180.0;
    }
    while deg <= -90.0 {
        deg += 180.0;
    }
    deg
}

#[cfg(test)]
mod tests {
    use super::fold_half_turn;

    #[test]
    fn fold_half_turn_range() {
        assert_eq!(fold_half_turn(0.0), 0.0);
        assert_eq!(fold_half_turn(90.0), 90.0);
        assert_eq!(fold_half_turn(-90.0), 90.0);
        assert_eq!(fold_half_turn(180.0), 0.0);
        assert_eq!(fold_half_turn(135.0), -45.0);
        assert_eq!(fold_half_turn(-135.0), 45.0);
    }
}
