use nalgebra::Vector2;

use super::types::OrientedRect;

/// Four corners of an oriented rectangle.
///
/// Order: local `(+w/2, −h/2)`, `(+w/2, +h/2)`, `(−w/2, +h/2)`, `(−w/2, −h/2)`,
/// i.e. starting top-right of the unrotated box and running clockwise on
/// screen (y down). The same routine serves the object box and the marker.
pub fn rect_corners(rect: &OrientedRect) -> [Vector2<f64>; 4] {
    let hw = 0.5 * rect.width;
    let hh = 0.5 * rect.height;
    let rot = rect.rotation();
    [
        Vector2::new(hw, -hh),
        Vector2::new(hw, hh),
        Vector2::new(-hw, hh),
        Vector2::new(-hw, -hh),
    ]
    .map(|local| rect.center + rot * local)
}
