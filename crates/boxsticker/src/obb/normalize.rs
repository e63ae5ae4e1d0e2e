use super::types::OrientedRect;

/// Canonicalize so `angle` describes the longer side.
///
/// If `width < height` the sides are swapped and 90° is added; the result may
/// leave (-90, 90] (up to 180) and is not wrapped again. Squares pass through
/// unchanged.
#[inline]
pub fn normalize_angle(rect: OrientedRect) -> OrientedRect {
    if rect.width < rect.height {
        OrientedRect {
            width: rect.height,
            height: rect.width,
            angle: rect.angle + 90.0,
            ..rect
        }
    } else {
        rect
    }
}
