//! Basic oriented-rectangle type and tolerances.
//!
//! - `GeomCfg`: centralizes epsilons for duplicate removal, tie-breaks, and
//!   zero-area detection.
//! - `OrientedRect`: center, width, height, angle (degrees).

use nalgebra::{Rotation2, Vector2};

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Points closer than this are treated as one.
    pub eps_dedup: f64,
    /// Relative area tolerance under which two caliper candidates tie.
    pub eps_area_rel: f64,
    /// Area below `eps_collinear * extent²` counts as zero.
    pub eps_collinear: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_dedup: 1e-12,
            eps_area_rel: 1e-9,
            eps_collinear: 1e-12,
        }
    }
}

/// Smallest power of two not below `x` (for finite `x > 0`).
///
/// Dividing by it is exact, so scaled coordinates keep every sign and tie of
/// the unscaled ones while staying far from overflow.
#[inline]
pub(crate) fn pow2_at_least(x: f64) -> f64 {
    x.log2().ceil().exp2()
}

/// Rectangle with arbitrary orientation.
///
/// Invariants:
/// - `width >= 0`, `height >= 0`; either being zero means degenerate.
/// - `width` runs along the local x-axis, which sits at `angle` degrees from
///   the image x-axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedRect {
    pub center: Vector2<f64>,
    pub width: f64,
    pub height: f64,
    pub angle: f64,
}

impl OrientedRect {
    #[inline]
    pub fn new(center: Vector2<f64>, width: f64, height: f64, angle: f64) -> Self {
        Self {
            center,
            width,
            height,
            angle,
        }
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Rotation taking the local frame onto the image frame.
    #[inline]
    pub fn rotation(&self) -> Rotation2<f64> {
        Rotation2::new(self.angle.to_radians())
    }

    /// Map a local-frame offset to an image-frame point.
    #[inline]
    pub fn to_image(&self, local: Vector2<f64>) -> Vector2<f64> {
        self.center + self.rotation() * local
    }

    /// Corner points; see `rect_corners` for the ordering.
    #[inline]
    pub fn corners(&self) -> [Vector2<f64>; 4] {
        super::corners::rect_corners(self)
    }
}
