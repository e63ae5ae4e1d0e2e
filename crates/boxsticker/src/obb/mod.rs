//! Oriented bounding boxes in image pixel coordinates.
//!
//! Purpose
//! - Reduce a boundary point set to its convex hull, fit the minimum-area
//!   enclosing rectangle by rotating calipers, and canonicalize its angle so
//!   the angle always describes the longer side.
//! - Provide the corner polygon of any oriented rectangle for rendering.
//!
//! Conventions
//! - Image frame: origin top-left, y grows downward. Angles are in degrees;
//!   a positive angle turns the local x-axis toward +y.
//! - Rotation of a local offset `(dx, dy)` by θ is the usual
//!   `(dx cosθ − dy sinθ, dx sinθ + dy cosθ)`.
//!
//! Code cross-refs: `hull::convex_hull`, `calipers::min_area_rect`,
//! `normalize::normalize_angle`, `corners::rect_corners`.

mod calipers;
mod corners;
mod hull;
mod normalize;
mod types;

pub use calipers::min_area_rect;
pub use corners::rect_corners;
pub use hull::convex_hull;
pub use normalize::normalize_angle;
pub use types::{GeomCfg, OrientedRect};
