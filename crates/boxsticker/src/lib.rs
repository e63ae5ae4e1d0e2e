//! Oriented-box geometry for sticker placement.
//!
//! Pipeline per detected object:
//! points → convex hull → minimum-area rectangle → angle normalization →
//! marker placement → corner polygons for rendering.
//!
//! Every stage is a pure function over immutable inputs. Objects are
//! independent, so callers may run many pipelines in parallel.

pub mod contour;
pub mod error;
pub mod obb;
pub mod pipeline;
pub mod placement;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GeometryError;
pub use nalgebra::Vector2 as Vec2;
pub use obb::{GeomCfg, OrientedRect};
pub use placement::{MarkerSpec, PlacementResult};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::contour::{largest_contour, polygon_area};
    pub use crate::error::GeometryError;
    pub use crate::obb::{convex_hull, min_area_rect, normalize_angle, GeomCfg, OrientedRect};
    pub use crate::pipeline::{
        axis_endpoint, locate, process_object, ObjectGeometry, ORIENTATION_AXIS_LEN,
    };
    pub use crate::placement::{place_marker, MarkerSpec, PlacementResult};
    pub use crate::sample::{draw_rect_cloud, CloudCfg, ReplayToken};
    pub use nalgebra::Vector2 as Vec2;
}
