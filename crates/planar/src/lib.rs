//! 2D vector algebra, oblique coordinate systems, and arrow-glyph geometry.
//!
//! Layout
//! - `geom`: value-level vector operations and the affine `CoordSystem`
//!   frame (origin + two non-collinear basis vectors).
//! - `render`: converts a vector expressed in a `CoordSystem` into filled
//!   polygons (shaft quad + arrowhead) and hands them to a `DrawSurface`.
//!
//! The library is deterministic and single-threaded: every operation is a
//! pure O(1) computation over small `Copy` value types. Rasterization and
//! windowing belong to the caller's backend, behind the `DrawSurface` seam.

pub mod geom;
pub mod render;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{CoordSystem, GeomCfg, GeomError, Point2};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::vec::{
        angle_between, approx_eq, are_parallel, cross, is_zero, length, normalize, orthogonal,
        project_onto, rotate, VecDump,
    };
    pub use crate::geom::{CoordSystem, GeomCfg, GeomError, Point2};
    pub use crate::render::{
        arrow_geometry, draw_arrow, ArrowGeometry, ArrowStyle, Color, DrawSurface,
        RecordingSurface, Topology, Vertex,
    };
    pub use nalgebra::Vector2 as Vec2;
}
