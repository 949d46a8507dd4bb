//! Arrow-glyph geometry and the drawing-surface seam.
//!
//! `render` turns a vector expressed in a `CoordSystem` into a small
//! ordered list of flat-colored triangle-strip vertices. It performs no
//! rasterization: any backend that can take "N vertices with color C as
//! connected triangles" plugs in behind the `DrawSurface` trait.

pub mod arrow;
pub mod surface;

pub use arrow::{arrow_geometry, draw_arrow, ArrowGeometry, ArrowStyle};
pub use surface::{Batch, Color, DrawSurface, RecordingSurface, Topology, Vertex};
