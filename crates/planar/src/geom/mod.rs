//! 2D vector algebra over `nalgebra::Vector2<f64>` plus the affine
//! coordinate-system frame.
//!
//! Purpose
//! - Keep the API minimal and numerically explicit (eps-aware): every
//!   near-zero test in this module goes through one shared tolerance,
//!   `GeomCfg::eps`, so upstream and downstream checks agree on what
//!   counts as "effectively zero".
//! - Elementwise add/sub/scale come straight from nalgebra's operator
//!   impls; everything with a failure mode or a degeneracy check lives
//!   here as a named free function or `CoordSystem` method.

pub mod coord;
pub mod types;
pub mod vec;

pub use coord::CoordSystem;
pub use types::{GeomCfg, GeomError, Point2};

#[cfg(test)]
mod tests;
