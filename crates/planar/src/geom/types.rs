//! Shared tolerance configuration and the geometry error taxonomy.
//!
//! - `GeomCfg`: centralizes the single near-zero epsilon used by every
//!   degeneracy and zero-length check in `geom` and `render`.
//! - `GeomError`: the three failure kinds surfaced by fallible operations.
//! - `Point2`: a position in world coordinates. Same representation and
//!   operations as a displacement `Vec2<f64>`; the distinction is usage
//!   convention only.

use nalgebra::Vector2;

/// A position in the canonical plane. Displacement rules (add/sub/scale)
/// apply unchanged; "rotating a point" means rotating around a
/// `CoordSystem` origin, not the global origin.
pub type Point2 = Vector2<f64>;

/// Geometry configuration (tolerances).
///
/// One `eps` drives all near-zero tests: zero-length operands, collinear
/// bases, degenerate determinants. Threaded explicitly so tests can
/// exercise boundary behavior at different tolerances.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps: 1e-6 }
    }
}

/// Failure kinds for the fallible geometry operations.
///
/// `InvariantViolation` marks conditions that construction-time checks make
/// unreachable in correct programs (a basis degenerating post-construction);
/// callers may treat it as a bug rather than a recoverable condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeomError {
    /// Precondition violation: non-finite angle or scale factor, or a
    /// degenerate (collinear) basis at construction.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// A divisor (vector length, product of lengths) is below eps.
    #[error("divide by near-zero quantity: {0}")]
    DivideByZero(&'static str),
    /// A maintained invariant no longer holds; indicates a bug upstream.
    #[error("invariant violation: {0}")]
    InvariantViolation(&'static str),
}
