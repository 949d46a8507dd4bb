//! Affine coordinate frame: an origin plus two non-collinear basis vectors.
//!
//! The basis need not be orthogonal or unit-length; construction rejects a
//! collinear pair so the 2×2 linear map stays invertible. `to_world` and
//! `to_local` are exact inverses up to floating-point error and basis
//! conditioning.

use nalgebra::Vector2;

use super::types::{GeomCfg, GeomError, Point2};
use super::vec;

/// An oblique coordinate system in the canonical plane.
///
/// Invariants:
/// - `|cross(unit_x, unit_y)| >= cfg.eps` (invertible basis), established
///   at construction and preserved by `translate`, `rotate`, and `scale`.
#[derive(Clone, Copy, Debug)]
pub struct CoordSystem {
    origin: Point2,
    unit_x: Vector2<f64>,
    unit_y: Vector2<f64>,
    cfg: GeomCfg,
}

impl CoordSystem {
    /// Build a frame from an origin and two basis vectors.
    ///
    /// Fails with `InvalidArgument` when the basis is collinear; a
    /// degenerate frame must not reach a usable state.
    pub fn new(
        origin: Point2,
        unit_x: Vector2<f64>,
        unit_y: Vector2<f64>,
        cfg: GeomCfg,
    ) -> Result<Self, GeomError> {
        if vec::cross(unit_x, unit_y).abs() < cfg.eps {
            return Err(GeomError::InvalidArgument("collinear basis vectors"));
        }
        Ok(Self {
            origin,
            unit_x,
            unit_y,
            cfg,
        })
    }

    #[inline]
    pub fn origin(&self) -> Point2 {
        self.origin
    }

    #[inline]
    pub fn unit_x(&self) -> Vector2<f64> {
        self.unit_x
    }

    #[inline]
    pub fn unit_y(&self) -> Vector2<f64> {
        self.unit_y
    }

    #[inline]
    pub fn cfg(&self) -> GeomCfg {
        self.cfg
    }

    /// Move the origin by `delta` (world coordinates). Always succeeds.
    pub fn translate(&mut self, delta: Vector2<f64>) {
        self.origin += delta;
    }

    /// Rotate both basis vectors around the origin by `angle` radians.
    ///
    /// A pure rotation preserves the cross product of the basis, so the
    /// invertibility invariant survives.
    pub fn rotate(&mut self, angle: f64) -> Result<(), GeomError> {
        let unit_x = vec::rotate(self.unit_x, angle)?;
        let unit_y = vec::rotate(self.unit_y, angle)?;
        self.unit_x = unit_x;
        self.unit_y = unit_y;
        Ok(())
    }

    /// Scale both basis vectors by `factor`.
    ///
    /// Near-zero or non-finite factors are rejected: they would collapse
    /// the basis and break invertibility.
    pub fn scale(&mut self, factor: f64) -> Result<(), GeomError> {
        if !factor.is_finite() || factor.abs() < self.cfg.eps {
            return Err(GeomError::InvalidArgument("degenerate scale factor"));
        }
        self.unit_x *= factor;
        self.unit_y *= factor;
        Ok(())
    }

    /// Forward change of basis: `local.x * unit_x + local.y * unit_y`.
    ///
    /// Direction transform only; no origin offset is added. Callers that
    /// want the world-space endpoint add `origin()` themselves.
    #[inline]
    pub fn to_world(&self, local: Vector2<f64>) -> Vector2<f64> {
        self.unit_x * local.x + self.unit_y * local.y
    }

    /// Inverse change of basis via Cramer's rule on
    /// `[unit_x | unit_y] * local = world`.
    ///
    /// The determinant is recomputed from the current basis on every call,
    /// never cached. A near-zero determinant is an `InvariantViolation`:
    /// construction and the mutation paths keep it unreachable.
    pub fn to_local(&self, world: Vector2<f64>) -> Result<Vector2<f64>, GeomError> {
        let delta = self.unit_x.x * self.unit_y.y - self.unit_x.y * self.unit_y.x;
        debug_assert!(delta.abs() >= self.cfg.eps, "basis degenerated after construction");
        if delta.abs() < self.cfg.eps {
            return Err(GeomError::InvariantViolation("degenerate basis in to_local"));
        }
        let delta_x = world.x * self.unit_y.y - self.unit_y.x * world.y;
        let delta_y = self.unit_x.x * world.y - world.x * self.unit_x.y;
        Ok(Vector2::new(delta_x / delta, delta_y / delta))
    }
}
