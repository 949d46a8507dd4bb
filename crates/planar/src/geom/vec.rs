//! Free functions on `Vector2<f64>`: rotation, projection, normalization,
//! products, and the eps-aware predicates.
//!
//! Add, subtract, and scalar scaling are nalgebra's elementwise operators
//! (exact arithmetic, no failure mode) and are not wrapped here. Functions
//! that divide by a possibly-near-zero length return `Result` with
//! `GeomError::DivideByZero` instead of silently producing a wrong or
//! poisoned value.

use std::fmt;

use nalgebra::Vector2;

use super::types::{GeomCfg, GeomError};

/// Signed area of the parallelogram spanned by `a` and `b`. Positive for
/// a→b counterclockwise; doubles as the 2D determinant/orientation test.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Euclidean length via `hypot` (no overflow on large components).
#[inline]
pub fn length(v: Vector2<f64>) -> f64 {
    v.x.hypot(v.y)
}

/// Rotate `v` by `angle` radians (counterclockwise for positive angles).
///
/// Any finite angle is accepted; NaN/Inf is a precondition violation.
pub fn rotate(v: Vector2<f64>, angle: f64) -> Result<Vector2<f64>, GeomError> {
    if !angle.is_finite() {
        return Err(GeomError::InvalidArgument("non-finite rotation angle"));
    }
    let (sin, cos) = angle.sin_cos();
    Ok(Vector2::new(cos * v.x - sin * v.y, sin * v.x + cos * v.y))
}

/// `(-y, x)`: same length as `v`, rotated +90°. Always succeeds.
#[inline]
pub fn orthogonal(v: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-v.y, v.x)
}

/// Unit vector in the direction of `v`.
pub fn normalize(v: Vector2<f64>, cfg: GeomCfg) -> Result<Vector2<f64>, GeomError> {
    let len = length(v);
    if len < cfg.eps {
        return Err(GeomError::DivideByZero("normalize of near-zero vector"));
    }
    Ok(v / len)
}

/// Projection of `v` onto the line through `base`: a vector colinear with
/// `base` of signed length `(v·base)/|base|`.
pub fn project_onto(
    base: Vector2<f64>,
    v: Vector2<f64>,
    cfg: GeomCfg,
) -> Result<Vector2<f64>, GeomError> {
    let base_len = length(base);
    if base_len < cfg.eps {
        return Err(GeomError::DivideByZero("projection onto near-zero vector"));
    }
    Ok(base * (v.dot(&base) / (base_len * base_len)))
}

/// Unsigned angle between `a` and `b` in [0, π].
///
/// The cosine is clamped to [-1, 1] before `acos`: for exactly parallel or
/// anti-parallel inputs rounding can push `dot/(|a||b|)` slightly outside
/// the domain, and parallel vectors are legitimate input.
pub fn angle_between(a: Vector2<f64>, b: Vector2<f64>, cfg: GeomCfg) -> Result<f64, GeomError> {
    let len_a = length(a);
    let len_b = length(b);
    if len_a < cfg.eps || len_b < cfg.eps {
        return Err(GeomError::DivideByZero("angle with near-zero vector"));
    }
    let cosine = (a.dot(&b) / (len_a * len_b)).clamp(-1.0, 1.0);
    Ok(cosine.acos())
}

/// Componentwise approximate equality: `|ax-bx| < eps && |ay-by| < eps`.
#[inline]
pub fn approx_eq(a: Vector2<f64>, b: Vector2<f64>, cfg: GeomCfg) -> bool {
    (a.x - b.x).abs() < cfg.eps && (a.y - b.y).abs() < cfg.eps
}

/// Is `v` the zero vector, up to eps?
#[inline]
pub fn is_zero(v: Vector2<f64>, cfg: GeomCfg) -> bool {
    length(v) < cfg.eps
}

/// Are `a` and `b` parallel (spanning a near-zero parallelogram)?
#[inline]
pub fn are_parallel(a: Vector2<f64>, b: Vector2<f64>, cfg: GeomCfg) -> bool {
    cross(a, b).abs() < cfg.eps
}

/// Diagnostic one-line dump: `Vec { x=<value>, y=<value> }`.
///
/// Locale-independent shortest float format; purely diagnostic, not a
/// persisted representation.
pub struct VecDump(pub Vector2<f64>);

impl fmt::Display for VecDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec {{ x={}, y={} }}", self.0.x, self.0.y)
    }
}
