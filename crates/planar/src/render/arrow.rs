//! Arrow glyph construction: shaft quad + arrowhead kite.
//!
//! The head overlaps the last half of its length onto the shaft for a
//! clean miter; the shaft is only emitted when the vector is long enough
//! that a visible piece remains behind the head.

use nalgebra::Vector2;

use crate::geom::vec;
use crate::geom::CoordSystem;

use super::surface::{Color, DrawSurface, Topology, Vertex};

/// Arrowhead length as a multiple of the stroke width.
pub const HEAD_LENGTH_PER_WIDTH: f64 = 8.0;
/// Arrowhead width as a multiple of the stroke width.
pub const HEAD_WIDTH_PER_WIDTH: f64 = 4.0;

/// Stroke width and fill color of an arrow glyph.
#[derive(Clone, Copy, Debug)]
pub struct ArrowStyle {
    pub width: f64,
    pub color: Color,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            color: Color::BLACK,
        }
    }
}

/// World-space polygons of one arrow glyph, in triangle-strip vertex order.
///
/// `shaft` is `None` when the target is shorter than half the arrowhead
/// (the head alone covers it). The head is a kite: back-left, tip,
/// shaft-junction, back-right.
#[derive(Clone, Copy, Debug)]
pub struct ArrowGeometry {
    pub shaft: Option<[Vector2<f64>; 4]>,
    pub head: [Vector2<f64>; 4],
}

/// Compute the glyph for `local` drawn through `cs` at stroke `width`.
///
/// Returns `None` for a near-zero target vector: zero vectors are not
/// drawn, by definition rather than by error.
pub fn arrow_geometry(
    local: Vector2<f64>,
    cs: &CoordSystem,
    width: f64,
) -> Option<ArrowGeometry> {
    let cfg = cs.cfg();
    let target = cs.to_world(local);
    let len = vec::length(target);
    if len < cfg.eps {
        return None;
    }

    let norm = vec::normalize(target, cfg).ok()?;
    let orth = vec::orthogonal(norm);

    let head_length = HEAD_LENGTH_PER_WIDTH * width;
    let head_width = HEAD_WIDTH_PER_WIDTH * width;

    let tail = cs.origin();
    let head_end = tail + target;
    // Where the shaft meets the head; the head overlaps half its length.
    let head_start = head_end - norm * (head_length / 2.0);

    let shaft = (len > head_length / 2.0).then(|| {
        let half = orth * (width / 2.0);
        [
            tail - half,
            tail + half,
            head_start + half,
            head_start - half,
        ]
    });

    let head_back = head_end - norm * head_length;
    let half = orth * (head_width / 2.0);
    let head = [head_back - half, head_end, head_start, head_back + half];

    Some(ArrowGeometry { shaft, head })
}

/// Draw `local` through `cs` onto `surface`: shaft strip (if any), then
/// the head strip. A zero-length target submits nothing.
pub fn draw_arrow(
    local: Vector2<f64>,
    cs: &CoordSystem,
    style: ArrowStyle,
    surface: &mut dyn DrawSurface,
) {
    let Some(geometry) = arrow_geometry(local, cs, style.width) else {
        return;
    };
    if let Some(shaft) = geometry.shaft {
        submit_strip(surface, &shaft, style.color);
    }
    submit_strip(surface, &geometry.head, style.color);
}

fn submit_strip(surface: &mut dyn DrawSurface, quad: &[Vector2<f64>; 4], color: Color) {
    let vertices: Vec<Vertex> = quad.iter().map(|&pos| Vertex { pos, color }).collect();
    surface.submit(&vertices, Topology::TriangleStrip);
}
