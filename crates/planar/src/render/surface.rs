//! The boundary between arrow geometry and a rendering backend.
//!
//! The core vector types stay backend-agnostic: adapting `Vertex` lists to
//! a concrete graphics API's vertex format happens on the implementor's
//! side of `DrawSurface`.

use nalgebra::Vector2;

/// Flat RGBA fill color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// How a vertex list is assembled into triangles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    TriangleStrip,
    TriangleFan,
}

/// One position with its fill color (no texture coordinates).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub pos: Vector2<f64>,
    pub color: Color,
}

/// A drawing surface that accepts connected-triangle primitives.
///
/// Borrowed exclusively for the duration of a draw call; implementations
/// own presentation and rasterization.
pub trait DrawSurface {
    fn submit(&mut self, vertices: &[Vertex], topology: Topology);
}

/// One submitted primitive.
#[derive(Clone, Debug)]
pub struct Batch {
    pub vertices: Vec<Vertex>,
    pub topology: Topology,
}

/// Records submitted batches instead of drawing them. Used by tests, the
/// examples, and the CLI's JSON output.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub batches: Vec<Batch>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total vertex count across all recorded batches.
    pub fn vertex_count(&self) -> usize {
        self.batches.iter().map(|b| b.vertices.len()).sum()
    }
}

impl DrawSurface for RecordingSurface {
    fn submit(&mut self, vertices: &[Vertex], topology: Topology) {
        self.batches.push(Batch {
            vertices: vertices.to_vec(),
            topology,
        });
    }
}
