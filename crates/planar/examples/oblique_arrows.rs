//! Draw a small arrow scene through an oblique coordinate system and print
//! the recorded primitives.
//!
//! The frame is deliberately non-orthogonal (basis (50,10)/(10,50) at
//! origin (100,100)) so the glyphs shear visibly; a windowed backend would
//! rasterize the same batches.

use nalgebra::vector;
use planar::geom::vec::VecDump;
use planar::geom::{CoordSystem, GeomCfg};
use planar::render::{draw_arrow, ArrowStyle, Color, RecordingSurface};

fn main() {
    let cfg = GeomCfg::default();
    let cs = CoordSystem::new(
        vector![100.0, 100.0],
        vector![50.0, 10.0],
        vector![10.0, 50.0],
        cfg,
    )
    .expect("non-collinear basis");

    let style = ArrowStyle {
        width: 3.0,
        color: Color::BLACK,
    };
    let mut surface = RecordingSurface::new();
    for v in [
        vector![2.0, 5.0],
        vector![9.0, 2.0],
        vector![1.0, 0.0],
        vector![0.0, 1.0],
    ] {
        draw_arrow(v, &cs, style, &mut surface);
    }

    println!(
        "recorded {} batches, {} vertices",
        surface.batches.len(),
        surface.vertex_count()
    );
    for (i, batch) in surface.batches.iter().enumerate() {
        println!("batch {} ({:?}):", i, batch.topology);
        for vertex in &batch.vertices {
            println!("  {}", VecDump(vertex.pos));
        }
    }
}
