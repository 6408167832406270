//! Renderer boundary types.
//!
//! The crate never draws. Each frame it produces a [`Batch`] of two
//! vertex streams plus the camera matrices, and the embedding layer's
//! [`Renderer`] uploads and draws it however it likes.
//!
//! [`Batch`]: struct.Batch.html
//! [`Renderer`]: trait.Renderer.html

use mint;

/// Linear RGB triplet.
pub type Color = [f32; 3];

/// A single colored vertex, laid out the way it is uploaded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    /// World-space position.
    pub pos: [f32; 3],
    /// Linear RGB color.
    pub color: Color,
}

/// Everything the external renderer needs for one frame.
///
/// Rebuilt from scratch every frame; nothing here outlives the draw.
#[derive(Clone, Debug)]
pub struct Batch {
    /// Colored line list, two vertices per segment.
    pub lines: Vec<Vertex>,
    /// Colored triangle list, three vertices per face.
    pub triangles: Vec<Vertex>,
    /// World-to-view matrix.
    pub view: mint::ColumnMatrix4<f32>,
    /// View-to-clip matrix.
    pub projection: mint::ColumnMatrix4<f32>,
}

impl Batch {
    /// Total vertex count across both streams. The embedding layer
    /// checks this against its buffer capacity before upload; the
    /// capacity contract lives on that side of the seam.
    pub fn vertex_count(&self) -> usize {
        self.lines.len() + self.triangles.len()
    }
}

/// External draw seam.
///
/// Implementations upload the two vertex streams and issue one
/// line-list and one triangle-list draw with the supplied matrices.
pub trait Renderer {
    /// Draw one frame.
    fn draw(&mut self, batch: &Batch);
}
