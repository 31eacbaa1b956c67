//! Vertex data for chunk meshes.
//!
//! The layout is plain interleaved position + texture coordinate, `repr(C)`
//! and `bytemuck`-castable so a rendering backend can upload a mesh's vertex
//! list as one byte slice without copying.

use cgmath::Point3;

/// A single mesh vertex: chunk-local position and atlas texture coordinate.
///
/// Positions are normalized to `[0, 1]` per axis within the chunk footprint
/// (block coordinates divided by the chunk width); the vertical axis can
/// exceed 1 for chunks taller than they are wide.
///
/// # Memory Layout
/// - Position: `[f32; 3]` (12 bytes)
/// - Texture coordinates: `[f32; 2]` (8 bytes)
///
/// Total size: 20 bytes, no padding.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Chunk-local normalized position.
    pub position: [f32; 3],
    /// Atlas-relative texture coordinates.
    pub tex_coords: [f32; 2],
}

impl Vertex {
    /// Creates a new vertex.
    pub fn new(position: Point3<f32>, tex_coords: [f32; 2]) -> Self {
        Vertex {
            position: [position.x, position.y, position.z],
            tex_coords,
        }
    }
}
