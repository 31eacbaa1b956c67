//! The chunk mesh: a flat triangle-list vertex buffer.

use cgmath::{Point3, Vector3};

use super::face::{FaceTemplate, QUAD_FAN};
use super::vertex::Vertex;

/// The renderable surface of one chunk.
///
/// Vertices are grouped implicitly in triples forming triangles, two
/// triangles per emitted quad; there is no index buffer. A mesh is built
/// once by the mesher, wrapped in `Arc`, and never mutated afterwards, so a
/// rendering backend may hold on to the vertex list by handle.
#[derive(Debug, Default)]
pub struct Mesh {
    vertices: Vec<Vertex>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub(crate) fn new() -> Self {
        Mesh::default()
    }

    /// Appends one quad (six vertices) for a visible face.
    ///
    /// Template corners are offset by the cell position and divided by the
    /// chunk width to land in chunk-local normalized coordinates. Texture u
    /// coordinates are compressed into one atlas column and shifted to the
    /// material's column.
    pub(crate) fn add_face(
        &mut self,
        template: &FaceTemplate,
        cell: Vector3<f32>,
        chunk_width: f32,
        atlas_size: f32,
        u_offset: f32,
    ) {
        for &corner in QUAD_FAN.iter() {
            let p = template.corners[corner];
            let uv = template.uvs[corner];
            self.vertices.push(Vertex::new(
                Point3::new(
                    (p[0] + cell.x) / chunk_width,
                    (p[1] + cell.y) / chunk_width,
                    (p[2] + cell.z) / chunk_width,
                ),
                [uv[0] / atlas_size + u_offset, uv[1]],
            ));
        }
    }

    /// The vertex list, three consecutive vertices per triangle.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Number of vertices in the mesh.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the mesh holds no geometry (a fully air or buried chunk).
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of quads emitted into this mesh.
    pub fn face_count(&self) -> usize {
        self.vertices.len() / 6
    }

    /// The vertex list as raw bytes, ready for buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}
