//! # World Streaming
//!
//! The per-frame loop that decides which chunks are visible, pulls their
//! grids and meshes, and hands them to a sink for drawing.
//!
//! Visibility is deliberately coarse: a square of chunk coordinates around
//! the camera, minus everything behind the camera plane. Chunks whose anchor
//! projects negatively onto the camera's forward vector are skipped before
//! any generation or meshing happens, so looking away from unexplored
//! terrain never pays for it.

use cgmath::{EuclideanSpace, InnerSpace, Matrix4, Point3, Vector3};
use log::trace;

use crate::config::WorldConfig;
use crate::meshing::{ChunkMesher, Mesh};
use crate::voxels::world_generator::WorldGenerator;

use std::sync::Arc;

/// The single vertical chunk layer the streamer walks.
///
/// The world is one chunk tall; terrain variation lives inside the chunk
/// height, not in vertical chunk stacking.
pub const STREAMING_LAYER: i32 = 1;

/// Receiver for the chunks selected by a streaming pass.
///
/// A rendering backend implements this to record draw calls; tests implement
/// it to observe selection and ordering.
pub trait MeshSink {
    /// Accepts one visible chunk.
    ///
    /// # Arguments
    /// * `position` - The chunk coordinate
    /// * `transform` - Model matrix placing the unit-normalized mesh in the
    ///   world, a pure translation to the chunk anchor
    /// * `mesh` - The chunk's mesh, shared with the mesh cache
    fn draw_chunk(&mut self, position: Point3<i32>, transform: Matrix4<f32>, mesh: Arc<Mesh>);
}

/// A sink that only counts, for diagnostics and smoke runs.
#[derive(Debug, Default)]
pub struct StatsSink {
    /// Chunks handed to the sink during the pass.
    pub chunks_drawn: usize,
    /// Total vertices across those chunks.
    pub vertices_drawn: usize,
}

impl MeshSink for StatsSink {
    fn draw_chunk(&mut self, _position: Point3<i32>, _transform: Matrix4<f32>, mesh: Arc<Mesh>) {
        self.chunks_drawn += 1;
        self.vertices_drawn += mesh.len();
    }
}

/// Walks the camera's surroundings every pass and feeds visible chunk
/// meshes to a sink.
pub struct WorldStreamer {
    generator: WorldGenerator,
    mesher: ChunkMesher,
    radius: i32,
}

impl WorldStreamer {
    /// Creates a streamer with a fresh generator and mesh cache.
    pub fn new(config: &WorldConfig) -> Self {
        WorldStreamer {
            generator: WorldGenerator::new(config),
            mesher: ChunkMesher::new(config.atlas_size, config.mesh_cache_capacity),
            radius: config.streaming_radius,
        }
    }

    /// Runs one streaming pass.
    ///
    /// Visits the chunk square `[floor(camera) - radius, floor(camera) +
    /// radius)` on both horizontal axes, outer loop x, inner loop z, all at
    /// the fixed [`STREAMING_LAYER`]. Each chunk whose anchor lies in the
    /// camera's forward half-space is generated (or fetched), meshed (or
    /// fetched) and passed to `sink` in visit order.
    pub fn stream<S: MeshSink>(
        &mut self,
        camera_position: Point3<f32>,
        camera_forward: Vector3<f32>,
        sink: &mut S,
    ) {
        let base_x = camera_position.x.floor() as i32;
        let base_z = camera_position.z.floor() as i32;

        for x in (base_x - self.radius)..(base_x + self.radius) {
            for z in (base_z - self.radius)..(base_z + self.radius) {
                let position = Point3::new(x, STREAMING_LAYER, z);
                let anchor = Point3::new(x as f32, STREAMING_LAYER as f32, z as f32);

                if (anchor - camera_position).dot(camera_forward) < 0.0 {
                    trace!("chunk {:?} behind camera, skipped", position);
                    continue;
                }

                let chunk = self.generator.get_chunk(position);
                let mesh = self.mesher.mesh(position, &chunk, &mut self.generator);
                sink.draw_chunk(position, Matrix4::from_translation(anchor.to_vec()), mesh);
            }
        }
    }

    /// The streamer's world generator.
    pub fn generator(&self) -> &WorldGenerator {
        &self.generator
    }

    /// The streamer's mesher.
    pub fn mesher(&self) -> &ChunkMesher {
        &self.mesher
    }
}
