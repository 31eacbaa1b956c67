//! # Chunk Meshing
//!
//! Conversion of chunk grids into renderable triangle lists.
//!
//! ## Face Culling
//!
//! Every non-air cell is tested against its six axis-aligned neighbors and
//! emits one quad per neighbor that is air. Neighbors outside the grid are
//! resolved by rule:
//!
//! * below the bottom layer: solid — the world has a closed floor and the
//!   downward face of the lowest layer is never rendered
//! * above the build volume: air — upward faces at the top are always
//!   rendered
//! * across a horizontal chunk boundary: the adjacent chunk's boundary cell,
//!   fetched through [`ChunkSource`]; this generates the neighbor's voxel
//!   data if needed but never meshes it
//!
//! ## Caching
//!
//! Finished meshes are kept in a capacity-bounded FIFO cache keyed by chunk
//! coordinate (see [`crate::core::BoundedCache`] for the eviction contract).
//! Terrain is immutable, so a cached mesh never goes stale; eviction exists
//! purely to bound memory.

use std::num::NonZeroUsize;
use std::sync::Arc;

use cgmath::{Point3, Vector3};
use log::debug;

use crate::core::BoundedCache;
use crate::voxels::block::{block_type::atlas_u_offset, BlockSide, BLOCK_AIR};
use crate::voxels::chunk::Chunk;
use crate::voxels::world_generator::ChunkSource;

pub mod face;
pub mod mesh;
pub mod vertex;

pub use mesh::Mesh;
pub use vertex::Vertex;

use face::FACE_TEMPLATES;

/// Turns chunk grids into meshes, with a bounded cache of results.
pub struct ChunkMesher {
    atlas_size: u32,
    cache: BoundedCache<Point3<i32>, Arc<Mesh>>,
}

impl ChunkMesher {
    /// Creates a mesher.
    ///
    /// # Arguments
    /// * `atlas_size` - Number of material columns in the texture atlas
    /// * `cache_capacity` - Capacity of the bounded mesh cache
    pub fn new(atlas_size: u32, cache_capacity: NonZeroUsize) -> Self {
        ChunkMesher {
            atlas_size,
            cache: BoundedCache::new(cache_capacity),
        }
    }

    /// Returns the mesh for the chunk at `position`, building it on a cache
    /// miss.
    ///
    /// `chunk` must be the grid for `position`; `source` supplies the
    /// adjacent grids for boundary cells. The mesher only reads through
    /// `source` and never stores the borrowed grids beyond this call.
    pub fn mesh<S: ChunkSource>(
        &mut self,
        position: Point3<i32>,
        chunk: &Chunk,
        source: &mut S,
    ) -> Arc<Mesh> {
        if let Some(mesh) = self.cache.get(&position) {
            return mesh.clone();
        }

        let width = chunk.width();
        let height = chunk.height();
        let chunk_width = width as f32;
        let atlas_size = self.atlas_size as f32;

        let mut mesh = Mesh::new();

        for x in 0..width {
            for y in 0..height {
                for z in 0..width {
                    let id = chunk.get(x, y, z);
                    if id == BLOCK_AIR {
                        continue;
                    }

                    let cell = Vector3::new(x as f32, y as f32, z as f32);
                    let u_offset = atlas_u_offset(id, self.atlas_size);

                    for side in BlockSide::all() {
                        let step = side.direction();
                        if neighbor_is_air(
                            chunk,
                            x as i32 + step.x,
                            y as i32 + step.y,
                            z as i32 + step.z,
                            position,
                            source,
                        ) {
                            mesh.add_face(
                                &FACE_TEMPLATES[side as usize],
                                cell,
                                chunk_width,
                                atlas_size,
                                u_offset,
                            );
                        }
                    }
                }
            }
        }

        debug!(
            "meshed chunk {:?}: {} faces, {} vertices",
            position,
            mesh.face_count(),
            mesh.len()
        );

        let mesh = Arc::new(mesh);
        self.cache.set(position, mesh.clone());
        mesh
    }

    /// Number of meshes currently resident in the cache.
    pub fn cached_mesh_count(&self) -> usize {
        self.cache.len()
    }
}

/// Whether the neighbor cell at `(x, y, z)` (which may lie outside the
/// grid) is air, and the face looking at it therefore visible.
fn neighbor_is_air<S: ChunkSource>(
    chunk: &Chunk,
    x: i32,
    y: i32,
    z: i32,
    position: Point3<i32>,
    source: &mut S,
) -> bool {
    let width = chunk.width() as i32;
    let height = chunk.height() as i32;

    if x < 0 {
        let adjacent = source.chunk(position + Vector3::new(-1, 0, 0));
        return adjacent.get((width - 1) as usize, y as usize, z as usize) == BLOCK_AIR;
    }
    if y < 0 {
        // never render a face below the lowest layer
        return false;
    }
    if z < 0 {
        let adjacent = source.chunk(position + Vector3::new(0, 0, -1));
        return adjacent.get(x as usize, y as usize, (width - 1) as usize) == BLOCK_AIR;
    }

    if x == width {
        let adjacent = source.chunk(position + Vector3::new(1, 0, 0));
        return adjacent.get(0, y as usize, z as usize) == BLOCK_AIR;
    }
    if y == height {
        // nothing is ever built above the volume, always render
        return true;
    }
    if z == width {
        let adjacent = source.chunk(position + Vector3::new(0, 0, 1));
        return adjacent.get(x as usize, y as usize, 0) == BLOCK_AIR;
    }

    chunk.get(x as usize, y as usize, z as usize) == BLOCK_AIR
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::block::BlockType;
    use std::collections::HashMap;

    /// A chunk source over hand-built grids; unknown coordinates resolve to
    /// all-air chunks.
    struct StubSource {
        width: usize,
        height: usize,
        chunks: HashMap<Point3<i32>, Arc<Chunk>>,
    }

    impl StubSource {
        fn new(width: usize, height: usize) -> Self {
            StubSource {
                width,
                height,
                chunks: HashMap::new(),
            }
        }

        fn insert(&mut self, chunk: Chunk) -> Arc<Chunk> {
            let position = chunk.position();
            let chunk = Arc::new(chunk);
            self.chunks.insert(position, chunk.clone());
            chunk
        }
    }

    impl ChunkSource for StubSource {
        fn chunk(&mut self, position: Point3<i32>) -> Arc<Chunk> {
            self.chunks
                .entry(position)
                .or_insert_with(|| Arc::new(Chunk::new(position, self.width, self.height)))
                .clone()
        }
    }

    fn mesher(capacity: usize) -> ChunkMesher {
        ChunkMesher::new(4, NonZeroUsize::new(capacity).unwrap())
    }

    /// Normalized y of every quad whose six vertices share one height, i.e.
    /// every upward or downward face.
    fn horizontal_face_heights(mesh: &Mesh) -> Vec<f32> {
        mesh.vertices()
            .chunks(6)
            .filter_map(|quad| {
                let y = quad[0].position[1];
                quad.iter().all(|v| v.position[1] == y).then_some(y)
            })
            .collect()
    }

    /// Normalized x of every quad lying in a constant-x plane.
    fn x_plane_faces(mesh: &Mesh) -> Vec<f32> {
        mesh.vertices()
            .chunks(6)
            .filter_map(|quad| {
                let x = quad[0].position[0];
                quad.iter().all(|v| v.position[0] == x).then_some(x)
            })
            .collect()
    }

    #[test]
    fn test_single_column_scenario() {
        // width 4, height 8, one all-earth column up to height 4, no water:
        // one upward quad at the column top, four side quads per lateral
        // boundary, zero downward quads
        let mut source = StubSource::new(4, 8);
        let position = Point3::new(0, 1, 0);
        let mut column = Chunk::new(position, 4, 8);
        for y in 0..4 {
            column.set(1, y, 1, BlockType::EARTH.id());
        }
        let column = source.insert(column);

        let mesh = mesher(10).mesh(position, &column, &mut source);

        assert_eq!(mesh.face_count(), 17);
        let horizontal = horizontal_face_heights(&mesh);
        assert_eq!(horizontal, vec![1.0], "exactly one upward quad, none downward");
    }

    #[test]
    fn test_floor_is_closed() {
        let mut source = StubSource::new(4, 8);
        let position = Point3::new(0, 1, 0);
        let solid = source.insert(Chunk::solid(position, 4, 8, BlockType::STONE.id()));

        let mesh = mesher(10).mesh(position, &solid, &mut source);

        for y in horizontal_face_heights(&mesh) {
            assert!(y > 0.0, "downward quad emitted at the floor");
        }
    }

    #[test]
    fn test_open_sky_above_build_volume() {
        let mut source = StubSource::new(4, 8);
        let position = Point3::new(0, 1, 0);
        let mut chunk = Chunk::new(position, 4, 8);
        chunk.set(0, 7, 0, BlockType::SNOW.id());
        let chunk = source.insert(chunk);

        let mesh = mesher(10).mesh(position, &chunk, &mut source);

        // a block in the topmost layer always renders its upward face, at
        // normalized height 8 / 4
        assert!(horizontal_face_heights(&mesh).contains(&2.0));
    }

    #[test]
    fn test_boundary_face_against_empty_neighbor() {
        let mut source = StubSource::new(4, 8);
        let position = Point3::new(0, 1, 0);
        let mut chunk = Chunk::new(position, 4, 8);
        chunk.set(3, 2, 1, BlockType::EARTH.id());
        let chunk = source.insert(chunk);

        let mesh = mesher(10).mesh(position, &chunk, &mut source);

        // the +x neighbor chunk is air, so the face on the shared plane
        // (local x = 4, normalized 1.0) must be emitted exactly once
        let boundary_faces = x_plane_faces(&mesh)
            .into_iter()
            .filter(|&x| x == 1.0)
            .count();
        assert_eq!(boundary_faces, 1);
    }

    #[test]
    fn test_boundary_face_culled_by_solid_neighbor() {
        let mut source = StubSource::new(4, 8);
        let a_position = Point3::new(0, 1, 0);
        let b_position = Point3::new(1, 1, 0);

        let mut a = Chunk::new(a_position, 4, 8);
        a.set(3, 2, 1, BlockType::EARTH.id());
        let a = source.insert(a);

        let mut b = Chunk::new(b_position, 4, 8);
        b.set(0, 2, 1, BlockType::EARTH.id());
        let b = source.insert(b);

        let mut mesher = mesher(10);

        // both boundary cells are solid, so neither chunk draws the shared
        // plane, from either perspective
        let mesh_a = mesher.mesh(a_position, &a, &mut source);
        assert_eq!(
            x_plane_faces(&mesh_a).into_iter().filter(|&x| x == 1.0).count(),
            0
        );
        let mesh_b = mesher.mesh(b_position, &b, &mut source);
        assert_eq!(
            x_plane_faces(&mesh_b).into_iter().filter(|&x| x == 0.0).count(),
            0
        );
    }

    #[test]
    fn test_mesh_is_cached_and_evicted_fifo() {
        let mut source = StubSource::new(4, 8);
        let mut mesher = mesher(2);

        let positions = [
            Point3::new(0, 1, 0),
            Point3::new(1, 1, 0),
            Point3::new(2, 1, 0),
        ];
        let chunks: Vec<Arc<Chunk>> = positions
            .iter()
            .map(|&p| source.insert(Chunk::solid(p, 4, 8, BlockType::EARTH.id())))
            .collect();

        let first = mesher.mesh(positions[0], &chunks[0], &mut source);
        let again = mesher.mesh(positions[0], &chunks[0], &mut source);
        assert!(Arc::ptr_eq(&first, &again), "cache hit returns shared mesh");

        mesher.mesh(positions[1], &chunks[1], &mut source);
        mesher.mesh(positions[2], &chunks[2], &mut source);
        assert_eq!(mesher.cached_mesh_count(), 2);

        // the first mesh aged out of the bounded cache and is rebuilt
        let rebuilt = mesher.mesh(positions[0], &chunks[0], &mut source);
        assert!(!Arc::ptr_eq(&first, &rebuilt));
        assert_eq!(rebuilt.vertices(), first.vertices());
    }

    #[test]
    fn test_random_chunk_mesh_invariants() {
        let mut source = StubSource::new(8, 16);
        let position = Point3::new(0, 1, 0);
        let chunk = source.insert(Chunk::random(position, 8, 16));

        let mesh = mesher(10).mesh(position, &chunk, &mut source);

        assert_eq!(mesh.len() % 6, 0, "whole quads only");
        for vertex in mesh.vertices() {
            assert!((0.0..=1.0).contains(&vertex.position[0]));
            assert!((0.0..=2.0).contains(&vertex.position[1]));
            assert!((0.0..=1.0).contains(&vertex.position[2]));
            assert!((0.0..=1.0).contains(&vertex.tex_coords[0]));
        }
    }
}
