//! # Chunk Module
//!
//! The `Chunk` struct: one chunk's worth of block codes as a dense 3D grid.
//!
//! ## Storage
//!
//! The grid is a single flat `Vec<BlockId>` with computed strides rather
//! than nested containers; cells are addressed as
//! `x + z * width + y * width * width`. Width and depth are equal, height is
//! independent. Chunks are written only during generation and are shared
//! immutably (behind `Arc`) afterwards; the mesher borrows them read-only
//! and never stores them beyond a call.

use cgmath::Point3;

use super::block::{BlockId, BLOCK_AIR};

/// A dense `width x height x width` grid of block codes for one chunk.
///
/// The chunk remembers its own position in chunk-space; that position is
/// also the key under which the generator and mesher caches store the chunk
/// and its mesh.
pub struct Chunk {
    /// The position of this chunk in chunk coordinates (not block
    /// coordinates).
    position: Point3<i32>,
    /// Width and depth of the grid in blocks.
    width: usize,
    /// Height of the grid in blocks.
    height: usize,
    /// Block codes in row-major order (x, then z, then y).
    blocks: Vec<BlockId>,
}

impl Chunk {
    /// Creates a chunk filled with air.
    ///
    /// # Arguments
    /// * `position` - The chunk coordinates of the new chunk
    /// * `width` - Width and depth of the grid in blocks
    /// * `height` - Height of the grid in blocks
    pub fn new(position: Point3<i32>, width: usize, height: usize) -> Self {
        Chunk {
            position,
            width,
            height,
            blocks: vec![BLOCK_AIR; width * width * height],
        }
    }

    /// Creates a chunk filled entirely with one material (for testing).
    #[allow(dead_code)]
    pub fn solid(position: Point3<i32>, width: usize, height: usize, id: BlockId) -> Self {
        let mut chunk = Chunk::new(position, width, height);
        chunk.blocks.fill(id);
        chunk
    }

    /// Creates a chunk with sparse random blocks (for testing).
    ///
    /// Roughly one cell in ten receives a random non-air material.
    #[allow(dead_code)]
    pub fn random(position: Point3<i32>, width: usize, height: usize) -> Self {
        let mut chunk = Chunk::new(position, width, height);
        for cell in chunk.blocks.iter_mut() {
            if fastrand::f64() >= 0.9 {
                *cell = fastrand::u8(1..5);
            }
        }
        chunk
    }

    /// The position of this chunk in chunk coordinates.
    pub fn position(&self) -> Point3<i32> {
        self.position
    }

    /// Width and depth of the grid in blocks.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid in blocks.
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        debug_assert!(x < self.width && y < self.height && z < self.width);
        x + z * self.width + y * self.width * self.width
    }

    /// Reads the block code at zero-based cell coordinates.
    ///
    /// # Panics
    /// Panics if the coordinates are out of range. Out-of-range neighbor
    /// lookups are the mesher's concern and are resolved before this is
    /// called.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> BlockId {
        self.blocks[self.index(x, y, z)]
    }

    /// Writes the block code at zero-based cell coordinates.
    ///
    /// Only generation (and tests) write to a chunk; once a chunk is handed
    /// out behind `Arc` it is immutable.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, id: BlockId) {
        let index = self.index(x, y, z);
        self.blocks[index] = id;
    }

    /// Raw grid contents, for whole-grid comparisons.
    pub fn blocks(&self) -> &[BlockId] {
        &self.blocks
    }

    /// The height of the column surface at `(x, z)`: the number of cells up
    /// to and including the topmost non-air cell, or 0 for an empty column.
    pub fn surface_height(&self, x: usize, z: usize) -> usize {
        for y in (0..self.height).rev() {
            if self.get(x, y, z) != BLOCK_AIR {
                return y + 1;
            }
        }
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::block::BlockType;

    #[test]
    fn test_new_chunk_is_all_air() {
        let chunk = Chunk::new(Point3::new(0, 1, 0), 4, 8);
        assert!(chunk.blocks().iter().all(|&id| id == BLOCK_AIR));
        assert_eq!(chunk.blocks().len(), 4 * 4 * 8);
    }

    #[test]
    fn test_set_get_round_trip() {
        let mut chunk = Chunk::new(Point3::new(0, 1, 0), 4, 8);
        chunk.set(3, 7, 2, BlockType::STONE.id());
        assert_eq!(chunk.get(3, 7, 2), BlockType::STONE.id());
        assert_eq!(chunk.get(2, 7, 3), BLOCK_AIR);
    }

    #[test]
    fn test_cells_do_not_alias() {
        let mut chunk = Chunk::new(Point3::new(0, 1, 0), 4, 8);
        for (y, x, z) in [(0, 1, 2), (7, 1, 2), (3, 0, 0), (3, 3, 3)] {
            chunk.set(x, y, z, BlockType::EARTH.id());
        }
        let solid = chunk.blocks().iter().filter(|&&id| id != BLOCK_AIR).count();
        assert_eq!(solid, 4);
    }

    #[test]
    fn test_surface_height() {
        let mut chunk = Chunk::new(Point3::new(0, 1, 0), 4, 8);
        assert_eq!(chunk.surface_height(1, 1), 0);
        for y in 0..4 {
            chunk.set(1, y, 1, BlockType::EARTH.id());
        }
        assert_eq!(chunk.surface_height(1, 1), 4);
        assert_eq!(chunk.surface_height(0, 0), 0);
    }

    #[test]
    fn test_solid_constructor() {
        let chunk = Chunk::solid(Point3::new(0, 1, 0), 4, 8, BlockType::EARTH.id());
        assert!(chunk
            .blocks()
            .iter()
            .all(|&id| id == BlockType::EARTH.id()));
    }
}
