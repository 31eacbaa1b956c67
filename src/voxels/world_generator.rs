//! # World Generator
//!
//! Deterministic, noise-driven production of chunk grids.
//!
//! For a fixed configuration, `get_chunk` is a pure function of the chunk
//! coordinate: repeated calls yield bit-identical grids, even across process
//! restarts with a cold cache. Generated chunks are cached for the lifetime
//! of the generator and never evicted; memory therefore grows with the
//! number of distinct coordinates visited in a session.

use std::collections::HashMap;
use std::sync::Arc;

use cgmath::Point3;
use log::debug;
use noise::{NoiseFn, Perlin};

use crate::config::WorldConfig;

use super::block::{BlockType, BLOCK_AIR};
use super::chunk::Chunk;

/// Read-only access to chunk grids by chunk coordinate.
///
/// This is the seam between the mesher and the generator: resolving face
/// visibility at a chunk boundary needs the neighbor's boundary cells, so
/// the mesher pulls the adjacent grid through this trait. Producing a chunk
/// may require generating it, hence `&mut self`; the returned grid itself is
/// shared and immutable.
pub trait ChunkSource {
    /// Returns the chunk at `position`, producing it first if necessary.
    fn chunk(&mut self, position: Point3<i32>) -> Arc<Chunk>;
}

/// A multi-octave Perlin sampler producing values in `[0, 1)`.
///
/// Octaves are accumulated with halving amplitude and doubling frequency,
/// normalized by the total amplitude, then remapped from `[-1, 1]` onto the
/// unit interval. Total for all real inputs.
pub struct OctaveNoise {
    perlin: Perlin,
    octaves: u32,
}

impl OctaveNoise {
    /// Creates a sampler for the given seed and octave count.
    pub fn new(seed: u32, octaves: u32) -> Self {
        OctaveNoise {
            perlin: Perlin::new(seed),
            octaves,
        }
    }

    /// Samples the noise field at `(x, z)`.
    pub fn sample_01(&self, x: f64, z: f64) -> f64 {
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut total = 0.0;
        let mut range = 0.0;

        for _ in 0..self.octaves {
            total += amplitude * self.perlin.get([x * frequency, z * frequency]);
            range += amplitude;
            amplitude *= 0.5;
            frequency *= 2.0;
        }

        ((total / range) * 0.5 + 0.5).clamp(0.0, 1.0 - f64::EPSILON)
    }
}

/// Deterministically manufactures chunk grids and caches them per session.
///
/// The cache is intentionally unbounded: no eviction policy exists for
/// generated terrain, so long sessions exploring large worlds accumulate
/// every visited chunk.
pub struct WorldGenerator {
    chunk_width: usize,
    chunk_height: usize,
    water_level: usize,
    noise_scale: f64,
    noise: OctaveNoise,
    chunks: HashMap<Point3<i32>, Arc<Chunk>>,
}

impl WorldGenerator {
    /// Creates a generator from the world configuration.
    pub fn new(config: &WorldConfig) -> Self {
        WorldGenerator {
            chunk_width: config.chunk_width,
            chunk_height: config.chunk_height,
            water_level: config.water_level(),
            noise_scale: config.noise_scale,
            noise: OctaveNoise::new(config.world_seed, config.noise_octaves),
            chunks: HashMap::new(),
        }
    }

    /// Returns the chunk at `position`, generating and caching it on first
    /// request. Never evicts.
    pub fn get_chunk(&mut self, position: Point3<i32>) -> Arc<Chunk> {
        if let Some(chunk) = self.chunks.get(&position) {
            return chunk.clone();
        }

        let chunk = Arc::new(self.generate(position));
        debug!("generated chunk at {:?}", position);
        self.chunks.insert(position, chunk.clone());
        chunk
    }

    /// Number of chunks generated so far in this session.
    pub fn loaded_chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Runs the generation algorithm for one chunk coordinate.
    ///
    /// First pass: a heightmap column per `(x, z)` cell, sampled from the
    /// noise field at `(x / width + position.x) * scale`, banded into earth,
    /// stone and snow by the fraction of the build height. Second pass:
    /// every air cell at or below the water level becomes water, and an
    /// earth cell sitting exactly at the water level with air directly above
    /// is submerged too, so beach edges do not poke through the surface.
    fn generate(&self, position: Point3<i32>) -> Chunk {
        let w = self.chunk_width;
        let h = self.chunk_height;
        let mut chunk = Chunk::new(position, w, h);

        for x in 0..w {
            for z in 0..w {
                let sample_x = (x as f64 / w as f64 + f64::from(position.x)) * self.noise_scale;
                let sample_z = (z as f64 / w as f64 + f64::from(position.z)) * self.noise_scale;

                let value = self.noise.sample_01(sample_x, sample_z);
                let height = ((value * h as f64) as usize).min(h - 1);

                for y in 0..height {
                    let band = y as f64 / h as f64;
                    let material = if band > 0.7 {
                        BlockType::SNOW
                    } else if band > 0.5 {
                        BlockType::STONE
                    } else {
                        BlockType::EARTH
                    };
                    chunk.set(x, y, z, material.id());
                }
                // cells from `height` up stay air
            }
        }

        let water_level = self.water_level.min(h - 1);
        for x in 0..w {
            for z in 0..w {
                for y in 0..=water_level {
                    if chunk.get(x, y, z) == BLOCK_AIR {
                        chunk.set(x, y, z, BlockType::WATER.id());
                    }
                }
                // shoreline leveling: an exposed earth cell at exactly the
                // water level goes under as well
                if water_level + 1 < h
                    && chunk.get(x, water_level, z) == BlockType::EARTH.id()
                    && chunk.get(x, water_level + 1, z) == BLOCK_AIR
                {
                    chunk.set(x, water_level, z, BlockType::WATER.id());
                }
            }
        }

        chunk
    }
}

impl ChunkSource for WorldGenerator {
    fn chunk(&mut self, position: Point3<i32>) -> Arc<Chunk> {
        self.get_chunk(position)
    }
}
