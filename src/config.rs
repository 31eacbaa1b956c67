//! # World Configuration
//!
//! This module defines the tunable constants consumed by the terrain core.
//! Every knob recognized by the generator, mesher and streamer lives here;
//! the defaults reproduce the reference world (16x64x16 chunks, water at a
//! fifth of the build height, 8 octaves of noise).

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Configuration for the terrain generation and streaming core.
///
/// The struct is plain data: components copy the fields they need at
/// construction time, so changing a config after building a
/// [`WorldStreamer`](crate::streaming::WorldStreamer) has no effect on it.
///
/// Missing fields deserialize to their defaults, so a config file only needs
/// to mention the values it overrides.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Width and depth of a chunk in blocks.
    pub chunk_width: usize,

    /// Height of a chunk in blocks. Independent of the width.
    pub chunk_height: usize,

    /// Fraction of the chunk height below which air is flooded with water.
    pub water_level_fraction: f64,

    /// Scale applied to world-space sample coordinates before noise lookup.
    /// Smaller values stretch terrain features over more chunks.
    pub noise_scale: f64,

    /// Number of octaves accumulated per noise sample.
    pub noise_octaves: u32,

    /// Seed for the noise source. Two worlds with the same seed and
    /// dimensions produce bit-identical chunks.
    pub world_seed: u32,

    /// Number of material columns in the texture atlas.
    pub atlas_size: u32,

    /// Capacity of the bounded mesh cache. A zero capacity is
    /// unrepresentable by construction.
    pub mesh_cache_capacity: NonZeroUsize,

    /// Streaming radius in chunks around the camera, per horizontal axis.
    pub streaming_radius: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            chunk_width: 16,
            chunk_height: 64,
            water_level_fraction: 0.2,
            noise_scale: 0.1,
            noise_octaves: 8,
            world_seed: 1,
            atlas_size: 4,
            mesh_cache_capacity: NonZeroUsize::new(1000).unwrap(),
            streaming_radius: 15,
        }
    }
}

impl WorldConfig {
    /// Parses a configuration from a JSON document.
    ///
    /// # Arguments
    /// * `text` - The JSON source text
    ///
    /// # Returns
    /// The parsed configuration, or the underlying parse error.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// The highest block layer flooded by the water pass.
    ///
    /// Computed as `floor(chunk_height * water_level_fraction)`; the
    /// reference values give `64 / 5 = 12`.
    pub fn water_level(&self) -> usize {
        (self.chunk_height as f64 * self.water_level_fraction) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reference_values() {
        let config = WorldConfig::default();
        assert_eq!(config.chunk_width, 16);
        assert_eq!(config.chunk_height, 64);
        assert_eq!(config.noise_octaves, 8);
        assert_eq!(config.water_level(), 12);
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = WorldConfig::from_json(
            r#"{ "chunk_width": 4, "chunk_height": 8, "water_level_fraction": 0.0 }"#,
        )
        .unwrap();
        assert_eq!(config.chunk_width, 4);
        assert_eq!(config.chunk_height, 8);
        assert_eq!(config.water_level(), 0);
        // untouched fields keep their defaults
        assert_eq!(config.streaming_radius, 15);
    }

    #[test]
    fn test_from_json_rejects_zero_cache_capacity() {
        assert!(WorldConfig::from_json(r#"{ "mesh_cache_capacity": 0 }"#).is_err());
    }
}
