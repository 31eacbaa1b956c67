#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Terrain
//!
//! A headless voxel terrain core: procedural chunk generation, face-culled
//! meshing and camera-driven streaming, with no rendering backend attached.
//!
//! ## Key Modules
//!
//! * `config` - Tunable world parameters with JSON loading
//! * `core` - The bounded FIFO cache backing the mesh store
//! * `voxels` - Block taxonomy, chunk grids and the noise-driven generator
//! * `meshing` - Face-culling mesh construction and the mesh cache
//! * `streaming` - The per-frame visible-chunk walk
//!
//! ## Architecture
//!
//! Data flows one way: the [`streaming::WorldStreamer`] asks the
//! [`voxels::world_generator::WorldGenerator`] for chunk grids, hands them
//! to the [`meshing::ChunkMesher`], and pushes the resulting meshes into a
//! caller-supplied [`streaming::MeshSink`]. A rendering backend plugs in at
//! the sink; everything upstream is deterministic and backend-free.
//!
//! ## Usage
//!
//! ```rust,no_run
//! fn main() {
//!     voxel_terrain::run();
//! }
//! ```

use cgmath::{Point3, Vector3};
use log::info;

pub mod config;
pub mod core;
pub mod meshing;
pub mod streaming;
pub mod voxels;

use config::WorldConfig;
use streaming::{StatsSink, WorldStreamer};

/// Runs one streaming pass over the default world and logs a summary.
///
/// This is the smoke-run entry point used by the demo binary: it exercises
/// generation, meshing and streaming end to end without a window or GPU.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let config = WorldConfig::default();
    let mut streamer = WorldStreamer::new(&config);
    let mut stats = StatsSink::default();

    streamer.stream(
        Point3::new(0.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
        &mut stats,
    );

    info!(
        "streamed {} chunks ({} vertices), {} chunks generated, {} meshes cached",
        stats.chunks_drawn,
        stats.vertices_drawn,
        streamer.generator().loaded_chunk_count(),
        streamer.mesher().cached_mesh_count()
    );
}
