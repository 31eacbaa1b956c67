//! # Voxel Data Model and Generation
//!
//! This module owns everything up to (but not including) meshing:
//!
//! * **Block**: material identifiers and the six faces of a cell
//! * **Chunk**: the dense per-chunk grid of block codes
//! * **World Generator**: deterministic, noise-driven chunk production with
//!   an unbounded per-session cache
//!
//! ## Data Flow
//!
//! The streaming layer asks the [`world_generator::WorldGenerator`] for
//! chunks; the mesher reads those chunks and, at chunk boundaries, pulls
//! neighbor grids through the read-only [`world_generator::ChunkSource`]
//! seam. The generator never calls back into meshing, so the dependency
//! between the two stays one-way.

pub mod block;
pub mod chunk;
pub mod world_generator;
