//! # Core Utilities
//!
//! Generic data structures used throughout the terrain core. These carry no
//! voxel-specific knowledge and could serve any keyed workload.

pub mod bounded_cache;

pub use bounded_cache::BoundedCache;
