//! # Voxel Terrain Demo Entry Point
//!
//! Runs one headless streaming pass over the default world and prints a
//! summary through the logger.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release
//! ```

fn main() {
    voxel_terrain::run();
}
