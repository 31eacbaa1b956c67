//! # Block Module
//!
//! Block material identifiers and the faces of a voxel cell. A block is not
//! a struct of its own here: chunks store bare [`BlockId`] codes and all
//! material properties derive from the code.

pub mod block_side;
pub mod block_type;

pub use block_side::BlockSide;
pub use block_type::BlockType;

/// The integer type used to store block codes in chunk memory.
pub type BlockId = u8;

/// The block code for air: no geometry, passable, never textured.
pub const BLOCK_AIR: BlockId = 0;
