//! # Block Type Module
//!
//! The block materials of the world and their mapping onto the texture
//! atlas. Materials occupy one atlas column each, addressed by
//! `(block code - 1) / atlas_size` as the horizontal UV offset; adding a
//! material means widening the atlas, not changing code here.

use num_derive::FromPrimitive;

use super::{BlockId, BLOCK_AIR};

/// Enumerates the block materials of the voxel world.
///
/// The discriminants are the on-disk/in-memory block codes stored in chunk
/// grids, with `AIR = 0` carrying no geometry. `FromPrimitive` allows
/// converting raw codes read from a grid back into the enum.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// An air cell. Non-solid, passable, emits no faces.
    AIR = 0,

    /// Earth, the bulk material of the lower terrain bands.
    EARTH = 1,

    /// Stone, exposed in the middle elevation band.
    STONE = 2,

    /// Snow, capping the highest elevation band.
    SNOW = 3,

    /// Water, filling air below the configured water level.
    WATER = 4,
}

impl BlockType {
    /// Converts a raw block code into a `BlockType`.
    ///
    /// # Panics
    /// Panics if the code does not correspond to a known material. Chunk
    /// grids are only ever written through this enum, so an unknown code is
    /// a logic error, not a runtime condition.
    pub fn from_id(id: BlockId) -> Self {
        num::FromPrimitive::from_u8(id).unwrap()
    }

    /// The block code of this material as stored in chunk grids.
    pub fn id(self) -> BlockId {
        self as BlockId
    }

    /// Whether this material occupies no space and emits no geometry.
    pub fn is_air(self) -> bool {
        self.id() == BLOCK_AIR
    }
}

/// The horizontal UV offset of a material's atlas column.
///
/// Materials are laid out in a single row of `atlas_size` equal columns;
/// block code 1 maps to the leftmost column.
pub fn atlas_u_offset(id: BlockId, atlas_size: u32) -> f32 {
    debug_assert_ne!(id, BLOCK_AIR, "air has no atlas column");
    f32::from(id - 1) / atlas_size as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for block_type in [
            BlockType::AIR,
            BlockType::EARTH,
            BlockType::STONE,
            BlockType::SNOW,
            BlockType::WATER,
        ] {
            assert_eq!(BlockType::from_id(block_type.id()), block_type);
        }
    }

    #[test]
    fn test_air_is_code_zero() {
        assert_eq!(BlockType::AIR.id(), BLOCK_AIR);
        assert!(BlockType::AIR.is_air());
        assert!(!BlockType::EARTH.is_air());
    }

    #[test]
    fn test_atlas_offset_is_one_column_per_material() {
        assert_eq!(atlas_u_offset(BlockType::EARTH.id(), 4), 0.0);
        assert_eq!(atlas_u_offset(BlockType::STONE.id(), 4), 0.25);
        assert_eq!(atlas_u_offset(BlockType::WATER.id(), 4), 0.75);
    }
}
