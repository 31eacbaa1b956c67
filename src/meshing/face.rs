//! Per-side quad templates for the unit cube.
//!
//! Each visible face of a block is one of these templates offset by the
//! cell position. Corners are listed counter-clockwise seen from outside
//! the cube, so the triangle fan `0,1,2 / 0,2,3` yields outward-facing
//! winding for both triangles.

use crate::voxels::block::BlockSide;

/// The four corners and texture coordinates of one cube face.
pub struct FaceTemplate {
    /// The side of the cube this template covers.
    pub side: BlockSide,
    /// Corner positions on the unit cube, counter-clockwise from outside.
    pub corners: [[f32; 3]; 4],
    /// Texture coordinates per corner, before atlas column scaling.
    pub uvs: [[f32; 2]; 4],
}

/// Corner order for the two triangles of a quad.
pub const QUAD_FAN: [usize; 6] = [0, 1, 2, 0, 2, 3];

/// Face templates indexed by `BlockSide` discriminant.
pub const FACE_TEMPLATES: [FaceTemplate; 6] = [
    FaceTemplate {
        side: BlockSide::FRONT,
        corners: [
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 1.0],
            [1.0, 1.0, 1.0],
            [0.0, 1.0, 1.0],
        ],
        uvs: QUAD_UVS,
    },
    FaceTemplate {
        side: BlockSide::BACK,
        corners: [
            [0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
            [1.0, 0.0, 0.0],
        ],
        uvs: QUAD_UVS,
    },
    FaceTemplate {
        side: BlockSide::BOTTOM,
        corners: [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 0.0, 1.0],
            [0.0, 0.0, 1.0],
        ],
        uvs: QUAD_UVS,
    },
    FaceTemplate {
        side: BlockSide::TOP,
        corners: [
            [0.0, 1.0, 0.0],
            [0.0, 1.0, 1.0],
            [1.0, 1.0, 1.0],
            [1.0, 1.0, 0.0],
        ],
        uvs: QUAD_UVS,
    },
    FaceTemplate {
        side: BlockSide::LEFT,
        corners: [
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 1.0, 1.0],
            [0.0, 1.0, 0.0],
        ],
        uvs: QUAD_UVS,
    },
    FaceTemplate {
        side: BlockSide::RIGHT,
        corners: [
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [1.0, 1.0, 1.0],
            [1.0, 0.0, 1.0],
        ],
        uvs: QUAD_UVS,
    },
];

// One full atlas column per face; the u axis is scaled by the atlas width
// and offset by the material column at emission time.
const QUAD_UVS: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];
