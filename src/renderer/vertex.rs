//! GPU-ready vertex and instance types

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Which sprite sheet an instance samples from
pub mod sheet {
    pub const PLAYER: u32 = 0;
    pub const GEARS: u32 = 1;
}

/// One textured quad, in screen pixels
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// Top-left corner
    pub position: [f32; 2],
    pub size: [f32; 2],
    /// Sprite sheet (see [`sheet`])
    pub sheet: u32,
    /// Column in the sheet
    pub frame_x: u32,
    /// Row in the sheet
    pub frame_y: u32,
    pub _pad: u32,
}

/// Colors for game elements
pub mod colors {
    pub const TEXT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const ENERGY: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const ENERGY_LOW: [f32; 4] = [1.0, 0.65, 0.0, 1.0];
    pub const ENERGY_FULL: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const DEBUG_OUTLINE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
