//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
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

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for scene elements
pub mod colors {
    use crate::assets::BalloonColor;

    pub const SKY_TOP: [f32; 4] = [0.38, 0.68, 0.95, 1.0];
    pub const SKY_BOTTOM: [f32; 4] = [0.78, 0.91, 1.0, 1.0];
    pub const GRASS: [f32; 4] = [0.36, 0.7, 0.3, 1.0];
    pub const PUMP_BODY: [f32; 4] = [0.85, 0.2, 0.18, 1.0];
    pub const PUMP_TRIM: [f32; 4] = [0.35, 0.35, 0.4, 1.0];
    pub const HANDLE: [f32; 4] = [0.25, 0.25, 0.28, 1.0];
    pub const STRING: [f32; 4] = [0.95, 0.95, 0.95, 1.0];
    pub const LETTER: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const HIGHLIGHT: [f32; 4] = [1.0, 1.0, 1.0, 0.35];

    pub fn balloon(color: BalloonColor) -> [f32; 4] {
        match color {
            BalloonColor::Blue => [0.2, 0.45, 0.95, 1.0],
            BalloonColor::Red => [0.92, 0.2, 0.25, 1.0],
            BalloonColor::Green => [0.2, 0.75, 0.35, 1.0],
            BalloonColor::Yellow => [0.98, 0.82, 0.15, 1.0],
        }
    }
}
