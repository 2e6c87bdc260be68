//! WebGPU rendering module
//!
//! Sprites are tessellated on the CPU into colored triangles and drawn with a
//! single pass-through pipeline.

pub mod draw;
pub mod glyphs;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use draw::world_vertices;
pub use pipeline::RenderState;
pub use vertex::Vertex;
