//! Sprite host
//!
//! The simulation owns the gameplay state; the sprite host owns the drawable
//! objects that mirror it. The simulation only ever asks the host to create an
//! image, move/scale/hide it, or destroy it.

pub mod world;

pub use world::{Sprite, SpriteWorld};

use glam::Vec2;

use crate::assets::TextureId;

/// Handle to a sprite owned by a [`SpriteHost`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpriteId(pub u32);

/// Operations the simulation needs from a sprite-owning engine
pub trait SpriteHost {
    /// Create an image at `pos` (origin centered, scale 1, visible)
    fn create_image(&mut self, pos: Vec2, texture: TextureId) -> SpriteId;

    fn set_position(&mut self, id: SpriteId, pos: Vec2);
    fn position(&self, id: SpriteId) -> Option<Vec2>;

    /// Uniform scale
    fn set_scale(&mut self, id: SpriteId, scale: f32);
    /// Horizontal scale (vertical may differ after `set_display_size`)
    fn scale(&self, id: SpriteId) -> Option<f32>;

    /// Normalized anchor point: (0, 0) top-left, (1, 1) bottom-right
    fn set_origin(&mut self, id: SpriteId, origin: Vec2);

    /// Stretch the sprite to an exact pixel size
    fn set_display_size(&mut self, id: SpriteId, size: Vec2);

    fn set_visible(&mut self, id: SpriteId, visible: bool);
    fn is_visible(&self, id: SpriteId) -> Option<bool>;

    /// Remove the sprite. Returns false if it did not exist.
    fn destroy(&mut self, id: SpriteId) -> bool;
}
