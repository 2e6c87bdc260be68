//! In-memory sprite host
//!
//! Sprites are kept in creation order, which is also draw order (later
//! sprites are drawn on top).

use std::collections::BTreeMap;

use glam::Vec2;

use super::{SpriteHost, SpriteId};
use crate::assets::TextureId;

/// A drawable image
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub texture: TextureId,
    pub pos: Vec2,
    pub scale: Vec2,
    pub origin: Vec2,
    pub visible: bool,
}

impl Sprite {
    fn new(pos: Vec2, texture: TextureId) -> Self {
        Self {
            texture,
            pos,
            scale: Vec2::ONE,
            origin: Vec2::splat(0.5),
            visible: true,
        }
    }

    /// Size on screen in pixels
    pub fn display_size(&self) -> Vec2 {
        self.texture.size() * self.scale
    }

    /// Top-left corner on screen
    pub fn top_left(&self) -> Vec2 {
        self.pos - self.origin * self.display_size()
    }

    /// Map a point in texture space (pixels, y down) to screen space
    pub fn to_screen(&self, local: Vec2) -> Vec2 {
        self.pos + (local - self.origin * self.texture.size()) * self.scale
    }
}

/// Retained sprite store
#[derive(Debug, Default)]
pub struct SpriteWorld {
    sprites: BTreeMap<SpriteId, Sprite>,
    next_id: u32,
    destroyed: u64,
}

impl SpriteWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: SpriteId) -> Option<&Sprite> {
        self.sprites.get(&id)
    }

    /// Live sprites in draw order
    pub fn iter(&self) -> impl Iterator<Item = (SpriteId, &Sprite)> {
        self.sprites.iter().map(|(id, sprite)| (*id, sprite))
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Total sprites destroyed since creation
    pub fn destroyed_count(&self) -> u64 {
        self.destroyed
    }

    fn sprite_mut(&mut self, id: SpriteId, op: &str) -> Option<&mut Sprite> {
        let sprite = self.sprites.get_mut(&id);
        if sprite.is_none() {
            log::warn!("{} on unknown sprite {:?} ignored", op, id);
        }
        sprite
    }
}

impl SpriteHost for SpriteWorld {
    fn create_image(&mut self, pos: Vec2, texture: TextureId) -> SpriteId {
        let id = SpriteId(self.next_id);
        self.next_id += 1;
        self.sprites.insert(id, Sprite::new(pos, texture));
        id
    }

    fn set_position(&mut self, id: SpriteId, pos: Vec2) {
        if let Some(sprite) = self.sprite_mut(id, "set_position") {
            sprite.pos = pos;
        }
    }

    fn position(&self, id: SpriteId) -> Option<Vec2> {
        self.sprites.get(&id).map(|s| s.pos)
    }

    fn set_scale(&mut self, id: SpriteId, scale: f32) {
        if let Some(sprite) = self.sprite_mut(id, "set_scale") {
            sprite.scale = Vec2::splat(scale);
        }
    }

    fn scale(&self, id: SpriteId) -> Option<f32> {
        self.sprites.get(&id).map(|s| s.scale.x)
    }

    fn set_origin(&mut self, id: SpriteId, origin: Vec2) {
        if let Some(sprite) = self.sprite_mut(id, "set_origin") {
            sprite.origin = origin;
        }
    }

    fn set_display_size(&mut self, id: SpriteId, size: Vec2) {
        if let Some(sprite) = self.sprite_mut(id, "set_display_size") {
            sprite.scale = size / sprite.texture.size();
        }
    }

    fn set_visible(&mut self, id: SpriteId, visible: bool) {
        if let Some(sprite) = self.sprite_mut(id, "set_visible") {
            sprite.visible = visible;
        }
    }

    fn is_visible(&self, id: SpriteId) -> Option<bool> {
        self.sprites.get(&id).map(|s| s.visible)
    }

    fn destroy(&mut self, id: SpriteId) -> bool {
        if self.sprites.remove(&id).is_some() {
            self.destroyed += 1;
            true
        } else {
            log::warn!("destroy on unknown sprite {:?} ignored", id);
            false
        }
    }
}
