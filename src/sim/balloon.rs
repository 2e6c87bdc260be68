//! Balloon entity

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::assets::{BalloonColor, Letter, TextureId};
use crate::scene::SpriteId;
use crate::tuning::Tuning;

/// Stable balloon identifier (allocation order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BalloonId(pub u32);

/// Balloon life stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalloonStage {
    /// Attached to the pump, growing while pumped
    Inflating,
    /// Released; drifts until popped
    Floating,
}

/// Sprites that make up one balloon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalloonSprites {
    pub body: SpriteId,
    pub glyph: Option<SpriteId>,
    /// Present once the balloon has been released
    pub string: Option<SpriteId>,
}

/// A balloon entity
#[derive(Debug, Clone)]
pub struct Balloon {
    pub id: BalloonId,
    pub pos: Vec2,
    pub scale: f32,
    pub color: BalloonColor,
    pub letter: Letter,
    /// Drift velocity in pixels per tick
    pub vel: Vec2,
    pub stage: BalloonStage,
    pub visible: bool,
    pub sprites: BalloonSprites,
}

impl Balloon {
    pub fn is_floating(&self) -> bool {
        self.stage == BalloonStage::Floating
    }

    pub fn has_string(&self) -> bool {
        self.sprites.string.is_some()
    }

    /// Size on screen in pixels
    pub fn display_size(&self) -> Vec2 {
        TextureId::Balloon(self.color).size() * self.scale
    }

    /// Where the top of the string hangs from
    pub fn string_anchor(&self, tuning: &Tuning) -> Vec2 {
        self.pos + Vec2::new(0.0, self.display_size().y * tuning.string_offset_ratio)
    }

    /// Ellipse hit test against the display extent
    pub fn contains(&self, point: Vec2) -> bool {
        let half = self.display_size() * 0.5;
        if half.x <= 0.0 || half.y <= 0.0 {
            return false;
        }
        let d = (point - self.pos) / half;
        d.length_squared() <= 1.0
    }
}
