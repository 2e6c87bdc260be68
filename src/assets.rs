//! Texture identifiers
//!
//! The game uses a fixed set of images. Each one has nominal pixel dimensions
//! so display extents (texture size × scale) can be computed without loading
//! anything; the renderer draws them procedurally.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Balloon color variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BalloonColor {
    Blue,
    Red,
    Green,
    Yellow,
}

impl BalloonColor {
    pub const ALL: [BalloonColor; 4] = [
        BalloonColor::Blue,
        BalloonColor::Red,
        BalloonColor::Green,
        BalloonColor::Yellow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BalloonColor::Blue => "blue",
            BalloonColor::Red => "red",
            BalloonColor::Green => "green",
            BalloonColor::Yellow => "yellow",
        }
    }
}

/// A letter glyph, A through Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Letter(u8);

impl Letter {
    pub const COUNT: usize = 26;

    /// Letter by alphabet index (0 = A). Returns None past Z.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < Self::COUNT).then_some(Letter(index as u8))
    }

    /// Letter by alphabet index, wrapping past Z
    pub fn wrapping(index: usize) -> Self {
        Letter((index % Self::COUNT) as u8)
    }

    pub fn from_char(c: char) -> Option<Self> {
        let c = c.to_ascii_uppercase();
        c.is_ascii_uppercase().then(|| Letter(c as u8 - b'A'))
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn as_char(&self) -> char {
        (b'A' + self.0) as char
    }
}

/// Every image the scene can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureId {
    Background,
    Pump,
    PumpHandle,
    String,
    Balloon(BalloonColor),
    Letter(Letter),
}

impl TextureId {
    /// Nominal texture dimensions in pixels (display size at scale 1.0)
    pub fn size(&self) -> Vec2 {
        match self {
            TextureId::Background => Vec2::new(1920.0, 1080.0),
            TextureId::Pump => Vec2::new(400.0, 600.0),
            TextureId::PumpHandle => Vec2::new(400.0, 120.0),
            TextureId::String => Vec2::new(40.0, 300.0),
            TextureId::Balloon(_) => Vec2::new(300.0, 400.0),
            TextureId::Letter(_) => Vec2::new(128.0, 128.0),
        }
    }

    /// Stable asset key
    pub fn key(&self) -> String {
        match self {
            TextureId::Background => "background".to_string(),
            TextureId::Pump => "pump".to_string(),
            TextureId::PumpHandle => "pumpHandle".to_string(),
            TextureId::String => "string".to_string(),
            TextureId::Balloon(color) => format!("balloon_{}", color.as_str()),
            TextureId::Letter(letter) => format!("Letter_{}", letter.as_char()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_round_trip_bounds() {
        assert_eq!(Letter::from_index(0).map(|l| l.as_char()), Some('A'));
        assert_eq!(Letter::from_index(25).map(|l| l.as_char()), Some('Z'));
        assert_eq!(Letter::from_index(26), None);
        assert_eq!(Letter::wrapping(27).as_char(), 'B');
        assert_eq!(Letter::from_char('q').map(|l| l.index()), Some(16));
        assert_eq!(Letter::from_char('7'), None);
    }

    #[test]
    fn test_asset_keys() {
        assert_eq!(TextureId::Balloon(BalloonColor::Red).key(), "balloon_red");
        assert_eq!(
            TextureId::Letter(Letter::from_char('K').unwrap()).key(),
            "Letter_K"
        );
        assert_eq!(TextureId::PumpHandle.key(), "pumpHandle");
    }
}
