//! Sprite tessellation
//!
//! Every texture is drawn procedurally in its own texture space (pixels, y
//! down, sized by `TextureId::size`), then mapped to the screen through the
//! sprite's position, origin and scale.

use glam::Vec2;

use super::glyphs::letter_vertices;
use super::shapes::{circle, ellipse, polyline, rect, rect_gradient, triangle};
use super::vertex::{Vertex, colors};
use crate::assets::{BalloonColor, Letter, TextureId};
use crate::scene::{Sprite, SpriteWorld};

/// All visible sprites in draw order, in screen pixels
pub fn world_vertices(world: &SpriteWorld) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for (_, sprite) in world.iter() {
        if sprite.visible {
            vertices.extend(sprite_vertices(sprite));
        }
    }
    vertices
}

/// One sprite in screen pixels
pub fn sprite_vertices(sprite: &Sprite) -> Vec<Vertex> {
    let mut vertices = texture_vertices(sprite.texture);
    for v in &mut vertices {
        let p = sprite.to_screen(Vec2::from(v.position));
        v.position = p.to_array();
    }
    vertices
}

/// A texture drawn in its own pixel space
pub fn texture_vertices(texture: TextureId) -> Vec<Vertex> {
    match texture {
        TextureId::Background => background(),
        TextureId::Pump => pump_body(),
        TextureId::PumpHandle => pump_handle(),
        TextureId::String => string(),
        TextureId::Balloon(color) => balloon(color),
        TextureId::Letter(letter) => letter_glyph(letter),
    }
}

fn background() -> Vec<Vertex> {
    let size = TextureId::Background.size();
    let horizon = size.y * 0.88;

    let mut v = rect_gradient(Vec2::ZERO, Vec2::new(size.x, horizon), colors::SKY_TOP, colors::SKY_BOTTOM);
    v.extend(rect(Vec2::new(0.0, horizon), size, colors::GRASS));

    // A few clouds
    let cloud = [1.0, 1.0, 1.0, 0.8];
    for &(x, y, r) in &[(320.0, 180.0, 60.0), (980.0, 120.0, 48.0), (1500.0, 240.0, 70.0)] {
        v.extend(circle(Vec2::new(x, y), r, cloud, 24));
        v.extend(circle(Vec2::new(x - r, y + r * 0.3), r * 0.7, cloud, 24));
        v.extend(circle(Vec2::new(x + r, y + r * 0.3), r * 0.7, cloud, 24));
    }
    v
}

fn pump_body() -> Vec<Vertex> {
    // Nozzle tip sits at (96, 282) to line up with the default nozzle offsets
    let mut v = rect(Vec2::new(96.0, 268.0), Vec2::new(160.0, 296.0), colors::PUMP_TRIM);
    v.extend(rect(Vec2::new(150.0, 170.0), Vec2::new(330.0, 570.0), colors::PUMP_BODY));
    v.extend(rect(Vec2::new(140.0, 150.0), Vec2::new(340.0, 180.0), colors::PUMP_TRIM));
    v.extend(rect(Vec2::new(60.0, 560.0), Vec2::new(400.0, 600.0), colors::PUMP_TRIM));
    // Shine strip
    v.extend(rect(Vec2::new(170.0, 190.0), Vec2::new(190.0, 550.0), colors::HIGHLIGHT));
    v
}

fn pump_handle() -> Vec<Vertex> {
    let mut v = rect(Vec2::new(228.0, 20.0), Vec2::new(252.0, 120.0), colors::HANDLE);
    v.extend(rect(Vec2::new(100.0, 0.0), Vec2::new(380.0, 28.0), colors::HANDLE));
    v
}

fn string() -> Vec<Vertex> {
    let size = TextureId::String.size();
    let steps = 24;
    let points: Vec<Vec2> = (0..=steps)
        .map(|i| {
            let t = i as f32 / steps as f32;
            let sway = (t * std::f32::consts::TAU * 2.0).sin() * size.x * 0.25;
            Vec2::new(size.x * 0.5 + sway, t * size.y)
        })
        .collect();
    polyline(&points, 4.0, colors::STRING)
}

fn balloon(color: BalloonColor) -> Vec<Vertex> {
    let fill = colors::balloon(color);
    let mut v = ellipse(Vec2::new(150.0, 180.0), Vec2::new(145.0, 175.0), fill, 48);
    v.extend(triangle(
        Vec2::new(150.0, 350.0),
        Vec2::new(130.0, 385.0),
        Vec2::new(170.0, 385.0),
        fill,
    ));
    v.extend(ellipse(Vec2::new(95.0, 105.0), Vec2::new(24.0, 44.0), colors::HIGHLIGHT, 20));
    v
}

fn letter_glyph(letter: Letter) -> Vec<Vertex> {
    let size = TextureId::Letter(letter).size();
    letter_vertices(letter, size * 0.15, size * 0.7, colors::LETTER)
}
