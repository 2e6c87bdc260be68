//! Stroke font for balloon letters
//!
//! Each letter is a handful of polylines on a 4×6 grid (x right, y down).

use glam::Vec2;

use super::shapes::polyline;
use super::vertex::Vertex;
use crate::assets::Letter;

type Stroke = &'static [(f32, f32)];

pub const GRID_W: f32 = 4.0;
pub const GRID_H: f32 = 6.0;

const O_RING: Stroke = &[
    (1.0, 0.0),
    (3.0, 0.0),
    (4.0, 1.0),
    (4.0, 5.0),
    (3.0, 6.0),
    (1.0, 6.0),
    (0.0, 5.0),
    (0.0, 1.0),
    (1.0, 0.0),
];
const P_BOWL: Stroke = &[
    (0.0, 6.0),
    (0.0, 0.0),
    (3.0, 0.0),
    (4.0, 1.0),
    (4.0, 2.0),
    (3.0, 3.0),
    (0.0, 3.0),
];

const GLYPHS: [&[Stroke]; Letter::COUNT] = [
    // A
    &[&[(0.0, 6.0), (2.0, 0.0), (4.0, 6.0)], &[(1.0, 4.0), (3.0, 4.0)]],
    // B
    &[
        &[(0.0, 0.0), (0.0, 6.0), (3.0, 6.0), (4.0, 5.0), (4.0, 4.0), (3.0, 3.0), (0.0, 3.0)],
        &[(0.0, 0.0), (3.0, 0.0), (4.0, 1.0), (4.0, 2.0), (3.0, 3.0)],
    ],
    // C
    &[&[(4.0, 1.0), (3.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.0, 5.0), (1.0, 6.0), (3.0, 6.0), (4.0, 5.0)]],
    // D
    &[&[(0.0, 0.0), (0.0, 6.0), (2.5, 6.0), (4.0, 4.5), (4.0, 1.5), (2.5, 0.0), (0.0, 0.0)]],
    // E
    &[&[(4.0, 0.0), (0.0, 0.0), (0.0, 6.0), (4.0, 6.0)], &[(0.0, 3.0), (3.0, 3.0)]],
    // F
    &[&[(4.0, 0.0), (0.0, 0.0), (0.0, 6.0)], &[(0.0, 3.0), (3.0, 3.0)]],
    // G
    &[&[
        (4.0, 1.0),
        (3.0, 0.0),
        (1.0, 0.0),
        (0.0, 1.0),
        (0.0, 5.0),
        (1.0, 6.0),
        (3.0, 6.0),
        (4.0, 5.0),
        (4.0, 3.0),
        (2.0, 3.0),
    ]],
    // H
    &[&[(0.0, 0.0), (0.0, 6.0)], &[(4.0, 0.0), (4.0, 6.0)], &[(0.0, 3.0), (4.0, 3.0)]],
    // I
    &[&[(1.0, 0.0), (3.0, 0.0)], &[(2.0, 0.0), (2.0, 6.0)], &[(1.0, 6.0), (3.0, 6.0)]],
    // J
    &[&[(4.0, 0.0), (4.0, 5.0), (3.0, 6.0), (1.0, 6.0), (0.0, 5.0)]],
    // K
    &[&[(0.0, 0.0), (0.0, 6.0)], &[(4.0, 0.0), (0.0, 3.5)], &[(1.2, 2.6), (4.0, 6.0)]],
    // L
    &[&[(0.0, 0.0), (0.0, 6.0), (4.0, 6.0)]],
    // M
    &[&[(0.0, 6.0), (0.0, 0.0), (2.0, 3.0), (4.0, 0.0), (4.0, 6.0)]],
    // N
    &[&[(0.0, 6.0), (0.0, 0.0), (4.0, 6.0), (4.0, 0.0)]],
    // O
    &[O_RING],
    // P
    &[P_BOWL],
    // Q
    &[O_RING, &[(2.5, 4.5), (4.0, 6.0)]],
    // R
    &[P_BOWL, &[(2.0, 3.0), (4.0, 6.0)]],
    // S
    &[&[
        (4.0, 1.0),
        (3.0, 0.0),
        (1.0, 0.0),
        (0.0, 1.0),
        (0.0, 2.0),
        (1.0, 3.0),
        (3.0, 3.0),
        (4.0, 4.0),
        (4.0, 5.0),
        (3.0, 6.0),
        (1.0, 6.0),
        (0.0, 5.0),
    ]],
    // T
    &[&[(0.0, 0.0), (4.0, 0.0)], &[(2.0, 0.0), (2.0, 6.0)]],
    // U
    &[&[(0.0, 0.0), (0.0, 5.0), (1.0, 6.0), (3.0, 6.0), (4.0, 5.0), (4.0, 0.0)]],
    // V
    &[&[(0.0, 0.0), (2.0, 6.0), (4.0, 0.0)]],
    // W
    &[&[(0.0, 0.0), (1.0, 6.0), (2.0, 3.0), (3.0, 6.0), (4.0, 0.0)]],
    // X
    &[&[(0.0, 0.0), (4.0, 6.0)], &[(4.0, 0.0), (0.0, 6.0)]],
    // Y
    &[&[(0.0, 0.0), (2.0, 3.0), (4.0, 0.0)], &[(2.0, 3.0), (2.0, 6.0)]],
    // Z
    &[&[(0.0, 0.0), (4.0, 0.0), (0.0, 6.0), (4.0, 6.0)]],
];

/// Strokes for a letter in grid units
pub fn strokes(letter: Letter) -> &'static [Stroke] {
    GLYPHS[letter.index()]
}

/// Tessellate a letter into the box `[min, min + size]`, keeping grid aspect
pub fn letter_vertices(letter: Letter, min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let cell = (size.x / GRID_W).min(size.y / GRID_H);
    let offset = min + (size - Vec2::new(GRID_W, GRID_H) * cell) * 0.5;
    let width = cell * 0.7;

    let mut vertices = Vec::new();
    for stroke in strokes(letter) {
        let points: Vec<Vec2> = stroke
            .iter()
            .map(|&(x, y)| offset + Vec2::new(x, y) * cell)
            .collect();
        vertices.extend(polyline(&points, width, color));
    }
    vertices
}
