//! Balloon creation at the pump nozzle

use glam::Vec2;
use rand::Rng;

use super::balloon::{Balloon, BalloonId, BalloonSprites, BalloonStage};
use super::state::{GameEvent, GameState};
use crate::assets::{BalloonColor, Letter, TextureId};
use crate::scene::SpriteHost;
use crate::tuning::Tuning;

/// Build a balloon at `nozzle` with random color, letter and drift velocity.
///
/// Velocity components are integer-uniform: vx in [-1, 1], vy in [-2, -1].
/// They only take effect once the balloon is released.
pub fn new_balloon<R: Rng + ?Sized>(
    id: BalloonId,
    nozzle: Vec2,
    rng: &mut R,
    tuning: &Tuning,
    host: &mut impl SpriteHost,
) -> Balloon {
    let color = BalloonColor::ALL[rng.random_range(0..BalloonColor::ALL.len())];
    let letter = Letter::wrapping(rng.random_range(0..Letter::COUNT));
    let vel = Vec2::new(
        rng.random_range(-1..=1) as f32,
        rng.random_range(-2..=-1) as f32,
    );

    let body = host.create_image(nozzle, TextureId::Balloon(color));
    host.set_scale(body, tuning.initial_scale);

    let glyph = host.create_image(nozzle, TextureId::Letter(letter));
    host.set_scale(glyph, tuning.initial_glyph_scale);

    Balloon {
        id,
        pos: nozzle,
        scale: tuning.initial_scale,
        color,
        letter,
        vel,
        stage: BalloonStage::Inflating,
        visible: true,
        sprites: BalloonSprites {
            body,
            glyph: Some(glyph),
            string: None,
        },
    }
}

/// Put a fresh balloon on the pump nozzle
pub fn spawn_balloon(state: &mut GameState, host: &mut impl SpriteHost) -> BalloonId {
    let id = state.next_balloon_id();
    let nozzle = state.pump.nozzle(&state.tuning);
    let balloon = new_balloon(id, nozzle, &mut state.rng, &state.tuning, host);

    log::debug!(
        "Spawned balloon {:?} ({} {})",
        id,
        balloon.color.as_str(),
        balloon.letter.as_char()
    );

    state.balloons.push(balloon);
    state.events.push(GameEvent::BalloonSpawned(id));
    id
}
