//! Popping balloons

use super::balloon::BalloonId;
use super::factory::spawn_balloon;
use super::state::{GameEvent, GameState};
use crate::scene::SpriteHost;

/// Pop a balloon: hide it, drop it from the active list and destroy its
/// glyph, string and body sprites.
///
/// Returns false (and does nothing) if the balloon is already gone.
///
/// New balloons come from pops as well as releases: popping the balloon on
/// the pump puts a fresh one on the nozzle.
pub fn pop_balloon(state: &mut GameState, id: BalloonId, host: &mut impl SpriteHost) -> bool {
    let Some(index) = state.balloons.iter().position(|b| b.id == id) else {
        log::debug!("Pop ignored, balloon {:?} already gone", id);
        return false;
    };

    let mut balloon = state.balloons.remove(index);
    balloon.visible = false;
    host.set_visible(balloon.sprites.body, false);

    if let Some(glyph) = balloon.sprites.glyph.take() {
        host.destroy(glyph);
    }
    if let Some(string) = balloon.sprites.string.take() {
        host.destroy(string);
    }
    host.destroy(balloon.sprites.body);

    state.popped += 1;
    state.events.push(GameEvent::BalloonPopped {
        id,
        letter: balloon.letter,
        color: balloon.color,
    });
    log::debug!("Popped balloon {:?} ({})", id, balloon.letter.as_char());

    if !balloon.is_floating() {
        spawn_balloon(state, host);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SpriteWorld;
    use crate::sim::inflate::pump_active_balloon;
    use crate::sim::Viewport;
    use crate::tuning::Tuning;

    fn state_with_floating(seed: u64) -> (GameState, SpriteWorld, BalloonId) {
        let mut world = SpriteWorld::new();
        let mut state = GameState::new(seed, Viewport::new(1280.0, 720.0), Tuning::default(), &mut world);
        let id = state.balloons[0].id;
        for _ in 0..48 {
            pump_active_balloon(&mut state, &mut world);
        }
        assert!(state.balloon(id).unwrap().is_floating());
        (state, world, id)
    }

    #[test]
    fn test_pop_floating_destroys_three_sprites() {
        let (mut state, mut world, id) = state_with_floating(11);
        let sprites = state.balloon(id).unwrap().sprites;
        let count = state.balloons.len();
        let destroyed = world.destroyed_count();

        assert!(pop_balloon(&mut state, id, &mut world));

        assert_eq!(world.destroyed_count() - destroyed, 3);
        assert_eq!(state.balloons.len(), count - 1);
        assert!(state.balloon(id).is_none());
        assert!(world.get(sprites.body).is_none());
        assert!(world.get(sprites.glyph.unwrap()).is_none());
        assert!(world.get(sprites.string.unwrap()).is_none());
        assert_eq!(state.popped, 1);
        assert!(matches!(
            state.events.last(),
            Some(GameEvent::BalloonPopped { id: popped, .. }) if *popped == id
        ));
    }

    #[test]
    fn test_double_pop_is_a_no_op() {
        let (mut state, mut world, id) = state_with_floating(12);
        assert!(pop_balloon(&mut state, id, &mut world));
        let destroyed = world.destroyed_count();
        let count = state.balloons.len();

        assert!(!pop_balloon(&mut state, id, &mut world));
        assert_eq!(world.destroyed_count(), destroyed);
        assert_eq!(state.balloons.len(), count);
        assert_eq!(state.popped, 1);
    }

    #[test]
    fn test_popping_the_pump_balloon_replaces_it() {
        let mut world = SpriteWorld::new();
        let mut state = GameState::new(13, Viewport::new(1280.0, 720.0), Tuning::default(), &mut world);
        let id = state.balloons[0].id;
        let destroyed = world.destroyed_count();

        assert!(pop_balloon(&mut state, id, &mut world));

        // No string yet: body + glyph
        assert_eq!(world.destroyed_count() - destroyed, 2);
        let next = state.active_balloon().unwrap();
        assert_ne!(next.id, id);
        assert_eq!(next.scale, 0.07);
        assert_eq!(next.pos, state.pump.nozzle(&state.tuning));
    }
}
