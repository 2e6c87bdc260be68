//! Inflation of the balloon on the pump
//!
//! The only transition from inflating to floating happens here, and it never
//! reverses.

use glam::Vec2;

use super::balloon::{Balloon, BalloonStage};
use super::factory::spawn_balloon;
use super::state::{GameEvent, GameState};
use crate::assets::TextureId;
use crate::scene::SpriteHost;
use crate::tuning::Tuning;

/// Result of one pump stroke on a balloon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InflateOutcome {
    /// Grew by one step, still inflating
    Grew,
    /// Grew past the threshold; string attached and now floating
    Released,
    /// Already at full size (or floating); nothing changed
    Full,
}

/// Grow a balloon by one step, releasing it once it reaches full size
pub fn inflate(balloon: &mut Balloon, tuning: &Tuning, host: &mut impl SpriteHost) -> InflateOutcome {
    if balloon.is_floating() || balloon.scale >= tuning.max_scale {
        return InflateOutcome::Full;
    }

    balloon.scale += tuning.inflate_step;
    balloon.pos.y -= tuning.inflate_rise;
    host.set_scale(balloon.sprites.body, balloon.scale);
    host.set_position(balloon.sprites.body, balloon.pos);

    if let Some(glyph) = balloon.sprites.glyph {
        host.set_scale(glyph, tuning.glyph_scale_ratio * balloon.scale);
        host.set_position(glyph, balloon.pos);
    }

    if balloon.scale >= tuning.max_scale && !balloon.has_string() {
        attach_string(balloon, tuning, host);
        balloon.stage = BalloonStage::Floating;
        return InflateOutcome::Released;
    }

    InflateOutcome::Grew
}

/// Hang the decorative string under the balloon
fn attach_string(balloon: &mut Balloon, tuning: &Tuning, host: &mut impl SpriteHost) {
    let string = host.create_image(balloon.string_anchor(tuning), TextureId::String);
    host.set_origin(string, Vec2::new(0.5, 0.0));
    host.set_scale(string, tuning.string_scale);
    balloon.sprites.string = Some(string);
}

/// One pumping tick: inflate the balloon on the pump and, if it was just
/// released, put the next one on the nozzle.
pub fn pump_active_balloon(state: &mut GameState, host: &mut impl SpriteHost) -> InflateOutcome {
    let Some(balloon) = state.balloons.last_mut() else {
        return InflateOutcome::Full;
    };

    let outcome = inflate(balloon, &state.tuning, host);
    if outcome == InflateOutcome::Released {
        let id = balloon.id;
        log::debug!("Balloon {:?} released at scale {:.3}", id, balloon.scale);
        state.events.push(GameEvent::BalloonReleased(id));
        spawn_balloon(state, host);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SpriteWorld;
    use crate::sim::Viewport;
    use proptest::prelude::*;

    fn new_state(seed: u64) -> (GameState, SpriteWorld) {
        let mut world = SpriteWorld::new();
        let state = GameState::new(seed, Viewport::new(1280.0, 720.0), Tuning::default(), &mut world);
        (state, world)
    }

    #[test]
    fn test_single_stroke_grows_and_rises() {
        let (mut state, mut world) = new_state(1);
        let before = state.balloons[0].clone();

        assert_eq!(pump_active_balloon(&mut state, &mut world), InflateOutcome::Grew);

        let after = &state.balloons[0];
        assert!((after.scale - (before.scale + 0.007)).abs() < 1e-6);
        assert_eq!(after.pos.y, before.pos.y - 2.0);
        assert_eq!(after.pos.x, before.pos.x);

        let glyph = after.sprites.glyph.unwrap();
        assert!((world.scale(glyph).unwrap() - 0.5 * after.scale).abs() < 1e-6);
        assert_eq!(world.position(glyph), Some(after.pos));
        assert_eq!(world.scale(after.sprites.body), Some(after.scale));
    }

    #[test]
    fn test_release_after_48_strokes() {
        let (mut state, mut world) = new_state(2);
        let first = state.balloons[0].id;

        for _ in 0..47 {
            assert_eq!(pump_active_balloon(&mut state, &mut world), InflateOutcome::Grew);
        }
        assert!(!state.balloons[0].is_floating());
        assert!(state.balloons[0].scale < 0.4);

        state.events.clear();
        assert_eq!(pump_active_balloon(&mut state, &mut world), InflateOutcome::Released);

        let released = state.balloon(first).unwrap();
        assert!(released.is_floating());
        assert!(released.has_string());
        assert!(released.scale >= 0.4);

        assert_eq!(state.balloons.len(), 2);
        let next = state.active_balloon().unwrap();
        assert_ne!(next.id, first);
        assert_eq!(next.scale, 0.07);
        assert_eq!(
            state.events,
            vec![
                GameEvent::BalloonReleased(first),
                GameEvent::BalloonSpawned(next.id)
            ]
        );
    }

    #[test]
    fn test_string_hangs_from_anchor() {
        let (mut state, mut world) = new_state(3);
        for _ in 0..48 {
            pump_active_balloon(&mut state, &mut world);
        }
        let balloon = &state.balloons[0];
        let string = world.get(balloon.sprites.string.unwrap()).unwrap();
        assert_eq!(string.pos, balloon.string_anchor(&state.tuning));
        assert_eq!(string.origin, Vec2::new(0.5, 0.0));
        assert_eq!(string.scale.x, 0.7);
    }

    #[test]
    fn test_floating_balloon_is_never_inflated() {
        let (mut state, mut world) = new_state(4);
        for _ in 0..48 {
            pump_active_balloon(&mut state, &mut world);
        }
        let mut released = state.balloons[0].clone();
        let scale = released.scale;
        assert_eq!(inflate(&mut released, &state.tuning, &mut world), InflateOutcome::Full);
        assert_eq!(released.scale, scale);
    }

    proptest! {
        #[test]
        fn prop_one_release_and_one_spawn_per_balloon(strokes in 0u32..400, seed in any::<u64>()) {
            let (mut state, mut world) = new_state(seed);
            let mut releases = 0;
            let mut spawns = 0;
            for _ in 0..strokes {
                state.events.clear();
                pump_active_balloon(&mut state, &mut world);
                for event in &state.events {
                    match event {
                        GameEvent::BalloonReleased(_) => releases += 1,
                        GameEvent::BalloonSpawned(_) => spawns += 1,
                        _ => {}
                    }
                }
            }
            prop_assert_eq!(releases, spawns);
            prop_assert_eq!(releases as usize, state.floating_count());
            prop_assert_eq!(state.balloons.len(), state.floating_count() + 1);
            // Every floating balloon crossed the threshold and carries a string
            for b in state.balloons.iter().filter(|b| b.is_floating()) {
                prop_assert!(b.scale >= 0.4);
                prop_assert!(b.has_string());
            }
            prop_assert!(state.active_balloon().unwrap().scale < 0.4);
        }

        #[test]
        fn prop_stroke_below_max_is_exact(strokes in 0u32..47) {
            let (mut state, mut world) = new_state(9);
            for _ in 0..strokes {
                pump_active_balloon(&mut state, &mut world);
            }
            let before = state.balloons[0].clone();
            prop_assume!(before.scale < 0.4);
            pump_active_balloon(&mut state, &mut world);
            let after = &state.balloons[0];
            prop_assert!((after.scale - before.scale - 0.007).abs() < 1e-6);
            prop_assert!(after.scale > before.scale);
            prop_assert_eq!(after.pos.y, before.pos.y - 2.0);
        }
    }
}
