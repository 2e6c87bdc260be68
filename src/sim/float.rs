//! Drift of released balloons
//!
//! Each tick a floating balloon's velocity takes a small random kick, the
//! balloon moves, and any axis that ended up at or past the viewport edge has
//! its velocity turned back toward the interior. Position is never clamped.

use glam::Vec2;
use rand::Rng;

use super::balloon::Balloon;
use super::state::{GameState, Viewport};
use crate::scene::SpriteHost;
use crate::tuning::Tuning;

/// Reflect one velocity component so it points back inside `[min, max]`
#[inline]
pub fn reflect_axis(pos: f32, vel: f32, min: f32, max: f32) -> f32 {
    if pos <= min {
        vel.abs()
    } else if pos >= max {
        -vel.abs()
    } else {
        vel
    }
}

/// Center-position bounds for a balloon of `extent` display size
pub fn drift_bounds(viewport: Viewport, extent: Vec2) -> (Vec2, Vec2) {
    let half = extent * 0.5;
    (half, viewport.size() - half)
}

/// Advance one floating balloon by a tick
pub fn float_step<R: Rng + ?Sized>(
    balloon: &mut Balloon,
    viewport: Viewport,
    rng: &mut R,
    tuning: &Tuning,
    host: &mut impl SpriteHost,
) {
    let jitter = tuning.drift_jitter;
    if jitter > 0.0 {
        balloon.vel.x += rng.random_range(-jitter..=jitter);
        balloon.vel.y += rng.random_range(-jitter..=jitter);
    }
    balloon.pos += balloon.vel;

    let (min, max) = drift_bounds(viewport, balloon.display_size());
    balloon.vel.x = reflect_axis(balloon.pos.x, balloon.vel.x, min.x, max.x);
    balloon.vel.y = reflect_axis(balloon.pos.y, balloon.vel.y, min.y, max.y);

    host.set_position(balloon.sprites.body, balloon.pos);
    if let Some(glyph) = balloon.sprites.glyph {
        host.set_position(glyph, balloon.pos);
    }
    if let Some(string) = balloon.sprites.string {
        host.set_position(string, balloon.string_anchor(tuning));
    }
}

/// Advance every floating balloon, in creation order
pub fn float_balloons(state: &mut GameState, host: &mut impl SpriteHost) {
    let viewport = state.viewport;
    for balloon in state.balloons.iter_mut().filter(|b| b.is_floating()) {
        float_step(balloon, viewport, &mut state.rng, &state.tuning, host);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{BalloonColor, Letter, TextureId};
    use crate::scene::SpriteWorld;
    use crate::sim::balloon::{BalloonId, BalloonSprites, BalloonStage};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const VIEWPORT: Viewport = Viewport {
        width: 1280.0,
        height: 720.0,
    };

    fn floating_balloon(world: &mut SpriteWorld, pos: Vec2, vel: Vec2) -> Balloon {
        let body = world.create_image(pos, TextureId::Balloon(BalloonColor::Green));
        let glyph = world.create_image(pos, TextureId::Letter(Letter::wrapping(2)));
        let string = world.create_image(pos, TextureId::String);
        Balloon {
            id: BalloonId(1),
            pos,
            scale: 0.406,
            color: BalloonColor::Green,
            letter: Letter::wrapping(2),
            vel,
            stage: BalloonStage::Floating,
            visible: true,
            sprites: BalloonSprites {
                body,
                glyph: Some(glyph),
                string: Some(string),
            },
        }
    }

    #[test]
    fn test_reflect_axis() {
        assert_eq!(reflect_axis(5.0, -0.5, 10.0, 100.0), 0.5);
        assert_eq!(reflect_axis(10.0, -0.5, 10.0, 100.0), 0.5);
        assert_eq!(reflect_axis(120.0, 0.7, 10.0, 100.0), -0.7);
        assert_eq!(reflect_axis(50.0, -0.5, 10.0, 100.0), -0.5);
        // Already heading inward: keep it
        assert_eq!(reflect_axis(5.0, 0.3, 10.0, 100.0), 0.3);
    }

    #[test]
    fn test_left_edge_bounce() {
        let mut world = SpriteWorld::new();
        let mut rng = Pcg32::seed_from_u64(5);
        let tuning = Tuning::default();

        let extent = TextureId::Balloon(BalloonColor::Green).size() * 0.406;
        let (min, _) = drift_bounds(VIEWPORT, extent);
        let mut balloon = floating_balloon(&mut world, Vec2::new(min.x - 1.0, 300.0), Vec2::new(-0.5, 0.0));

        float_step(&mut balloon, VIEWPORT, &mut rng, &tuning, &mut world);
        assert!(balloon.vel.x > 0.0);
        assert!((balloon.vel.x - 0.5).abs() <= 0.05 + 1e-6);

        let x = balloon.pos.x;
        float_step(&mut balloon, VIEWPORT, &mut rng, &tuning, &mut world);
        assert!(balloon.pos.x > x);
    }

    #[test]
    fn test_sub_objects_track_balloon() {
        let mut world = SpriteWorld::new();
        let mut rng = Pcg32::seed_from_u64(6);
        let tuning = Tuning::default();
        let mut balloon = floating_balloon(&mut world, Vec2::new(600.0, 300.0), Vec2::new(1.0, -1.0));

        float_step(&mut balloon, VIEWPORT, &mut rng, &tuning, &mut world);

        assert_eq!(world.position(balloon.sprites.body), Some(balloon.pos));
        assert_eq!(world.position(balloon.sprites.glyph.unwrap()), Some(balloon.pos));
        assert_eq!(
            world.position(balloon.sprites.string.unwrap()),
            Some(balloon.string_anchor(&tuning))
        );
    }

    #[test]
    fn test_zero_jitter_moves_by_velocity() {
        let mut world = SpriteWorld::new();
        let mut rng = Pcg32::seed_from_u64(7);
        let tuning = Tuning {
            drift_jitter: 0.0,
            ..Default::default()
        };
        let mut balloon = floating_balloon(&mut world, Vec2::new(600.0, 300.0), Vec2::new(1.0, -2.0));
        float_step(&mut balloon, VIEWPORT, &mut rng, &tuning, &mut world);
        assert_eq!(balloon.pos, Vec2::new(601.0, 298.0));
        assert_eq!(balloon.vel, Vec2::new(1.0, -2.0));
    }

    proptest! {
        #[test]
        fn prop_velocity_points_inward_after_edge(
            x in -200.0f32..1500.0,
            y in -200.0f32..1000.0,
            vx in -3.0f32..3.0,
            vy in -3.0f32..3.0,
            seed in any::<u64>(),
        ) {
            let mut world = SpriteWorld::new();
            let mut rng = Pcg32::seed_from_u64(seed);
            let tuning = Tuning::default();
            let mut balloon = floating_balloon(&mut world, Vec2::new(x, y), Vec2::new(vx, vy));

            float_step(&mut balloon, VIEWPORT, &mut rng, &tuning, &mut world);

            let (min, max) = drift_bounds(VIEWPORT, balloon.display_size());
            if balloon.pos.x <= min.x { prop_assert!(balloon.vel.x >= 0.0); }
            if balloon.pos.x >= max.x { prop_assert!(balloon.vel.x <= 0.0); }
            if balloon.pos.y <= min.y { prop_assert!(balloon.vel.y >= 0.0); }
            if balloon.pos.y >= max.y { prop_assert!(balloon.vel.y <= 0.0); }
        }

        #[test]
        fn prop_reflection_returns_within_one_tick(
            overshoot in 0.0f32..5.0,
            speed in 0.1f32..3.0,
        ) {
            let mut world = SpriteWorld::new();
            let mut rng = Pcg32::seed_from_u64(0);
            let tuning = Tuning {
                drift_jitter: 0.0,
                ..Default::default()
            };
            let extent = TextureId::Balloon(BalloonColor::Green).size() * 0.406;
            let (_, max) = drift_bounds(VIEWPORT, extent);
            let mut balloon = floating_balloon(
                &mut world,
                Vec2::new(max.x + overshoot, 300.0),
                Vec2::new(speed, 0.0),
            );

            float_step(&mut balloon, VIEWPORT, &mut rng, &tuning, &mut world);
            let outside = balloon.pos.x;
            prop_assert!(balloon.vel.x < 0.0);

            float_step(&mut balloon, VIEWPORT, &mut rng, &tuning, &mut world);
            prop_assert!(balloon.pos.x < outside);
        }
    }
}
