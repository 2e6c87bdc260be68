//! Pointer hit testing
//!
//! Only the topmost interactive object under the pointer receives a press.
//! Balloons are always above the pump, and later balloons above earlier ones.

use glam::Vec2;

use super::balloon::BalloonId;
use super::state::GameState;

/// What a pointer position lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Balloon(BalloonId),
    Pump,
    Nothing,
}

/// Topmost interactive object at `point`
pub fn pointer_target(state: &GameState, point: Vec2) -> PointerTarget {
    if let Some(balloon) = state
        .balloons
        .iter()
        .rev()
        .find(|b| b.visible && b.contains(point))
    {
        return PointerTarget::Balloon(balloon.id);
    }
    if state.pump.contains(point) {
        return PointerTarget::Pump;
    }
    PointerTarget::Nothing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SpriteWorld;
    use crate::sim::Viewport;
    use crate::tuning::Tuning;

    #[test]
    fn test_targets() {
        let mut world = SpriteWorld::new();
        let mut state = GameState::new(1, Viewport::new(1000.0, 800.0), Tuning::default(), &mut world);

        // Pump body away from the nozzle balloon
        assert_eq!(pointer_target(&state, Vec2::new(970.0, 770.0)), PointerTarget::Pump);
        assert_eq!(pointer_target(&state, Vec2::new(100.0, 100.0)), PointerTarget::Nothing);

        let nozzle = state.pump.nozzle(&state.tuning);
        let id = state.balloons[0].id;
        assert_eq!(pointer_target(&state, nozzle), PointerTarget::Balloon(id));

        // Hidden balloons don't catch the pointer
        state.balloons[0].visible = false;
        assert_ne!(pointer_target(&state, nozzle), PointerTarget::Balloon(id));
    }

    #[test]
    fn test_latest_balloon_wins_overlap() {
        let mut world = SpriteWorld::new();
        let mut state = GameState::new(1, Viewport::new(1000.0, 800.0), Tuning::default(), &mut world);
        crate::sim::factory::spawn_balloon(&mut state, &mut world);

        let nozzle = state.pump.nozzle(&state.tuning);
        let top = state.balloons[1].id;
        assert_eq!(pointer_target(&state, nozzle), PointerTarget::Balloon(top));
    }
}
