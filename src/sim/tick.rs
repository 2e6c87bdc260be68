//! Fixed timestep simulation tick
//!
//! Browser callbacks never touch the state directly: they queue
//! [`InputEvent`]s, and `tick` applies them in arrival order before advancing
//! the world.

use glam::Vec2;

use super::float::float_balloons;
use super::hit::{PointerTarget, pointer_target};
use super::inflate::pump_active_balloon;
use super::pop::pop_balloon;
use super::pump::PumpSignal;
use super::state::{GameEvent, GameState, Viewport};
use crate::scene::SpriteHost;

/// Raw input observed by the platform layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed at a canvas position
    PointerDown(Vec2),
    PointerUp(Vec2),
    PointerMove(Vec2),
    /// Pointer left the canvas (or the window lost focus)
    PointerLeave,
    /// Keyboard pump control (Space held / released)
    PumpKey(bool),
}

/// Input commands for a single tick
#[derive(Debug, Clone)]
pub struct TickInput {
    /// Current viewport; re-read by the platform every frame
    pub viewport: Viewport,
    /// Events since the previous tick, oldest first
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            events: Vec::new(),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, host: &mut impl SpriteHost) {
    state.events.clear();

    state.set_viewport(input.viewport, host);

    for event in &input.events {
        apply_event(state, *event, host);
    }

    state.time_ticks += 1;

    if state.pump.state.is_pumping() {
        pump_active_balloon(state, host);
    }

    float_balloons(state, host);

    state.pump.animate_handle(&state.tuning, host);
}

/// Apply one queued input event
pub fn apply_event(state: &mut GameState, event: InputEvent, host: &mut impl SpriteHost) {
    match event {
        InputEvent::PointerDown(pos) => {
            let target = pointer_target(state, pos);
            state.pointer_over_pump = target == PointerTarget::Pump;
            match target {
                PointerTarget::Balloon(id) => {
                    pop_balloon(state, id, host);
                }
                PointerTarget::Pump => signal_pump(state, PumpSignal::PointerDown),
                PointerTarget::Nothing => {}
            }
        }
        InputEvent::PointerUp(pos) => {
            state.pointer_over_pump = pointer_target(state, pos) == PointerTarget::Pump;
            signal_pump(state, PumpSignal::PointerUp);
        }
        InputEvent::PointerMove(pos) => {
            let over = pointer_target(state, pos) == PointerTarget::Pump;
            if state.pointer_over_pump && !over {
                signal_pump(state, PumpSignal::PointerOut);
            }
            state.pointer_over_pump = over;
        }
        InputEvent::PointerLeave => {
            state.pointer_over_pump = false;
            signal_pump(state, PumpSignal::PointerOut);
        }
        InputEvent::PumpKey(true) => signal_pump(state, PumpSignal::PointerDown),
        InputEvent::PumpKey(false) => signal_pump(state, PumpSignal::PointerUp),
    }
}

fn signal_pump(state: &mut GameState, signal: PumpSignal) {
    let was_pumping = state.pump.state.is_pumping();
    state.pump.signal(signal);
    match (was_pumping, state.pump.state.is_pumping()) {
        (false, true) => state.events.push(GameEvent::PumpStarted),
        (true, false) => state.events.push(GameEvent::PumpStopped),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SpriteWorld;
    use crate::sim::pump::PumpState;
    use crate::tuning::Tuning;

    const VIEWPORT: Viewport = Viewport {
        width: 1280.0,
        height: 720.0,
    };

    fn new_game(seed: u64) -> (GameState, SpriteWorld) {
        let mut world = SpriteWorld::new();
        let state = GameState::new(seed, VIEWPORT, Tuning::default(), &mut world);
        (state, world)
    }

    /// A point on the pump that no balloon covers
    fn pump_point(state: &GameState) -> Vec2 {
        state.pump.pos - Vec2::splat(5.0)
    }

    fn press_pump(state: &GameState) -> TickInput {
        let mut input = TickInput::new(VIEWPORT);
        input.push(InputEvent::PointerDown(pump_point(state)));
        input
    }

    #[test]
    fn test_idle_tick_changes_nothing_on_pump() {
        let (mut state, mut world) = new_game(1);
        let before = state.balloons[0].clone();

        tick(&mut state, &TickInput::new(VIEWPORT), &mut world);

        assert_eq!(state.time_ticks, 1);
        assert_eq!(state.balloons[0].scale, before.scale);
        assert_eq!(state.balloons[0].pos, before.pos);
    }

    #[test]
    fn test_press_and_release_pump() {
        let (mut state, mut world) = new_game(2);

        let press = press_pump(&state);
        tick(&mut state, &press, &mut world);
        assert_eq!(state.pump.state, PumpState::Pumping);
        assert!(state.events.contains(&GameEvent::PumpStarted));
        assert!(state.balloons[0].scale > 0.07);

        let mut input = TickInput::new(VIEWPORT);
        input.push(InputEvent::PointerUp(Vec2::new(10.0, 10.0)));
        let scale = state.balloons[0].scale;
        tick(&mut state, &input, &mut world);
        assert_eq!(state.pump.state, PumpState::Idle);
        assert!(state.events.contains(&GameEvent::PumpStopped));
        assert_eq!(state.balloons[0].scale, scale);
    }

    #[test]
    fn test_dragging_off_pump_stops_pumping() {
        let (mut state, mut world) = new_game(3);
        let press = press_pump(&state);
        tick(&mut state, &press, &mut world);

        let mut input = TickInput::new(VIEWPORT);
        input.push(InputEvent::PointerMove(pump_point(&state) - Vec2::new(1.0, 1.0)));
        tick(&mut state, &input, &mut world);
        assert_eq!(state.pump.state, PumpState::Pumping);

        let mut input = TickInput::new(VIEWPORT);
        input.push(InputEvent::PointerMove(Vec2::new(50.0, 50.0)));
        tick(&mut state, &input, &mut world);
        assert_eq!(state.pump.state, PumpState::Idle);
    }

    #[test]
    fn test_pointer_leave_and_keyboard() {
        let (mut state, mut world) = new_game(4);

        let mut input = TickInput::new(VIEWPORT);
        input.push(InputEvent::PumpKey(true));
        tick(&mut state, &input, &mut world);
        assert!(state.pump.state.is_pumping());

        let mut input = TickInput::new(VIEWPORT);
        input.push(InputEvent::PointerLeave);
        tick(&mut state, &input, &mut world);
        assert!(!state.pump.state.is_pumping());
    }

    #[test]
    fn test_pumping_persists_without_new_events() {
        let (mut state, mut world) = new_game(5);
        let press = press_pump(&state);
        tick(&mut state, &press, &mut world);

        // Held down: 47 more ticks with no events reach the release point
        for _ in 0..47 {
            tick(&mut state, &TickInput::new(VIEWPORT), &mut world);
        }
        assert_eq!(state.balloons.len(), 2);
        assert!(state.balloons[0].is_floating());
        assert_eq!(state.active_balloon().unwrap().scale, 0.07);
    }

    #[test]
    fn test_click_pops_floating_balloon_and_later_ticks_skip_it() {
        let (mut state, mut world) = new_game(6);
        let press = press_pump(&state);
        tick(&mut state, &press, &mut world);
        for _ in 0..47 {
            tick(&mut state, &TickInput::new(VIEWPORT), &mut world);
        }
        let mut input = TickInput::new(VIEWPORT);
        input.push(InputEvent::PointerUp(Vec2::ZERO));
        tick(&mut state, &input, &mut world);

        let floating = state.balloons[0].clone();
        let mut input = TickInput::new(VIEWPORT);
        input.push(InputEvent::PointerDown(floating.pos));
        tick(&mut state, &input, &mut world);

        assert!(state.balloon(floating.id).is_none());
        assert_eq!(state.popped, 1);
        let live = world.len();
        for _ in 0..30 {
            tick(&mut state, &TickInput::new(VIEWPORT), &mut world);
        }
        assert!(state.balloon(floating.id).is_none());
        assert!(world.get(floating.sprites.body).is_none());
        assert_eq!(world.len(), live);
    }

    #[test]
    fn test_shrinking_viewport_turns_floating_balloon_back() {
        let (mut state, mut world) = new_game(8);
        let press = press_pump(&state);
        tick(&mut state, &press, &mut world);
        for _ in 0..47 {
            tick(&mut state, &TickInput::new(VIEWPORT), &mut world);
        }
        let mut input = TickInput::new(VIEWPORT);
        input.push(InputEvent::PointerUp(Vec2::ZERO));
        tick(&mut state, &input, &mut world);

        let id = state.balloons[0].id;
        assert!(state.balloons[0].is_floating());

        // Right edge now sits on the balloon's center, well past its bound
        let narrow = Viewport::new(state.balloons[0].pos.x, VIEWPORT.height);
        tick(&mut state, &TickInput::new(narrow), &mut world);

        let balloon = state.balloon(id).unwrap();
        assert_eq!(state.viewport, narrow);
        assert!(balloon.vel.x <= 0.0, "vx = {}", balloon.vel.x);
    }

    #[test]
    fn test_determinism() {
        let (mut state1, mut world1) = new_game(99999);
        let (mut state2, mut world2) = new_game(99999);

        let inputs = [
            press_pump(&state1),
            TickInput::new(VIEWPORT),
            TickInput::new(VIEWPORT),
        ];

        for _ in 0..40 {
            for input in &inputs {
                tick(&mut state1, input, &mut world1);
                tick(&mut state2, input, &mut world2);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.balloons.len(), state2.balloons.len());
        for (a, b) in state1.balloons.iter().zip(&state2.balloons) {
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.vel, b.vel);
            assert_eq!(a.letter, b.letter);
            assert_eq!(a.color, b.color);
        }
    }
}
