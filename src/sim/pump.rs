//! The pump and its two-state input toggle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Viewport;
use crate::assets::TextureId;
use crate::scene::{SpriteHost, SpriteId};
use crate::tuning::Tuning;

/// Whether the pump is being held down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PumpState {
    #[default]
    Idle,
    Pumping,
}

/// Pointer signals the pump reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpSignal {
    /// Pointer pressed over the pump
    PointerDown,
    /// Pointer released
    PointerUp,
    /// Pointer left the pump
    PointerOut,
}

impl PumpState {
    /// Next state after a signal. Down always pumps; up/out always idles.
    pub fn on_signal(self, signal: PumpSignal) -> Self {
        match signal {
            PumpSignal::PointerDown => PumpState::Pumping,
            PumpSignal::PointerUp | PumpSignal::PointerOut => PumpState::Idle,
        }
    }

    pub fn is_pumping(&self) -> bool {
        *self == PumpState::Pumping
    }
}

/// The pump, anchored by its bottom-right corner
#[derive(Debug, Clone)]
pub struct Pump {
    /// Bottom-right corner in screen pixels
    pub pos: Vec2,
    pub scale: f32,
    pub state: PumpState,
    /// Handle stroke phase (radians); 0 = handle fully up
    pub stroke_phase: f32,
    pub sprite: SpriteId,
    pub handle_sprite: SpriteId,
}

impl Pump {
    /// Create the pump (and its handle, drawn behind the body) at the viewport corner
    pub fn spawn(viewport: Viewport, tuning: &Tuning, host: &mut impl SpriteHost) -> Self {
        let pos = Self::anchor_for(viewport, tuning);

        let handle_sprite = host.create_image(pos, TextureId::PumpHandle);
        host.set_origin(handle_sprite, Vec2::ONE);
        host.set_scale(handle_sprite, tuning.pump_scale);

        let sprite = host.create_image(pos, TextureId::Pump);
        host.set_origin(sprite, Vec2::ONE);
        host.set_scale(sprite, tuning.pump_scale);

        let pump = Self {
            pos,
            scale: tuning.pump_scale,
            state: PumpState::Idle,
            stroke_phase: 0.0,
            sprite,
            handle_sprite,
        };
        host.set_position(handle_sprite, pump.handle_position(tuning));
        pump
    }

    /// Where the bottom-right corner belongs for a viewport
    pub fn anchor_for(viewport: Viewport, tuning: &Tuning) -> Vec2 {
        Vec2::new(
            viewport.width - tuning.pump_margin,
            viewport.height - tuning.pump_margin,
        )
    }

    pub fn display_size(&self) -> Vec2 {
        TextureId::Pump.size() * self.scale
    }

    /// Nozzle position, where new balloons appear
    pub fn nozzle(&self, tuning: &Tuning) -> Vec2 {
        let size = self.display_size();
        self.pos
            + Vec2::new(
                -size.x * tuning.nozzle_offset_x,
                -size.y * tuning.nozzle_offset_y,
            )
    }

    /// Whether a screen point is over the pump body
    pub fn contains(&self, point: Vec2) -> bool {
        let min = self.pos - self.display_size();
        point.x >= min.x && point.x <= self.pos.x && point.y >= min.y && point.y <= self.pos.y
    }

    /// Bottom-right corner of the handle, pushed down by the current stroke
    pub fn handle_position(&self, tuning: &Tuning) -> Vec2 {
        let size = self.display_size();
        let depth = 0.5 - 0.5 * self.stroke_phase.cos();
        Vec2::new(
            self.pos.x,
            self.pos.y - size.y + depth * tuning.handle_travel * size.y,
        )
    }

    /// Move to a new anchor. Returns how far the nozzle moved.
    pub fn reanchor(&mut self, viewport: Viewport, tuning: &Tuning, host: &mut impl SpriteHost) -> Vec2 {
        let new_pos = Self::anchor_for(viewport, tuning);
        let delta = new_pos - self.pos;
        self.pos = new_pos;
        host.set_position(self.sprite, self.pos);
        host.set_position(self.handle_sprite, self.handle_position(tuning));
        delta
    }

    /// Apply a pointer signal
    pub fn signal(&mut self, signal: PumpSignal) {
        self.state = self.state.on_signal(signal);
    }

    /// Animate the handle: stroke while pumping, rest when idle
    pub fn animate_handle(&mut self, tuning: &Tuning, host: &mut impl SpriteHost) {
        if self.state.is_pumping() {
            self.stroke_phase = (self.stroke_phase + tuning.handle_stroke_rate) % std::f32::consts::TAU;
        } else {
            self.stroke_phase = 0.0;
        }
        host.set_position(self.handle_sprite, self.handle_position(tuning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SpriteWorld;

    #[test]
    fn test_pump_state_transitions() {
        use PumpSignal::*;
        use PumpState::*;

        assert_eq!(Idle.on_signal(PointerDown), Pumping);
        assert_eq!(Pumping.on_signal(PointerUp), Idle);
        assert_eq!(Pumping.on_signal(PointerOut), Idle);
        // No other transitions
        assert_eq!(Idle.on_signal(PointerUp), Idle);
        assert_eq!(Idle.on_signal(PointerOut), Idle);
        assert_eq!(Pumping.on_signal(PointerDown), Pumping);
    }

    #[test]
    fn test_pump_anchor_and_nozzle() {
        let mut world = SpriteWorld::new();
        let tuning = Tuning::default();
        let pump = Pump::spawn(Viewport::new(1000.0, 800.0), &tuning, &mut world);

        assert_eq!(pump.pos, Vec2::new(980.0, 780.0));
        // 400x600 texture at 0.4 → 160x240
        assert_eq!(pump.display_size(), Vec2::new(160.0, 240.0));
        let nozzle = pump.nozzle(&tuning);
        assert!((nozzle.x - (980.0 - 160.0 * 0.76)).abs() < 1e-3);
        assert!((nozzle.y - (780.0 - 240.0 * 0.53)).abs() < 1e-3);

        assert!(pump.contains(Vec2::new(900.0, 700.0)));
        assert!(!pump.contains(Vec2::new(700.0, 700.0)));
        assert!(!pump.contains(Vec2::new(990.0, 700.0)));
    }

    #[test]
    fn test_reanchor_moves_sprites() {
        let mut world = SpriteWorld::new();
        let tuning = Tuning::default();
        let mut pump = Pump::spawn(Viewport::new(1000.0, 800.0), &tuning, &mut world);

        let delta = pump.reanchor(Viewport::new(1200.0, 700.0), &tuning, &mut world);
        assert_eq!(delta, Vec2::new(200.0, -100.0));
        assert_eq!(world.position(pump.sprite), Some(Vec2::new(1180.0, 680.0)));
    }

    #[test]
    fn test_handle_strokes_only_while_pumping() {
        let mut world = SpriteWorld::new();
        let tuning = Tuning::default();
        let mut pump = Pump::spawn(Viewport::new(1000.0, 800.0), &tuning, &mut world);
        let rest = pump.handle_position(&tuning);

        pump.signal(PumpSignal::PointerDown);
        pump.animate_handle(&tuning, &mut world);
        assert!(pump.handle_position(&tuning).y > rest.y);

        pump.signal(PumpSignal::PointerUp);
        pump.animate_handle(&tuning, &mut world);
        assert_eq!(pump.handle_position(&tuning), rest);
        assert_eq!(world.position(pump.handle_sprite), Some(rest));
    }
}
