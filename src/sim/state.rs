//! Game state and core simulation types
//!
//! Everything the tick loop reads or writes lives in [`GameState`]; there is
//! no module-level mutable state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::balloon::{Balloon, BalloonId};
use super::factory::spawn_balloon;
use super::pump::Pump;
use crate::assets::{BalloonColor, Letter, TextureId};
use crate::scene::{SpriteHost, SpriteId};
use crate::tuning::Tuning;

/// Visible play area in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Something that happened during the last tick (for audio/HUD)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PumpStarted,
    PumpStopped,
    BalloonSpawned(BalloonId),
    /// Balloon reached full size and started floating
    BalloonReleased(BalloonId),
    BalloonPopped {
        id: BalloonId,
        letter: Letter,
        color: BalloonColor,
    },
}

/// Complete game state
#[derive(Debug)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub tuning: Tuning,
    /// Viewport as of the last tick
    pub viewport: Viewport,
    pub pump: Pump,
    /// Active balloons in creation order; the last one is the one on the pump
    pub balloons: Vec<Balloon>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Balloons popped this run
    pub popped: u32,
    /// Whether the pointer was over the pump at the last pointer event
    pub pointer_over_pump: bool,
    pub background: SpriteId,
    /// Events produced by the last tick
    pub events: Vec<GameEvent>,
    /// Next balloon ID
    next_id: u32,
}

impl GameState {
    /// Build the scene: background, pump, and the first balloon on the nozzle
    pub fn new(seed: u64, viewport: Viewport, tuning: Tuning, host: &mut impl SpriteHost) -> Self {
        let background = host.create_image(Vec2::ZERO, TextureId::Background);
        host.set_origin(background, Vec2::ZERO);
        host.set_display_size(background, viewport.size());

        let pump = Pump::spawn(viewport, &tuning, host);

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            viewport,
            pump,
            balloons: Vec::new(),
            time_ticks: 0,
            popped: 0,
            pointer_over_pump: false,
            background,
            events: Vec::new(),
            next_id: 1,
        };

        spawn_balloon(&mut state, host);

        state
    }

    /// Allocate a new balloon ID
    pub fn next_balloon_id(&mut self) -> BalloonId {
        let id = BalloonId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn balloon(&self, id: BalloonId) -> Option<&Balloon> {
        self.balloons.iter().find(|b| b.id == id)
    }

    /// The balloon currently on the pump, if any
    pub fn active_balloon(&self) -> Option<&Balloon> {
        self.balloons.last().filter(|b| !b.is_floating())
    }

    pub fn floating_count(&self) -> usize {
        self.balloons.iter().filter(|b| b.is_floating()).count()
    }

    /// Follow a viewport resize: re-anchor the pump, carry the balloon on the
    /// nozzle with it and stretch the background.
    pub fn set_viewport(&mut self, viewport: Viewport, host: &mut impl SpriteHost) {
        if viewport == self.viewport {
            return;
        }
        log::debug!(
            "Viewport {}x{} -> {}x{}",
            self.viewport.width,
            self.viewport.height,
            viewport.width,
            viewport.height
        );
        self.viewport = viewport;
        host.set_display_size(self.background, viewport.size());

        let delta = self.pump.reanchor(viewport, &self.tuning, host);
        if let Some(balloon) = self.balloons.last_mut().filter(|b| !b.is_floating()) {
            balloon.pos += delta;
            host.set_position(balloon.sprites.body, balloon.pos);
            if let Some(glyph) = balloon.sprites.glyph {
                host.set_position(glyph, balloon.pos);
            }
        }
    }
}
