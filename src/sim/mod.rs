//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (balloon creation order)
//! - No rendering or platform dependencies; drawables go through `SpriteHost`

pub mod balloon;
pub mod factory;
pub mod float;
pub mod hit;
pub mod inflate;
pub mod pop;
pub mod pump;
pub mod state;
pub mod tick;

pub use balloon::{Balloon, BalloonId, BalloonSprites, BalloonStage};
pub use factory::{new_balloon, spawn_balloon};
pub use float::{drift_bounds, float_balloons, float_step, reflect_axis};
pub use hit::{PointerTarget, pointer_target};
pub use inflate::{InflateOutcome, inflate, pump_active_balloon};
pub use pop::pop_balloon;
pub use pump::{Pump, PumpSignal, PumpState};
pub use state::{GameEvent, GameState, Viewport};
pub use tick::{InputEvent, TickInput, apply_event, tick};
