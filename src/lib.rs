//! Balloon Pump - pump up letter balloons and pop them
//!
//! Core modules:
//! - `sim`: Deterministic simulation (balloon lifecycle, drift, pump input)
//! - `scene`: Sprite host the simulation drives (create/move/scale/destroy)
//! - `renderer`: WebGPU rendering pipeline
//! - `assets`: Fixed texture set and nominal texture sizes
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences (volume, HUD)
//! - `audio`: Procedural Web Audio effects (wasm only)

pub mod assets;
#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame delta fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
