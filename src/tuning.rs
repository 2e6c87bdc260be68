//! Data-driven game balance
//!
//! Every gameplay constant lives here so a JSON blob in LocalStorage can
//! override any of them without a rebuild.

use serde::{Deserialize, Serialize};

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Balloon growth ===
    /// Scale of a freshly spawned balloon
    pub initial_scale: f32,
    /// Scale of the letter glyph on a freshly spawned balloon
    pub initial_glyph_scale: f32,
    /// Scale at which a balloon is released to float
    pub max_scale: f32,
    /// Scale added per pumping tick
    pub inflate_step: f32,
    /// Pixels the balloon rises per pumping tick
    pub inflate_rise: f32,
    /// Glyph scale as a fraction of balloon scale while inflating
    pub glyph_scale_ratio: f32,

    // === Floating ===
    /// Max per-axis velocity perturbation per tick (pixels/tick)
    pub drift_jitter: f32,

    // === String ===
    pub string_scale: f32,
    /// Vertical string anchor offset as a fraction of balloon display height
    pub string_offset_ratio: f32,

    // === Pump ===
    pub pump_scale: f32,
    /// Distance of the pump's bottom-right corner from the viewport corner
    pub pump_margin: f32,
    /// Nozzle offset from the pump's bottom-right corner, as fractions of its display size
    pub nozzle_offset_x: f32,
    pub nozzle_offset_y: f32,
    /// How far the handle travels down, as a fraction of pump display height
    pub handle_travel: f32,
    /// Handle stroke phase advance per pumping tick (radians)
    pub handle_stroke_rate: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            initial_scale: 0.07,
            initial_glyph_scale: 0.03,
            max_scale: 0.4,
            inflate_step: 0.007,
            inflate_rise: 2.0,
            glyph_scale_ratio: 0.5,

            drift_jitter: 0.05,

            string_scale: 0.7,
            string_offset_ratio: -0.1,

            pump_scale: 0.4,
            pump_margin: 20.0,
            nozzle_offset_x: 0.76,
            nozzle_offset_y: 0.53,
            handle_travel: 0.3,
            handle_stroke_rate: 0.35,
        }
    }
}

impl Tuning {
    /// Jitter at or above this swamps the drift velocity entirely
    const MAX_DRIFT_JITTER: f32 = 1.0;

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "balloon_pump_tuning";

    /// Parse a (possibly partial) JSON tuning blob. Missing fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    fn fields(&self) -> [f32; 15] {
        [
            self.initial_scale,
            self.initial_glyph_scale,
            self.max_scale,
            self.inflate_step,
            self.inflate_rise,
            self.glyph_scale_ratio,
            self.drift_jitter,
            self.string_scale,
            self.string_offset_ratio,
            self.pump_scale,
            self.pump_margin,
            self.nozzle_offset_x,
            self.nozzle_offset_y,
            self.handle_travel,
            self.handle_stroke_rate,
        ]
    }

    /// Whether these values describe a game that can actually progress
    pub fn is_valid(&self) -> bool {
        self.fields().iter().all(|v| v.is_finite())
            && self.inflate_step > 0.0
            && self.initial_scale > 0.0
            && self.max_scale > self.initial_scale
            && (0.0..Self::MAX_DRIFT_JITTER).contains(&self.drift_jitter)
            && self.pump_scale > 0.0
            && self.glyph_scale_ratio >= 0.0
    }

    /// Use these values if valid, otherwise fall back to defaults
    pub fn validated(self) -> Self {
        if self.is_valid() {
            self
        } else {
            log::warn!("Rejecting invalid tuning {:?}, using defaults", self);
            Self::default()
        }
    }

    /// Number of pumping ticks a fresh balloon needs before it floats
    pub fn ticks_to_release(&self) -> u32 {
        let mut scale = self.initial_scale;
        let mut ticks = 0;
        while scale < self.max_scale {
            scale += self.inflate_step;
            ticks += 1;
        }
        ticks
    }

    /// Load tuning overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning overrides from LocalStorage");
                        return tuning.validated();
                    }
                    Err(e) => log::warn!("Ignoring malformed tuning overrides: {}", e),
                }
            }
        }

        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
