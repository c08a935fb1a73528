//! Gameplay tuning
//!
//! Every number that shapes a round lives here so it can be tweaked from a
//! JSON file without recompiling. Missing fields fall back to `crate::consts`.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::Millis;
use crate::consts::*;

/// Longest delay any timer may be tuned to (one hour)
pub const MAX_TIMER_MS: Millis = 60 * 60 * 1000;

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Distance covered by one movement step
    pub player_speed: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Delay between movement steps while a direction is held (0 = every frame)
    pub movement_delay_ms: Millis,
    /// Bottom strip kept free for the on-screen controls
    pub hud_margin: f32,

    // === Attack ===
    pub attack_duration_ms: Millis,

    // === Enemies ===
    pub enemy_width: f32,
    pub enemy_height: f32,
    /// Distance an enemy covers per axis on each pursuit step
    pub enemy_speed: f32,
    pub spawn_interval_ms: Millis,
    pub pursuit_delay_ms: Millis,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            movement_delay_ms: PLAYER_MOVEMENT_DELAY_MS,
            hud_margin: HUD_MARGIN,

            attack_duration_ms: ATTACK_DURATION_MS,

            enemy_width: ENEMY_WIDTH,
            enemy_height: ENEMY_HEIGHT,
            enemy_speed: ENEMY_SPEED,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            pursuit_delay_ms: PURSUIT_DELAY_MS,
        }
    }
}

impl Tuning {
    /// Parse tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load and validate tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read tuning file {}", path.display()))?;
        let tuning = Self::from_json(&json)
            .with_context(|| format!("Failed to parse tuning file {}", path.display()))?;
        tuning.validate()?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Load tuning, falling back to defaults when the file is missing or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Using default tuning: {:#}", e);
                Self::default()
            }
        }
    }

    /// Reject values that would make the simulation degenerate
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("player_speed", self.player_speed),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("enemy_width", self.enemy_width),
            ("enemy_height", self.enemy_height),
            ("enemy_speed", self.enemy_speed),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                bail!("{name} must be a positive number, got {value}");
            }
        }
        if !(self.hud_margin.is_finite() && self.hud_margin >= 0.0) {
            bail!("hud_margin must not be negative, got {}", self.hud_margin);
        }
        let intervals = [
            ("attack_duration_ms", self.attack_duration_ms),
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("pursuit_delay_ms", self.pursuit_delay_ms),
        ];
        for (name, value) in intervals {
            if value == 0 {
                bail!("{name} must be greater than zero");
            }
        }
        let timers = [("movement_delay_ms", self.movement_delay_ms)]
            .into_iter()
            .chain(intervals);
        for (name, value) in timers {
            if value > MAX_TIMER_MS {
                bail!("{name} must be at most {MAX_TIMER_MS}ms, got {value}");
            }
        }
        Ok(())
    }
}
