//! Sword Arena - a top-down arcade arena
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, enemies, attacks, round state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering and touch controls live outside this crate; they feed
//! [`sim::InputEvent`]s in and read [`sim::Snapshot`]s out.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Simulation time in milliseconds of the virtual clock
pub type Millis = u64;

/// Game configuration constants
pub mod consts {
    use crate::Millis;

    /// Shortest interval a timer may repeat at (one 60 Hz frame).
    /// A zero delay means "as fast as possible", which is this.
    pub const MIN_TIMER_INTERVAL_MS: Millis = 16;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 20.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    /// Delay between movement steps while a direction is held
    pub const PLAYER_MOVEMENT_DELAY_MS: Millis = 0;
    /// Space reserved at the bottom of the screen for the on-screen controls
    pub const HUD_MARGIN: f32 = 25.0;

    /// How long the sword stays out after a swing
    pub const ATTACK_DURATION_MS: Millis = 100;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 40.0;
    pub const ENEMY_SPEED: f32 = 5.0;
    pub const SPAWN_INTERVAL_MS: Millis = 3000;
    /// Delay between an enemy-set change and the next pursuit step
    pub const PURSUIT_DELAY_MS: Millis = 100;
}
