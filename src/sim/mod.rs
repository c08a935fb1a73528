//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Virtual clock only (no wall-clock reads)
//! - Seeded RNG only
//! - One timer per timed process
//! - No rendering or platform dependencies

pub mod attack;
pub mod collision;
pub mod enemies;
pub mod motion;
pub mod round;
pub mod scheduler;
pub mod state;
pub mod tick;

pub use attack::{finish_attack, hitbox_at, resolve_hits, start_attack, sword_hitbox};
pub use collision::{Aabb, overlaps};
pub use enemies::{corner_position, pursue, spawn_enemy, spawn_enemy_at};
pub use motion::{MotionController, step_player};
pub use round::{check_round, player_caught};
pub use scheduler::{Process, Scheduler, Timer};
pub use state::{Direction, Enemy, GameEvent, Player, RngState, RoundPhase, Viewport, World};
pub use tick::{EnemyView, Game, InputEvent, Snapshot};
