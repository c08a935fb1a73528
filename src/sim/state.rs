//! Game state and core simulation types
//!
//! The [`World`] is the single piece of shared mutable state every timed
//! process reads and writes.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::tuning::Tuning;

/// Facing / movement direction (screen space, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    #[default]
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit vector pointing this way
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Enemies spawn and chase the player
    #[default]
    Active,
    /// An enemy reached the player; nothing moves until a restart
    GameOver,
}

/// Size of the visible play area
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

/// The player-controlled swordsman
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub facing: Direction,
    /// Sword hitbox while a swing is in progress
    pub sword: Option<Aabb>,
}

impl Player {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    #[inline]
    pub fn is_attacking(&self) -> bool {
        self.sword.is_some()
    }
}

/// A hostile chaser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Stable identity for removal
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Distance covered per axis on each pursuit step
    pub speed: f32,
    /// Informational only; never drives movement
    pub facing: Direction,
}

impl Enemy {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Notifications for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RoundStarted,
    EnemySpawned { id: u32, pos: (f32, f32) },
    AttackStarted { direction: Direction },
    EnemiesSlain { ids: Vec<u32> },
    AttackEnded,
    /// "Game Over!" - surfaced to the player, not an error
    RoundOver,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete world state shared by all timed processes
#[derive(Debug, Clone)]
pub struct World {
    pub tuning: Tuning,
    pub viewport: Viewport,
    pub phase: RoundPhase,
    pub player: Player,
    /// Live enemies (order carries no meaning)
    pub enemies: Vec<Enemy>,
    /// Pending notifications, drained by the presentation layer
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl World {
    /// Fresh round: player centered, facing right, no enemies
    pub fn new(tuning: Tuning, viewport: Viewport) -> Self {
        let size = Vec2::new(tuning.player_width, tuning.player_height);
        let pos = viewport.size() / 2.0 - size / 2.0;
        let mut world = Self {
            tuning,
            viewport,
            phase: RoundPhase::Active,
            player: Player {
                pos,
                size,
                facing: Direction::Right,
                sword: None,
            },
            enemies: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        };
        world.player.pos = world.clamp_player(pos);
        world
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Largest top-left coordinate the player may occupy
    pub fn player_max(&self) -> Vec2 {
        let max_x = self.viewport.width - self.player.size.x;
        let max_y = self.viewport.height - self.player.size.y - self.tuning.hud_margin;
        Vec2::new(max_x, max_y).max(Vec2::ZERO)
    }

    /// Clamp a candidate player position into the playable area
    pub fn clamp_player(&self, pos: Vec2) -> Vec2 {
        pos.clamp(Vec2::ZERO, self.player_max())
    }

    /// Adopt a new viewport (e.g. rotation) and pull the player back inside
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.player.pos = self.clamp_player(self.player.pos);
    }

    pub fn is_active(&self) -> bool {
        self.phase == RoundPhase::Active
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
