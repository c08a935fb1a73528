//! Enemy spawning and pursuit
//!
//! Enemies appear in a random corner of the viewport and step toward the
//! player. Pursuit moves each axis independently by exactly `speed`, so an
//! enemy approaches diagonally until one axis lines up, then straight.

use glam::Vec2;
use rand::Rng;

use super::state::{Direction, Enemy, GameEvent, Viewport, World};

/// Top-left position for an enemy of `size` in the chosen corner
pub fn corner_position(viewport: &Viewport, size: Vec2, top: bool, left: bool) -> Vec2 {
    let x = if left { 0.0 } else { viewport.width - size.x };
    let y = if top { 0.0 } else { viewport.height - size.y };
    Vec2::new(x, y)
}

/// Spawn one enemy in a random corner. Returns its ID.
pub fn spawn_enemy(world: &mut World, rng: &mut impl Rng) -> u32 {
    let top = rng.random_bool(0.5);
    let left = rng.random_bool(0.5);
    let size = Vec2::new(world.tuning.enemy_width, world.tuning.enemy_height);
    let pos = corner_position(&world.viewport, size, top, left);
    spawn_enemy_at(world, pos)
}

/// Spawn one enemy at an explicit position. Returns its ID.
pub fn spawn_enemy_at(world: &mut World, pos: Vec2) -> u32 {
    let id = world.next_entity_id();
    let enemy = Enemy {
        id,
        pos,
        size: Vec2::new(world.tuning.enemy_width, world.tuning.enemy_height),
        speed: world.tuning.enemy_speed,
        facing: Direction::Up,
    };
    world.enemies.push(enemy);
    log::info!("Enemy {} spawned at ({}, {})", id, pos.x, pos.y);
    world.emit(GameEvent::EnemySpawned {
        id,
        pos: (pos.x, pos.y),
    });
    id
}

/// Move `current` one `speed` step toward `target`; no move when aligned
#[inline]
fn step_toward(current: f32, target: f32, speed: f32) -> f32 {
    if current > target {
        current - speed
    } else if current < target {
        current + speed
    } else {
        current
    }
}

/// One pursuit step for every live enemy
///
/// The new positions are computed from the current state and committed
/// together.
pub fn pursue(world: &mut World) {
    let target = world.player.pos;
    let updated: Vec<Enemy> = world
        .enemies
        .iter()
        .map(|enemy| Enemy {
            pos: Vec2::new(
                step_toward(enemy.pos.x, target.x, enemy.speed),
                step_toward(enemy.pos.y, target.y, enemy.speed),
            ),
            ..enemy.clone()
        })
        .collect();
    log::debug!("Pursuit step for {} enemies", updated.len());
    world.enemies = updated;
}
