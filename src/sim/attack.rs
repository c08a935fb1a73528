//! Sword attacks
//!
//! A swing places a player-sized hitbox directly in front of the player and
//! keeps it out for `attack_duration_ms`. Any enemy overlapping the hitbox
//! while it is out is destroyed.

use std::collections::HashSet;

use glam::Vec2;

use super::collision::Aabb;
use super::scheduler::{Process, Scheduler};
use super::state::{Direction, GameEvent, Player, World};
use crate::Millis;

/// Hitbox a body of `size` at `pos` would swing toward `facing`
pub fn hitbox_at(pos: Vec2, size: Vec2, facing: Direction) -> Aabb {
    Aabb::new(pos + facing.unit() * size, size)
}

/// Hitbox adjacent to the player on its facing side, same size as the player
pub fn sword_hitbox(player: &Player) -> Aabb {
    hitbox_at(player.pos, player.size, player.facing)
}

/// Swing the sword. Ignored while a swing is already in progress.
///
/// Returns whether a new swing started. The caller resolves hits.
pub fn start_attack(world: &mut World, scheduler: &mut Scheduler, now: Millis) -> bool {
    if world.player.is_attacking() {
        return false;
    }

    world.player.sword = Some(sword_hitbox(&world.player));
    scheduler.arm_once(Process::AttackEnd, now, world.tuning.attack_duration_ms);
    world.emit(GameEvent::AttackStarted {
        direction: world.player.facing,
    });
    log::debug!("Swing {} at {}ms", world.player.facing.as_str(), now);
    true
}

/// Attack timer fired: put the sword away
pub fn finish_attack(world: &mut World) {
    if world.player.sword.take().is_some() {
        world.emit(GameEvent::AttackEnded);
    }
}

/// Destroy every enemy under the sword. Returns the IDs removed (possibly none).
///
/// Hits are collected first and removed in one pass, so the live set is never
/// edited while it is being scanned.
pub fn resolve_hits(world: &mut World) -> Vec<u32> {
    let Some(sword) = world.player.sword else {
        return Vec::new();
    };

    let hit: Vec<u32> = world
        .enemies
        .iter()
        .filter(|enemy| sword.overlaps(&enemy.aabb()))
        .map(|enemy| enemy.id)
        .collect();

    if hit.is_empty() {
        return hit;
    }

    let doomed: HashSet<u32> = hit.iter().copied().collect();
    let survivors = world
        .enemies
        .iter()
        .filter(|enemy| !doomed.contains(&enemy.id))
        .cloned()
        .collect();
    world.enemies = survivors;

    log::info!("Slashed {} enemies", hit.len());
    world.emit(GameEvent::EnemiesSlain { ids: hit.clone() });
    hit
}
