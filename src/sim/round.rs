//! Round supervision: player/enemy contact ends the round

use super::scheduler::{Process, Scheduler};
use super::state::{GameEvent, RoundPhase, World};

/// Whether any live enemy overlaps the player
pub fn player_caught(world: &World) -> bool {
    let player = world.player.aabb();
    world
        .enemies
        .iter()
        .any(|enemy| player.overlaps(&enemy.aabb()))
}

/// End the round if an enemy reached the player. Returns true if it ended.
///
/// Game over clears every enemy and halts spawning and pursuit. Spawning only
/// comes back with a full restart.
pub fn check_round(world: &mut World, scheduler: &mut Scheduler) -> bool {
    if world.phase != RoundPhase::Active || !player_caught(world) {
        return false;
    }

    log::info!("Game over: caught with {} enemies alive", world.enemies.len());
    world.phase = RoundPhase::GameOver;
    world.enemies.clear();
    scheduler.stop(Process::Spawn);
    scheduler.stop(Process::Pursuit);
    scheduler.stop(Process::Movement);
    world.emit(GameEvent::RoundOver);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::enemies::spawn_enemy_at;
    use crate::sim::state::Viewport;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn setup() -> (World, Scheduler) {
        let mut world = World::new(Tuning::default(), Viewport::new(400.0, 800.0));
        world.player.pos = Vec2::new(100.0, 100.0);
        let mut sched = Scheduler::new();
        sched.start_repeating(Process::Spawn, 0, 3000);
        sched.arm_once(Process::Pursuit, 0, 100);
        (world, sched)
    }

    #[test]
    fn test_contact_ends_round() {
        let (mut world, mut sched) = setup();
        spawn_enemy_at(&mut world, Vec2::new(120.0, 130.0));
        spawn_enemy_at(&mut world, Vec2::new(0.0, 0.0));

        assert!(check_round(&mut world, &mut sched));
        assert_eq!(world.phase, RoundPhase::GameOver);
        assert!(world.enemies.is_empty());
        assert!(!sched.is_active(Process::Spawn));
        assert!(!sched.is_active(Process::Pursuit));
        assert_eq!(world.events.last(), Some(&GameEvent::RoundOver));
    }

    #[test]
    fn test_touching_edges_is_safe() {
        let (mut world, mut sched) = setup();
        spawn_enemy_at(&mut world, Vec2::new(140.0, 100.0));
        assert!(!check_round(&mut world, &mut sched));
        assert_eq!(world.phase, RoundPhase::Active);
        assert_eq!(world.enemies.len(), 1);
        assert!(sched.is_active(Process::Spawn));
    }

    #[test]
    fn test_game_over_fires_once() {
        let (mut world, mut sched) = setup();
        spawn_enemy_at(&mut world, Vec2::new(100.0, 100.0));
        assert!(check_round(&mut world, &mut sched));

        // Anything that slips in afterwards does not end the round again
        spawn_enemy_at(&mut world, Vec2::new(100.0, 100.0));
        assert!(!check_round(&mut world, &mut sched));
        let overs = world
            .events
            .iter()
            .filter(|e| **e == GameEvent::RoundOver)
            .count();
        assert_eq!(overs, 1);
    }
}
