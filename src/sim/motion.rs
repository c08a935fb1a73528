//! Player movement
//!
//! Holding a direction moves the player one fixed step immediately, then one
//! more step every `movement_delay_ms` until the input is released.

use glam::Vec2;

use super::scheduler::{Process, Scheduler};
use super::state::{Direction, World};
use crate::Millis;

/// Translates held directional input into repeated movement steps
#[derive(Debug, Clone, Default)]
pub struct MotionController {
    held: Option<Direction>,
}

impl MotionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direction currently held, if any
    pub fn held(&self) -> Option<Direction> {
        self.held
    }

    /// Start moving in `direction`, pre-empting any direction already held
    pub fn press(
        &mut self,
        world: &mut World,
        scheduler: &mut Scheduler,
        now: Millis,
        direction: Direction,
    ) {
        scheduler.stop(Process::Movement);
        self.held = Some(direction);
        step_player(world, direction);
        scheduler.start_repeating(Process::Movement, now, world.tuning.movement_delay_ms);
    }

    /// Stop moving. Facing is kept.
    pub fn release(&mut self, scheduler: &mut Scheduler) {
        scheduler.stop(Process::Movement);
        self.held = None;
    }

    /// Movement timer fired
    pub fn repeat(&mut self, world: &mut World) {
        if let Some(direction) = self.held {
            step_player(world, direction);
        }
    }
}

/// Position one step away in `direction`, clamped to the playable area
pub fn stepped_position(world: &World, direction: Direction) -> Vec2 {
    let delta = direction.unit() * world.tuning.player_speed;
    world.clamp_player(world.player.pos + delta)
}

/// Face `direction` and take one step. At a wall the step is a no-op.
pub fn step_player(world: &mut World, direction: Direction) {
    let pos = stepped_position(world, direction);
    world.player.facing = direction;
    world.player.pos = pos;
}
