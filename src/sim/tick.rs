//! Event-driven simulation engine
//!
//! Advances a virtual clock and fires the timed processes (movement repeat,
//! enemy spawn, pursuit, attack end) in deadline order. Each firing applies
//! its whole update before the next one runs.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::attack::{finish_attack, resolve_hits, start_attack};
use super::collision::Aabb;
use super::enemies::{pursue, spawn_enemy, spawn_enemy_at};
use super::motion::MotionController;
use super::round::check_round;
use super::scheduler::{Process, Scheduler};
use super::state::{Direction, GameEvent, RngState, RoundPhase, Viewport, World};
use crate::Millis;
use crate::tuning::Tuning;

/// Input from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// A directional button went down
    Press(Direction),
    /// The directional button was released
    Release,
    /// Sword button
    Attack,
    /// The screen changed size (e.g. rotation)
    Resize { width: f32, height: f32 },
    /// Start a new round from scratch
    Restart,
}

/// One enemy as the renderer sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub aabb: Aabb,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub time_ms: Millis,
    pub phase: RoundPhase,
    pub viewport: Viewport,
    pub player: Aabb,
    pub facing: Direction,
    pub attacking: bool,
    /// Present only while attacking
    pub sword: Option<Aabb>,
    pub enemies: Vec<EnemyView>,
}

/// The whole simulation: world state, timers, and input handling
#[derive(Debug, Clone)]
pub struct Game {
    world: World,
    scheduler: Scheduler,
    motion: MotionController,
    rng_state: RngState,
    rng: Pcg32,
    now: Millis,
}

impl Game {
    /// New game: player centered, spawning starts right away
    pub fn new(tuning: Tuning, viewport: Viewport, seed: u64) -> Self {
        let rng_state = RngState::new(seed);
        let rng = rng_state.to_rng();
        let mut game = Self {
            world: World::new(tuning, viewport),
            scheduler: Scheduler::new(),
            motion: MotionController::new(),
            rng_state,
            rng,
            now: 0,
        };
        game.begin_round();
        game
    }

    fn begin_round(&mut self) {
        self.scheduler
            .start_repeating(Process::Spawn, self.now, self.world.tuning.spawn_interval_ms);
        self.world.emit(GameEvent::RoundStarted);
        log::info!(
            "Round started ({}x{}, seed {})",
            self.world.viewport.width,
            self.world.viewport.height,
            self.rng_state.seed
        );
    }

    /// Reinitialize everything for a new round. The RNG stream carries on.
    pub fn restart(&mut self) {
        let events = std::mem::take(&mut self.world.events);
        self.world = World::new(self.world.tuning.clone(), self.world.viewport);
        self.world.events = events;
        self.scheduler.clear();
        self.motion = MotionController::new();
        self.begin_round();
    }

    /// Apply one input event
    pub fn handle_input(&mut self, input: InputEvent) {
        match input {
            InputEvent::Resize { width, height } => {
                self.world.resize(Viewport::new(width, height));
                return;
            }
            InputEvent::Restart => {
                self.restart();
                return;
            }
            _ => {}
        }

        if !self.world.is_active() {
            log::debug!("Ignoring {:?} after game over", input);
            return;
        }

        match input {
            InputEvent::Press(direction) => {
                self.motion
                    .press(&mut self.world, &mut self.scheduler, self.now, direction);
            }
            InputEvent::Release => self.motion.release(&mut self.scheduler),
            InputEvent::Attack => {
                if start_attack(&mut self.world, &mut self.scheduler, self.now)
                    && !resolve_hits(&mut self.world).is_empty()
                {
                    self.enemies_changed();
                }
            }
            InputEvent::Resize { .. } | InputEvent::Restart => {}
        }
    }

    /// Advance the clock by `dt` ms, firing every timer that comes due
    pub fn advance(&mut self, dt: Millis) {
        let until = self.now.saturating_add(dt);
        while let Some((process, due)) = self.scheduler.next_due(until) {
            self.now = due;
            self.scheduler.fire(process);
            self.run(process);
        }
        self.now = until;
    }

    fn run(&mut self, process: Process) {
        log::debug!("{:?} fired at {}ms", process, self.now);
        match process {
            Process::Movement => self.motion.repeat(&mut self.world),
            Process::Spawn => {
                spawn_enemy(&mut self.world, &mut self.rng);
                self.enemies_changed();
            }
            Process::Pursuit => {
                pursue(&mut self.world);
                self.enemies_changed();
            }
            Process::AttackEnd => finish_attack(&mut self.world),
        }
    }

    /// React to any change of the enemy set
    ///
    /// The round check runs first and wins: after a game over nothing else
    /// happens. Otherwise the sword gets a chance to hit, then pursuit is
    /// re-armed (replacing any pending pursuit step).
    fn enemies_changed(&mut self) {
        loop {
            if check_round(&mut self.world, &mut self.scheduler) {
                self.motion = MotionController::new();
                return;
            }
            if resolve_hits(&mut self.world).is_empty() {
                break;
            }
        }

        if self.world.enemies.is_empty() {
            self.scheduler.stop(Process::Pursuit);
        } else {
            self.scheduler
                .arm_once(Process::Pursuit, self.now, self.world.tuning.pursuit_delay_ms);
        }
    }

    /// Drop an enemy at an explicit position (debug/testing)
    pub fn spawn_enemy_at(&mut self, pos: Vec2) -> Option<u32> {
        if !self.world.is_active() {
            return None;
        }
        let id = spawn_enemy_at(&mut self.world, pos);
        self.enemies_changed();
        Some(id)
    }

    /// Teleport the player (debug/testing). The position is clamped.
    pub fn place_player(&mut self, pos: Vec2) {
        self.world.player.pos = self.world.clamp_player(pos);
    }

    /// Take all pending notifications
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.world.events)
    }

    /// Render view of the current state
    pub fn snapshot(&self) -> Snapshot {
        let player = &self.world.player;
        Snapshot {
            time_ms: self.now,
            phase: self.world.phase,
            viewport: self.world.viewport,
            player: player.aabb(),
            facing: player.facing,
            attacking: player.is_attacking(),
            sword: player.sword,
            enemies: self
                .world
                .enemies
                .iter()
                .map(|e| EnemyView {
                    id: e.id,
                    aabb: e.aabb(),
                })
                .collect(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn now(&self) -> Millis {
        self.now
    }

    pub fn phase(&self) -> RoundPhase {
        self.world.phase
    }

    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }
}
