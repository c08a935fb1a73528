//! Sword Arena headless driver
//!
//! Stands in for the touch UI: feeds an autopilot's inputs into the
//! simulation at a fixed frame rate, logs game events, and prints the final
//! frame as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;

use sword_arena::Tuning;
use sword_arena::sim::{
    Direction, Game, GameEvent, InputEvent, RoundPhase, Snapshot, Viewport, hitbox_at, overlaps,
};

#[derive(Parser)]
#[command(name = "sword-arena")]
#[command(about = "Run the Sword Arena simulation headless with an autopilot", long_about = None)]
struct Cli {
    /// RNG seed (same seed, same run)
    #[arg(short, long, default_value_t = 1)]
    seed: u64,

    /// Tuning file (JSON); defaults are used for missing fields
    #[arg(short, long, value_name = "FILE")]
    tuning: Option<PathBuf>,

    /// Viewport width
    #[arg(long, default_value_t = 400.0)]
    width: f32,

    /// Viewport height
    #[arg(long, default_value_t = 800.0)]
    height: f32,

    /// Total simulated time
    #[arg(short, long, default_value_t = 60_000)]
    duration_ms: u64,

    /// Simulated time per frame
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Rounds to play before stopping
    #[arg(short, long, default_value_t = 1)]
    rounds: u32,
}

/// Direction that closes the larger gap between two points
fn toward(from: Vec2, to: Vec2) -> Direction {
    let d = to - from;
    if d.x.abs() >= d.y.abs() {
        if d.x >= 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if d.y >= 0.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}

/// Swing when something is under the sword, otherwise turn to face whatever
/// is closest once it gets near.
fn autopilot(snap: &Snapshot) -> Option<InputEvent> {
    if snap.attacking {
        return None;
    }

    let player = snap.player;
    let reach = player.size.max_element() * 2.0;
    let nearest = snap.enemies.iter().min_by(|a, b| {
        let da = a.aabb.pos.distance_squared(player.pos);
        let db = b.aabb.pos.distance_squared(player.pos);
        da.total_cmp(&db)
    })?;

    let facing = toward(player.pos, nearest.aabb.pos);
    let sword = hitbox_at(player.pos, player.size, facing);
    if facing == snap.facing && overlaps(&sword, &nearest.aabb) {
        return Some(InputEvent::Attack);
    }
    if nearest.aabb.pos.distance(player.pos) <= reach && facing != snap.facing {
        return Some(InputEvent::Press(facing));
    }
    None
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let tuning = match &cli.tuning {
        Some(path) => Tuning::load(path).context("Could not load tuning")?,
        None => Tuning::default(),
    };

    let mut game = Game::new(tuning, Viewport::new(cli.width, cli.height), cli.seed);
    log::info!("Sword Arena (headless) starting, seed {}", game.seed());

    let frame_ms = cli.frame_ms.max(1);
    let mut rounds_left = cli.rounds.max(1);
    let mut kills = 0usize;
    let mut elapsed = 0;

    while elapsed < cli.duration_ms {
        // Turning is a tap: press and release in one frame turns the player
        // and takes a single step that way
        match autopilot(&game.snapshot()) {
            Some(InputEvent::Press(direction)) => {
                game.handle_input(InputEvent::Press(direction));
                game.handle_input(InputEvent::Release);
            }
            Some(input) => game.handle_input(input),
            None => {}
        }

        game.advance(frame_ms);
        elapsed += frame_ms;

        for event in game.drain_events() {
            match event {
                GameEvent::EnemiesSlain { ref ids } => {
                    kills += ids.len();
                    log::info!("t={}ms slain {:?}", game.now(), ids);
                }
                GameEvent::RoundOver => {
                    log::info!("t={}ms Game Over!", game.now());
                    rounds_left = rounds_left.saturating_sub(1);
                }
                other => log::debug!("t={}ms {:?}", game.now(), other),
            }
        }

        if game.phase() == RoundPhase::GameOver {
            if rounds_left == 0 {
                break;
            }
            game.handle_input(InputEvent::Restart);
        }
    }

    log::info!("Finished after {}ms with {} kills", game.now(), kills);
    let json = serde_json::to_string_pretty(&game.snapshot())
        .context("Failed to serialize final snapshot")?;
    println!("{json}");
    Ok(())
}
