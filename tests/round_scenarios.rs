use glam::Vec2;

use sword_arena::Tuning;
use sword_arena::sim::{
    Direction, Game, GameEvent, InputEvent, Process, RoundPhase, Viewport, overlaps,
};

fn new_game(seed: u64) -> Game {
    Game::new(Tuning::default(), Viewport::new(400.0, 800.0), seed)
}

#[test]
fn enemy_on_top_of_player_ends_round() {
    let mut game = new_game(1);
    game.place_player(Vec2::ZERO);
    game.drain_events();

    game.spawn_enemy_at(Vec2::ZERO);

    assert_eq!(game.phase(), RoundPhase::GameOver);
    assert!(game.world().enemies.is_empty());
    assert!(!game.scheduler().is_active(Process::Spawn));
    assert!(game.drain_events().contains(&GameEvent::RoundOver));

    // Spawning stays halted
    game.advance(30_000);
    assert!(game.world().enemies.is_empty());
    assert_eq!(game.phase(), RoundPhase::GameOver);
}

#[test]
fn swing_right_kills_enemy_in_front_only() {
    let mut game = new_game(2);
    game.place_player(Vec2::ZERO);
    assert_eq!(game.world().player.facing, Direction::Right);

    let target = game.spawn_enemy_at(Vec2::new(40.0, 0.0)).unwrap();
    let bystander = game.spawn_enemy_at(Vec2::new(300.0, 600.0)).unwrap();
    assert_eq!(game.phase(), RoundPhase::Active);

    game.handle_input(InputEvent::Attack);

    let sword = game.snapshot().sword.unwrap();
    assert_eq!(sword.pos, Vec2::new(40.0, 0.0));
    let ids: Vec<u32> = game.world().enemies.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![bystander]);
    let events = game.drain_events();
    assert!(events.contains(&GameEvent::EnemiesSlain { ids: vec![target] }));
}

#[test]
fn enemy_walking_into_sword_dies_during_swing() {
    let mut game = new_game(3);
    game.place_player(Vec2::new(100.0, 100.0));
    game.handle_input(InputEvent::Press(Direction::Up));
    game.handle_input(InputEvent::Release);
    assert_eq!(game.world().player.pos, Vec2::new(100.0, 80.0));

    game.handle_input(InputEvent::Attack);
    assert!(game.world().player.is_attacking());

    // Appears under the sword while it is out
    game.spawn_enemy_at(Vec2::new(100.0, 40.0));
    assert!(game.world().enemies.is_empty());
    assert_eq!(game.phase(), RoundPhase::Active);
}

#[test]
fn double_attack_is_a_single_swing() {
    let mut game = new_game(4);
    game.drain_events();

    game.handle_input(InputEvent::Attack);
    game.advance(50);
    game.handle_input(InputEvent::Attack);
    game.advance(50);

    let events = game.drain_events();
    let started = events
        .iter()
        .filter(|e| matches!(e, GameEvent::AttackStarted { .. }))
        .count();
    let ended = events
        .iter()
        .filter(|e| **e == GameEvent::AttackEnded)
        .count();
    assert_eq!(started, 1);
    assert_eq!(ended, 1);
    assert!(!game.world().player.is_attacking());

    // Sword is available again afterwards
    game.handle_input(InputEvent::Attack);
    assert!(game.world().player.is_attacking());
}

#[test]
fn chasing_enemy_eventually_catches_idle_player() {
    let mut game = new_game(5);
    game.drain_events();

    // Idle player in the middle; first spawn at 3s, then it walks over
    game.advance(3000);
    assert_eq!(game.world().enemies.len(), 1);

    game.advance(20_000);
    assert_eq!(game.phase(), RoundPhase::GameOver);
    assert!(game.drain_events().contains(&GameEvent::RoundOver));
}

#[test]
fn enemies_converge_diagonally_then_straight() {
    let mut game = new_game(6);
    game.place_player(Vec2::new(100.0, 300.0));
    let id = game.spawn_enemy_at(Vec2::new(0.0, 0.0)).unwrap();

    // 20 steps: x lines up at 100, y still 200 short
    game.advance(2000);
    let enemy = game.world().enemies.iter().find(|e| e.id == id).unwrap();
    assert_eq!(enemy.pos, Vec2::new(100.0, 100.0));

    // Then straight down the aligned axis
    game.advance(100);
    let enemy = game.world().enemies.iter().find(|e| e.id == id).unwrap();
    assert_eq!(enemy.pos, Vec2::new(100.0, 105.0));
}

#[test]
fn snapshot_never_shows_enemy_overlapping_player() {
    let mut game = new_game(7);
    for frame in 0..2000 {
        if frame % 40 == 0 {
            game.handle_input(InputEvent::Attack);
        }
        game.advance(16);
        let snap = game.snapshot();
        for enemy in &snap.enemies {
            assert!(!overlaps(&snap.player, &enemy.aabb));
        }
        if snap.phase == RoundPhase::GameOver {
            assert!(snap.enemies.is_empty());
            break;
        }
    }
}

#[test]
fn same_seed_same_inputs_same_run() {
    let script = [
        (0, InputEvent::Press(Direction::Left)),
        (200, InputEvent::Release),
        (3100, InputEvent::Attack),
        (4000, InputEvent::Press(Direction::Down)),
        (4300, InputEvent::Release),
        (6100, InputEvent::Attack),
        (9000, InputEvent::Press(Direction::Up)),
    ];

    let run = |seed: u64| {
        let mut game = new_game(seed);
        let mut script = script.iter().peekable();
        let mut frames = Vec::new();
        for t in (0..12_000u64).step_by(16) {
            while let Some((at, input)) = script.peek() {
                if *at > t {
                    break;
                }
                game.handle_input(*input);
                script.next();
            }
            game.advance(16);
            frames.push(game.snapshot());
        }
        (frames, game.drain_events())
    };

    assert_eq!(run(99_999), run(99_999));
}

#[test]
fn snapshot_serializes_to_json() {
    let mut game = new_game(8);
    game.advance(3000);
    game.handle_input(InputEvent::Attack);
    let json = serde_json::to_string(&game.snapshot()).unwrap();
    assert!(json.contains("\"facing\":\"right\""));
    assert!(json.contains("\"attacking\":true"));
}
