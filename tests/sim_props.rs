//! Property tests for the simulation invariants

use astro_strike::consts::*;
use astro_strike::sim::{tick, GamePhase, GameState, TickInput};
use proptest::prelude::*;

/// Gameplay-only input: movement and fire, no phase transitions
fn arb_play_input() -> impl Strategy<Value = TickInput> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(move_up, move_down, move_left, move_right, fire)| TickInput {
                move_up,
                move_down,
                move_left,
                move_right,
                fire,
                ..Default::default()
            },
        )
}

proptest! {
    /// Health stays in [0, 100], score never decreases, entities stay
    /// within the pruning margins, and the star field keeps its size.
    #[test]
    fn invariants_hold_over_any_run(
        seed in any::<u64>(),
        inputs in proptest::collection::vec(arb_play_input(), 1..400),
    ) {
        let mut state = GameState::new(seed);
        state.begin_run();

        let mut now_ms = 0.0;
        let mut last_score = 0;
        for input in &inputs {
            now_ms += 1000.0 / 60.0;
            tick(&mut state, input, now_ms);

            prop_assert!((0..=MAX_HEALTH).contains(&state.health));
            prop_assert!(state.score >= last_score);
            last_score = state.score;

            for bullet in &state.bullets {
                prop_assert!(bullet.pos.y <= GAME_HEIGHT / 2.0);
            }
            for enemy in &state.enemies {
                prop_assert!(enemy.pos.y >= -GAME_HEIGHT / 2.0 - ENEMY_EDGE_MARGIN);
                prop_assert!(enemy.pos.y <= GAME_HEIGHT / 2.0 + ENEMY_EDGE_MARGIN);
                prop_assert!(enemy.pos.x.abs() <= (GAME_WIDTH - ENEMY_SPAWN_INSET) / 2.0);
            }

            prop_assert!(state.player.pos.x.abs() <= GAME_WIDTH / 2.0 - PLAYER_MARGIN);
            prop_assert!(state.player.pos.y.abs() <= GAME_HEIGHT / 2.0 - PLAYER_MARGIN);

            prop_assert_eq!(state.stars.len(), STAR_COUNT);

            if state.phase == GamePhase::GameOver {
                prop_assert_eq!(state.health, 0);
            }
        }
    }

    /// Identical seeds and inputs replay to identical worlds.
    #[test]
    fn runs_replay_deterministically(
        seed in any::<u64>(),
        inputs in proptest::collection::vec(arb_play_input(), 1..200),
    ) {
        let run = || {
            let mut state = GameState::new(seed);
            state.begin_run();
            let mut now_ms = 0.0;
            for input in &inputs {
                now_ms += 1000.0 / 60.0;
                tick(&mut state, input, now_ms);
            }
            state
        };
        let a = run();
        let b = run();

        prop_assert_eq!(a.score, b.score);
        prop_assert_eq!(a.health, b.health);
        prop_assert_eq!(a.player.pos, b.player.pos);
        prop_assert_eq!(a.bullets.len(), b.bullets.len());
        prop_assert_eq!(a.enemies.len(), b.enemies.len());
        for (x, y) in a.enemies.iter().zip(b.enemies.iter()) {
            prop_assert_eq!(x.pos, y.pos);
        }
    }

    /// Pausing freezes the player, bullets and enemies in place while
    /// stars keep drifting; no teleportation on resume.
    #[test]
    fn pausing_freezes_gameplay(
        seed in any::<u64>(),
        inputs in proptest::collection::vec(arb_play_input(), 0..200),
    ) {
        let mut state = GameState::new(seed);
        state.begin_run();
        let mut now_ms = 0.0;
        for input in &inputs {
            now_ms += 1000.0 / 60.0;
            tick(&mut state, input, now_ms);
        }
        prop_assume!(state.phase == GamePhase::Running);

        tick(&mut state, &TickInput { pause: true, ..Default::default() }, now_ms);
        prop_assert_eq!(state.phase, GamePhase::Paused);

        let player = state.player.pos;
        let bullets: Vec<_> = state.bullets.iter().map(|b| b.pos).collect();
        let enemies: Vec<_> = state.enemies.iter().map(|e| e.pos).collect();
        let stars: Vec<_> = state.stars.iter().map(|s| s.pos).collect();

        let held = TickInput {
            move_left: true,
            move_up: true,
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &held, now_ms + 1000.0);

        prop_assert_eq!(state.player.pos, player);
        prop_assert_eq!(state.bullets.iter().map(|b| b.pos).collect::<Vec<_>>(), bullets);
        prop_assert_eq!(state.enemies.iter().map(|e| e.pos).collect::<Vec<_>>(), enemies);
        prop_assert_ne!(state.stars.iter().map(|s| s.pos).collect::<Vec<_>>(), stars);
    }
}
