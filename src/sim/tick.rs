//! Per-frame simulation step
//!
//! `tick` advances the world by exactly one frame. Control intents and the
//! always-on star drift are handled first; the movement/spawn/prune
//! sub-steps and the collision pass run only while the game is Running.

use glam::Vec2;
use rand::Rng;

use super::collision;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input for a single frame. Movement flags are level-triggered; the rest
/// are edge-triggered intents, consumed by this tick.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    /// Fire intent (cooldown-gated here, not at the input layer)
    pub fire: bool,
    /// Pause toggle: Running -> Paused or Paused -> Running
    pub pause: bool,
    /// Start a run from Idle, or restart from GameOver
    pub start: bool,
    /// Abandon the run, Paused only
    pub quit: bool,
}

/// Advance the game state by one frame. `now_ms` is the wall clock used for
/// the fire cooldown and celebration expiry.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) {
    if input.start && matches!(state.phase, GamePhase::Idle | GamePhase::GameOver) {
        state.begin_run();
    }

    if input.pause {
        match state.phase {
            GamePhase::Running => state.phase = GamePhase::Paused,
            GamePhase::Paused => state.phase = GamePhase::Running,
            _ => {}
        }
    }

    if input.quit && state.phase == GamePhase::Paused {
        state.quit_to_idle();
    }

    // Stars drift in every phase, banners expire in every phase
    update_stars(state);
    if let Some(c) = state.celebration {
        if now_ms >= c.expires_at_ms {
            state.celebration = None;
        }
    }

    if state.phase != GamePhase::Running {
        return;
    }
    state.frame += 1;

    update_player(state, input);
    if input.fire {
        try_shoot(state, now_ms);
    }
    update_bullets(state);
    update_enemies(state);
    collision::resolve(state, now_ms);
}

/// Sum directional inputs and clamp the result to the playfield.
/// Opposing keys cancel because both contribute.
fn update_player(state: &mut GameState, input: &TickInput) {
    let mut delta = Vec2::ZERO;
    if input.move_up {
        delta.y += PLAYER_SPEED;
    }
    if input.move_down {
        delta.y -= PLAYER_SPEED;
    }
    if input.move_left {
        delta.x -= PLAYER_SPEED;
    }
    if input.move_right {
        delta.x += PLAYER_SPEED;
    }

    let pos = state.player.pos + delta;
    state.player.pos = Vec2::new(
        pos.x.clamp(-GAME_WIDTH / 2.0 + PLAYER_MARGIN, GAME_WIDTH / 2.0 - PLAYER_MARGIN),
        pos.y.clamp(-GAME_HEIGHT / 2.0 + PLAYER_MARGIN, GAME_HEIGHT / 2.0 - PLAYER_MARGIN),
    );
}

/// Spawn a bullet at the player's nose if the cooldown allows it
fn try_shoot(state: &mut GameState, now_ms: f64) {
    if now_ms - state.last_shot_ms < SHOT_COOLDOWN_MS {
        return;
    }
    state.last_shot_ms = now_ms;
    state.bullets.push(super::state::Bullet {
        pos: state.player.pos + Vec2::new(0.0, BULLET_SPAWN_OFFSET),
    });
}

fn update_bullets(state: &mut GameState) {
    for bullet in &mut state.bullets {
        bullet.pos.y += BULLET_SPEED;
    }
    state.bullets.retain(|b| b.pos.y <= GAME_HEIGHT / 2.0);
}

fn update_enemies(state: &mut GameState) {
    if state.rng.random::<f32>() < ENEMY_SPAWN_RATE {
        let x = (state.rng.random::<f32>() - 0.5) * (GAME_WIDTH - ENEMY_SPAWN_INSET);
        state.enemies.push(super::state::Enemy {
            pos: Vec2::new(x, GAME_HEIGHT / 2.0 + ENEMY_EDGE_MARGIN),
        });
    }

    for enemy in &mut state.enemies {
        enemy.pos.y -= ENEMY_SPEED;
    }
    state
        .enemies
        .retain(|e| e.pos.y >= -GAME_HEIGHT / 2.0 - ENEMY_EDGE_MARGIN);
}

/// Unconditional drift; a star crossing the near edge recycles to the far
/// edge with a fresh random x
fn update_stars(state: &mut GameState) {
    for star in &mut state.stars {
        star.pos.y -= star.speed;
        if star.pos.y < -GAME_HEIGHT / 2.0 {
            star.pos.y = GAME_HEIGHT / 2.0;
            star.pos.x = (state.rng.random::<f32>() - 0.5) * GAME_WIDTH * 2.0;
        }
    }
}
