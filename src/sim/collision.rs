//! Collision resolution
//!
//! Pairwise circular-radius checks over the flat entity lists. Both passes
//! traverse in reverse index order so removal by index stays stable.

use glam::Vec2;
use rand::Rng;

use super::state::{Celebration, GamePhase, GameState, CELEBRATION_MESSAGES};
use crate::consts::*;

/// Two points closer than `radius`?
#[inline]
pub fn circles_overlap(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance(b) < radius
}

/// Resolve bullet-enemy and player-enemy overlaps, apply score and health
/// effects, and end the run when health is depleted. Running phase only;
/// the caller gates this.
pub fn resolve(state: &mut GameState, now_ms: f64) {
    // Bullet-enemy: bullets outer, enemies inner, a bullet consumes at most
    // one enemy per frame (first inner match wins)
    let mut i = state.bullets.len();
    while i > 0 {
        i -= 1;
        let bullet_pos = state.bullets[i].pos;
        for j in (0..state.enemies.len()).rev() {
            if circles_overlap(bullet_pos, state.enemies[j].pos, BULLET_HIT_RADIUS) {
                state.bullets.remove(i);
                state.enemies.remove(j);
                award_kill(state, now_ms);
                break;
            }
        }
    }

    // Player-enemy: each overlap applies independently, so several hits in
    // one frame stack
    let player_pos = state.player.pos;
    for j in (0..state.enemies.len()).rev() {
        if circles_overlap(player_pos, state.enemies[j].pos, PLAYER_HIT_RADIUS) {
            state.enemies.remove(j);
            state.health -= DAMAGE_PER_HIT;
        }
    }

    state.health = state.health.clamp(0, MAX_HEALTH);
    if state.health == 0 {
        state.phase = GamePhase::GameOver;
        log::info!("game over at score {}", state.score);
    }
}

/// Score a kill; raise a celebration banner when the new total lands on a
/// fresh positive multiple of the milestone step. The dedup compares against
/// the last-recorded score value only, so a skipped multiple never fires.
fn award_kill(state: &mut GameState, now_ms: f64) {
    let new_score = state.score + SCORE_PER_KILL;
    if new_score > 0 && new_score % MILESTONE_STEP == 0 && new_score != state.last_score {
        let message =
            CELEBRATION_MESSAGES[state.rng.random_range(0..CELEBRATION_MESSAGES.len())];
        state.celebration = Some(Celebration {
            message,
            expires_at_ms: now_ms + BANNER_DURATION_MS,
        });
    }
    state.last_score = new_score;
    state.score = new_score;
}
