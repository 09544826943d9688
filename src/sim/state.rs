//! Game state and core simulation types
//!
//! All per-run state lives on `GameState`. Entities are plain value
//! containers in flat, insertion-ordered vectors; nothing holds a
//! reference to anything else.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Start screen shown, no run in progress
    Idle,
    /// Active gameplay
    Running,
    /// Run frozen mid-flight
    Paused,
    /// Run ended (health depleted)
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub pos: Vec2,
}

impl Player {
    /// Ship at the respawn position (centered, near the bottom edge)
    pub fn at_start() -> Self {
        Self {
            pos: Vec2::new(0.0, PLAYER_START_Y),
        }
    }
}

/// A projectile fired by the player
#[derive(Debug, Clone, Copy)]
pub struct Bullet {
    pub pos: Vec2,
}

/// A hostile ship approaching the player's edge
#[derive(Debug, Clone, Copy)]
pub struct Enemy {
    pub pos: Vec2,
}

/// A background star (decorative parallax, drifts in every phase)
#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub pos: Vec2,
    /// Per-star drift speed, assigned at creation from [0.5, 1.0)
    pub speed: f32,
}

/// Messages shown on score milestones
pub const CELEBRATION_MESSAGES: &[&str] = &[
    "Great shot! 🎯",
    "Keep it up! ⚡",
    "You're on fire! 🔥",
    "Amazing! 🌟",
    "Incredible! 💫",
    "Unstoppable! 🚀",
    "Perfect aim! 🎯",
    "You're a star! ⭐",
    "Outstanding! 👏",
    "Fantastic! 🎉",
    "Legendary! 🏆",
    "Masterful! 🎮",
    "Epic skills! 💪",
    "Dominating! 👑",
    "Unbeatable! 🥇",
];

/// An active milestone banner, expiring on its own
#[derive(Debug, Clone, Copy)]
pub struct Celebration {
    pub message: &'static str,
    /// Wall-clock expiry, checked each frame
    pub expires_at_ms: f64,
}

/// Complete game state, owned by the frame loop
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; every random draw flows through here
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation frame counter (advances only while running)
    pub frame: u64,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub stars: Vec<Star>,
    pub score: u32,
    /// Health in [0, 100]; 0 ends the run
    pub health: i32,
    /// Score value at the last change, for milestone dedup
    pub last_score: u32,
    /// Wall-clock time of the last successful shot
    pub last_shot_ms: f64,
    pub celebration: Option<Celebration>,
}

impl GameState {
    /// Create a fresh state with the given seed, sitting on the start screen
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = spawn_star_field(&mut rng);
        Self {
            seed,
            rng,
            phase: GamePhase::Idle,
            frame: 0,
            player: Player::at_start(),
            bullets: Vec::new(),
            enemies: Vec::new(),
            stars,
            score: 0,
            health: MAX_HEALTH,
            last_score: 0,
            last_shot_ms: f64::NEG_INFINITY,
            celebration: None,
        }
    }

    /// Full run reset shared by start, restart and quit. Clears transient
    /// entities, restores score/health, and re-centers the player. The star
    /// field is left alone; it drifts across runs.
    pub fn reset_run(&mut self) {
        self.frame = 0;
        self.player = Player::at_start();
        self.bullets.clear();
        self.enemies.clear();
        self.score = 0;
        self.health = MAX_HEALTH;
        self.last_score = 0;
        self.last_shot_ms = f64::NEG_INFINITY;
        self.celebration = None;
    }

    /// Start (or restart) a run: full reset, then Running
    pub fn begin_run(&mut self) {
        self.reset_run();
        self.phase = GamePhase::Running;
        log::info!("run started (seed {})", self.seed);
    }

    /// Abandon the run from the pause screen: full reset, back to Idle
    pub fn quit_to_idle(&mut self) {
        self.reset_run();
        self.phase = GamePhase::Idle;
        log::info!("run abandoned");
    }

    /// Celebration banner currently visible?
    pub fn celebration_visible(&self) -> bool {
        self.celebration.is_some()
    }
}

/// Populate the star field over twice the playfield span, so stars cover
/// the view even as they wrap
fn spawn_star_field(rng: &mut Pcg32) -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|_| Star {
            pos: Vec2::new(
                (rng.random::<f32>() - 0.5) * GAME_WIDTH * 2.0,
                (rng.random::<f32>() - 0.5) * GAME_HEIGHT * 2.0,
            ),
            speed: 0.5 + rng.random::<f32>() * 0.5,
        })
        .collect()
}
