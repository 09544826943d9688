//! Astro Strike - a browser space shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, game state)
//! - `input`: Logical-key tracking and edge-triggered intents
//! - `renderer`: Canvas 2D rendering of the entity snapshot
//! - `settings`: Player preferences

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions, world coordinates centered at the origin
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 600.0;

    /// Player movement speed (units per frame)
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Player position is clamped this far inside the playfield edges
    pub const PLAYER_MARGIN: f32 = 20.0;
    /// Player respawn position (centered, near the bottom edge)
    pub const PLAYER_START_Y: f32 = -GAME_HEIGHT / 2.0 + 50.0;

    /// Bullet forward speed (units per frame, +y)
    pub const BULLET_SPEED: f32 = 10.0;
    /// Bullets spawn this far ahead of the player
    pub const BULLET_SPAWN_OFFSET: f32 = 20.0;
    /// Minimum wall-clock time between two shots
    pub const SHOT_COOLDOWN_MS: f64 = 200.0;

    /// Enemy approach speed (units per frame, -y)
    pub const ENEMY_SPEED: f32 = 2.0;
    /// Per-frame enemy spawn probability while running
    pub const ENEMY_SPAWN_RATE: f32 = 0.02;
    /// Horizontal span kept clear of the playfield edges when spawning
    pub const ENEMY_SPAWN_INSET: f32 = 100.0;
    /// Enemies spawn/despawn this far beyond the playfield edge
    pub const ENEMY_EDGE_MARGIN: f32 = 20.0;

    /// Number of background stars
    pub const STAR_COUNT: usize = 200;

    /// Bullet-enemy collision distance
    pub const BULLET_HIT_RADIUS: f32 = 20.0;
    /// Player-enemy collision distance
    pub const PLAYER_HIT_RADIUS: f32 = 25.0;

    /// Score per destroyed enemy
    pub const SCORE_PER_KILL: u32 = 10;
    /// Health lost per enemy contact
    pub const DAMAGE_PER_HIT: i32 = 10;
    pub const MAX_HEALTH: i32 = 100;

    /// Celebration banner fires at positive multiples of this score
    pub const MILESTONE_STEP: u32 = 50;
    /// Celebration banner lifetime
    pub const BANNER_DURATION_MS: f64 = 2500.0;
}
