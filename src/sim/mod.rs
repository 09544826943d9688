//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Stable iteration order (insertion order, reverse-index removal)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, resolve};
pub use state::{
    Bullet, Celebration, Enemy, GamePhase, GameState, Player, Star, CELEBRATION_MESSAGES,
};
pub use tick::{tick, TickInput};
