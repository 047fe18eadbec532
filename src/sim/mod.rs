//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{bullet_hits_enemy, centers_collide, sprite_center};
pub use state::{
    Bullet, BulletState, Enemy, GamePhase, GameState, MAX_PARTICLES, Particle, Player, RngState,
};
pub use tick::{TickInput, tick};
