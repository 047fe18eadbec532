//! Pixel Invaders - a classic fixed-shooter arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `input`: Keyboard tracking with most-recent-key priority
//! - `settings`: Quality presets and preferences
//! - `highscores`: Session leaderboard

pub mod highscores;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::{QualityPreset, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth motion)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Logical playfield size - all sim coordinates live in this box,
    /// origin top-left, y growing downward
    pub const WORLD_WIDTH: f32 = 900.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Player cannon sprite box and fixed row
    pub const PLAYER_WIDTH: f32 = 64.0;
    pub const PLAYER_HEIGHT: f32 = 64.0;
    pub const PLAYER_Y: f32 = 480.0;
    /// Player horizontal speed (pixels/sec)
    pub const PLAYER_SPEED: f32 = 300.0;

    /// Invader sprite box
    pub const ENEMY_WIDTH: f32 = 64.0;
    pub const ENEMY_HEIGHT: f32 = 64.0;
    /// Invader horizontal speed at level 0 (pixels/sec)
    pub const ENEMY_BASE_SPEED: f32 = 200.0;
    /// Speed cap after difficulty ramping
    pub const ENEMY_MAX_SPEED: f32 = 420.0;
    /// Speed gain per difficulty level (fraction of base)
    pub const ENEMY_SPEED_RAMP: f32 = 0.08;
    /// Row drop when an invader bounces off a wall
    pub const ENEMY_DESCENT: f32 = 40.0;
    /// Vertical band invaders (re)spawn into
    pub const ENEMY_SPAWN_Y_MIN: f32 = 50.0;
    pub const ENEMY_SPAWN_Y_MAX: f32 = 150.0;

    /// Bullet rect and speed
    pub const BULLET_WIDTH: f32 = 4.0;
    pub const BULLET_HEIGHT: f32 = 14.0;
    pub const BULLET_SPEED: f32 = 500.0;

    /// Bullet-to-invader kill distance (between sprite centers)
    pub const HIT_RADIUS: f32 = 30.0;
    /// Invader y that ends the run (top of the player row band)
    pub const DEFENSE_LINE_Y: f32 = 440.0;

    /// Points per kill
    pub const ENEMY_POINTS: u64 = 10;
    /// Score needed per difficulty level
    pub const LEVEL_SCORE_STEP: u64 = 100;
    /// Invader population bounds across the difficulty ramp
    pub const START_ENEMIES: usize = 4;
    pub const MAX_ENEMIES: usize = 8;
}
