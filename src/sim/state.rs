//! Game state and core simulation types

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// An invader reached the defense line
    GameOver,
}

/// Bullet state - waiting in the cannon or in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletState {
    /// Hidden and available to fire
    Ready,
    /// Moving up the screen
    Fired,
}

/// The player's cannon
#[derive(Debug, Clone)]
pub struct Player {
    /// Left edge of the sprite box
    pub x: f32,
    /// Top of the sprite box (fixed row)
    pub y: f32,
    /// Horizontal speed (pixels/sec)
    pub speed: f32,
    /// Current movement direction: -1, 0, or +1
    pub move_dir: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: (WORLD_WIDTH - PLAYER_WIDTH) / 2.0,
            y: PLAYER_Y,
            speed: PLAYER_SPEED,
            move_dir: 0.0,
        }
    }
}

impl Player {
    /// Integrate horizontal motion and clamp to the playfield
    pub fn update(&mut self, dt: f32) {
        self.x += self.speed * self.move_dir * dt;
        self.x = self.x.clamp(0.0, WORLD_WIDTH - PLAYER_WIDTH);
    }

    /// Center of the sprite box
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + PLAYER_WIDTH / 2.0, self.y + PLAYER_HEIGHT / 2.0)
    }
}

/// An invader
#[derive(Debug, Clone)]
pub struct Enemy {
    /// Left edge of the sprite box
    pub x: f32,
    /// Top of the sprite box
    pub y: f32,
    /// Horizontal speed (pixels/sec)
    pub speed: f32,
    /// Horizontal direction: -1 or +1
    pub dir: f32,
}

impl Enemy {
    /// Spawn into the top band at a random column and direction
    pub fn spawn(rng: &mut Pcg32, speed: f32) -> Self {
        Self {
            x: rng.random_range(0.0..=WORLD_WIDTH - ENEMY_WIDTH),
            y: rng.random_range(ENEMY_SPAWN_Y_MIN..=ENEMY_SPAWN_Y_MAX),
            speed,
            dir: if rng.random_bool(0.5) { 1.0 } else { -1.0 },
        }
    }

    /// Integrate horizontal motion. Wall contact reverses direction and
    /// drops the invader one row toward the defense line.
    pub fn update(&mut self, dt: f32) {
        self.x += self.speed * self.dir * dt;
        if self.x <= 0.0 {
            self.x = 0.0;
            self.dir = 1.0;
            self.y += ENEMY_DESCENT;
        } else if self.x >= WORLD_WIDTH - ENEMY_WIDTH {
            self.x = WORLD_WIDTH - ENEMY_WIDTH;
            self.dir = -1.0;
            self.y += ENEMY_DESCENT;
        }
    }

    /// Center of the sprite box
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + ENEMY_WIDTH / 2.0, self.y + ENEMY_HEIGHT / 2.0)
    }
}

/// The single projectile
#[derive(Debug, Clone)]
pub struct Bullet {
    /// Left edge of the rect (meaningful only while fired)
    pub x: f32,
    /// Top edge of the rect
    pub y: f32,
    /// Vertical speed (pixels/sec, upward)
    pub speed: f32,
    pub state: BulletState,
}

impl Default for Bullet {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            speed: BULLET_SPEED,
            state: BulletState::Ready,
        }
    }
}

impl Bullet {
    /// True if the bullet is waiting in the cannon
    pub fn ready(&self) -> bool {
        self.state == BulletState::Ready
    }

    /// Arm the bullet at the cannon muzzle
    pub fn fire(&mut self, player: &Player) {
        if self.ready() {
            self.x = player.x + (PLAYER_WIDTH - BULLET_WIDTH) / 2.0;
            self.y = player.y - BULLET_HEIGHT;
            self.state = BulletState::Fired;
        }
    }

    /// Fly upward; reset once fully above the top edge
    pub fn update(&mut self, dt: f32) {
        if self.state == BulletState::Fired {
            self.y -= self.speed * dt;
            if self.y + BULLET_HEIGHT < 0.0 {
                self.state = BulletState::Ready;
            }
        }
    }

    /// Center of the rect
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + BULLET_WIDTH / 2.0, self.y + BULLET_HEIGHT / 2.0)
    }
}

/// A particle for kill bursts (visual only, never gameplay-affecting)
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 0-1, decreases over time
    pub life: f32,
    pub size: f32,
}

/// Maximum particles
pub const MAX_PARTICLES: usize = 256;

/// RNG state wrapper. Every randomized event draws from a fresh stream
/// of the run seed, so the sim stays reproducible from (seed, input
/// sequence) alone.
#[derive(Debug, Clone)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Fresh generator on the next stream
    pub fn next_rng(&mut self) -> Pcg32 {
        self.stream += 1;
        Pcg32::new(self.seed, self.stream)
    }
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Score
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Player cannon
    pub player: Player,
    /// Active invaders
    pub enemies: Vec<Enemy>,
    /// The single projectile
    pub bullet: Bullet,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
}

impl GameState {
    /// Create a new game with the given seed
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng_state: RngState::new(seed),
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            player: Player::default(),
            enemies: Vec::new(),
            bullet: Bullet::default(),
            particles: Vec::new(),
        };

        for _ in 0..START_ENEMIES {
            state.spawn_enemy();
        }

        state
    }

    /// Difficulty level derived from score
    pub fn level(&self) -> u32 {
        (self.score / LEVEL_SCORE_STEP) as u32
    }

    /// Invader speed for a difficulty level (ramped, capped)
    pub fn enemy_speed_for_level(level: u32) -> f32 {
        (ENEMY_BASE_SPEED * (1.0 + ENEMY_SPEED_RAMP * level as f32)).min(ENEMY_MAX_SPEED)
    }

    /// Spawn an invader into the top band at the current level's speed
    pub fn spawn_enemy(&mut self) {
        let speed = Self::enemy_speed_for_level(self.level());
        let mut rng = self.rng_state.next_rng();
        self.enemies.push(Enemy::spawn(&mut rng, speed));
    }
}
