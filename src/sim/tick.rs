//! Fixed timestep simulation tick
//!
//! Core game loop that advances the invader simulation deterministically.

use glam::Vec2;

use super::collision::bullet_hits_enemy;
use super::state::{BulletState, Enemy, GamePhase, GameState, MAX_PARTICLES, Particle};
use crate::consts::*;

/// Particles spawned per kill burst
const BURST_PARTICLES: usize = 24;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Horizontal movement direction in [-1, 1] (from the key tracker)
    pub move_dir: f32,
    /// Fire the bullet (one-shot, cleared by the caller)
    pub fire: bool,
    /// Pause toggle (one-shot, cleared by the caller)
    pub pause: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
            }
            GamePhase::GameOver => {}
        }
    }

    // Don't tick if paused or game over
    match state.phase {
        GamePhase::Paused | GamePhase::GameOver => return,
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    // Player motion
    state.player.move_dir = input.move_dir.clamp(-1.0, 1.0);
    state.player.update(dt);

    // Firing - only one bullet, re-armed when it leaves the screen
    if input.fire && state.bullet.ready() {
        state.bullet.fire(&state.player);
    }
    state.bullet.update(dt);

    // Invader motion (wall bounce + row descent)
    for enemy in &mut state.enemies {
        enemy.update(dt);
    }

    resolve_bullet_hit(state);

    // Any invader past the defense line ends the run
    if state.enemies.iter().any(|e| e.y >= DEFENSE_LINE_Y) {
        state.phase = GamePhase::GameOver;
    }

    update_particles(state, dt);
}

/// Apply the bullet to the first overlapping invader: score, burst,
/// respawn at the top, and the difficulty step on level boundaries.
fn resolve_bullet_hit(state: &mut GameState) {
    let Some(idx) = state
        .enemies
        .iter()
        .position(|e| bullet_hits_enemy(&state.bullet, e))
    else {
        return;
    };

    let center = state.enemies[idx].center();
    let level_before = state.level();

    state.score += ENEMY_POINTS;
    state.bullet.state = BulletState::Ready;
    spawn_burst(state, center);

    // Respawn into the top band at the (possibly ramped) level speed
    let speed = GameState::enemy_speed_for_level(state.level());
    let mut rng = state.rng_state.next_rng();
    state.enemies[idx] = Enemy::spawn(&mut rng, speed);

    // A level boundary grows the invader population
    if state.level() > level_before && state.enemies.len() < MAX_ENEMIES {
        state.spawn_enemy();
    }
}

/// Scatter a kill burst at `center`. Hash-driven so the particle count
/// can change without touching the gameplay RNG streams.
fn spawn_burst(state: &mut GameState, center: Vec2) {
    for i in 0..BURST_PARTICLES {
        if state.particles.len() >= MAX_PARTICLES {
            break;
        }
        let h = (state.time_ticks as u32)
            .wrapping_add(i as u32)
            .wrapping_mul(2654435761);
        let angle = (h % 628) as f32 / 100.0;
        let speed = 60.0 + ((h >> 16) & 0x7F) as f32;
        state.particles.push(Particle {
            pos: center,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            life: 1.0,
            size: 2.0 + ((h >> 8) & 0x3) as f32,
        });
    }
}

/// Age and cull burst particles
fn update_particles(state: &mut GameState, dt: f32) {
    for p in &mut state.particles {
        p.pos += p.vel * dt;
        p.vel *= 0.98;
        p.life -= dt * 1.6;
    }
    state.particles.retain(|p| p.life > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// A stationary invader parked straight above the player's default
    /// column, out of reach of the defense line.
    fn target_enemy() -> Enemy {
        Enemy {
            x: (WORLD_WIDTH - ENEMY_WIDTH) / 2.0,
            y: 300.0,
            speed: 0.0,
            dir: 1.0,
        }
    }

    #[test]
    fn test_tick_advances_time() {
        let mut state = GameState::new(1);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.time_ticks, 1);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_pause_toggle() {
        let mut state = GameState::new(5);
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };

        tick(&mut state, &pause, SIM_DT);
        assert_eq!(state.phase, GamePhase::Paused);

        // Paused ticks freeze the sim entirely
        let x_before = state.player.x;
        let t_before = state.time_ticks;
        let moving = TickInput {
            move_dir: 1.0,
            ..Default::default()
        };
        tick(&mut state, &moving, SIM_DT);
        assert_eq!(state.phase, GamePhase::Paused);
        assert_eq!(state.time_ticks, t_before);
        assert!((state.player.x - x_before).abs() < 0.0001);

        // Unpause resumes on the same tick
        tick(&mut state, &pause, SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.time_ticks, t_before + 1);
    }

    #[test]
    fn test_pause_ignored_after_game_over() {
        let mut state = GameState::new(2);
        state.enemies.clear();
        state.enemies.push(Enemy {
            x: 100.0,
            y: DEFENSE_LINE_Y,
            speed: 0.0,
            dir: 1.0,
        });

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);

        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause, SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_player_clamps_at_walls() {
        let left = TickInput {
            move_dir: -1.0,
            ..Default::default()
        };
        let mut state = GameState::new(11);
        for _ in 0..300 {
            tick(&mut state, &left, SIM_DT);
        }
        assert_eq!(state.player.x, 0.0);

        let right = TickInput {
            move_dir: 1.0,
            ..Default::default()
        };
        let mut state = GameState::new(11);
        for _ in 0..300 {
            tick(&mut state, &right, SIM_DT);
        }
        assert_eq!(state.player.x, WORLD_WIDTH - PLAYER_WIDTH);
    }

    #[test]
    fn test_fire_arms_one_bullet() {
        let mut state = GameState::new(9);
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };

        tick(&mut state, &fire, SIM_DT);
        assert_eq!(state.bullet.state, BulletState::Fired);
        let muzzle_x = state.player.x + (PLAYER_WIDTH - BULLET_WIDTH) / 2.0;
        assert!((state.bullet.x - muzzle_x).abs() < 0.001);

        // Firing again while in flight must not re-arm at the muzzle
        let y_after_first = state.bullet.y;
        tick(&mut state, &fire, SIM_DT);
        assert_eq!(state.bullet.state, BulletState::Fired);
        assert!(state.bullet.y < y_after_first);
    }

    #[test]
    fn test_bullet_resets_offscreen() {
        let mut state = GameState::new(9);
        // Clear invaders so nothing can absorb the shot
        state.enemies.clear();

        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire, SIM_DT);
        assert_eq!(state.bullet.state, BulletState::Fired);

        // ~480 px of travel at 500 px/s
        for _ in 0..200 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert!(state.bullet.ready());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_kill_scores_and_respawns() {
        let mut state = GameState::new(7);
        state.enemies.clear();
        state.enemies.push(target_enemy());

        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire, SIM_DT);

        for _ in 0..200 {
            if state.score > 0 {
                break;
            }
            tick(&mut state, &TickInput::default(), SIM_DT);
        }

        assert_eq!(state.score, ENEMY_POINTS);
        assert!(state.bullet.ready());
        assert_eq!(state.enemies.len(), 1);
        // Respawn lands in the top band
        assert!(state.enemies[0].y >= ENEMY_SPAWN_Y_MIN);
        assert!(state.enemies[0].y <= ENEMY_SPAWN_Y_MAX);
        // Kill burst fired
        assert!(!state.particles.is_empty());
        assert!(state.particles.len() <= MAX_PARTICLES);

        // Burst decays away on its own
        for _ in 0..150 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_level_up_spawns_extra_enemy() {
        let mut state = GameState::new(3);
        state.score = LEVEL_SCORE_STEP - ENEMY_POINTS;
        state.enemies.clear();
        state.enemies.push(target_enemy());

        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire, SIM_DT);
        for _ in 0..200 {
            if state.score >= LEVEL_SCORE_STEP {
                break;
            }
            tick(&mut state, &TickInput::default(), SIM_DT);
        }

        assert_eq!(state.level(), 1);
        assert_eq!(state.enemies.len(), 2);
        // Both the respawn and the reinforcement carry the ramped speed
        let ramped = GameState::enemy_speed_for_level(1);
        for e in &state.enemies {
            assert!((e.speed - ramped).abs() < 0.001);
        }
    }

    #[test]
    fn test_enemy_speed_ramp_caps() {
        assert!((GameState::enemy_speed_for_level(0) - ENEMY_BASE_SPEED).abs() < 0.001);
        assert!(
            GameState::enemy_speed_for_level(1) > GameState::enemy_speed_for_level(0)
        );
        assert!((GameState::enemy_speed_for_level(1000) - ENEMY_MAX_SPEED).abs() < 0.001);
    }

    #[test]
    fn test_defense_line_ends_run() {
        let mut state = GameState::new(4);
        state.enemies.clear();
        state.enemies.push(Enemy {
            x: 100.0,
            y: DEFENSE_LINE_Y,
            speed: 0.0,
            dir: 1.0,
        });

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);

        // The scene freezes exactly where it ended
        let t = state.time_ticks;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.time_ticks, t);
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed and inputs must stay identical
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let script = [
            TickInput {
                move_dir: 1.0,
                fire: true,
                ..Default::default()
            },
            TickInput {
                move_dir: 1.0,
                ..Default::default()
            },
            TickInput {
                move_dir: -1.0,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..60 {
            for input in &script {
                tick(&mut state1, input, SIM_DT);
                tick(&mut state2, input, SIM_DT);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.enemies.len(), state2.enemies.len());
        assert!((state1.player.x - state2.player.x).abs() < 0.0001);
        for (a, b) in state1.enemies.iter().zip(&state2.enemies) {
            assert!((a.x - b.x).abs() < 0.0001);
            assert!((a.y - b.y).abs() < 0.0001);
        }
    }

    proptest! {
        #[test]
        fn test_player_never_leaves_playfield(
            dirs in proptest::collection::vec(-1i32..=1, 1..300)
        ) {
            let mut state = GameState::new(42);
            for d in dirs {
                let input = TickInput {
                    move_dir: d as f32,
                    ..Default::default()
                };
                tick(&mut state, &input, SIM_DT);
                prop_assert!(state.player.x >= 0.0);
                prop_assert!(state.player.x <= WORLD_WIDTH - PLAYER_WIDTH);
            }
        }

        #[test]
        fn test_enemies_confined_and_descending(seed in 0u64..5000) {
            let mut state = GameState::new(seed);
            let mut prev_y: Vec<f32> = state.enemies.iter().map(|e| e.y).collect();
            for _ in 0..480 {
                tick(&mut state, &TickInput::default(), SIM_DT);
                if state.phase == GamePhase::GameOver {
                    break;
                }
                for (e, py) in state.enemies.iter().zip(&prev_y) {
                    prop_assert!(e.x >= 0.0);
                    prop_assert!(e.x <= WORLD_WIDTH - ENEMY_WIDTH);
                    prop_assert!(e.y >= *py);
                }
                prev_y = state.enemies.iter().map(|e| e.y).collect();
            }
        }
    }
}
