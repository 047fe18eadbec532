//! Frame composition
//!
//! Builds the complete vertex list for one frame from the game state.
//! Pure CPU work in world coordinates, so every layer is testable
//! without a GPU.

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{BulletState, GamePhase, GameState};

use super::font::{draw_text, text_width};
use super::shapes::{self, CANNON, INVADER};
use super::vertex::{Vertex, colors};

/// Font cell sizes (world units)
const HUD_CELL: f32 = 3.0;
const TITLE_CELL: f32 = 6.0;
const PROMPT_CELL: f32 = 3.0;

/// Per-frame HUD values that live outside the sim
#[derive(Debug, Clone, Copy, Default)]
pub struct HudInfo {
    pub fps: u32,
    /// Best score of the session, if any run has finished
    pub best: Option<u64>,
}

/// Build the full frame: background, entities, HUD, phase overlay
pub fn build_frame(state: &GameState, settings: &Settings, hud: &HudInfo) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(4096);

    if settings.quality.starfield_enabled() {
        shapes::starfield(settings.quality.star_count(), state.time_ticks, &mut out);
    }

    border(&mut out);

    shapes::particles(&state.particles, settings.max_particles(), &mut out);

    for enemy in &state.enemies {
        shapes::sprite(
            &INVADER,
            enemy.x,
            enemy.y,
            ENEMY_WIDTH,
            ENEMY_HEIGHT,
            colors::ENEMY,
            &mut out,
        );
    }

    shapes::sprite(
        &CANNON,
        state.player.x,
        state.player.y,
        PLAYER_WIDTH,
        PLAYER_HEIGHT,
        colors::PLAYER,
        &mut out,
    );

    if state.bullet.state == BulletState::Fired {
        shapes::rect(
            state.bullet.x,
            state.bullet.y,
            BULLET_WIDTH,
            BULLET_HEIGHT,
            colors::BULLET,
            &mut out,
        );
    }

    hud_line(state, settings, hud, &mut out);

    match state.phase {
        GamePhase::Playing => {}
        GamePhase::Paused => overlay_paused(&mut out),
        GamePhase::GameOver => overlay_game_over(state, &mut out),
    }

    out
}

/// Thin frame marking the playfield edge (visible when letterboxed)
fn border(out: &mut Vec<Vertex>) {
    let t = 2.0;
    shapes::rect(0.0, 0.0, WORLD_WIDTH, t, colors::BORDER, out);
    shapes::rect(0.0, WORLD_HEIGHT - t, WORLD_WIDTH, t, colors::BORDER, out);
    shapes::rect(0.0, 0.0, t, WORLD_HEIGHT, colors::BORDER, out);
    shapes::rect(WORLD_WIDTH - t, 0.0, t, WORLD_HEIGHT, colors::BORDER, out);
}

fn hud_line(state: &GameState, settings: &Settings, hud: &HudInfo, out: &mut Vec<Vertex>) {
    let y = 12.0;

    draw_text(
        &format!("SCORE {:04}", state.score),
        16.0,
        y,
        HUD_CELL,
        colors::HUD,
        out,
    );

    // Session best, tracking the current run as it climbs
    let best = hud.best.unwrap_or(0).max(state.score);
    let best_text = format!("BEST {:04}", best);
    draw_text(
        &best_text,
        (WORLD_WIDTH - text_width(&best_text, HUD_CELL)) / 2.0,
        y,
        HUD_CELL,
        colors::HUD_DIM,
        out,
    );

    let level_text = format!("LEVEL {}", state.level() + 1);
    draw_text(
        &level_text,
        WORLD_WIDTH - text_width(&level_text, HUD_CELL) - 16.0,
        y,
        HUD_CELL,
        colors::HUD,
        out,
    );

    if settings.show_fps {
        let fps_text = format!("FPS {}", hud.fps);
        draw_text(
            &fps_text,
            WORLD_WIDTH - text_width(&fps_text, HUD_CELL) - 16.0,
            y + 30.0,
            HUD_CELL,
            colors::HUD_DIM,
            out,
        );
    }
}

fn overlay_paused(out: &mut Vec<Vertex>) {
    shapes::rect(0.0, 0.0, WORLD_WIDTH, WORLD_HEIGHT, colors::OVERLAY, out);
    center_text("PAUSED", 260.0, TITLE_CELL, colors::PAUSED, out);
}

fn overlay_game_over(state: &GameState, out: &mut Vec<Vertex>) {
    shapes::rect(0.0, 0.0, WORLD_WIDTH, WORLD_HEIGHT, colors::OVERLAY, out);
    center_text("GAME OVER", 200.0, TITLE_CELL, colors::GAME_OVER, out);
    center_text(&format!("SCORE {}", state.score), 290.0, PROMPT_CELL, colors::HUD, out);
    center_text("PRESS R TO RESTART", 340.0, PROMPT_CELL, colors::HUD_DIM, out);
}

fn center_text(text: &str, y: f32, cell: f32, color: [f32; 4], out: &mut Vec<Vertex>) {
    draw_text(
        text,
        (WORLD_WIDTH - text_width(text, cell)) / 2.0,
        y,
        cell,
        color,
        out,
    );
}
