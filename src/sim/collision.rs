//! Collision checks
//!
//! Kills use the classic arcade test: Euclidean distance between sprite
//! centers under a fixed threshold. Cheap, symmetric, and forgiving at
//! the sprite corners.

use glam::Vec2;

use super::state::{Bullet, BulletState, Enemy};
use crate::consts::HIT_RADIUS;

/// Center of an axis-aligned sprite box
#[inline]
pub fn sprite_center(x: f32, y: f32, w: f32, h: f32) -> Vec2 {
    Vec2::new(x + w / 2.0, y + h / 2.0)
}

/// True if two centers are closer than `radius`
#[inline]
pub fn centers_collide(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance_squared(b) < radius * radius
}

/// Kill check for the bullet against one invader
///
/// Only an in-flight bullet can hit; a ready bullet has no meaningful
/// position.
pub fn bullet_hits_enemy(bullet: &Bullet, enemy: &Enemy) -> bool {
    if bullet.state != BulletState::Fired {
        return false;
    }
    centers_collide(bullet.center(), enemy.center(), HIT_RADIUS)
}
