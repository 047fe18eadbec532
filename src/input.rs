//! Keyboard movement tracking
//!
//! Left/right resolve with most-recent-key priority: pressing the
//! opposite key while one is held switches direction immediately, and
//! releasing it falls back to whichever key is still held.

/// Movement keys tracked for priority resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Held-key state with most-recent-key priority
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyTracker {
    left_held: bool,
    right_held: bool,
    last_pressed: Option<Side>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, side: Side) {
        match side {
            Side::Left => self.left_held = true,
            Side::Right => self.right_held = true,
        }
        self.last_pressed = Some(side);
    }

    pub fn release(&mut self, side: Side) {
        match side {
            Side::Left => {
                self.left_held = false;
                if self.last_pressed == Some(Side::Left) {
                    self.last_pressed = self.right_held.then_some(Side::Right);
                }
            }
            Side::Right => {
                self.right_held = false;
                if self.last_pressed == Some(Side::Right) {
                    self.last_pressed = self.left_held.then_some(Side::Left);
                }
            }
        }
    }

    /// Resolved movement direction: the most recent key that is still held
    pub fn move_dir(&self) -> f32 {
        match self.last_pressed {
            Some(Side::Left) if self.left_held => -1.0,
            Some(Side::Right) if self.right_held => 1.0,
            _ => 0.0,
        }
    }
}
