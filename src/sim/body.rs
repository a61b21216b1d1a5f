//! Body entity, per-frame integration and speed limiting

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A ball in the arena
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Fixed at creation, always positive
    pub radius: f32,
    /// Timestamp (ms) of the last pair collision, `None` if it never collided
    #[serde(default)]
    pub last_collision: Option<f64>,
}

impl Body {
    pub fn new(x: f32, y: f32, vx: f32, vy: f32, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive");
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            radius,
            last_collision: None,
        }
    }

    /// Advance position by one frame of velocity
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    #[inline]
    pub fn apply_drag(&mut self, drag: f32) {
        self.vel *= drag;
    }

    /// Rescale velocity down to `max_speed` if faster, keeping direction
    #[inline]
    pub fn clamp_speed(&mut self, max_speed: f32) {
        self.vel = clamp_speed(self.vel, max_speed);
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Whether the last pair collision is older than `cooldown_ms` at `now`
    #[inline]
    pub fn cooled_down(&self, now: f64, cooldown_ms: f64) -> bool {
        self.last_collision.is_none_or(|t| t < now - cooldown_ms)
    }
}

/// Clamp a velocity's magnitude to `max_speed`
///
/// A zero vector is divided by 1 instead of 0, so it passes through unchanged.
#[inline]
pub fn clamp_speed(vel: Vec2, max_speed: f32) -> Vec2 {
    let mag = vel.length();
    let mag = if mag == 0.0 { 1.0 } else { mag };
    if mag > max_speed {
        vel / mag * max_speed
    } else {
        vel
    }
}
