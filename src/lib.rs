//! Circle Bounce - balls bouncing and multiplying inside a circular arena
//!
//! Core modules:
//! - `sim`: Physics core (integration, boundary bounce, pair collisions, spawning)
//! - `config`: Tunable arena configuration
//! - `timer`: Elapsed-time formatting for the collision panel
//! - `web`: wasm-bindgen handle for a browser render loop (wasm32 only)

pub mod config;
pub mod error;
pub mod sim;
pub mod timer;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{ArenaConfig, BounceParams};
pub use error::ConfigError;

use glam::Vec2;

/// Reference tuning constants (the defaults of [`ArenaConfig`])
pub mod consts {
    /// Radius of the containment circle
    pub const CIRCLE_RADIUS: f32 = 250.0;
    /// Radius of every body, seeded or spawned
    pub const BALL_RADIUS: f32 = 6.0;
    /// Reserved, not applied by the integrator
    pub const GRAVITY: f32 = 0.0;
    /// Speed a body leaves a bounce or collision with (before jitter)
    pub const BOUNCE_SPEED: f32 = 10.0;
    /// ±25% random variation on rebound speed
    pub const BOUNCE_JITTER: f32 = 0.25;
    /// Scale of the random sideways kick on rebound
    pub const TANGENTIAL_IMPULSE: f32 = 2.5;
    /// Velocity multiplier applied once per wall bounce
    pub const DRAG: f32 = 0.995;
    /// Hard cap on body speed (units per frame)
    pub const MAX_SPEED: f32 = 20.0;

    /// Minimum time between two collisions of a body that may spawn
    pub const COOLDOWN_MS: f64 = 200.0;
    /// Population cap
    pub const MAX_BALLS: usize = 30;

    /// Offsets of the two seed bodies from the arena center
    pub const SEED_OFFSETS: [(f32, f32); 2] = [(-80.0, -100.0), (80.0, -80.0)];
    /// Initial velocities of the two seed bodies
    pub const SEED_VELOCITIES: [(f32, f32); 2] = [(4.0, 0.0), (-4.0, 0.0)];

    /// Per-axis spread of a spawned body around the contact midpoint
    pub const SPAWN_POSITION_JITTER: f32 = 6.0;
    /// Spread (radians) of a spawned body's heading
    pub const SPAWN_ANGLE_JITTER: f32 = 0.6;
    /// Spawn speed range as a fraction of `BOUNCE_SPEED`
    pub const SPAWN_SPEED_MIN: f32 = 0.9;
    pub const SPAWN_SPEED_MAX: f32 = 1.3;
}

/// Unit vector of `v`, treating a zero-length vector as length 1
///
/// A zero vector therefore comes back as zero rather than NaN.
#[inline]
pub fn unit_or_zero(v: Vec2) -> Vec2 {
    let len = v.length();
    if len == 0.0 { v } else { v / len }
}

/// Reflect velocity off a surface with given unit normal
#[inline]
pub fn reflect(vel: Vec2, normal: Vec2) -> Vec2 {
    vel - 2.0 * vel.dot(normal) * normal
}

/// Left-hand perpendicular of a unit normal (`(-n.y, n.x)`)
#[inline]
pub fn tangent_of(normal: Vec2) -> Vec2 {
    Vec2::new(-normal.y, normal.x)
}

/// Unit vector pointing at `theta` radians
#[inline]
pub fn from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}
