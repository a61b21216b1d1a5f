//! Containment circle and wall bounce
//!
//! Bounces are deliberately lively rather than elastic: the reflected
//! direction is kept but the speed is reset to the rebound speed with random
//! jitter, and a random sideways kick is added.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, clamp_speed};
use super::jitter::{self, JitterSource};
use crate::config::BounceParams;
use crate::{reflect, tangent_of, unit_or_zero};

/// The circular region bodies are confined to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Containment {
    pub center: Vec2,
    pub radius: f32,
}

impl Containment {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Furthest a body's center may sit from the containment center
    #[inline]
    pub fn max_distance(&self, body_radius: f32) -> f32 {
        self.radius - body_radius
    }

    /// Whether a body lies fully inside (touching the wall counts as inside)
    #[inline]
    pub fn contains(&self, body: &Body) -> bool {
        (body.pos - self.center).length() <= self.max_distance(body.radius)
    }
}

/// Bounce a body that has left the containment circle back inside
///
/// Returns `true` if the body was outside and has been bounced. A body
/// already inside is left untouched.
pub fn reflect_boundary(
    body: &mut Body,
    containment: &Containment,
    params: &BounceParams,
    rng: &mut impl JitterSource,
) -> bool {
    let offset = body.pos - containment.center;
    let distance = offset.length();
    let max_distance = containment.max_distance(body.radius);
    if distance <= max_distance {
        return false;
    }

    // Outward normal; a body sitting on the center has no direction
    let normal = if distance == 0.0 {
        Vec2::X
    } else {
        offset / distance
    };

    // Push back onto the boundary
    body.pos = containment.center + normal * max_distance;

    let reflected = reflect(body.vel, normal);
    let speed_factor = jitter::speed_factor(rng, params.jitter);
    let kick = jitter::tangential_kick(rng, params.tangential_impulse);

    let vel = unit_or_zero(reflected) * params.speed * speed_factor + tangent_of(normal) * kick;
    body.vel = clamp_speed(vel, params.max_speed);
    body.apply_drag(params.drag);

    log::trace!(
        "wall bounce at ({:.1}, {:.1}) -> vel ({:.2}, {:.2})",
        body.pos.x,
        body.pos.y,
        body.vel.x,
        body.vel.y
    );
    true
}
