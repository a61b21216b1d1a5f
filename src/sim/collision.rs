//! Body-body collision response and spawning
//!
//! The arcade "repel" rule: overlapping bodies are pushed apart exactly to
//! touching distance and both get brand-new outgoing velocities along the
//! contact normal. Momentum is not conserved. A collision between two bodies
//! that have both been quiet for the cooldown may spawn a new body at the
//! contact point, as long as the population is under its cap.

use glam::Vec2;

use super::body::{Body, clamp_speed};
use super::jitter::{self, JitterSource};
use crate::config::{ArenaConfig, BounceParams};
use crate::consts::{SPAWN_ANGLE_JITTER, SPAWN_POSITION_JITTER, SPAWN_SPEED_MAX, SPAWN_SPEED_MIN};
use crate::{from_angle, tangent_of};

/// Limits on creating new bodies from collisions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRules {
    /// Both bodies must have been collision-free this long (ms)
    pub cooldown_ms: f64,
    /// Population cap
    pub max_bodies: usize,
    /// Radius given to spawned bodies
    pub body_radius: f32,
}

impl From<&ArenaConfig> for SpawnRules {
    fn from(config: &ArenaConfig) -> Self {
        Self {
            cooldown_ms: config.cooldown_ms,
            max_bodies: config.max_bodies,
            body_radius: config.body_radius,
        }
    }
}

/// Result of a collision that happened
#[derive(Debug, Clone)]
pub struct Contact {
    /// Unit normal from the first body toward the second
    pub normal: Vec2,
    /// How far the bodies overlapped before separation
    pub overlap: f32,
    /// New body created at the contact point, if spawning was allowed
    pub spawned: Option<Body>,
}

/// Resolve a possible collision between two bodies
///
/// `population` is the live population size (including bodies already
/// spawned but not yet appended this frame), checked against the cap.
/// Returns `None` if the bodies do not overlap.
#[allow(clippy::too_many_arguments)]
pub fn collide_bodies(
    a: &mut Body,
    b: &mut Body,
    params: &BounceParams,
    rules: &SpawnRules,
    now: f64,
    population: usize,
    rng: &mut impl JitterSource,
) -> Option<Contact> {
    let delta = b.pos - a.pos;
    let distance = delta.length();
    let min_distance = a.radius + b.radius;
    if distance >= min_distance {
        return None;
    }

    // Coincident centers have no direction; pick one
    let normal = if distance == 0.0 {
        Vec2::X
    } else {
        delta / distance
    };
    let tangent = tangent_of(normal);

    // Separate symmetrically to exactly touching
    let overlap = min_distance - distance;
    a.pos -= normal * (overlap / 2.0);
    b.pos += normal * (overlap / 2.0);

    // New outgoing velocities, jittered independently per body
    let speed_a = jitter::speed_factor(rng, params.jitter);
    let speed_b = jitter::speed_factor(rng, params.jitter);
    let kick_a = jitter::tangential_kick(rng, params.tangential_impulse);
    let kick_b = jitter::tangential_kick(rng, params.tangential_impulse);

    a.vel = -normal * params.speed * speed_a + tangent * kick_a;
    b.vel = normal * params.speed * speed_b + tangent * kick_b;
    a.clamp_speed(params.max_speed);
    b.clamp_speed(params.max_speed);

    let can_spawn = population < rules.max_bodies
        && a.cooled_down(now, rules.cooldown_ms)
        && b.cooled_down(now, rules.cooldown_ms);

    let spawned = can_spawn.then(|| spawn_between(a, b, params, rules, rng));

    // Marked either way: debounces spawning and flags the pair as handled
    a.last_collision = Some(now);
    b.last_collision = Some(now);

    Some(Contact {
        normal,
        overlap,
        spawned,
    })
}

/// Create a body near the midpoint of two freshly collided bodies, heading
/// roughly along their average velocity
fn spawn_between(
    a: &Body,
    b: &Body,
    params: &BounceParams,
    rules: &SpawnRules,
    rng: &mut impl JitterSource,
) -> Body {
    let half_spread = SPAWN_POSITION_JITTER / 2.0;
    let mid = (a.pos + b.pos) / 2.0
        + Vec2::new(rng.centered(half_spread), rng.centered(half_spread));

    let inherited = (a.vel + b.vel) / 2.0;
    let heading = inherited.y.atan2(inherited.x) + rng.centered(SPAWN_ANGLE_JITTER / 2.0);
    let speed = params.speed * rng.range(SPAWN_SPEED_MIN, SPAWN_SPEED_MAX);
    let vel = clamp_speed(from_angle(heading) * speed, params.max_speed);

    // Never place a body at a coordinate below its own radius
    let radius = rules.body_radius;
    Body::new(
        mid.x.max(radius),
        mid.y.max(radius),
        vel.x,
        vel.y,
        radius,
    )
}

/// Mutable references to two distinct bodies, `i < j`
pub fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i < j, "pair indices must be ordered");
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
