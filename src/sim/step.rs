//! Per-frame simulation step
//!
//! Sequencing only: every body moves, bounces off the wall and is speed
//! limited, then every unordered pair is resolved once. Bodies spawned during
//! the pair scan are held aside and appended after it, so indices stay stable
//! while scanning.

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::boundary::{Containment, reflect_boundary};
use super::collision::{SpawnRules, collide_bodies, pair_mut};
use super::jitter::JitterSource;
use crate::config::ArenaConfig;

/// A pair collision that happened during a step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionEvent {
    /// Seconds since the run started
    pub elapsed_secs: f64,
    /// Population indices of the pair (`first < second`)
    pub first: usize,
    pub second: usize,
    /// How far the pair overlapped when it was evaluated
    pub overlap: f32,
    /// Whether this collision created a new body
    pub spawned: bool,
}

/// What happened during one step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    /// Collisions in scan order
    pub events: Vec<CollisionEvent>,
    /// Bodies appended to the population this step
    pub spawned: usize,
    /// Bodies that hit the wall this step
    pub wall_bounces: usize,
}

impl StepReport {
    /// Events that created a new body
    pub fn spawn_events(&self) -> impl Iterator<Item = &CollisionEvent> {
        self.events.iter().filter(|e| e.spawned)
    }
}

/// Advance the whole population by one frame
///
/// `now` is a monotonic timestamp in milliseconds; `started_at` is the
/// timestamp the run began, used to stamp events with elapsed time.
pub fn step(
    bodies: &mut Vec<Body>,
    containment: &Containment,
    config: &ArenaConfig,
    now: f64,
    started_at: f64,
    rng: &mut impl JitterSource,
) -> StepReport {
    let params = config.bounce();
    let rules = SpawnRules::from(config);
    let mut report = StepReport::default();

    for body in bodies.iter_mut() {
        body.integrate();
        if reflect_boundary(body, containment, &params, rng) {
            report.wall_bounces += 1;
        }
        body.clamp_speed(params.max_speed);
    }

    let elapsed_secs = (now - started_at) / 1000.0;
    let mut pending: Vec<Body> = Vec::new();
    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = pair_mut(bodies, i, j);
            let live = n + pending.len();
            let Some(contact) = collide_bodies(a, b, &params, &rules, now, live, rng) else {
                continue;
            };

            let spawned = contact.spawned.is_some();
            if let Some(child) = contact.spawned {
                log::debug!(
                    "pair ({}, {}) spawned body #{} at ({:.1}, {:.1})",
                    i,
                    j,
                    live,
                    child.pos.x,
                    child.pos.y
                );
                pending.push(child);
                if live + 1 == rules.max_bodies {
                    log::info!("Population cap of {} reached", rules.max_bodies);
                }
            }
            report.events.push(CollisionEvent {
                elapsed_secs,
                first: i,
                second: j,
                overlap: contact.overlap,
                spawned,
            });
        }
    }

    report.spawned = pending.len();
    bodies.append(&mut pending);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::jitter::testing::Fixed;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn arena() -> Containment {
        Containment::new(Vec2::new(300.0, 300.0), 250.0)
    }

    #[test]
    fn test_empty_population_is_quiet() {
        let mut bodies = Vec::new();
        let report = step(&mut bodies, &arena(), &ArenaConfig::default(), 16.0, 0.0, &mut Fixed(0.5));
        assert!(bodies.is_empty());
        assert_eq!(report, StepReport::default());
    }

    #[test]
    fn test_free_bodies_just_move() {
        let mut bodies = vec![
            Body::new(200.0, 300.0, 2.0, 0.0, 6.0),
            Body::new(400.0, 300.0, 0.0, 3.0, 6.0),
        ];
        let report = step(&mut bodies, &arena(), &ArenaConfig::default(), 16.0, 0.0, &mut Fixed(0.5));
        assert!(report.events.is_empty());
        assert_eq!(bodies[0].pos, Vec2::new(202.0, 300.0));
        assert_eq!(bodies[1].pos, Vec2::new(400.0, 303.0));
    }

    #[test]
    fn test_collision_spawns_and_appends() {
        let mut bodies = vec![
            Body::new(295.0, 300.0, 2.0, 0.0, 6.0),
            Body::new(305.0, 300.0, -2.0, 0.0, 6.0),
        ];
        let report = step(&mut bodies, &arena(), &ArenaConfig::default(), 1500.0, 500.0, &mut Fixed(0.5));
        assert_eq!(bodies.len(), 3);
        assert_eq!(report.spawned, 1);
        assert_eq!(report.events.len(), 1);
        let event = report.events[0];
        assert_eq!((event.first, event.second), (0, 1));
        assert!(event.spawned);
        assert!((event.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cap_reached_mid_frame() {
        // Two separate overlapping pairs, room for only one more body
        let config = ArenaConfig {
            max_bodies: 5,
            ..Default::default()
        };
        let mut bodies = vec![
            Body::new(200.0, 300.0, 0.0, 0.0, 6.0),
            Body::new(205.0, 300.0, 0.0, 0.0, 6.0),
            Body::new(400.0, 300.0, 0.0, 0.0, 6.0),
            Body::new(405.0, 300.0, 0.0, 0.0, 6.0),
        ];
        let report = step(&mut bodies, &arena(), &config, 1000.0, 0.0, &mut Fixed(0.5));
        assert_eq!(report.events.len(), 2);
        assert_eq!(report.spawned, 1);
        assert_eq!(bodies.len(), 5);
        assert!(report.events[0].spawned);
        assert!(!report.events[1].spawned);
    }

    #[test]
    fn test_cluster_spawns_once_per_frame() {
        // Three mutually overlapping bodies at rest: every pair collides, but
        // the first spawn marks bodies 0 and 1, so later pairs cannot spawn.
        let mut bodies = vec![
            Body::new(300.0, 300.0, 0.0, 0.0, 6.0),
            Body::new(304.0, 300.0, 0.0, 0.0, 6.0),
            Body::new(302.0, 303.0, 0.0, 0.0, 6.0),
        ];
        let report = step(&mut bodies, &arena(), &ArenaConfig::default(), 1000.0, 0.0, &mut Fixed(0.5));

        let pairs: Vec<_> = report.events.iter().map(|e| (e.first, e.second)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
        let spawned: Vec<_> = report.events.iter().map(|e| e.spawned).collect();
        assert_eq!(spawned, vec![true, false, false]);
        assert!(report.events.iter().all(|e| e.overlap > 0.0));
        assert_eq!(report.spawned, 1);
        assert_eq!(bodies.len(), 4);
        assert!(bodies[..3].iter().all(|b| b.last_collision == Some(1000.0)));
    }

    #[test]
    fn test_speed_never_exceeds_max_after_step() {
        let config = ArenaConfig::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut bodies: Vec<Body> = (0..20)
            .map(|i| {
                let dir = crate::from_angle(i as f32);
                let pos = arena().center + dir * (i as f32 * 12.0);
                Body::new(pos.x, pos.y, -dir.y * 40.0, dir.x * 40.0, 6.0)
            })
            .collect();
        for frame in 0..200 {
            step(&mut bodies, &arena(), &config, frame as f64 * 16.0, 0.0, &mut rng);
            for body in &bodies {
                assert!(body.speed() <= config.max_speed + 1e-3);
            }
        }
    }
}
