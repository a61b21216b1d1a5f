//! End-to-end arena scenarios.

use circle_bounce::{ArenaConfig, BounceParams};
use circle_bounce::sim::{Arena, Body, SpawnRules, collide_bodies};
use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

const FRAME_MS: f64 = 16.0;

fn center() -> Vec2 {
    Vec2::new(640.0, 360.0)
}

#[test]
fn ten_thousand_frames_stay_contained_and_capped() {
    let config = ArenaConfig::default();
    let cooldown = config.cooldown_ms;
    let cap = config.max_bodies;
    let containment_radius = config.containment_radius;

    for seed in [1u64, 7, 42] {
        let mut arena = Arena::new(config.clone(), center(), seed);
        arena.start(0.0);

        for frame in 1..=10_000u64 {
            let now = frame as f64 * FRAME_MS;
            let before: Vec<Body> = arena.bodies().to_vec();
            let report = arena.frame(now);

            assert!(arena.bodies().len() <= cap, "seed {seed}: population over cap");
            assert_eq!(arena.bodies().len(), before.len() + report.spawned);

            // Nothing ever leaves the containment circle; bodies untouched by
            // pair collisions also sit fully inside the wall.
            let collided: Vec<usize> = report
                .events
                .iter()
                .flat_map(|e| [e.first, e.second])
                .collect();
            for (i, body) in arena.bodies().iter().enumerate() {
                let dist = (body.pos - center()).length();
                assert!(
                    dist <= containment_radius + 1e-2,
                    "seed {seed} frame {frame}: body {i} escaped to {dist}"
                );
                if i < before.len() && !collided.contains(&i) {
                    assert!(
                        dist <= containment_radius - body.radius + 1e-2,
                        "seed {seed} frame {frame}: body {i} at {dist} past the wall"
                    );
                }
            }

            // A spawn needs a pair of existing, cooled-down bodies that overlapped
            for (k, event) in report.events.iter().enumerate() {
                assert!(event.first < event.second);
                assert!(event.overlap > 0.0);
                if !event.spawned {
                    continue;
                }
                let (a, b) = (&before[event.first], &before[event.second]);
                assert!(event.second < before.len(), "spawn from a body created this frame");
                assert!(a.cooled_down(now, cooldown));
                assert!(b.cooled_down(now, cooldown));

                // Where integration put them, when no wall bounce or earlier
                // contact this frame moved them since
                let moved_earlier = report.events[..k].iter().any(|e| {
                    [e.first, e.second].iter().any(|&i| i == event.first || i == event.second)
                });
                let pa = a.pos + a.vel;
                let pb = b.pos + b.vel;
                let inside = |p: Vec2, r: f32| (p - center()).length() <= containment_radius - r;
                if !moved_earlier && inside(pa, a.radius) && inside(pb, b.radius) {
                    assert!(
                        (pb - pa).length() < a.radius + b.radius + 1e-3,
                        "seed {seed} frame {frame}: spawning pair was not touching"
                    );
                }
            }
        }
    }
}

#[test]
fn seeded_run_eventually_fills_the_arena() {
    let mut arena = Arena::new(ArenaConfig::default(), center(), 99);
    arena.start(0.0);
    for frame in 1..=10_000u64 {
        arena.frame(frame as f64 * FRAME_MS);
    }
    // Two fast bodies in a closed circle meet often enough to hit the cap
    assert_eq!(arena.bodies().len(), arena.config().max_bodies);
    assert_eq!(arena.collision_log().len(), arena.config().max_bodies - 2);
}

#[test]
fn repeat_collision_within_cooldown_spawns_once() {
    let config = ArenaConfig {
        cooldown_ms: 200.0,
        ..Default::default()
    };
    let params = config.bounce();
    let rules = SpawnRules::from(&config);
    let mut rng = Pcg32::seed_from_u64(5);

    let mut a = Body::new(300.0, 300.0, 4.0, 0.0, 6.0);
    let mut b = Body::new(308.0, 300.0, -4.0, 0.0, 6.0);
    let first = collide_bodies(&mut a, &mut b, &params, &rules, 1_000.0, 2, &mut rng)
        .expect("overlapping bodies collide");

    // Shove them back together 100ms later
    a.pos = Vec2::new(300.0, 300.0);
    b.pos = Vec2::new(305.0, 300.0);
    let second = collide_bodies(&mut a, &mut b, &params, &rules, 1_100.0, 3, &mut rng)
        .expect("overlapping bodies collide");

    let spawns = [first.spawned.is_some(), second.spawned.is_some()]
        .iter()
        .filter(|s| **s)
        .count();
    assert_eq!(spawns, 1);
    assert!(first.spawned.is_some());

    // Once the cooldown has passed they may spawn again
    a.pos = Vec2::new(300.0, 300.0);
    b.pos = Vec2::new(305.0, 300.0);
    let third = collide_bodies(&mut a, &mut b, &params, &rules, 1_400.0, 3, &mut rng).unwrap();
    assert!(third.spawned.is_some());
}

#[test]
fn full_population_never_spawns() {
    let config = ArenaConfig::default();
    let params: BounceParams = config.bounce();
    let rules = SpawnRules::from(&config);
    let mut rng = Pcg32::seed_from_u64(11);

    for i in 0..100 {
        let mut a = Body::new(300.0, 300.0, 1.0, 0.0, 6.0);
        let mut b = Body::new(300.0 + (i % 11) as f32, 301.0, -1.0, 0.0, 6.0);
        let contact = collide_bodies(&mut a, &mut b, &params, &rules, 5_000.0, config.max_bodies, &mut rng)
            .unwrap();
        assert!(contact.spawned.is_none());
    }
}
