//! Circle Bounce entry point
//!
//! Natively this runs a headless arena on a simulated 60 Hz clock and logs
//! every spawning collision. The browser build is driven from JS through
//! `circle_bounce::web`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use circle_bounce::ArenaConfig;
    use circle_bounce::sim::Arena;
    use circle_bounce::timer::{collision_lines, format_clock};
    use glam::Vec2;

    /// Simulated frame length (ms)
    const FRAME_MS: f64 = 1000.0 / 60.0;

    env_logger::init();
    log::info!("Circle Bounce (native) starting...");

    let mut args = std::env::args().skip(1);
    let frames: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(3600);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(1);

    let config = ArenaConfig::load();
    let center = Vec2::splat(config.containment_radius + 50.0);
    let mut arena = Arena::new(config, center, seed);

    let mut wall_bounces = 0usize;
    arena.start(0.0);
    for frame in 1..=frames {
        let now = frame as f64 * FRAME_MS;
        let report = arena.frame(now);
        wall_bounces += report.wall_bounces;
        for event in report.spawn_events() {
            log::info!(
                "collision at {} between #{} and #{} -> {} bodies",
                format_clock(event.elapsed_secs),
                event.first,
                event.second,
                arena.bodies().len()
            );
        }
    }

    let elapsed = arena.elapsed_secs(frames as f64 * FRAME_MS);
    println!("Time: {}", format_clock(elapsed));
    println!("Bodies: {}", arena.bodies().len());
    println!("Wall bounces: {}", wall_bounces);
    println!("Collisions:");
    if arena.collision_log().is_empty() {
        println!("  No collisions yet");
    }
    for line in collision_lines(arena.collision_log()) {
        println!("  {}", line);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is circle_bounce::web::wasm_main, this is just to satisfy the compiler
}
