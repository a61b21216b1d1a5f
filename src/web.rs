//! Browser bindings
//!
//! A JS render loop owns the canvas and the buttons. Each animation frame it
//! calls `frame()` and then draws whatever `positions()` returns.

use glam::Vec2;
use wasm_bindgen::prelude::*;

use crate::config::ArenaConfig;
use crate::sim::Arena;

/// Monotonic clock in milliseconds
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Circle Bounce (web) starting...");
}

/// Arena handle for the JS side
#[wasm_bindgen]
pub struct WebArena {
    arena: Arena,
}

#[wasm_bindgen]
impl WebArena {
    /// Arena centered in a `width` x `height` canvas
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, seed: u64) -> WebArena {
        let center = Vec2::new(width / 2.0, height / 2.0);
        WebArena {
            arena: Arena::new(ArenaConfig::load(), center, seed),
        }
    }

    pub fn start(&mut self) {
        self.arena.start(now_ms());
    }

    pub fn reset(&mut self) {
        self.arena.reset();
    }

    /// Advance one frame; returns how many bodies were spawned
    pub fn frame(&mut self) -> usize {
        self.arena.frame(now_ms()).spawned
    }

    /// Flat `[x, y, radius, ...]` for every body
    pub fn positions(&self) -> js_sys::Float32Array {
        let flat: Vec<f32> = self
            .arena
            .bodies()
            .iter()
            .flat_map(|b| [b.pos.x, b.pos.y, b.radius])
            .collect();
        js_sys::Float32Array::from(flat.as_slice())
    }

    /// Containment circle as `[cx, cy, radius]`
    pub fn boundary(&self) -> js_sys::Float32Array {
        let c = self.arena.containment();
        js_sys::Float32Array::from([c.center.x, c.center.y, c.radius].as_slice())
    }

    /// Elapsed seconds of every spawning collision this run
    pub fn collision_log(&self) -> js_sys::Float64Array {
        js_sys::Float64Array::from(self.arena.collision_log())
    }

    /// Seconds since start, or 0 while idle
    pub fn elapsed(&self) -> f64 {
        self.arena.elapsed_secs(now_ms())
    }

    pub fn running(&self) -> bool {
        self.arena.phase() == crate::sim::Phase::Running
    }
}
