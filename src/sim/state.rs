//! Arena state and run controls
//!
//! Owns the body population between frames, the run clock, the collision log
//! shown by the timer panel, and the seeded RNG that drives all jitter.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::boundary::Containment;
use super::step::{StepReport, step};
use crate::config::ArenaConfig;
use crate::consts::{SEED_OFFSETS, SEED_VELOCITIES};

/// Whether the simulation is advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Seeded and waiting for start; frames do not move anything
    #[default]
    Idle,
    /// Advancing once per frame
    Running,
}

/// Seed a run's RNG is rebuilt from, so a reset replays the same jitter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// A circular arena full of bouncing bodies
#[derive(Debug, Clone)]
pub struct Arena {
    config: ArenaConfig,
    containment: Containment,
    rng_state: RngState,
    rng: Pcg32,
    phase: Phase,
    /// Timestamp (ms) the current run started
    started_at: Option<f64>,
    bodies: Vec<Body>,
    /// Elapsed seconds of every collision that spawned a body this run
    collision_log: Vec<f64>,
    frames: u64,
}

impl Arena {
    /// Create an idle arena centered on `center`, seeded with the two starting bodies
    pub fn new(config: ArenaConfig, center: Vec2, seed: u64) -> Self {
        let rng_state = RngState::new(seed);
        let mut arena = Self {
            containment: Containment::new(center, config.containment_radius),
            rng: rng_state.to_rng(),
            rng_state,
            config,
            phase: Phase::Idle,
            started_at: None,
            bodies: Vec::new(),
            collision_log: Vec::new(),
            frames: 0,
        };
        arena.seed_bodies();
        arena
    }

    /// Replace the population with the two starting bodies
    fn seed_bodies(&mut self) {
        let center = self.containment.center;
        let radius = self.config.body_radius;
        self.bodies = SEED_OFFSETS
            .iter()
            .zip(SEED_VELOCITIES.iter())
            .map(|(&(dx, dy), &(vx, vy))| Body::new(center.x + dx, center.y + dy, vx, vy, radius))
            .collect();
    }

    /// Begin advancing; ignored if already running
    pub fn start(&mut self, now: f64) {
        if self.phase == Phase::Running {
            return;
        }
        log::info!("Arena started with {} bodies", self.bodies.len());
        self.started_at = Some(now);
        self.collision_log.clear();
        self.phase = Phase::Running;
    }

    /// Stop, clear the log, re-seed the starting bodies and rewind the RNG
    pub fn reset(&mut self) {
        log::info!(
            "Arena reset after {} frames, {} bodies, {} logged collisions",
            self.frames,
            self.bodies.len(),
            self.collision_log.len()
        );
        self.phase = Phase::Idle;
        self.started_at = None;
        self.collision_log.clear();
        self.frames = 0;
        self.rng = self.rng_state.to_rng();
        self.seed_bodies();
    }

    /// Run one frame at timestamp `now` (ms); a no-op while idle
    pub fn frame(&mut self, now: f64) -> StepReport {
        let Some(started_at) = self.started_at.filter(|_| self.phase == Phase::Running) else {
            return StepReport::default();
        };

        let report = step(
            &mut self.bodies,
            &self.containment,
            &self.config,
            now,
            started_at,
            &mut self.rng,
        );
        self.frames += 1;
        self.collision_log
            .extend(report.spawn_events().map(|e| e.elapsed_secs));
        report
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Elapsed seconds of each collision that spawned a body this run
    pub fn collision_log(&self) -> &[f64] {
        &self.collision_log
    }

    /// Seconds since start, or 0 while idle
    pub fn elapsed_secs(&self, now: f64) -> f64 {
        match (self.phase, self.started_at) {
            (Phase::Running, Some(start)) => ((now - start) / 1000.0).max(0.0),
            _ => 0.0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn containment(&self) -> &Containment {
        &self.containment
    }

    pub fn center(&self) -> Vec2 {
        self.containment.center
    }

    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }

    /// Frames advanced since the last start/reset
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
