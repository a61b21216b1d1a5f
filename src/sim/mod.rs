//! Physics core
//!
//! Everything that moves bodies lives here. This module is pure:
//! - No rendering or platform dependencies
//! - No global RNG (jitter comes from an injected source)
//! - Population only grows, up to the configured cap

pub mod body;
pub mod boundary;
pub mod collision;
pub mod jitter;
pub mod state;
pub mod step;

pub use body::{Body, clamp_speed};
pub use boundary::{Containment, reflect_boundary};
pub use collision::{Contact, SpawnRules, collide_bodies, pair_mut};
pub use jitter::JitterSource;
pub use state::{Arena, Phase, RngState};
pub use step::{CollisionEvent, StepReport, step};
