//! Arena configuration
//!
//! Every tunable of the simulation lives here. Defaults reproduce the
//! reference constants in [`crate::consts`]. Read from JSON: a file named by
//! `CIRCLE_BOUNCE_CONFIG` natively, LocalStorage in the browser.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tunable arena configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    // === Geometry ===
    /// Radius of the containment circle
    pub containment_radius: f32,
    /// Radius of seeded and spawned bodies
    pub body_radius: f32,
    /// Reserved for a future downward pull; the integrator ignores it
    pub gravity: f32,

    // === Rebound tuning ===
    pub bounce_speed: f32,
    /// Fractional jitter on rebound speed (0.25 = ±25%)
    pub bounce_jitter: f32,
    pub tangential_impulse: f32,
    /// Per-bounce velocity multiplier, in (0, 1]
    pub drag: f32,
    pub max_speed: f32,

    // === Spawning ===
    /// Both bodies of a pair must be collision-free this long to spawn
    pub cooldown_ms: f64,
    /// Population cap
    pub max_bodies: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            containment_radius: CIRCLE_RADIUS,
            body_radius: BALL_RADIUS,
            gravity: GRAVITY,

            bounce_speed: BOUNCE_SPEED,
            bounce_jitter: BOUNCE_JITTER,
            tangential_impulse: TANGENTIAL_IMPULSE,
            drag: DRAG,
            max_speed: MAX_SPEED,

            cooldown_ms: COOLDOWN_MS,
            max_bodies: MAX_BALLS,
        }
    }
}

/// Rebound tuning shared by the boundary reflector and the pair resolver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceParams {
    pub speed: f32,
    pub jitter: f32,
    pub tangential_impulse: f32,
    pub max_speed: f32,
    pub drag: f32,
}

impl Default for BounceParams {
    fn default() -> Self {
        ArenaConfig::default().bounce()
    }
}

impl ArenaConfig {
    /// Rebound tuning view of this config
    pub fn bounce(&self) -> BounceParams {
        BounceParams {
            speed: self.bounce_speed,
            jitter: self.bounce_jitter,
            tangential_impulse: self.tangential_impulse,
            max_speed: self.max_speed,
            drag: self.drag,
        }
    }

    /// Reject configurations the physics cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.containment_radius > 0.0) {
            return Err(ConfigError::out_of_range(
                "containment_radius",
                self.containment_radius,
                "must be positive",
            ));
        }
        if !(self.body_radius > 0.0) {
            return Err(ConfigError::out_of_range(
                "body_radius",
                self.body_radius,
                "must be positive",
            ));
        }
        if self.body_radius >= self.containment_radius {
            return Err(ConfigError::out_of_range(
                "body_radius",
                self.body_radius,
                "must be smaller than containment_radius",
            ));
        }
        if !(self.max_speed > 0.0) {
            return Err(ConfigError::out_of_range(
                "max_speed",
                self.max_speed,
                "must be positive",
            ));
        }
        if !(self.bounce_speed >= 0.0) {
            return Err(ConfigError::out_of_range(
                "bounce_speed",
                self.bounce_speed,
                "must not be negative",
            ));
        }
        if !(0.0..=1.0).contains(&self.bounce_jitter) {
            return Err(ConfigError::out_of_range(
                "bounce_jitter",
                self.bounce_jitter,
                "must be within [0, 1]",
            ));
        }
        if !(self.tangential_impulse >= 0.0) {
            return Err(ConfigError::out_of_range(
                "tangential_impulse",
                self.tangential_impulse,
                "must not be negative",
            ));
        }
        if !(self.drag > 0.0 && self.drag <= 1.0) {
            return Err(ConfigError::out_of_range(
                "drag",
                self.drag,
                "must be within (0, 1]",
            ));
        }
        if !(self.cooldown_ms >= 0.0) {
            return Err(ConfigError::out_of_range(
                "cooldown_ms",
                self.cooldown_ms,
                "must not be negative",
            ));
        }
        if self.max_bodies == 0 {
            return Err(ConfigError::out_of_range(
                "max_bodies",
                self.max_bodies as f64,
                "must allow at least one body",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON config (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Environment variable naming a native config file
    pub const CONFIG_ENV: &'static str = "CIRCLE_BOUNCE_CONFIG";

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "circle_bounce_config";

    /// Read and validate a JSON config file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load the config named by `CIRCLE_BOUNCE_CONFIG`, or defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::load_or_default(std::env::var(Self::CONFIG_ENV).ok().as_deref())
    }

    /// Config from `path` if given and valid, defaults otherwise
    pub fn load_or_default(path: Option<&str>) -> Self {
        let Some(path) = path else {
            log::info!("Using default arena config");
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(config) => {
                log::info!("Loaded arena config from {}", path);
                config
            }
            Err(err) => {
                log::warn!("{}; falling back to default arena config", err);
                Self::default()
            }
        }
    }

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded arena config from LocalStorage");
                        return config;
                    }
                    Err(err) => log::warn!("Ignoring stored arena config: {}", err),
                }
            }
        }

        log::info!("Using default arena config");
        Self::default()
    }
}
