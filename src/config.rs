//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority
//! (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`LOCKSTEP_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimConfig {
    /// Stepping configuration
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Demo scene configuration
    #[serde(default)]
    pub scene: SceneConfig,
}

impl SimConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`LOCKSTEP_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // LOCKSTEP_SIMULATION__STEPS=600 -> simulation.steps = 600
        figment = figment.merge(Env::prefixed("LOCKSTEP_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Stepping configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of steps to run
    pub steps: u32,
    /// Timestep per step in seconds (converted to fixed point once, at the
    /// simulation boundary)
    pub delta: f64,
    /// Substeps per step
    pub substeps: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steps: 240,
            delta: 1.0 / 60.0,
            substeps: 1,
        }
    }
}

/// Demo scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Number of spheres dropped onto the floor
    pub sphere_count: u32,
    /// Radius of each dropped sphere
    pub sphere_radius: f64,
    /// Horizontal spacing between spawn points
    pub sphere_spacing: f64,
    /// Spawn height above the floor
    pub spawn_height: f64,
    /// Downward acceleration applied to every sphere
    pub gravity: f64,
    /// Half-extents of the static floor box centered at the origin
    pub floor_half_extents: [f64; 3],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            sphere_count: 8,
            sphere_radius: 0.5,
            sphere_spacing: 1.25,
            spawn_height: 6.0,
            gravity: -20.0,
            floor_half_extents: [20.0, 1.0, 20.0],
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
