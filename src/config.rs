//! Encounter tuning loadable from JSON.
//!
//! Defaults mirror the constants modules; a host can override the handful of
//! knobs that vary between arenas (seed, spawn layout, reinforcement pacing)
//! without recompiling.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Tunable encounter parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EncounterConfig {
    /// Seed for the encounter's RNG (respawn positions)
    pub seed: u64,
    /// Player spawn position
    pub player_spawn: (f32, f32),
    /// Fixed x positions of the initial enemy spawns
    pub initial_spawn_xs: Vec<f32>,
    /// Milliseconds between periodic reinforcement spawns
    pub spawn_interval_ms: f32,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            player_spawn: (100.0, GROUND_Y + PLAYER_BODY_HEIGHT / 2.0),
            initial_spawn_xs: INITIAL_SPAWN_XS.to_vec(),
            spawn_interval_ms: SPAWN_INTERVAL_MS,
        }
    }
}

/// Errors from loading an encounter config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl EncounterConfig {
    /// Load a config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
