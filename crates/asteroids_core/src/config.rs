//! Game configuration
//!
//! Gameplay constants are fixed (see [`crate::constants`]); this only covers how a
//! session is run: engine pacing, the RNG seed and two behavior switches.

use arcade_engine::config::{Config, EngineConfig};
use serde::{Deserialize, Serialize};

use crate::enemy::EnemyMovement;
use crate::entity::HeadingPolicy;

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Engine loop settings
    pub engine: EngineConfig,

    /// Simulation settings
    pub session: SessionConfig,
}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seed for asteroid placement and enemy wandering
    pub seed: u64,

    /// Heading normalization for asteroids
    pub asteroid_heading: HeadingPolicy,

    /// What the enemy's velocity follows
    pub enemy_movement: EnemyMovement,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 2021,
            asteroid_heading: HeadingPolicy::ResetAboveFullTurn,
            enemy_movement: EnemyMovement::Wander,
        }
    }
}

impl SessionConfig {
    /// Use a specific RNG seed
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Config for GameConfig {}
