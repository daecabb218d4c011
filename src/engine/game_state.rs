//! Core encounter state - owns the simulation data.

use hecs::{Entity, World};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::EncounterConfig;
use crate::events::EventQueue;
use crate::spawning;

/// Whether the encounter is ticking or waiting for a restart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterStatus {
    Running,
    /// Terminal state: the player died; ticks no-op until restart
    GameOver,
}

/// Core encounter state - owns all simulation data.
///
/// Enemies and projectiles live in the ECS world; systems receive the world
/// and the player handle explicitly rather than reaching through globals.
pub struct EncounterState {
    /// The ECS world
    pub world: World,

    /// Player entity handle
    pub player: Entity,

    /// Simulation clock in milliseconds
    pub clock_ms: f32,

    /// Running or terminal
    pub status: EncounterStatus,

    /// Time since the last periodic reinforcement spawn
    pub spawn_timer_ms: f32,

    /// Seeded RNG for respawn positions
    pub rng: StdRng,

    /// Tuning this encounter was created with (reused on restart)
    pub config: EncounterConfig,
}

impl EncounterState {
    /// Create a fresh encounter: player plus the initial enemy roster.
    pub fn new(config: EncounterConfig, events: &mut EventQueue) -> Self {
        let mut world = World::new();
        let (px, py) = config.player_spawn;
        let player = spawning::spawn_player(&mut world, px, py);
        for &x in &config.initial_spawn_xs {
            spawning::defs::SLIME.spawn(&mut world, x, events);
        }

        let rng = StdRng::seed_from_u64(config.seed);

        Self {
            world,
            player,
            clock_ms: 0.0,
            status: EncounterStatus::Running,
            spawn_timer_ms: 0.0,
            rng,
            config,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == EncounterStatus::Running
    }
}
