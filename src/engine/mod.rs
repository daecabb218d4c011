//! Encounter engine - owns the simulation state and the per-tick protocol.

pub mod encounter;
pub mod game_state;

pub use encounter::{
    handle_player_enemy_contact, handle_projectile_enemy_contact, restart, tick,
};
pub use game_state::{EncounterState, EncounterStatus};
