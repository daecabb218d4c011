//! Game constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.
//! Constants are split into submodules by domain for easier navigation.

mod combat;
mod enemies;
mod player;
mod skills;
mod world;

// Re-export all constants at the module level
pub use combat::*;
pub use enemies::*;
pub use player::*;
pub use skills::*;
pub use world::*;
