//! Headless combat core for a 2D side-scrolling action game.
//!
//! The crate simulates a player, state-machine enemies, and projectile
//! skills on a fixed frame tick. It owns no window, no renderer, and no
//! input devices: a host engine calls [`engine::tick`] once per frame with
//! elapsed time and a [`input::PlayerInput`] snapshot, then drains the
//! [`events::EventQueue`] to drive damage numbers, hit effects, and HUD.
//!
//! ```no_run
//! use sidescroll_arena::config::EncounterConfig;
//! use sidescroll_arena::engine::{self, EncounterState};
//! use sidescroll_arena::events::EventQueue;
//! use sidescroll_arena::input::PlayerInput;
//!
//! let mut events = EventQueue::new();
//! let mut state = EncounterState::new(EncounterConfig::default(), &mut events);
//! engine::tick(&mut state, 16.0, &PlayerInput::none(), &mut events);
//! for event in events.drain() {
//!     println!("{event:?}");
//! }
//! ```

pub mod components;
pub mod config;
pub mod constants;
pub mod engine;
pub mod events;
pub mod input;
pub mod physics;
pub mod queries;
pub mod spawning;
pub mod systems;

pub use engine::{EncounterState, EncounterStatus};
pub use events::{EventQueue, GameEvent};
pub use input::PlayerInput;
