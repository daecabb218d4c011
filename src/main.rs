//! Headless demo driver.
//!
//! Runs a scripted encounter for a few seconds of simulated time and logs
//! the events a presentation layer would render. Pass a JSON config path to
//! override the default tuning.

use std::env;

use tracing::info;

use sidescroll_arena::config::EncounterConfig;
use sidescroll_arena::engine::{self, EncounterState};
use sidescroll_arena::events::EventQueue;
use sidescroll_arena::input::PlayerInput;
use sidescroll_arena::systems::skills::SkillKind;

const FRAME_MS: f32 = 1000.0 / 60.0;
const RUN_TICKS: u32 = 600;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let config = match env::args().nth(1) {
        Some(path) => EncounterConfig::load(path)?,
        None => EncounterConfig::default(),
    };

    let mut events = EventQueue::new();
    let mut state = EncounterState::new(config, &mut events);
    drain(&mut events);

    for tick in 0..RUN_TICKS {
        let input = scripted_input(tick);
        engine::tick(&mut state, FRAME_MS, &input, &mut events);
        drain(&mut events);
    }

    info!(
        clock_ms = state.clock_ms,
        running = state.is_running(),
        "demo finished"
    );
    Ok(())
}

/// A canned input track: walk right, poke with melee, cycle skills.
fn scripted_input(tick: u32) -> PlayerInput {
    PlayerInput {
        right: tick % 120 < 60,
        left: tick % 120 >= 90,
        jump: tick % 180 == 0,
        attack: tick % 45 == 0,
        skill: match tick {
            30 => Some(SkillKind::Fireball),
            200 => Some(SkillKind::Lightning),
            400 => Some(SkillKind::Heal),
            _ => None,
        },
    }
}

fn drain(events: &mut EventQueue) {
    for event in events.drain() {
        info!(?event, "event");
    }
}
