//! Game event system for decoupled communication between systems.
//!
//! Systems emit events, the host drains them once per frame. This is the
//! presentation boundary: floating damage numbers, hit/death effects, HUD
//! updates, and audio all react to drained events without the core knowing
//! about any of them.

use hecs::Entity;

use crate::systems::skills::SkillKind;

/// Game events that systems can emit and the host can subscribe to
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A melee swing or enemy attack connected
    AttackHit {
        attacker: Entity,
        target: Entity,
        target_pos: (f32, f32),
        damage: i32,
    },
    /// A projectile connected with a target
    ProjectileHit {
        projectile: Entity,
        target: Entity,
        position: (f32, f32),
        damage: i32,
    },
    /// An entity took damage (floating damage number hook)
    DamageTaken {
        entity: Entity,
        amount: i32,
        position: (f32, f32),
    },
    /// An entity died and was removed from play
    EntityDied {
        entity: Entity,
        position: (f32, f32),
    },
    /// A new enemy entered the encounter
    EnemySpawned {
        entity: Entity,
        position: (f32, f32),
    },
    /// The player cast a skill
    SkillCast {
        kind: SkillKind,
    },
    /// The player was healed
    Healed {
        amount: i32,
    },
    /// Player leveled up
    LevelUp {
        new_level: u32,
    },
    /// Player health reached zero; the encounter is suspended until restart
    GameOver,
}

/// Simple event queue - events are pushed during update, processed at end of frame
#[derive(Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
