//! Data-driven entity spawning.
//!
//! Defines enemy types and their properties, allowing easy addition of new
//! enemies without modifying spawning code.

use hecs::{Entity, World};
use rand::Rng;
use tracing::debug;

use crate::components::{
    Body, Enemy, EnemyAi, Facing, Health, Invulnerability, MeleeAttack, Position, SkillCooldowns,
    Velocity,
};
use crate::components::{Experience, Mana, Player};
use crate::constants::*;
use crate::events::{EventQueue, GameEvent};

/// Definition of an enemy type - all the data needed to spawn one
#[derive(Clone)]
pub struct EnemyDef {
    /// Display name (for logs and future UI)
    pub name: &'static str,
    /// Maximum health
    pub health: i32,
    /// Attack damage
    pub damage: i32,
    /// Patrol and chase speed
    pub move_speed: f32,
    /// Distance at which the enemy attacks
    pub attack_range: f32,
    /// Distance at which the enemy starts chasing
    pub detection_range: f32,
    /// Maximum patrol excursion from the spawn x
    pub patrol_distance: f32,
    /// Milliseconds between attacks
    pub attack_cooldown_ms: f32,
    /// XP awarded on kill
    pub exp_reward: u32,
}

impl EnemyDef {
    /// Spawn this enemy type standing on the ground at the given x
    pub fn spawn(&self, world: &mut World, x: f32, events: &mut EventQueue) -> Entity {
        let y = GROUND_Y + ENEMY_BODY_SIZE / 2.0;
        let entity = world.spawn((
            Position::new(x, y),
            Velocity::zero(),
            Body::actor(ENEMY_BODY_SIZE, ENEMY_BODY_SIZE),
            Facing::Left,
            Health::new(self.health),
            EnemyAi::new(x, self),
            Enemy,
        ));
        debug!(name = self.name, x, "enemy spawned");
        events.push(GameEvent::EnemySpawned {
            entity,
            position: (x, y),
        });
        entity
    }
}

/// Predefined enemy types
pub mod defs {
    use super::*;

    pub const SLIME: EnemyDef = EnemyDef {
        name: "Slime",
        health: SLIME_HEALTH,
        damage: SLIME_DAMAGE,
        move_speed: SLIME_SPEED,
        attack_range: SLIME_ATTACK_RANGE,
        detection_range: SLIME_DETECTION_RANGE,
        patrol_distance: SLIME_PATROL_DISTANCE,
        attack_cooldown_ms: SLIME_ATTACK_COOLDOWN_MS,
        exp_reward: SLIME_EXP_REWARD,
    };
}

/// Spawn the player at the given position with starting stats
pub fn spawn_player(world: &mut World, x: f32, y: f32) -> Entity {
    world.spawn((
        Position::new(x, y),
        Velocity::zero(),
        Body::actor(PLAYER_BODY_WIDTH, PLAYER_BODY_HEIGHT),
        Facing::Right,
        Health::new(PLAYER_STARTING_HEALTH),
        Mana::new(PLAYER_STARTING_MANA),
        Experience::new(),
        Invulnerability::default(),
        MeleeAttack::new(),
        SkillCooldowns::new(),
        Player,
    ))
}

/// Spawn the fixed initial enemy roster
pub fn spawn_initial_enemies(world: &mut World, events: &mut EventQueue) {
    for x in INITIAL_SPAWN_XS {
        defs::SLIME.spawn(world, x, events);
    }
}

/// Spawn a replacement enemy at a random horizontal position
pub fn spawn_replacement_enemy(
    world: &mut World,
    rng: &mut impl Rng,
    events: &mut EventQueue,
) -> Entity {
    let x = rng.gen_range(RESPAWN_X_MIN..=RESPAWN_X_MAX);
    defs::SLIME.spawn(world, x, events)
}
