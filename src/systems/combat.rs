//! Combat resolution: damage application and death cleanup.

use hecs::{Entity, World};
use tracing::debug;

use crate::components::{Enemy, EnemyAi, Health, Position};
use crate::events::{EventQueue, GameEvent};
use crate::systems::experience;

/// Subtract damage from an entity's health, clamped at zero.
///
/// Acting on a missing entity is a silent no-op.
pub fn apply_damage(world: &mut World, entity: Entity, amount: i32) {
    if let Ok(mut health) = world.get::<&mut Health>(entity) {
        health.current = (health.current - amount).max(0);
    }
}

/// Despawn every enemy whose health reached zero, awarding XP per kill.
///
/// Dead enemies are collected first and removed after, so the query is never
/// mutated mid-iteration. Each kill grants its own XP award (one `grant_exp`
/// call per enemy, matching the one-level-per-call policy).
pub fn remove_dead_enemies(world: &mut World, player: Entity, events: &mut EventQueue) {
    let dead: Vec<(Entity, (f32, f32), u32)> = world
        .query::<(&Position, &Health, &EnemyAi, &Enemy)>()
        .iter()
        .filter(|(_, (_, health, _, _))| health.is_dead())
        .map(|(id, (pos, _, ai, _))| (id, (pos.x, pos.y), ai.exp_reward))
        .collect();

    for (entity, position, exp_reward) in dead {
        debug!(?entity, "enemy died");
        events.push(GameEvent::EntityDied { entity, position });
        let _ = world.despawn(entity);
        experience::grant_exp(world, player, exp_reward, events);
    }
}
