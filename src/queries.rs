//! Common entity query helpers.
//!
//! This module provides reusable query functions to reduce code repetition
//! across systems. These are pure read-only queries that don't modify state.

use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{Enemy, Health, Position};

/// Get an entity's position as a vector, if it still exists.
pub fn entity_position(world: &World, entity: Entity) -> Option<Vec2> {
    world.get::<&Position>(entity).ok().map(|p| p.as_vec2())
}

/// Check if an entity is dead or already removed (health <= 0 or despawned).
pub fn is_entity_dead(world: &World, entity: Entity) -> bool {
    world
        .get::<&Health>(entity)
        .map(|h| h.is_dead())
        .unwrap_or(true)
}

/// Collect all live enemies with their positions.
pub fn live_enemies(world: &World) -> Vec<(Entity, Vec2)> {
    world
        .query::<(&Position, &Health, &Enemy)>()
        .iter()
        .filter(|(_, (_, health, _))| !health.is_dead())
        .map(|(id, (pos, _, _))| (id, pos.as_vec2()))
        .collect()
}

/// Count live enemies.
pub fn live_enemy_count(world: &World) -> usize {
    world
        .query::<(&Health, &Enemy)>()
        .iter()
        .filter(|(_, (health, _))| !health.is_dead())
        .count()
}

/// Find the live enemy nearest to a point.
pub fn nearest_enemy(world: &World, from: Vec2) -> Option<Entity> {
    let mut nearest = None;
    let mut min_dist = f32::INFINITY;
    for (id, pos) in live_enemies(world) {
        let dist = pos.distance(from);
        if dist < min_dist {
            min_dist = dist;
            nearest = Some(id);
        }
    }
    nearest
}
