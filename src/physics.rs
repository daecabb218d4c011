//! Kinematic body integration and contact detection.
//!
//! This is the engine-collaborator half of the simulation: it integrates
//! velocities, applies gravity to actor bodies, resolves the ground plane and
//! world-bounds collisions, and answers the grounded query the player
//! controller needs for jumps. Contact detection here feeds the pairwise
//! contact handlers the encounter loop exposes; a host engine with its own
//! collision callbacks can call those handlers directly instead.

use hecs::{Entity, World};

use crate::components::{
    Body, Enemy, Faction, Health, Position, Projectile, ProjectileKind, Velocity,
};
use crate::constants::*;

/// Integrate all kinematic bodies by `dt_ms` milliseconds.
///
/// Actor bodies get gravity, ground-plane resolution, and world-bounds
/// clamping; projectile bodies fly free (their bounds exit is handled by the
/// projectile system, which retires rather than clamps).
pub fn tick_bodies(world: &mut World, dt_ms: f32) {
    let dt = dt_ms / 1000.0;

    for (_, (pos, vel, body)) in world.query_mut::<(&mut Position, &mut Velocity, &mut Body)>() {
        if body.gravity && !body.grounded {
            vel.y += GRAVITY * dt;
        }

        pos.x += vel.x * dt;
        pos.y += vel.y * dt;

        if body.clamp_to_world {
            let floor = GROUND_Y + body.half_height;
            if pos.y <= floor {
                pos.y = floor;
                if vel.y < 0.0 {
                    vel.y = 0.0;
                }
                body.grounded = true;
            } else {
                body.grounded = false;
            }

            pos.x = pos.x.clamp(body.half_width, WORLD_WIDTH - body.half_width);
        }
    }
}

/// Whether an entity's body currently rests on a supporting surface.
pub fn is_grounded(world: &World, entity: Entity) -> bool {
    world
        .get::<&Body>(entity)
        .map(|b| b.grounded)
        .unwrap_or(false)
}

/// Axis-aligned overlap test between two positioned bodies.
fn bodies_overlap(a_pos: &Position, a_body: &Body, b_pos: &Position, b_body: &Body) -> bool {
    (a_pos.x - b_pos.x).abs() < a_body.half_width + b_body.half_width
        && (a_pos.y - b_pos.y).abs() < a_body.half_height + b_body.half_height
}

/// Find live enemies currently overlapping the player's body.
pub fn detect_player_enemy_contacts(world: &World, player: Entity) -> Vec<Entity> {
    let Ok(player_pos) = world.get::<&Position>(player) else {
        return Vec::new();
    };
    let Ok(player_body) = world.get::<&Body>(player) else {
        return Vec::new();
    };

    world
        .query::<(&Position, &Body, &Health, &Enemy)>()
        .iter()
        .filter(|(_, (pos, body, _, _))| bodies_overlap(&player_pos, &player_body, pos, body))
        .map(|(id, _)| id)
        .collect()
}

/// Find (ballistic projectile, enemy) contact pairs.
///
/// Homing projectiles are excluded: they resolve through the encounter
/// loop's proximity sweep, not through body contact.
pub fn detect_ballistic_enemy_contacts(world: &World) -> Vec<(Entity, Entity)> {
    let enemies: Vec<(Entity, Position)> = world
        .query::<(&Position, &Health, &Enemy)>()
        .iter()
        .filter(|(_, (_, health, _))| !health.is_dead())
        .map(|(id, (pos, _, _))| (id, *pos))
        .collect();

    let mut contacts = Vec::new();
    for (proj_id, (pos, projectile)) in world.query::<(&Position, &Projectile)>().iter() {
        if !projectile.alive
            || projectile.kind != ProjectileKind::Ballistic
            || projectile.faction != Faction::Player
        {
            continue;
        }
        for (enemy_id, enemy_pos) in &enemies {
            if pos.distance_to(enemy_pos) < BALLISTIC_HIT_RADIUS {
                contacts.push((proj_id, *enemy_id));
                break;
            }
        }
    }
    contacts
}
