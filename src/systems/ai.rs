//! Enemy AI state machines.
//!
//! Each live enemy evaluates its FSM once per tick from the distance to the
//! player: Attack inside attack range (highest priority), Chase inside
//! detection range, otherwise Patrol/Idle around the spawn point. State
//! actions run after the transition; Chase re-checks for a same-tick switch
//! into Attack, and Attack falls back to Chase the tick the player escapes.

use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{AiState, EnemyAi, Facing, Health, Invulnerability, Velocity};
use crate::constants::*;
use crate::events::{EventQueue, GameEvent};
use crate::queries;
use crate::systems::player;

/// Tick the FSM of every live enemy.
///
/// A dead enemy performs no AI tick. A missing player degrades to the
/// no-target branch (Idle/Patrol) instead of faulting.
pub fn tick_enemies(world: &mut World, player: Entity, now_ms: f32, events: &mut EventQueue) {
    let player_pos = queries::entity_position(world, player);

    let enemies: Vec<Entity> = world
        .query::<(&EnemyAi, &Health)>()
        .iter()
        .filter(|(_, (_, health))| !health.is_dead())
        .map(|(id, _)| id)
        .collect();

    for enemy in enemies {
        tick_enemy(world, enemy, player, player_pos, now_ms, events);
    }
}

/// Evaluate the transition function for one tick.
///
/// Returns the next state and the (possibly flipped) patrol direction.
/// Attack overrides everything inside attack range; outside detection range
/// the enemy turns around once it strays past its patrol distance and idles
/// when close to its origin.
fn next_state(distance_to_player: Option<f32>, x: f32, ai: &EnemyAi) -> (AiState, f32) {
    match distance_to_player {
        Some(d) if d <= ai.attack_range => (AiState::Attack, ai.patrol_direction),
        Some(d) if d <= ai.detection_range => (AiState::Chase, ai.patrol_direction),
        _ => {
            let from_origin = (x - ai.patrol_origin_x).abs();
            let direction = if from_origin > ai.patrol_distance {
                -ai.patrol_direction
            } else {
                ai.patrol_direction
            };
            let state = if from_origin > PATROL_IDLE_THRESHOLD {
                AiState::Patrol
            } else {
                AiState::Idle
            };
            (state, direction)
        }
    }
}

fn tick_enemy(
    world: &mut World,
    enemy: Entity,
    player: Entity,
    player_pos: Option<Vec2>,
    now_ms: f32,
    events: &mut EventQueue,
) {
    let Some(pos) = queries::entity_position(world, enemy) else {
        return;
    };
    let Ok(ai_snapshot) = world.get::<&EnemyAi>(enemy).map(|ai| *ai) else {
        return;
    };

    let distance = player_pos.map(|p| pos.distance(p));
    let (mut state, patrol_direction) = next_state(distance, pos.x, &ai_snapshot);

    let mut velocity_x = 0.0;
    let mut facing = None;
    let mut last_attack_ms = ai_snapshot.last_attack_ms;

    match state {
        AiState::Idle => {}
        AiState::Patrol => {
            velocity_x = ai_snapshot.move_speed * patrol_direction;
            facing = Some(Facing::from_sign(patrol_direction));
        }
        AiState::Chase => {
            // player_pos is Some here, Chase is only reachable with a target
            if let (Some(target), Some(d)) = (player_pos, distance) {
                let direction = if target.x > pos.x { 1.0 } else { -1.0 };
                velocity_x = ai_snapshot.move_speed * direction;
                facing = Some(Facing::from_sign(direction));

                // Close enough already: switch to Attack within the same tick
                if d <= ai_snapshot.attack_range {
                    state = AiState::Attack;
                    velocity_x = 0.0;
                }
            }
        }
        AiState::Attack => {}
    }

    if state == AiState::Attack {
        let ready = last_attack_ms
            .map(|t| now_ms - t >= ai_snapshot.attack_cooldown_ms)
            .unwrap_or(true);
        if ready {
            last_attack_ms = Some(now_ms);
            perform_attack(world, enemy, player, pos, &ai_snapshot, events);
        }

        // Player slipped out of reach: resume the chase within the same tick
        if let Some(d) = distance {
            if d > ai_snapshot.attack_range {
                state = AiState::Chase;
            }
        }
    }

    if let Ok(mut ai) = world.get::<&mut EnemyAi>(enemy) {
        ai.state = state;
        ai.patrol_direction = patrol_direction;
        ai.last_attack_ms = last_attack_ms;
    }
    if let Ok(mut vel) = world.get::<&mut Velocity>(enemy) {
        vel.x = velocity_x;
    }
    if let Some(facing) = facing {
        if let Ok(mut f) = world.get::<&mut Facing>(enemy) {
            *f = facing;
        }
    }
}

/// Strike the player: damage and knockback unless they are invulnerable.
fn perform_attack(
    world: &mut World,
    enemy: Entity,
    player_entity: Entity,
    enemy_pos: Vec2,
    ai: &EnemyAi,
    events: &mut EventQueue,
) {
    let invulnerable = world
        .get::<&Invulnerability>(player_entity)
        .map(|i| i.is_active())
        .unwrap_or(false);
    if invulnerable {
        return;
    }

    let Some(target_pos) = queries::entity_position(world, player_entity) else {
        return;
    };

    player::damage_player(world, player_entity, ai.attack_damage, events);

    // Knock the player away from the enemy
    let direction = if target_pos.x < enemy_pos.x { -1.0 } else { 1.0 };
    if let Ok(mut vel) = world.get::<&mut Velocity>(player_entity) {
        vel.x = direction * ENEMY_ATTACK_KNOCKBACK_SPEED;
    }

    events.push(GameEvent::AttackHit {
        attacker: enemy,
        target: player_entity,
        target_pos: (target_pos.x, target_pos.y),
        damage: ai.attack_damage,
    });
}
