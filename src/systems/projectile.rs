//! Projectile motion, lifetime, and the homing proximity sweep.
//!
//! Ballistic bolts keep their spawn velocity. Homing missiles climb until
//! they reach the altitude tier fixed at cast time, then steer straight at
//! their target every tick; the target is re-validated each time and a dead
//! or despawned target turns the missile back into a climber. Collision for
//! homing missiles is an explicit proximity sweep run by the encounter loop -
//! they move too fast for body-contact detection to be reliable.

use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{Position, Projectile, ProjectileKind, Velocity};
use crate::constants::*;
use crate::events::{EventQueue, GameEvent};
use crate::queries;
use crate::systems::combat;

/// Age projectiles and update homing velocities for this tick.
pub fn tick_projectiles(world: &mut World, dt_ms: f32) {
    // Snapshot homing missiles and their targets; steering mutates after
    let homing: Vec<(Entity, Option<Entity>)> = world
        .query::<&Projectile>()
        .iter()
        .filter(|(_, p)| p.alive && p.kind == ProjectileKind::Homing)
        .map(|(id, p)| (id, p.target))
        .collect();

    for (entity, target) in homing {
        // Re-validate the target every tick; a dead or despawned enemy
        // turns the missile back into a climber
        let target_pos = target
            .filter(|t| !queries::is_entity_dead(world, *t))
            .and_then(|t| queries::entity_position(world, t));
        steer_homing(world, entity, target_pos);
    }

    for (_, projectile) in world.query_mut::<&mut Projectile>() {
        if projectile.alive {
            projectile.age_ms += dt_ms;
        }
    }
}

/// Point a homing missile: climb until the altitude tier is reached, then
/// track the (re-validated) target; with no valid target, keep climbing.
fn steer_homing(world: &mut World, entity: Entity, target_pos: Option<Vec2>) {
    let Some(pos) = queries::entity_position(world, entity) else {
        return;
    };
    let Ok(projectile) = world.get::<&Projectile>(entity).map(|p| p.clone()) else {
        return;
    };

    let velocity = if pos.y >= projectile.homing_altitude {
        match target_pos {
            Some(target) => {
                let offset = target - pos;
                let distance = offset.length();
                if distance > 0.0 {
                    offset / distance * projectile.speed
                } else {
                    Vec2::new(0.0, HOMING_CLIMB_SPEED)
                }
            }
            None => Vec2::new(0.0, HOMING_CLIMB_SPEED),
        }
    } else {
        Vec2::new(0.0, HOMING_CLIMB_SPEED)
    };

    if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
        vel.x = velocity.x;
        vel.y = velocity.y;
    }
}

/// Despawn every projectile that is retired, expired, or out of the world.
///
/// Candidates are collected first and despawned after, never mid-query.
pub fn retire_projectiles(world: &mut World) {
    let to_despawn: Vec<Entity> = world
        .query::<(&Position, &Projectile)>()
        .iter()
        .filter(|(_, (pos, projectile))| {
            !projectile.alive || projectile.expired() || out_of_bounds(pos)
        })
        .map(|(id, _)| id)
        .collect();

    for entity in to_despawn {
        let _ = world.despawn(entity);
    }
}

fn out_of_bounds(pos: &Position) -> bool {
    pos.x < 0.0 || pos.x > WORLD_WIDTH || pos.y < 0.0 || pos.y > WORLD_HEIGHT
}

/// One recorded homing hit, applied after the sweep
#[derive(Debug, Clone, Copy)]
pub struct HomingHit {
    pub projectile: Entity,
    pub enemy: Entity,
    pub damage: i32,
    pub position: (f32, f32),
}

/// Proximity sweep: match each live homing missile against the nearest live
/// enemy within the hit threshold.
///
/// Nothing is mutated here; hits are recorded and applied afterwards so the
/// sweep never invalidates its own iteration. Each missile is credited at
/// most one enemy.
pub fn homing_sweep(world: &World) -> Vec<HomingHit> {
    let enemies = queries::live_enemies(world);
    let mut hits = Vec::new();

    for (proj_id, (pos, projectile)) in world.query::<(&Position, &Projectile)>().iter() {
        if !projectile.alive || projectile.kind != ProjectileKind::Homing {
            continue;
        }

        let mut best: Option<(Entity, f32, Vec2)> = None;
        for (enemy_id, enemy_pos) in &enemies {
            let distance = pos.as_vec2().distance(*enemy_pos);
            if distance < HOMING_HIT_THRESHOLD
                && best.map(|(_, d, _)| distance < d).unwrap_or(true)
            {
                best = Some((*enemy_id, distance, *enemy_pos));
            }
        }

        if let Some((enemy, _, enemy_pos)) = best {
            hits.push(HomingHit {
                projectile: proj_id,
                enemy,
                damage: projectile.damage,
                position: (enemy_pos.x, enemy_pos.y),
            });
        }
    }

    hits
}

/// Apply recorded homing hits: damage the enemy, retire the missile.
///
/// The missile is despawned immediately so it can never deal damage twice.
pub fn apply_homing_hits(world: &mut World, hits: &[HomingHit], events: &mut EventQueue) {
    for hit in hits {
        if !world.contains(hit.projectile) {
            continue;
        }

        combat::apply_damage(world, hit.enemy, hit.damage);
        events.push(GameEvent::ProjectileHit {
            projectile: hit.projectile,
            target: hit.enemy,
            position: hit.position,
            damage: hit.damage,
        });

        if let Ok(mut projectile) = world.get::<&mut Projectile>(hit.projectile) {
            projectile.alive = false;
        }
        let _ = world.despawn(hit.projectile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Body, Health};
    use crate::physics;
    use crate::spawning::defs;

    fn spawn_homing(world: &mut World, x: f32, y: f32, target: Option<Entity>, altitude: f32) -> Entity {
        world.spawn((
            Position::new(x, y),
            Velocity::new(0.0, HOMING_LAUNCH_SPEED),
            Body::projectile(PROJECTILE_BODY_SIZE),
            Projectile::homing(FIREBALL_DAMAGE, target, altitude),
        ))
    }

    fn spawn_ballistic(world: &mut World, x: f32, y: f32, direction: f32) -> Entity {
        world.spawn((
            Position::new(x, y),
            Velocity::new(direction * LIGHTNING_SPEED, 0.0),
            Body::projectile(PROJECTILE_BODY_SIZE),
            Projectile::ballistic(LIGHTNING_DAMAGE, LIGHTNING_SPEED),
        ))
    }

    #[test]
    fn test_ballistic_keeps_straight_line() {
        let mut world = World::new();
        let bolt = spawn_ballistic(&mut world, 400.0, 60.0, 1.0);

        for _ in 0..10 {
            tick_projectiles(&mut world, 16.0);
            physics::tick_bodies(&mut world, 16.0);
        }

        let pos = world.get::<&Position>(bolt).unwrap();
        assert!(pos.x > 400.0);
        assert_eq!(pos.y, 60.0);
        let vel = world.get::<&Velocity>(bolt).unwrap();
        assert_eq!(vel.x, LIGHTNING_SPEED);
    }

    #[test]
    fn test_homing_climbs_below_altitude() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let enemy = defs::SLIME.spawn(&mut world, 600.0, &mut events);
        let missile = spawn_homing(&mut world, 400.0, 60.0, Some(enemy), HOMING_ALTITUDE_FAR);

        tick_projectiles(&mut world, 16.0);

        let vel = world.get::<&Velocity>(missile).unwrap();
        assert_eq!(vel.x, 0.0);
        assert_eq!(vel.y, HOMING_CLIMB_SPEED);
    }

    #[test]
    fn test_homing_converges_on_target_above_altitude() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let enemy = defs::SLIME.spawn(&mut world, 600.0, &mut events);
        let missile = spawn_homing(&mut world, 400.0, 250.0, Some(enemy), HOMING_ALTITUDE_FAR);

        // Successive velocity vectors keep pointing at the (fixed) target
        for _ in 0..5 {
            tick_projectiles(&mut world, 16.0);

            let pos = world.get::<&Position>(missile).unwrap().as_vec2();
            let vel = *world.get::<&Velocity>(missile).unwrap();
            let target = world.get::<&Position>(enemy).unwrap().as_vec2();
            let expected = (target - pos).normalize() * HOMING_SPEED;
            assert!((vel.x - expected.x).abs() < 0.001);
            assert!((vel.y - expected.y).abs() < 0.001);

            physics::tick_bodies(&mut world, 16.0);
        }
    }

    #[test]
    fn test_homing_without_target_keeps_climbing() {
        let mut world = World::new();
        let missile = spawn_homing(&mut world, 400.0, 250.0, None, HOMING_ALTITUDE_NEAR);

        tick_projectiles(&mut world, 16.0);

        let vel = world.get::<&Velocity>(missile).unwrap();
        assert_eq!((vel.x, vel.y), (0.0, HOMING_CLIMB_SPEED));
    }

    #[test]
    fn test_homing_target_revalidated_when_dead() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let enemy = defs::SLIME.spawn(&mut world, 600.0, &mut events);
        let missile = spawn_homing(&mut world, 400.0, 250.0, Some(enemy), HOMING_ALTITUDE_NEAR);

        combat::apply_damage(&mut world, enemy, SLIME_HEALTH);
        tick_projectiles(&mut world, 16.0);

        // Dead target: the missile climbs instead of chasing a corpse
        let vel = world.get::<&Velocity>(missile).unwrap();
        assert_eq!((vel.x, vel.y), (0.0, HOMING_CLIMB_SPEED));
        drop(vel);

        // Fully despawned target behaves the same
        world.despawn(enemy).unwrap();
        tick_projectiles(&mut world, 16.0);
        let vel = world.get::<&Velocity>(missile).unwrap();
        assert_eq!((vel.x, vel.y), (0.0, HOMING_CLIMB_SPEED));
    }

    #[test]
    fn test_lifetime_expiry_retires() {
        let mut world = World::new();
        let bolt = spawn_ballistic(&mut world, 400.0, 60.0, 1.0);

        tick_projectiles(&mut world, PROJECTILE_LIFETIME_MS + 1.0);
        retire_projectiles(&mut world);

        assert!(!world.contains(bolt));
    }

    #[test]
    fn test_world_bounds_exit_retires() {
        let mut world = World::new();
        let bolt = spawn_ballistic(&mut world, 10.0, 60.0, -1.0);

        for _ in 0..120 {
            tick_projectiles(&mut world, 16.0);
            physics::tick_bodies(&mut world, 16.0);
            retire_projectiles(&mut world);
        }

        assert!(!world.contains(bolt));
    }

    #[test]
    fn test_sweep_credits_nearest_enemy_once() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let near = defs::SLIME.spawn(&mut world, 420.0, &mut events);
        let far = defs::SLIME.spawn(&mut world, 460.0, &mut events);
        let missile = spawn_homing(&mut world, 400.0, 56.0, Some(near), HOMING_ALTITUDE_NEAR);

        let hits = homing_sweep(&world);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].enemy, near);

        apply_homing_hits(&mut world, &hits, &mut events);

        assert!(!world.contains(missile));
        assert_eq!(
            world.get::<&Health>(near).unwrap().current,
            SLIME_HEALTH - FIREBALL_DAMAGE
        );
        assert_eq!(world.get::<&Health>(far).unwrap().current, SLIME_HEALTH);

        // A retired missile can never hit again
        let hits_again = homing_sweep(&world);
        assert!(hits_again.is_empty());
    }

    #[test]
    fn test_sweep_ignores_out_of_threshold_and_ballistic() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        defs::SLIME.spawn(&mut world, 600.0, &mut events);
        spawn_homing(&mut world, 400.0, 56.0, None, HOMING_ALTITUDE_NEAR);
        spawn_ballistic(&mut world, 590.0, 56.0, 1.0);

        let hits = homing_sweep(&world);
        assert!(hits.is_empty());
    }
}
