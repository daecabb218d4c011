//! The per-tick encounter protocol and the host-facing command surface.
//!
//! `tick` runs the frame in a strict order: input, player timers, enemy AI,
//! kinematics and projectile motion, the homing proximity sweep, damage and
//! death resolution, the body-contact pass, spawn upkeep, and the terminal
//! check. The contact handlers are public so a host engine with its own
//! pairwise collision callbacks can invoke them directly.

use hecs::{Entity, World};
use tracing::info;

use crate::components::{Health, Position, Projectile, Velocity};
use crate::constants::*;
use crate::events::{EventQueue, GameEvent};
use crate::input::PlayerInput;
use crate::physics;
use crate::queries;
use crate::spawning;
use crate::systems::{ai, combat, experience, player, projectile};

use super::game_state::{EncounterState, EncounterStatus};

/// Advance the encounter by one frame.
///
/// A game-over encounter ignores ticks entirely until `restart` is called.
pub fn tick(
    state: &mut EncounterState,
    elapsed_ms: f32,
    input: &PlayerInput,
    events: &mut EventQueue,
) {
    if !state.is_running() {
        return;
    }

    state.clock_ms += elapsed_ms;

    // 1. Input: movement, facing, jump, melee trigger, skill cast
    player::apply_input(&mut state.world, state.player, input, events);

    // 2. Player timers: cooldowns, melee phases, mana regen, invulnerability
    player::tick_player(&mut state.world, state.player, elapsed_ms, events);

    // 3. Enemy AI
    ai::tick_enemies(&mut state.world, state.player, state.clock_ms, events);

    // 4. Kinematics and projectile upkeep
    projectile::tick_projectiles(&mut state.world, elapsed_ms);
    physics::tick_bodies(&mut state.world, elapsed_ms);
    projectile::retire_projectiles(&mut state.world);

    // 5-6. Homing sweep, then apply hits and resolve deaths
    let hits = projectile::homing_sweep(&state.world);
    projectile::apply_homing_hits(&mut state.world, &hits, events);
    combat::remove_dead_enemies(&mut state.world, state.player, events);

    // 7. Body-contact pass (engine-callback stand-in)
    for enemy in physics::detect_player_enemy_contacts(&state.world, state.player) {
        handle_player_enemy_contact(&mut state.world, state.player, enemy, events);
    }
    for (proj, enemy) in physics::detect_ballistic_enemy_contacts(&state.world) {
        handle_projectile_enemy_contact(&mut state.world, state.player, proj, enemy, events);
    }

    // 8. Spawn upkeep: immediate replacement plus the periodic reinforcement
    if queries::live_enemy_count(&state.world) == 0 {
        spawning::spawn_replacement_enemy(&mut state.world, &mut state.rng, events);
    }
    state.spawn_timer_ms += elapsed_ms;
    if state.spawn_timer_ms >= state.config.spawn_interval_ms {
        state.spawn_timer_ms -= state.config.spawn_interval_ms;
        spawning::spawn_replacement_enemy(&mut state.world, &mut state.rng, events);
    }

    // 9. Terminal check
    if queries::is_entity_dead(&state.world, state.player) {
        state.status = EncounterStatus::GameOver;
        info!("player defeated, encounter over");
        events.push(GameEvent::GameOver);
    }
}

/// Player touched an enemy: contact damage, a brief invulnerability window,
/// and knockback away from the enemy. An enemy that is already dead is
/// removed opportunistically.
pub fn handle_player_enemy_contact(
    world: &mut World,
    player_entity: Entity,
    enemy: Entity,
    events: &mut EventQueue,
) {
    if !world.contains(enemy) {
        return;
    }

    let invulnerable = world
        .get::<&crate::components::Invulnerability>(player_entity)
        .map(|i| i.is_active())
        .unwrap_or(false);

    if !invulnerable {
        player::damage_player(world, player_entity, CONTACT_DAMAGE, events);
        player::set_invulnerable(world, player_entity, CONTACT_INVULNERABILITY_MS);

        let player_x = world.get::<&Position>(player_entity).map(|p| p.x).ok();
        let enemy_x = world.get::<&Position>(enemy).map(|p| p.x).ok();
        if let (Some(px), Some(ex)) = (player_x, enemy_x) {
            let direction = if px < ex { -1.0 } else { 1.0 };
            if let Ok(mut vel) = world.get::<&mut Velocity>(player_entity) {
                vel.x = direction * CONTACT_KNOCKBACK_SPEED;
            }
        }
    }

    // Contact with a corpse that slipped past death resolution removes it
    let enemy_dead = world
        .get::<&Health>(enemy)
        .map(|h| h.is_dead())
        .unwrap_or(false);
    if enemy_dead {
        let position = world
            .get::<&Position>(enemy)
            .map(|p| (p.x, p.y))
            .unwrap_or((0.0, 0.0));
        events.push(GameEvent::EntityDied {
            entity: enemy,
            position,
        });
        let _ = world.despawn(enemy);
    }
}

/// A ballistic projectile struck an enemy: apply its damage once, retire it,
/// and resolve the kill (removal plus experience) if the enemy died.
pub fn handle_projectile_enemy_contact(
    world: &mut World,
    player_entity: Entity,
    proj: Entity,
    enemy: Entity,
    events: &mut EventQueue,
) {
    let Ok(damage) = world.get::<&Projectile>(proj).map(|p| p.damage) else {
        return;
    };
    let still_alive = world
        .get::<&Projectile>(proj)
        .map(|p| p.alive)
        .unwrap_or(false);
    if !still_alive || !world.contains(enemy) {
        return;
    }

    combat::apply_damage(world, enemy, damage);
    let position = world
        .get::<&Position>(enemy)
        .map(|p| (p.x, p.y))
        .unwrap_or((0.0, 0.0));
    events.push(GameEvent::ProjectileHit {
        projectile: proj,
        target: enemy,
        position,
        damage,
    });

    if let Ok(mut p) = world.get::<&mut Projectile>(proj) {
        p.alive = false;
    }
    let _ = world.despawn(proj);

    let enemy_dead = world
        .get::<&Health>(enemy)
        .map(|h| h.is_dead())
        .unwrap_or(false);
    if enemy_dead {
        let exp_reward = world
            .get::<&crate::components::EnemyAi>(enemy)
            .map(|ai| ai.exp_reward)
            .unwrap_or(0);
        events.push(GameEvent::EntityDied {
            entity: enemy,
            position,
        });
        let _ = world.despawn(enemy);
        experience::grant_exp(world, player_entity, exp_reward, events);
    }
}

/// Throw away the whole encounter and start over with the same config.
pub fn restart(state: &mut EncounterState, events: &mut EventQueue) {
    info!("encounter restarting");
    *state = EncounterState::new(state.config.clone(), events);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Experience, Invulnerability, Mana};
    use crate::config::EncounterConfig;
    use crate::systems::skills::SkillKind;

    const FRAME_MS: f32 = 16.0;

    fn setup() -> (EncounterState, EventQueue) {
        let mut events = EventQueue::new();
        let state = EncounterState::new(EncounterConfig::default(), &mut events);
        events.drain().count();
        (state, events)
    }

    fn assert_pools_clamped(state: &EncounterState) {
        for (_, health) in state.world.query::<&Health>().iter() {
            assert!(health.current >= 0 && health.current <= health.max);
        }
        for (_, mana) in state.world.query::<&Mana>().iter() {
            assert!(mana.current >= 0.0 && mana.current <= mana.max);
        }
    }

    #[test]
    fn test_pools_stay_clamped_across_busy_ticks() {
        let (mut state, mut events) = setup();

        for i in 0..600 {
            let input = PlayerInput {
                right: i % 3 == 0,
                left: i % 5 == 0,
                jump: i % 40 == 0,
                attack: i % 10 == 0,
                skill: match i % 90 {
                    0 => Some(SkillKind::Fireball),
                    30 => Some(SkillKind::Lightning),
                    60 => Some(SkillKind::Heal),
                    _ => None,
                },
            };
            tick(&mut state, FRAME_MS, &input, &mut events);
            assert_pools_clamped(&state);
            events.drain().count();
        }
    }

    #[test]
    fn test_roster_never_stays_empty() {
        let (mut state, mut events) = setup();

        // Kill everything outright
        let enemies: Vec<Entity> = queries::live_enemies(&state.world)
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        for enemy in enemies {
            combat::apply_damage(&mut state.world, enemy, SLIME_HEALTH);
        }

        tick(&mut state, FRAME_MS, &PlayerInput::none(), &mut events);

        // Exactly one replacement stands before the next AI evaluation
        assert_eq!(queries::live_enemy_count(&state.world), 1);
    }

    #[test]
    fn test_periodic_spawn_timer() {
        let (mut state, mut events) = setup();
        let initial = queries::live_enemy_count(&state.world);

        // Just under the interval: nothing yet
        tick(&mut state, SPAWN_INTERVAL_MS - 1.0, &PlayerInput::none(), &mut events);
        assert_eq!(queries::live_enemy_count(&state.world), initial);

        // Crossing it spawns one reinforcement
        tick(&mut state, 2.0, &PlayerInput::none(), &mut events);
        assert_eq!(queries::live_enemy_count(&state.world), initial + 1);
    }

    #[test]
    fn test_player_death_is_terminal_until_restart() {
        let (mut state, mut events) = setup();

        let player = state.player;
        state.world.get::<&mut Health>(player).unwrap().current = 1;
        // Lethal damage from any source flips the status on the next tick
        player::damage_player(&mut state.world, player, 10, &mut events);
        tick(&mut state, FRAME_MS, &PlayerInput::none(), &mut events);

        assert_eq!(state.status, EncounterStatus::GameOver);
        let game_over = events.drain().any(|e| matches!(e, GameEvent::GameOver));
        assert!(game_over);

        // Further ticks are suspended: the clock no longer advances
        let clock = state.clock_ms;
        tick(&mut state, FRAME_MS, &PlayerInput::none(), &mut events);
        assert_eq!(state.clock_ms, clock);

        restart(&mut state, &mut events);
        assert!(state.is_running());
        assert_eq!(state.clock_ms, 0.0);
        let health = state.world.get::<&Health>(state.player).unwrap();
        assert_eq!(health.current, health.max);
        assert_eq!(
            queries::live_enemy_count(&state.world),
            state.config.initial_spawn_xs.len()
        );
    }

    #[test]
    fn test_contact_damages_once_then_invulnerable() {
        let (mut state, mut events) = setup();
        let player = state.player;
        let enemy = queries::live_enemies(&state.world)[0].0;

        handle_player_enemy_contact(&mut state.world, player, enemy, &mut events);
        let health_after_first = state.world.get::<&Health>(player).unwrap().current;
        assert_eq!(health_after_first, PLAYER_STARTING_HEALTH - CONTACT_DAMAGE);
        assert!(state
            .world
            .get::<&Invulnerability>(player)
            .unwrap()
            .is_active());

        // Second contact during the window does nothing
        handle_player_enemy_contact(&mut state.world, player, enemy, &mut events);
        assert_eq!(
            state.world.get::<&Health>(player).unwrap().current,
            health_after_first
        );
    }

    #[test]
    fn test_contact_knockback_pushes_away_from_enemy() {
        let (mut state, mut events) = setup();
        let player = state.player;
        let enemy = queries::live_enemies(&state.world)[0].0;

        // Player is left of every initial spawn
        handle_player_enemy_contact(&mut state.world, player, enemy, &mut events);

        let vel = state.world.get::<&Velocity>(player).unwrap();
        assert_eq!(vel.x, -CONTACT_KNOCKBACK_SPEED);
    }

    #[test]
    fn test_ballistic_contact_kills_and_awards_exp() {
        let (mut state, mut events) = setup();
        let player = state.player;
        let enemy = queries::live_enemies(&state.world)[0].0;
        state.world.get::<&mut Health>(enemy).unwrap().current = LIGHTNING_DAMAGE;

        let proj = state.world.spawn((
            Position::new(0.0, 0.0),
            Velocity::new(LIGHTNING_SPEED, 0.0),
            Projectile::ballistic(LIGHTNING_DAMAGE, LIGHTNING_SPEED),
        ));

        handle_projectile_enemy_contact(&mut state.world, player, proj, enemy, &mut events);

        assert!(!state.world.contains(proj));
        assert!(!state.world.contains(enemy));
        let exp = state.world.get::<&Experience>(player).unwrap();
        assert_eq!(exp.current, SLIME_EXP_REWARD);
    }

    #[test]
    fn test_homing_volley_eventually_connects() {
        let (mut state, mut events) = setup();

        let cast = PlayerInput {
            skill: Some(SkillKind::Fireball),
            ..Default::default()
        };
        tick(&mut state, FRAME_MS, &cast, &mut events);
        events.drain().count();

        let mut saw_hit = false;
        for _ in 0..400 {
            tick(&mut state, FRAME_MS, &PlayerInput::none(), &mut events);
            if events
                .drain()
                .any(|e| matches!(e, GameEvent::ProjectileHit { .. }))
            {
                saw_hit = true;
                break;
            }
        }
        assert!(saw_hit, "homing volley never reached an enemy");
    }

    #[test]
    fn test_melee_swing_lands_through_full_tick_path() {
        let (mut state, mut events) = setup();
        let player = state.player;

        // Stand next to the nearest spawn, facing it
        state.world.get::<&mut Position>(player).unwrap().x = 360.0;
        let enemy = queries::nearest_enemy(
            &state.world,
            glam::Vec2::new(360.0, GROUND_Y),
        )
        .unwrap();

        let swing = PlayerInput {
            attack: true,
            ..Default::default()
        };
        tick(&mut state, FRAME_MS, &swing, &mut events);
        // Windup elapses across subsequent frames
        for _ in 0..10 {
            tick(&mut state, FRAME_MS, &PlayerInput::none(), &mut events);
        }

        let health = state.world.get::<&Health>(enemy).unwrap();
        assert_eq!(health.current, SLIME_HEALTH - MELEE_DAMAGE);
    }
}
