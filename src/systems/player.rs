//! Player controller: movement, melee swings, timers, and damage intake.
//!
//! Horizontal velocity is set directly from held input each tick (no
//! acceleration model); jumps require the body to report grounded. The melee
//! swing is a small phase machine - windup, hit-scan, active - driven by
//! per-tick countdowns instead of deferred callbacks, so a destroyed or
//! game-over'd player can never be mutated by a stale timer.

use hecs::{Entity, World};

use crate::components::{
    Body, Enemy, Facing, Health, Invulnerability, Mana, MeleeAttack, MeleePhase, Position,
    SkillCooldowns, Velocity,
};
use crate::constants::*;
use crate::events::{EventQueue, GameEvent};
use crate::input::PlayerInput;
use crate::systems::{combat, skills};

/// Resolve this tick's input into movement, facing, and triggered actions.
pub fn apply_input(world: &mut World, player: Entity, input: &PlayerInput, events: &mut EventQueue) {
    if !world.contains(player) {
        return;
    }

    // Held movement sets velocity directly; releasing stops on the spot
    let direction = match (input.left, input.right) {
        (true, false) => Some(Facing::Left),
        (false, true) => Some(Facing::Right),
        _ => None,
    };

    if let Ok(mut vel) = world.get::<&mut Velocity>(player) {
        vel.x = direction.map(|d| d.sign() * PLAYER_MOVE_SPEED).unwrap_or(0.0);
    }
    if let Some(direction) = direction {
        if let Ok(mut facing) = world.get::<&mut Facing>(player) {
            *facing = direction;
        }
    }

    if input.jump {
        jump(world, player);
    }

    if input.attack {
        start_melee_swing(world, player);
    }

    if let Some(kind) = input.skill {
        skills::use_skill(world, player, kind, events);
    }
}

/// Apply the jump impulse if the body is on a supporting surface.
pub fn jump(world: &mut World, player: Entity) {
    let grounded = world
        .get::<&Body>(player)
        .map(|b| b.grounded)
        .unwrap_or(false);
    if !grounded {
        return;
    }
    if let Ok(mut vel) = world.get::<&mut Velocity>(player) {
        vel.y = PLAYER_JUMP_SPEED;
    }
}

/// Begin a melee swing if off cooldown and not already swinging.
pub fn start_melee_swing(world: &mut World, player: Entity) {
    if let Ok(mut melee) = world.get::<&mut MeleeAttack>(player) {
        if !melee.can_swing() {
            return;
        }
        melee.phase = MeleePhase::Windup;
        melee.phase_remaining_ms = MELEE_WINDUP_MS;
        melee.cooldown = MELEE_COOLDOWN_TICKS;
    }
}

/// Advance the player's per-tick state: cooldowns, melee phases, mana
/// regeneration, and the invulnerability countdown.
pub fn tick_player(world: &mut World, player: Entity, dt_ms: f32, events: &mut EventQueue) {
    if !world.contains(player) {
        return;
    }

    // Uniform one-per-tick cooldown decrements
    if let Ok(mut melee) = world.get::<&mut MeleeAttack>(player) {
        melee.cooldown = melee.cooldown.saturating_sub(1);
    }
    if let Ok(mut cooldowns) = world.get::<&mut SkillCooldowns>(player) {
        cooldowns.tick();
    }

    if let Ok(mut mana) = world.get::<&mut Mana>(player) {
        mana.regen(PLAYER_MANA_REGEN_PER_TICK);
    }

    if let Ok(mut invuln) = world.get::<&mut Invulnerability>(player) {
        invuln.remaining_ms = (invuln.remaining_ms - dt_ms).max(0.0);
    }

    tick_melee_phases(world, player, dt_ms, events);
}

/// Advance the melee phase machine, firing the hit-scan when the windup ends.
fn tick_melee_phases(world: &mut World, player: Entity, dt_ms: f32, events: &mut EventQueue) {
    let phase_ended = {
        let Ok(mut melee) = world.get::<&mut MeleeAttack>(player) else {
            return;
        };
        if melee.phase == MeleePhase::Idle {
            return;
        }
        melee.phase_remaining_ms -= dt_ms;
        if melee.phase_remaining_ms > 0.0 {
            return;
        }
        melee.phase
    };

    match phase_ended {
        MeleePhase::Windup => {
            melee_hit_scan(world, player, events);
            if let Ok(mut melee) = world.get::<&mut MeleeAttack>(player) {
                melee.phase = MeleePhase::Active;
                melee.phase_remaining_ms = MELEE_SWING_MS - MELEE_WINDUP_MS;
            }
        }
        MeleePhase::Active => {
            if let Ok(mut melee) = world.get::<&mut MeleeAttack>(player) {
                melee.phase = MeleePhase::Idle;
                melee.phase_remaining_ms = 0.0;
            }
        }
        MeleePhase::Idle => {}
    }
}

/// Instantaneous rectangular damage check in front of the player.
///
/// Hits every live enemy within the melee window on the side the player is
/// facing; each hit enemy takes the swing damage exactly once.
pub fn melee_hit_scan(world: &mut World, player: Entity, events: &mut EventQueue) {
    let Ok(player_pos) = world.get::<&Position>(player).map(|p| *p) else {
        return;
    };
    let Ok(facing) = world.get::<&Facing>(player).map(|f| *f) else {
        return;
    };

    let hits: Vec<(Entity, (f32, f32))> = world
        .query::<(&Position, &Health, &Enemy)>()
        .iter()
        .filter(|(_, (pos, health, _))| {
            if health.is_dead() {
                return false;
            }
            let dx = pos.x - player_pos.x;
            let dy = pos.y - player_pos.y;
            let in_window = dx.abs() < MELEE_RANGE && dy.abs() < MELEE_VERTICAL_TOLERANCE;
            let enemy_side = if dx > 0.0 { Facing::Right } else { Facing::Left };
            in_window && enemy_side == facing
        })
        .map(|(id, (pos, _, _))| (id, (pos.x, pos.y)))
        .collect();

    for (enemy, target_pos) in hits {
        combat::apply_damage(world, enemy, MELEE_DAMAGE);
        events.push(GameEvent::AttackHit {
            attacker: player,
            target: enemy,
            target_pos,
            damage: MELEE_DAMAGE,
        });
    }
}

/// Damage the player unless the invulnerability window is active.
///
/// Health is clamped at zero; a DamageTaken event carries the floating
/// damage-number hook for the presentation layer.
pub fn damage_player(world: &mut World, player: Entity, amount: i32, events: &mut EventQueue) {
    let invulnerable = world
        .get::<&Invulnerability>(player)
        .map(|i| i.is_active())
        .unwrap_or(false);
    if invulnerable {
        return;
    }

    let Ok(position) = world.get::<&Position>(player).map(|p| (p.x, p.y)) else {
        return;
    };

    combat::apply_damage(world, player, amount);
    events.push(GameEvent::DamageTaken {
        entity: player,
        amount,
        position,
    });
}

/// Grant a timed invulnerability window; overlapping grants keep the longer.
pub fn set_invulnerable(world: &mut World, player: Entity, duration_ms: f32) {
    if let Ok(mut invuln) = world.get::<&mut Invulnerability>(player) {
        invuln.grant(duration_ms);
    }
}
