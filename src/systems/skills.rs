//! Skill casting: per-kind cooldowns, mana costs, and effects.
//!
//! Casting is a silent no-op while the kind is on cooldown or mana is short;
//! a successful cast consumes the mana, arms the cooldown, and performs the
//! kind-specific effect (projectile spawns or an instant self-heal).

use hecs::{Entity, World};
use tracing::debug;

use crate::components::{
    Body, Facing, Health, Mana, Position, Projectile, SkillCooldowns, Velocity,
};
use crate::constants::*;
use crate::events::{EventQueue, GameEvent};
use crate::queries;

/// The fixed set of castable skills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillKind {
    /// Volley of homing missiles
    Fireball,
    /// Straight bolt in the facing direction
    Lightning,
    /// Instant self-heal
    Heal,
}

impl SkillKind {
    pub const COUNT: usize = 3;

    pub fn name(&self) -> &'static str {
        match self {
            SkillKind::Fireball => "Fireball",
            SkillKind::Lightning => "Lightning",
            SkillKind::Heal => "Heal",
        }
    }

    pub fn cooldown_ticks(&self) -> u32 {
        match self {
            SkillKind::Fireball => FIREBALL_COOLDOWN_TICKS,
            SkillKind::Lightning => LIGHTNING_COOLDOWN_TICKS,
            SkillKind::Heal => HEAL_COOLDOWN_TICKS,
        }
    }

    pub fn mana_cost(&self) -> f32 {
        match self {
            SkillKind::Fireball => FIREBALL_MANA_COST,
            SkillKind::Lightning => LIGHTNING_MANA_COST,
            SkillKind::Heal => HEAL_MANA_COST,
        }
    }
}

/// Pick the altitude a homing missile climbs to before tracking.
///
/// Farther targets make the missile rise higher before it turns; with no
/// target at all the near tier applies (and the missile just climbs out).
pub fn homing_altitude_for(target_distance: Option<f32>) -> f32 {
    match target_distance {
        Some(d) if d > HOMING_FAR_DISTANCE => HOMING_ALTITUDE_FAR,
        Some(d) if d > HOMING_MID_DISTANCE => HOMING_ALTITUDE_MID,
        _ => HOMING_ALTITUDE_NEAR,
    }
}

/// Cast a skill for the player.
///
/// No-op while the kind is on cooldown; no-op (cooldown untouched) when mana
/// is insufficient. On success the mana is spent, the cooldown armed, and the
/// effect performed.
pub fn use_skill(world: &mut World, caster: Entity, kind: SkillKind, events: &mut EventQueue) {
    let on_cooldown = world
        .get::<&SkillCooldowns>(caster)
        .map(|c| c.remaining(kind) > 0)
        .unwrap_or(true);
    if on_cooldown {
        return;
    }

    {
        let Ok(mut mana) = world.get::<&mut Mana>(caster) else {
            return;
        };
        if !mana.spend(kind.mana_cost()) {
            return;
        }
    }

    if let Ok(mut cooldowns) = world.get::<&mut SkillCooldowns>(caster) {
        cooldowns.arm(kind, kind.cooldown_ticks());
    }

    debug!(skill = kind.name(), "skill cast");
    match kind {
        SkillKind::Fireball => cast_fireball(world, caster),
        SkillKind::Lightning => cast_lightning(world, caster),
        SkillKind::Heal => cast_heal(world, caster, events),
    }
    events.push(GameEvent::SkillCast { kind });
}

/// Launch a volley of homing missiles, each locked to the nearest enemy.
fn cast_fireball(world: &mut World, caster: Entity) {
    let Some(origin) = queries::entity_position(world, caster) else {
        return;
    };
    let spawn = glam::Vec2::new(origin.x, origin.y + PROJECTILE_SPAWN_OFFSET_Y);

    for _ in 0..FIREBALL_MISSILE_COUNT {
        let target = queries::nearest_enemy(world, spawn);
        let distance = target
            .and_then(|t| queries::entity_position(world, t))
            .map(|p| p.distance(spawn));
        let altitude = homing_altitude_for(distance);

        world.spawn((
            Position::new(spawn.x, spawn.y),
            Velocity::new(0.0, HOMING_LAUNCH_SPEED),
            Body::projectile(PROJECTILE_BODY_SIZE),
            Projectile::homing(FIREBALL_DAMAGE, target, altitude),
        ));
    }
}

/// Fire a single straight bolt in the caster's facing direction.
fn cast_lightning(world: &mut World, caster: Entity) {
    let Some(origin) = queries::entity_position(world, caster) else {
        return;
    };
    let facing = world
        .get::<&Facing>(caster)
        .map(|f| *f)
        .unwrap_or(Facing::Right);

    world.spawn((
        Position::new(origin.x, origin.y + PROJECTILE_SPAWN_OFFSET_Y),
        Velocity::new(facing.sign() * LIGHTNING_SPEED, 0.0),
        Body::projectile(PROJECTILE_BODY_SIZE),
        Projectile::ballistic(LIGHTNING_DAMAGE, LIGHTNING_SPEED),
    ));
}

/// Restore health on the spot.
fn cast_heal(world: &mut World, caster: Entity, events: &mut EventQueue) {
    if let Ok(mut health) = world.get::<&mut Health>(caster) {
        health.heal(HEAL_AMOUNT);
    }
    events.push(GameEvent::Healed {
        amount: HEAL_AMOUNT,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ProjectileKind;
    use crate::spawning::{defs, spawn_player};

    fn setup() -> (World, Entity, EventQueue) {
        let mut world = World::new();
        let events = EventQueue::new();
        let player = spawn_player(&mut world, 400.0, GROUND_Y + 24.0);
        (world, player, events)
    }

    fn count_projectiles(world: &World) -> usize {
        world.query::<&Projectile>().iter().count()
    }

    #[test]
    fn test_fireball_spawns_volley_with_targets() {
        let (mut world, player, mut events) = setup();
        let enemy = defs::SLIME.spawn(&mut world, 600.0, &mut events);

        use_skill(&mut world, player, SkillKind::Fireball, &mut events);

        let missiles: Vec<Projectile> = world
            .query::<&Projectile>()
            .iter()
            .map(|(_, p)| p.clone())
            .collect();
        assert_eq!(missiles.len(), FIREBALL_MISSILE_COUNT);
        for missile in &missiles {
            assert_eq!(missile.kind, ProjectileKind::Homing);
            assert_eq!(missile.target, Some(enemy));
            assert_eq!(missile.damage, FIREBALL_DAMAGE);
        }

        let mana = world.get::<&Mana>(player).unwrap();
        assert_eq!(mana.current, PLAYER_STARTING_MANA - FIREBALL_MANA_COST);
        let cooldowns = world.get::<&SkillCooldowns>(player).unwrap();
        assert_eq!(
            cooldowns.remaining(SkillKind::Fireball),
            FIREBALL_COOLDOWN_TICKS
        );
    }

    #[test]
    fn test_cast_on_cooldown_is_noop() {
        let (mut world, player, mut events) = setup();

        use_skill(&mut world, player, SkillKind::Lightning, &mut events);
        assert_eq!(count_projectiles(&world), 1);

        use_skill(&mut world, player, SkillKind::Lightning, &mut events);
        assert_eq!(count_projectiles(&world), 1);
        // Mana was only charged once
        let mana = world.get::<&Mana>(player).unwrap();
        assert_eq!(mana.current, PLAYER_STARTING_MANA - LIGHTNING_MANA_COST);
    }

    #[test]
    fn test_cast_without_mana_is_noop_and_keeps_cooldown_clear() {
        let (mut world, player, mut events) = setup();
        world.get::<&mut Mana>(player).unwrap().current = 5.0;

        use_skill(&mut world, player, SkillKind::Lightning, &mut events);

        assert_eq!(count_projectiles(&world), 0);
        let cooldowns = world.get::<&SkillCooldowns>(player).unwrap();
        assert_eq!(cooldowns.remaining(SkillKind::Lightning), 0);
        assert_eq!(world.get::<&Mana>(player).unwrap().current, 5.0);
    }

    #[test]
    fn test_lightning_flies_in_facing_direction() {
        let (mut world, player, mut events) = setup();
        *world.get::<&mut Facing>(player).unwrap() = Facing::Left;

        use_skill(&mut world, player, SkillKind::Lightning, &mut events);

        let (_, (projectile, vel)) = world
            .query::<(&Projectile, &Velocity)>()
            .iter()
            .next()
            .map(|(id, (p, v))| (id, (p.clone(), *v)))
            .unwrap();
        assert_eq!(projectile.kind, ProjectileKind::Ballistic);
        assert_eq!(vel.x, -LIGHTNING_SPEED);
        assert_eq!(vel.y, 0.0);
    }

    #[test]
    fn test_heal_restores_clamped_health() {
        let (mut world, player, mut events) = setup();
        world.get::<&mut Health>(player).unwrap().current = 90;

        use_skill(&mut world, player, SkillKind::Heal, &mut events);

        // 90 + 30 clamps to the 100 maximum
        assert_eq!(
            world.get::<&Health>(player).unwrap().current,
            PLAYER_STARTING_HEALTH
        );
        let healed = events
            .drain()
            .any(|e| matches!(e, GameEvent::Healed { amount: HEAL_AMOUNT }));
        assert!(healed);
    }

    #[test]
    fn test_homing_altitude_tiers() {
        assert_eq!(homing_altitude_for(Some(600.0)), HOMING_ALTITUDE_FAR);
        assert_eq!(homing_altitude_for(Some(400.0)), HOMING_ALTITUDE_MID);
        assert_eq!(homing_altitude_for(Some(100.0)), HOMING_ALTITUDE_NEAR);
        assert_eq!(homing_altitude_for(None), HOMING_ALTITUDE_NEAR);
    }

    #[test]
    fn test_fireball_without_enemies_has_no_target() {
        let (mut world, player, mut events) = setup();

        use_skill(&mut world, player, SkillKind::Fireball, &mut events);

        for (_, projectile) in world.query::<&Projectile>().iter() {
            assert_eq!(projectile.target, None);
            assert_eq!(projectile.homing_altitude, HOMING_ALTITUDE_NEAR);
        }
    }
}
