//! Experience and leveling system.

use hecs::{Entity, World};
use tracing::info;

use crate::components::{Experience, Health, Mana};
use crate::constants::*;
use crate::events::{EventQueue, GameEvent};

/// Add XP to an experience component, applying at most one level-up.
///
/// A single grant that crosses several thresholds still raises the level only
/// once; the surplus stays banked and the next grant can trigger another
/// level-up. Returns true if a level-up happened.
pub fn gain_exp(exp: &mut Experience, health: &mut Health, mana: &mut Mana, amount: u32) -> bool {
    exp.current += amount;
    if exp.current < exp.to_next {
        return false;
    }
    level_up(exp, health, mana);
    true
}

/// Apply one level-up: advance the level, scale the next threshold, and
/// raise + refill both pools.
fn level_up(exp: &mut Experience, health: &mut Health, mana: &mut Mana) {
    exp.level += 1;
    exp.current -= exp.to_next;
    exp.to_next = (exp.to_next as f32 * PLAYER_EXP_GROWTH).floor() as u32;

    health.max += PLAYER_LEVEL_HEALTH_GAIN;
    health.current = health.max;
    mana.max += PLAYER_LEVEL_MANA_GAIN;
    mana.current = mana.max;
}

/// Grant XP to an entity, emitting a LevelUp event on level-up.
pub fn grant_exp(world: &mut World, entity: Entity, amount: u32, events: &mut EventQueue) {
    let Ok(mut exp) = world.get::<&mut Experience>(entity) else {
        return;
    };
    let Ok(mut health) = world.get::<&mut Health>(entity) else {
        return;
    };
    let Ok(mut mana) = world.get::<&mut Mana>(entity) else {
        return;
    };

    if gain_exp(&mut exp, &mut health, &mut mana, amount) {
        info!(level = exp.level, "player leveled up");
        events.push(GameEvent::LevelUp {
            new_level: exp.level,
        });
    }
}
