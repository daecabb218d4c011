//! Skill tuning: damage, costs, cooldowns, and projectile kinematics.

// Fireball - homing missile volley
/// Damage per fireball missile
pub const FIREBALL_DAMAGE: i32 = 30;
/// Fireball cooldown in ticks
pub const FIREBALL_COOLDOWN_TICKS: u32 = 100;
/// Fireball mana cost
pub const FIREBALL_MANA_COST: f32 = 20.0;
/// Missiles spawned per fireball cast
pub const FIREBALL_MISSILE_COUNT: usize = 3;

// Lightning - straight bolt
/// Lightning bolt damage
pub const LIGHTNING_DAMAGE: i32 = 50;
/// Lightning cooldown in ticks
pub const LIGHTNING_COOLDOWN_TICKS: u32 = 120;
/// Lightning mana cost
pub const LIGHTNING_MANA_COST: f32 = 30.0;
/// Lightning bolt horizontal speed (pixels/s)
pub const LIGHTNING_SPEED: f32 = 100.0;

// Heal - instant self-heal
/// Health restored by a heal cast
pub const HEAL_AMOUNT: i32 = 30;
/// Heal cooldown in ticks
pub const HEAL_COOLDOWN_TICKS: u32 = 180;
/// Heal mana cost
pub const HEAL_MANA_COST: f32 = 25.0;

/// Vertical offset above the caster at which projectiles spawn
pub const PROJECTILE_SPAWN_OFFSET_Y: f32 = 20.0;
/// Time-to-live for every projectile (ms)
pub const PROJECTILE_LIFETIME_MS: f32 = 3000.0;
/// Projectile body size
pub const PROJECTILE_BODY_SIZE: f32 = 30.0;

/// Homing tracking speed once locked on (pixels/s)
pub const HOMING_SPEED: f32 = 300.0;
/// Upward launch velocity of a homing missile (pixels/s)
pub const HOMING_LAUNCH_SPEED: f32 = 150.0;
/// Climb velocity while waiting to reach the homing altitude (pixels/s)
pub const HOMING_CLIMB_SPEED: f32 = 200.0;

/// Target distance beyond which the missile climbs to the far altitude
pub const HOMING_FAR_DISTANCE: f32 = 500.0;
/// Target distance beyond which the missile climbs to the mid altitude
pub const HOMING_MID_DISTANCE: f32 = 300.0;
/// Homing start altitude for far targets
pub const HOMING_ALTITUDE_FAR: f32 = 200.0;
/// Homing start altitude for mid-range targets
pub const HOMING_ALTITUDE_MID: f32 = 100.0;
/// Homing start altitude for near targets (effectively immediate)
pub const HOMING_ALTITUDE_NEAR: f32 = 20.0;

/// Proximity sweep hit threshold for homing missiles
pub const HOMING_HIT_THRESHOLD: f32 = 80.0;
