//! Combat resolution constants.

/// Damage taken when the player touches an enemy
pub const CONTACT_DAMAGE: i32 = 10;
/// Invulnerability window granted after enemy contact (ms)
pub const CONTACT_INVULNERABILITY_MS: f32 = 1000.0;
/// Knockback speed applied to the player on enemy contact (pixels/s)
pub const CONTACT_KNOCKBACK_SPEED: f32 = 200.0;
/// Knockback speed applied by an enemy melee attack (pixels/s)
pub const ENEMY_ATTACK_KNOCKBACK_SPEED: f32 = 150.0;

/// Hit radius for ballistic-projectile contact resolution
pub const BALLISTIC_HIT_RADIUS: f32 = 30.0;
