//! Enemy stats and spawning constants.

// SLIME
/// Slime health
pub const SLIME_HEALTH: i32 = 50;
/// Slime contact/melee attack damage
pub const SLIME_DAMAGE: i32 = 10;
/// Slime patrol and chase speed (pixels/s)
pub const SLIME_SPEED: f32 = 50.0;
/// Distance at which a slime attacks
pub const SLIME_ATTACK_RANGE: f32 = 40.0;
/// Distance at which a slime notices and chases the player
pub const SLIME_DETECTION_RANGE: f32 = 150.0;
/// Maximum patrol excursion from the spawn x before turning around
pub const SLIME_PATROL_DISTANCE: f32 = 100.0;
/// Milliseconds between slime attacks
pub const SLIME_ATTACK_COOLDOWN_MS: f32 = 2000.0;
/// XP awarded for killing a slime
pub const SLIME_EXP_REWARD: u32 = 10;
/// Enemy body width and height
pub const ENEMY_BODY_SIZE: f32 = 32.0;

/// Excursion from the patrol origin below which the enemy idles
/// instead of patrolling
pub const PATROL_IDLE_THRESHOLD: f32 = 10.0;

/// Fixed x positions of the initial enemy spawns
pub const INITIAL_SPAWN_XS: [f32; 3] = [400.0, 800.0, 1200.0];
/// Random respawn x range (min)
pub const RESPAWN_X_MIN: f32 = 200.0;
/// Random respawn x range (max)
pub const RESPAWN_X_MAX: f32 = 1400.0;
/// Milliseconds between periodic reinforcement spawns
pub const SPAWN_INTERVAL_MS: f32 = 3000.0;
