//! Player stats, movement, and progression constants.

/// Player starting maximum health
pub const PLAYER_STARTING_HEALTH: i32 = 100;
/// Player starting maximum mana
pub const PLAYER_STARTING_MANA: f32 = 100.0;
/// Horizontal move speed while a direction is held (pixels/s)
pub const PLAYER_MOVE_SPEED: f32 = 200.0;
/// Upward impulse applied on a grounded jump (pixels/s)
pub const PLAYER_JUMP_SPEED: f32 = 400.0;
/// Player body width
pub const PLAYER_BODY_WIDTH: f32 = 32.0;
/// Player body height
pub const PLAYER_BODY_HEIGHT: f32 = 48.0;

/// Mana regenerated each tick, clamped to the pool maximum
pub const PLAYER_MANA_REGEN_PER_TICK: f32 = 0.5;

/// XP required to reach level 2
pub const PLAYER_EXP_TO_FIRST_LEVEL: u32 = 100;
/// Multiplier applied to the XP requirement on each level-up (floored)
pub const PLAYER_EXP_GROWTH: f32 = 1.2;
/// Maximum health gained per level
pub const PLAYER_LEVEL_HEALTH_GAIN: i32 = 20;
/// Maximum mana gained per level
pub const PLAYER_LEVEL_MANA_GAIN: f32 = 10.0;

/// Melee swing reach along x
pub const MELEE_RANGE: f32 = 60.0;
/// Vertical tolerance of the melee hit window
pub const MELEE_VERTICAL_TOLERANCE: f32 = 50.0;
/// Damage dealt by one melee swing
pub const MELEE_DAMAGE: i32 = 15;
/// Ticks between melee swings
pub const MELEE_COOLDOWN_TICKS: u32 = 30;
/// Delay between swing start and the hit-scan (ms)
pub const MELEE_WINDUP_MS: f32 = 100.0;
/// Total duration the swing counts as attacking (ms)
pub const MELEE_SWING_MS: f32 = 200.0;
