use glam::Vec2;

use crate::constants::*;

/// Position component - world coordinates in pixels, y-up
#[derive(Debug, Clone, Copy)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Euclidean distance to another position
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.as_vec2().distance(other.as_vec2())
    }
}

/// Velocity component - pixels per second
#[derive(Debug, Clone, Copy)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Horizontal facing, mirrored by movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// -1.0 for left, +1.0 for right
    pub fn sign(&self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    pub fn from_sign(sign: f32) -> Self {
        if sign < 0.0 {
            Facing::Left
        } else {
            Facing::Right
        }
    }
}

/// Kinematic body - the engine-collaborator half of an entity.
///
/// Actors are affected by gravity and collide with the ground plane and
/// world bounds; projectiles are not.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub half_width: f32,
    pub half_height: f32,
    pub gravity: bool,
    pub clamp_to_world: bool,
    pub grounded: bool,
}

impl Body {
    /// A gravity-affected actor body clamped to the world rectangle
    pub fn actor(width: f32, height: f32) -> Self {
        Self {
            half_width: width / 2.0,
            half_height: height / 2.0,
            gravity: true,
            clamp_to_world: true,
            grounded: false,
        }
    }

    /// A free-flying projectile body (no gravity, may exit the world)
    pub fn projectile(size: f32) -> Self {
        Self {
            half_width: size / 2.0,
            half_height: size / 2.0,
            gravity: false,
            clamp_to_world: false,
            grounded: false,
        }
    }
}

/// Player marker component
#[derive(Debug, Clone, Copy)]
pub struct Player;

/// Enemy marker component
#[derive(Debug, Clone, Copy)]
pub struct Enemy;

/// Health component
#[derive(Debug, Clone, Copy)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn percentage(&self) -> f32 {
        (self.current as f32 / self.max as f32).clamp(0.0, 1.0)
    }

    pub fn heal(&mut self, amount: i32) {
        self.current = (self.current + amount).min(self.max);
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }
}

/// Mana pool component
#[derive(Debug, Clone, Copy)]
pub struct Mana {
    pub current: f32,
    pub max: f32,
}

impl Mana {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn percentage(&self) -> f32 {
        (self.current / self.max).clamp(0.0, 1.0)
    }

    /// Regenerate, clamped to the pool maximum
    pub fn regen(&mut self, amount: f32) {
        self.current = (self.current + amount).min(self.max);
    }

    /// Spend mana if enough is available; returns false (unchanged) otherwise
    pub fn spend(&mut self, cost: f32) -> bool {
        if self.current < cost {
            return false;
        }
        self.current = (self.current - cost).max(0.0);
        true
    }
}

/// Experience and level progression
#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub level: u32,
    pub current: u32,
    pub to_next: u32,
}

impl Experience {
    pub fn new() -> Self {
        Self {
            level: 1,
            current: 0,
            to_next: PLAYER_EXP_TO_FIRST_LEVEL,
        }
    }

    pub fn progress(&self) -> f32 {
        (self.current as f32 / self.to_next as f32).clamp(0.0, 1.0)
    }
}

impl Default for Experience {
    fn default() -> Self {
        Self::new()
    }
}

/// Timed invulnerability window, counted down each tick.
///
/// Overlapping grants keep the longer remaining duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Invulnerability {
    pub remaining_ms: f32,
}

impl Invulnerability {
    pub fn is_active(&self) -> bool {
        self.remaining_ms > 0.0
    }

    pub fn grant(&mut self, duration_ms: f32) {
        self.remaining_ms = self.remaining_ms.max(duration_ms);
    }
}

/// Melee swing phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeleePhase {
    Idle,
    /// Swing started, hit-scan pending
    Windup,
    /// Hit-scan done, swing visual still active
    Active,
}

/// Player melee attack state: phase machine plus tick-based cooldown
#[derive(Debug, Clone, Copy)]
pub struct MeleeAttack {
    pub phase: MeleePhase,
    /// Ticks until the next swing may start
    pub cooldown: u32,
    /// Milliseconds left in the current phase
    pub phase_remaining_ms: f32,
}

impl MeleeAttack {
    pub fn new() -> Self {
        Self {
            phase: MeleePhase::Idle,
            cooldown: 0,
            phase_remaining_ms: 0.0,
        }
    }

    pub fn can_swing(&self) -> bool {
        self.cooldown == 0 && self.phase == MeleePhase::Idle
    }

    pub fn is_attacking(&self) -> bool {
        self.phase != MeleePhase::Idle
    }
}

impl Default for MeleeAttack {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-kind skill cooldowns, decremented one tick at a time
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillCooldowns {
    ticks: [u32; crate::systems::skills::SkillKind::COUNT],
}

impl SkillCooldowns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remaining(&self, kind: crate::systems::skills::SkillKind) -> u32 {
        self.ticks[kind as usize]
    }

    pub fn arm(&mut self, kind: crate::systems::skills::SkillKind, ticks: u32) {
        self.ticks[kind as usize] = ticks;
    }

    /// Uniform per-tick decrement across all kinds
    pub fn tick(&mut self) {
        for t in &mut self.ticks {
            *t = t.saturating_sub(1);
        }
    }
}

/// Enemy AI state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiState {
    Idle,
    Patrol,
    Chase,
    Attack,
}

/// Enemy AI component - FSM state plus the tuning that drives it
#[derive(Debug, Clone, Copy)]
pub struct EnemyAi {
    pub state: AiState,
    pub detection_range: f32,
    pub attack_range: f32,
    pub move_speed: f32,
    pub patrol_distance: f32,
    /// x at spawn, the patrol anchor
    pub patrol_origin_x: f32,
    /// +1.0 or -1.0
    pub patrol_direction: f32,
    pub attack_damage: i32,
    pub attack_cooldown_ms: f32,
    /// Clock stamp of the last attack; None means the enemy has not
    /// attacked yet and may do so immediately
    pub last_attack_ms: Option<f32>,
    /// XP awarded to the player on kill
    pub exp_reward: u32,
}

impl EnemyAi {
    pub fn new(origin_x: f32, def: &crate::spawning::EnemyDef) -> Self {
        Self {
            state: AiState::Idle,
            detection_range: def.detection_range,
            attack_range: def.attack_range,
            move_speed: def.move_speed,
            patrol_distance: def.patrol_distance,
            patrol_origin_x: origin_x,
            patrol_direction: 1.0,
            attack_damage: def.damage,
            attack_cooldown_ms: def.attack_cooldown_ms,
            last_attack_ms: None,
            exp_reward: def.exp_reward,
        }
    }
}

/// Projectile motion kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileKind {
    /// Straight horizontal flight at constant velocity
    Ballistic,
    /// Rises to a tiered altitude, then tracks its target every tick
    Homing,
}

/// Which side cast a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Faction {
    Player,
    Enemy,
}

/// Projectile component
#[derive(Debug, Clone)]
pub struct Projectile {
    pub kind: ProjectileKind,
    pub faction: Faction,
    pub damage: i32,
    pub speed: f32,
    /// Homing target; re-validated every tick, never assumed live
    pub target: Option<hecs::Entity>,
    /// Altitude at which homing kicks in, fixed at spawn from target distance
    pub homing_altitude: f32,
    pub age_ms: f32,
    pub lifetime_ms: f32,
    /// Once false the projectile moves no further and deals no damage
    pub alive: bool,
}

impl Projectile {
    pub fn ballistic(damage: i32, speed: f32) -> Self {
        Self {
            kind: ProjectileKind::Ballistic,
            faction: Faction::Player,
            damage,
            speed,
            target: None,
            homing_altitude: 0.0,
            age_ms: 0.0,
            lifetime_ms: PROJECTILE_LIFETIME_MS,
            alive: true,
        }
    }

    pub fn homing(damage: i32, target: Option<hecs::Entity>, homing_altitude: f32) -> Self {
        Self {
            kind: ProjectileKind::Homing,
            faction: Faction::Player,
            damage,
            speed: HOMING_SPEED,
            target,
            homing_altitude,
            age_ms: 0.0,
            lifetime_ms: PROJECTILE_LIFETIME_MS,
            alive: true,
        }
    }

    pub fn expired(&self) -> bool {
        self.age_ms >= self.lifetime_ms
    }
}
