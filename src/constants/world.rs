//! World geometry and kinematics constants.

/// World rectangle width in pixels
pub const WORLD_WIDTH: f32 = 1600.0;
/// World rectangle height in pixels
pub const WORLD_HEIGHT: f32 = 600.0;
/// Top surface of the ground plane actors stand on
pub const GROUND_Y: f32 = 40.0;
/// Downward acceleration applied to actor bodies (pixels/s^2, y-up)
pub const GRAVITY: f32 = -800.0;
