//! T-Maze - a rigid T-shaped body threaded through a maze of walls
//!
//! Core modules:
//! - `sim`: Deterministic kinematic simulation (geometry, collision, controllers)
//! - `settings`: Tunable movement/rotation constants
//! - `error`: Construction-time contract violations
//!
//! Rendering and raw event wiring live in the host; the engine only
//! validates and commits poses.

pub mod error;
pub mod settings;
pub mod sim;

pub use error::Error;
pub use settings::Settings;
pub use sim::{Engine, Level, Pose};

use glam::Vec2;

/// Reference layout constants
pub mod consts {
    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 300.0;

    /// Vertical stem of the T
    pub const STEM_WIDTH: f32 = 12.0;
    pub const STEM_HEIGHT: f32 = 100.0;
    /// Bar across the top of the stem
    pub const TOP_BAR_WIDTH: f32 = 100.0;
    pub const TOP_BAR_HEIGHT: f32 = 12.0;
    /// Shorter foot across the bottom of the stem
    pub const BOTTOM_BAR_WIDTH: f32 = 50.0;
    pub const BOTTOM_BAR_HEIGHT: f32 = 12.0;

    /// Rotation handles (square hit area, centered past each stem end)
    pub const HANDLE_SIZE: f32 = 24.0;
    pub const HANDLE_OFFSET: f32 = 20.0;

    /// Starting pose
    pub const START_X: f32 = 100.0;
    pub const START_Y: f32 = 150.0;

    /// Body wins once its x passes this line
    pub const GOAL_X: f32 = 500.0;

    /// Movement per held key per frame
    pub const MOVE_SPEED: f32 = 3.0;
    /// Largest angular step taken while walking toward a drag target (degrees)
    pub const ROTATION_STEP_DEG: f32 = 5.0;
    /// Drag targets closer than this to a snap angle land on it exactly (degrees)
    pub const SNAP_THRESHOLD_DEG: f32 = 5.0;
    pub const SNAP_ANGLES_DEG: [f32; 4] = [0.0, 90.0, 180.0, 270.0];
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if a >= 360.0 { 0.0 } else { a }
}

/// Shortest signed rotation from `from` to `to`, in (-180, 180] degrees
#[inline]
pub fn shortest_angle_delta(from: f32, to: f32) -> f32 {
    let d = (to - from).rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Direction from `pivot` to `point` in degrees (screen coordinates, y down)
#[inline]
pub fn angle_to_point(pivot: Vec2, point: Vec2) -> f32 {
    let d = point - pivot;
    d.y.atan2(d.x).to_degrees()
}
