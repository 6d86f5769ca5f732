//! Construction-time errors
//!
//! A rejected move or rotation is not an error; these only cover inputs
//! that would leave the engine without a valid level to simulate.

/// Errors raised while building an [`Engine`](crate::Engine) or loading settings
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("play field must be finite and positive, got {width} x {height}")]
    InvalidPlayField { width: f32, height: f32 },
    #[error("wall {index} must have a finite position and positive size")]
    InvalidWall { index: usize },
    #[error("wall {index} lies entirely outside the play field")]
    WallOutsideField { index: usize },
    #[error("body shape {part} must be finite and positive")]
    InvalidBodyShape { part: &'static str },
    #[error("start pose ({x}, {y}, {rotation_deg} deg) collides with the level")]
    StartPoseColliding { x: f32, y: f32, rotation_deg: f32 },
    #[error("goal line must be finite, got {0}")]
    InvalidGoal(f32),
    #[error("invalid setting {name}: {value}")]
    InvalidSetting { name: &'static str, value: f32 },
    #[error("settings JSON error: {0}")]
    SettingsJson(#[from] serde_json::Error),
}
