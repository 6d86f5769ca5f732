//! Engine state and the commands that change it
//!
//! `Engine` owns the only mutable copy of the pose. Every change goes through
//! `try_move` or `try_rotate_to`, both gated by the collision predicate, so the
//! committed pose is always valid.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Handle, Pose};
use super::collision::{BodyCorners, Contact, body_corners, check_pose};
use super::level::Level;
use super::motion::{InputState, Key, frame_delta};
use super::rotation::{RotationController, walk_to_angle};
use super::tick::CommandQueue;
use crate::error::Error;
use crate::normalize_degrees;
use crate::settings::Settings;

/// Result of a translation attempt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// No keys held, nothing attempted
    Idle,
    /// Committed the new position
    Moved { x: f32, y: f32 },
    /// Candidate rejected; position unchanged
    Blocked,
}

/// Result of a rotation attempt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RotateOutcome {
    /// Already at the target
    Unchanged,
    /// Walked all the way to the target
    Reached { rotation_deg: f32 },
    /// Stopped short of `target_deg` at the last unobstructed step
    Stopped { rotation_deg: f32, target_deg: f32 },
}

/// Read-only view for hosts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub pose: Pose,
    pub won: bool,
    pub dragging: bool,
    pub frame: u64,
}

/// The simulation core
#[derive(Debug, Clone)]
pub struct Engine {
    level: Level,
    settings: Settings,
    pose: Pose,
    input: InputState,
    rotation: RotationController,
    /// Latched once the goal line is crossed
    won: bool,
    frame: u64,
    pub(super) queue: CommandQueue,
}

impl Engine {
    /// Validate the level and settings, then place the body at the start pose
    pub fn new(level: Level, settings: Settings) -> Result<Self, Error> {
        settings.validate()?;
        level.validate()?;
        let start = level.start;
        let pose = Pose::new(start.x, start.y, normalize_degrees(start.rotation_deg));
        log::info!(
            "Engine ready: {} walls, field {}x{}, start {pose:?}",
            level.walls.len(),
            level.field.width,
            level.field.height
        );
        Ok(Self {
            level,
            settings,
            pose,
            input: InputState::default(),
            rotation: RotationController::new(),
            won: false,
            frame: 0,
            queue: CommandQueue::new(),
        })
    }

    /// Reference maze with default settings
    pub fn reference() -> Result<Self, Error> {
        Self::new(Level::reference(), Settings::default())
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Current committed pose
    #[inline]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    #[inline]
    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn is_dragging(&self) -> bool {
        self.rotation.is_dragging()
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Number of frames advanced so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pose: self.pose,
            won: self.won,
            dragging: self.is_dragging(),
            frame: self.frame,
        }
    }

    /// Collision predicate against this engine's level
    pub fn check_pose(&self, x: f32, y: f32, rotation_deg: f32) -> Contact {
        check_pose(&self.level, x, y, rotation_deg)
    }

    pub fn is_colliding(&self, x: f32, y: f32, rotation_deg: f32) -> bool {
        !self.check_pose(x, y, rotation_deg).is_clear()
    }

    /// Rotated corners of the body at the committed pose, for rendering
    pub fn body_outline(&self) -> BodyCorners {
        body_corners(
            &self.level.shape,
            self.pose.x,
            self.pose.y,
            self.pose.rotation_deg,
        )
    }

    /// Which handle (if any) lies under the pointer
    pub fn handle_at(&self, x: f32, y: f32) -> Option<Handle> {
        let point = Vec2::new(x, y);
        Handle::ALL
            .into_iter()
            .find(|&h| self.level.shape.handle_contains(h, &self.pose, point))
    }

    // === Commands ===

    /// Translate by `(dx, dy)` at the current rotation, all or nothing
    pub fn try_move(&mut self, dx: f32, dy: f32) -> MoveOutcome {
        if dx == 0.0 && dy == 0.0 {
            return MoveOutcome::Idle;
        }
        let (x, y) = (self.pose.x + dx, self.pose.y + dy);
        match self.check_pose(x, y, self.pose.rotation_deg) {
            Contact::Clear => {
                self.pose.x = x;
                self.pose.y = y;
                if !self.won && x > self.level.goal_x {
                    self.won = true;
                    log::info!("Goal reached at x = {x} (frame {})", self.frame);
                }
                MoveOutcome::Moved { x, y }
            }
            contact => {
                log::debug!("Move to ({x}, {y}) rejected: {contact:?}");
                MoveOutcome::Blocked
            }
        }
    }

    /// Rotate toward `target_deg` in place, stopping at the first obstruction
    pub fn try_rotate_to(&mut self, target_deg: f32) -> RotateOutcome {
        let target = normalize_degrees(target_deg);
        let current = self.pose.rotation_deg;
        if target == current {
            return RotateOutcome::Unchanged;
        }

        let Pose { x, y, .. } = self.pose;
        let level = &self.level;
        let reached = walk_to_angle(current, target, self.settings.rotation_step_deg, |angle| {
            !check_pose(level, x, y, angle).is_clear()
        });
        self.pose.rotation_deg = reached;

        if reached == target {
            RotateOutcome::Reached {
                rotation_deg: reached,
            }
        } else {
            log::debug!("Rotation toward {target} stopped at {reached}");
            RotateOutcome::Stopped {
                rotation_deg: reached,
                target_deg: target,
            }
        }
    }

    // === Input events ===

    pub fn on_key_down(&mut self, key: Key) {
        self.input.press(key);
    }

    pub fn on_key_up(&mut self, key: Key) {
        self.input.release(key);
    }

    /// Grab a rotation handle with the pointer at `(x, y)`
    pub fn on_pointer_down(&mut self, handle: Handle, x: f32, y: f32) {
        self.rotation
            .begin(&self.level.shape, &self.pose, handle, Vec2::new(x, y));
    }

    /// Rotate toward the dragged angle; `None` if no drag is active
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> Option<RotateOutcome> {
        let target = self.rotation.target(
            Vec2::new(x, y),
            &self.settings.snap_angles_deg,
            self.settings.snap_threshold_deg,
        )?;
        Some(self.try_rotate_to(target))
    }

    /// Release the drag wherever the pointer is
    pub fn on_pointer_up(&mut self) {
        self.rotation.end();
    }

    /// One frame of held-key movement
    pub fn advance_frame(&mut self) -> MoveOutcome {
        self.frame += 1;
        let delta = frame_delta(&self.input, self.settings.move_speed);
        self.try_move(delta.x, delta.y)
    }
}
