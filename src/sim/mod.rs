//! Deterministic simulation module
//!
//! All pose logic lives here. This module must be pure and deterministic:
//! - One frame step per host tick, no hidden timers
//! - Commands applied in arrival order
//! - Every committed pose passes the collision predicate
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod geometry;
pub mod level;
pub mod motion;
pub mod rotation;
pub mod state;
pub mod tick;

pub use body::{BodyShape, Handle, Pose};
pub use collision::{BodyCorners, Contact, body_corners, check_pose, is_colliding};
pub use geometry::{Bounds, Rect, Segment, rectangle_edges, rotate_point, segments_intersect};
pub use level::{Level, PlayField, Wall};
pub use motion::{InputState, Key, frame_delta};
pub use rotation::{RotationController, RotationGesture, snap_angle, walk_to_angle};
pub use state::{Engine, MoveOutcome, RotateOutcome, Snapshot};
pub use tick::{Command, CommandQueue, FrameReport};
