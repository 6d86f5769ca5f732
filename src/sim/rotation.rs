//! Drag-to-rotate controller
//!
//! A drag on either handle turns pointer motion around the handle's pivot into
//! a target angle. The body then walks toward that target in bounded steps,
//! stopping at the first step the collision predicate rejects, so it can never
//! tunnel through a wall in a single pointer move.

use glam::Vec2;

use super::body::{BodyShape, Handle, Pose};
use crate::{angle_to_point, normalize_degrees, shortest_angle_delta};

/// State captured when a drag starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationGesture {
    pub handle: Handle,
    /// Body rotation when the drag began (degrees)
    pub start_angle: f32,
    /// Pointer direction from the pivot when the drag began (degrees)
    pub start_pointer_angle: f32,
    pub pivot: Vec2,
}

impl RotationGesture {
    /// Raw (unsnapped) target for a pointer at `pointer`
    pub fn target_for(&self, pointer: Vec2) -> f32 {
        let current = angle_to_point(self.pivot, pointer);
        normalize_degrees(self.start_angle + (current - self.start_pointer_angle))
    }
}

/// Idle until a handle is grabbed, Dragging until the pointer is released
#[derive(Debug, Clone, Default)]
pub struct RotationController {
    gesture: Option<RotationGesture>,
}

impl RotationController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn gesture(&self) -> Option<&RotationGesture> {
        self.gesture.as_ref()
    }

    /// Idle -> Dragging. A second grab while dragging restarts the gesture.
    pub fn begin(&mut self, shape: &BodyShape, pose: &Pose, handle: Handle, pointer: Vec2) {
        let pivot = shape.handle_pivot(handle, pose);
        let gesture = RotationGesture {
            handle,
            start_angle: pose.rotation_deg,
            start_pointer_angle: angle_to_point(pivot, pointer),
            pivot,
        };
        log::debug!("Rotation drag started on {handle:?} handle: {gesture:?}");
        self.gesture = Some(gesture);
    }

    /// Target angle for a pointer move, snapped; `None` while idle
    pub fn target(&self, pointer: Vec2, snap_angles: &[f32], threshold: f32) -> Option<f32> {
        self.gesture
            .as_ref()
            .map(|g| snap_angle(g.target_for(pointer), snap_angles, threshold))
    }

    /// Dragging -> Idle. Never touches the pose.
    pub fn end(&mut self) {
        if self.gesture.take().is_some() {
            log::debug!("Rotation drag ended");
        }
    }
}

/// Land exactly on the first snap angle strictly closer than `threshold`
/// degrees (distance measured around the circle).
pub fn snap_angle(angle: f32, snap_angles: &[f32], threshold: f32) -> f32 {
    snap_angles
        .iter()
        .find(|&&snap| shortest_angle_delta(angle, snap).abs() < threshold)
        .map(|&snap| normalize_degrees(snap))
        .unwrap_or(angle)
}

/// Walk from `current` toward `target` in steps of at most `max_step` degrees.
///
/// Each step's candidate angle is handed to `blocked`; the walk commits steps
/// until the first blocked one and returns the last committed angle.
pub fn walk_to_angle(
    current: f32,
    target: f32,
    max_step: f32,
    mut blocked: impl FnMut(f32) -> bool,
) -> f32 {
    let delta = shortest_angle_delta(current, target);
    let steps = (delta.abs() / max_step).ceil() as u32;
    if steps == 0 {
        return current;
    }
    let increment = delta / steps as f32;

    let mut angle = current;
    for i in 1..=steps {
        // Land the final step exactly on the target
        let next = if i == steps {
            normalize_degrees(target)
        } else {
            normalize_degrees(angle + increment)
        };
        if blocked(next) {
            break;
        }
        angle = next;
    }
    angle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SNAP_ANGLES_DEG;

    #[test]
    fn test_snap_near_cardinal() {
        assert_eq!(snap_angle(92.0, &SNAP_ANGLES_DEG, 5.0), 90.0);
        assert_eq!(snap_angle(265.5, &SNAP_ANGLES_DEG, 5.0), 270.0);
        assert_eq!(snap_angle(3.0, &SNAP_ANGLES_DEG, 5.0), 0.0);
    }

    #[test]
    fn test_snap_wraps_around_zero() {
        assert_eq!(snap_angle(357.5, &SNAP_ANGLES_DEG, 5.0), 0.0);
    }

    #[test]
    fn test_no_snap_outside_threshold() {
        assert_eq!(snap_angle(84.0, &SNAP_ANGLES_DEG, 5.0), 84.0);
        // Threshold is exclusive
        assert_eq!(snap_angle(95.0, &SNAP_ANGLES_DEG, 5.0), 95.0);
        assert_eq!(snap_angle(45.0, &SNAP_ANGLES_DEG, 5.0), 45.0);
        // A tighter threshold leaves 86 alone
        assert_eq!(snap_angle(86.0, &SNAP_ANGLES_DEG, 3.0), 86.0);
        assert_eq!(snap_angle(92.0, &SNAP_ANGLES_DEG, 3.0), 90.0);
    }

    #[test]
    fn test_walk_unobstructed_reaches_target() {
        let mut visited = Vec::new();
        let end = walk_to_angle(0.0, 90.0, 5.0, |a| {
            visited.push(a);
            false
        });
        assert_eq!(end, 90.0);
        assert_eq!(visited.len(), 18);
        assert_eq!(visited[0], 5.0);
    }

    #[test]
    fn test_walk_stops_before_obstruction() {
        let end = walk_to_angle(0.0, 90.0, 5.0, |a| a > 47.0);
        assert_eq!(end, 45.0);
    }

    #[test]
    fn test_walk_blocked_immediately_keeps_current() {
        let end = walk_to_angle(30.0, 60.0, 5.0, |_| true);
        assert_eq!(end, 30.0);
    }

    #[test]
    fn test_walk_takes_short_way_round() {
        let mut visited = Vec::new();
        let end = walk_to_angle(350.0, 10.0, 5.0, |a| {
            visited.push(a);
            false
        });
        assert_eq!(end, 10.0);
        assert_eq!(visited, vec![355.0, 0.0, 5.0, 10.0]);
    }

    #[test]
    fn test_walk_uneven_steps() {
        // 12 degrees in three equal steps of 4
        let mut visited = Vec::new();
        walk_to_angle(0.0, 12.0, 5.0, |a| {
            visited.push(a);
            false
        });
        assert_eq!(visited, vec![4.0, 8.0, 12.0]);
    }

    #[test]
    fn test_walk_zero_delta() {
        let end = walk_to_angle(90.0, 90.0, 5.0, |_| panic!("no step expected"));
        assert_eq!(end, 90.0);
    }

    #[test]
    fn test_gesture_target() {
        let shape = BodyShape::default();
        let pose = Pose::new(100.0, 150.0, 30.0);
        let mut ctl = RotationController::new();
        assert!(ctl.target(Vec2::ZERO, &SNAP_ANGLES_DEG, 5.0).is_none());

        // Bottom pivot is (106, 250); start pointing along +x
        ctl.begin(&shape, &pose, Handle::Bottom, Vec2::new(156.0, 250.0));
        assert!(ctl.is_dragging());
        let g = *ctl.gesture().unwrap();
        assert_eq!(g.pivot, Vec2::new(106.0, 250.0));
        assert_eq!(g.start_angle, 30.0);

        // Pointer straight below the pivot: +90 on top of the start rotation
        let t = ctl.target(Vec2::new(106.0, 300.0), &SNAP_ANGLES_DEG, 5.0).unwrap();
        assert!((t - 120.0).abs() < 1e-3);

        // Pointer straight above: -90 wraps to 300
        let t = ctl.target(Vec2::new(106.0, 200.0), &SNAP_ANGLES_DEG, 5.0).unwrap();
        assert!((t - 300.0).abs() < 1e-3);

        ctl.end();
        assert!(!ctl.is_dragging());
        assert!(ctl.target(Vec2::new(106.0, 300.0), &SNAP_ANGLES_DEG, 5.0).is_none());
    }
}
