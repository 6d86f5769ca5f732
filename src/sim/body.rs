//! The movable T-shaped body
//!
//! Body-local layout (before rotation), with the pose position at the stem's
//! top-left corner:
//! - stem: `stem_width x stem_height` at the origin
//! - top bar: centered on the stem, flush with its top
//! - bottom bar: centered on the stem, flush with its bottom
//!
//! The whole body rotates about the center of the stem.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Rect, rotate_point};
use crate::consts::*;
use crate::error::Error;

/// Position + rotation of the body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Stem top-left x (before rotation)
    pub x: f32,
    /// Stem top-left y (before rotation)
    pub y: f32,
    /// Rotation in degrees, [0, 360)
    pub rotation_deg: f32,
}

impl Pose {
    pub const fn new(x: f32, y: f32, rotation_deg: f32) -> Self {
        Self { x, y, rotation_deg }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn rotation_rad(&self) -> f32 {
        self.rotation_deg.to_radians()
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(START_X, START_Y, 0.0)
    }
}

/// Which rotation handle a drag started on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handle {
    /// Past the top bar; drags pivot about the stem's top-center
    Top,
    /// Past the bottom bar; drags pivot about the stem's bottom-center
    Bottom,
}

impl Handle {
    pub const ALL: [Handle; 2] = [Handle::Top, Handle::Bottom];
}

/// Fixed dimensions of the T
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyShape {
    pub stem_width: f32,
    pub stem_height: f32,
    pub top_bar_width: f32,
    pub top_bar_height: f32,
    pub bottom_bar_width: f32,
    pub bottom_bar_height: f32,
    /// Side of the square hit area of each handle
    pub handle_size: f32,
    /// How far each handle reaches past its end of the stem
    pub handle_offset: f32,
}

impl Default for BodyShape {
    fn default() -> Self {
        Self {
            stem_width: STEM_WIDTH,
            stem_height: STEM_HEIGHT,
            top_bar_width: TOP_BAR_WIDTH,
            top_bar_height: TOP_BAR_HEIGHT,
            bottom_bar_width: BOTTOM_BAR_WIDTH,
            bottom_bar_height: BOTTOM_BAR_HEIGHT,
            handle_size: HANDLE_SIZE,
            handle_offset: HANDLE_OFFSET,
        }
    }
}

impl BodyShape {
    /// Unrotated stem, top bar and bottom bar with the stem's top-left at `origin`
    pub fn parts(&self, origin: Vec2) -> [Rect; 3] {
        let stem = Rect::new(origin.x, origin.y, self.stem_width, self.stem_height);
        let top = Rect::new(
            origin.x - (self.top_bar_width - self.stem_width) / 2.0,
            origin.y,
            self.top_bar_width,
            self.top_bar_height,
        );
        let bottom = Rect::new(
            origin.x - (self.bottom_bar_width - self.stem_width) / 2.0,
            origin.y + self.stem_height - self.bottom_bar_height,
            self.bottom_bar_width,
            self.bottom_bar_height,
        );
        [stem, top, bottom]
    }

    /// Rotation pivot: center of the stem
    #[inline]
    pub fn pivot(&self, origin: Vec2) -> Vec2 {
        origin + Vec2::new(self.stem_width / 2.0, self.stem_height / 2.0)
    }

    /// Point a drag on `handle` measures pointer angles around.
    ///
    /// Taken from the unrotated stem ends at the pose position.
    pub fn handle_pivot(&self, handle: Handle, pose: &Pose) -> Vec2 {
        let top_center = pose.position() + Vec2::new(self.stem_width / 2.0, 0.0);
        match handle {
            Handle::Top => top_center,
            Handle::Bottom => top_center + Vec2::new(0.0, self.stem_height),
        }
    }

    /// Handle center in body-local space (stem top-left at the origin)
    fn handle_local_center(&self, handle: Handle) -> Vec2 {
        let y = match handle {
            Handle::Top => self.handle_size / 2.0 - self.handle_offset,
            Handle::Bottom => self.stem_height + self.handle_offset - self.handle_size / 2.0,
        };
        Vec2::new(self.stem_width / 2.0, y)
    }

    /// World-space center of `handle`; handles turn with the body
    pub fn handle_center(&self, handle: Handle, pose: &Pose) -> Vec2 {
        let origin = pose.position();
        rotate_point(
            origin + self.handle_local_center(handle),
            self.pivot(origin),
            pose.rotation_rad(),
        )
    }

    /// True if `point` falls inside the (rotated) square hit area of `handle`
    pub fn handle_contains(&self, handle: Handle, pose: &Pose, point: Vec2) -> bool {
        let origin = pose.position();
        // Undo the body rotation so the hit area is axis-aligned again
        let local = rotate_point(point, self.pivot(origin), -pose.rotation_rad()) - origin;
        let half = self.handle_size / 2.0;
        let center = self.handle_local_center(handle);
        (local - center).abs().max_element() <= half
    }

    pub fn validate(&self) -> Result<(), Error> {
        let dims = [
            ("stem_width", self.stem_width),
            ("stem_height", self.stem_height),
            ("top_bar_width", self.top_bar_width),
            ("top_bar_height", self.top_bar_height),
            ("bottom_bar_width", self.bottom_bar_width),
            ("bottom_bar_height", self.bottom_bar_height),
            ("handle_size", self.handle_size),
        ];
        for (part, value) in dims {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidBodyShape { part });
            }
        }
        if !self.handle_offset.is_finite() {
            return Err(Error::InvalidBodyShape {
                part: "handle_offset",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_layout() {
        let shape = BodyShape::default();
        let [stem, top, bottom] = shape.parts(Vec2::new(100.0, 150.0));
        assert_eq!(stem, Rect::new(100.0, 150.0, 12.0, 100.0));
        assert_eq!(top, Rect::new(56.0, 150.0, 100.0, 12.0));
        assert_eq!(bottom, Rect::new(81.0, 238.0, 50.0, 12.0));
        // Bars are centered on the stem
        assert_eq!(top.center().x, stem.center().x);
        assert_eq!(bottom.center().x, stem.center().x);
    }

    #[test]
    fn test_pivots() {
        let shape = BodyShape::default();
        let pose = Pose::new(100.0, 150.0, 0.0);
        assert_eq!(shape.pivot(pose.position()), Vec2::new(106.0, 200.0));
        assert_eq!(shape.handle_pivot(Handle::Top, &pose), Vec2::new(106.0, 150.0));
        assert_eq!(shape.handle_pivot(Handle::Bottom, &pose), Vec2::new(106.0, 250.0));
    }

    #[test]
    fn test_handle_centers_follow_rotation() {
        let shape = BodyShape::default();
        let upright = Pose::new(100.0, 150.0, 0.0);
        assert_eq!(shape.handle_center(Handle::Top, &upright), Vec2::new(106.0, 142.0));
        assert_eq!(shape.handle_center(Handle::Bottom, &upright), Vec2::new(106.0, 258.0));

        // Half turn swaps the ends about the stem center (106, 200)
        let flipped = Pose::new(100.0, 150.0, 180.0);
        let top = shape.handle_center(Handle::Top, &flipped);
        assert!((top - Vec2::new(106.0, 258.0)).length() < 1e-3);
    }

    #[test]
    fn test_handle_contains() {
        let shape = BodyShape::default();
        let pose = Pose::new(100.0, 150.0, 0.0);
        assert!(shape.handle_contains(Handle::Top, &pose, Vec2::new(106.0, 142.0)));
        assert!(shape.handle_contains(Handle::Top, &pose, Vec2::new(117.0, 131.0)));
        assert!(!shape.handle_contains(Handle::Top, &pose, Vec2::new(106.0, 200.0)));
        assert!(!shape.handle_contains(Handle::Bottom, &pose, Vec2::new(106.0, 142.0)));

        // Quarter turn: bottom handle swings to the left of the pivot
        let turned = Pose::new(100.0, 150.0, 90.0);
        assert!(shape.handle_contains(Handle::Bottom, &turned, Vec2::new(48.0, 200.0)));
        assert!(!shape.handle_contains(Handle::Bottom, &turned, Vec2::new(106.0, 258.0)));
    }

    #[test]
    fn test_validate_rejects_degenerate_parts() {
        assert!(BodyShape::default().validate().is_ok());
        let shape = BodyShape {
            top_bar_height: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            shape.validate(),
            Err(Error::InvalidBodyShape {
                part: "top_bar_height"
            })
        ));
    }
}
