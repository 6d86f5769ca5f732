//! Level layout: play field, walls, body shape, start pose and goal line

use serde::{Deserialize, Serialize};

use super::body::{BodyShape, Pose};
use super::collision::{Contact, check_pose};
use super::geometry::Rect;
use crate::consts::*;
use crate::error::Error;

/// Fixed obstacles are plain axis-aligned rectangles
pub type Wall = Rect;

/// World bounding box, anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayField {
    pub width: f32,
    pub height: f32,
}

impl PlayField {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Everything the engine needs to know about a maze
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub field: PlayField,
    /// Checked in order; the first wall hit is the one reported
    pub walls: Vec<Wall>,
    pub shape: BodyShape,
    pub start: Pose,
    /// The body wins once a committed x passes this line
    pub goal_x: f32,
}

impl Level {
    /// The reference maze: two wall pairs with a gap the T can only pass tilted
    pub fn reference() -> Self {
        Self {
            field: PlayField::new(FIELD_WIDTH, FIELD_HEIGHT),
            walls: vec![
                Rect::new(160.0, 20.0, 20.0, 100.0),
                Rect::new(160.0, 210.0, 20.0, 100.0),
                Rect::new(300.0, 20.0, 20.0, 100.0),
                Rect::new(300.0, 210.0, 20.0, 100.0),
            ],
            shape: BodyShape::default(),
            start: Pose::default(),
            goal_x: GOAL_X,
        }
    }

    /// Same field, shape, start and goal with no walls
    pub fn open() -> Self {
        Self {
            walls: Vec::new(),
            ..Self::reference()
        }
    }

    /// Fail fast on a layout the simulation cannot honor.
    ///
    /// Walls may overhang the field edge but not sit wholly outside it, and
    /// the start pose must already satisfy the collision predicate.
    pub fn validate(&self) -> Result<(), Error> {
        let PlayField { width, height } = self.field;
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(Error::InvalidPlayField { width, height });
        }

        let field = self.field.rect();
        for (index, wall) in self.walls.iter().enumerate() {
            if !wall.is_well_formed() {
                return Err(Error::InvalidWall { index });
            }
            if !wall.touches(&field) {
                return Err(Error::WallOutsideField { index });
            }
        }

        self.shape.validate()?;

        if !self.goal_x.is_finite() {
            return Err(Error::InvalidGoal(self.goal_x));
        }

        let Pose { x, y, rotation_deg } = self.start;
        if !x.is_finite() || !y.is_finite() || !rotation_deg.is_finite() {
            return Err(Error::StartPoseColliding { x, y, rotation_deg });
        }
        if check_pose(self, x, y, rotation_deg) != Contact::Clear {
            return Err(Error::StartPoseColliding { x, y, rotation_deg });
        }
        Ok(())
    }
}
