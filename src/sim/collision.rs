//! Collision predicate for the T-shaped body
//!
//! The body is the union of three rectangles, which is concave, so instead of a
//! separating-axis test every body edge is tested against every wall edge.
//! A cheap bounding-box check against the play field runs first.

use glam::Vec2;

use super::body::BodyShape;
use super::geometry::{Bounds, edges_of, rotated_corners};
use super::level::Level;

/// Rotated corners of stem, top bar and bottom bar (in that order)
pub type BodyCorners = [[Vec2; 4]; 3];

/// Why a pose was accepted or rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Clear,
    /// Some corner left the play field
    OutOfBounds,
    /// A body edge crosses an edge of this wall (index into `Level::walls`)
    Wall(usize),
}

impl Contact {
    #[inline]
    pub fn is_clear(&self) -> bool {
        matches!(self, Contact::Clear)
    }
}

/// Corners of all three body rectangles at a candidate pose
pub fn body_corners(shape: &BodyShape, x: f32, y: f32, rotation_deg: f32) -> BodyCorners {
    let origin = Vec2::new(x, y);
    let pivot = shape.pivot(origin);
    let angle = rotation_deg.to_radians();
    shape
        .parts(origin)
        .map(|part| rotated_corners(&part, pivot, angle))
}

/// Classify a candidate pose against the level.
///
/// Pure: the level is only read. Walls are checked in order and the first
/// crossing wins.
pub fn check_pose(level: &Level, x: f32, y: f32, rotation_deg: f32) -> Contact {
    let corners = body_corners(&level.shape, x, y, rotation_deg);

    let bounds = Bounds::from_points(corners.iter().flatten());
    if !bounds.within(level.field.width, level.field.height) {
        return Contact::OutOfBounds;
    }

    let body_edges: Vec<_> = corners.iter().flat_map(edges_of).collect();

    for (index, wall) in level.walls.iter().enumerate() {
        let wall_edges = wall.edges();
        let crossed = body_edges
            .iter()
            .any(|body_edge| wall_edges.iter().any(|wall_edge| body_edge.intersects(wall_edge)));
        if crossed {
            return Contact::Wall(index);
        }
    }

    Contact::Clear
}

/// True if the candidate pose leaves the field or crosses any wall
#[inline]
pub fn is_colliding(level: &Level, x: f32, y: f32, rotation_deg: f32) -> bool {
    !check_pose(level, x, y, rotation_deg).is_clear()
}
