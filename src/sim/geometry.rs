//! Geometry kernel for rotated rectangles
//!
//! Rectangles are stored axis-aligned in their own frame and rotated about an
//! arbitrary pivot on demand. Corners always run top-left, top-right,
//! bottom-right, bottom-left, and edges connect them in that order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (top-left corner + size, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Same rectangle moved by `offset`
    #[inline]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    pub fn corners(&self) -> [Vec2; 4] {
        let (min, max) = (self.min(), self.max());
        [
            min,
            Vec2::new(max.x, min.y),
            max,
            Vec2::new(min.x, max.y),
        ]
    }

    /// The four unrotated edges
    pub fn edges(&self) -> [Segment; 4] {
        edges_of(&self.corners())
    }

    /// Closed containment test
    pub fn contains(&self, p: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }

    /// True if the two rectangles share any area or boundary
    pub fn touches(&self, other: &Rect) -> bool {
        self.x <= other.x + other.width
            && other.x <= self.x + self.width
            && self.y <= other.y + other.height
            && other.y <= self.y + self.height
    }

    /// Finite position and strictly positive size
    pub fn is_well_formed(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Line segment between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn intersects(&self, other: &Segment) -> bool {
        segments_intersect(self.start, self.end, other.start, other.end)
    }
}

/// Rotate `p` about `center` by `angle` radians.
///
/// Positive angles turn from +x toward +y, which on screen (y down) is clockwise.
#[inline]
pub fn rotate_point(p: Vec2, center: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    let d = p - center;
    Vec2::new(cos * d.x - sin * d.y + center.x, sin * d.x + cos * d.y + center.y)
}

/// Orientation test: true if `c` lies strictly counter-clockwise of `a -> b`
#[inline]
fn ccw(a: Vec2, b: Vec2, c: Vec2) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

/// Proper segment intersection via orientation signs.
///
/// Each segment's endpoints must fall on opposite sides of the other segment.
/// Collinear overlaps and touching endpoints are not special-cased, so their
/// classification depends on which side the strict comparison falls.
#[inline]
pub fn segments_intersect(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> bool {
    ccw(p1, p3, p4) != ccw(p2, p3, p4) && ccw(p1, p2, p3) != ccw(p1, p2, p4)
}

/// Corners of `rect` rotated about `center` by `angle` radians
pub fn rotated_corners(rect: &Rect, center: Vec2, angle: f32) -> [Vec2; 4] {
    rect.corners().map(|p| rotate_point(p, center, angle))
}

/// Closed polygon edges: corner i to corner i+1, wrapping to the first
pub fn edges_of(corners: &[Vec2; 4]) -> [Segment; 4] {
    std::array::from_fn(|i| Segment::new(corners[i], corners[(i + 1) % 4]))
}

/// Edges of `rect` after rotating it about `center` by `angle` radians
pub fn rectangle_edges(rect: &Rect, center: Vec2, angle: f32) -> [Segment; 4] {
    edges_of(&rotated_corners(rect, center, angle))
}

/// Axis-aligned bounding box accumulated from points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Bounds containing nothing; grows with `include`
    pub fn empty() -> Self {
        Self {
            min: Vec2::splat(f32::INFINITY),
            max: Vec2::splat(f32::NEG_INFINITY),
        }
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vec2>) -> Self {
        let mut bounds = Self::empty();
        for &p in points {
            bounds.include(p);
        }
        bounds
    }

    #[inline]
    pub fn include(&mut self, p: Vec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// True if every point lies within [0, width] x [0, height]
    pub fn within(&self, width: f32, height: f32) -> bool {
        self.min.x >= 0.0 && self.min.y >= 0.0 && self.max.x <= width && self.max.y <= height
    }
}
