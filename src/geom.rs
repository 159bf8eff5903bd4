//! Shared 2D geometry for label placement.
//!
//! Points and directions are `glam::Vec2` in map units. The collision
//! primitives here are consumed by the placement core and by whatever
//! collision policy sits downstream: an oriented box for precise
//! rotated-rectangle tests and its axis-aligned extent for broad-phase
//! rejection.

use glam::Vec2;

/// A 2D point or direction in map units.
pub type Point = Vec2;

/// Rotate `v` by `angle` radians (counter-clockwise in a y-up frame).
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}

/// Total length of a polyline, summed over its segments.
pub fn path_length(points: &[Point]) -> f32 {
    points.windows(2).map(|pair| (pair[1] - pair[0]).length()).sum()
}

/// Axis-aligned bounding box, stored as min/max corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point,
    pub max: Point,
}

impl Aabb {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Smallest box containing all of `points`. Empty input collapses to
    /// a zero box at the origin.
    pub fn from_points(points: &[Point]) -> Self {
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        for &p in points {
            min = min.min(p);
            max = max.max(p);
        }
        if points.is_empty() {
            return Self {
                min: Vec2::ZERO,
                max: Vec2::ZERO,
            };
        }
        Self { min, max }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        (self.min + self.max) * 0.5
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        !(self.max.x <= other.min.x
            || other.max.x <= self.min.x
            || self.max.y <= other.min.y
            || other.max.y <= self.min.y)
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Oriented bounding box: a rectangle at an arbitrary rotation.
///
/// Corners are precomputed at construction; the box is immutable after
/// that. `angle` follows the placement convention: rotation applied in a
/// y-down display frame, so callers pass the negated geometric angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBox {
    center: Point,
    half_extent: Vec2,
    angle: f32,
    corners: [Point; 4],
}

impl OrientedBox {
    pub fn new(center: Point, half_width: f32, half_height: f32, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        const SIGNS: [(f32, f32); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];
        let mut corners = [Vec2::ZERO; 4];
        for (corner, &(sx, sy)) in corners.iter_mut().zip(SIGNS.iter()) {
            let lx = sx * half_width;
            let ly = sy * half_height;
            *corner = Vec2::new(center.x + lx * cos - ly * sin, center.y + lx * sin + ly * cos);
        }
        Self {
            center,
            half_extent: Vec2::new(half_width, half_height),
            angle,
            corners,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn half_extent(&self) -> Vec2 {
        self.half_extent
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn corners(&self) -> &[Point; 4] {
        &self.corners
    }

    /// Axis-aligned extent containing the rotated rectangle.
    pub fn extent(&self) -> Aabb {
        Aabb::from_points(&self.corners)
    }

    fn project(&self, axis: Vec2) -> (f32, f32) {
        let mut lo = f32::INFINITY;
        let mut hi = f32::NEG_INFINITY;
        for corner in &self.corners {
            let dot = corner.dot(axis);
            lo = lo.min(dot);
            hi = hi.max(dot);
        }
        (lo, hi)
    }

    /// True if the interiors of two boxes overlap (separating axis test).
    /// Touching along a shared edge or corner does not count.
    pub fn overlaps(&self, other: &OrientedBox) -> bool {
        for rect in [self, other] {
            // Two edge normals per rectangle; opposite edges are parallel
            // and give the same axis.
            for i in 0..2 {
                let edge = rect.corners[i + 1] - rect.corners[i];
                let axis = Vec2::new(-edge.y, edge.x);
                let (min_a, max_a) = self.project(axis);
                let (min_b, max_b) = other.project(axis);
                if max_a <= min_b || max_b <= min_a {
                    return false;
                }
            }
        }
        true
    }
}
