//! 2D geometry helpers: axis-aligned boxes and steering directions
//!
//! Positions are screen-space pixels with +y pointing down, matching the
//! presentation layer. Boxes are anchored at their top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Box of `size` whose centre sits at `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size * 0.5,
            size,
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Strict overlap test. Boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Top-left position that keeps a box of this size fully inside `bounds`.
    ///
    /// A box larger than the bounds is pinned to the bounds' top-left corner.
    pub fn clamped_within(&self, bounds: &Aabb) -> Vec2 {
        let max = (bounds.min + bounds.size - self.size).max(bounds.min);
        self.min.clamp(bounds.min, max)
    }
}

/// Unit vector pointing from `from` to `to`.
///
/// Coincident points yield `Vec2::ZERO` instead of dividing by zero, which the
/// hostile AI treats as "stay put".
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    let delta = to - from;
    let dist = delta.length();
    if dist == 0.0 {
        Vec2::ZERO
    } else {
        delta / dist
    }
}

/// Facing angle in degrees for a screen-space direction (counter-clockwise
/// from +x, with y flipped so "up" on screen is +90).
pub fn facing_degrees(direction: Vec2) -> f32 {
    (-direction.y).atan2(direction.x).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_to_is_unit_length() {
        let dir = direction_to(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0));
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!((dir.x - 0.6).abs() < 1e-6);
        assert!((dir.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_direction_to_coincident_points_is_zero() {
        let p = Vec2::new(12.5, -3.0);
        assert_eq!(direction_to(p, p), Vec2::ZERO);
    }

    #[test]
    fn test_intersects_excludes_shared_edges() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let touching = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        let overlapping = Aabb::new(Vec2::new(9.5, 9.5), Vec2::new(10.0, 10.0));
        assert!(!a.intersects(&touching));
        assert!(a.intersects(&overlapping));
        assert!(overlapping.intersects(&a));
    }

    #[test]
    fn test_clamped_within_keeps_box_inside() {
        let field = Aabb::new(Vec2::ZERO, Vec2::new(100.0, 50.0));
        let escaped = Aabb::new(Vec2::new(95.0, -7.0), Vec2::new(30.0, 30.0));
        assert_eq!(escaped.clamped_within(&field), Vec2::new(70.0, 0.0));
    }

    #[test]
    fn test_centered_round_trips_center() {
        let b = Aabb::centered(Vec2::new(50.0, 40.0), Vec2::new(30.0, 30.0));
        assert_eq!(b.min, Vec2::new(35.0, 25.0));
        assert_eq!(b.center(), Vec2::new(50.0, 40.0));
    }

    #[test]
    fn test_facing_degrees_screen_up_is_ninety() {
        assert!((facing_degrees(Vec2::new(0.0, -1.0)) - 90.0).abs() < 1e-4);
        assert!(facing_degrees(Vec2::new(1.0, 0.0)).abs() < 1e-4);
    }
}
