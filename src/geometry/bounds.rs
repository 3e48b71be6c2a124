//! Axis-aligned rectangles in view coordinates (+y down).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Closed axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min: Vec2::new(min_x, min_y),
            max: Vec2::new(max_x, max_y),
        }
    }

    /// Rectangle of `size` whose bottom edge is centered on `bottom_center`.
    pub fn from_bottom_center(bottom_center: Vec2, size: Vec2) -> Self {
        Self {
            min: Vec2::new(bottom_center.x - size.x / 2.0, bottom_center.y - size.y),
            max: Vec2::new(bottom_center.x + size.x / 2.0, bottom_center.y),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Whether `point` lies inside or on the edge.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Whether the two rectangles overlap or touch.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// Nearest point inside the rectangle.
    pub fn clamp_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottom_center_layout() {
        let b = Bounds::from_bottom_center(Vec2::new(100.0, 200.0), Vec2::new(16.0, 110.0));
        assert_eq!(b.min, Vec2::new(92.0, 90.0));
        assert_eq!(b.max, Vec2::new(108.0, 200.0));
    }

    #[test]
    fn test_edges_are_inclusive() {
        let b = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert!(b.contains_point(Vec2::new(10.0, 0.0)));
        assert!(!b.contains_point(Vec2::new(10.1, 5.0)));
        assert!(b.intersects(&Bounds::new(10.0, 10.0, 20.0, 20.0)));
        assert!(!b.intersects(&Bounds::new(10.5, 0.0, 20.0, 20.0)));
    }

    #[test]
    fn test_clamp_point() {
        let b = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(b.clamp_point(Vec2::new(-5.0, 20.0)), Vec2::new(0.0, 10.0));
    }
}
