//! Beaker holding the solution.
//!
//! The beaker is filled to the brim, so its bounds are also the liquid region.

use glam::Vec2;

use super::Bounds;
use crate::config::BeakerParameters;

/// Beaker placement, origin at the bottom-center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beaker {
    /// Bottom-center
    pub position: Vec2,
    pub size: Vec2,
}

impl Beaker {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    pub fn from_parameters(params: &BeakerParameters) -> Self {
        Self::new(
            Vec2::new(params.x, params.y),
            Vec2::new(params.width, params.height),
        )
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn left(&self) -> f32 {
        self.position.x - self.size.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x / 2.0
    }

    /// Liquid surface
    pub fn top(&self) -> f32 {
        self.position.y - self.size.y
    }

    pub fn bottom(&self) -> f32 {
        self.position.y
    }

    /// Liquid region.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_bottom_center(self.position, self.size)
    }

    /// Whether `point` is in the liquid.
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.bounds().contains_point(point)
    }
}

impl Default for Beaker {
    fn default() -> Self {
        Self::from_parameters(&BeakerParameters::default())
    }
}
