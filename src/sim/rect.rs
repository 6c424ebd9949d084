//! Axis-aligned rectangles
//!
//! Everything on the road is a box: the bike, every obstacle, and the road
//! band itself. Screen coordinates: x grows right, y grows down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap test. Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Shift the rectangle so it lies inside `bounds` (assumes it fits)
    pub fn clamp_inside(&mut self, bounds: &Rect) {
        if self.top() < bounds.top() {
            self.pos.y = bounds.top();
        }
        if self.bottom() > bounds.bottom() {
            self.pos.y = bounds.bottom() - self.size.y;
        }
        if self.left() < bounds.left() {
            self.pos.x = bounds.left();
        }
        if self.right() > bounds.right() {
            self.pos.x = bounds.right() - self.size.x;
        }
    }
}
