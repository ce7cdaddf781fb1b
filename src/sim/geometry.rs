//! Axis-aligned box geometry shared by the court, the players and the ball
//!
//! Screen coordinates: x grows right, y grows down, `pos` is the top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
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

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap test; boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Whether `other` lies fully inside this box (edges included)
    #[cfg(test)]
    pub fn contains(&self, other: &Aabb) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }
}

/// Move a box so that its left edge sits at `x`
#[inline]
pub fn set_left(pos: &mut Vec2, x: f32) {
    pos.x = x;
}

/// Move a box of width `w` so that its right edge sits at `x`
#[inline]
pub fn set_right(pos: &mut Vec2, w: f32, x: f32) {
    pos.x = x - w;
}

/// Move a box so that its top edge sits at `y`
#[inline]
pub fn set_top(pos: &mut Vec2, y: f32) {
    pos.y = y;
}

/// Move a box of height `h` so that its bottom edge sits at `y`
#[inline]
pub fn set_bottom(pos: &mut Vec2, h: f32, y: f32) {
    pos.y = y - h;
}
