//! Static court geometry

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Aabb;
use super::state::Side;
use crate::consts::*;

/// The playing area: walls, ceiling, ground line, half line and net
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Court {
    pub width: f32,
    pub height: f32,
    /// y of the playing surface; bodies rest with their bottom edge here
    pub ground_y: f32,
    /// x that splits the court into the two halves
    pub half_line_x: f32,
    /// The net, straddling the half line and standing on the ground
    pub net: Aabb,
}

impl Default for Court {
    fn default() -> Self {
        Self::new(COURT_WIDTH, COURT_HEIGHT)
    }
}

impl Court {
    /// Build a court of the given size with the standard ground strip and net
    pub fn new(width: f32, height: f32) -> Self {
        let ground_y = height - GROUND_THICKNESS;
        let half_line_x = width / 2.0;
        let net = Aabb::new(
            half_line_x - NET_WIDTH / 2.0,
            ground_y - NET_HEIGHT,
            NET_WIDTH,
            NET_HEIGHT,
        );
        Self {
            width,
            height,
            ground_y,
            half_line_x,
            net,
        }
    }

    /// Whole court as a box
    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(Vec2::ZERO, Vec2::new(self.width, self.height))
    }

    /// Serve x for a side (quarter court from the matching wall)
    pub fn serve_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.width / 4.0,
            Side::Right => 3.0 * self.width / 4.0,
        }
    }
}
