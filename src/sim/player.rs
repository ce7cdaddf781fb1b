//! Player bodies: running, jumping and staying on their own half

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::court::Court;
use super::geometry::{Aabb, set_bottom, set_left, set_right, set_top};
use super::state::Side;
use crate::consts::*;

/// What one player wants to do this tick, already resolved from raw input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerIntents {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
}

/// A player's body on the court
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerBody {
    pub side: Side,
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// False while in the air
    pub grounded: bool,
    /// Jump intent seen on the latest update (a held jump spikes harder)
    pub jump_held: bool,
}

impl PlayerBody {
    /// Create a body at its starting spot for `side`, standing on the ground
    pub fn new(side: Side, court: &Court) -> Self {
        Self {
            side,
            pos: Self::start_pos(side, court),
            vel: Vec2::ZERO,
            size: Vec2::splat(PLAYER_SIZE),
            grounded: true,
            jump_held: false,
        }
    }

    /// Starting spot: quarter court, feet on the ground
    pub fn start_pos(side: Side, court: &Court) -> Vec2 {
        Vec2::new(court.serve_x(side), court.ground_y - PLAYER_SIZE)
    }

    /// Put the body back on its starting spot at rest
    pub fn respawn(&mut self, court: &Court) {
        self.pos = Self::start_pos(self.side, court);
        self.vel = Vec2::ZERO;
        self.grounded = true;
        self.jump_held = false;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Horizontal range the body may occupy: its own half, kept clear of the half line
    pub fn lane(&self, court: &Court) -> (f32, f32) {
        match self.side {
            Side::Left => (0.0, court.half_line_x - HALF_LINE_MARGIN),
            Side::Right => (court.half_line_x + HALF_LINE_MARGIN, court.width),
        }
    }

    /// Advance one tick
    pub fn update(&mut self, intents: PlayerIntents, court: &Court) {
        self.jump_held = intents.jump;

        // Running
        if intents.move_left {
            self.vel.x = -PLAYER_RUN_SPEED;
        } else if intents.move_right {
            self.vel.x = PLAYER_RUN_SPEED;
        } else if self.vel.x.abs() > PLAYER_STOP_SPEED {
            self.vel.x *= PLAYER_RUN_DECAY;
        } else {
            self.vel.x = 0.0;
        }

        // Jumping
        if intents.jump {
            if self.grounded {
                self.vel.y = -PLAYER_JUMP_SPEED;
                self.grounded = false;
            } else if self.vel.y < 0.0
                && self.bounds().bottom() < court.ground_y - PLAYER_AIR_BOOST_CLEARANCE
            {
                self.vel.y -= PLAYER_AIR_BOOST;
            }
        } else if self.vel.y < 0.0 {
            // Letting go early cuts the arc short
            self.vel.y *= PLAYER_JUMP_RELEASE_DECAY;
        }

        self.vel.y = (self.vel.y + GRAVITY).min(PLAYER_MAX_FALL_SPEED);
        self.pos += self.vel;

        if self.bounds().bottom() >= court.ground_y {
            set_bottom(&mut self.pos, self.size.y, court.ground_y);
            self.vel.y = 0.0;
            self.grounded = true;
        }
        if self.pos.y < 0.0 {
            set_top(&mut self.pos, 0.0);
            self.vel.y = self.vel.y.max(0.0);
        }

        let (min_x, max_x) = self.lane(court);
        if self.bounds().left() <= min_x {
            set_left(&mut self.pos, min_x);
        }
        if self.bounds().right() >= max_x {
            set_right(&mut self.pos, self.size.x, max_x);
        }
    }
}
