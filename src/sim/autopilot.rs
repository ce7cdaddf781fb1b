//! Idle/demo mode: a simple controller that plays one side
//!
//! Chases the spot where the ball will come down to head height, stands a
//! little behind it so head hits send it toward the net, and jumps when the
//! ball drops close. Each touch re-rolls a seeded aiming error, so two
//! autopilots trade points instead of rallying forever.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::geometry::{set_left, set_right};
use super::player::PlayerIntents;
use super::state::{Match, Side};
use crate::consts::*;

/// Give up predicting the landing spot after this many ticks
const PREDICT_TICKS: u32 = 120;
/// Widest aiming error, either way, rolled once per touch
pub const AIM_SPREAD: f32 = 150.0;
/// Horizontal distance (body center to target) considered "in position"
const POSITION_SLACK: f32 = 8.0;
/// Stand this far behind the ball, on the side away from the net
const HIT_OFFSET: f32 = 20.0;
/// Jump when the ball is falling and within this height above the head
const JUMP_WINDOW: f32 = 140.0;
/// ...and within this horizontal distance
const JUMP_REACH: f32 = 60.0;

/// Snapshot of the rally used to notice a new touch or a new serve
type RallyKey = (Option<Side>, u32, u32);

/// Controller for one side, with its own seeded aim
#[derive(Debug, Clone)]
pub struct Autopilot {
    side: Side,
    spread: f32,
    rng: Pcg32,
    aim_error: f32,
    rally: Option<RallyKey>,
}

impl Autopilot {
    pub fn new(side: Side, seed: u64) -> Self {
        Self::with_spread(side, seed, AIM_SPREAD)
    }

    /// An autopilot whose aim is off by at most `spread` pixels
    pub fn with_spread(side: Side, seed: u64, spread: f32) -> Self {
        Self {
            side,
            spread,
            // Sides with the same match seed still aim differently
            rng: Pcg32::seed_from_u64(seed.wrapping_add(side.index() as u64 + 1)),
            aim_error: 0.0,
            rally: None,
        }
    }

    /// Intents for this tick given the current match
    pub fn intents(&mut self, game: &Match) -> PlayerIntents {
        let rally = (
            game.ball.last_hit_by,
            game.ball.consecutive_hits,
            game.state.score_left + game.state.score_right,
        );
        if self.rally != Some(rally) {
            self.rally = Some(rally);
            self.aim_error = if self.spread > 0.0 {
                self.rng.random_range(-self.spread..=self.spread)
            } else {
                0.0
            };
        }
        plan(self.side, game, self.aim_error)
    }
}

/// Ball center x once it falls back to head height, walls included
pub fn predict_landing_x(game: &Match) -> f32 {
    let court = &game.court;
    let head_y = court.ground_y - PLAYER_SIZE;
    let mut ball = game.ball.clone();
    let size = ball.size();

    for _ in 0..PREDICT_TICKS {
        ball.integrate();
        if ball.bounds().left() <= 0.0 {
            set_left(&mut ball.pos, 0.0);
            ball.vel.x = ball.vel.x.abs() * WALL_RESTITUTION;
        }
        if ball.bounds().right() >= court.width {
            set_right(&mut ball.pos, size.x, court.width);
            ball.vel.x = -ball.vel.x.abs() * WALL_RESTITUTION;
        }
        if ball.vel.y > 0.0 && ball.bounds().bottom() >= head_y {
            break;
        }
    }
    ball.bounds().center().x
}

fn plan(side: Side, game: &Match, aim_error: f32) -> PlayerIntents {
    let player = game.player(side);
    let body = player.bounds();
    let ball = game.ball.bounds();
    let ball_center = ball.center();
    let court = &game.court;

    let ours = |x: f32| match side {
        Side::Left => x < court.half_line_x,
        Side::Right => x >= court.half_line_x,
    };
    let on_our_half = ours(ball_center.x);
    let landing_x = predict_landing_x(game);

    // Wait at home while the ball is headed for the other side
    let home_x = court.serve_x(side) + PLAYER_SIZE / 2.0;
    let target_x = if on_our_half || ours(landing_x) {
        let behind = match side {
            Side::Left => landing_x - HIT_OFFSET,
            Side::Right => landing_x + HIT_OFFSET,
        };
        let (min_x, max_x) = player.lane(court);
        let half = PLAYER_SIZE / 2.0;
        (behind + aim_error).clamp(min_x + half, max_x - half)
    } else {
        home_x
    };

    let dx = target_x - body.center().x;
    let move_left = dx < -POSITION_SLACK;
    let move_right = dx > POSITION_SLACK;

    let above_head = body.top() - ball.bottom();
    let jump = on_our_half
        && game.ball.vel.y > 0.0
        && (0.0..JUMP_WINDOW).contains(&above_head)
        && (ball_center.x - body.center().x).abs() < JUMP_REACH;

    PlayerIntents {
        move_left,
        move_right,
        jump,
    }
}
