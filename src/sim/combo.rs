//! Hot-streak bonus from consecutive same-side hits

use glam::Vec2;

use crate::consts::*;

/// Bonus fraction for a hit count: 0.2 per hit, capped at 3 hits
#[inline]
pub fn combo_bonus(consecutive_hits: u32) -> f32 {
    consecutive_hits.min(COMBO_MAX_STACKS) as f32 * COMBO_BONUS_PER_HIT
}

/// Horizontal speed ceiling while a streak is running
#[inline]
pub fn max_speed_x(consecutive_hits: u32) -> f32 {
    BALL_MAX_SPEED_X * (1.0 + combo_bonus(consecutive_hits))
}

/// Apply the streak bonus to a post-collision velocity
///
/// Only kicks in from the second hit on. Horizontal speed is only pulled
/// back to the widened ceiling, never pushed up; an ascending ball rises
/// faster.
pub fn apply_combo(vel: &mut Vec2, consecutive_hits: u32) {
    if consecutive_hits <= 1 {
        return;
    }
    let bonus = combo_bonus(consecutive_hits);
    let cap = max_speed_x(consecutive_hits);
    if vel.x.abs() > cap {
        vel.x = cap.copysign(vel.x);
    }
    if vel.y < 0.0 {
        vel.y *= 1.0 + bonus * 0.3;
    }
}
