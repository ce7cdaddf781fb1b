//! HUD snapshot
//!
//! Everything the overlay needs to draw one frame, read out of a match.
//! The simulation never draws; whoever renders consumes this.

use serde::{Deserialize, Serialize};

use crate::sim::{Aabb, Match, Side};

/// Smallest glow around a hot ball
const GLOW_BASE_RADIUS: f32 = 30.0;
/// Extra glow per hit past the third
const GLOW_PER_HIT: f32 = 5.0;
/// Hits needed before the ball starts glowing
const GLOW_MIN_HITS: u32 = 3;

/// Read-only view of a match for the overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub score_left: u32,
    pub score_right: u32,
    /// "3 - 7"
    pub score_line: String,
    pub players: [Aabb; 2],
    pub ball: Aabb,
    /// Streak length, shown only from the second hit
    pub combo: Option<u32>,
    /// RGB; yellow fading to red as the streak grows
    pub combo_color: [u8; 3],
    /// Glow around the ball on a long streak
    pub glow_radius: Option<f32>,
    pub is_active: bool,
    pub winner: Option<Side>,
    /// End-of-match banner
    pub banner: Option<String>,
}

impl HudSnapshot {
    pub fn from_match(game: &Match) -> Self {
        let state = &game.state;
        let hits = game.ball.consecutive_hits;

        Self {
            score_left: state.score_left,
            score_right: state.score_right,
            score_line: format!("{} - {}", state.score_left, state.score_right),
            players: [game.players[0].bounds(), game.players[1].bounds()],
            ball: game.ball.bounds(),
            combo: (hits > 1).then_some(hits),
            combo_color: combo_color(hits),
            glow_radius: glow_radius(hits),
            is_active: state.is_active,
            winner: state.winner,
            banner: state
                .winner
                .map(|w| format!("{} wins! Press restart to play again", w.label())),
        }
    }
}

/// Yellow at the start of a streak, shading to red
pub fn combo_color(hits: u32) -> [u8; 3] {
    let green = 255u32.saturating_sub(hits.saturating_mul(30));
    [255, green as u8, 0]
}

/// Glow radius once the streak reaches three hits
pub fn glow_radius(hits: u32) -> Option<f32> {
    (hits >= GLOW_MIN_HITS)
        .then(|| GLOW_BASE_RADIUS + (hits - GLOW_MIN_HITS) as f32 * GLOW_PER_HIT)
}
