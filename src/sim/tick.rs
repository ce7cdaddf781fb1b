//! Fixed timestep simulation tick
//!
//! Core game loop that advances a match deterministically.

use serde::{Deserialize, Serialize};

use super::player::PlayerIntents;
use super::state::{GameEvent, Match, Side};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: PlayerIntents,
    pub right: PlayerIntents,
    /// Start a new match (only honoured once the current one is over)
    pub restart: bool,
}

impl TickInput {
    pub fn for_side(&self, side: Side) -> PlayerIntents {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Advance the match by one fixed timestep
///
/// Order: restart request, both players, the ball, then the win check.
/// A finished match stands still until a restart comes in.
pub fn tick(game: &mut Match, input: &TickInput) {
    // Restarts land on a tick boundary, never mid-update
    if input.restart && !game.state.is_active {
        game.reset_match();
    }

    if !game.state.is_active {
        return;
    }

    game.time_ticks += 1;

    for side in Side::BOTH {
        let intents = input.for_side(side);
        game.players[side.index()].update(intents, &game.court);
    }

    game.step_ball();

    if let Some(winner) = game.state.check_win(game.win_score) {
        log::info!(
            "{} wins {} - {}",
            winner.label(),
            game.state.score_left,
            game.state.score_right
        );
        game.events.push(GameEvent::MatchWon { winner });
    }
}
