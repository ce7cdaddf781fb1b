//! Match state and the owning aggregate
//!
//! Everything a tick reads or writes lives in [`Match`]; there is no global state.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::court::Court;
use super::player::PlayerBody;
use crate::consts::*;

/// Which half of the court a player defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Index into `Match::players`
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    /// Display name
    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "Player 1",
            Side::Right => "Player 2",
        }
    }

    /// Pick a side at random
    pub fn random(rng: &mut impl Rng) -> Side {
        if rng.random_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// Something that happened during a tick, for audio and effects layers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off something (debounced)
    Bounce,
    /// Ball was put back in play for `server`
    Serve { server: Side },
    /// A point went to `side`
    PointScored {
        side: Side,
        score_left: u32,
        score_right: u32,
    },
    /// `winner` reached the winning score
    MatchWon { winner: Side },
    /// Scores cleared and bodies back on their marks
    MatchReset,
}

/// Scores, serve and win tracking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub score_left: u32,
    pub score_right: u32,
    /// Side that serves next (the last side to score)
    pub server: Side,
    pub winner: Option<Side>,
    pub is_active: bool,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            score_left: 0,
            score_right: 0,
            server: Side::Left,
            winner: None,
            is_active: true,
        }
    }
}

impl MatchState {
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.score_left,
            Side::Right => self.score_right,
        }
    }

    /// Award a point; the scorer serves next
    pub fn record_point(&mut self, side: Side) {
        match side {
            Side::Left => self.score_left += 1,
            Side::Right => self.score_right += 1,
        }
        self.server = side;
    }

    /// End the match once either side reaches `win_score`
    ///
    /// Returns the winner. Once a winner is set it never changes.
    pub fn check_win(&mut self, win_score: u32) -> Option<Side> {
        if self.winner.is_none() {
            if self.score_left >= win_score {
                self.winner = Some(Side::Left);
            } else if self.score_right >= win_score {
                self.winner = Some(Side::Right);
            }
        }
        if self.winner.is_some() {
            self.is_active = false;
        }
        self.winner
    }

    /// Clear scores and reopen play
    pub fn reset(&mut self, server: Side) {
        *self = Self {
            server,
            ..Self::default()
        };
    }
}

/// The whole match: court, both bodies, the ball and the scoreboard
#[derive(Debug, Clone)]
pub struct Match {
    pub court: Court,
    /// Indexed by [`Side::index`]
    pub players: [PlayerBody; 2],
    pub ball: Ball,
    pub state: MatchState,
    pub win_score: u32,
    /// Seed the serve RNG was created from
    pub seed: u64,
    /// Ticks simulated since the match (re)started
    pub time_ticks: u64,
    /// Events raised since the last [`Match::drain_events`]
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl Match {
    /// New match on the default court
    pub fn new(seed: u64, win_score: u32) -> Self {
        Self::with_court(Court::default(), seed, win_score)
    }

    pub fn with_court(court: Court, seed: u64, win_score: u32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::new(&court, &mut rng);
        let players = [
            PlayerBody::new(Side::Left, &court),
            PlayerBody::new(Side::Right, &court),
        ];
        log::info!("Match starting (seed {}, first to {})", seed, win_score);
        Self {
            court,
            players,
            ball,
            state: MatchState::default(),
            win_score,
            seed,
            time_ticks: 0,
            events: Vec::new(),
            rng,
        }
    }

    /// Match with the standard winning score
    pub fn with_seed(seed: u64) -> Self {
        Self::new(seed, WIN_SCORE)
    }

    pub fn player(&self, side: Side) -> &PlayerBody {
        &self.players[side.index()]
    }

    /// Start over: zero scores, bodies on their marks, serve from a random side
    pub fn reset_match(&mut self) {
        let server = Side::random(&mut self.rng);
        self.state.reset(server);
        for player in &mut self.players {
            player.respawn(&self.court);
        }
        self.ball.reset(server, &self.court, &mut self.rng);
        self.ball.consecutive_hits = 0;
        self.time_ticks = 0;
        self.events.push(GameEvent::MatchReset);
        self.events.push(GameEvent::Serve { server });
        log::info!("Match reset, {} serves", server.label());
    }

    /// Move the ball one tick against the current player positions
    ///
    /// Returns the side that scored, if any.
    pub fn step_ball(&mut self) -> Option<Side> {
        self.ball.update(
            &self.players,
            &self.court,
            &mut self.state,
            &mut self.rng,
            &mut self.events,
        )
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
