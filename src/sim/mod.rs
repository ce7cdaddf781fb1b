//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Fixed update order (left player, right player, ball, win check)
//! - No rendering, input polling or platform dependencies

pub mod autopilot;
pub mod ball;
pub mod collision;
pub mod combo;
pub mod court;
pub mod geometry;
pub mod player;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use ball::Ball;
pub use collision::{NetContact, PlayerContact, classify_net_contact, respond_to_player};
pub use combo::{apply_combo, combo_bonus};
pub use court::Court;
pub use geometry::Aabb;
pub use player::{PlayerBody, PlayerIntents};
pub use state::{GameEvent, Match, MatchState, Side};
pub use tick::{TickInput, tick};
