//! Pika Volley - a two-player arcade volleyball simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (court, players, ball, combo, match state)
//! - `hud`: Read-only snapshot for whatever draws the score and combo overlay
//! - `settings`: Runtime match configuration

pub mod hud;
pub mod settings;
pub mod sim;

pub use hud::HudSnapshot;
pub use settings::Settings;

/// Game configuration constants
///
/// Tuned for a fixed 60 Hz tick; everything is in pixels and pixels/tick.
pub mod consts {
    /// Fixed simulation rate
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Court dimensions
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 600.0;
    /// Height of the grass strip below the playing surface
    pub const GROUND_THICKNESS: f32 = 50.0;

    /// Net rectangle (centered on the half line, standing on the ground)
    pub const NET_WIDTH: f32 = 10.0;
    pub const NET_HEIGHT: f32 = 150.0;

    /// Player gravity (pixels/tick²)
    pub const GRAVITY: f32 = 0.6;

    /// Player body defaults
    pub const PLAYER_SIZE: f32 = 100.0;
    pub const PLAYER_RUN_SPEED: f32 = 7.0;
    /// Geometric decay of horizontal speed with no input
    pub const PLAYER_RUN_DECAY: f32 = 0.9;
    /// Below this horizontal speed the player stops dead
    pub const PLAYER_STOP_SPEED: f32 = 0.5;
    pub const PLAYER_JUMP_SPEED: f32 = 15.0;
    /// Extra lift per tick while jump is held on the way up
    pub const PLAYER_AIR_BOOST: f32 = 0.4;
    /// Air boost only applies this far above the ground
    pub const PLAYER_AIR_BOOST_CLEARANCE: f32 = 50.0;
    /// Rising speed decay when jump is released early
    pub const PLAYER_JUMP_RELEASE_DECAY: f32 = 0.9;
    pub const PLAYER_MAX_FALL_SPEED: f32 = 12.0;
    /// Gap kept between a player and the half line
    pub const HALF_LINE_MARGIN: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 25.0;
    /// Ball feels half the player gravity
    pub const BALL_GRAVITY_SCALE: f32 = 0.5;
    pub const BALL_MAX_SPEED_X: f32 = 12.0;
    pub const BALL_MAX_FALL_SPEED: f32 = 14.0;
    pub const BALL_SERVE_SPEED_X: f32 = 3.0;
    pub const BALL_SERVE_SPEED_Y: f32 = -5.0;

    /// Restitution
    pub const CEILING_RESTITUTION: f32 = 0.8;
    pub const WALL_RESTITUTION: f32 = 0.9;
    pub const NET_SIDE_RESTITUTION: f32 = 0.9;
    pub const NET_TOP_RESTITUTION: f32 = 0.7;

    /// Player hit response
    pub const JUMP_BOOST: f32 = 18.0;
    pub const NORMAL_BOOST: f32 = 12.0;
    /// Player horizontal speed carried into a head hit
    pub const HEAD_CARRY: f32 = 1.8;
    /// Max edge distance for a side hit
    pub const SIDE_HIT_TOLERANCE: f32 = 15.0;
    pub const SIDE_KICK: f32 = 2.0;
    pub const SIDE_LIFT: f32 = 8.0;
    pub const UNDERSIDE_DROP: f32 = 4.0;
    pub const FALLBACK_LIFT: f32 = 10.0;
    pub const FALLBACK_PUSH: f32 = 2.0;
    pub const FALLBACK_CARRY: f32 = 1.2;

    /// Combo tuning
    pub const COMBO_MAX_STACKS: u32 = 3;
    pub const COMBO_BONUS_PER_HIT: f32 = 0.2;

    /// Ticks between bounce sound cues
    pub const BOUNCE_SOUND_COOLDOWN: u32 = 10;

    /// Points needed to win a match
    pub const WIN_SCORE: u32 = 15;
}
