//! The ball: gravity, bounces, scoring and the serve
//!
//! One [`Ball::update`] runs the whole per-tick pipeline in a fixed order:
//! integrate, ground (score + serve), ceiling, walls, net, players, combo.
//! Each stage may overwrite what an earlier one did.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{classify_net_contact, resolve_net_contact, respond_to_player};
use super::combo::{apply_combo, combo_bonus};
use super::court::Court;
use super::geometry::{Aabb, set_left, set_right, set_top};
use super::player::PlayerBody;
use super::state::{GameEvent, MatchState, Side};
use crate::consts::*;

/// The one ball in play
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Side that touched the ball last since the serve
    pub last_hit_by: Option<Side>,
    /// Uninterrupted hits by `last_hit_by`
    pub consecutive_hits: u32,
    /// Ticks until another bounce sound may play (not gameplay-affecting)
    pub sound_cooldown: u32,
}

impl Ball {
    /// Opening ball: centered horizontally, a third of the way down
    pub fn new(court: &Court, rng: &mut impl Rng) -> Self {
        Self {
            pos: Vec2::new(court.width / 2.0, court.height / 3.0),
            vel: Vec2::new(serve_speed_x(rng), BALL_SERVE_SPEED_Y),
            radius: BALL_RADIUS,
            last_hit_by: None,
            consecutive_hits: 0,
            sound_cooldown: 0,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::splat(self.radius * 2.0)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size())
    }

    /// Put the ball back in play above `server`'s half
    pub fn reset(&mut self, server: Side, court: &Court, rng: &mut impl Rng) {
        self.vel = Vec2::new(serve_speed_x(rng), BALL_SERVE_SPEED_Y);
        self.pos = Vec2::new(court.serve_x(server), court.height / 3.0);
        self.last_hit_by = None;
        log::debug!("Serve from {} (vx {})", server.label(), self.vel.x);
    }

    /// Arm the bounce-sound debounce, raising a cue if it was idle
    fn bounce_cue(&mut self, events: &mut Vec<GameEvent>) {
        if self.sound_cooldown == 0 {
            self.sound_cooldown = BOUNCE_SOUND_COOLDOWN;
            events.push(GameEvent::Bounce);
        }
    }

    /// Gravity, then the speed caps, then move
    pub fn integrate(&mut self) {
        self.vel.y = (self.vel.y + GRAVITY * BALL_GRAVITY_SCALE).min(BALL_MAX_FALL_SPEED);
        self.vel.x = self.vel.x.clamp(-BALL_MAX_SPEED_X, BALL_MAX_SPEED_X);
        self.pos += self.vel;
    }

    /// Advance one tick against the court, the net and both players
    ///
    /// Returns the side that scored, if the ball hit the ground. A ground
    /// contact ends the tick: the serve reset is final.
    pub fn update(
        &mut self,
        players: &[PlayerBody; 2],
        court: &Court,
        state: &mut MatchState,
        rng: &mut impl Rng,
        events: &mut Vec<GameEvent>,
    ) -> Option<Side> {
        self.sound_cooldown = self.sound_cooldown.saturating_sub(1);

        self.integrate();

        // Ground: point to whoever did not let it drop
        if self.bounds().bottom() >= court.ground_y {
            let landed_on = if self.bounds().center().x < court.half_line_x {
                Side::Left
            } else {
                Side::Right
            };
            let scorer = landed_on.opponent();
            state.record_point(scorer);
            self.consecutive_hits = 0;
            self.reset(scorer, court, rng);
            log::info!(
                "Point {}: {} - {}",
                scorer.label(),
                state.score_left,
                state.score_right
            );
            events.push(GameEvent::PointScored {
                side: scorer,
                score_left: state.score_left,
                score_right: state.score_right,
            });
            events.push(GameEvent::Serve { server: scorer });
            return Some(scorer);
        }

        // Ceiling
        if self.bounds().top() <= 0.0 {
            set_top(&mut self.pos, 0.0);
            self.vel.y = self.vel.y.abs() * CEILING_RESTITUTION;
            self.bounce_cue(events);
        }

        // Side walls
        if self.bounds().left() <= 0.0 {
            set_left(&mut self.pos, 0.0);
            self.vel.x = self.vel.x.abs() * WALL_RESTITUTION;
            self.bounce_cue(events);
        }
        if self.bounds().right() >= court.width {
            let w = self.size().x;
            set_right(&mut self.pos, w, court.width);
            self.vel.x = -self.vel.x.abs() * WALL_RESTITUTION;
            self.bounce_cue(events);
        }

        // Net
        if let Some(contact) = classify_net_contact(&self.bounds(), self.vel, &court.net) {
            let size = self.size();
            resolve_net_contact(&mut self.pos, &mut self.vel, size, &court.net, contact);
            self.bounce_cue(events);
        }

        // Players
        for player in players {
            if !self.bounds().overlaps(&player.bounds()) {
                continue;
            }
            let size = self.size();
            let bonus = combo_bonus(self.consecutive_hits);
            respond_to_player(&mut self.pos, &mut self.vel, size, player, bonus);
            self.bounce_cue(events);
            self.register_hit(player.side);
        }

        apply_combo(&mut self.vel, self.consecutive_hits);
        None
    }

    /// Count a touch by `side` toward the streak
    pub fn register_hit(&mut self, side: Side) {
        if self.last_hit_by == Some(side) {
            self.consecutive_hits += 1;
        } else {
            self.consecutive_hits = 1;
        }
        self.last_hit_by = Some(side);
    }
}

/// Serve drifts either way at random
fn serve_speed_x(rng: &mut impl Rng) -> f32 {
    if rng.random_bool(0.5) {
        BALL_SERVE_SPEED_X
    } else {
        -BALL_SERVE_SPEED_X
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    struct Rig {
        court: Court,
        players: [PlayerBody; 2],
        state: MatchState,
        rng: Pcg32,
        events: Vec<GameEvent>,
    }

    impl Rig {
        fn new() -> Self {
            let court = Court::default();
            let players = [
                PlayerBody::new(Side::Left, &court),
                PlayerBody::new(Side::Right, &court),
            ];
            Self {
                court,
                players,
                state: MatchState::default(),
                rng: Pcg32::seed_from_u64(42),
                events: Vec::new(),
            }
        }

        fn ball(&mut self) -> Ball {
            Ball::new(&self.court, &mut self.rng)
        }

        fn step(&mut self, ball: &mut Ball) -> Option<Side> {
            ball.update(
                &self.players,
                &self.court,
                &mut self.state,
                &mut self.rng,
                &mut self.events,
            )
        }

        /// Park both players out of the way in their corners
        fn clear_players(&mut self) {
            self.players[0].pos = Vec2::new(0.0, 450.0);
            self.players[1].pos = Vec2::new(700.0, 450.0);
        }
    }

    #[test]
    fn test_integration_caps() {
        let mut rig = Rig::new();
        let mut ball = rig.ball();
        ball.vel = Vec2::new(40.0, 13.9);
        ball.integrate();
        assert_eq!(ball.vel.x, BALL_MAX_SPEED_X);
        assert_eq!(ball.vel.y, BALL_MAX_FALL_SPEED);

        ball.vel = Vec2::new(-40.0, -30.0);
        ball.integrate();
        assert_eq!(ball.vel.x, -BALL_MAX_SPEED_X);
        // Upward speed is not capped
        assert!((ball.vel.y - (-30.0 + 0.3)).abs() < 1e-5);
    }

    #[test]
    fn test_serve_reset_positions() {
        let mut rig = Rig::new();
        let mut ball = rig.ball();
        for _ in 0..20 {
            ball.last_hit_by = Some(Side::Left);
            ball.reset(Side::Left, &rig.court, &mut rig.rng);
            assert_eq!(ball.pos, Vec2::new(200.0, 200.0));
            assert_eq!(ball.vel.y, -5.0);
            assert!(ball.vel.x == 3.0 || ball.vel.x == -3.0);
            assert_eq!(ball.last_hit_by, None);

            ball.reset(Side::Right, &rig.court, &mut rig.rng);
            assert_eq!(ball.pos, Vec2::new(600.0, 200.0));
            assert_eq!(ball.vel.y, -5.0);
            assert!(ball.vel.x == 3.0 || ball.vel.x == -3.0);
        }
    }

    #[test]
    fn test_landing_left_scores_right() {
        let mut rig = Rig::new();
        rig.clear_players();
        let mut ball = rig.ball();
        ball.pos = Vec2::new(150.0, 500.0);
        ball.vel = Vec2::ZERO;
        ball.consecutive_hits = 3;
        ball.last_hit_by = Some(Side::Left);

        let scored = rig.step(&mut ball);
        assert_eq!(scored, Some(Side::Right));
        assert_eq!(rig.state.score_right, 1);
        assert_eq!(rig.state.score_left, 0);
        assert_eq!(rig.state.server, Side::Right);
        assert_eq!(ball.consecutive_hits, 0);
        assert_eq!(ball.pos, Vec2::new(600.0, 200.0));
        assert!(rig.events.contains(&GameEvent::Serve {
            server: Side::Right
        }));
    }

    #[test]
    fn test_landing_right_scores_left() {
        let mut rig = Rig::new();
        rig.clear_players();
        let mut ball = rig.ball();
        ball.pos = Vec2::new(550.0, 499.0);
        ball.vel = Vec2::new(0.0, 2.0);

        assert_eq!(rig.step(&mut ball), Some(Side::Left));
        assert_eq!(rig.state.score_left, 1);
        assert_eq!(rig.state.server, Side::Left);
        assert_eq!(ball.pos.x, 200.0);
    }

    #[test]
    fn test_one_point_per_landing() {
        let mut rig = Rig::new();
        rig.clear_players();
        let mut ball = rig.ball();
        ball.pos = Vec2::new(150.0, 500.0);
        ball.vel = Vec2::ZERO;
        rig.step(&mut ball);
        assert_eq!(rig.state.score_right, 1);

        // Fresh serve is high above the ground: the next tick scores nothing
        assert_eq!(rig.step(&mut ball), None);
        assert_eq!(rig.state.score_left + rig.state.score_right, 1);
    }

    #[test]
    fn test_reset_is_final_for_the_tick() {
        let mut rig = Rig::new();
        rig.clear_players();
        let mut ball = rig.ball();
        // Hits the wall and the ground in the same tick
        ball.pos = Vec2::new(2.0, 498.0);
        ball.vel = Vec2::new(-10.0, 5.0);

        rig.step(&mut ball);
        assert_eq!(rig.state.score_right, 1);
        // No wall bounce leaked through: straight serve state
        assert_eq!(ball.pos, Vec2::new(600.0, 200.0));
        assert_eq!(ball.vel.y, -5.0);
        assert_eq!(ball.vel.x.abs(), 3.0);
        assert!(!rig.events.contains(&GameEvent::Bounce));
    }

    #[test]
    fn test_ceiling_bounce() {
        let mut rig = Rig::new();
        let mut ball = rig.ball();
        ball.pos = Vec2::new(100.0, 2.0);
        ball.vel = Vec2::new(0.0, -10.0);
        rig.step(&mut ball);
        assert_eq!(ball.pos.y, 0.0);
        assert!((ball.vel.y - 9.7 * 0.8).abs() < 1e-5);
        assert_eq!(ball.sound_cooldown, BOUNCE_SOUND_COOLDOWN);
        assert_eq!(rig.events, vec![GameEvent::Bounce]);
    }

    #[test]
    fn test_wall_bounces() {
        let mut rig = Rig::new();
        let mut ball = rig.ball();
        ball.pos = Vec2::new(3.0, 100.0);
        ball.vel = Vec2::new(-10.0, 0.0);
        rig.step(&mut ball);
        assert_eq!(ball.pos.x, 0.0);
        assert!((ball.vel.x - 9.0).abs() < 1e-5);

        ball.pos = Vec2::new(745.0, 100.0);
        ball.vel = Vec2::new(10.0, 0.0);
        rig.step(&mut ball);
        assert_eq!(ball.bounds().right(), 800.0);
        assert!((ball.vel.x + 9.0).abs() < 1e-5);
    }

    #[test]
    fn test_bounce_sound_debounce() {
        let mut rig = Rig::new();
        let mut ball = rig.ball();
        ball.pos = Vec2::new(3.0, 100.0);
        ball.vel = Vec2::new(-10.0, 0.0);
        rig.step(&mut ball);
        // Bounces straight back into the wall a few ticks later: no new cue yet
        ball.pos = Vec2::new(3.0, 100.0);
        ball.vel = Vec2::new(-10.0, 0.0);
        rig.step(&mut ball);
        let cues = rig.events.iter().filter(|e| **e == GameEvent::Bounce).count();
        assert_eq!(cues, 1);
        assert_eq!(ball.sound_cooldown, BOUNCE_SOUND_COOLDOWN - 1);
    }

    #[test]
    fn test_ball_bounces_off_net_face() {
        let mut rig = Rig::new();
        rig.clear_players();
        let mut ball = rig.ball();
        let net = rig.court.net;
        // After integration the ball straddles the net's left face
        ball.pos = Vec2::new(net.left() - 52.0, 420.0);
        ball.vel = Vec2::new(7.0, -0.3);

        rig.step(&mut ball);
        assert!(ball.vel.x < 0.0);
        assert_eq!(ball.bounds().right(), net.left());
    }

    #[test]
    fn test_streak_counting() {
        let mut rig = Rig::new();
        let mut ball = rig.ball();

        ball.register_hit(Side::Left);
        assert_eq!(ball.consecutive_hits, 1);
        ball.register_hit(Side::Left);
        assert_eq!(ball.consecutive_hits, 2);
        ball.register_hit(Side::Left);
        assert_eq!(ball.consecutive_hits, 3);
        ball.register_hit(Side::Right);
        assert_eq!(ball.consecutive_hits, 1);
        assert_eq!(ball.last_hit_by, Some(Side::Right));
    }

    #[test]
    fn test_head_hit_through_update() {
        let mut rig = Rig::new();
        let mut ball = rig.ball();
        // Falling onto the left player's head
        ball.pos = Vec2::new(225.0, 400.0);
        ball.vel = Vec2::new(0.0, 6.0);

        rig.step(&mut ball);
        assert_eq!(ball.last_hit_by, Some(Side::Left));
        assert_eq!(ball.consecutive_hits, 1);
        assert_eq!(ball.bounds().bottom(), rig.players[0].bounds().top());
        assert_eq!(ball.vel.y, -NORMAL_BOOST);

        // Same player again: streak grows and the combo steepens the rise
        ball.pos = Vec2::new(225.0, 400.0);
        ball.vel = Vec2::new(0.0, 6.0);
        rig.step(&mut ball);
        assert_eq!(ball.consecutive_hits, 2);
        let expected = -NORMAL_BOOST * 1.2 * (1.0 + 0.4 * 0.3);
        assert!((ball.vel.y - expected).abs() < 1e-4);
    }

    #[test]
    fn test_five_jump_hits_in_a_row() {
        let mut rig = Rig::new();
        rig.players[0].jump_held = true;
        let mut ball = rig.ball();

        for _ in 0..5 {
            ball.pos = Vec2::new(225.0, 400.0);
            ball.vel = Vec2::new(0.0, 6.0);
            assert_eq!(rig.step(&mut ball), None);
        }

        assert_eq!(ball.last_hit_by, Some(Side::Left));
        assert_eq!(ball.consecutive_hits, 5);
        // -18 * 1.6 off the head, then the rise steepened by 1 + 0.6 * 0.3
        assert!((ball.vel.y + 28.8 * 1.18).abs() < 1e-3);
        assert_eq!(ball.vel.x, 0.0);
    }
}
