//! Collision classification and response for the ball
//!
//! Everything is axis-aligned, so the tricky part is not detecting a hit but
//! deciding which face was struck. Both the net and the players use a fixed
//! priority order: the first matching case wins.

use glam::Vec2;

use super::geometry::{Aabb, set_bottom, set_left, set_right, set_top};
use super::player::PlayerBody;
use crate::consts::*;

/// Face of the net the ball ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetContact {
    /// Moving right, coming from the left half
    LeftFace,
    /// Moving left, coming from the right half
    RightFace,
    /// Dropping onto the top of the net
    Top,
    /// Rising into the underside (rare: the net stands on the ground)
    Underside,
    /// Overlapping, but no face matches; left alone
    Graze,
}

/// Classify an overlap with the net, `None` if there is no overlap
pub fn classify_net_contact(ball: &Aabb, vel: Vec2, net: &Aabb) -> Option<NetContact> {
    if !ball.overlaps(net) {
        return None;
    }
    let center = ball.center();
    let net_center = net.center();

    let contact = if vel.x > 0.0 && center.x < net_center.x {
        NetContact::LeftFace
    } else if vel.x < 0.0 && center.x > net_center.x {
        NetContact::RightFace
    } else if vel.y > 0.0 && center.y < net.top() {
        NetContact::Top
    } else if vel.y < 0.0 && center.y > net.bottom() {
        NetContact::Underside
    } else {
        NetContact::Graze
    };
    Some(contact)
}

/// Push the ball out of the net and bounce it
pub fn resolve_net_contact(
    pos: &mut Vec2,
    vel: &mut Vec2,
    size: Vec2,
    net: &Aabb,
    contact: NetContact,
) {
    match contact {
        NetContact::LeftFace => {
            set_right(pos, size.x, net.left());
            vel.x = -vel.x.abs() * NET_SIDE_RESTITUTION;
        }
        NetContact::RightFace => {
            set_left(pos, net.right());
            vel.x = vel.x.abs() * NET_SIDE_RESTITUTION;
        }
        NetContact::Top => {
            set_bottom(pos, size.y, net.top());
            vel.y = -vel.y.abs() * NET_TOP_RESTITUTION;
        }
        NetContact::Underside => {
            set_top(pos, net.bottom());
            vel.y = vel.y.abs() * NET_TOP_RESTITUTION;
        }
        NetContact::Graze => {}
    }
}

/// How the ball met a player's body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerContact {
    /// Ball landed on the player's head
    Head,
    /// Ball's right edge against the player's left face
    LeftFace,
    /// Ball's left edge against the player's right face
    RightFace,
    /// Ball's top against the player's feet (rare)
    Underside,
    /// Deep overlap with no clear face
    Deep,
}

/// Classify an overlap between the ball and a player
pub fn classify_player_contact(ball: &Aabb, player: &Aabb) -> PlayerContact {
    if ball.bottom() >= player.top() && ball.top() < player.top() {
        PlayerContact::Head
    } else if (ball.right() - player.left()).abs() < SIDE_HIT_TOLERANCE {
        PlayerContact::LeftFace
    } else if (ball.left() - player.right()).abs() < SIDE_HIT_TOLERANCE {
        PlayerContact::RightFace
    } else if ball.top() <= player.bottom() && ball.bottom() > player.bottom() {
        PlayerContact::Underside
    } else {
        PlayerContact::Deep
    }
}

/// Send the ball off a player it overlaps
///
/// `bonus` is the streak bonus from hits made *before* this one.
pub fn respond_to_player(
    pos: &mut Vec2,
    vel: &mut Vec2,
    size: Vec2,
    player: &PlayerBody,
    bonus: f32,
) -> PlayerContact {
    let body = player.bounds();
    let contact = classify_player_contact(&Aabb::from_pos_size(*pos, size), &body);

    match contact {
        PlayerContact::Head => {
            set_bottom(pos, size.y, body.top());
            let boost = if player.jump_held {
                JUMP_BOOST
            } else {
                NORMAL_BOOST
            };
            vel.y = -boost * (1.0 + bonus);
            if player.vel.x != 0.0 {
                vel.x = player.vel.x * HEAD_CARRY;
            }
        }
        PlayerContact::LeftFace => {
            set_right(pos, size.x, body.left());
            vel.x = -(vel.x.abs() + SIDE_KICK * (1.0 + bonus));
            vel.y = -SIDE_LIFT * (1.0 + bonus * 0.5);
        }
        PlayerContact::RightFace => {
            set_left(pos, body.right());
            vel.x = vel.x.abs() + SIDE_KICK * (1.0 + bonus);
            vel.y = -SIDE_LIFT * (1.0 + bonus * 0.5);
        }
        PlayerContact::Underside => {
            set_top(pos, body.bottom());
            vel.y = UNDERSIDE_DROP;
        }
        PlayerContact::Deep => {
            if vel.y > 0.0 {
                vel.y = -FALLBACK_LIFT * (1.0 + bonus * 0.5);
            } else {
                vel.y -= FALLBACK_PUSH * (1.0 + bonus);
            }
            if player.vel.x != 0.0 {
                vel.x = player.vel.x * FALLBACK_CARRY * (1.0 + bonus * 0.3);
            }
        }
    }
    contact
}
