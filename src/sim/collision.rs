//! Collision detection and scoring
//!
//! One pure pass per tick over the ball, both paddles, and the board bounds.
//! No hidden state: the outcome carries the new ball velocity, an optional
//! scorer, the pause flag, and the sound cues in emission order.

use glam::Vec2;

use super::state::{Ball, Paddle, Side};
use crate::adapter::SoundCue;
use crate::config::BoardConfig;

/// Result of one collision pass
#[derive(Debug, Clone)]
pub struct CollisionOutcome {
    /// Possibly-mutated ball velocity
    pub vel: Vec2,
    /// At most one side scores per tick
    pub scorer: Option<Side>,
    /// Point scored this tick; the state machine pauses and skips integration
    pub pause: bool,
    /// Sound cues in the order they were raised
    pub cues: Vec<SoundCue>,
}

/// Resolve wall, paddle, and boundary events for the current tick.
///
/// Rule order is fixed: the point check runs first, and wall/paddle checks
/// still run afterwards in the same pass so bounce state stays consistent.
pub fn resolve_collisions(
    ball: &Ball,
    left: &Paddle,
    right: &Paddle,
    config: &BoardConfig,
) -> CollisionOutcome {
    let r = config.ball_radius;
    let mut out = CollisionOutcome {
        vel: ball.vel,
        scorer: None,
        pause: false,
        cues: Vec::new(),
    };

    // Point: ball has passed a paddle
    if ball.pos.x - r <= 0.0 {
        out.scorer = Some(Side::Right);
        out.pause = true;
        out.cues.push(SoundCue::ScoreRight);
    } else if ball.pos.x + r >= config.board_width {
        out.scorer = Some(Side::Left);
        out.pause = true;
        out.cues.push(SoundCue::ScoreLeft);
    }

    // Ball at ceiling or floor
    if ball.pos.y - r <= 0.0 {
        out.vel.y = out.vel.y.abs();
        out.cues.push(SoundCue::Wall);
    }
    if ball.pos.y + r >= config.board_height {
        out.vel.y = -out.vel.y.abs();
        out.cues.push(SoundCue::Wall);
    }

    // Paddle contact: the ball's leading edge must lie strictly inside the
    // paddle's thickness band. Strict bounds keep a hit from re-triggering
    // on the following tick.
    if paddle_overlap(left, ball.pos.y, ball.pos.x - r, config) {
        out.vel.x = speed_effect(left, ball.pos.y, config);
        out.cues.push(SoundCue::PaddleLeft);
    }
    if paddle_overlap(right, ball.pos.y, ball.pos.x + r, config) {
        out.vel.x = -speed_effect(right, ball.pos.y, config);
        out.cues.push(SoundCue::PaddleRight);
    }

    out
}

fn paddle_overlap(paddle: &Paddle, ball_y: f32, edge_x: f32, config: &BoardConfig) -> bool {
    paddle.y < ball_y
        && ball_y < paddle.y + config.paddle_height
        && paddle.x < edge_x
        && edge_x < paddle.x + config.paddle_width
}

/// Horizontal speed imparted by a paddle hit.
///
/// Zero at dead-center contact, `ceil(base_speed)` at the paddle's extreme
/// edge. A zero result is legal: the ball may move purely vertically until
/// the next contact.
pub fn speed_effect(paddle: &Paddle, ball_y: f32, config: &BoardConfig) -> f32 {
    let mid = config.paddle_height / 2.0;
    let percent = (ball_y - (paddle.y + mid)).abs() / mid;
    (config.ball_base_speed * percent).ceil()
}
