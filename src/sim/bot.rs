//! Reactive controller for the computer-driven right paddle

use super::state::{Ball, Paddle};
use crate::config::BoardConfig;

/// Velocity intent for the bot paddle this tick.
///
/// `None` means no change: the bot never issues an explicit stop, so the
/// previous velocity persists until overridden. Inactive while the ball is
/// on the far half of the board.
pub fn steer(ball: &Ball, paddle: &Paddle, config: &BoardConfig) -> Option<f32> {
    if ball.pos.x < config.board_width / 2.0 {
        return None;
    }

    let center = paddle.center_y(config.paddle_height);
    let dead_zone = config.bot_dead_zone();
    if center > ball.pos.y + dead_zone {
        Some(-config.paddle_speed)
    } else if center < ball.pos.y - dead_zone {
        Some(config.paddle_speed)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(1.0, 1.0),
        }
    }

    fn paddle_with_center(center: f32, config: &BoardConfig) -> Paddle {
        Paddle {
            x: config.right_paddle_x(),
            y: center - config.paddle_height / 2.0,
            vy: 0.0,
        }
    }

    #[test]
    fn test_inactive_on_far_half() {
        let cfg = BoardConfig::default();
        let paddle = paddle_with_center(200.0, &cfg);
        assert_eq!(steer(&ball_at(100.0, 50.0), &paddle, &cfg), None);
    }

    #[test]
    fn test_moves_up_when_ball_above() {
        let cfg = BoardConfig::default();
        // Paddle center 180, ball at y=50: center > 50 + dead_zone
        let paddle = paddle_with_center(180.0, &cfg);
        assert_eq!(
            steer(&ball_at(200.0, 50.0), &paddle, &cfg),
            Some(-cfg.paddle_speed)
        );
    }

    #[test]
    fn test_moves_down_when_ball_below() {
        let cfg = BoardConfig::default();
        let paddle = paddle_with_center(60.0, &cfg);
        assert_eq!(
            steer(&ball_at(200.0, 200.0), &paddle, &cfg),
            Some(cfg.paddle_speed)
        );
    }

    #[test]
    fn test_no_change_inside_dead_zone() {
        let cfg = BoardConfig::default();
        let paddle = paddle_with_center(100.0, &cfg);
        // dead zone is 9 with the default ball radius of 3
        assert_eq!(steer(&ball_at(200.0, 95.0), &paddle, &cfg), None);
        assert_eq!(steer(&ball_at(200.0, 108.0), &paddle, &cfg), None);
    }
}
