//! Board configuration
//!
//! Supplied once at startup and immutable for the process lifetime.
//! Non-positive dimensions are a configuration defect and rejected up front.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts;

/// Board, paddle, and ball constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub board_width: f32,
    pub board_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_base_speed: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            board_width: consts::BOARD_WIDTH,
            board_height: consts::BOARD_HEIGHT,
            paddle_width: consts::PADDLE_WIDTH,
            paddle_height: consts::PADDLE_HEIGHT,
            paddle_speed: consts::PADDLE_SPEED,
            ball_radius: consts::BALL_RADIUS,
            ball_base_speed: consts::BALL_BASE_SPEED,
        }
    }
}

impl BoardConfig {
    /// Check every dimension; any violation is fatal at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("board_width", self.board_width),
            ("board_height", self.board_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_base_speed", self.ball_base_speed),
        ];
        for (name, value) in fields {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive(name));
            }
        }
        if self.paddle_height >= self.board_height {
            return Err(ConfigError::PaddleTooTall);
        }
        Ok(())
    }

    /// Fixed x position of the left paddle
    pub fn left_paddle_x(&self) -> f32 {
        consts::PADDLE_INSET
    }

    /// Fixed x position of the right paddle
    pub fn right_paddle_x(&self) -> f32 {
        self.board_width - consts::PADDLE_INSET - self.paddle_width
    }

    /// Exclusive upper bound for paddle y
    pub fn paddle_y_max(&self) -> f32 {
        self.board_height - self.paddle_height
    }

    /// Vertical band around the bot paddle's center with no corrective movement
    pub fn bot_dead_zone(&self) -> f32 {
        self.ball_radius * consts::BOT_DEAD_ZONE_RADII
    }
}

/// Configuration rejected at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    NonPositive(&'static str),
    PaddleTooTall,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive(field) => write!(f, "{field} must be positive"),
            ConfigError::PaddleTooTall => write!(f, "paddle_height must be less than board_height"),
        }
    }
}

impl std::error::Error for ConfigError {}
