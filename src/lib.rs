//! Paddle Duel - a classic two-paddle ball game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, scoring, bot)
//! - `input`: Intent resolution from raw button state
//! - `adapter`: Render/audio sink boundary
//! - `config`: Board configuration

pub mod adapter;
pub mod config;
pub mod input;
pub mod sim;

pub use config::BoardConfig;

/// Default board constants
pub mod consts {
    /// Board dimensions
    pub const BOARD_WIDTH: f32 = 256.0;
    pub const BOARD_HEIGHT: f32 = 256.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 5.0;
    pub const PADDLE_HEIGHT: f32 = 50.0;
    pub const PADDLE_SPEED: f32 = 4.0;
    /// Horizontal inset of each paddle from its board edge
    pub const PADDLE_INSET: f32 = 7.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 3.0;
    pub const BALL_BASE_SPEED: f32 = 5.0;

    /// Bot dead-zone half-height, in ball radii
    pub const BOT_DEAD_ZONE_RADII: f32 = 3.0;
}
