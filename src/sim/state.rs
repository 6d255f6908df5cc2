//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::BoardConfig;

/// Which side of the board a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Frozen: after a point or an explicit pause toggle
    Paused,
}

/// A paddle. `x` is fixed per side; only `y` moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub vy: f32,
}

impl Paddle {
    /// Paddle at its side's x, top edge at the vertical middle, at rest
    fn at_center(x: f32, config: &BoardConfig) -> Self {
        Self {
            x,
            y: config.board_height / 2.0,
            vy: 0.0,
        }
    }

    pub fn center_y(&self, paddle_height: f32) -> f32 {
        self.y + paddle_height / 2.0
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Complete game state (deterministic, serializable)
///
/// Owned exclusively by the run loop; all mutation happens through
/// [`crate::sim::tick`] and [`GameState::restart`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Immutable board constants
    pub config: BoardConfig,
    /// Seed the RNG started from, for reproducibility
    pub seed: u64,
    /// Right paddle is computer-controlled
    pub bot: bool,
    pub phase: GamePhase,
    /// Points per side, `[left, right]`. Never reset by restart.
    pub score: [u32; 2],
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    /// Simulation tick counter (does not advance while paused)
    pub time_ticks: u64,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game with the given board and seed. The config must
    /// already be validated.
    pub fn new(config: BoardConfig, bot: bool, seed: u64) -> Self {
        let mut state = Self {
            config,
            seed,
            bot,
            phase: GamePhase::Playing,
            score: [0, 0],
            left: Paddle::at_center(config.left_paddle_x(), &config),
            right: Paddle::at_center(config.right_paddle_x(), &config),
            ball: Ball {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
            },
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.serve_ball();
        state
    }

    /// Reset paddles, ball, and pause for a new point. Score carries over.
    pub fn restart(&mut self) {
        self.phase = GamePhase::Playing;
        self.left = Paddle::at_center(self.config.left_paddle_x(), &self.config);
        self.right = Paddle::at_center(self.config.right_paddle_x(), &self.config);
        self.serve_ball();
        log::debug!("restart at tick {} (score {} : {})", self.time_ticks, self.score[0], self.score[1]);
    }

    /// Place the ball at board center with each velocity sign chosen
    /// independently at random.
    fn serve_ball(&mut self) {
        let half_speed = self.config.ball_base_speed / 2.0;
        self.ball = Ball {
            pos: Vec2::new(self.config.board_width / 2.0, self.config.board_height / 2.0),
            vel: Vec2::new(
                self.random_sign() * half_speed,
                self.random_sign() * half_speed,
            ),
        };
    }

    fn random_sign(&mut self) -> f32 {
        if self.rng.random::<bool>() { 1.0 } else { -1.0 }
    }

    /// Record a point for one side
    pub fn award_point(&mut self, side: Side) {
        self.score[side.index()] += 1;
        log::info!("point to {side:?} ({} : {})", self.score[0], self.score[1]);
    }
}
