//! Fixed timestep simulation tick
//!
//! One `tick` per frame, driven by the external run loop. The entire state
//! graph is owned by [`GameState`]; nothing here suspends or blocks.

use super::bot;
use super::collision::resolve_collisions;
use super::state::{GamePhase, GameState};
use crate::adapter::SoundCue;

/// Vertical movement intent for a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDir {
    Up,
    Down,
}

impl MoveDir {
    fn velocity(self, paddle_speed: f32) -> f32 {
        match self {
            MoveDir::Up => -paddle_speed,
            MoveDir::Down => paddle_speed,
        }
    }
}

/// Input intents for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left_move: Option<MoveDir>,
    pub right_move: Option<MoveDir>,
    /// Edge-triggered pause toggle
    pub toggle_pause: bool,
    /// Level-triggered; processed even while paused, score untouched
    pub restart: bool,
    /// Level-triggered termination request
    pub quit: bool,
}

/// Events produced by one tick
#[derive(Debug, Clone, Default)]
pub struct TickOutput {
    /// Sound cues in emission order
    pub cues: Vec<SoundCue>,
    /// Run loop must stop ticking
    pub quit: bool,
}

/// Advance the game by one fixed step
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutput {
    let mut out = TickOutput::default();

    if input.quit {
        log::info!("quit requested at tick {}", state.time_ticks);
        out.cues.push(SoundCue::Quit);
        out.quit = true;
        return out;
    }

    if input.restart {
        state.restart();
    }

    if input.toggle_pause {
        state.phase = match state.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
        };
        out.cues.push(SoundCue::Paused);
    }

    // Velocity intents land unconditionally; they only take effect once
    // integration resumes.
    if let Some(dir) = input.left_move {
        state.left.vy = dir.velocity(state.config.paddle_speed);
    }
    if let Some(dir) = input.right_move {
        state.right.vy = dir.velocity(state.config.paddle_speed);
    }

    if state.phase == GamePhase::Paused {
        return out;
    }

    state.time_ticks += 1;

    if state.bot {
        if let Some(vy) = bot::steer(&state.ball, &state.right, &state.config) {
            state.right.vy = vy;
        }
    }

    let outcome = resolve_collisions(&state.ball, &state.left, &state.right, &state.config);
    state.ball.vel = outcome.vel;
    if let Some(side) = outcome.scorer {
        state.award_point(side);
    }
    out.cues.extend(outcome.cues);

    if outcome.pause {
        // Point scored: freeze this tick, positions carry into the pause
        state.phase = GamePhase::Paused;
        return out;
    }

    integrate(state);
    out
}

/// Apply velocities. A paddle velocity is applied only if the resulting y
/// stays within bounds; the ball moves regardless, including at zero
/// horizontal speed.
fn integrate(state: &mut GameState) {
    let y_max = state.config.paddle_y_max();
    for paddle in [&mut state.left, &mut state.right] {
        let next = paddle.y + paddle.vy;
        if next >= 0.0 && next < y_max {
            paddle.y = next;
        }
    }
    state.ball.pos += state.ball.vel;
}
