//! Render and audio sink boundary
//!
//! The core never draws or plays anything itself. Once per frame the run
//! loop hands a [`FrameSnapshot`] to the render sink and forwards the tick's
//! sound cues to the audio sink, in order, fire-and-forget.

use glam::Vec2;

use crate::sim::state::{GamePhase, GameState, Paddle};

/// Sound effect cues, emitted during a tick in a fixed order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Pause toggled (either direction)
    Paused,
    /// Left side scored
    ScoreLeft,
    /// Right side scored
    ScoreRight,
    /// Ball bounced off the ceiling or floor
    Wall,
    /// Ball hit the left paddle
    PaddleLeft,
    /// Ball hit the right paddle
    PaddleRight,
    /// Quit requested
    Quit,
}

/// An axis-aligned rectangle in board coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    /// `[left, right]`
    pub score: [u32; 2],
    /// The sink draws the paused overlay when this is `Paused`
    pub phase: GamePhase,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let paddle_rect = |p: &Paddle| Rect {
            x: p.x,
            y: p.y,
            w: state.config.paddle_width,
            h: state.config.paddle_height,
        };
        Self {
            left_paddle: paddle_rect(&state.left),
            right_paddle: paddle_rect(&state.right),
            ball_pos: state.ball.pos,
            ball_radius: state.config.ball_radius,
            score: state.score,
            phase: state.phase,
        }
    }
}

/// Visual sink, called once per frame
pub trait RenderSink {
    fn draw(&mut self, frame: &FrameSnapshot);
}

/// Audio sink. Fire-and-forget; cue order within a tick must be preserved.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Headless audio sink that logs cues
#[derive(Debug, Default)]
pub struct LogAudioSink;

impl AudioSink for LogAudioSink {
    fn play(&mut self, cue: SoundCue) {
        log::debug!("cue: {cue:?}");
    }
}

/// Headless render sink that traces each frame
#[derive(Debug, Default)]
pub struct TraceRenderSink;

impl RenderSink for TraceRenderSink {
    fn draw(&mut self, frame: &FrameSnapshot) {
        log::trace!(
            "frame: {} : {} ball ({:.1}, {:.1}) {:?}",
            frame.score[0],
            frame.score[1],
            frame.ball_pos.x,
            frame.ball_pos.y,
            frame.phase,
        );
    }
}
