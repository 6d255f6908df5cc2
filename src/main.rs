//! Paddle Duel entry point
//!
//! Headless demo loop: the right paddle is bot-driven, the left paddle runs
//! a simple tracking script, and render/audio go to logging sinks. A real
//! front end supplies its own sinks, key mapping, and frame clock.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;

use paddle_duel::BoardConfig;
use paddle_duel::adapter::{AudioSink, FrameSnapshot, LogAudioSink, RenderSink, TraceRenderSink};
use paddle_duel::input::{Button, InputFrame, resolve_intents};
use paddle_duel::sim::{GamePhase, GameState, tick};

/// Demo length: one minute at a 30 Hz cadence
const DEMO_FRAMES: u32 = 30 * 60;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path)?,
        None => BoardConfig::default(),
    };
    config.validate().context("invalid board configuration")?;

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock before unix epoch")?
        .as_millis() as u64;

    let mut state = GameState::new(config, true, seed);
    let mut audio = LogAudioSink;
    let mut render = TraceRenderSink;
    log::info!("paddle-duel starting (seed {seed})");

    for _ in 0..DEMO_FRAMES {
        let frame = script_frame(&state);
        let input = resolve_intents(&frame, state.bot);
        let out = tick(&mut state, &input);

        for cue in out.cues {
            audio.play(cue);
        }
        render.draw(&FrameSnapshot::capture(&state));

        if out.quit {
            break;
        }
    }

    log::info!("final score {} : {}", state.score[0], state.score[1]);
    Ok(())
}

/// Scripted input: restart after each point, otherwise track the ball with
/// the left paddle.
fn script_frame(state: &GameState) -> InputFrame {
    if state.phase == GamePhase::Paused {
        return InputFrame::new().hold(Button::Restart);
    }

    let center = state.left.center_y(state.config.paddle_height);
    if center > state.ball.pos.y + state.config.ball_radius {
        InputFrame::new().hold(Button::P1Up)
    } else if center < state.ball.pos.y - state.config.ball_radius {
        InputFrame::new().hold(Button::P1Down)
    } else {
        InputFrame::new()
    }
}

fn load_config(path: &str) -> anyhow::Result<BoardConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {path}"))?;
    let config: BoardConfig =
        serde_json::from_str(&json).with_context(|| format!("failed to parse {path}"))?;
    Ok(config)
}
