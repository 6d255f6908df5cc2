//! End-to-end simulation scenarios driven through the public API.

use glam::Vec2;

use paddle_duel::BoardConfig;
use paddle_duel::adapter::SoundCue;
use paddle_duel::input::{Button, InputFrame, resolve_intents};
use paddle_duel::sim::{GamePhase, GameState, TickInput, tick};

/// Board used by the scenario tests: 256x256, paddle height 40, ball
/// radius 4, base speed 5.
fn scenario_config() -> BoardConfig {
    let mut cfg = BoardConfig::default();
    cfg.paddle_height = 40.0;
    cfg.ball_radius = 4.0;
    cfg.ball_base_speed = 5.0;
    cfg
}

#[test]
fn ball_past_left_edge_scores_for_right_and_freezes() {
    let cfg = scenario_config();
    let mut state = GameState::new(cfg, true, 1);
    state.ball.pos = Vec2::new(3.0, 128.0);
    state.ball.vel = Vec2::new(-2.0, 1.0);
    let paddles_before = (state.left, state.right);

    let out = tick(&mut state, &TickInput::default());

    assert_eq!(state.score, [0, 1]);
    assert_eq!(state.phase, GamePhase::Paused);
    assert!(out.cues.contains(&SoundCue::ScoreRight));
    assert_eq!(state.ball.pos, Vec2::new(3.0, 128.0));
    assert_eq!((state.left, state.right), paddles_before);
}

#[test]
fn dead_center_paddle_hit_zeroes_horizontal_speed() {
    let cfg = scenario_config();
    let mut state = GameState::new(cfg, true, 1);
    // Left paddle spans y 110..150; ball dead center on its thickness band
    state.left.y = 110.0;
    state.ball.pos = Vec2::new(12.0, 130.0);
    state.ball.vel = Vec2::new(-5.0, 2.0);

    let out = tick(&mut state, &TickInput::default());

    assert!(out.cues.contains(&SoundCue::PaddleLeft));
    assert_eq!(state.ball.vel.x, 0.0);
    // Integration accepts the purely vertical ball
    assert_eq!(state.ball.pos, Vec2::new(12.0, 132.0));
}

#[test]
fn bot_moves_up_toward_ball_on_its_half() {
    let cfg = scenario_config();
    let mut state = GameState::new(cfg, true, 1);
    state.ball.pos = Vec2::new(200.0, 50.0);
    state.ball.vel = Vec2::new(1.0, 0.0);
    // Right paddle center at y = 180, well below the ball's dead-zone band
    state.right.y = 180.0 - cfg.paddle_height / 2.0;

    tick(&mut state, &TickInput::default());

    assert_eq!(state.right.vy, -cfg.paddle_speed);
}

#[test]
fn rally_then_restart_preserves_score() {
    let cfg = BoardConfig::default();
    let mut state = GameState::new(cfg, true, 77);

    // Send the ball past the idle left paddle: it crosses the left bound
    // in a bounded number of ticks with no contact on the way
    state.ball.pos = Vec2::new(128.0, 40.0);
    state.ball.vel = Vec2::new(-2.5, 1.0);
    let mut ticks = 0;
    while state.phase == GamePhase::Playing {
        tick(&mut state, &TickInput::default());
        ticks += 1;
        assert!(ticks < 200, "no point scored in {ticks} ticks");
    }
    let score_after_point = state.score;
    assert_eq!(score_after_point.iter().sum::<u32>(), 1);

    // Restart via the resolver, the way a front end would
    let frame = InputFrame::new().hold(Button::Restart);
    let input = resolve_intents(&frame, state.bot);
    tick(&mut state, &input);

    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.score, score_after_point);
    assert_eq!(
        state.ball.pos,
        Vec2::new(cfg.board_width / 2.0, cfg.board_height / 2.0)
    );
    assert_eq!(state.ball.vel.x.abs(), cfg.ball_base_speed / 2.0);
    assert_eq!(state.ball.vel.y.abs(), cfg.ball_base_speed / 2.0);
    assert_eq!(state.left.vy, 0.0);
    assert_eq!(state.right.vy, 0.0);
}

#[test]
fn pause_via_resolver_freezes_and_resumes() {
    let cfg = BoardConfig::default();
    let mut state = GameState::new(cfg, true, 5);

    let pause = resolve_intents(&InputFrame::new().press(Button::Pause), true);
    let out = tick(&mut state, &pause);
    assert_eq!(state.phase, GamePhase::Paused);
    assert_eq!(out.cues, vec![SoundCue::Paused]);

    let ball_before = state.ball;
    for _ in 0..10 {
        tick(&mut state, &TickInput::default());
    }
    assert_eq!(state.ball, ball_before);

    tick(&mut state, &pause);
    assert_eq!(state.phase, GamePhase::Playing);
}

#[test]
fn quit_intent_terminates_run_loop() {
    let cfg = BoardConfig::default();
    let mut state = GameState::new(cfg, true, 5);

    let quit = resolve_intents(&InputFrame::new().hold(Button::Quit), true);
    let out = tick(&mut state, &quit);
    assert!(out.quit);
    assert_eq!(out.cues, vec![SoundCue::Quit]);
}

#[test]
fn full_rally_holds_invariants() {
    let cfg = BoardConfig::default();
    let mut state = GameState::new(cfg, true, 2024);
    let y_max = cfg.paddle_y_max();

    // Play several points with auto-restart and check invariants every tick
    for _ in 0..40_000 {
        let input = if state.phase == GamePhase::Paused {
            TickInput {
                restart: true,
                ..Default::default()
            }
        } else {
            TickInput::default()
        };
        let out = tick(&mut state, &input);

        assert!(state.left.y >= 0.0 && state.left.y <= y_max);
        assert!(state.right.y >= 0.0 && state.right.y <= y_max);
        let score_cues = out
            .cues
            .iter()
            .filter(|c| matches!(c, SoundCue::ScoreLeft | SoundCue::ScoreRight))
            .count();
        assert!(score_cues <= 1);

        if state.score.iter().sum::<u32>() >= 5 {
            break;
        }
    }
    assert!(state.score.iter().sum::<u32>() >= 5, "rally stalled");
}
