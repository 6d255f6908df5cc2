//! Input intent resolution
//!
//! The input collaborator delivers already key-mapped button state once per
//! tick: the set of currently-held buttons and the set just pressed this
//! tick. This module turns that into simulation intents.

use crate::sim::tick::{MoveDir, TickInput};

/// Logical buttons, mapped from raw key codes by the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    P1Up,
    P1Down,
    P2Up,
    P2Down,
    Pause,
    Restart,
    Quit,
}

/// Button state for one tick
#[derive(Debug, Clone, Default)]
pub struct InputFrame {
    held: Vec<Button>,
    pressed: Vec<Button>,
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a button as currently held (level-triggered)
    pub fn hold(mut self, button: Button) -> Self {
        self.held.push(button);
        self
    }

    /// Mark a button as just pressed this tick (edge-triggered)
    pub fn press(mut self, button: Button) -> Self {
        self.pressed.push(button);
        self
    }

    pub fn is_held(&self, button: Button) -> bool {
        self.held.contains(&button)
    }

    pub fn just_pressed(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }
}

/// Map raw button state to tick intents.
///
/// Pause is edge-triggered; restart and quit are level-triggered. Right
/// paddle movement keys are ignored while the bot drives that paddle. When
/// both directions are held, down wins.
pub fn resolve_intents(frame: &InputFrame, bot: bool) -> TickInput {
    let mut input = TickInput::default();

    if frame.is_held(Button::Quit) {
        input.quit = true;
    }
    if frame.is_held(Button::Restart) {
        input.restart = true;
    }
    if frame.just_pressed(Button::Pause) {
        input.toggle_pause = true;
    }

    if frame.is_held(Button::P1Up) {
        input.left_move = Some(MoveDir::Up);
    }
    if frame.is_held(Button::P1Down) {
        input.left_move = Some(MoveDir::Down);
    }

    if !bot {
        if frame.is_held(Button::P2Up) {
            input.right_move = Some(MoveDir::Up);
        }
        if frame.is_held(Button::P2Down) {
            input.right_move = Some(MoveDir::Down);
        }
    }

    input
}
