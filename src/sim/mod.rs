//! Deterministic simulation module
//!
//! All gameplay logic lives here. The simulation is a pure function of its
//! state plus the per-tick input intents: fixed timestep only, seeded RNG
//! only, no rendering or platform dependencies.

pub mod bot;
pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{CollisionOutcome, resolve_collisions, speed_effect};
pub use state::{Ball, GamePhase, GameState, Paddle, Side};
pub use tick::{MoveDir, TickInput, TickOutput, tick};
