//! Session sequencing
//!
//! Owns the progress store and the active level, turns inputs into puzzle
//! moves, and runs the deliberate pauses before reveals on a fixed tick.
//! Never navigates; the host reads `Screen` and events and routes itself.

pub mod state;
pub mod tick;

pub use state::{ActiveLevel, Game, GameEvent, GiftSummary, PendingAction, Screen, Timer};
pub use tick::{GameInput, apply, tick};
